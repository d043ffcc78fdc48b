//! CLI parse: clap types for xml-listing. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// xml-listing - Write a directory hierarchy as nested XML
#[derive(Parser, Debug)]
#[command(name = "xml-listing", version)]
#[command(about = "Build an XML listing of files that mirrors their directory hierarchy")]
pub struct Cli {
    /// Root directory to walk, or a path-list file with --file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Absolute path of the XML file to write
    #[arg(short, long)]
    pub output: PathBuf,

    /// Treat the input as a newline-delimited list of file paths
    #[arg(short, long)]
    pub file: bool,

    /// Suppress progress lines and the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Include file sizes
    #[arg(short, long)]
    pub size: bool,

    /// Include creation (status change) times
    #[arg(short = 'c', long = "ctime")]
    pub ctime: bool,

    /// Include modification times
    #[arg(short = 'm', long = "mtime")]
    pub mtime: bool,

    /// Include access times
    #[arg(short = 'a', long = "atime")]
    pub atime: bool,

    /// Overwrite an existing output file without asking
    #[arg(long)]
    pub force: bool,

    /// Skip entries with this name while walking (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Maximum walk depth below the root
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Separator, line ending and encoding preset (native, unix, windows)
    #[arg(long, value_parser = ["native", "unix", "windows"])]
    pub convention: Option<String>,

    /// Name the first directory with a doubled separator prefix
    #[arg(long)]
    pub root_prefix: bool,

    /// Summary format (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub summary_format: String,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
