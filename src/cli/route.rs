//! CLI route: validates arguments, runs the listing pipeline, and handles the
//! overwrite and retry prompts.

use crate::cli::parse::Cli;
use crate::cli::presentation::{format_summary_json, format_summary_text, format_warnings, RunSummary};
use crate::cli::prompt::{Prompt, TerminalPrompt};
use crate::config::{Convention, ListingConfig};
use crate::error::ApiError;
use crate::listing::{self, PathSource, ProgressObserver, SilentObserver};
use crate::metadata::CaptureFlags;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Prints one line per discovered path.
struct ConsoleObserver;

impl ProgressObserver for ConsoleObserver {
    fn path_discovered(&mut self, path: &str) {
        println!("Adding file: {}", path);
    }
}

/// Runtime context for CLI execution: merged configuration and the prompt used
/// for interactive decisions.
pub struct RunContext {
    config: ListingConfig,
    prompt: Box<dyn Prompt>,
}

impl RunContext {
    /// Create a run context that asks questions on the terminal.
    pub fn new(config: ListingConfig) -> Self {
        Self::with_prompt(config, Box::new(TerminalPrompt))
    }

    pub fn with_prompt(config: ListingConfig, prompt: Box<dyn Prompt>) -> Self {
        Self { config, prompt }
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    /// Run one listing. Returns the summary to print (empty in quiet mode).
    pub fn execute(&self, cli: &Cli) -> Result<String, ApiError> {
        let started = Instant::now();
        let config = self.effective_config(cli)?;
        config.ensure_valid()?;

        let input = validate_input(&cli.input, cli.file)?;
        validate_output(&cli.output)?;

        if cli.output.exists() && !cli.force {
            let question = format!("{} already exists. Overwrite?", cli.output.display());
            if !self.prompt.confirm(&question)? {
                return Err(ApiError::Aborted(format!(
                    "{} was not overwritten (use --force to skip this question)",
                    cli.output.display()
                )));
            }
        }

        let source = if cli.file {
            PathSource::ListFile(input)
        } else {
            PathSource::Walk {
                root: input,
                config: config.walk.clone(),
            }
        };

        let paths = if cli.quiet {
            listing::enumerate(&source, &mut SilentObserver)?
        } else {
            listing::enumerate(&source, &mut ConsoleObserver)?
        };

        let capture = CaptureFlags {
            size: cli.size,
            created: cli.ctime,
            modified: cli.mtime,
            accessed: cli.atime,
        };
        let mut options = config.build_options(capture);
        if let Some(separator) = source.fixed_separator() {
            if separator != options.style.separator {
                debug!(
                    configured = %options.style.separator,
                    used = %separator,
                    "Walked paths use the host separator"
                );
            }
            options.style.separator = separator;
        }
        let report = listing::build(&paths, &options)?;
        self.write_with_retry(&report, &cli.output, &config)?;

        if !report.warnings.is_empty() {
            eprintln!("{}", format_warnings(&report.warnings));
        }

        let summary = RunSummary {
            output: cli.output.clone(),
            file_count: report.file_count,
            warning_count: report.warnings.len(),
            elapsed_seconds: started.elapsed().as_secs_f64(),
        };
        info!(
            output = %summary.output.display(),
            file_count = summary.file_count,
            "Listing written"
        );

        if cli.quiet {
            return Ok(String::new());
        }
        Ok(match cli.summary_format.as_str() {
            "json" => format_summary_json(&summary),
            _ => format_summary_text(&summary),
        })
    }

    /// Layer command-line overrides on top of the loaded configuration.
    fn effective_config(&self, cli: &Cli) -> Result<ListingConfig, ApiError> {
        let mut config = self.config.clone();

        if let Some(convention) = cli.convention.as_deref() {
            config.format.convention = parse_convention(convention)?;
        }
        if cli.root_prefix {
            config.format.root_prefix = true;
        }
        config.walk.ignore_patterns.extend(cli.exclude.iter().cloned());
        if cli.max_depth.is_some() {
            config.walk.max_depth = cli.max_depth;
        }
        if cli.follow_symlinks {
            config.walk.follow_symlinks = true;
        }

        Ok(config)
    }

    fn write_with_retry(
        &self,
        report: &listing::BuildReport,
        output: &Path,
        config: &ListingConfig,
    ) -> Result<(), ApiError> {
        let options = config.format.write_options();
        loop {
            match listing::serialize(report, output, &options) {
                Ok(()) => return Ok(()),
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, "Write failed");
                    let question = format!("{}. Try again?", e);
                    if !self.prompt.confirm(&question)? {
                        return Err(ApiError::Aborted(format!(
                            "{} was not written",
                            output.display()
                        )));
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn parse_convention(value: &str) -> Result<Convention, ApiError> {
    match value {
        "native" => Ok(Convention::Native),
        "unix" => Ok(Convention::Unix),
        "windows" => Ok(Convention::Windows),
        other => Err(ApiError::InvalidInput(format!(
            "Unknown convention: {} (must be native, unix, or windows)",
            other
        ))),
    }
}

/// Check the input exists with the right kind. Walk roots are made absolute.
pub(crate) fn validate_input(input: &Path, list_file: bool) -> Result<PathBuf, ApiError> {
    if !input.exists() {
        return Err(ApiError::InvalidInput(format!(
            "{} does not exist",
            input.display()
        )));
    }
    if list_file {
        if !input.is_file() {
            return Err(ApiError::InvalidInput(format!(
                "{} is not a file",
                input.display()
            )));
        }
        return Ok(input.to_path_buf());
    }
    if !input.is_dir() {
        return Err(ApiError::InvalidInput(format!(
            "{} is not a directory (pass --file for a path list)",
            input.display()
        )));
    }
    dunce::canonicalize(input).map_err(|e| {
        ApiError::InvalidInput(format!("Failed to resolve {}: {}", input.display(), e))
    })
}

/// Output must be an absolute path ending in `.xml` (any case).
pub(crate) fn validate_output(output: &Path) -> Result<(), ApiError> {
    if !output.is_absolute() {
        return Err(ApiError::InvalidInput(format!(
            "Output path must be absolute: {}",
            output.display()
        )));
    }
    let is_xml = output
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("xml"))
        .unwrap_or(false);
    if !is_xml {
        return Err(ApiError::InvalidInput(format!(
            "Output file must end in .xml: {}",
            output.display()
        )));
    }
    Ok(())
}
