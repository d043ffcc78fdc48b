//! CLI domain: parse, route, prompts, output, and presentation only.
//! The route runs the listing pipeline; everything here is terminal plumbing.

mod output;
mod parse;
mod presentation;
mod prompt;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::{format_summary_json, format_summary_text, format_warnings, RunSummary};
pub use prompt::{Prompt, TerminalPrompt};
pub use route::RunContext;
