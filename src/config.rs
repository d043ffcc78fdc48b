//! Configuration System
//!
//! Layered configuration for output formatting, metadata capture, walking and
//! logging. Sources are merged by the `config` crate (defaults, global file,
//! explicit file, environment) and deserialized into [`ListingConfig`].

use crate::error::ApiError;
use crate::listing::BuildOptions;
use crate::logging::LoggingConfig;
use crate::metadata::{is_valid_timestamp_format, CaptureFlags, DEFAULT_TIMESTAMP_FORMAT};
use crate::tree::path::PathStyle;
use crate::tree::walker::WalkerConfig;
use crate::xml::document::{DocumentFormat, LineEnding};
use crate::xml::writer::{Encoding, WriteOptions};
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Output formatting policy
    #[serde(default)]
    pub format: FormatConfig,

    /// Metadata captured by default (CLI flags add to these)
    #[serde(default)]
    pub capture: CaptureFlags,

    /// Directory walk settings
    #[serde(default)]
    pub walk: WalkerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Platform convention presets for separator, line ending and encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Whatever the host platform uses
    #[default]
    Native,
    Unix,
    Windows,
}

impl Convention {
    /// Resolve `Native` to a concrete convention
    pub fn resolve(self) -> Convention {
        match self {
            Convention::Native if cfg!(windows) => Convention::Windows,
            Convention::Native => Convention::Unix,
            other => other,
        }
    }

    pub fn separator(self) -> char {
        match self.resolve() {
            Convention::Windows => '\\',
            _ => '/',
        }
    }

    pub fn line_ending(self) -> LineEnding {
        match self.resolve() {
            Convention::Windows => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn encoding(self) -> Encoding {
        match self.resolve() {
            Convention::Windows => Encoding::Latin1,
            _ => Encoding::Utf8,
        }
    }
}

/// Output formatting configuration. Unset fields fall back to the convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default)]
    pub convention: Convention,

    #[serde(default)]
    pub line_ending: Option<LineEnding>,

    /// Single-character path separator
    #[serde(default)]
    pub separator: Option<String>,

    #[serde(default)]
    pub encoding: Option<Encoding>,

    /// Name the first directory `<sep><sep><segment>`
    #[serde(default)]
    pub root_prefix: bool,

    /// strftime pattern for timestamp elements
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            convention: Convention::default(),
            line_ending: None,
            separator: None,
            encoding: None,
            root_prefix: false,
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl FormatConfig {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(separator) = &self.separator {
            if separator.chars().count() != 1 {
                return Err(format!(
                    "Separator must be exactly one character, got {:?}",
                    separator
                ));
            }
        }
        if !is_valid_timestamp_format(&self.timestamp_format) {
            return Err(format!(
                "Invalid timestamp format: {:?}",
                self.timestamp_format
            ));
        }
        Ok(())
    }

    pub fn separator(&self) -> char {
        self.separator
            .as_deref()
            .and_then(|s| s.chars().next())
            .unwrap_or_else(|| self.convention.separator())
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
            .unwrap_or_else(|| self.convention.line_ending())
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding.unwrap_or_else(|| self.convention.encoding())
    }

    pub fn path_style(&self) -> PathStyle {
        PathStyle {
            separator: self.separator(),
            root_prefix: self.root_prefix,
        }
    }

    pub fn document_format(&self) -> DocumentFormat {
        DocumentFormat {
            line_ending: self.line_ending(),
            timestamp_format: self.timestamp_format.clone(),
        }
    }

    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            encoding: self.encoding(),
            line_ending: self.line_ending(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Format(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Format(msg) => write!(f, "Format: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ListingConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.format.validate() {
            errors.push(ValidationError::Format(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold the collected errors into one [`ApiError`].
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// Build-stage options; `extra_capture` is OR-ed into the configured flags.
    pub fn build_options(&self, extra_capture: CaptureFlags) -> BuildOptions {
        BuildOptions {
            style: self.format.path_style(),
            format: self.format.document_format(),
            capture: self.capture.union(extra_capture),
            cancel: None,
        }
    }
}
