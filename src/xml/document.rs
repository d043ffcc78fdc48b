//! Document text accumulation
//!
//! Renders tree events as tab-indented, line-terminated markup. The builder
//! only appends; the finished text is handed to the writer unchanged.

use crate::metadata::{format_timestamp, CaptureFlags, FileStats, DEFAULT_TIMESTAMP_FORMAT};
use crate::xml::escape::escape;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Line terminator written after every element line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Formatting policy for the document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFormat {
    pub line_ending: LineEnding,
    /// strftime pattern for the timestamp elements
    pub timestamp_format: String,
}

impl Default for DocumentFormat {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Lf,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Append-only builder for the listing markup
#[derive(Debug)]
pub struct DocumentBuilder {
    text: String,
    format: DocumentFormat,
    capture: CaptureFlags,
}

impl DocumentBuilder {
    pub fn new(format: DocumentFormat, capture: CaptureFlags) -> Self {
        Self {
            text: String::new(),
            format,
            capture,
        }
    }

    pub fn open_directory(&mut self, name: &str, depth: i64) {
        self.line(depth, "<directory>");
        self.element(depth + 1, "name", &escape(name));
    }

    pub fn close_directory(&mut self, depth: i64) {
        self.line(depth, "</directory>");
    }

    /// Emit a `<file>` entry inside the directory at `depth`.
    pub fn file(&mut self, name: &str, depth: i64, stats: Option<&FileStats>) {
        self.line(depth + 1, "<file>");
        self.element(depth + 2, "name", &escape(name));

        if let Some(stats) = stats {
            if self.capture.size {
                self.element(depth + 2, "size", &stats.size.to_string());
            }
            if self.capture.created {
                self.timestamp(depth + 2, "created_time", stats.created.as_ref());
            }
            if self.capture.modified {
                self.timestamp(depth + 2, "modified_time", stats.modified.as_ref());
            }
            if self.capture.accessed {
                self.timestamp(depth + 2, "accessed_time", stats.accessed.as_ref());
            }
        }

        self.line(depth + 1, "</file>");
    }

    /// Text accumulated so far
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn finish(self) -> String {
        self.text
    }

    fn timestamp(&mut self, level: i64, tag: &str, value: Option<&DateTime<Local>>) {
        let formatted = value.and_then(|ts| format_timestamp(ts, &self.format.timestamp_format));
        if let Some(formatted) = formatted {
            self.element(level, tag, &escape(&formatted));
        }
    }

    fn element(&mut self, level: i64, tag: &str, content: &str) {
        self.indent(level);
        self.text.push('<');
        self.text.push_str(tag);
        self.text.push('>');
        self.text.push_str(content);
        self.text.push_str("</");
        self.text.push_str(tag);
        self.text.push('>');
        self.text.push_str(self.format.line_ending.as_str());
    }

    fn line(&mut self, level: i64, markup: &str) {
        self.indent(level);
        self.text.push_str(markup);
        self.text.push_str(self.format.line_ending.as_str());
    }

    fn indent(&mut self, level: i64) {
        for _ in 0..level.max(0) {
            self.text.push('\t');
        }
    }
}
