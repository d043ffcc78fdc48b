//! Persisting the finished document

use crate::error::ListingError;
use crate::xml::document::LineEnding;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Character encoding declared in (and used for) the output file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    #[default]
    #[serde(rename = "UTF-8", alias = "utf-8", alias = "utf8")]
    Utf8,
    #[serde(rename = "ISO-8859-1", alias = "iso-8859-1", alias = "latin1")]
    Latin1,
}

impl Encoding {
    /// Label written in the XML declaration
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Latin1 => "ISO-8859-1",
        }
    }

    /// Encode document text. Characters outside Latin-1 become numeric
    /// character references so the bytes always match the declared label.
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        match self {
            Encoding::Utf8 => Cow::Borrowed(text.as_bytes()),
            Encoding::Latin1 => {
                let mut bytes = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    let code = u32::from(ch);
                    if code <= 0xFF {
                        bytes.push(code as u8);
                    } else {
                        bytes.extend_from_slice(format!("&#x{code:X};").as_bytes());
                    }
                }
                Cow::Owned(bytes)
            }
        }
    }
}

/// Output options shared by the declaration and the body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub encoding: Encoding,
    pub line_ending: LineEnding,
}

/// XML declaration line, including its line terminator
pub fn declaration(options: &WriteOptions) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"{}\"?>{}",
        options.encoding.label(),
        options.line_ending.as_str()
    )
}

/// Write the declaration and document text to `path`, replacing any existing
/// file.
///
/// The handle is dropped before returning on every path. Failures are
/// reported as [`ListingError::Write`]; retrying is left to the caller.
#[instrument(skip(text, options), fields(path = %path.display(), bytes = text.len()))]
pub fn write_document(path: &Path, text: &str, options: &WriteOptions) -> Result<(), ListingError> {
    let to_write_error = |source: std::io::Error| ListingError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&options.encoding.encode(&declaration(options)))
        .map_err(to_write_error)?;
    writer
        .write_all(&options.encoding.encode(text))
        .map_err(to_write_error)?;
    writer.flush().map_err(to_write_error)?;

    debug!("Document written");
    Ok(())
}
