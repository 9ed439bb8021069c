//! C++ Header to TypeScript Enum Converter
//!
//! This library scans C++ header text for `typedef enum` definitions and
//! generates matching TypeScript `export enum` declarations. It includes a
//! line-oriented extractor for a constrained header dialect, a symbol
//! transpiler that converts C++ naming conventions into TypeScript ones, and
//! a pipeline that combines the enums of many headers into a single
//! generated file.
//!
//! The supported dialect is deliberately narrow: one member per line, no
//! preprocessor expansion, no nested or anonymous enums, and value
//! expressions are copied verbatim rather than evaluated.

use std::error::Error;
use std::fmt;

pub mod extractor;
pub mod hook;
pub mod pipeline;
pub mod ts;

/// Errors that can occur during the conversion process
///
/// Per-file read problems are tolerated inside the pipeline and never
/// surface here; only a failure to write the combined artifact is fatal.
#[derive(Debug)]
pub enum ConversionError {
    FileWriteError(std::io::Error),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::FileWriteError(err) => write!(f, "File write error: {}", err),
        }
    }
}

impl Error for ConversionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConversionError::FileWriteError(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::FileWriteError(err)
    }
}

/// Convert all enums found in a single header text to TypeScript declarations.
///
/// This is a convenience wrapper around the extractor and transpiler for
/// callers that already hold the header content in memory. Enums without any
/// surviving members are omitted, matching the behavior of the full pipeline.
///
/// # Arguments
///
/// * `content` - The raw text of one C++ header file
///
/// # Returns
///
/// The concatenated TypeScript declarations, one blank line between enums.
/// Returns an empty string if the text contains no convertible enums.
pub fn convert_header_to_ts(content: &str) -> String {
    let mut declarations = Vec::new();

    for tag in extractor::discover_enum_names(content) {
        let definition = extractor::extract_enum(content, &tag);
        if definition.members.is_empty() {
            continue;
        }
        declarations.push(ts::transpile_enum(&definition).body);
    }

    declarations.join("\n")
}
