//! Extractor module for the header to TypeScript converter
//!
//! This module locates `typedef enum` blocks in raw header text and
//! decomposes each into an ordered list of members with their optional value
//! expressions and trailing comments.
//!
//! Parsing is line-oriented pattern matching, not a real C grammar. That is
//! adequate for the supported dialect only: one member per line, no nested
//! braces inside the enum body, no preprocessor conditionals, no multi-line
//! value expressions. Unsupported shapes simply yield fewer (or zero)
//! members instead of an error.

pub mod ast;


use ast::{EnumDefinition, EnumMember};
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

lazy_static! {
    static ref ENUM_DECL_RE: Regex = Regex::new(r"typedef\s+enum\s+(\w+)\s*\{").unwrap();
}

/// Discover the tag names of all `typedef enum` declarations in a file.
///
/// Names are returned in order of appearance. Each name can subsequently be
/// passed to [`extract_enum`] to obtain its members.
pub fn discover_enum_names(content: &str) -> Vec<String> {
    ENUM_DECL_RE
        .captures_iter(content)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Extract the members of the named enum from raw header text.
///
/// Returns an [`EnumDefinition`] with zero members when the text contains no
/// block for `enum_name`; a missing enum is a legitimate "nothing found"
/// result, not an error.
///
/// Members whose names end in `_MIN` or `_MAX` are boundary sentinels used
/// for range checks in the firmware and are dropped here, before any
/// renaming happens. A duplicated member name keeps its first occurrence
/// (name, value, comment and position); later occurrences are logged and
/// discarded.
pub fn extract_enum(content: &str, enum_name: &str) -> EnumDefinition {
    let mut definition = EnumDefinition::new(enum_name);

    let pattern = format!(
        r"typedef\s+enum\s+{}\s*\{{([^}}]+)\}}",
        regex::escape(enum_name)
    );
    let block_re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(err) => {
            warn!("Failed to build block pattern for `{}`: {}", enum_name, err);
            return definition;
        }
    };

    let body = match block_re.captures(content) {
        Some(captures) => captures.get(1).map_or("", |m| m.as_str()),
        None => {
            debug!("No enum block found for `{}`", enum_name);
            return definition;
        }
    };

    for raw_line in body.lines() {
        let mut line = raw_line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        // Split off a trailing line comment, if any.
        let mut comment = None;
        if let Some(pos) = line.find("//") {
            let text = line[pos + 2..].trim();
            if !text.is_empty() {
                comment = Some(text.to_string());
            }
            line = line[..pos].trim();
        }

        let line = line.strip_suffix(',').unwrap_or(line).trim();

        let (name, value) = match line.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim().to_string())),
            None => (line, None),
        };

        if name.is_empty() || name.starts_with('}') {
            continue;
        }

        // Boundary sentinels never reach the output.
        if name.ends_with("_MIN") || name.ends_with("_MAX") {
            debug!("Skipping boundary sentinel `{}` in `{}`", name, enum_name);
            continue;
        }

        if definition.contains_member(name) {
            warn!(
                "Duplicate member `{}` in enum `{}`; keeping the first occurrence",
                name, enum_name
            );
            continue;
        }

        definition.members.push(EnumMember {
            name: name.to_string(),
            value,
            comment,
        });
    }

    definition
}
