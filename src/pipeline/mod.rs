//! Driver pipeline for the header to TypeScript converter
//!
//! The pipeline discovers header files under the configured source tree,
//! runs the extractor and transpiler per file, and assembles one combined
//! TypeScript artifact with an auto-generated banner and per-enum
//! provenance markers. Files are processed in sorted path order and enums in
//! first-discovered order; that ordering determines the artifact's byte
//! content and is part of the contract.

use crate::extractor;
use crate::ts::{transpile_enum, Config, TypeScriptWriter};
use crate::ConversionError;
use log::{debug, warn};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

#[cfg(test)]
mod tests;

/// One generated enum, tracked for the summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMapping {
    /// Header path relative to the scanned source directory
    pub source_file: PathBuf,
    /// The C++ enum tag name
    pub source_name: String,
    /// The generated TypeScript enum name
    pub ts_name: String,
}

/// Statistics of a completed run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of header files scanned (readable or not)
    pub headers_scanned: usize,
    /// Number of enums written to the artifact
    pub enums_generated: usize,
    /// Source to target mapping, in artifact order
    pub mappings: Vec<EnumMapping>,
    /// Where the artifact was written
    pub output_file: PathBuf,
}

/// Outcome of a pipeline run that did not fail outright.
///
/// "No headers at all" and "headers but zero enums" are deliberately
/// distinct: the former writes nothing, the latter still writes a
/// banner-only artifact.
#[derive(Debug)]
pub enum RunStatus {
    /// No header files were found; no artifact was written.
    NoHeaders,
    /// The artifact was written, possibly containing zero enums.
    Generated(RunSummary),
}

const BANNER_LINES: [&str; 3] = [
    "// Auto-generated TypeScript enums from C++ headers",
    "// DO NOT EDIT MANUALLY - This file is generated by header_to_ts",
    "// Run 'header_to_ts' to regenerate",
];

/// Run the full discover-extract-transpile-write pipeline.
///
/// Per-file read failures are logged and skipped so one bad header cannot
/// abort the batch. Enums whose bodies yield zero members are silently
/// omitted. Only a failure to write the artifact itself is fatal.
pub fn run(config: &Config) -> Result<RunStatus, ConversionError> {
    let source_dir = config.source_dir_path();
    let headers = discover_headers(&source_dir, config);

    if headers.is_empty() {
        println!("No header files found in {}", source_dir.display());
        return Ok(RunStatus::NoHeaders);
    }

    let mut pieces: Vec<String> = BANNER_LINES.iter().map(|line| line.to_string()).collect();
    pieces.push(String::new());

    let mut summary = RunSummary {
        headers_scanned: headers.len(),
        ..RunSummary::default()
    };

    for header in &headers {
        let relative = header
            .strip_prefix(&source_dir)
            .unwrap_or(header)
            .to_path_buf();
        println!("Processing {}...", relative.display());

        let content = match fs::read_to_string(header) {
            Ok(content) => content,
            Err(err) => {
                warn!("Could not read {}: {}", relative.display(), err);
                println!("  Warning: Could not read {}: {}", relative.display(), err);
                continue;
            }
        };

        let mut file_enum_count = 0;
        for tag in extractor::discover_enum_names(&content) {
            let definition = extractor::extract_enum(&content, &tag);
            if definition.members.is_empty() {
                debug!("Enum `{}` in {} has no members", tag, relative.display());
                continue;
            }

            let transpiled = transpile_enum(&definition);
            pieces.push(format!("// From {}", relative.display()));
            pieces.push(transpiled.body);

            println!("  ✓ {} → {}", tag, transpiled.name);
            summary.mappings.push(EnumMapping {
                source_file: relative.clone(),
                source_name: tag,
                ts_name: transpiled.name,
            });
            file_enum_count += 1;
        }

        if file_enum_count == 0 {
            println!("  No enums found");
        }
    }

    summary.enums_generated = summary.mappings.len();

    let output_file = config.output_file_path();
    let writer = TypeScriptWriter::new(config.create_dirs);
    writer.write_file(&output_file, &pieces.join("\n"))?;
    summary.output_file = output_file;

    Ok(RunStatus::Generated(summary))
}

/// Print the closing count and source-to-target mapping table.
pub fn print_summary(summary: &RunSummary) {
    println!();
    println!("{}", "-".repeat(60));
    println!(
        "Generated {} TypeScript enum(s) in {}",
        summary.enums_generated,
        summary.output_file.display()
    );

    if !summary.mappings.is_empty() {
        println!();
        println!("Enum Mapping Summary:");
        println!(
            "{:<25} → {:<20} {}",
            "C++ Enum", "TypeScript Enum", "Source File"
        );
        println!("{}   {} {}", "-".repeat(25), "-".repeat(20), "-".repeat(30));
        for mapping in &summary.mappings {
            println!(
                "{:<25} → {:<20} {}",
                mapping.source_name,
                mapping.ts_name,
                mapping.source_file.display()
            );
        }
    }
}

/// Collect header files under the source directory, excluding vendored
/// paths, in sorted order.
fn discover_headers(source_dir: &Path, config: &Config) -> Vec<PathBuf> {
    let mut headers: Vec<PathBuf> = WalkDir::new(source_dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable path: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_header_extension(path, &config.header_extensions))
        .filter(|path| !is_vendored(path, &config.vendor_dirs))
        .collect();

    headers.sort();
    headers
}

fn has_header_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|candidate| candidate == ext))
        .unwrap_or(false)
}

fn is_vendored(path: &Path, vendor_dirs: &[String]) -> bool {
    path.components().any(|component| match component {
        Component::Normal(segment) => segment
            .to_str()
            .map(|segment| vendor_dirs.iter().any(|vendor| vendor == segment))
            .unwrap_or(false),
        _ => false,
    })
}
