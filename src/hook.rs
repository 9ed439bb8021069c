//! Build-hook integration
//!
//! Host build systems that want the TypeScript enums regenerated as a
//! pre-build step call [`run_prebuild_hook`] with their project root. The
//! hook is an explicit opt-in entry point; nothing registers itself
//! automatically. Enum generation is a convenience, not a build-correctness
//! gate, so every failure inside the hook is downgraded to a warning and the
//! host build continues.

use crate::pipeline::{self, RunStatus};
use crate::ts::Config;
use log::warn;
use std::path::Path;

/// Run the full pipeline for the given project root, swallowing failures.
///
/// Returns `true` when an artifact was generated, `false` otherwise. The
/// return value is informational only; callers integrating this as a
/// pre-build step should not fail their build on `false`.
pub fn run_prebuild_hook<P: AsRef<Path>>(project_root: P) -> bool {
    println!("{}", "=".repeat(50));
    println!("Generating TypeScript enums from C++ headers...");
    println!("{}", "=".repeat(50));

    let config = Config::for_project_dir(project_root);
    match pipeline::run(&config) {
        Ok(RunStatus::Generated(summary)) => {
            pipeline::print_summary(&summary);
            println!("✓ TypeScript enums generated successfully");
            true
        }
        Ok(RunStatus::NoHeaders) => {
            println!("✗ Failed to generate enums");
            false
        }
        Err(err) => {
            warn!("Error running enum generation: {}", err);
            println!("✗ Error running enum generation: {}", err);
            false
        }
    }
}
