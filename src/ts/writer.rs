use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;

/// Writer for the generated TypeScript file
pub struct TypeScriptWriter {
    /// Whether to create parent directories if they don't exist
    create_dirs: bool,
}

/// Result type for writer operations
pub type WriterResult<T> = Result<T, io::Error>;

impl TypeScriptWriter {
    /// Create a new TypeScriptWriter
    pub fn new(create_dirs: bool) -> Self {
        TypeScriptWriter { create_dirs }
    }

    /// Write the generated content to the given path, fully replacing any
    /// previous artifact.
    pub fn write_file<P: AsRef<Path>>(&self, path: P, content: &str) -> WriterResult<()> {
        let path = path.as_ref();

        if self.create_dirs {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
        }

        debug!("Writing file: {}", path.display());
        fs::write(path, content)?;
        info!("Successfully wrote file: {}", path.display());

        Ok(())
    }
}
