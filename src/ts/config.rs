use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Configuration for the enum generation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Project root; all other paths are resolved relative to it
    #[serde(default = "default_project_dir")]
    pub project_dir: String,

    /// Subdirectory of the project root scanned for header files
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// Path of the generated TypeScript file, relative to the project root
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// File extensions treated as headers (without the leading dot)
    #[serde(default = "default_header_extensions")]
    pub header_extensions: Vec<String>,

    /// Path components treated as vendored libraries and skipped entirely
    #[serde(default = "default_vendor_dirs")]
    pub vendor_dirs: Vec<String>,

    /// Whether to create output directories if they don't exist
    #[serde(default = "default_true")]
    pub create_dirs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project_dir: default_project_dir(),
            source_dir: default_source_dir(),
            output_file: default_output_file(),
            header_extensions: default_header_extensions(),
            vendor_dirs: default_vendor_dirs(),
            create_dirs: default_true(),
        }
    }
}

// Default helper functions
fn default_project_dir() -> String {
    ".".to_string()
}

fn default_source_dir() -> String {
    "src".to_string()
}

fn default_output_file() -> String {
    "interface/src/lib/types/enums.ts".to_string()
}

fn default_header_extensions() -> Vec<String> {
    vec!["h".to_string()]
}

fn default_vendor_dirs() -> Vec<String> {
    vec!["lib".to_string()]
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Create a configuration for the given project root, with every other
    /// setting at its default.
    pub fn for_project_dir<P: AsRef<Path>>(project_dir: P) -> Self {
        Config {
            project_dir: project_dir.as_ref().to_string_lossy().into_owned(),
            ..Config::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    /// Get the directory scanned for headers
    pub fn source_dir_path(&self) -> PathBuf {
        Path::new(&self.project_dir).join(&self.source_dir)
    }

    /// Get the full path of the generated TypeScript file
    pub fn output_file_path(&self) -> PathBuf {
        Path::new(&self.project_dir).join(&self.output_file)
    }
}

/// Error type for configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
