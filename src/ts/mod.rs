//! Module for TypeScript enum generation from extracted C++ definitions
//!
//! This module contains the symbol transpiler that renames and renders
//! extracted enums, the writer for the generated file, and the serde-backed
//! configuration of the pipeline.

pub mod config;
pub mod generator;
pub mod writer;


pub use config::{Config, ConfigError};
pub use generator::{transpile_enum, ts_enum_name, ts_member_name, TranspiledEnum};
pub use writer::TypeScriptWriter;
