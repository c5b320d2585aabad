//! Parsing and validation of `tbgen.toml` bench description files.
//!
//! This crate reads a bench file into a strongly-typed [`BenchConfig`] and
//! resolves it into the immutable [`GeneratorConfig`](tbgen_testbench::GeneratorConfig)
//! consumed by the generator.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, validate_config, CONFIG_FILE_NAME};
pub use resolve::resolve;
pub use types::*;
