//! pipescan-core: shared foundations for the pipescan metadata scanner.
//!
//! - Errors: one `thiserror` enum per subsystem, aggregated by `PipelineError`
//! - Config: TOML-based, layered resolution (CLI > env > project > defaults)
//! - Tracing: `tracing-subscriber` setup with `EnvFilter`
//! - Types: collection aliases used across crates

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{CliOverrides, PipescanConfig};
pub use errors::{PipelineError, PipelineResult};
