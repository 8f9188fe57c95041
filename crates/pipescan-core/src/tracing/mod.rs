//! Observability for pipescan.
//! `tracing` crate with `EnvFilter`, per-target log levels.

pub mod setup;

pub use setup::{init_tracing, level_directive};
