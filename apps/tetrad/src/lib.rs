//! # Tetrad Library
//!
//! This library exposes the Tetrad app modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod plugin;

// Re-export tetrad_core for convenience
pub use tetrad_core;
