//! Vellum Core
//!
//! Shared building blocks for the Vellum crates: logging bootstrap,
//! configuration and small geometry value types.

pub mod config;
pub mod geometry;
pub mod logging;

pub use config::Config;
pub use geometry::Size;
