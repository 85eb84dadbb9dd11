//! tonekit - colour conversion and OKLCH tint/shade scales
//!
//! HTTP service and CLI around the `tone-engine` library.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
