//! Configuration module
//!
//! Settings for the directory source and table display, persisted as
//! TOML in the platform config directory.

pub mod config;
