//! Core types and shared functionality for mcp-tw-typhoon.
//!
//! This crate provides:
//! - Suspension records and the per-fetch snapshot
//! - City matching and report formatting
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod report;

pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use matcher::{find_city, match_city, normalize_city};
pub use model::{StatusSnapshot, SuspensionRecord};
pub use report::{format_listing, format_summary};
