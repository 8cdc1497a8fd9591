//! MCP tool implementations.
//!
//! This module contains all tools exposed by the mcp-tw-typhoon server.

pub mod check_suspension;
pub mod list_suspensions;

pub use check_suspension::{CheckSuspensionParams, check_impl};
pub use list_suspensions::list_impl;
