//! Courseplan - an interactive course catalog planner written in Rust
//!
//! This library provides the core components for the course planner:
//! - Catalog loader (data file discovery, comma-separated row parsing)
//! - Course catalog (in-memory lookup table keyed by course number)
//! - Session state (catalog + loaded flag owned by the shell)
//! - Interactive menu shell

pub mod catalog;
pub mod error;
pub mod loader;
pub mod session;
pub mod shell;

pub use error::{Error, Result};
