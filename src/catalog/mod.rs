//! Catalog module
//!
//! This module contains the course catalog and its record type.

pub mod catalog;
pub mod course;

pub use catalog::Catalog;
pub use course::Course;
