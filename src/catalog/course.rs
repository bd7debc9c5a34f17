//! Course record definitions
//!
//! This module defines the course record stored in the catalog.

/// A single course: number, display title, ordered prerequisite numbers.
///
/// Prerequisites are kept in their original file order and are never
/// validated against the catalog; an absent prerequisite simply displays
/// as a bare course number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Course number (unique key, case-sensitive as given)
    pub number: String,
    /// Display title
    pub title: String,
    /// Prerequisite course numbers in file order
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Create a new course with no prerequisites
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Set the prerequisite list
    pub fn with_prerequisites(mut self, prerequisites: Vec<String>) -> Self {
        self.prerequisites = prerequisites;
        self
    }

    /// Does this course have any prerequisites?
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}
