//! In-memory course catalog
//!
//! This module manages the lookup table of course records keyed by
//! course number.

use super::course::Course;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Course catalog - the lookup table of all loaded courses.
///
/// Backed by an ordered map so iteration is always in ascending byte-wise
/// order of course number, which is the order every listing uses.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Course records by number
    courses: BTreeMap<String, Course>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            courses: BTreeMap::new(),
        }
    }

    /// Insert a course, replacing any record with the same number
    pub fn insert(&mut self, course: Course) {
        self.courses.insert(course.number.clone(), course);
    }

    /// Get a course by number
    pub fn get(&self, number: &str) -> Result<&Course> {
        self.courses
            .get(number)
            .ok_or_else(|| Error::CourseNotFound(number.to_string()))
    }

    /// Check if a course exists
    pub fn contains(&self, number: &str) -> bool {
        self.courses.contains_key(number)
    }

    /// Number of courses in the catalog
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Is the catalog empty?
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Lazy sequence of (number, title) pairs in ascending course-number
    /// order. Restartable; an empty catalog yields an empty sequence.
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.courses
            .values()
            .map(|c| (c.number.as_str(), c.title.as_str()))
    }

    /// All course numbers in ascending order
    pub fn numbers(&self) -> Vec<String> {
        self.courses.keys().cloned().collect()
    }
}
