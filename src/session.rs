//! Session state for the interactive shell
//!
//! The catalog and its loaded flag live here, owned by the shell and passed
//! by reference into loader and browser operations. Constructed empty at
//! startup, replaced wholesale on each successful load, torn down at exit.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::loader::{self, LoadStats};
use std::path::Path;
use tracing::info;

/// Per-process session: the catalog plus the loaded flag gating browsing
#[derive(Debug, Default)]
pub struct Session {
    catalog: Catalog,
    loaded: bool,
}

impl Session {
    /// Create a new session with an empty, not-yet-loaded catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load courses from `path`, replacing the catalog wholesale.
    ///
    /// All-or-nothing: the new catalog is built first and swapped in only on
    /// success, so any failure leaves prior contents (and the loaded flag)
    /// untouched. Reloading is permitted and idempotent.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadStats> {
        let (catalog, stats) = loader::load_path(path)?;
        self.catalog = catalog;
        self.loaded = true;

        info!(
            path = %path.display(),
            courses = stats.loaded,
            "catalog replaced"
        );
        Ok(stats)
    }

    /// Has a load succeeded this session?
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The catalog, for browsing. Fails with [`Error::NotLoaded`] before the
    /// first successful load; no catalog access happens on that path.
    pub fn catalog(&self) -> Result<&Catalog> {
        if self.loaded {
            Ok(&self.catalog)
        } else {
            Err(Error::NotLoaded)
        }
    }
}
