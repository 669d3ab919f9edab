//! # Package Metadata Module
//!
//! The dependency traversal never talks to a package manager directly. It goes
//! through the [`MetadataSource`] trait, which answers one question: "what is
//! the metadata text for this package?". A failed query is an ordinary value
//! ([`FetchFailure`]) rather than a fatal error, so one unknown package never
//! aborts the whole graph.
//!
//! - [`PipShowSource`] runs `python3 -m pip show <name>`
//! - [`parse_requirements`] extracts the `Requires:` list from the returned
//!   text

mod parser;
mod pip;

use std::fmt;

pub use parser::{REQUIRES_MARKER, parse_requirements};
pub use pip::PipShowSource;

/// Reason a single package could not be queried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub package: String,
    pub reason: String,
}

impl FetchFailure {
    pub fn new(package: &str, reason: impl Into<String>) -> Self {
        Self {
            package: package.to_string(),
            reason: reason.into(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to get information about package {}: {}",
            self.package, self.reason
        )
    }
}

/// Source of package metadata text
pub trait MetadataSource {
    /// Query the metadata for `package`, returning the raw multi-line text on
    /// success
    fn fetch_metadata(&self, package: &str) -> Result<String, FetchFailure>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for &T {
    fn fetch_metadata(&self, package: &str) -> Result<String, FetchFailure> {
        (**self).fetch_metadata(package)
    }
}
