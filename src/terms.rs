//! Term list loading.
//!
//! The term list is a static, pre-shuffled list of place names read once at
//! startup. Every source shares one list behind an `Arc` and never mutates
//! it; the only per-call variation is a synthetic cache-buster token appended
//! to a copy of the list.

use std::path::Path;

use crate::error::{Error, Result};

/// Immutable list of query terms loaded from a text file.
///
/// One term per line, trimmed; empty lines are skipped. Loading a file that
/// yields zero terms is a startup error rather than a source that issues
/// degenerate queries forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermList {
    terms: Vec<String>,
}

impl TermList {
    /// Load a term list from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TermsIo`] if the file cannot be read and
    /// [`Error::EmptyTermList`] if it contains no non-empty lines.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::TermsIo {
            path: path.to_path_buf(),
            source,
        })?;

        let terms: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if terms.is_empty() {
            return Err(Error::EmptyTermList {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(
            target: "termsource::terms",
            path = %path.display(),
            terms = terms.len(),
            "loaded term list"
        );

        Ok(TermList { terms })
    }

    /// Build a term list from terms already in memory.
    pub fn from_terms(terms: Vec<String>) -> Self {
        TermList { terms }
    }

    /// Number of terms in the list.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The terms, in file order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Copy of the list with one synthetic token appended.
    ///
    /// The token differs between calls, so the engine cannot serve the query
    /// from its request cache.
    pub fn terms_with_cache_buster(&self, token: String) -> Vec<String> {
        let mut copy = Vec::with_capacity(self.terms.len() + 1);
        copy.extend_from_slice(&self.terms);
        copy.push(token);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_terms(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_basic() {
        let file = write_terms("Lake Tahoe\nSierra de Gata\nMont Blanc\n");
        let list = TermList::load(file.path()).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.terms()[0], "Lake Tahoe");
        assert_eq!(list.terms()[2], "Mont Blanc");
    }

    #[test]
    fn test_load_trims_and_skips_empty_lines() {
        let file = write_terms("  Ben Nevis  \n\n   \nAconcagua\n");
        let list = TermList::load(file.path()).unwrap();
        assert_eq!(list.terms(), &["Ben Nevis", "Aconcagua"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = TermList::load("/nonexistent/terms.txt").unwrap_err();
        assert!(matches!(err, Error::TermsIo { .. }));
    }

    #[test]
    fn test_load_empty_file() {
        let file = write_terms("");
        let err = TermList::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::EmptyTermList { .. }));
    }

    #[test]
    fn test_load_whitespace_only_file() {
        let file = write_terms("   \n\t\n  \n");
        let err = TermList::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::EmptyTermList { .. }));
    }

    #[test]
    fn test_cache_buster_appends_without_mutating() {
        let list = TermList::from_terms(vec!["Oslo".to_string(), "Bergen".to_string()]);
        let with_buster = list.terms_with_cache_buster("42".to_string());

        assert_eq!(with_buster, vec!["Oslo", "Bergen", "42"]);
        // Original list untouched.
        assert_eq!(list.terms(), &["Oslo", "Bergen"]);
    }

    #[test]
    fn test_fixture_term_list_loads() {
        let list = TermList::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/terms.txt")).unwrap();
        assert!(!list.is_empty());
    }
}
