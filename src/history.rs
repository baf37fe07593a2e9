//! Disallowed values management
//!
//! A candidate can be rejected because it appears in a fixed list of
//! forbidden strings or because an application-level store (for example a
//! hashed password history) reports it as previously used.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::DisallowedListError;

/// Environment variable holding the path of a newline-delimited disallowed list.
pub const DISALLOWED_PATH_ENV: &str = "PLEXITY_DISALLOWED_PATH";

const DEFAULT_DISALLOWED_PATH: &str = "./assets/disallowed.txt";

/// A lookup into an external password history.
///
/// Implementations receive the raw candidate; hashing or normalizing it
/// before comparison is up to the implementation.
pub trait HistoryStore: Send + Sync {
    /// Returns `true` when `candidate` is disallowed.
    fn check_history(&self, candidate: &str) -> bool;
}

impl<F> HistoryStore for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn check_history(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// An explicit set of forbidden strings, matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisallowedList {
    entries: HashSet<String>,
}

impl DisallowedList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads the list from the path in `PLEXITY_DISALLOWED_PATH`, falling back
    /// to `./assets/disallowed.txt`.
    pub fn from_env() -> Result<Self, DisallowedListError> {
        Self::from_path(disallowed_list_path())
    }

    /// Loads a newline-delimited list from `path`.
    ///
    /// Each line is trimmed and blank lines are skipped. Entries keep their
    /// case: matching is exact.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DisallowedListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Disallowed list loading FAILED: FileNotFound {:?}", path);
            return Err(DisallowedListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Disallowed list loading FAILED: Empty file {:?}", path);
            return Err(DisallowedListError::EmptyFile);
        }

        let list = Self::new(content.lines().map(str::trim).filter(|l| !l.is_empty()));

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Disallowed list loaded: {} entries from {:?}",
            list.len(),
            path
        );

        Ok(list)
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the disallowed list file path.
///
/// Priority:
/// 1. Environment variable `PLEXITY_DISALLOWED_PATH`
/// 2. Default path `./assets/disallowed.txt`
pub fn disallowed_list_path() -> PathBuf {
    std::env::var(DISALLOWED_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DISALLOWED_PATH))
}

/// Where the not-in rule looks candidates up.
#[derive(Clone)]
pub enum DisallowedSource {
    List(DisallowedList),
    Store(Arc<dyn HistoryStore>),
}

impl DisallowedSource {
    /// Wraps an external history store.
    pub fn store<S: HistoryStore + 'static>(store: S) -> Self {
        DisallowedSource::Store(Arc::new(store))
    }

    /// Returns `true` when the source rejects `candidate`.
    pub fn contains(&self, candidate: &str) -> bool {
        match self {
            DisallowedSource::List(list) => list.contains(candidate),
            DisallowedSource::Store(store) => store.check_history(candidate),
        }
    }
}

impl fmt::Debug for DisallowedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisallowedSource::List(list) => f.debug_tuple("List").field(list).finish(),
            DisallowedSource::Store(_) => f.write_str("Store(..)"),
        }
    }
}

impl From<DisallowedList> for DisallowedSource {
    fn from(list: DisallowedList) -> Self {
        DisallowedSource::List(list)
    }
}

impl From<Arc<dyn HistoryStore>> for DisallowedSource {
    fn from(store: Arc<dyn HistoryStore>) -> Self {
        DisallowedSource::Store(store)
    }
}

impl From<HashSet<String>> for DisallowedSource {
    fn from(entries: HashSet<String>) -> Self {
        DisallowedSource::List(DisallowedList { entries })
    }
}

impl From<Vec<String>> for DisallowedSource {
    fn from(entries: Vec<String>) -> Self {
        DisallowedSource::List(DisallowedList::new(entries))
    }
}

impl From<Vec<&str>> for DisallowedSource {
    fn from(entries: Vec<&str>) -> Self {
        DisallowedSource::List(DisallowedList::new(entries))
    }
}

impl From<&[&str]> for DisallowedSource {
    fn from(entries: &[&str]) -> Self {
        DisallowedSource::List(DisallowedList::new(entries.iter().copied()))
    }
}

impl<const N: usize> From<[&str; N]> for DisallowedSource {
    fn from(entries: [&str; N]) -> Self {
        DisallowedSource::List(DisallowedList::new(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are #[serial]
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are #[serial]
        unsafe {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_disallowed_list_path_default() {
        remove_env(DISALLOWED_PATH_ENV);

        let path = disallowed_list_path();
        assert_eq!(path, PathBuf::from("./assets/disallowed.txt"));
    }

    #[test]
    #[serial]
    fn test_disallowed_list_path_from_env() {
        let custom_path = "/custom/path/disallowed.txt";
        set_env(DISALLOWED_PATH_ENV, custom_path);

        let path = disallowed_list_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env(DISALLOWED_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_file_not_found() {
        set_env(DISALLOWED_PATH_ENV, "/nonexistent/path/disallowed.txt");

        let result = DisallowedList::from_env();
        match result {
            Err(DisallowedListError::FileNotFound(p)) => {
                assert_eq!(p, PathBuf::from("/nonexistent/path/disallowed.txt"));
            }
            other => panic!("Expected FileNotFound error, got {other:?}"),
        }

        remove_env(DISALLOWED_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_success() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Example2").expect("Failed to write");
        writeln!(temp_file, "An3xampl3").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env(DISALLOWED_PATH_ENV, path);

        let list = DisallowedList::from_env().expect("list should load");
        assert_eq!(list.len(), 2);
        assert!(list.contains("An3xampl3"));

        remove_env(DISALLOWED_PATH_ENV);
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n\n").expect("Failed to write");

        let result = DisallowedList::from_path(temp_file.path());
        assert!(matches!(result, Err(DisallowedListError::EmptyFile)));
    }

    #[test]
    fn test_from_path_trims_and_skips_blank_lines() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "  Password  ").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");
        writeln!(temp_file, "R0seBu9").expect("Failed to write");
        writeln!(temp_file, "R0seBu9").expect("Failed to write");

        let list = DisallowedList::from_path(temp_file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("Password"));
        assert!(list.contains("R0seBu9"));
    }

    #[test]
    fn test_list_matching_is_exact() {
        let list = DisallowedList::new(["Password"]);
        assert!(list.contains("Password"));
        assert!(!list.contains("password"));
        assert!(!list.contains("Password "));
        assert!(!list.contains("Pass"));
    }

    #[test]
    fn test_source_from_static_entries() {
        let source = DisallowedSource::from(vec!["Example2", "An3xampl3"]);
        assert!(matches!(source, DisallowedSource::List(_)));
        assert!(source.contains("Example2"));
        assert!(!source.contains("Example3"));

        let source = DisallowedSource::from(["one"]);
        assert!(source.contains("one"));
    }

    #[test]
    fn test_source_delegates_to_store() {
        let source = DisallowedSource::store(|candidate: &str| candidate.len() == 3);
        assert!(matches!(source, DisallowedSource::Store(_)));
        assert!(source.contains("abc"));
        assert!(!source.contains("abcd"));
    }

    #[test]
    fn test_store_receives_raw_candidate() {
        let source = DisallowedSource::store(|candidate: &str| candidate == "  Raw Value ");
        assert!(source.contains("  Raw Value "));
        assert!(!source.contains("Raw Value"));
    }

    #[test]
    fn test_source_debug_hides_store() {
        let source = DisallowedSource::store(|_: &str| false);
        assert_eq!(format!("{source:?}"), "Store(..)");
    }
}
