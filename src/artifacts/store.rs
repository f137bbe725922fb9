//! Process-wide, lazily-initialized artifact cache.

use std::path::PathBuf;
use std::sync::OnceLock;

use super::{LoadOutcome, default_candidates, load_pair};

/// Holder for the one-shot artifact load.
///
/// The first access performs the disk search; every later access returns
/// the cached outcome without touching disk. Constructed once at startup
/// and injected into the controller instead of living as a module-level
/// global. `OnceLock` makes a racing first load harmless.
#[derive(Debug, Default)]
pub struct ArtifactStore {
    outcome: OnceLock<LoadOutcome>,
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self {
            outcome: OnceLock::new(),
        }
    }

    /// Load from the default candidate directories, once.
    pub fn get_or_load(&self) -> &LoadOutcome {
        self.get_or_load_from(&default_candidates())
    }

    /// Load from explicit candidate directories, once. After the first
    /// call the cached outcome wins and `candidates` is ignored.
    pub fn get_or_load_from(&self, candidates: &[PathBuf]) -> &LoadOutcome {
        self.outcome.get_or_init(|| load_pair(candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_is_cached_across_calls() {
        let store = ArtifactStore::new();
        let missing = vec![PathBuf::from("/nonexistent/iriser-artifacts")];
        let first = store.get_or_load_from(&missing) as *const LoadOutcome;
        let second = store.get_or_load_from(&missing) as *const LoadOutcome;
        assert_eq!(first, second);
    }

    #[test]
    fn empty_candidate_list_reports_unready() {
        let store = ArtifactStore::new();
        match store.get_or_load_from(&[]) {
            LoadOutcome::Unready(report) => {
                assert!(report.searched.is_empty());
                assert!(report.failures.is_empty());
            }
            LoadOutcome::Ready(_) => panic!("expected unready outcome"),
        }
    }
}
