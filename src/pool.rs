//! The ordered fallback nickname list.

use crate::error::ConfigError;
use crate::nick::NickExt;

/// Validated, ordered, non-empty list of fallback nicknames.
///
/// Immutable once constructed. Candidates failing the nickname grammar are
/// silently dropped; only an empty result after filtering is fatal.
#[derive(Debug, Clone)]
pub struct NickPool {
    nicks: Vec<String>,
}

impl NickPool {
    /// Build a pool from raw candidates.
    ///
    /// Each candidate is trimmed of surrounding whitespace and checked
    /// against the nickname grammar. Valid entries keep their relative
    /// order; duplicates are not deduplicated.
    pub fn new<I, S>(candidates: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let nicks: Vec<String> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let nick = candidate.as_ref().trim();
                nick.is_valid_nick().then(|| nick.to_string())
            })
            .collect();

        if nicks.is_empty() {
            return Err(ConfigError::NoValidNicks);
        }

        Ok(Self { nicks })
    }

    /// The nickname at `index`, or `None` once the list is exhausted.
    ///
    /// No wraparound: every index at or past [`len`](Self::len) is
    /// exhausted.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.nicks.get(index).map(String::as_str)
    }

    /// Count of validated nicknames.
    pub fn len(&self) -> usize {
        self.nicks.len()
    }

    /// Whether the pool holds no nicknames (never true after construction).
    pub fn is_empty(&self) -> bool {
        self.nicks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_order_and_duplicates() {
        let pool = NickPool::new(["Foo", "Bar", "Foo"]).unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.get(0), Some("Foo"));
        assert_eq!(pool.get(1), Some("Bar"));
        assert_eq!(pool.get(2), Some("Foo"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let pool = NickPool::new(["  Foo  ", "\tBar\n"]).unwrap();
        assert_eq!(pool.get(0), Some("Foo"));
        assert_eq!(pool.get(1), Some("Bar"));
    }

    #[test]
    fn drops_invalid_entries_silently() {
        let pool = NickPool::new(["1bad", "Good", "", "also bad", "-nope"]).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(0), Some("Good"));
    }

    #[test]
    fn empty_input_fails() {
        let result = NickPool::new(Vec::<String>::new());
        assert!(matches!(result, Err(ConfigError::NoValidNicks)));
    }

    #[test]
    fn all_invalid_input_fails() {
        let result = NickPool::new(["123", "", "   ", "no spaces allowed"]);
        assert!(matches!(result, Err(ConfigError::NoValidNicks)));
    }

    #[test]
    fn get_past_end_is_exhausted() {
        let pool = NickPool::new(["Foo"]).unwrap();
        assert_eq!(pool.get(0), Some("Foo"));
        assert_eq!(pool.get(1), None);
        assert_eq!(pool.get(100), None);
    }
}
