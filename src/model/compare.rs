//! Side-by-side comparison of whole builds
//!
//! The set holds up to three build ids in the order they were added, with
//! the rest of the pool in a disjoint available list. When more than two
//! builds are selected, narrow layouts page through pairs anchored on the
//! first-added build.

use super::error::DomainError;

/// Maximum number of builds compared at once
pub const MAX_COMPARE: usize = 3;

/// An ordered selection of builds for comparison plus the rest of the pool
#[derive(Debug, Clone, Default)]
pub struct ComparisonSet {
    selected: Vec<String>,
    available: Vec<String>,
}

impl ComparisonSet {
    /// A fresh set with everything available and nothing selected
    pub fn new(pool: Vec<String>) -> Self {
        Self {
            selected: Vec::new(),
            available: pool,
        }
    }

    /// A fresh set with the given ids pre-selected (ids beyond capacity or
    /// outside the pool are skipped)
    pub fn seeded(pool: Vec<String>, seed: &[&str]) -> Self {
        let mut set = Self::new(pool);
        for id in seed {
            let _ = set.add(id);
        }
        set
    }

    /// Move a build from the available list to the end of the selection.
    ///
    /// Rejected with `CapacityExceeded` when the set is full or the build
    /// is already selected, with `NotFound` when the id is not in the
    /// pool. A rejected add changes nothing.
    pub fn add(&mut self, id: &str) -> Result<(), DomainError> {
        if self.selected.len() >= MAX_COMPARE || self.selected.iter().any(|s| s == id) {
            return Err(DomainError::CapacityExceeded { limit: MAX_COMPARE });
        }
        match self.available.iter().position(|s| s == id) {
            Some(pos) => {
                self.selected.push(self.available.remove(pos));
                Ok(())
            }
            None => Err(DomainError::not_found("Build", id)),
        }
    }

    /// Move a build from the selection back to the tail of the available
    /// list. Removing an unselected id is benign and reported as
    /// `NotFound`.
    pub fn remove(&mut self, id: &str) -> Result<(), DomainError> {
        match self.selected.iter().position(|s| s == id) {
            Some(pos) => {
                let id = self.selected.remove(pos);
                self.available.push(id);
                Ok(())
            }
            None => Err(DomainError::not_found("Build", id)),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The pair shown in paged layouts. With more than two builds the
    /// first-added build is the fixed anchor and `index` cycles through
    /// the remaining members; with two or fewer it is simply the first
    /// two (or fewer).
    pub fn active_pair(&self, index: usize) -> (Option<&str>, Option<&str>) {
        match self.selected.len() {
            0 => (None, None),
            1 => (Some(self.selected[0].as_str()), None),
            2 => (
                Some(self.selected[0].as_str()),
                Some(self.selected[1].as_str()),
            ),
            len => {
                let partner = 1 + index % (len - 1);
                (
                    Some(self.selected[0].as_str()),
                    Some(self.selected[partner].as_str()),
                )
            }
        }
    }

    /// Number of distinct pages `active_pair` can show
    pub fn pair_count(&self) -> usize {
        if self.selected.len() > 2 {
            self.selected.len() - 1
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<String> {
        vec!["a", "b", "c", "d"].into_iter().map(String::from).collect()
    }

    #[test]
    fn test_seeded_moves_ids_out_of_available() {
        let set = ComparisonSet::seeded(pool(), &["a", "b"]);
        assert_eq!(set.selected(), &["a", "b"]);
        assert_eq!(set.available(), &["c", "d"]);
    }

    #[test]
    fn test_add_appends_until_capacity() {
        let mut set = ComparisonSet::seeded(pool(), &["a", "b"]);

        set.add("c").unwrap();
        assert_eq!(set.selected(), &["a", "b", "c"]);
        assert_eq!(set.available(), &["d"]);

        // Fourth add rejected, nothing changed
        let err = set.add("d").unwrap_err();
        assert_eq!(err, DomainError::CapacityExceeded { limit: 3 });
        assert_eq!(set.selected(), &["a", "b", "c"]);
        assert_eq!(set.available(), &["d"]);
    }

    #[test]
    fn test_duplicate_add_rejected_as_capacity() {
        let mut set = ComparisonSet::seeded(pool(), &["a"]);
        let err = set.add("a").unwrap_err();
        assert_eq!(err, DomainError::CapacityExceeded { limit: 3 });
        assert_eq!(set.selected(), &["a"]);
    }

    #[test]
    fn test_add_unknown_id_is_not_found() {
        let mut set = ComparisonSet::new(pool());
        let err = set.add("zz").unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_remove_returns_build_to_available_tail() {
        let mut set = ComparisonSet::seeded(pool(), &["a", "b"]);
        set.remove("a").unwrap();

        assert_eq!(set.selected(), &["b"]);
        assert_eq!(set.available(), &["c", "d", "a"]);

        // Removing it again is benign
        assert!(matches!(
            set.remove("a").unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[test]
    fn test_add_then_remove_restores_partition_membership() {
        let set = ComparisonSet::seeded(pool(), &["a", "b"]);
        let mut mutated = set.clone();
        mutated.add("d").unwrap();
        mutated.remove("d").unwrap();

        assert_eq!(mutated.selected(), set.selected());
        let mut before: Vec<&String> = set.available().iter().collect();
        let mut after: Vec<&String> = mutated.available().iter().collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_active_pair_small_sets() {
        let set = ComparisonSet::new(pool());
        assert_eq!(set.active_pair(0), (None, None));

        let set = ComparisonSet::seeded(pool(), &["a"]);
        assert_eq!(set.active_pair(5), (Some("a"), None));

        let set = ComparisonSet::seeded(pool(), &["a", "b"]);
        // Index is ignored below three members
        assert_eq!(set.active_pair(7), (Some("a"), Some("b")));
        assert_eq!(set.pair_count(), 1);
    }

    #[test]
    fn test_active_pair_cycles_against_fixed_anchor() {
        let set = ComparisonSet::seeded(pool(), &["a", "b", "c"]);
        assert_eq!(set.pair_count(), 2);
        assert_eq!(set.active_pair(0), (Some("a"), Some("b")));
        assert_eq!(set.active_pair(1), (Some("a"), Some("c")));
        // Wraps back around; the anchor never moves
        assert_eq!(set.active_pair(2), (Some("a"), Some("b")));
        assert_eq!(set.active_pair(3), (Some("a"), Some("c")));
    }
}
