//! Session-level domain state: the catalog plus what the user did with it

use super::build::Build;
use super::catalog::Catalog;
use super::error::DomainError;
use chrono::NaiveDate;

/// The signed-in identity shown on the profile screen (stubbed, no real
/// authentication behind it)
#[derive(Debug, Clone)]
pub struct Account {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub member_since: NaiveDate,
}

/// Domain state containing the catalog and everything the session owns
#[derive(Default)]
pub struct DomainState {
    /// Immutable seed catalog, loaded once at startup
    pub catalog: Catalog,

    /// Builds saved during (or seeded into) this session
    pub saved_builds: Vec<Build>,

    /// Present while signed in
    pub account: Option<Account>,

    /// Counter feeding saved-build id allocation
    next_custom_id: usize,
}

impl DomainState {
    pub fn new(catalog: Catalog, saved_builds: Vec<Build>) -> Self {
        Self {
            catalog,
            saved_builds,
            account: None,
            next_custom_id: 1,
        }
    }

    /// Look a build up across curated and saved builds
    pub fn find_build(&self, id: &str) -> Option<&Build> {
        self.catalog
            .build(id)
            .or_else(|| self.saved_builds.iter().find(|b| b.id == id))
    }

    /// Build ids eligible for comparison: curated first, then saved
    pub fn compare_pool(&self) -> Vec<String> {
        self.catalog
            .builds
            .iter()
            .map(|b| b.id.clone())
            .chain(self.saved_builds.iter().map(|b| b.id.clone()))
            .collect()
    }

    /// Allocate an unused id for a newly saved build
    pub fn next_saved_id(&mut self) -> String {
        loop {
            let candidate = format!("custom{}", self.next_custom_id);
            self.next_custom_id += 1;
            if self.find_build(&candidate).is_none() {
                return candidate;
            }
        }
    }

    pub fn add_saved(&mut self, build: Build) {
        self.saved_builds.push(build);
    }

    /// Remove a saved build, returning it for the status message
    pub fn delete_saved(&mut self, id: &str) -> Result<Build, DomainError> {
        match self.saved_builds.iter().position(|b| b.id == id) {
            Some(pos) => Ok(self.saved_builds.remove(pos)),
            None => Err(DomainError::not_found("Saved build", id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::part::Category;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn build(id: &str) -> Build {
        Build {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            price: 1000.0,
            image: String::new(),
            tier: "mid-range".to_string(),
            purposes: Vec::new(),
            rating: 4.0,
            components: BTreeMap::from([(Category::Cpu, "cpu1".to_string())]),
            date: None,
        }
    }

    fn sample_domain() -> DomainState {
        let catalog = Catalog::new(Vec::new(), vec![build("build1"), build("build2")]);
        let saved = vec![
            build("saved1").saved_copy("saved1", NaiveDate::from_ymd_opt(2023, 8, 15).unwrap()),
            build("custom1").saved_copy("custom1", NaiveDate::from_ymd_opt(2023, 9, 5).unwrap()),
        ];
        DomainState::new(catalog, saved)
    }

    #[test]
    fn test_find_build_checks_curated_then_saved() {
        let domain = sample_domain();
        assert!(domain.find_build("build2").is_some());
        assert!(domain.find_build("custom1").is_some());
        assert!(domain.find_build("build9").is_none());
    }

    #[test]
    fn test_compare_pool_lists_curated_before_saved() {
        let domain = sample_domain();
        assert_eq!(domain.compare_pool(), vec!["build1", "build2", "saved1", "custom1"]);
    }

    #[test]
    fn test_next_saved_id_skips_existing_ids() {
        let mut domain = sample_domain();
        // custom1 is already taken by the seeded profile
        assert_eq!(domain.next_saved_id(), "custom2");
        assert_eq!(domain.next_saved_id(), "custom3");
    }

    #[test]
    fn test_delete_saved_returns_removed_build() {
        let mut domain = sample_domain();
        let removed = domain.delete_saved("saved1").unwrap();
        assert_eq!(removed.id, "saved1");
        assert_eq!(domain.saved_builds.len(), 1);

        assert!(matches!(
            domain.delete_saved("saved1").unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }
}
