//! The build in progress: one optional part per category
//!
//! The slot map always carries every category as a key, set or not, so
//! consumers never have to distinguish "missing key" from "empty slot".
//! Totals are recomputed from the current slots on every call rather than
//! cached.

use super::build::Build;
use super::catalog::{self, Catalog};
use super::error::DomainError;
use super::part::{Category, Part};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// An in-progress selection of parts, at most one per category
#[derive(Debug, Clone)]
pub struct Configuration {
    slots: BTreeMap<Category, Option<String>>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    /// An empty configuration with every category slot present and unset
    pub fn new() -> Self {
        let mut slots = BTreeMap::new();
        for category in Category::all() {
            slots.insert(category, None);
        }
        Self { slots }
    }

    /// Assign a part to the slot of its own category, replacing any
    /// previous occupant. Replacement is normal, not a conflict.
    pub fn select(&mut self, part: &Part) {
        self.slots.insert(part.category, Some(part.id.clone()));
    }

    /// Clear one slot, returning the part id that was there. `None` means
    /// the slot was already empty, which is not an error.
    pub fn remove(&mut self, category: Category) -> Option<String> {
        self.slots.insert(category, None).flatten()
    }

    /// Reset every slot
    pub fn clear(&mut self) {
        for slot in self.slots.values_mut() {
            *slot = None;
        }
    }

    /// The part id currently assigned to a category, if any
    pub fn selected(&self, category: Category) -> Option<&str> {
        self.slots.get(&category).and_then(|s| s.as_deref())
    }

    /// All slots in category order, set or not
    pub fn slots(&self) -> impl Iterator<Item = (Category, Option<&str>)> {
        self.slots.iter().map(|(c, id)| (*c, id.as_deref()))
    }

    pub fn selected_count(&self) -> usize {
        self.slots.values().filter(|s| s.is_some()).count()
    }

    /// True when every category has a selection
    pub fn is_complete(&self) -> bool {
        self.slots.values().all(|s| s.is_some())
    }

    /// Resolve the current selections to parts, in slot order
    pub fn selected_parts<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Part> {
        self.slots
            .values()
            .flatten()
            .filter_map(|id| catalog.part(id))
            .collect()
    }

    /// Sum of the selected parts' prices, recomputed from current state
    pub fn total_price(&self, catalog: &Catalog) -> f64 {
        catalog::total_price(self.selected_parts(catalog))
    }

    /// Materialize the current selections as a saved build. The name must
    /// be non-empty after trimming; a rejected snapshot changes nothing.
    /// The price is recomputed from the selected parts, not copied from
    /// anywhere.
    pub fn snapshot(
        &self,
        id: impl Into<String>,
        name: &str,
        date: NaiveDate,
        catalog: &Catalog,
    ) -> Result<Build, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("build name required".to_string()));
        }

        let mut components = BTreeMap::new();
        for (category, slot) in &self.slots {
            if let Some(part_id) = slot {
                components.insert(*category, part_id.clone());
            }
        }

        Ok(Build {
            id: id.into(),
            name: name.to_string(),
            description: String::new(),
            price: self.total_price(catalog),
            image: String::new(),
            tier: "custom".to_string(),
            purposes: Vec::new(),
            rating: 0.0,
            components,
            date: Some(date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: &str, category: Category, price: f64) -> Part {
        Part {
            id: id.to_string(),
            category,
            name: id.to_uppercase(),
            brand: "Acme".to_string(),
            price,
            image: String::new(),
            rating: 4.5,
            specs: Vec::new(),
            description: String::new(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                part("cpu1", Category::Cpu, 589.99),
                part("cpu2", Category::Cpu, 549.99),
                part("gpu1", Category::Gpu, 1599.99),
                part("motherboard1", Category::Motherboard, 629.99),
                part("memory1", Category::Memory, 129.99),
                part("storage1", Category::Storage, 179.99),
                part("case1", Category::Case, 169.99),
                part("psu1", Category::Psu, 189.99),
                part("cooler1", Category::Cooler, 279.99),
            ],
            Vec::new(),
        )
    }

    fn select_full_build(config: &mut Configuration, catalog: &Catalog) {
        for id in [
            "cpu1", "gpu1", "motherboard1", "memory1", "storage1", "case1", "psu1", "cooler1",
        ] {
            config.select(catalog.part(id).unwrap());
        }
    }

    #[test]
    fn test_new_configuration_has_every_slot_unset() {
        let config = Configuration::new();
        let slots: Vec<(Category, Option<&str>)> = config.slots().collect();
        assert_eq!(slots.len(), 8);
        assert!(slots.iter().all(|(_, id)| id.is_none()));
        assert_eq!(config.selected_count(), 0);
        assert!(!config.is_complete());
    }

    #[test]
    fn test_select_assigns_only_its_own_slot() {
        let catalog = sample_catalog();
        let mut config = Configuration::new();
        config.select(catalog.part("cpu1").unwrap());

        assert_eq!(config.selected(Category::Cpu), Some("cpu1"));
        for (category, id) in config.slots() {
            if category != Category::Cpu {
                assert!(id.is_none(), "slot {:?} should be empty", category);
            }
        }
    }

    #[test]
    fn test_select_replaces_previous_occupant() {
        let catalog = sample_catalog();
        let mut config = Configuration::new();
        config.select(catalog.part("cpu1").unwrap());
        config.select(catalog.part("cpu2").unwrap());

        assert_eq!(config.selected(Category::Cpu), Some("cpu2"));
        assert_eq!(config.selected_count(), 1);
    }

    #[test]
    fn test_remove_clears_slot_and_is_benign_when_empty() {
        let catalog = sample_catalog();
        let mut config = Configuration::new();
        config.select(catalog.part("gpu1").unwrap());

        assert_eq!(config.remove(Category::Gpu), Some("gpu1".to_string()));
        assert_eq!(config.selected(Category::Gpu), None);
        // Second remove is a no-op, not an error
        assert_eq!(config.remove(Category::Gpu), None);
    }

    #[test]
    fn test_total_price_tracks_current_slots() {
        let catalog = sample_catalog();
        let mut config = Configuration::new();

        config.select(catalog.part("cpu1").unwrap());
        config.select(catalog.part("gpu1").unwrap());
        assert!((config.total_price(&catalog) - 2189.98).abs() < 1e-9);
        assert!(!config.is_complete());

        // Replace the cpu, remove the gpu, and the total follows
        config.select(catalog.part("cpu2").unwrap());
        config.remove(Category::Gpu);
        assert!((config.total_price(&catalog) - 549.99).abs() < 1e-9);

        config.clear();
        assert_eq!(config.total_price(&catalog), 0.0);
    }

    #[test]
    fn test_complete_only_when_all_eight_slots_set() {
        let catalog = sample_catalog();
        let mut config = Configuration::new();
        select_full_build(&mut config, &catalog);

        assert!(config.is_complete());
        assert_eq!(config.selected_count(), 8);

        config.remove(Category::Cooler);
        assert!(!config.is_complete());
    }

    #[test]
    fn test_snapshot_requires_a_name() {
        let catalog = sample_catalog();
        let mut config = Configuration::new();
        config.select(catalog.part("cpu1").unwrap());
        let date = NaiveDate::from_ymd_opt(2023, 9, 5).unwrap();

        let err = config.snapshot("custom2", "", date, &catalog).unwrap_err();
        assert_eq!(err, DomainError::Validation("build name required".to_string()));

        // Whitespace-only names are empty after trimming
        assert!(config.snapshot("custom2", "   ", date, &catalog).is_err());

        // The rejected snapshot changed nothing
        assert_eq!(config.selected(Category::Cpu), Some("cpu1"));
        assert_eq!(config.selected_count(), 1);
    }

    #[test]
    fn test_snapshot_copies_slots_and_recomputes_price() {
        let catalog = sample_catalog();
        let mut config = Configuration::new();
        select_full_build(&mut config, &catalog);
        let date = NaiveDate::from_ymd_opt(2023, 9, 5).unwrap();

        let build = config
            .snapshot("custom2", "  My Build  ", date, &catalog)
            .unwrap();

        assert_eq!(build.id, "custom2");
        assert_eq!(build.name, "My Build");
        assert_eq!(build.tier, "custom");
        assert_eq!(build.date, Some(date));
        assert_eq!(build.components.len(), 8);
        assert_eq!(build.components[&Category::Cpu], "cpu1");
        assert!((build.price - config.total_price(&catalog)).abs() < 1e-9);

        // Snapshot is a copy: mutating the configuration afterwards does
        // not touch the build
        config.clear();
        assert_eq!(build.components.len(), 8);
    }

    #[test]
    fn test_snapshot_of_partial_configuration_keeps_only_set_slots() {
        let catalog = sample_catalog();
        let mut config = Configuration::new();
        config.select(catalog.part("cpu1").unwrap());
        config.select(catalog.part("gpu1").unwrap());
        let date = NaiveDate::from_ymd_opt(2023, 9, 5).unwrap();

        let build = config.snapshot("custom2", "Started", date, &catalog).unwrap();
        assert_eq!(build.components.len(), 2);
        assert!((build.price - 2189.98).abs() < 1e-9);
    }
}
