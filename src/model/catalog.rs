//! The catalog store: immutable seed data plus the shared lookups
//!
//! Everything else in the app reads through this type; nothing mutates it
//! after load. Lookups live here so list screens, the configurator, and the
//! comparison view share one contract instead of re-scanning on their own.

use super::build::Build;
use super::part::{Category, Part};

/// Sum of prices across a sequence of parts; 0 for an empty sequence
pub fn total_price<'a, I>(parts: I) -> f64
where
    I: IntoIterator<Item = &'a Part>,
{
    // Seeded fold, not sum(): f64::sum() starts from -0.0, which would
    // render an empty total as "-0.00".
    parts.into_iter().map(|p| p.price).fold(0.0, |total, price| total + price)
}

/// Immutable catalog of parts and curated builds
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub parts: Vec<Part>,
    pub builds: Vec<Build>,
}

impl Catalog {
    pub fn new(parts: Vec<Part>, builds: Vec<Build>) -> Self {
        Self { parts, builds }
    }

    /// All parts of one category, in catalog order
    pub fn parts_by_category(&self, category: Category) -> Vec<&Part> {
        self.parts.iter().filter(|p| p.category == category).collect()
    }

    pub fn part(&self, id: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    pub fn build(&self, id: &str) -> Option<&Build> {
        self.builds.iter().find(|b| b.id == id)
    }

    /// Resolve a build's component ids to parts, in slot order
    pub fn build_parts(&self, build: &Build) -> Vec<&Part> {
        build
            .components
            .values()
            .filter_map(|id| self.part(id))
            .collect()
    }

    /// Distinct purpose tags across curated builds, first-seen order
    pub fn purposes(&self) -> Vec<String> {
        let mut purposes: Vec<String> = Vec::new();
        for build in &self.builds {
            for purpose in &build.purposes {
                if !purposes.contains(purpose) {
                    purposes.push(purpose.clone());
                }
            }
        }
        purposes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

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

    fn build(id: &str, purposes: &[&str], components: &[(&str, Category)]) -> Build {
        let mut map = BTreeMap::new();
        for (part_id, category) in components {
            map.insert(*category, part_id.to_string());
        }
        Build {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            price: 0.0,
            image: String::new(),
            tier: "mid-range".to_string(),
            purposes: purposes.iter().map(|s| s.to_string()).collect(),
            rating: 4.0,
            components: map,
            date: None,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                part("cpu1", Category::Cpu, 589.99),
                part("gpu1", Category::Gpu, 1599.99),
                part("cpu2", Category::Cpu, 319.99),
                part("gpu2", Category::Gpu, 999.99),
            ],
            vec![
                build("b1", &["gaming", "streaming"], &[("cpu1", Category::Cpu)]),
                build("b2", &["gaming", "work"], &[("cpu2", Category::Cpu), ("gpu2", Category::Gpu)]),
            ],
        )
    }

    #[test]
    fn test_parts_by_category_preserves_order() {
        let catalog = sample_catalog();
        let cpus: Vec<&str> = catalog
            .parts_by_category(Category::Cpu)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(cpus, vec!["cpu1", "cpu2"]);
    }

    #[test]
    fn test_parts_by_category_empty_when_none_match() {
        let catalog = sample_catalog();
        assert!(catalog.parts_by_category(Category::Psu).is_empty());
    }

    #[test]
    fn test_total_price_sums_and_zero_when_empty() {
        let catalog = sample_catalog();
        let picked: Vec<&Part> = vec![
            catalog.part("cpu1").unwrap(),
            catalog.part("gpu1").unwrap(),
        ];
        let total = total_price(picked);
        assert!((total - 2189.98).abs() < 1e-9);

        assert_eq!(total_price(Vec::<&Part>::new()), 0.0);
    }

    #[test]
    fn test_lookups_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.part("gpu2").unwrap().price, 999.99);
        assert!(catalog.part("gpu9").is_none());
        assert_eq!(catalog.build("b1").unwrap().name, "B1");
        assert!(catalog.build("b9").is_none());
    }

    #[test]
    fn test_build_parts_resolves_in_slot_order() {
        let catalog = sample_catalog();
        let build = catalog.build("b2").unwrap();
        let names: Vec<&str> = catalog
            .build_parts(build)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(names, vec!["cpu2", "gpu2"]);
    }

    #[test]
    fn test_purposes_deduplicated_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.purposes(), vec!["gaming", "streaming", "work"]);
    }
}
