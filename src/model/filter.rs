//! Filtering of parts and builds for the list screens
//!
//! All predicates are conjunctive; the result keeps catalog order. A filter
//! axis set to its default ("all" category/purpose, empty query, unbounded
//! price) is skipped entirely.

use super::build::Build;
use super::part::{Category, Part};

/// One selectable price range for the list screens
#[derive(Debug, Clone, Copy)]
pub struct PriceBand {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

/// Price bands offered on the Parts screen
pub const PART_PRICE_BANDS: &[PriceBand] = &[
    PriceBand { label: "Any price", min: 0.0, max: f64::MAX },
    PriceBand { label: "Under $200", min: 0.0, max: 200.0 },
    PriceBand { label: "$200 to $500", min: 200.0, max: 500.0 },
    PriceBand { label: "$500 to $1000", min: 500.0, max: 1000.0 },
    PriceBand { label: "Over $1000", min: 1000.0, max: f64::MAX },
];

/// Price bands offered on the Builds screen
pub const BUILD_PRICE_BANDS: &[PriceBand] = &[
    PriceBand { label: "Any price", min: 0.0, max: f64::MAX },
    PriceBand { label: "Under $2000", min: 0.0, max: 2000.0 },
    PriceBand { label: "$2000 to $3000", min: 2000.0, max: 3000.0 },
    PriceBand { label: "Over $3000", min: 3000.0, max: f64::MAX },
];

/// Current filter configuration for a list screen.
///
/// `category` applies to parts, `purpose` to builds; the query and the
/// inclusive price range apply to both.
#[derive(Debug, Clone)]
pub struct Filter {
    pub category: Option<Category>,
    pub query: String,
    pub price_min: f64,
    pub price_max: f64,
    pub purpose: Option<String>,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            category: None,
            query: String::new(),
            price_min: 0.0,
            price_max: f64::MAX,
            purpose: None,
        }
    }
}

impl Filter {
    pub fn matches_part(&self, part: &Part) -> bool {
        if let Some(category) = self.category {
            if part.category != category {
                return false;
            }
        }
        if !self.query.is_empty() {
            let query = self.query.to_lowercase();
            let hit = part.name.to_lowercase().contains(&query)
                || part.brand.to_lowercase().contains(&query)
                || part.description.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }
        part.price >= self.price_min && part.price <= self.price_max
    }

    pub fn matches_build(&self, build: &Build) -> bool {
        if let Some(purpose) = &self.purpose {
            if !build.purposes.iter().any(|p| p == purpose) {
                return false;
            }
        }
        if !self.query.is_empty() {
            let query = self.query.to_lowercase();
            let hit = build.name.to_lowercase().contains(&query)
                || build.description.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }
        build.price >= self.price_min && build.price <= self.price_max
    }

    pub fn filter_parts<'a>(&self, parts: &'a [Part]) -> Vec<&'a Part> {
        parts.iter().filter(|p| self.matches_part(p)).collect()
    }

    pub fn filter_builds<'a>(&self, builds: &'a [Build]) -> Vec<&'a Build> {
        builds.iter().filter(|b| self.matches_build(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn part(id: &str, category: Category, name: &str, brand: &str, price: f64, description: &str) -> Part {
        Part {
            id: id.to_string(),
            category,
            name: name.to_string(),
            brand: brand.to_string(),
            price,
            image: String::new(),
            rating: 4.5,
            specs: Vec::new(),
            description: description.to_string(),
        }
    }

    fn build(name: &str, price: f64, purposes: &[&str], description: &str) -> Build {
        Build {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            image: String::new(),
            tier: "mid-range".to_string(),
            purposes: purposes.iter().map(|s| s.to_string()).collect(),
            rating: 4.0,
            components: BTreeMap::new(),
            date: None,
        }
    }

    fn sample_parts() -> Vec<Part> {
        vec![
            part("cpu1", Category::Cpu, "Intel Core i9-13900K", "Intel", 589.99, "High-performance desktop processor"),
            part("gpu1", Category::Gpu, "NVIDIA GeForce RTX 4090", "NVIDIA", 1599.99, "Flagship graphics card"),
            part("gpu2", Category::Gpu, "AMD Radeon RX 7900 XTX", "AMD", 999.99, "Powerful gaming performance"),
            part("memory1", Category::Memory, "Corsair Vengeance RGB Pro 32GB", "Corsair", 129.99, "DDR5 memory with RGB lighting"),
        ]
    }

    #[test]
    fn test_category_with_price_cap_keeps_only_matching_gpu() {
        let parts = sample_parts();
        let filter = Filter {
            category: Some(Category::Gpu),
            price_min: 0.0,
            price_max: 1000.0,
            ..Filter::default()
        };
        let result = filter.filter_parts(&parts);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["gpu2"]);
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let parts = sample_parts();

        // brand
        let filter = Filter { query: "corsair".to_string(), ..Filter::default() };
        assert_eq!(filter.filter_parts(&parts).len(), 1);

        // name
        let filter = Filter { query: "rtx".to_string(), ..Filter::default() };
        assert_eq!(filter.filter_parts(&parts)[0].id, "gpu1");

        // description
        let filter = Filter { query: "flagship".to_string(), ..Filter::default() };
        assert_eq!(filter.filter_parts(&parts)[0].id, "gpu1");
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let parts = sample_parts();
        let filter = Filter {
            price_min: 129.99,
            price_max: 589.99,
            ..Filter::default()
        };
        let ids: Vec<&str> = filter.filter_parts(&parts).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["cpu1", "memory1"]);
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let parts = sample_parts();
        let filter = Filter::default();
        let ids: Vec<&str> = filter.filter_parts(&parts).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["cpu1", "gpu1", "gpu2", "memory1"]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let parts = sample_parts();
        let filter = Filter {
            category: Some(Category::Gpu),
            query: "amd".to_string(),
            price_min: 0.0,
            price_max: 2000.0,
            ..Filter::default()
        };
        let result = filter.filter_parts(&parts);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "gpu2");
        // Every survivor satisfies all active predicates, and nothing
        // excluded does
        for part in &parts {
            let kept = result.iter().any(|p| p.id == part.id);
            assert_eq!(kept, filter.matches_part(part), "part {}", part.id);
        }
    }

    #[test]
    fn test_build_purpose_filter() {
        let builds = vec![
            build("Ultimate Gaming Rig", 3499.99, &["gaming", "streaming"], "4K gaming"),
            build("Quiet Workstation", 2199.99, &["work"], "Productivity tasks"),
        ];

        let filter = Filter { purpose: Some("work".to_string()), ..Filter::default() };
        let result = filter.filter_builds(&builds);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Quiet Workstation");

        // No purpose selected keeps everything
        let filter = Filter::default();
        assert_eq!(filter.filter_builds(&builds).len(), 2);
    }

    #[test]
    fn test_build_query_matches_name_and_description() {
        let builds = vec![
            build("Ultimate Gaming Rig", 3499.99, &["gaming"], "4K gaming and streaming"),
            build("Quiet Workstation", 2199.99, &["work"], "Productivity tasks"),
        ];
        let filter = Filter { query: "productivity".to_string(), ..Filter::default() };
        let result = filter.filter_builds(&builds);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Quiet Workstation");
    }

    #[test]
    fn test_empty_result_for_unmatched_query() {
        let parts = sample_parts();
        let filter = Filter { query: "threadripper".to_string(), ..Filter::default() };
        assert!(filter.filter_parts(&parts).is_empty());
    }
}
