//! Data model for whole builds, curated or user-saved

use super::part::Category;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A named, fully-assembled collection of parts, at most one per category.
///
/// Curated builds come from the seed catalog and carry a denormalized
/// `price` as authored; saved builds are copies with overwritten identity
/// fields and a save date.
#[derive(Debug, Clone)]
pub struct Build {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub tier: String,
    pub purposes: Vec<String>,
    pub rating: f64,
    /// Part ids keyed by category; iterates in slot order
    pub components: BTreeMap<Category, String>,
    /// Present only on saved builds
    pub date: Option<NaiveDate>,
}

impl Build {
    /// Copy-on-save: clone the build with fresh identity fields. The seeded
    /// profile entries and the save dialog both produce this shape.
    pub fn saved_copy(&self, id: impl Into<String>, date: NaiveDate) -> Build {
        let mut copy = self.clone();
        copy.id = id.into();
        copy.date = Some(date);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_build() -> Build {
        let mut components = BTreeMap::new();
        components.insert(Category::Cpu, "cpu1".to_string());
        components.insert(Category::Gpu, "gpu1".to_string());
        Build {
            id: "build1".to_string(),
            name: "Ultimate Gaming Rig".to_string(),
            description: "High-end gaming PC".to_string(),
            price: 3499.99,
            image: String::new(),
            tier: "high-end".to_string(),
            purposes: vec!["gaming".to_string(), "streaming".to_string()],
            rating: 4.9,
            components,
            date: None,
        }
    }

    #[test]
    fn test_saved_copy_overwrites_identity() {
        let build = sample_build();
        let date = NaiveDate::from_ymd_opt(2023, 8, 15).unwrap();
        let copy = build.saved_copy("saved1", date);

        assert_eq!(copy.id, "saved1");
        assert_eq!(copy.date, Some(date));
        // Everything else is carried over unchanged
        assert_eq!(copy.name, build.name);
        assert_eq!(copy.price, build.price);
        assert_eq!(copy.components, build.components);
        // The original is untouched
        assert_eq!(build.id, "build1");
        assert_eq!(build.date, None);
    }

    #[test]
    fn test_components_iterate_in_slot_order() {
        let build = sample_build();
        let categories: Vec<Category> = build.components.keys().copied().collect();
        assert_eq!(categories, vec![Category::Cpu, Category::Gpu]);
    }
}
