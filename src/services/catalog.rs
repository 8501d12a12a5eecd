//! Seed catalog loading and validation
//!
//! The catalog ships inside the binary as a YAML document. Loading parses
//! it, checks referential integrity, and materializes the seeded saved
//! builds as copy-on-save clones of their base builds.

use crate::model::{Build, Catalog, Part};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

const SEED_YAML: &str = include_str!("../../data/catalog.yaml");

/// Everything the seed document provides
#[derive(Debug)]
pub struct SeedData {
    pub catalog: Catalog,
    pub saved_builds: Vec<Build>,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    parts: Vec<Part>,
    builds: Vec<SeedBuild>,
    #[serde(default)]
    saved: Vec<SavedSeed>,
}

/// A curated build as authored: components as a flat id list
#[derive(Debug, Deserialize)]
struct SeedBuild {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default)]
    image: String,
    tier: String,
    #[serde(default)]
    purposes: Vec<String>,
    #[serde(default)]
    rating: f64,
    components: Vec<String>,
}

/// A seeded saved build: a clone of `base` with overwritten identity
#[derive(Debug, Deserialize)]
struct SavedSeed {
    base: String,
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    date: NaiveDate,
}

/// Parse and validate the embedded seed catalog
pub fn load_seed() -> Result<SeedData, String> {
    parse_seed(SEED_YAML)
}

fn parse_seed(yaml: &str) -> Result<SeedData, String> {
    let file: SeedFile =
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse seed catalog: {}", e))?;

    for (i, part) in file.parts.iter().enumerate() {
        if file.parts[..i].iter().any(|p| p.id == part.id) {
            return Err(format!("Duplicate part id in seed catalog: {}", part.id));
        }
    }

    let mut builds: Vec<Build> = Vec::new();
    for seed in file.builds {
        if builds.iter().any(|b| b.id == seed.id) {
            return Err(format!("Duplicate build id in seed catalog: {}", seed.id));
        }
        builds.push(resolve_build(seed, &file.parts)?);
    }

    let mut saved_builds: Vec<Build> = Vec::new();
    for seed in file.saved {
        let base = builds
            .iter()
            .find(|b| b.id == seed.base)
            .ok_or_else(|| format!("Saved build {} references unknown base: {}", seed.id, seed.base))?;
        if builds.iter().chain(saved_builds.iter()).any(|b| b.id == seed.id) {
            return Err(format!("Duplicate build id in seed catalog: {}", seed.id));
        }

        let mut copy = base.saved_copy(seed.id.clone(), seed.date);
        if let Some(name) = seed.name {
            copy.name = name;
        }
        if let Some(description) = seed.description {
            copy.description = description;
        }
        saved_builds.push(copy);
    }

    Ok(SeedData {
        catalog: Catalog::new(file.parts, builds),
        saved_builds,
    })
}

fn resolve_build(seed: SeedBuild, parts: &[Part]) -> Result<Build, String> {
    let mut components = BTreeMap::new();
    for id in &seed.components {
        let part = parts
            .iter()
            .find(|p| p.id == *id)
            .ok_or_else(|| format!("Build {} references unknown part: {}", seed.id, id))?;
        if components.insert(part.category, part.id.clone()).is_some() {
            return Err(format!(
                "Build {} has more than one {} component",
                seed.id,
                part.category.name()
            ));
        }
    }

    Ok(Build {
        id: seed.id,
        name: seed.name,
        description: seed.description,
        price: seed.price,
        image: seed.image,
        tier: seed.tier,
        purposes: seed.purposes,
        rating: seed.rating,
        components,
        date: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_embedded_seed_loads() {
        let seed = load_seed().expect("embedded seed should parse");
        assert_eq!(seed.catalog.parts.len(), 11);
        assert_eq!(seed.catalog.builds.len(), 2);
        assert_eq!(seed.saved_builds.len(), 3);
    }

    #[test]
    fn test_embedded_seed_known_prices() {
        let seed = load_seed().unwrap();
        let catalog = &seed.catalog;

        assert!((catalog.part("cpu1").unwrap().price - 589.99).abs() < 1e-9);
        assert!((catalog.part("gpu1").unwrap().price - 1599.99).abs() < 1e-9);
        assert!((catalog.part("gpu2").unwrap().price - 999.99).abs() < 1e-9);
        assert!((catalog.build("build1").unwrap().price - 3499.99).abs() < 1e-9);
    }

    #[test]
    fn test_embedded_curated_builds_are_complete() {
        let seed = load_seed().unwrap();
        for build in &seed.catalog.builds {
            assert_eq!(build.components.len(), 8, "build {}", build.id);
            for category in Category::all() {
                let part_id = build.components.get(&category).unwrap();
                let part = seed.catalog.part(part_id).unwrap();
                assert_eq!(part.category, category);
            }
        }
    }

    #[test]
    fn test_embedded_saved_builds_carry_identity_overrides() {
        let seed = load_seed().unwrap();
        let custom = seed
            .saved_builds
            .iter()
            .find(|b| b.id == "custom1")
            .expect("custom1 seeded");

        assert_eq!(custom.name, "My Custom Gaming Rig");
        assert_eq!(custom.date, NaiveDate::from_ymd_opt(2023, 9, 5));
        // Cloned from build1, so the roster matches
        let base = seed.catalog.build("build1").unwrap();
        assert_eq!(custom.components, base.components);

        let first = &seed.saved_builds[0];
        assert_eq!(first.name, "Ultimate Gaming Rig");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 8, 15));
    }

    #[test]
    fn test_unknown_part_reference_is_rejected() {
        let yaml = r#"
parts:
  - { id: cpu1, category: cpu, name: "CPU", brand: "Acme", price: 100.0 }
builds:
  - id: b1
    name: "Broken"
    price: 100.0
    tier: custom
    components: [cpu1, gpu9]
"#;
        let err = parse_seed(yaml).unwrap_err();
        assert!(err.contains("unknown part"), "got: {}", err);
    }

    #[test]
    fn test_two_parts_of_one_category_in_a_build_is_rejected() {
        let yaml = r#"
parts:
  - { id: cpu1, category: cpu, name: "CPU A", brand: "Acme", price: 100.0 }
  - { id: cpu2, category: cpu, name: "CPU B", brand: "Acme", price: 120.0 }
builds:
  - id: b1
    name: "Broken"
    price: 220.0
    tier: custom
    components: [cpu1, cpu2]
"#;
        let err = parse_seed(yaml).unwrap_err();
        assert!(err.contains("more than one CPU"), "got: {}", err);
    }

    #[test]
    fn test_duplicate_part_id_is_rejected() {
        let yaml = r#"
parts:
  - { id: cpu1, category: cpu, name: "CPU A", brand: "Acme", price: 100.0 }
  - { id: cpu1, category: cpu, name: "CPU B", brand: "Acme", price: 120.0 }
builds: []
"#;
        let err = parse_seed(yaml).unwrap_err();
        assert!(err.contains("Duplicate part id"), "got: {}", err);
    }

    #[test]
    fn test_saved_seed_with_unknown_base_is_rejected() {
        let yaml = r#"
parts:
  - { id: cpu1, category: cpu, name: "CPU", brand: "Acme", price: 100.0 }
builds:
  - id: b1
    name: "Base"
    price: 100.0
    tier: custom
    components: [cpu1]
saved:
  - { base: b9, id: s1, date: 2023-08-15 }
"#;
        let err = parse_seed(yaml).unwrap_err();
        assert!(err.contains("unknown base"), "got: {}", err);
    }
}
