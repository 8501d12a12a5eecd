//! Parts-list CSV export
//!
//! Writes the selected parts of a configuration or saved build to a CSV
//! file in the working directory. Export is a one-way artifact; nothing
//! reads it back.

use crate::model::Part;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

/// Write one row per part plus a trailing total row
pub fn write_parts_csv(path: &Path, parts: &[&Part]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["category", "component", "brand", "price"])?;
    for part in parts {
        let price = format!("{:.2}", part.price);
        writer.write_record([
            part.category.name(),
            part.name.as_str(),
            part.brand.as_str(),
            price.as_str(),
        ])?;
    }

    // Seeded fold, not sum(): f64::sum() starts from -0.0, which would
    // render an empty total as "-0.00".
    let total: f64 = parts.iter().map(|p| p.price).fold(0.0, |total, price| total + price);
    let total = format!("{:.2}", total);
    writer.write_record(["total", "", "", total.as_str()])?;
    writer.flush()?;

    Ok(())
}

/// File name for an export: slugified build name plus the date
pub fn export_file_name(build_name: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", slugify(build_name), date.format("%Y%m%d"))
}

fn slugify(name: &str) -> String {
    let mut slug = String::new();
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn part(name: &str, brand: &str, category: Category, price: f64) -> Part {
        Part {
            id: name.to_lowercase(),
            category,
            name: name.to_string(),
            brand: brand.to_string(),
            price,
            image: String::new(),
            rating: 4.5,
            specs: Vec::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Ultimate Gaming Rig"), "ultimate-gaming-rig");
        assert_eq!(slugify("My Custom Gaming Rig!"), "my-custom-gaming-rig");
        assert_eq!(slugify("  Build #2 (draft)  "), "build-2-draft");
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2023, 9, 5).unwrap();
        assert_eq!(
            export_file_name("Ultimate Gaming Rig", date),
            "ultimate-gaming-rig-20230905.csv"
        );
    }

    #[test]
    fn test_write_parts_csv_rows_and_total() {
        let cpu = part("Intel Core i9-13900K", "Intel", Category::Cpu, 589.99);
        let gpu = part("NVIDIA GeForce RTX 4090", "NVIDIA", Category::Gpu, 1599.99);

        let path = std::env::temp_dir().join(format!("pcbuilder-export-test-{}.csv", std::process::id()));
        write_parts_csv(&path, &[&cpu, &gpu]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "category,component,brand,price");
        assert_eq!(lines[1], "CPU,Intel Core i9-13900K,Intel,589.99");
        assert_eq!(lines[2], "Graphics Card,NVIDIA GeForce RTX 4090,NVIDIA,1599.99");
        assert_eq!(lines[3], "total,,,2189.98");
    }

    #[test]
    fn test_write_parts_csv_empty_selection_is_just_the_total() {
        let path = std::env::temp_dir().join(format!("pcbuilder-export-empty-{}.csv", std::process::id()));
        write_parts_csv(&path, &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "total,,,0.00");
    }
}
