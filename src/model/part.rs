//! Data model for catalog parts and their categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of component categories a build has one slot for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Motherboard,
    Gpu,
    Memory,
    Storage,
    Case,
    Psu,
    Cooler,
}

impl Category {
    /// All categories in display order (also the slot order of a build)
    pub fn all() -> Vec<Category> {
        vec![
            Category::Cpu,
            Category::Motherboard,
            Category::Gpu,
            Category::Memory,
            Category::Storage,
            Category::Case,
            Category::Psu,
            Category::Cooler,
        ]
    }

    /// Stable identifier used in seed data
    pub fn id(&self) -> &str {
        match self {
            Category::Cpu => "cpu",
            Category::Motherboard => "motherboard",
            Category::Gpu => "gpu",
            Category::Memory => "memory",
            Category::Storage => "storage",
            Category::Case => "case",
            Category::Psu => "psu",
            Category::Cooler => "cooler",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &str {
        match self {
            Category::Cpu => "CPU",
            Category::Motherboard => "Motherboard",
            Category::Gpu => "Graphics Card",
            Category::Memory => "RAM",
            Category::Storage => "Storage",
            Category::Case => "Case",
            Category::Psu => "Power Supply",
            Category::Cooler => "CPU Cooler",
        }
    }
}

/// A single specification value, either numeric or text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Number(n) => write!(f, "{}", n),
            SpecValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One named specification entry (order as authored in the seed data)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spec {
    pub name: String,
    pub value: SpecValue,
}

/// A catalog part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub category: Category,
    pub name: String,
    pub brand: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub specs: Vec<Spec>,
    #[serde(default)]
    pub description: String,
}
