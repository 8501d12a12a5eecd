//! Domain types, independent of any rendering
//!
//! `DomainState` holds the catalog, saved builds, and account.
//! `Configuration` and `ComparisonSet` are the two mutable value objects
//! the screens edit; `ModalStack` orders the overlays.

pub mod build;
pub mod catalog;
pub mod compare;
pub mod configuration;
pub mod domain;
pub mod error;
pub mod filter;
pub mod modal;
pub mod part;
pub mod ui;

// Re-export commonly used types
pub use build::Build;
pub use catalog::Catalog;
pub use compare::{ComparisonSet, MAX_COMPARE};
pub use configuration::Configuration;
pub use domain::{Account, DomainState};
pub use error::DomainError;
pub use filter::{Filter, PriceBand, BUILD_PRICE_BANDS, PART_PRICE_BANDS};
pub use part::{Category, Part, Spec, SpecValue};
