//! The pieces that touch the outside world: seed catalog parsing and
//! validation, and parts-list CSV export

pub mod catalog;
pub mod export;

pub use catalog::{load_seed, SeedData};
pub use export::{export_file_name, write_parts_csv};
