pub mod builder;
pub mod catalog;
pub mod export;

pub use builder::{build_dataset, marketplace_listings, partners};
pub use catalog::ProductCatalog;
pub use export::{records, to_json, write_csv, ProductRecord};
