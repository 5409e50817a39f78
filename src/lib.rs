pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod interface;
pub mod models;

pub use error::{EsgError, Result};
pub use models::{Product, ScoreBand};
