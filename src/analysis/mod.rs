pub mod comparison;
pub mod constants;

pub use comparison::{compare, ComparisonResult, RadarAxes, Verdict};
pub use constants::*;
