use serde::Serialize;

use crate::error::{EsgError, Result};
use crate::models::Product;

/// Normalized [0,1] axes driving the comparison breakdown chart.
///
/// The emissions axis is inverted so that lower emissions score higher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarAxes {
    pub esg_score: f64,
    pub low_emissions: f64,
    pub green_activity: f64,
}

impl RadarAxes {
    /// Compute the axes for one product.
    ///
    /// `max_co2` is the dataset-wide maximum, not the pair maximum, so the
    /// emissions axis stays comparable across any pair drawn from the same
    /// dataset. A zero maximum means nothing in the dataset emits at all,
    /// which pins the axis at 1.0.
    pub fn for_product(product: &Product, max_co2: u32) -> Self {
        let low_emissions = if max_co2 == 0 {
            1.0
        } else {
            1.0 - product.co2_emissions as f64 / max_co2 as f64
        };

        Self {
            esg_score: product.esg_score as f64 / 100.0,
            low_emissions,
            green_activity: product.green_activity_pct as f64 / 100.0,
        }
    }

    /// Axis values in the order of `constants::AXIS_LABELS`.
    pub fn as_array(&self) -> [f64; 3] {
        [self.esg_score, self.low_emissions, self.green_activity]
    }
}

/// Outcome of a sustainability comparison.
///
/// `margin` is the winner's ESG score advantage in points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    FirstMoreSustainable { margin: u32 },
    SecondMoreSustainable { margin: u32 },
    NeedsManualReview,
}

impl Verdict {
    /// One-line human summary, given the two product names.
    pub fn describe(&self, first: &str, second: &str) -> String {
        match self {
            Verdict::FirstMoreSustainable { margin } => format!(
                "{} is more sustainable than {} (+{} ESG points)",
                first, second, margin
            ),
            Verdict::SecondMoreSustainable { margin } => format!(
                "{} is more sustainable than {} (+{} ESG points)",
                second, first, margin
            ),
            Verdict::NeedsManualReview => format!(
                "Comparing {} and {} is inconclusive, needs manual review: \
                 check green activity levels and greenwashing signals",
                first, second
            ),
        }
    }
}

/// Full result of comparing two products.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub first: String,
    pub second: String,

    /// Signed ESG score difference, first minus second.
    pub score_delta: i32,

    pub verdict: Verdict,
    pub first_axes: RadarAxes,
    pub second_axes: RadarAxes,
}

/// Compare two products for sustainability.
///
/// Selecting the same product twice is a usage precondition failure; callers
/// are expected to re-prompt. The verdict checks run in order: a higher
/// scorer that is flagged for greenwashing falls through to manual review.
pub fn compare(a: &Product, b: &Product, max_co2: u32) -> Result<ComparisonResult> {
    if a == b {
        return Err(EsgError::SameProductSelected(a.name.clone()));
    }

    let score_delta = a.esg_score as i32 - b.esg_score as i32;

    let verdict = if a.esg_score > b.esg_score && !a.greenwashing_flag() {
        Verdict::FirstMoreSustainable {
            margin: score_delta as u32,
        }
    } else if b.esg_score > a.esg_score && !b.greenwashing_flag() {
        Verdict::SecondMoreSustainable {
            margin: (-score_delta) as u32,
        }
    } else {
        Verdict::NeedsManualReview
    };

    Ok(ComparisonResult {
        first: a.name.clone(),
        second: b.name.clone(),
        score_delta,
        verdict,
        first_axes: RadarAxes::for_product(a, max_co2),
        second_axes: RadarAxes::for_product(b, max_co2),
    })
}
