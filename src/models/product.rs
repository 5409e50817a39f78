use crate::analysis::constants::{is_greenwashing, MODERATE_SCORE_MIN, STRONG_SCORE_MIN};

/// A financial product with its simulated ESG metrics.
///
/// CO2 emissions are the scope 1-2-3 aggregate in tonnes.
#[derive(Debug, Clone)]
pub struct Product {
    pub name: String,

    /// Composite sustainability rating, 0-100.
    pub esg_score: u8,

    /// Aggregate emissions in tonnes.
    pub co2_emissions: u32,

    /// Share of activities that are actually green, 0-100.
    pub green_activity_pct: u8,
}

impl Product {
    pub fn new(name: &str, esg_score: u8, co2_emissions: u32, green_activity_pct: u8) -> Self {
        Self {
            name: name.to_string(),
            esg_score,
            co2_emissions,
            green_activity_pct,
        }
    }

    /// Whether the product looks like a greenwashing case.
    ///
    /// Recomputed from the underlying metrics on every read, so the flag
    /// can never go stale relative to them.
    #[inline]
    pub fn greenwashing_flag(&self) -> bool {
        is_greenwashing(self.esg_score, self.green_activity_pct)
    }

    /// Display band for the ESG score.
    #[inline]
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.esg_score)
    }

    /// Basic validation: percentages within range.
    pub fn is_valid(&self) -> bool {
        self.esg_score <= 100 && self.green_activity_pct <= 100
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for Product {}

/// Display band for an ESG score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= STRONG_SCORE_MIN {
            ScoreBand::Strong
        } else if score >= MODERATE_SCORE_MIN {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "strong",
            ScoreBand::Moderate => "moderate",
            ScoreBand::Weak => "weak",
        }
    }
}
