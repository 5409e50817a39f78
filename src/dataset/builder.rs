use crate::models::{MarketplaceListing, Partner, Product};

/// Build the fixed demo dataset of five financial products.
///
/// Deterministic: same rows, same order, on every call. The greenwashing
/// flag is derived from the metrics, so there is nothing else to compute.
pub fn build_dataset() -> Vec<Product> {
    vec![
        Product::new("EcoGreen ETF", 85, 120, 25),
        Product::new("Sustainability Fund", 72, 200, 65),
        Product::new("Blue Ocean Bond", 93, 50, 82),
        Product::new("Carbon Zero Index", 65, 180, 60),
        Product::new("Future Energy Trust", 78, 150, 45),
    ]
}

/// Partner organizations shown on the marketplace page.
pub fn partners() -> Vec<Partner> {
    vec![
        Partner {
            name: "Intesa Sanpaolo",
            kind: "Financial incumbent",
            blurb: "Provides ESG data for its certified financial products, \
                    broadening the range of instruments on the platform.",
        },
        Partner {
            name: "Clarity AI",
            kind: "Innovative startup",
            blurb: "Uses machine learning to analyze corporate ESG impact, \
                    supplying reliable and transparent ratings data.",
        },
        Partner {
            name: "Coop",
            kind: "Cross-sector partner",
            blurb: "Promotes sustainable financial education among its members \
                    through workshops and training content.",
        },
    ]
}

/// Investment opportunities offered through partners.
pub fn marketplace_listings() -> Vec<MarketplaceListing> {
    vec![
        MarketplaceListing {
            name: "Green Bond Facility",
            partner: "Intesa Sanpaolo",
            min_investment: 5000,
            expected_return: "2.5%",
            impact: "Funds renewable energy projects",
        },
        MarketplaceListing {
            name: "Ocean Fund",
            partner: "Clarity AI",
            min_investment: 10000,
            expected_return: "3.8%",
            impact: "Protects marine ecosystems",
        },
        MarketplaceListing {
            name: "Community Impact ETF",
            partner: "Coop",
            min_investment: 1000,
            expected_return: "2.2%",
            impact: "Develops sustainable local communities",
        },
    ]
}
