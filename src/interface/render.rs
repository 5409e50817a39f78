use crate::analysis::comparison::ComparisonResult;
use crate::analysis::constants::{AXIS_LABELS, SCORE_BAR_WIDTH};
use crate::dataset::ProductCatalog;
use crate::models::{InvestorProfile, MarketplaceListing, Partner, Product};

/// Display the homepage banner.
pub fn display_home() {
    println!();
    println!("=== GreenInvest+ ===");
    println!();
    println!("Your open-finance platform for ESG investing.");
    println!("Analyze and compare financial instruments on Environmental,");
    println!("Social and Governance criteria, spot greenwashing, and make");
    println!("your portfolio more sustainable.");
    println!();
    println!("All ratings shown are simulated demo data.");
    println!();
}

/// Display an ESG score as a proportional bar with its band label.
pub fn display_score_bar(score: u8) {
    let filled = (score as usize * SCORE_BAR_WIDTH) / 100;
    let band = crate::models::ScoreBand::from_score(score);

    println!(
        "  ESG Score {:>3}/100  [{}{}] {}",
        score,
        "#".repeat(filled),
        "-".repeat(SCORE_BAR_WIDTH - filled),
        band.label()
    );
}

/// Display one product's detail card.
pub fn display_product_detail(product: &Product) {
    println!();
    println!("--- {} ---", product.name);
    display_score_bar(product.esg_score);
    println!("  CO2 emissions (tonnes): {}", product.co2_emissions);
    println!(
        "  Green activity: {}% green / {}% non-green",
        product.green_activity_pct,
        100 - product.green_activity_pct as u32
    );

    if product.greenwashing_flag() {
        println!("  [!] Greenwashing alert: high ESG score but a low share of actual green activity.");
    }
}

/// Display the score overview as a text bar chart.
pub fn display_overview(catalog: &ProductCatalog) {
    let max_name_len = catalog
        .products()
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(10);

    println!();
    println!("=== ESG Score Overview ===");
    println!();

    for product in catalog.products() {
        let filled = (product.esg_score as usize * SCORE_BAR_WIDTH) / 100;
        println!(
            "  {:<width$}  [{}{}] {:>3} ({})",
            product.name,
            "#".repeat(filled),
            "-".repeat(SCORE_BAR_WIDTH - filled),
            product.esg_score,
            product.score_band().label(),
            width = max_name_len
        );
    }
}

/// Display the dataset as an aligned table.
pub fn display_table(catalog: &ProductCatalog) {
    let max_name_len = catalog
        .products()
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(10)
        .max("Product".len());

    println!();
    println!("=== Table View ===");
    println!();
    println!(
        "  {:<width$}  {:>9}  {:>12}  {:>8}  {:>12}",
        "Product",
        "ESG Score",
        "CO2 (tonnes)",
        "Green %",
        "Greenwashing",
        width = max_name_len
    );

    for product in catalog.products() {
        println!(
            "  {:<width$}  {:>9}  {:>12}  {:>8}  {:>12}",
            product.name,
            product.esg_score,
            product.co2_emissions,
            product.green_activity_pct,
            if product.greenwashing_flag() { "yes" } else { "no" },
            width = max_name_len
        );
    }
    println!();
}

/// Display the full portfolio dashboard: overview, detail cards, table.
pub fn display_dashboard(catalog: &ProductCatalog) {
    display_overview(catalog);

    println!();
    println!("=== Product Details ===");
    for product in catalog.products() {
        display_product_detail(product);
    }

    display_table(catalog);
}

/// Display a comparison: both cards, the verdict, and the normalized axes.
pub fn display_comparison(result: &ComparisonResult, first: &Product, second: &Product) {
    println!();
    println!("=== Comparison: {} vs {} ===", result.first, result.second);

    display_product_detail(first);
    display_product_detail(second);

    println!();
    println!("--- Comparative Analysis ---");
    println!("  {}", result.verdict.describe(&result.first, &result.second));
    let delta_sign = if result.score_delta >= 0 { "+" } else { "" };
    println!("  ESG score delta: {}{}", delta_sign, result.score_delta);

    let first_values = result.first_axes.as_array();
    let second_values = result.second_axes.as_array();
    let label_width = AXIS_LABELS.iter().map(|l| l.len()).max().unwrap_or(4);
    let first_width = result.first.len().max(4);
    let second_width = result.second.len().max(4);

    println!();
    println!("--- Normalized Breakdown (0 to 1, higher is better) ---");
    println!(
        "  {:<label_width$}  {:>first_width$}  {:>second_width$}",
        "Axis", result.first, result.second
    );
    for (i, label) in AXIS_LABELS.iter().enumerate() {
        println!(
            "  {:<label_width$}  {:>first_width$.2}  {:>second_width$.2}",
            label, first_values[i], second_values[i]
        );
    }
    println!();
}

/// Display partner cards and marketplace listings.
pub fn display_partners(partners: &[Partner], listings: &[MarketplaceListing]) {
    println!();
    println!("=== Partners ===");
    for partner in partners {
        println!();
        println!("--- {} ({}) ---", partner.name, partner.kind);
        println!("  {}", partner.blurb);
    }

    println!();
    println!("=== Sustainable Marketplace ===");
    for listing in listings {
        println!();
        println!("--- {} ---", listing.name);
        println!("  Partner: {}", listing.partner);
        println!("  Minimum investment: EUR {}", listing.min_investment);
        println!("  Expected return: {}", listing.expected_return);
        println!("  Impact: {}", listing.impact);
    }
    println!();
}

/// Display the profile summary and tailored suggestion.
pub fn display_profile_summary(profile: &InvestorProfile) {
    println!();
    println!("=== Profile Summary ===");
    println!("  Profile type: {}", profile.profile_type.label());
    println!("  Age: {}", profile.age);
    println!("  Experience: {}", profile.experience.label());
    println!("  ESG interest: {}", profile.esg_interest.label());
    println!();
    println!("  Suggestion: {}", profile.suggestion());
    println!();
}
