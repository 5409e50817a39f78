use assert_float_eq::assert_float_absolute_eq;

use green_invest_rs::analysis::{compare, RadarAxes, Verdict};
use green_invest_rs::dataset::{build_dataset, ProductCatalog};
use green_invest_rs::error::EsgError;
use green_invest_rs::models::Product;

fn demo_catalog() -> ProductCatalog {
    ProductCatalog::new(build_dataset())
}

#[test]
fn test_clear_winner_with_margin() {
    let catalog = demo_catalog();
    let blue_ocean = catalog.get("Blue Ocean Bond").unwrap();
    let carbon_zero = catalog.get("Carbon Zero Index").unwrap();

    let result = compare(blue_ocean, carbon_zero, catalog.max_co2_emissions()).unwrap();

    assert_eq!(result.score_delta, 28);
    assert_eq!(result.verdict, Verdict::FirstMoreSustainable { margin: 28 });
}

#[test]
fn test_flagged_high_scorer_needs_manual_review() {
    let catalog = demo_catalog();
    let ecogreen = catalog.get("EcoGreen ETF").unwrap();
    let sustainability = catalog.get("Sustainability Fund").unwrap();

    // 85 > 72, but EcoGreen is a greenwashing case (85 > 80 and 25 < 30).
    assert!(ecogreen.greenwashing_flag());

    let result = compare(ecogreen, sustainability, catalog.max_co2_emissions()).unwrap();
    assert_eq!(result.verdict, Verdict::NeedsManualReview);

    // Review verdicts hold in both directions.
    let reversed = compare(sustainability, ecogreen, catalog.max_co2_emissions()).unwrap();
    assert_eq!(reversed.verdict, Verdict::NeedsManualReview);
}

#[test]
fn test_same_product_is_validation_condition() {
    let catalog = demo_catalog();
    let product = catalog.get("EcoGreen ETF").unwrap();

    let err = compare(product, product, catalog.max_co2_emissions()).unwrap_err();
    assert!(matches!(err, EsgError::SameProductSelected(_)));
}

#[test]
fn test_comparison_is_antisymmetric_over_dataset() {
    let catalog = demo_catalog();
    let max_co2 = catalog.max_co2_emissions();

    for a in catalog.products() {
        for b in catalog.products() {
            if a == b {
                continue;
            }

            let forward = compare(a, b, max_co2).unwrap();
            let backward = compare(b, a, max_co2).unwrap();

            assert_eq!(forward.score_delta, -backward.score_delta);

            match forward.verdict {
                Verdict::FirstMoreSustainable { margin } => {
                    assert_eq!(
                        backward.verdict,
                        Verdict::SecondMoreSustainable { margin },
                        "{} vs {}",
                        a.name,
                        b.name
                    );
                }
                Verdict::SecondMoreSustainable { margin } => {
                    assert_eq!(
                        backward.verdict,
                        Verdict::FirstMoreSustainable { margin },
                        "{} vs {}",
                        a.name,
                        b.name
                    );
                }
                Verdict::NeedsManualReview => {
                    assert_eq!(backward.verdict, Verdict::NeedsManualReview);
                }
            }
        }
    }
}

#[test]
fn test_axes_normalization_against_dataset_max() {
    let catalog = demo_catalog();
    assert_eq!(catalog.max_co2_emissions(), 200);

    let blue_ocean = catalog.get("Blue Ocean Bond").unwrap();
    let axes = RadarAxes::for_product(blue_ocean, catalog.max_co2_emissions());

    assert_float_absolute_eq!(axes.esg_score, 0.93, 1e-9);
    assert_float_absolute_eq!(axes.low_emissions, 0.75, 1e-9);
    assert_float_absolute_eq!(axes.green_activity, 0.82, 1e-9);
}

#[test]
fn test_axes_stay_in_unit_range() {
    let catalog = demo_catalog();
    let max_co2 = catalog.max_co2_emissions();

    for product in catalog.products() {
        for value in RadarAxes::for_product(product, max_co2).as_array() {
            assert!((0.0..=1.0).contains(&value), "{}: {}", product.name, value);
        }
    }
}

#[test]
fn test_max_co2_is_dataset_relative_not_pair_relative() {
    let catalog = demo_catalog();
    let blue_ocean = catalog.get("Blue Ocean Bond").unwrap();
    let ecogreen = catalog.get("EcoGreen ETF").unwrap();

    // Neither compared product holds the dataset maximum (Sustainability
    // Fund does, at 200), yet the axes still normalize against it.
    let result = compare(blue_ocean, ecogreen, catalog.max_co2_emissions()).unwrap();
    assert_float_absolute_eq!(result.first_axes.low_emissions, 0.75, 1e-9);
    assert_float_absolute_eq!(result.second_axes.low_emissions, 0.40, 1e-9);
}

#[test]
fn test_verdict_description_names_winner() {
    let a = Product::new("Winner Fund", 90, 10, 70);
    let b = Product::new("Runner Up", 60, 20, 50);

    let result = compare(&a, &b, 20).unwrap();
    let summary = result.verdict.describe(&result.first, &result.second);

    assert!(summary.starts_with("Winner Fund"));
    assert!(summary.contains("+30"));
}
