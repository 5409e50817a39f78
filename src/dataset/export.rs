use std::path::Path;

use serde::Serialize;

use crate::dataset::ProductCatalog;
use crate::error::Result;
use crate::models::Product;

/// Flat row handed to the rendering surface and to machine-readable output.
///
/// Carries the derived flag and band alongside the raw metrics so consumers
/// never recompute them with different thresholds.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    pub name: String,
    pub esg_score: u8,
    pub co2_emissions: u32,
    pub green_activity_pct: u8,
    pub greenwashing_flag: bool,
    pub score_band: &'static str,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            esg_score: product.esg_score,
            co2_emissions: product.co2_emissions,
            green_activity_pct: product.green_activity_pct,
            greenwashing_flag: product.greenwashing_flag(),
            score_band: product.score_band().label(),
        }
    }
}

/// Snapshot of the catalog as flat rows, in builder order.
pub fn records(catalog: &ProductCatalog) -> Vec<ProductRecord> {
    catalog.products().iter().map(ProductRecord::from).collect()
}

/// Write the product table to a CSV file.
pub fn write_csv<P: AsRef<Path>>(path: P, catalog: &ProductCatalog) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records(catalog) {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize the product table as pretty JSON.
pub fn to_json(catalog: &ProductCatalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(&records(catalog))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::build_dataset;

    #[test]
    fn test_records_carry_derived_fields() {
        let catalog = ProductCatalog::new(build_dataset());
        let rows = records(&catalog);

        assert_eq!(rows.len(), 5);
        assert!(rows[0].greenwashing_flag); // EcoGreen ETF
        assert_eq!(rows[0].score_band, "strong");
        assert_eq!(rows[3].score_band, "moderate"); // Carbon Zero Index, 65
    }

    #[test]
    fn test_write_csv() {
        let catalog = ProductCatalog::new(build_dataset());
        let file = tempfile::NamedTempFile::new().unwrap();

        write_csv(file.path(), &catalog).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "name,esg_score,co2_emissions,green_activity_pct,greenwashing_flag,score_band"
        );
        assert_eq!(lines.count(), 5);
        assert!(content.contains("EcoGreen ETF,85,120,25,true,strong"));
    }

    #[test]
    fn test_to_json_shape() {
        let catalog = ProductCatalog::new(build_dataset());
        let json = to_json(&catalog).unwrap();

        let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 5);
        assert_eq!(rows[2]["name"], "Blue Ocean Bond");
        assert_eq!(rows[2]["greenwashing_flag"], false);
    }
}
