use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::catalog::FoodCatalog;
use crate::error::{NutriError, Result};
use crate::models::FoodItem;

/// Parse a JSON array of food records.
pub fn parse_catalog_json(content: &str) -> Result<Vec<FoodItem>> {
    Ok(serde_json::from_str(content)?)
}

/// Parse CSV food records with a header row.
pub fn parse_catalog_csv<R: Read>(reader: R) -> Result<Vec<FoodItem>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut foods = Vec::new();
    for record in rdr.deserialize() {
        foods.push(record?);
    }
    Ok(foods)
}

/// Load a catalog from a `.json` or `.csv` file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let foods = match extension.as_str() {
        "json" => parse_catalog_json(&fs::read_to_string(path)?)?,
        "csv" => parse_catalog_csv(fs::File::open(path)?)?,
        other => return Err(NutriError::UnsupportedFormat(other.to_string())),
    };

    info!(path = %path.display(), rows = foods.len(), "Loaded food catalog");
    Ok(FoodCatalog::new(foods))
}
