mod persistence;
mod store;

pub use persistence::{load_catalog, parse_catalog_csv, parse_catalog_json};
pub use store::{CatalogSummary, FoodCatalog};
