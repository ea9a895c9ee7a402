//! Serde records mirroring the catalog source format.
//!
//! ```json
//! {
//!   "products": [
//!     {"id": "p1", "name": "Milk-A", "price": 100, "stock": 0,
//!      "category": "Dairy", "brand": "X", "attributes": ["organic"]}
//!   ],
//!   "category_relations": [
//!     {"source": "Dairy", "target": "Plant-Based", "weight": 0.8}
//!   ]
//! }
//! ```
//!
//! A missing or malformed source is a load-time error, never a query-time
//! one: parsing happens exactly once, at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The fully parsed catalog. Input to [`GraphIndex::from_catalog`](crate::GraphIndex::from_catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<ProductRecord>,
    /// Optional in the source; absent means no category similarity edges.
    #[serde(default)]
    pub category_relations: Vec<CategoryRelationRecord>,
}

/// One product row from the catalog source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub brand: String,
    #[serde(default)]
    pub attributes: Vec<String>,
}

/// One category-similarity row. `weight` defaults to 0.5 downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRelationRecord {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Catalog {
    /// Parse a catalog from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read and parse a catalog file. The only file I/O in the crate.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Structural checks beyond what serde enforces. Stock counts are
    /// already non-negative by type; prices need an explicit check.
    pub fn validate(&self) -> Result<()> {
        for p in &self.products {
            if !p.price.is_finite() || p.price < 0.0 {
                return Err(Error::Catalog(format!(
                    "product '{}' has invalid price {}",
                    p.name, p.price
                )));
            }
        }
        for r in &self.category_relations {
            if let Some(w) = r.weight {
                if !w.is_finite() {
                    return Err(Error::Catalog(format!(
                        "relation {} -> {} has non-finite weight",
                        r.source, r.target
                    )));
                }
            }
        }
        Ok(())
    }
}
