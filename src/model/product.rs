//! Product entity and the flattened details DTO.

use serde::{Deserialize, Serialize};

/// A product as stored in the graph.
///
/// Category, brand, and attributes are not fields here. They are edges in
/// the [`GraphIndex`](crate::GraphIndex), looked up per query. A `Product`
/// node carries only its own properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// Display name; unique across the catalog and used as the graph key.
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Everything a caller wants to show about a single product, with its
/// graph neighborhood (category, brand, attributes) resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetails {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub in_stock: bool,
    /// `None` when the catalog carried no category edge (tolerated).
    pub category: Option<String>,
    /// `None` when the catalog carried no brand edge (tolerated).
    pub brand: Option<String>,
    pub attributes: Vec<String>,
}
