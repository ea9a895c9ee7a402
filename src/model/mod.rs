//! # Catalog Model
//!
//! Clean DTOs for the product catalog: the serde-facing record types that
//! mirror the catalog JSON, and the typed entities the graph stores.
//!
//! Design rule: this module is pure data. No graph state, no I/O beyond
//! the convenience `Catalog::from_file` reader, no scoring.

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, CategoryRelationRecord, ProductRecord};
pub use product::{Product, ProductDetails};
