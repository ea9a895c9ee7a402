//! Typed graph index over the catalog.
//!
//! The schema is fixed (four node kinds, four relation kinds), so instead
//! of a generic node/edge store this is explicit tables: products keyed by
//! name, name sets for categories/brands/attributes, and one adjacency map
//! per relation kind. Edges are undirected: every `add_relation` writes
//! both endpoints' lists.
//!
//! ## Guarantees
//!
//! - **Lookups never fail**: an unknown node name yields an empty result,
//!   not an error.
//! - **Deterministic neighbor order**: adjacency lists keep catalog
//!   insertion order, so ranking ties reproduce across runs.
//! - **Read-only after build**: all `add_*` calls happen during
//!   construction; queries take `&self` and the index can be shared by
//!   any number of callers without synchronization.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Catalog, Product};
use crate::Result;

/// Similarity weight used when a category relation carries none.
pub const DEFAULT_RELATION_WEIGHT: f64 = 0.5;

// ============================================================================
// Node & relation kinds
// ============================================================================

/// The four node types of the catalog schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Product,
    Category,
    Brand,
    Attribute,
}

/// The four typed edges of the catalog schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Product to Category
    IsA,
    /// Product to Brand
    HasBrand,
    /// Product to Attribute
    HasAttribute,
    /// Category to Category, weighted
    IsSimilarTo,
}

impl RelationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::IsA => "IS_A",
            RelationKind::HasBrand => "HAS_BRAND",
            RelationKind::HasAttribute => "HAS_ATTRIBUTE",
            RelationKind::IsSimilarTo => "IS_SIMILAR_TO",
        }
    }
}

// ============================================================================
// GraphIndex
// ============================================================================

/// In-memory typed graph over products, categories, brands, attributes.
#[derive(Debug, Default)]
pub struct GraphIndex {
    products: HashMap<String, Product>,
    categories: HashSet<String>,
    brands: HashSet<String>,
    attributes: HashSet<String>,

    // Adjacency per relation kind, both directions, insertion-ordered.
    product_category: HashMap<String, Vec<String>>,
    category_products: HashMap<String, Vec<String>>,
    product_brand: HashMap<String, Vec<String>>,
    brand_products: HashMap<String, Vec<String>>,
    product_attributes: HashMap<String, Vec<String>>,
    attribute_products: HashMap<String, Vec<String>>,
    category_similar: HashMap<String, Vec<(String, f64)>>,
}

impl GraphIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full index from a parsed catalog.
    ///
    /// One product row becomes: a product node, idempotent
    /// category/brand/attribute nodes, and `IS_A` / `HAS_BRAND` /
    /// `HAS_ATTRIBUTE` edges. Relation rows become weighted
    /// `IS_SIMILAR_TO` edges between categories.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self> {
        catalog.validate()?;

        let mut graph = Self::new();
        for rec in &catalog.products {
            graph.add_product(Product::new(&rec.id, &rec.name, rec.price, rec.stock));
            graph.add_category(&rec.category);
            graph.add_brand(&rec.brand);
            graph.add_relation(&rec.name, &rec.category, RelationKind::IsA, None);
            graph.add_relation(&rec.name, &rec.brand, RelationKind::HasBrand, None);
            for attr in &rec.attributes {
                graph.add_attribute(attr);
                graph.add_relation(&rec.name, attr, RelationKind::HasAttribute, None);
            }
        }
        for rel in &catalog.category_relations {
            graph.add_relation(&rel.source, &rel.target, RelationKind::IsSimilarTo, rel.weight);
        }

        debug!(
            products = graph.products.len(),
            categories = graph.categories.len(),
            brands = graph.brands.len(),
            attributes = graph.attributes.len(),
            "graph index built from catalog"
        );
        Ok(graph)
    }

    // ========================================================================
    // Build phase
    // ========================================================================

    /// Insert a product, keyed by name. A duplicate name replaces the
    /// node properties but keeps the earlier edges (first neighbor wins).
    pub fn add_product(&mut self, product: Product) {
        self.products.insert(product.name.clone(), product);
    }

    /// Idempotent: inserting an existing category is a no-op.
    pub fn add_category(&mut self, name: impl Into<String>) {
        self.categories.insert(name.into());
    }

    /// Idempotent: inserting an existing brand is a no-op.
    pub fn add_brand(&mut self, name: impl Into<String>) {
        self.brands.insert(name.into());
    }

    /// Idempotent: inserting an existing attribute is a no-op.
    pub fn add_attribute(&mut self, name: impl Into<String>) {
        self.attributes.insert(name.into());
    }

    /// Create an undirected typed edge between `a` and `b`.
    ///
    /// `weight` only applies to `IsSimilarTo` and defaults to
    /// [`DEFAULT_RELATION_WEIGHT`] when absent.
    pub fn add_relation(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        kind: RelationKind,
        weight: Option<f64>,
    ) {
        let (a, b) = (a.into(), b.into());
        match kind {
            RelationKind::IsA => {
                self.product_category.entry(a.clone()).or_default().push(b.clone());
                self.category_products.entry(b).or_default().push(a);
            }
            RelationKind::HasBrand => {
                self.product_brand.entry(a.clone()).or_default().push(b.clone());
                self.brand_products.entry(b).or_default().push(a);
            }
            RelationKind::HasAttribute => {
                self.product_attributes.entry(a.clone()).or_default().push(b.clone());
                self.attribute_products.entry(b).or_default().push(a);
            }
            RelationKind::IsSimilarTo => {
                let w = weight.unwrap_or(DEFAULT_RELATION_WEIGHT);
                self.category_similar.entry(a.clone()).or_default().push((b.clone(), w));
                if a != b {
                    self.category_similar.entry(b).or_default().push((a, w));
                }
            }
        }
    }

    // ========================================================================
    // Typed lookups (never fail: unknown names give empty results)
    // ========================================================================

    /// All direct neighbors of `node` whose type is `kind`, in insertion
    /// order. A name that exists as no node at all yields an empty list.
    pub fn neighbors_of_type(&self, node: &str, kind: NodeKind) -> Vec<&str> {
        match kind {
            NodeKind::Product => self
                .category_products
                .get(node)
                .into_iter()
                .chain(self.brand_products.get(node))
                .chain(self.attribute_products.get(node))
                .flatten()
                .map(String::as_str)
                .collect(),
            NodeKind::Category => {
                let mut out: Vec<&str> = self
                    .product_category
                    .get(node)
                    .into_iter()
                    .flatten()
                    .map(String::as_str)
                    .collect();
                if let Some(similar) = self.category_similar.get(node) {
                    out.extend(similar.iter().map(|(name, _)| name.as_str()));
                }
                out
            }
            NodeKind::Brand => self
                .product_brand
                .get(node)
                .into_iter()
                .flatten()
                .map(String::as_str)
                .collect(),
            NodeKind::Attribute => self
                .product_attributes
                .get(node)
                .into_iter()
                .flatten()
                .map(String::as_str)
                .collect(),
        }
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    /// First category neighbor, or `None` for unknown/uncategorized
    /// products. Malformed data (several categories) is tolerated: the
    /// first edge wins.
    pub fn category_of(&self, product: &str) -> Option<&str> {
        self.product_category
            .get(product)
            .and_then(|c| c.first())
            .map(String::as_str)
    }

    /// First brand neighbor, or `None`. Same first-edge-wins tolerance.
    pub fn brand_of(&self, product: &str) -> Option<&str> {
        self.product_brand
            .get(product)
            .and_then(|b| b.first())
            .map(String::as_str)
    }

    /// All attribute neighbors of a product; empty for unknown names.
    pub fn attributes_of(&self, product: &str) -> &[String] {
        self.product_attributes
            .get(product)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All products filed under a category; empty for unknown names.
    pub fn products_in_category(&self, category: &str) -> &[String] {
        self.category_products
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Categories one similarity edge away, with their weights.
    pub fn related_categories(&self, category: &str) -> &[(String, f64)] {
        self.category_similar
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // ========================================================================
    // Enumeration (sorted, for UI collaborators)
    // ========================================================================

    pub fn product_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.products.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn category_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.categories.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn brand_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.brands.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.attributes.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
