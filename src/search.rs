//! Substitution search: the query surface of the engine.
//!
//! A search runs in stages: exact-match check, same-category pass,
//! related-category pass (one similarity edge deep), then merge, rank,
//! and cut to the top 3. Candidates must survive the A-priori filter
//! (in stock, within budget, carrying every required tag) before they
//! are scored at all.
//!
//! Every "not found" condition at query time degrades to an empty
//! result. An empty substitute list means either "product is in stock,
//! nothing to do" or "out of stock and nothing matched"; callers
//! disambiguate with [`SubstitutionEngine::check_exact_match`].

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::graph::GraphIndex;
use crate::model::{Catalog, Product, ProductDetails};
use crate::rules::{determine_rules, explanation_for, RuleInputs, RuleSet};
use crate::scoring::{category_distance, score};
use crate::Result;

/// Ranked results are cut to this many entries.
pub const MAX_SUBSTITUTES: usize = 3;

// ============================================================================
// Result DTO
// ============================================================================

/// One ranked substitute candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Substitute {
    pub name: String,
    pub brand: Option<String>,
    pub price: f64,
    pub stock: u32,
    pub score: f64,
    /// 1.0 for same-category candidates, `1/weight` for related ones.
    pub category_distance: f64,
    /// Every matched rule, highest priority first.
    pub rule_tags: RuleSet,
    /// Text of the highest-priority matched rule only.
    pub explanation: &'static str,
}

// ============================================================================
// SubstitutionEngine
// ============================================================================

/// The primary entry point. Owns the read-only graph index and answers
/// product-detail, stock, and substitution queries against it.
///
/// Build one engine per process at startup and share it by reference:
/// all query methods take `&self` and keep no per-call state.
pub struct SubstitutionEngine {
    graph: GraphIndex,
}

impl SubstitutionEngine {
    pub fn new(graph: GraphIndex) -> Self {
        Self { graph }
    }

    /// Build the graph from a parsed catalog and wrap it.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self> {
        Ok(Self::new(GraphIndex::from_catalog(catalog)?))
    }

    /// Access the underlying graph (for UI enumerations and the like).
    pub fn graph(&self) -> &GraphIndex {
        &self.graph
    }

    /// Is the requested product itself available? `false` for unknown
    /// names.
    pub fn check_exact_match(&self, name: &str) -> bool {
        self.graph.product(name).is_some_and(Product::in_stock)
    }

    /// A product with its graph neighborhood resolved, or `None` for
    /// unknown names.
    pub fn get_product_details(&self, name: &str) -> Option<ProductDetails> {
        let product = self.graph.product(name)?;
        Some(ProductDetails {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
            in_stock: product.in_stock(),
            category: self.graph.category_of(name).map(str::to_string),
            brand: self.graph.brand_of(name).map(str::to_string),
            attributes: self.graph.attributes_of(name).to_vec(),
        })
    }

    /// Find up to [`MAX_SUBSTITUTES`] in-stock substitutes for an
    /// unavailable product, best score first.
    ///
    /// Returns an empty list when the product is unknown, is itself in
    /// stock, has no resolvable category, or nothing survives the
    /// A-priori filter.
    pub fn find_substitutes(
        &self,
        requested: &str,
        max_price: f64,
        required_tags: &[&str],
        preferred_brand: Option<&str>,
    ) -> Vec<Substitute> {
        let Some(requested_product) = self.graph.product(requested) else {
            return Vec::new();
        };
        if requested_product.in_stock() {
            // No substitution needed.
            return Vec::new();
        }
        let Some(category) = self.graph.category_of(requested) else {
            return Vec::new();
        };
        let requested_brand = self.graph.brand_of(requested);

        let mut candidates = Vec::new();

        // Same-category pass: distance is exactly 1.
        for name in self.graph.products_in_category(category) {
            if name == requested {
                continue;
            }
            if let Some(sub) = self.evaluate(
                name,
                requested_product,
                requested_brand,
                1.0,
                true,
                max_price,
                required_tags,
                preferred_brand,
            ) {
                candidates.push(sub);
            }
        }

        // Related-category pass: one similarity edge deep. The requested
        // product cannot reappear here since it lives in a different category.
        for (related, weight) in self.graph.related_categories(category) {
            let distance = category_distance(*weight);
            for name in self.graph.products_in_category(related) {
                if let Some(sub) = self.evaluate(
                    name,
                    requested_product,
                    requested_brand,
                    distance,
                    false,
                    max_price,
                    required_tags,
                    preferred_brand,
                ) {
                    candidates.push(sub);
                }
            }
        }

        // Stable sort: score ties keep the deterministic enumeration order.
        candidates.sort_by(|a, b| {
            b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
        });
        candidates.truncate(MAX_SUBSTITUTES);

        debug!(
            requested,
            category,
            returned = candidates.len(),
            "substitution search complete"
        );
        candidates
    }

    /// A-priori filter, then score / rule-tag / explain one candidate.
    /// `None` means the candidate was filtered out (or isn't a product).
    #[allow(clippy::too_many_arguments)]
    fn evaluate(
        &self,
        name: &str,
        requested: &Product,
        requested_brand: Option<&str>,
        distance: f64,
        same_category: bool,
        max_price: f64,
        required_tags: &[&str],
        preferred_brand: Option<&str>,
    ) -> Option<Substitute> {
        let product = self.graph.product(name)?;

        if !product.in_stock() {
            return None;
        }
        if product.price > max_price {
            return None;
        }
        let attributes = self.graph.attributes_of(name);
        if !required_tags
            .iter()
            .all(|tag| attributes.iter().any(|a| a == tag))
        {
            return None;
        }

        let brand = self.graph.brand_of(name);
        let score = score(product.price, brand, distance, preferred_brand, max_price);
        let rule_tags = determine_rules(&RuleInputs {
            same_category,
            candidate_brand: brand,
            requested_brand,
            candidate_price: product.price,
            requested_price: requested.price,
            required_tags,
            candidate_attributes: attributes,
        });
        let explanation = explanation_for(&rule_tags);

        Some(Substitute {
            name: product.name.clone(),
            brand: brand.map(str::to_string),
            price: product.price,
            stock: product.stock,
            score,
            category_distance: distance,
            rule_tags,
            explanation,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
