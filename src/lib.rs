//! # shopsmart-rs — Product Substitution Engine
//!
//! A typed in-memory knowledge graph over a retail catalog, with a
//! rule-based substitution search on top. No ML, no embeddings: pure
//! graph lookups, a fixed weighted scoring formula, and a small
//! priority-ordered rule table that picks one human-readable explanation
//! per candidate.
//!
//! ## Design Principles
//!
//! 1. **Typed tables, not a generic graph**: the schema is fixed
//!    (product, category, brand, attribute), so the index is explicit
//!    maps and adjacency lists per relation kind
//! 2. **Build once, read forever**: the graph is constructed from the
//!    catalog at startup and never mutated; queries borrow it
//! 3. **Fail-soft queries**: unknown names degrade to empty results,
//!    never errors. The engine is advisory, not a record store
//! 4. **Pure scoring**: the score function has no access to the graph
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shopsmart::{Catalog, SubstitutionEngine};
//!
//! # fn example() -> shopsmart::Result<()> {
//! let catalog = Catalog::from_file("data.json")?;
//! let engine = SubstitutionEngine::from_catalog(&catalog)?;
//!
//! if !engine.check_exact_match("Milk-A") {
//!     for sub in engine.find_substitutes("Milk-A", 120.0, &["organic"], Some("X")) {
//!         println!("{} ({:.2}): {}", sub.name, sub.score, sub.explanation);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod scoring;
pub mod rules;
pub mod search;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Catalog, CategoryRelationRecord, Product, ProductDetails, ProductRecord,
};

// ============================================================================
// Re-exports: Graph
// ============================================================================

pub use graph::{GraphIndex, NodeKind, RelationKind, DEFAULT_RELATION_WEIGHT};

// ============================================================================
// Re-exports: Scoring & Rules
// ============================================================================

pub use scoring::{category_distance, score, W_BRAND, W_CATEGORY, W_PRICE};
pub use rules::{determine_rules, explanation_for, Rule, RuleInputs, RuleSet};

// ============================================================================
// Re-exports: Search
// ============================================================================

pub use search::{Substitute, SubstitutionEngine, MAX_SUBSTITUTES};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The catalog source was not parseable as the expected structure.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog parsed but a record is structurally invalid.
    #[error("Invalid catalog record: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
