//! Edge cases: unknown names, empty catalogs, zero budgets, defaulted and
//! degenerate weights, and deterministic tie-breaking.

use pretty_assertions::assert_eq;
use shopsmart::{Catalog, Error, GraphIndex, Product, SubstitutionEngine};

fn engine_from(json: &str) -> SubstitutionEngine {
    SubstitutionEngine::from_catalog(&Catalog::from_json(json).unwrap()).unwrap()
}

// ============================================================================
// 1. Unknown product: empty everywhere, never an error
// ============================================================================

#[test]
fn unknown_product_degrades_to_empty() {
    let engine = engine_from(
        r#"{"products": [{"id": "p1", "name": "Milk-A", "price": 100,
            "stock": 0, "category": "Dairy", "brand": "X"}]}"#,
    );

    assert!(!engine.check_exact_match("Nonexistent"));
    assert_eq!(engine.find_substitutes("Nonexistent", 100.0, &[], None), vec![]);
    assert_eq!(engine.get_product_details("Nonexistent"), None);
}

// ============================================================================
// 2. Empty catalog
// ============================================================================

#[test]
fn empty_catalog_is_valid() {
    let engine = engine_from(r#"{"products": []}"#);

    assert_eq!(engine.graph().product_count(), 0);
    assert_eq!(engine.find_substitutes("Anything", 100.0, &[], None), vec![]);
}

// ============================================================================
// 3. Out of stock with no surviving candidates vs. in stock:
//    both empty, disambiguated by the exact-match check
// ============================================================================

#[test]
fn empty_result_disambiguation() {
    let engine = engine_from(
        r#"{"products": [
            {"id": "p1", "name": "Milk-A", "price": 100, "stock": 0,
             "category": "Dairy", "brand": "X"},
            {"id": "p2", "name": "Milk-B", "price": 90, "stock": 5,
             "category": "Dairy", "brand": "X"}
        ]}"#,
    );

    // Out of stock, but the only candidate busts a tiny budget.
    assert!(engine.find_substitutes("Milk-A", 10.0, &[], None).is_empty());
    assert!(!engine.check_exact_match("Milk-A"));

    // In stock: also empty, but the exact-match check says so.
    assert!(engine.find_substitutes("Milk-B", 200.0, &[], None).is_empty());
    assert!(engine.check_exact_match("Milk-B"));
}

// ============================================================================
// 4. Zero budget: ratio falls back to 0 instead of dividing by zero
// ============================================================================

#[test]
fn zero_max_price_only_free_products_survive() {
    let engine = engine_from(
        r#"{"products": [
            {"id": "p1", "name": "Sample-A", "price": 0, "stock": 0,
             "category": "Samples", "brand": "X"},
            {"id": "p2", "name": "Sample-B", "price": 0, "stock": 3,
             "category": "Samples", "brand": "Y"},
            {"id": "p3", "name": "Priced", "price": 5, "stock": 3,
             "category": "Samples", "brand": "Y"}
        ]}"#,
    );

    let subs = engine.find_substitutes("Sample-A", 0.0, &[], None);
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].name, "Sample-B");
    // 10×1 + 0 + 1×(1 − 0) with the zero-budget ratio fallback
    assert_eq!(subs[0].score, 11.0);
}

// ============================================================================
// 5. Relation weight: default 0.5, and zero-weight distance fallback
// ============================================================================

#[test]
fn defaulted_weight_gives_distance_two() {
    let engine = engine_from(
        r#"{"products": [
            {"id": "p1", "name": "Milk-A", "price": 100, "stock": 0,
             "category": "Dairy", "brand": "X"},
            {"id": "p2", "name": "Oat-Drink", "price": 100, "stock": 5,
             "category": "Plant-Based", "brand": "Z"}
        ],
        "category_relations": [
            {"source": "Dairy", "target": "Plant-Based"}
        ]}"#,
    );

    let subs = engine.find_substitutes("Milk-A", 200.0, &[], None);
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].category_distance, 2.0); // 1 / 0.5
    assert_eq!(subs[0].score, 5.5); // 10/2 + 0 + (1 − 100/200)
}

#[test]
fn zero_weight_falls_back_to_distance_two() {
    let engine = engine_from(
        r#"{"products": [
            {"id": "p1", "name": "Milk-A", "price": 100, "stock": 0,
             "category": "Dairy", "brand": "X"},
            {"id": "p2", "name": "Oat-Drink", "price": 100, "stock": 5,
             "category": "Plant-Based", "brand": "Z"}
        ],
        "category_relations": [
            {"source": "Dairy", "target": "Plant-Based", "weight": 0.0}
        ]}"#,
    );

    let subs = engine.find_substitutes("Milk-A", 200.0, &[], None);
    assert_eq!(subs[0].category_distance, 2.0);
}

// ============================================================================
// 6. Score ties reproduce the catalog enumeration order
// ============================================================================

#[test]
fn tie_order_is_deterministic() {
    let engine = engine_from(
        r#"{"products": [
            {"id": "p1", "name": "Milk-A", "price": 100, "stock": 0,
             "category": "Dairy", "brand": "X"},
            {"id": "p2", "name": "Twin-1", "price": 80, "stock": 1,
             "category": "Dairy", "brand": "Y"},
            {"id": "p3", "name": "Twin-2", "price": 80, "stock": 1,
             "category": "Dairy", "brand": "Y"},
            {"id": "p4", "name": "Twin-3", "price": 80, "stock": 1,
             "category": "Dairy", "brand": "Y"}
        ]}"#,
    );

    for _ in 0..10 {
        let names: Vec<String> = engine
            .find_substitutes("Milk-A", 100.0, &[], None)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Twin-1", "Twin-2", "Twin-3"]);
    }
}

// ============================================================================
// 7. Load-time failures are errors; query time never is
// ============================================================================

#[test]
fn load_time_errors_are_fatal() {
    assert!(matches!(Catalog::from_json("{"), Err(Error::Parse(_))));
    assert!(matches!(
        Catalog::from_json(
            r#"{"products": [{"id": "p1", "name": "Bad", "price": -5,
                "stock": 0, "category": "C", "brand": "B"}]}"#
        ),
        Err(Error::Catalog(_))
    ));
}

// ============================================================================
// 8. Hand-built malformed graphs are tolerated at query time
// ============================================================================

#[test]
fn categoryless_product_yields_empty_not_panic() {
    let mut graph = GraphIndex::new();
    graph.add_product(Product::new("p1", "Orphan", 50.0, 0));
    let engine = SubstitutionEngine::new(graph);

    assert_eq!(engine.find_substitutes("Orphan", 100.0, &[], None), vec![]);
    let details = engine.get_product_details("Orphan").unwrap();
    assert_eq!(details.category, None);
    assert_eq!(details.brand, None);
}
