//! Weighted candidate scoring.
//!
//! `score = W_CATEGORY · (1/d_cat) + W_BRAND · m_brand + W_PRICE · (1 − P_ratio)`
//!
//! Pure functions only: the scorer never touches the graph. Callers resolve
//! the candidate's brand and price first and pass them in.

/// Weight of category proximity.
pub const W_CATEGORY: f64 = 10.0;
/// Weight of a preferred-brand match.
pub const W_BRAND: f64 = 5.0;
/// Weight of the price advantage.
pub const W_PRICE: f64 = 1.0;

/// Distance used when a similarity weight is zero or negative.
const FALLBACK_DISTANCE: f64 = 2.0;

/// Category distance from a similarity weight: `1/weight`, or 2.0 when the
/// weight is unusable. Same-category candidates use distance 1.0 directly.
pub fn category_distance(weight: f64) -> f64 {
    if weight > 0.0 {
        1.0 / weight
    } else {
        FALLBACK_DISTANCE
    }
}

/// Score a candidate against the request context. Higher is better; the
/// formula imposes no upper bound. Result is rounded to 2 decimals.
///
/// `price_ratio` is `candidate_price / max_price` when `max_price > 0`,
/// else 0, so a zero budget never divides by zero. The ratio is deliberately
/// not clamped: the A-priori price filter upstream keeps it in `[0, 1]`
/// in practice, but that is the caller's invariant, not this function's.
pub fn score(
    candidate_price: f64,
    candidate_brand: Option<&str>,
    category_distance: f64,
    preferred_brand: Option<&str>,
    max_price: f64,
) -> f64 {
    let category_score = W_CATEGORY * (1.0 / category_distance);

    let brand_match = match (preferred_brand, candidate_brand) {
        (Some(preferred), Some(brand)) if preferred == brand => 1.0,
        _ => 0.0,
    };
    let brand_score = W_BRAND * brand_match;

    let price_ratio = if max_price > 0.0 {
        candidate_price / max_price
    } else {
        0.0
    };
    let price_score = W_PRICE * (1.0 - price_ratio);

    round2(category_score + brand_score + price_score)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// ============================================================================
// Tests
// ============================================================================
