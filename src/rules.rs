//! Rule table and explanation selection.
//!
//! Five fixed business rules, priority 1 (highest) to 5. Rules are not
//! mutually exclusive: a candidate collects every rule whose condition
//! holds, in priority order. Only the top-priority rule's explanation is
//! ever surfaced; lower-priority matches stay visible as tags but never
//! as text.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Candidate price must be at or below this fraction of the requested
/// product's price for `CheaperOption` to fire.
const CHEAPER_FRACTION: f64 = 0.7;

/// Fallback explanation when no rule matched.
const FALLBACK_EXPLANATION: &str = "Meets your basic requirements.";

/// Matched rules for one candidate. Never exceeds the table size.
pub type RuleSet = SmallVec<[Rule; 5]>;

// ============================================================================
// Rule table
// ============================================================================

/// One row of the fixed rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    SameCatSameBrand,
    SameCatAllTags,
    RelatedCatAllTags,
    CheaperOption,
    DiffBrandPerfectMatch,
}

impl Rule {
    /// 1 is highest.
    pub fn priority(self) -> u8 {
        match self {
            Rule::SameCatSameBrand => 1,
            Rule::SameCatAllTags => 2,
            Rule::RelatedCatAllTags => 3,
            Rule::CheaperOption => 4,
            Rule::DiffBrandPerfectMatch => 5,
        }
    }

    /// Stable snake_case identifier, as used in the catalog tooling.
    pub fn tag(self) -> &'static str {
        match self {
            Rule::SameCatSameBrand => "same_cat_same_brand",
            Rule::SameCatAllTags => "same_cat_all_tags",
            Rule::RelatedCatAllTags => "related_cat_all_tags",
            Rule::CheaperOption => "cheaper_option",
            Rule::DiffBrandPerfectMatch => "diff_brand_perfect_match",
        }
    }

    /// Canned user-facing explanation.
    pub fn explanation(self) -> &'static str {
        match self {
            Rule::SameCatSameBrand => {
                "This is from the same category and the brand you prefer."
            }
            Rule::SameCatAllTags => {
                "Best fit: Same product type and meets all your dietary requirements."
            }
            Rule::RelatedCatAllTags => {
                "Highly related product category that meets all your must-have tags."
            }
            Rule::CheaperOption => "A much cheaper option that still meets your needs.",
            Rule::DiffBrandPerfectMatch => {
                "Same product category, different brand, and fully meets your requirements."
            }
        }
    }
}

// ============================================================================
// Rule evaluation
// ============================================================================

/// Everything `determine_rules` needs about one candidate, already
/// resolved from the graph by the caller.
#[derive(Debug, Clone)]
pub struct RuleInputs<'a> {
    pub same_category: bool,
    pub candidate_brand: Option<&'a str>,
    pub requested_brand: Option<&'a str>,
    pub candidate_price: f64,
    pub requested_price: f64,
    pub required_tags: &'a [&'a str],
    pub candidate_attributes: &'a [String],
}

impl RuleInputs<'_> {
    fn all_tags_matched(&self) -> bool {
        self.required_tags
            .iter()
            .all(|tag| self.candidate_attributes.iter().any(|a| a == tag))
    }
}

/// Evaluate all five rules independently and return the matches, sorted
/// ascending by priority. More than one rule may apply.
pub fn determine_rules(inputs: &RuleInputs<'_>) -> RuleSet {
    let mut matched = RuleSet::new();
    let all_tags = inputs.all_tags_matched();
    let has_tags = !inputs.required_tags.is_empty();

    // Evaluated in priority order, so the result needs no sort.
    if inputs.same_category && inputs.candidate_brand == inputs.requested_brand {
        matched.push(Rule::SameCatSameBrand);
    }
    if inputs.same_category && has_tags && all_tags {
        matched.push(Rule::SameCatAllTags);
    }
    if !inputs.same_category && has_tags && all_tags {
        matched.push(Rule::RelatedCatAllTags);
    }
    if inputs.requested_price > 0.0
        && inputs.candidate_price <= CHEAPER_FRACTION * inputs.requested_price
    {
        matched.push(Rule::CheaperOption);
    }
    if inputs.same_category && inputs.candidate_brand != inputs.requested_brand && all_tags {
        matched.push(Rule::DiffBrandPerfectMatch);
    }

    matched
}

/// The single surfaced explanation: the highest-priority matched rule's
/// text, or a generic fallback when nothing matched.
pub fn explanation_for(rules: &[Rule]) -> &'static str {
    rules
        .iter()
        .min_by_key(|r| r.priority())
        .map(|r| r.explanation())
        .unwrap_or(FALLBACK_EXPLANATION)
}

// ============================================================================
// Tests
// ============================================================================
