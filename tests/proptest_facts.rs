//! Property-based testing for the fact-extraction pipeline.
//!
//! Uses proptest to generate arbitrary article text and fact sets and
//! verify the extraction and ranking invariants: idempotence, per-rule
//! coverage, dedup, and the ranked-output shape.

use proptest::prelude::*;
use wikifacts::extraction::{rank_and_limit, FactCategory, FactExtractor, FactSet};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Strategy for arbitrary prose-like text, including pattern-adjacent noise
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,200}",
        "[a-zA-Z0-9 ,.\"'$]{0,200}",
        "(in|at|from|born|died) [A-Z][a-z]{1,10}[ ,.]{0,2}[0-9]{0,4} ",
    ]
}

/// Strategy for a four-digit year
fn arb_year() -> impl Strategy<Value = u32> {
    1000u32..=9999
}

/// Strategy for quoted-span content: 10..=102 chars, no quote marks,
/// non-space at both ends
fn arb_quote_content() -> impl Strategy<Value = String> {
    "[a-z][a-z ]{8,100}[a-z]"
}

/// Strategy for a capitalized place name
fn arb_place() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10}"
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn extraction_is_idempotent(text in arb_text()) {
        let extractor = FactExtractor::new();
        prop_assert_eq!(extractor.extract(&text), extractor.extract(&text));
    }

    #[test]
    fn verb_cued_years_are_found(year in arb_year()) {
        let text = format!("The town was founded in {year} by settlers.");
        let facts = FactExtractor::new().extract(&text);
        let dates = facts.category(FactCategory::Dates);
        let expected = format!("founded in {year}");
        prop_assert!(dates.is_some_and(|set| set.contains(&expected)));
    }

    #[test]
    fn symbol_prefixed_amounts_are_found(amount in 1u64..=9_999_999) {
        let text = format!("It sold for ${amount} at auction.");
        let facts = FactExtractor::new().extract(&text);
        let money = facts.category(FactCategory::Money);
        let expected = format!("${amount}");
        prop_assert!(money.is_some_and(|set| set.contains(&expected)));
    }

    #[test]
    fn quoted_spans_are_captured_without_marks(content in arb_quote_content()) {
        let text = format!("He said \"{content}\" at the time.");
        let facts = FactExtractor::new().extract(&text);
        let quotes = facts.category(FactCategory::Quotes);
        prop_assert!(quotes.is_some_and(|set| set.contains(content.trim())));
    }

    #[test]
    fn place_pairs_combine_with_a_comma(a in arb_place(), b in arb_place()) {
        let text = format!("She settled in {a}, {b} soon after.");
        let facts = FactExtractor::new().extract(&text);
        let locations = facts.category(FactCategory::Locations);
        let expected = format!("{a}, {b}");
        prop_assert!(locations.is_some_and(|set| set.contains(&expected)));
    }

    #[test]
    fn ranked_output_respects_limit_and_order(
        members in prop::collection::btree_set("[a-z ]{1,40}", 0..24),
        limit in 1usize..=6,
    ) {
        let mut facts = FactSet::default();
        for member in &members {
            facts.insert(FactCategory::Quotes, member);
        }

        let ranked = rank_and_limit(&facts, limit);
        for group in &ranked.categories {
            // Capped per category.
            prop_assert!(group.facts.len() <= limit);
            // Descending character length.
            for pair in group.facts.windows(2) {
                prop_assert!(pair[0].chars().count() >= pair[1].chars().count());
            }
            // Every ranked fact came from the set (modulo insertion trim).
            for fact in &group.facts {
                prop_assert!(members.iter().any(|m| m.trim() == fact));
            }
        }
    }

    #[test]
    fn empty_categories_never_appear_in_ranked_output(text in arb_text()) {
        let facts = FactExtractor::new().extract(&text);
        let ranked = rank_and_limit(&facts, 4);
        for group in &ranked.categories {
            prop_assert!(!group.facts.is_empty());
        }
    }
}
