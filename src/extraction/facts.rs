//! Fact extraction and ranking
//!
//! A declarative pattern library pulls categorized "interesting facts"
//! out of free article text. Each category owns an ordered list of
//! `(pattern, combine)` rules; all matches union into that category's
//! set, deduplicated by exact string. Ranking sorts each category by
//! descending length as a relevance proxy. That heuristic is deliberate
//! and documented, not a bug to improve on.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default cap on displayed facts per category
pub const FACT_LIMIT: usize = 4;

/// Month-name alternation shared by the date rules
const MONTH_NAMES: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";

/// The closed set of fact categories, in display order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FactCategory {
    /// Calendar dates, years, and verb-cued year mentions
    Dates,
    /// Currency amounts, symbol-prefixed or word-suffixed
    Money,
    /// Distances, weights, populations, areas, scaled magnitudes
    Measurements,
    /// Quoted spans of 10-120 characters
    Quotes,
    /// Capitalized place names after in/at/from
    Locations,
}

impl FactCategory {
    /// All categories in display order
    pub const ALL: [FactCategory; 5] = [
        FactCategory::Dates,
        FactCategory::Money,
        FactCategory::Measurements,
        FactCategory::Quotes,
        FactCategory::Locations,
    ];

    /// Heading shown for this category
    pub fn label(self) -> &'static str {
        match self {
            FactCategory::Dates => "Dates",
            FactCategory::Money => "Money",
            FactCategory::Measurements => "Measurements",
            FactCategory::Quotes => "Quotes",
            FactCategory::Locations => "Locations",
        }
    }
}

/// Per-category sets of unique fact strings
///
/// Built fresh per extraction call and never merged across calls. The
/// backing sets are ordered, so iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSet {
    by_category: BTreeMap<FactCategory, BTreeSet<String>>,
}

impl FactSet {
    /// Insert a fact, trimmed of surrounding whitespace; blank facts are
    /// dropped, duplicates collapse by exact string equality.
    pub fn insert(&mut self, category: FactCategory, fact: &str) {
        let fact = fact.trim();
        if !fact.is_empty() {
            self.by_category
                .entry(category)
                .or_default()
                .insert(fact.to_string());
        }
    }

    /// The facts recorded for a category, if any.
    pub fn category(&self, category: FactCategory) -> Option<&BTreeSet<String>> {
        self.by_category.get(&category)
    }

    /// Total fact count across categories.
    pub fn len(&self) -> usize {
        self.by_category.values().map(BTreeSet::len).sum()
    }

    /// Whether every category is empty.
    pub fn is_empty(&self) -> bool {
        self.by_category.values().all(BTreeSet::is_empty)
    }
}

/// Facts of one category, ranked and capped for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCategory {
    /// The category these facts belong to
    pub category: FactCategory,
    /// Facts in descending length order, at most the configured limit
    pub facts: Vec<String>,
}

/// Display-ready facts: non-empty categories only, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedFacts {
    /// The non-empty categories
    pub categories: Vec<RankedCategory>,
}

impl RankedFacts {
    /// Whether no category produced any fact.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Sort each category's facts by descending character length and cap at
/// `limit`. Longer facts tend to carry more context, hence the length
/// proxy. Ties keep the set's iteration order; empty categories are
/// omitted entirely.
pub fn rank_and_limit(facts: &FactSet, limit: usize) -> RankedFacts {
    let categories = FactCategory::ALL
        .iter()
        .filter_map(|&category| {
            let members = facts.category(category)?;
            if members.is_empty() {
                return None;
            }
            let mut ranked: Vec<String> = members.iter().cloned().collect();
            ranked.sort_by_key(|fact| Reverse(fact.chars().count()));
            ranked.truncate(limit);
            Some(RankedCategory { category, facts: ranked })
        })
        .collect();
    RankedFacts { categories }
}

/// How a rule's regex match becomes a fact string
enum Combine {
    /// The whole match text
    Whole,
    /// All capture groups concatenated in order
    ConcatGroups,
    /// All capture groups joined with ", "
    CommaGroups,
    /// A single capture group
    Group(usize),
}

/// One matching rule of the pattern library
struct FactRule {
    pattern: Regex,
    combine: Combine,
}

impl FactRule {
    fn new(pattern: &str, combine: Combine) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            combine,
        }
    }

    fn collect_into(&self, text: &str, category: FactCategory, facts: &mut FactSet) {
        match self.combine {
            Combine::Whole => {
                for found in self.pattern.find_iter(text) {
                    facts.insert(category, found.as_str());
                }
            }
            Combine::ConcatGroups => {
                for caps in self.pattern.captures_iter(text) {
                    let fact: String =
                        caps.iter().skip(1).flatten().map(|m| m.as_str()).collect();
                    facts.insert(category, &fact);
                }
            }
            Combine::CommaGroups => {
                for caps in self.pattern.captures_iter(text) {
                    let fact = caps
                        .iter()
                        .skip(1)
                        .flatten()
                        .map(|m| m.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    facts.insert(category, &fact);
                }
            }
            Combine::Group(index) => {
                for caps in self.pattern.captures_iter(text) {
                    if let Some(group) = caps.get(index) {
                        facts.insert(category, group.as_str());
                    }
                }
            }
        }
    }
}

/// Pattern-matching fact extractor
///
/// Compiles the rule table once; `extract` applies every rule of every
/// category over the input text. Dates, Money, and Measurements match
/// case-insensitively; Quotes and Locations are case-sensitive, since
/// proper-noun capitalization is the only signal the location rules have.
pub struct FactExtractor {
    rules: Vec<(FactCategory, Vec<FactRule>)>,
}

impl Default for FactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FactExtractor {
    /// Build the extractor with the full rule table.
    pub fn new() -> Self {
        use Combine::{CommaGroups, ConcatGroups, Group, Whole};

        let dates = vec![
            // March 15, 2024
            FactRule::new(
                &format!(r"(?i)(?:{MONTH_NAMES})\s+\d{{1,2}},?\s+\d{{4}}"),
                Whole,
            ),
            // 15 March 2024
            FactRule::new(
                &format!(r"(?i)\d{{1,2}}\s+(?:{MONTH_NAMES})\s+\d{{4}}"),
                Whole,
            ),
            // 1991 or 1991-2024
            FactRule::new(r"\d{4}(?:[-–]\d{4})?", Whole),
            // 03/15/24 or 03/15/2024
            FactRule::new(r"\d{1,2}/\d{1,2}/\d{2,4}", Whole),
            // born 1991, founded in 2001
            FactRule::new(
                r"(?i)(?:born|died|founded|established|created|released)\s+(?:in\s+)?\d{4}",
                Whole,
            ),
        ];

        let money = vec![
            FactRule::new(r"(?i)[$£€¥](?:\d+[,.\s]?)+", Whole),
            // The numeric part and the currency word concatenate as-is;
            // the shape intentionally differs from the symbol-prefixed
            // rule and is not normalized.
            FactRule::new(
                r"(?i)((?:\d+[,.\s]?)+)\s*((?:dollar|pound|euro|yen)s?)",
                ConcatGroups,
            ),
        ];

        let measurements = vec![
            // Distances
            FactRule::new(
                r"(?i)\d+(?:,\d{3})*\s*(?:metres?|feet|kilometers?|kilometres?|miles?|inches?|cm|mm|km)",
                Whole,
            ),
            // Weights
            FactRule::new(
                r"(?i)\d+(?:,\d{3})*\s*(?:kg|kilograms?|pounds?|lbs?|tonnes?|tons?)",
                Whole,
            ),
            // People
            FactRule::new(
                r"(?i)\d+(?:,\d{3})*\s*(?:people|inhabitants|residents|population|students|members|employees)",
                Whole,
            ),
            // Large numbers with units
            FactRule::new(
                r"(?i)\d+(?:\.\d+)?\s*(?:million|billion|thousand|hundred)\s*(?:people|square|years?|acres?|cm|mm|m|km)",
                Whole,
            ),
            // Area
            FactRule::new(
                r"(?i)\d+(?:\.\d+)?\s*(?:square\s+)?(?:kilometres?|kilometers?|miles?|acres?)",
                Whole,
            ),
        ];

        let quotes = vec![
            FactRule::new("\\s\"([^\"]{10,120})\"\\s", Group(1)),
            FactRule::new(r"\s'([^']{10,120})'\s", Group(1)),
            FactRule::new(r"\s“([^“]{10,120})”\s", Group(1)),
        ];

        let locations = vec![
            // "in Paris, France"
            FactRule::new(
                r"\bin\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*),\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
                CommaGroups,
            ),
            // "in|at|from England"
            FactRule::new(r"\b(?:in|at|from)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)", Group(1)),
        ];

        Self {
            rules: vec![
                (FactCategory::Dates, dates),
                (FactCategory::Money, money),
                (FactCategory::Measurements, measurements),
                (FactCategory::Quotes, quotes),
                (FactCategory::Locations, locations),
            ],
        }
    }

    /// Run every rule over `text` and collect the categorized facts.
    #[instrument(skip(self, text))]
    pub fn extract(&self, text: &str) -> FactSet {
        let mut facts = FactSet::default();
        for (category, rules) in &self.rules {
            for rule in rules {
                rule.collect_into(text, *category, &mut facts);
            }
        }
        debug!(total = facts.len(), "extracted facts");
        facts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> FactSet {
        FactExtractor::new().extract(text)
    }

    fn category_vec(facts: &FactSet, category: FactCategory) -> Vec<String> {
        facts
            .category(category)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_date_month_name_forms() {
        let facts = extract("Construction began March 15, 2024 and ended 1 April 2025.");
        let dates = category_vec(&facts, FactCategory::Dates);
        assert!(dates.contains(&"March 15, 2024".to_string()));
        assert!(dates.contains(&"1 April 2025".to_string()));
    }

    #[test]
    fn test_date_year_ranges_and_numeric() {
        let facts = extract("The war (1914–1918) is dated 28/07/1914 in some sources.");
        let dates = category_vec(&facts, FactCategory::Dates);
        assert!(dates.contains(&"1914–1918".to_string()));
        assert!(dates.contains(&"28/07/1914".to_string()));
    }

    #[test]
    fn test_date_verb_cues_case_insensitive() {
        let facts = extract("Founded in 1998, the company grew. She was Born 1971.");
        let dates = category_vec(&facts, FactCategory::Dates);
        assert!(dates.contains(&"Founded in 1998".to_string()));
        assert!(dates.contains(&"Born 1971".to_string()));
    }

    #[test]
    fn test_money_symbol_prefixed_keeps_separators() {
        let facts = extract("She earned $1,234.56 that year.");
        let money = category_vec(&facts, FactCategory::Money);
        assert_eq!(money, vec!["$1,234.56".to_string()]);
    }

    #[test]
    fn test_money_rule_shapes_are_not_normalized() {
        // The two rules deliberately produce differently-shaped strings:
        // symbol-prefixed verbatim vs digits concatenated with the word.
        let facts = extract("It cost £200 plus 50 euros in fees.");
        let money = category_vec(&facts, FactCategory::Money);
        assert!(money.contains(&"£200".to_string()));
        assert!(money.contains(&"50 euros".to_string()));
    }

    #[test]
    fn test_measurement_units() {
        let facts = extract(
            "The tower is 330 metres tall, weighs 10,100 tonnes, and the park \
             covers 2.5 square kilometres for 25,000 residents.",
        );
        let measurements = category_vec(&facts, FactCategory::Measurements);
        assert!(measurements.contains(&"330 metres".to_string()));
        assert!(measurements.contains(&"10,100 tonnes".to_string()));
        assert!(measurements.contains(&"2.5 square kilometres".to_string()));
        assert!(measurements.contains(&"25,000 residents".to_string()));
    }

    #[test]
    fn test_measurement_scaled_magnitudes() {
        let facts = extract("About 1.4 billion people live there.");
        let measurements = category_vec(&facts, FactCategory::Measurements);
        assert!(measurements.contains(&"1.4 billion people".to_string()));
    }

    #[test]
    fn test_quote_styles_strip_marks() {
        let facts = extract(
            "He said \"the die is cast\" and later ‘crossing the river now’ \
             became “a figure of speech too” in print.",
        );
        let quotes = category_vec(&facts, FactCategory::Quotes);
        assert!(quotes.contains(&"the die is cast".to_string()));
        assert!(quotes.contains(&"a figure of speech too".to_string()));
    }

    #[test]
    fn test_quote_length_bounds() {
        let facts = extract("A short \"no\" reply and nothing else.");
        assert!(category_vec(&facts, FactCategory::Quotes).is_empty());
    }

    #[test]
    fn test_location_pair_and_single() {
        let facts = extract("She lived in Paris, France before moving from New Zealand.");
        let locations = category_vec(&facts, FactCategory::Locations);
        assert!(locations.contains(&"Paris, France".to_string()));
        assert!(locations.contains(&"New Zealand".to_string()));
    }

    #[test]
    fn test_location_requires_capitalization() {
        let facts = extract("They met at noon in the garden.");
        assert!(category_vec(&facts, FactCategory::Locations).is_empty());
    }

    #[test]
    fn test_duplicate_matches_collapse() {
        let facts = extract("In 1991 and again in 1991, the band toured.");
        let dates = category_vec(&facts, FactCategory::Dates);
        assert_eq!(dates.iter().filter(|d| *d == "1991").count(), 1);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Born in 1991, she earned $1,234.56 and said \
                    \"this changed everything forever\" while living in Paris, France.";
        let extractor = FactExtractor::new();
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }

    #[test]
    fn test_rank_and_limit_keeps_four_longest() {
        let mut facts = FactSet::default();
        let fifty = "x".repeat(50);
        let forty = "y".repeat(40);
        for fact in ["abc", fifty.as_str(), "twelve chars", "eight ch", forty.as_str()] {
            facts.insert(FactCategory::Quotes, fact);
        }
        let ranked = rank_and_limit(&facts, FACT_LIMIT);
        assert_eq!(ranked.categories.len(), 1);
        let lengths: Vec<usize> = ranked.categories[0]
            .facts
            .iter()
            .map(|f| f.chars().count())
            .collect();
        assert_eq!(lengths, vec![50, 40, 12, 8]);
    }

    #[test]
    fn test_rank_and_limit_omits_empty_categories() {
        let mut facts = FactSet::default();
        facts.insert(FactCategory::Dates, "1991");
        let ranked = rank_and_limit(&facts, FACT_LIMIT);
        assert_eq!(ranked.categories.len(), 1);
        assert_eq!(ranked.categories[0].category, FactCategory::Dates);
    }

    #[test]
    fn test_rank_and_limit_all_empty() {
        let ranked = rank_and_limit(&FactSet::default(), FACT_LIMIT);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_fact_set_serialization() {
        let mut facts = FactSet::default();
        facts.insert(FactCategory::Dates, "1991");
        let json = serde_json::to_string(&facts).unwrap();
        assert!(json.contains("Dates"));
        assert!(json.contains("1991"));
    }
}
