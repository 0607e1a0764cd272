//! Page classification and extraction pipeline
//!
//! This module turns raw fetched markup into typed results: body
//! paragraphs, disambiguation and search-result link lists, and
//! categorized facts pulled from free text.

pub mod content;
pub mod document;
pub mod facts;
pub mod links;

pub use content::StructuralExtractor;
pub use document::ArticleDocument;
pub use facts::{
    rank_and_limit, FactCategory, FactExtractor, FactSet, RankedCategory, RankedFacts, FACT_LIMIT,
};
pub use links::{LinkEntry, LinkExtractor};
