//! Wikifacts - Interactive Encyclopedia Reader
//!
//! This crate is a text-mode client for searching an online encyclopedia
//! by topic. It retrieves the matching article, tells direct articles,
//! disambiguation pages, and search-results pages apart, and surfaces
//! categorized "key facts" (dates, money, measurements, quotes,
//! locations) pulled from the article body by pattern matching.
//!
//! # Architecture
//!
//! ```text
//! User ──▶ Session ──▶ WikiClient (HTTP fetch)
//!             │              │
//!             ▼              ▼
//!         Console       ArticleDocument
//!       (prompts,            │
//!        pagination)         ▼
//!             ▲       StructuralExtractor ──▶ paragraphs / link lists
//!             │              │
//!             └──────── FactExtractor ──▶ ranked facts
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use wikifacts::extraction::{rank_and_limit, ArticleDocument, FactExtractor, FACT_LIMIT};
//! use wikifacts::extraction::StructuralExtractor;
//!
//! # fn main() -> Result<(), wikifacts::error::ExtractionError> {
//! let html = r#"<html><head><title>Example - Encyclopedia</title></head>
//!     <body><div id="mw-content-text"><p>Founded in 1998 in Paris, France.</p></div>
//!     </body></html>"#;
//!
//! let document = ArticleDocument::parse(html);
//! let (title, body) = StructuralExtractor::extract_paragraphs(&document)?;
//! let facts = FactExtractor::new().extract(&body.join(" "));
//! let ranked = rank_and_limit(&facts, FACT_LIMIT);
//!
//! assert_eq!(title, "Example");
//! assert!(!ranked.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod console;
pub mod error;
pub mod extraction;
pub mod fetch;
pub mod session;

// Re-exports for convenience
pub use error::{Error, Result};
pub use extraction::{
    ArticleDocument, FactCategory, FactExtractor, FactSet, LinkEntry, LinkExtractor, RankedFacts,
    StructuralExtractor,
};
pub use fetch::{FetchResult, PageKind, WikiClient};
pub use session::{Session, SessionConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
