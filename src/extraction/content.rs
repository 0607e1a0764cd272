//! Article body extraction
//!
//! This module walks the main content region and produces the article
//! title plus the narrative body paragraphs, excluding text that sits
//! inside tabular structures.

use scraper::{ElementRef, Selector};
use tracing::{debug, instrument};

use super::document::ArticleDocument;
use crate::error::ExtractionError;

/// Structural extraction over parsed article pages
pub struct StructuralExtractor;

impl StructuralExtractor {
    /// Extract the article title and its body paragraphs.
    ///
    /// Paragraphs are `<p>` descendants of the main content region in
    /// document order, trimmed, with empties dropped. A paragraph with
    /// any `<table>` ancestor is excluded: tables hold infobox and layout
    /// text, not narrative body. The heuristic is known to misjudge
    /// infobox layouts that are not plain tables and is kept as-is.
    #[instrument(skip(document))]
    pub fn extract_paragraphs(
        document: &ArticleDocument,
    ) -> Result<(String, Vec<String>), ExtractionError> {
        let content = document.main_content()?;
        let paragraph = Selector::parse("p").unwrap();

        let paragraphs: Vec<String> = content
            .select(&paragraph)
            .filter(|p| !Self::inside_table(*p))
            .filter_map(|p| {
                let text: String = p.text().collect();
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .collect();

        let title = document.title();
        debug!(%title, count = paragraphs.len(), "extracted body paragraphs");
        Ok((title, paragraphs))
    }

    /// Whether any structural ancestor of `element` is a table.
    fn inside_table(element: ElementRef<'_>) -> bool {
        element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| ancestor.value().name() == "table")
    }
}
