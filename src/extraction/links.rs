//! Link-list extraction
//!
//! Two flavors of navigable link lists share the `LinkEntry` shape:
//! disambiguation topic links (list items inside the main content region)
//! and search-result links (items of the search-results list). They
//! differ in failure behavior: a missing content region is an error, a
//! missing results list is an empty result set.

use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::document::ArticleDocument;
use crate::error::ExtractionError;

/// Identifier of the search-results list
const SEARCH_RESULTS: &str = "ul.mw-search-results";

/// One selectable link from a disambiguation or search-results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Display label, from the anchor's `title` attribute
    pub display_title: Option<String>,
    /// Link target; empty when the anchor carries no `href`
    pub target: String,
}

impl LinkEntry {
    fn from_anchor(anchor: ElementRef<'_>) -> Self {
        Self {
            display_title: anchor.value().attr("title").map(str::to_string),
            target: anchor.value().attr("href").unwrap_or_default().to_string(),
        }
    }

    /// Query for a follow-up search: the last path segment of the target.
    pub fn follow_up_query(&self) -> &str {
        self.target.rsplit('/').next().unwrap_or(&self.target)
    }
}

/// Link-list extraction over parsed pages
pub struct LinkExtractor;

impl LinkExtractor {
    /// Extract topic links from a disambiguation page.
    ///
    /// Selects every anchor nested inside a list item within the main
    /// content region. Entries whose anchor has no `href` are kept with
    /// an empty target rather than filtered out.
    #[instrument(skip(document))]
    pub fn extract_disambiguation_links(
        document: &ArticleDocument,
    ) -> Result<Vec<LinkEntry>, ExtractionError> {
        let content = document.main_content()?;
        let anchor_in_item = Selector::parse("li a").unwrap();

        let links: Vec<LinkEntry> = content
            .select(&anchor_in_item)
            .map(LinkEntry::from_anchor)
            .collect();
        debug!(count = links.len(), "extracted disambiguation links");
        Ok(links)
    }

    /// Extract result links from a search-results page.
    ///
    /// One entry per result item, taken from the item's first anchor, in
    /// result order. This operation is total: a page without the expected
    /// results list (zero hits, layout change) yields an empty list, since
    /// "no search hits" is a legitimate outcome rather than an error.
    #[instrument(skip(document))]
    pub fn extract_search_result_links(document: &ArticleDocument) -> Vec<LinkEntry> {
        let results_list = Selector::parse(SEARCH_RESULTS).unwrap();
        let item = Selector::parse("li").unwrap();
        let anchor = Selector::parse("a").unwrap();

        let Some(list) = document.find(&results_list) else {
            debug!("no search-results list present");
            return Vec::new();
        };

        let links: Vec<LinkEntry> = list
            .select(&item)
            .filter_map(|li| li.select(&anchor).next())
            .map(LinkEntry::from_anchor)
            .collect();
        debug!(count = links.len(), "extracted search-result links");
        links
    }
}
