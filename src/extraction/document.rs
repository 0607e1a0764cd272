//! Parsed article documents and page classification
//!
//! `ArticleDocument` owns the parsed markup for the duration of one
//! extraction call; it is never mutated after parsing and never retained
//! across calls. The disambiguation classifier lives here because it is a
//! property of the whole document, not of any one extracted region.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use crate::error::ExtractionError;

/// Identifier of the main article content region
const MAIN_CONTENT: &str = "div#mw-content-text";

/// Identifier of the category-links region at the bottom of an article
const CATEGORY_LINKS: &str = "div#catlinks";

/// Href marker that identifies the disambiguation category
const DISAMBIGUATION_MARKER: &str = "Category:Disambiguation_pages";

/// A parsed article page
pub struct ArticleDocument {
    html: Html,
}

impl ArticleDocument {
    /// Parse raw page markup.
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// The main content region, required for paragraph and
    /// disambiguation-link extraction.
    pub(crate) fn main_content(&self) -> Result<ElementRef<'_>, ExtractionError> {
        self.region(MAIN_CONTENT)
    }

    /// First element matching `css`, or `StructureNotFound` naming it.
    fn region(&self, css: &'static str) -> Result<ElementRef<'_>, ExtractionError> {
        let selector = Selector::parse(css).unwrap();
        self.html
            .select(&selector)
            .next()
            .ok_or(ExtractionError::StructureNotFound(css))
    }

    /// First element matching `selector`, if any.
    pub(crate) fn find(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// Article title: the `<title>` text up to the first `-`, trimmed.
    ///
    /// The site suffixes titles as `"Article Name - Encyclopedia"`; with
    /// no delimiter the whole trimmed text is the title. A page without a
    /// `<title>` element yields an empty title.
    pub fn title(&self) -> String {
        let selector = Selector::parse("title").unwrap();
        let Some(element) = self.html.select(&selector).next() else {
            return String::new();
        };
        let raw: String = element.text().collect();
        raw.split('-').next().unwrap_or(&raw).trim().to_string()
    }

    /// Whether this page is a disambiguation page.
    ///
    /// True iff any link in the category-links region targets the
    /// disambiguation category. No other signal (title heuristics, "may
    /// refer to" text) is consulted. A missing category-links region is a
    /// hard failure, not "no".
    #[instrument(skip(self))]
    pub fn is_disambiguation(&self) -> Result<bool, ExtractionError> {
        let catlinks = self.region(CATEGORY_LINKS)?;
        let anchor = Selector::parse("a").unwrap();
        let found = catlinks.select(&anchor).any(|a| {
            a.value()
                .attr("href")
                .is_some_and(|href| href.contains(DISAMBIGUATION_MARKER))
        });
        debug!(disambiguation = found, "classified page");
        Ok(found)
    }
}
