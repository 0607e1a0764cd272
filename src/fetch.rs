//! Page fetching
//!
//! This module is the HTTP collaborator for the extraction pipeline: it
//! turns a search query into a `FetchResult` carrying the resolved final
//! URL, the status code, and the raw page body. Classification of the
//! final URL into a page kind also lives here, since it is a property of
//! the redirect the server performed, not of the markup.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::FetchError;

/// Default wiki instance queried when no `--base-url` is given
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

/// Search endpoint path; the server redirects to `/wiki/<title>` on an
/// exact title match and stays on the endpoint otherwise.
const SEARCH_PATH: &str = "/w/index.php";

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!(
    "wikifacts/",
    env!("CARGO_PKG_VERSION"),
    " (interactive encyclopedia reader)"
);

/// Timeout applied to every request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One fetched page: status, resolved destination, and raw body text
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// HTTP status code of the final response
    pub status: u16,
    /// URL the request resolved to after redirects
    pub final_url: Url,
    /// Raw page body
    pub body: String,
}

/// What kind of page the search resolved to, judged by its final URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A direct article page (`/wiki/<title>`)
    Article,
    /// A search-results listing (the `search` parameter survived)
    SearchResults,
    /// Anything else; surfaced to the user as unsupported
    Unknown,
}

impl PageKind {
    /// Classify a resolved URL.
    ///
    /// A surviving `search` query parameter means the server did not
    /// redirect to an article, so it is checked before the path.
    pub fn of(url: &Url) -> PageKind {
        if url.query_pairs().any(|(key, _)| key == "search") {
            PageKind::SearchResults
        } else if url.path().starts_with("/wiki/") {
            PageKind::Article
        } else {
            PageKind::Unknown
        }
    }
}

/// HTTP client for one wiki instance
#[derive(Debug, Clone)]
pub struct WikiClient {
    http: Client,
    search_url: Url,
}

impl WikiClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base = Url::parse(base_url)?;
        let search_url = base.join(SEARCH_PATH)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, search_url })
    }

    /// Search the wiki for a query, following redirects.
    ///
    /// A non-success status is an error: callers treat it the same as a
    /// transport failure ("no page").
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<FetchResult, FetchError> {
        let response = self
            .http
            .get(self.search_url.clone())
            .query(&[("search", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let final_url = response.url().clone();
        let body = response.text().await?;
        debug!(%final_url, status = status.as_u16(), bytes = body.len(), "page fetched");

        Ok(FetchResult {
            status: status.as_u16(),
            final_url,
            body,
        })
    }
}

/// Convert a user-typed line into a wiki query: whitespace runs collapse
/// to single underscores.
pub fn form_query(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join("_")
}
