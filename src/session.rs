//! Interactive session orchestration
//!
//! Ties the collaborators together: the fetch client, the console, and
//! the extraction pipeline. One page is fetched, classified, and
//! extracted at a time; every extraction call works on fresh input and
//! leaves no state behind.

use tracing::{info, instrument, warn};

use crate::console::{Console, Input, PageChoice};
use crate::error::{Error, Result};
use crate::extraction::{
    rank_and_limit, ArticleDocument, FactExtractor, FactSet, LinkEntry, LinkExtractor,
    StructuralExtractor,
};
use crate::fetch::{form_query, FetchResult, PageKind, WikiClient, DEFAULT_BASE_URL};

/// Number of leading body paragraphs fed into fact extraction
const OVERVIEW_PARAGRAPHS: usize = 3;

/// Settings for one interactive session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the wiki instance
    pub base_url: String,
    /// Options shown per page of results
    pub page_size: usize,
    /// Column width for wrapped text
    pub wrap_width: usize,
    /// Maximum facts displayed per category
    pub fact_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: crate::console::DEFAULT_PAGE_SIZE,
            wrap_width: crate::console::DEFAULT_WRAP_WIDTH,
            fact_limit: crate::extraction::FACT_LIMIT,
        }
    }
}

/// Where control goes after handling one fetched page
enum Outcome {
    /// The user picked a link; search for its query next
    FollowUp(String),
    /// Done with this request; prompt for a new search
    NewSearch,
    /// The user asked to quit
    Quit,
}

/// Whether the outer loop keeps running
enum Flow {
    Continue,
    Quit,
}

/// One interactive user session
pub struct Session {
    client: WikiClient,
    console: Console,
    facts: FactExtractor,
    fact_limit: usize,
}

impl Session {
    /// Build a session from its configuration.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let client = WikiClient::new(&config.base_url)?;
        Ok(Self {
            client,
            console: Console::new(config.page_size, config.wrap_width),
            facts: FactExtractor::new(),
            fact_limit: config.fact_limit,
        })
    }

    /// Run the interactive loop until the user quits.
    pub async fn run(&self) -> Result<()> {
        println!("Welcome to Wikifacts!");
        println!("Type 'q' at any time to quit");
        self.console.prompt_new_search();

        loop {
            let line = match self.console.read_input()? {
                Input::Quit => break,
                Input::Line(line) => line,
            };
            let query = form_query(&line);
            match self.perform_search(&query).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                // A page that does not match the expected structure ends
                // this request, never the session, and never pretends to
                // be an empty success.
                Err(Error::Extraction(err)) => {
                    warn!(error = %err, "page structure did not match expectations");
                    println!("Sorry! That page could not be read. Please try another search!");
                    self.console.prompt_new_search();
                }
                Err(err) => return Err(err),
            }
        }

        println!("Bye!");
        Ok(())
    }

    /// Search for a query and handle whatever page comes back. Follow-up
    /// selections loop here instead of recursing.
    #[instrument(skip(self))]
    async fn perform_search(&self, query: &str) -> Result<Flow> {
        let mut query = query.to_string();
        loop {
            println!("Searching Wikipedia for '{query}'");

            let page = match self.client.search(&query).await {
                Ok(page) => page,
                Err(err) => {
                    warn!(error = %err, "fetch failed");
                    println!("Sorry! No page exists for '{query}'. Please try again!");
                    return Ok(Flow::Continue);
                }
            };

            let outcome = match PageKind::of(&page.final_url) {
                PageKind::SearchResults => self.handle_search_results(&query, &page)?,
                PageKind::Article => self.handle_article(&page)?,
                PageKind::Unknown => {
                    println!("Unsupported Page Type: {}", page.final_url);
                    Outcome::NewSearch
                }
            };

            match outcome {
                Outcome::FollowUp(next) => query = next,
                Outcome::NewSearch => return Ok(Flow::Continue),
                Outcome::Quit => return Ok(Flow::Quit),
            }
        }
    }

    /// Handle a direct article page: show the overview, or hand off to
    /// the disambiguation flow.
    fn handle_article(&self, page: &FetchResult) -> Result<Outcome> {
        let document = ArticleDocument::parse(&page.body);
        let (title, body) = StructuralExtractor::extract_paragraphs(&document)?;
        info!(%title, paragraphs = body.len(), "article page");

        println!("Found: {title}");
        self.console.print_heading("Overview");

        if document.is_disambiguation()? {
            let topics = LinkExtractor::extract_disambiguation_links(&document)?;
            return self.handle_links_list(&topics);
        }

        if let Some(first) = body.first() {
            self.console.print_wrapped(first);
        }
        let overview: Vec<&str> = body
            .iter()
            .take(OVERVIEW_PARAGRAPHS)
            .map(String::as_str)
            .collect();
        let facts = self.facts.extract(&overview.join(" "));
        self.display_facts(&facts);
        self.console.prompt_new_search();
        Ok(Outcome::NewSearch)
    }

    /// Handle a search-results page.
    fn handle_search_results(&self, query: &str, page: &FetchResult) -> Result<Outcome> {
        println!("No page for '{query}'. Found these search results!");
        let document = ArticleDocument::parse(&page.body);
        let results = LinkExtractor::extract_search_result_links(&document);
        self.handle_links_list(&results)
    }

    /// Offer a list of links for selection and turn the choice into a
    /// follow-up query.
    fn handle_links_list(&self, entries: &[LinkEntry]) -> Result<Outcome> {
        if entries.is_empty() {
            println!("\tNo results found");
            self.console.prompt_new_search();
            return Ok(Outcome::NewSearch);
        }

        let options: Vec<String> = entries
            .iter()
            .map(|entry| {
                entry
                    .display_title
                    .clone()
                    .unwrap_or_else(|| "(untitled)".to_string())
            })
            .collect();

        match self.console.paginate(&options)? {
            PageChoice::Selected(index) => {
                Ok(Outcome::FollowUp(entries[index].follow_up_query().to_string()))
            }
            PageChoice::Cancelled => {
                self.console.prompt_new_search();
                Ok(Outcome::NewSearch)
            }
            PageChoice::Quit => Ok(Outcome::Quit),
        }
    }

    /// Print the ranked facts under a "Key Facts" heading.
    fn display_facts(&self, facts: &FactSet) {
        self.console.print_heading("Key Facts");
        let ranked = rank_and_limit(facts, self.fact_limit);
        if ranked.is_empty() {
            println!("No facts found. Try a different article!");
            return;
        }
        for group in &ranked.categories {
            println!("{}:", group.category.label());
            for (index, fact) in group.facts.iter().enumerate() {
                println!("\t{}. {fact}", index + 1);
            }
        }
    }
}
