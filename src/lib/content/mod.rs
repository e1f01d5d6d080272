//! Page content: remote Markdown documents converted to HTML.
//!
//! A [`ContentSource`] retrieves the document text for a URL; the default
//! [`ContentSource::fetch_rendered`] then runs it through [`render_markdown`].
//! The resulting HTML is embedded into the page as is.
use std::time::Duration;

use pulldown_cmark::{Options, Parser};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{FETCH_TIMEOUT, USER_AGENT};

#[derive(Debug, Error)]
pub enum ContentFetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request for {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read body of {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Supplies the body of a page.
pub trait ContentSource: Send + Sync {
    /// Retrieve the raw Markdown text at `url`.
    fn fetch_markdown(&self, url: &str) -> Result<String, ContentFetchError>;

    /// Retrieve the document at `url` and convert it to HTML.
    fn fetch_rendered(&self, url: &str) -> Result<String, ContentFetchError> {
        let text = self.fetch_markdown(url)?;
        Ok(render_markdown(&text))
    }
}

/// Fetches documents over HTTP with a single blocking GET per call.
#[derive(Clone, Debug)]
pub struct HttpMarkdownSource {
    timeout: Duration,
}

impl Default for HttpMarkdownSource {
    fn default() -> Self {
        Self::new(FETCH_TIMEOUT)
    }
}

impl HttpMarkdownSource {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl ContentSource for HttpMarkdownSource {
    fn fetch_markdown(&self, url: &str) -> Result<String, ContentFetchError> {
        debug!(url, timeout = ?self.timeout, "fetching document");

        // A blocking client owns a runtime of its own, so it is built and
        // dropped within the call rather than stored across async contexts.
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ContentFetchError::Client)?;

        let response = client
            .get(url)
            .send()
            .map_err(|source| ContentFetchError::Request {
                url: url.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "document fetch rejected");
            return Err(ContentFetchError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| ContentFetchError::Body {
            url: url.to_owned(),
            source,
        })
    }
}

/// Parser options for documentation pages.
pub fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options
}

/// Convert Markdown to HTML. Inline HTML in the source is passed through.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, markdown_options());
    let mut rendered = String::with_capacity(text.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut rendered, parser);
    rendered
}
