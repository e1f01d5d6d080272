//! The published pages and how one is assembled.
use std::{collections::HashSet, fs, path::Path};

use thiserror::Error;
use tracing::debug;

use crate::{
    config::{FOOTER_FRAGMENT, HEADER_FRAGMENT, PAGES, SiteMeta},
    content::{ContentFetchError, ContentSource},
    shell::{Chrome, SiteShell},
    types::PageId,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub source_url: String,
    pub on_load: Option<String>,
    /// Show the fork ribbon on this page.
    pub ribbon: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("invalid page identifier {0:?}")]
    InvalidId(String),
    #[error("duplicate page identifier {0:?}")]
    DuplicateId(String),
}

impl Page {
    /// Name the page is served under, e.g. `install.html`.
    pub fn file_name(&self) -> String {
        self.id.file_name()
    }
}

/// Pages with unique stems, so each maps to exactly one route.
#[derive(Clone, Debug, Default)]
pub struct PageSet(Vec<Page>);

impl PageSet {
    pub fn new(pages: Vec<Page>) -> Result<Self, PageError> {
        let mut seen = HashSet::with_capacity(pages.len());
        for page in &pages {
            if !seen.insert(page.id.stem()) {
                return Err(PageError::DuplicateId(page.id.to_string()));
            }
        }
        Ok(Self(pages))
    }

    /// The site's pages, with sources resolved against the content base.
    pub fn default_site(meta: &SiteMeta) -> Result<Self, PageError> {
        let pages = PAGES
            .iter()
            .map(|(id, title, path, on_load, ribbon)| {
                let id = PageId::parse(id).ok_or_else(|| PageError::InvalidId(id.to_string()))?;
                Ok(Page {
                    id,
                    title: title.to_string(),
                    source_url: meta.content_url(path),
                    on_load: on_load.map(ToOwned::to_owned),
                    ribbon: *ribbon,
                })
            })
            .collect::<Result<Vec<_>, PageError>>()?;
        Self::new(pages)
    }

    /// Look up a page by identifier (`install`) or file name (`install.html`).
    pub fn get(&self, name: &str) -> Option<&Page> {
        let id = PageId::parse(name)?;
        self.0.iter().find(|p| p.id.stem() == id.stem())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Static header and footer snippets included verbatim in every page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragments {
    pub header: String,
    pub footer: String,
}

impl Fragments {
    /// Read the fragments from `root`. A missing file is an empty fragment.
    pub fn load(root: &Path) -> Self {
        let header = fs::read_to_string(root.join(HEADER_FRAGMENT)).unwrap_or_default();
        let footer = fs::read_to_string(root.join(FOOTER_FRAGMENT)).unwrap_or_default();
        Self { header, footer }
    }
}

/// Fetch the page's content and wrap it in the site shell.
pub fn render_page(
    shell: &SiteShell,
    page: &Page,
    fragments: &Fragments,
    source: &dyn ContentSource,
) -> Result<String, ContentFetchError> {
    debug!(page = %page.id, url = %page.source_url, "rendering page");
    let content = source.fetch_rendered(&page.source_url)?;

    let chrome = Chrome {
        title: &page.title,
        on_load: page.on_load.as_deref(),
        ribbon: page.ribbon,
        header: &fragments.header,
        footer: &fragments.footer,
    };
    Ok(shell.render_page(page.id.stem(), &chrome, &content))
}

#[cfg(test)]
mod tests;
