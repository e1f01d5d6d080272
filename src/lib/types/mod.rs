//! Shared data types for the documentation site.
//! Implemented as newtypes to enforce invariants.

use std::fmt;

/// Extension stripped from identifiers when matching the active page.
pub const PAGE_EXTENSION: &str = ".html";

/// Identifier of a page or nav target, e.g. `install.html` or `install`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(String);

impl PageId {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        let valid = raw
            .chars()
            .all(|ch| !ch.is_whitespace() && !ch.is_control() && ch != '/' && ch != '\\');
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier with one trailing page extension removed.
    ///
    /// An identifier that consists solely of the extension is returned as is.
    pub fn stem(&self) -> &str {
        match self.0.strip_suffix(PAGE_EXTENSION) {
            Some(stem) if !stem.is_empty() => stem,
            _ => &self.0,
        }
    }

    /// File name the page is published under.
    pub fn file_name(&self) -> String {
        format!("{}{PAGE_EXTENSION}", self.stem())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Link relative to the site root, as written into `href` attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Href(String);

impl Href {
    pub fn to_page(id: &PageId) -> Self {
        Self(format!("./{}", id.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
