//! Navigation menu shared by every page.
//!
//! The menu is a fixed, ordered table of [`NavEntry`] values built once at
//! startup. Rendering is a pure function of that table, the active page and
//! the [`LinkStyle`].
use std::collections::HashSet;

use maud::{Markup, html};
use thiserror::Error;

use crate::{
    config::NAV_ENTRIES,
    types::{Href, PageId},
};

/// Class attached to the link of the active page.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("invalid nav identifier {0:?}")]
    InvalidId(String),
    #[error("duplicate nav identifier {0:?}")]
    DuplicateId(String),
}

/// How each menu link is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkStyle {
    /// `<li><a …>Label</a></li>`
    #[default]
    Plain,
    /// `<li><strong><a …>Label</a></strong></li>`
    Emphasized,
}

/// One menu item and its target page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    id: PageId,
    label: String,
}

impl NavEntry {
    pub fn new(id: &str, label: &str) -> Result<Self, NavError> {
        let id = PageId::parse(id).ok_or_else(|| NavError::InvalidId(id.to_string()))?;
        Ok(Self {
            id,
            label: label.to_string(),
        })
    }

    pub fn id(&self) -> &PageId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn href(&self) -> Href {
        Href::to_page(&self.id)
    }

    /// Whether this entry is the page identified by `active`.
    pub fn is_active(&self, active: &str) -> bool {
        self.id.stem() == active
    }
}

/// Ordered menu with unique identifiers.
///
/// Uniqueness is checked on the stem, since that is what the active page is
/// matched against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavTable(Vec<NavEntry>);

impl NavTable {
    pub fn new(entries: Vec<NavEntry>) -> Result<Self, NavError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.stem()) {
                return Err(NavError::DuplicateId(entry.id.to_string()));
            }
        }
        Ok(Self(entries))
    }

    /// Build a table from `(identifier, label)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, NavError> {
        let entries = pairs
            .iter()
            .map(|(id, label)| NavEntry::new(id, label))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// The site's own menu.
    pub fn default_site() -> Result<Self, NavError> {
        Self::from_pairs(NAV_ENTRIES)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a NavTable {
    type Item = &'a NavEntry;
    type IntoIter = std::slice::Iter<'a, NavEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Render the menu as an unordered list, marking the entry matching `active`.
///
/// `active` is compared against each identifier with its page extension
/// stripped. An empty or unknown value marks nothing.
pub fn render_nav(table: &NavTable, active: &str, style: LinkStyle) -> String {
    nav_markup(table, active, style).into_string()
}

fn nav_markup(table: &NavTable, active: &str, style: LinkStyle) -> Markup {
    html! {
        ul {
            @for entry in table {
                li {
                    @match style {
                        LinkStyle::Plain => {
                            (nav_link(entry, active))
                        }
                        LinkStyle::Emphasized => {
                            strong { (nav_link(entry, active)) }
                        }
                    }
                }
            }
        }
    }
}

fn nav_link(entry: &NavEntry, active: &str) -> Markup {
    let href = entry.href();
    let class = entry.is_active(active).then_some(ACTIVE_CLASS);
    html! {
        a href=(href.as_str()) class=[class] { (entry.label()) }
    }
}
