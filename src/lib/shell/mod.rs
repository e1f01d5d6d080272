//! The site shell: menu, asset markup and ribbon for a page, behind one
//! configured value.
use crate::{
    assets,
    nav::{LinkStyle, NavTable, render_nav},
    templates::{PageParts, page_shell},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellOptions {
    pub link_style: LinkStyle,
    /// Show the fork ribbon on pages that ask for it.
    pub ribbon: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            link_style: LinkStyle::Plain,
            ribbon: true,
        }
    }
}

/// Chrome for one rendered page.
#[derive(Clone, Copy, Debug)]
pub struct Chrome<'a> {
    pub title: &'a str,
    pub on_load: Option<&'a str>,
    /// Whether this page carries the fork ribbon; the shell option can still
    /// turn it off.
    pub ribbon: bool,
    pub header: &'a str,
    pub footer: &'a str,
}

#[derive(Clone, Debug)]
pub struct SiteShell {
    nav: NavTable,
    options: ShellOptions,
}

impl SiteShell {
    pub fn new(nav: NavTable, options: ShellOptions) -> Self {
        Self { nav, options }
    }

    pub fn render_nav(&self, active: &str) -> String {
        render_nav(&self.nav, active, self.options.link_style)
    }

    pub fn render_head_assets(&self) -> &'static str {
        assets::render_head_assets()
    }

    pub fn render_foot_assets(&self) -> &'static str {
        assets::render_foot_assets()
    }

    pub fn render_fork_ribbon(&self) -> String {
        assets::render_fork_ribbon()
    }

    /// Wrap `content` in the page skeleton with `active` highlighted.
    pub fn render_page(&self, active: &str, chrome: &Chrome<'_>, content: &str) -> String {
        let nav = self.render_nav(active);
        let ribbon = (self.options.ribbon && chrome.ribbon).then(|| self.render_fork_ribbon());

        page_shell(&PageParts {
            title: chrome.title,
            on_load: chrome.on_load,
            head_assets: self.render_head_assets(),
            ribbon: ribbon.as_deref(),
            header: chrome.header,
            nav: &nav,
            content,
            footer: chrome.footer,
            foot_assets: self.render_foot_assets(),
        })
    }
}
