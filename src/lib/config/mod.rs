use std::time::Duration;

// Site-wide metadata.
pub const SITE_TITLE: &str = "Mechanic";
pub const SITE_REPOSITORY: &str = "https://github.com/mslonina/Mechanic";

/// Raw location the page documents are fetched from.
pub const CONTENT_BASE_URL: &str = "https://raw.github.com/mslonina/Mechanic/2.x";

// Static include fragments, relative to the site root.
pub const HEADER_FRAGMENT: &str = "Header.html";
pub const FOOTER_FRAGMENT: &str = "Footer.html";

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Menu entries in display order: (page identifier, label).
pub const NAV_ENTRIES: &[(&str, &str)] = &[
    ("index.html", "Overview"),
    ("install.html", "Installation"),
    ("userguide.html", "User guide"),
];

/// Published pages: (identifier, title, document path under the content base,
/// body onload hook, fork ribbon).
pub const PAGES: &[(&str, &str, &str, Option<&str>, bool)] = &[
    ("index", "Mechanic", "Overview.md", Some("styleCode()"), false),
    ("install", "Mechanic :: Installation", "INSTALL.md", None, true),
    (
        "userguide",
        "Mechanic :: The User guide",
        "examples/UserGuide.md",
        None,
        true,
    ),
];

/// Convenience container for site metadata used across rendering.
#[derive(Clone, Debug)]
pub struct SiteMeta {
    pub title: String,
    pub content_base_url: String,
}

pub fn site_meta() -> SiteMeta {
    SiteMeta {
        title: SITE_TITLE.to_string(),
        content_base_url: CONTENT_BASE_URL.trim_end_matches('/').to_string(),
    }
}

impl SiteMeta {
    /// Absolute URL of a document under the content base.
    pub fn content_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.content_base_url,
            path.trim_start_matches('/')
        )
    }
}
