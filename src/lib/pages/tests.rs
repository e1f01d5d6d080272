use std::fs;

use tempfile::TempDir;

use super::{Fragments, Page, PageError, PageSet, render_page};
use crate::{
    config::{FOOTER_FRAGMENT, HEADER_FRAGMENT, site_meta},
    content::{ContentFetchError, ContentSource},
    nav::NavTable,
    shell::{ShellOptions, SiteShell},
    types::PageId,
};

struct Fixed(&'static str);

impl ContentSource for Fixed {
    fn fetch_markdown(&self, _url: &str) -> Result<String, ContentFetchError> {
        Ok(self.0.to_string())
    }
}

struct Offline;

impl ContentSource for Offline {
    fn fetch_markdown(&self, url: &str) -> Result<String, ContentFetchError> {
        Err(ContentFetchError::Status {
            url: url.to_string(),
            status: 503,
        })
    }
}

fn page(id: &str) -> Page {
    Page {
        id: PageId::parse(id).unwrap(),
        title: id.to_string(),
        source_url: format!("https://example.org/{id}.md"),
        on_load: None,
        ribbon: true,
    }
}

fn shell() -> SiteShell {
    SiteShell::new(NavTable::default_site().unwrap(), ShellOptions::default())
}

#[test]
fn default_pages_resolve_sources() {
    let pages = PageSet::default_site(&site_meta()).unwrap();
    let urls: Vec<(&str, &str)> = pages
        .iter()
        .map(|p| (p.id.as_str(), p.source_url.as_str()))
        .collect();
    assert_eq!(
        urls,
        vec![
            (
                "index",
                "https://raw.github.com/mslonina/Mechanic/2.x/Overview.md"
            ),
            (
                "install",
                "https://raw.github.com/mslonina/Mechanic/2.x/INSTALL.md"
            ),
            (
                "userguide",
                "https://raw.github.com/mslonina/Mechanic/2.x/examples/UserGuide.md"
            ),
        ]
    );
}

#[test]
fn every_page_has_a_nav_entry() {
    let pages = PageSet::default_site(&site_meta()).unwrap();
    let nav = NavTable::default_site().unwrap();
    for page in &pages {
        assert!(
            nav.iter().any(|e| e.is_active(page.id.stem())),
            "{} missing from nav",
            page.id
        );
    }
}

#[test]
fn lookup_accepts_id_or_file_name() {
    let pages = PageSet::default_site(&site_meta()).unwrap();
    assert_eq!(pages.get("install").unwrap().title, "Mechanic :: Installation");
    assert_eq!(
        pages.get("install.html").unwrap().title,
        "Mechanic :: Installation"
    );
    assert_eq!(pages.get("userguide").unwrap().file_name(), "userguide.html");
    assert!(pages.get("nosuchpage").is_none());
    assert!(pages.get("").is_none());
    assert!(pages.get("../install").is_none());
}

#[test]
fn render_marks_page_active_and_embeds_content() {
    let pages = PageSet::default_site(&site_meta()).unwrap();
    let fragments = Fragments {
        header: "<h1>Mechanic</h1>".to_string(),
        footer: "<p>Mariusz Slonina</p>".to_string(),
    };
    let page = pages.get("userguide").unwrap();

    let html = render_page(&shell(), page, &fragments, &Fixed("# User guide\n")).unwrap();

    assert!(html.contains("<title>Mechanic :: The User guide</title>"));
    assert!(html.contains(r#"<a href="./userguide.html" class="active">User guide</a>"#));
    assert_eq!(html.matches(r#"class="active""#).count(), 1);
    assert!(html.contains("<section><h1>User guide</h1>\n</section>"));
    assert!(html.contains("<header><h1>Mechanic</h1><ul>"));
    assert!(html.contains("<footer><p>Mariusz Slonina</p></footer>"));
}

#[test]
fn index_page_keeps_onload_hook() {
    let pages = PageSet::default_site(&site_meta()).unwrap();
    let page = pages.get("index").unwrap();
    let html = render_page(&shell(), page, &Fragments::default(), &Fixed("hi")).unwrap();
    assert!(html.contains(r#"<body onload="styleCode()">"#));
}

#[test]
fn fetch_errors_propagate() {
    let pages = PageSet::default_site(&site_meta()).unwrap();
    let page = pages.get("install").unwrap();
    let err = render_page(&shell(), page, &Fragments::default(), &Offline).unwrap_err();
    assert!(matches!(err, ContentFetchError::Status { status: 503, .. }));
}

#[test]
fn fragments_load_from_root() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(tmp.path().join(HEADER_FRAGMENT), "<h1>Head</h1>").unwrap();

    let fragments = Fragments::load(tmp.path());
    assert_eq!(fragments.header, "<h1>Head</h1>");
    assert_eq!(fragments.footer, "");

    fs::write(tmp.path().join(FOOTER_FRAGMENT), "<p>Foot</p>").unwrap();
    assert_eq!(Fragments::load(tmp.path()).footer, "<p>Foot</p>");
}

#[test]
fn pages_sharing_a_route_are_rejected() {
    let err = PageSet::new(vec![page("install"), page("install.html")]).unwrap_err();
    assert_eq!(err, PageError::DuplicateId("install.html".to_string()));

    let pages = PageSet::new(vec![page("install"), page("faq.html")]).unwrap();
    assert_eq!(pages.get("faq").unwrap().file_name(), "faq.html");
}

#[test]
fn ribbon_only_on_inner_pages() {
    let pages = PageSet::default_site(&site_meta()).unwrap();
    let render = |id: &str| {
        render_page(&shell(), pages.get(id).unwrap(), &Fragments::default(), &Fixed("hi")).unwrap()
    };

    assert!(!render("index").contains("Fork me on GitHub"));
    assert!(render("install").contains("Fork me on GitHub"));
    assert!(render("userguide").contains("Fork me on GitHub"));

    let plain = SiteShell::new(
        NavTable::default_site().unwrap(),
        ShellOptions {
            ribbon: false,
            ..ShellOptions::default()
        },
    );
    let install = pages.get("install").unwrap();
    let html = render_page(&plain, install, &Fragments::default(), &Fixed("hi")).unwrap();
    assert!(!html.contains("Fork me on GitHub"));
}
