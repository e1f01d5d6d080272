use maud::{DOCTYPE, PreEscaped, html};

/// Pieces assembled into a page. Everything except `title` and `on_load` is
/// trusted markup and embedded verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageParts<'a> {
    pub title: &'a str,
    pub on_load: Option<&'a str>,
    pub head_assets: &'a str,
    pub ribbon: Option<&'a str>,
    pub header: &'a str,
    pub nav: &'a str,
    pub content: &'a str,
    pub footer: &'a str,
    pub foot_assets: &'a str,
}

/// Basic HTML shell shared by pages.
pub fn page_shell(parts: &PageParts<'_>) -> String {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta http-equiv="X-UA-Compatible" content="chrome=1";
                title { (parts.title) }
                (PreEscaped(parts.head_assets))
            }
            body onload=[parts.on_load] {
                @if let Some(ribbon) = parts.ribbon {
                    (PreEscaped(ribbon))
                }
                div.wrapper {
                    header {
                        (PreEscaped(parts.header))
                        (PreEscaped(parts.nav))
                    }
                    section {
                        (PreEscaped(parts.content))
                    }
                    footer {
                        (PreEscaped(parts.footer))
                    }
                }
                (PreEscaped(parts.foot_assets))
            }
        }
    }
    .into_string()
}
