//! Fixed asset markup shared by every page.
use maud::{Markup, html};

use crate::config::SITE_REPOSITORY;

const RIBBON_IMAGE: &str = "https://s3.amazonaws.com/github/ribbons/forkme_right_darkblue_121621.png";
const RIBBON_STYLE: &str = "position: absolute; top: 0; right: 0; border: 0;";

const HEAD_ASSETS: &str = r#"<link rel="stylesheet" href="stylesheets/styles.css">
<link rel="stylesheet" href="stylesheets/pygment_trac.css">
<link rel="stylesheet" href="stylesheets/app.css">
<link rel="stylesheet" href="stylesheets/prettify.css">
<meta name="viewport" content="width=device-width, initial-scale=1, user-scalable=no">
<script src="javascripts/jquery-1.8.3.min.js"></script>
<!--[if lt IE 9]>
<script src="//html5shiv.googlecode.com/svn/trunk/html5.js"></script>
<![endif]-->
"#;

const FOOT_ASSETS: &str = r#"<script src="javascripts/scale.fix.js"></script>
<script src="javascripts/code.js"></script>
<script src="prettify/prettify.js"></script>
"#;

/// Stylesheets, viewport meta and scripts for the document head.
pub fn render_head_assets() -> &'static str {
    HEAD_ASSETS
}

/// Scripts loaded at the end of the body.
pub fn render_foot_assets() -> &'static str {
    FOOT_ASSETS
}

/// Corner banner linking to the project repository.
pub fn render_fork_ribbon() -> String {
    ribbon_markup().into_string()
}

fn ribbon_markup() -> Markup {
    html! {
        a href=(SITE_REPOSITORY) {
            img style=(RIBBON_STYLE) src=(RIBBON_IMAGE) alt="Fork me on GitHub";
        }
    }
}
