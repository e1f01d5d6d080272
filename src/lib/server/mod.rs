//! HTTP surface: one route per page, static files for everything else.
use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::{
    content::ContentSource,
    pages::{Fragments, PageSet, render_page},
    shell::SiteShell,
    types::PageId,
};

/// Read-only state shared by all requests.
pub struct AppState {
    pub root: PathBuf,
    pub shell: SiteShell,
    pub pages: PageSet,
    pub source: Arc<dyn ContentSource>,
}

pub fn router(state: Arc<AppState>) -> Router {
    let mut router = Router::new();

    for page in &state.pages {
        let id = page.id.clone();
        let handler = move |State(state): State<Arc<AppState>>| serve_page(state, id);
        router = router.route(&format!("/{}", page.file_name()), get(handler.clone()));
        if page.id.stem() == "index" {
            router = router.route("/", get(handler));
        }
    }

    router
        .fallback_service(ServeDir::new(&state.root))
        .with_state(state)
}

async fn serve_page(state: Arc<AppState>, id: PageId) -> Response {
    let result = tokio::task::spawn_blocking(move || {
        let page = state.pages.get(id.as_str())?;
        let fragments = Fragments::load(&state.root);
        Some(render_page(
            &state.shell,
            page,
            &fragments,
            state.source.as_ref(),
        ))
    })
    .await;

    match result {
        Ok(Some(Ok(html))) => Html(html).into_response(),
        Ok(Some(Err(e))) => {
            warn!(error = %e, "content fetch failed");
            (StatusCode::BAD_GATEWAY, format!("Could not load page content: {e}")).into_response()
        }
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            error!(error = %e, "render task failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
