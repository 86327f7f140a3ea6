use std::path::{Path, PathBuf};

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tower_http::services::ServeDir;

/// Catch-all for anything the page and API routes did not claim: files from
/// `public_dir` first, then its `index.html` so client-side routing can take
/// over, then a plain 404.
pub fn service(public_dir: PathBuf) -> Router {
    let index = public_dir.join("index.html");
    let fallback = move || {
        let index = index.clone();
        async move { index_page(&index).await }
    };

    if !public_dir.is_dir() {
        tracing::info!(
            public_dir = %public_dir.display(),
            "public directory not found, serving fallback only"
        );

        return Router::new().fallback(fallback);
    }

    let serve_dir = ServeDir::new(&public_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(fallback.into_service());

    Router::new().fallback_service(serve_dir)
}

async fn index_page(index: &Path) -> Response {
    match tokio::fs::read_to_string(index).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::debug!(index = %index.display(), err = %err, "no single-page index");

            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}
