use crate::infra::AppState;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use std::path::{Component, Path, PathBuf};

/// Fallback handler serving the bundled frontend: known files are served
/// with their guessed content type, anything else falls back to the index
/// page for client-side routing.
pub(crate) async fn serve_static(Extension(state): Extension<AppState>, uri: Uri) -> Response {
    let requested = uri.path().trim_start_matches('/');
    let relative = if requested.is_empty() {
        Path::new("index.html")
    } else {
        Path::new(requested)
    };

    let Some(path) = sanitize(state.static_dir.as_ref(), relative) else {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    };

    let path = if path.is_file() {
        path
    } else {
        state.static_dir.join("index.html")
    };

    match std::fs::read(&path) {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                bytes,
            )
                .into_response()
        }
        Err(_) => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

/// Rejects traversal components so requests cannot escape the asset root.
fn sanitize(root: &Path, relative: &Path) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(path)
}
