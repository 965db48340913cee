//! Static file serving module
//!
//! Resolves request paths against the static root, rejects traversal out of
//! the root, and builds file responses with conditional-request support.

use crate::config::StaticFilesConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Serve a static file if the request path resolves to one under the root.
///
/// Returns `None` when no file matches, so the router can fall through to
/// the fixed page routes.
pub async fn serve(
    ctx: &RequestContext<'_>,
    cfg: &StaticFilesConfig,
) -> Option<Response<Full<Bytes>>> {
    let (content, content_type) = load_from_root(&cfg.root, ctx.path, &cfg.index_files).await?;

    let etag = cache::generate_etag(&content);
    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return Some(http::build_304_response(&etag));
    }

    Some(http::build_static_response(
        content,
        content_type,
        &etag,
        ctx.is_head,
    ))
}

/// Load a file from the static root with index file support
pub async fn load_from_root(
    root: &str,
    path: &str,
    index_files: &[String],
) -> Option<(Vec<u8>, &'static str)> {
    let relative = path.trim_start_matches('/');

    // Reject any path carrying a parent-directory component outright
    if Path::new(relative)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
        return None;
    }

    // A missing static root simply means the server has no assets to offer
    let root_canonical = Path::new(root).canonicalize().ok()?;

    let mut file_path = root_canonical.join(relative);

    // Directory requests fall back to the configured index files
    if relative.is_empty() || relative.ends_with('/') || file_path.is_dir() {
        file_path = find_index_file(&file_path, index_files)?;
    }

    // Canonicalize and re-check containment; symlinks must not escape the root
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            file_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_canonical.display()
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for(file_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// First configured index file that exists under the directory
fn find_index_file(dir: &Path, index_files: &[String]) -> Option<PathBuf> {
    index_files
        .iter()
        .map(|f| dir.join(f))
        .find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("card-server-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn default_index() -> Vec<String> {
        vec!["index.html".to_string(), "index.htm".to_string()]
    }

    #[tokio::test]
    async fn test_serves_file_bytes_verbatim() {
        let root = setup_root("verbatim");
        std::fs::write(root.join("style.css"), b"body { color: red; }").unwrap();

        let (content, content_type) =
            load_from_root(root.to_str().unwrap(), "/style.css", &default_index())
                .await
                .expect("file should resolve");
        assert_eq!(content, b"body { color: red; }");
        assert_eq!(content_type, "text/css");
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let root = setup_root("missing");
        assert!(
            load_from_root(root.to_str().unwrap(), "/nope.css", &default_index())
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_missing_root_is_none() {
        assert!(
            load_from_root("no-such-root-dir", "/style.css", &default_index())
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_parent_dir_components_rejected() {
        let root = setup_root("traversal");
        std::fs::write(root.join("ok.txt"), b"ok").unwrap();

        assert!(
            load_from_root(root.to_str().unwrap(), "/../etc/passwd", &default_index())
                .await
                .is_none()
        );
        assert!(
            load_from_root(root.to_str().unwrap(), "/a/../../ok.txt", &default_index())
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_directory_uses_index_file() {
        let root = setup_root("index");
        std::fs::write(root.join("index.html"), b"<h1>index</h1>").unwrap();

        let (content, content_type) =
            load_from_root(root.to_str().unwrap(), "/", &default_index())
                .await
                .expect("index should resolve");
        assert_eq!(content, b"<h1>index</h1>");
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_directory_without_index_is_none() {
        let root = setup_root("noindex");
        assert!(
            load_from_root(root.to_str().unwrap(), "/", &default_index())
                .await
                .is_none()
        );
    }
}
