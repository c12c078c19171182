//! Static directory with the documentation pages and SEO files.

use std::convert::Infallible;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::Request;
use axum::response::Response;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use wfdocs_core::Locale;

use crate::service::{Error, Result};
use crate::utility::tracing_targets::TRACING_TARGET_SERVICE;

/// English index page.
pub const INDEX_PAGE: &str = "index.html";

/// Chinese index page.
pub const INDEX_PAGE_ZH: &str = "index-zh.html";

/// Read-only view of the static directory.
///
/// The directory may be missing at startup; pages then answer with their
/// not-found responses instead of failing the whole server.
#[derive(Debug, Clone)]
pub struct StaticSite {
    root: Arc<Path>,
}

impl StaticSite {
    /// Opens the static directory at `root`.
    ///
    /// A missing directory is accepted; a path that is not a directory is not.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();

        match std::fs::metadata(root) {
            Ok(metadata) if !metadata.is_dir() => {
                return Err(Error::config(format!(
                    "static path '{}' is not a directory",
                    root.display()
                )));
            }
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    target: TRACING_TARGET_SERVICE,
                    static_dir = %root.display(),
                    "Static directory not found, pages will report setup required"
                );
            }
            Err(err) => {
                return Err(Error::file_system(format!(
                    "cannot inspect static directory '{}'",
                    root.display()
                ))
                .with_source(err));
            }
        }

        Ok(Self {
            root: Arc::from(root),
        })
    }

    /// Returns the static directory.
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `name` inside the static directory.
    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Reads a file, returning `None` when it does not exist or cannot be read.
    pub async fn read_file(&self, name: &str) -> Option<Vec<u8>> {
        let path = self.resolve(name);

        match tokio::fs::read(&path).await {
            Ok(contents) => Some(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    target: TRACING_TARGET_SERVICE,
                    path = %path.display(),
                    "Static file not found"
                );
                None
            }
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_SERVICE,
                    path = %path.display(),
                    error = %err,
                    "Failed to read static file"
                );
                None
            }
        }
    }

    /// Reads the index page for `locale`.
    ///
    /// The Chinese page falls back to the English one when absent.
    pub async fn read_index(&self, locale: Locale) -> Option<String> {
        let contents = match locale {
            Locale::Zh => match self.read_file(INDEX_PAGE_ZH).await {
                Some(contents) => Some(contents),
                None => self.read_file(INDEX_PAGE).await,
            },
            Locale::En => self.read_file(INDEX_PAGE).await,
        }?;

        Some(String::from_utf8_lossy(&contents).into_owned())
    }

    /// Serves any file from the static directory.
    pub async fn serve(&self, request: Request) -> Response {
        let result: Result<_, Infallible> = ServeDir::new(&*self.root).oneshot(request).await;

        match result {
            Ok(response) => response.map(Body::new),
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    fn site_with_files(files: &[(&str, &str)]) -> (tempfile::TempDir, StaticSite) {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            std::fs::write(dir.path().join(name), contents).unwrap();
        }
        let site = StaticSite::new(dir.path()).unwrap();
        (dir, site)
    }

    #[tokio::test]
    async fn zh_index_is_preferred() {
        let (_dir, site) = site_with_files(&[(INDEX_PAGE, "english"), (INDEX_PAGE_ZH, "chinese")]);

        assert_eq!(site.read_index(Locale::Zh).await.as_deref(), Some("chinese"));
        assert_eq!(site.read_index(Locale::En).await.as_deref(), Some("english"));
    }

    #[tokio::test]
    async fn zh_index_falls_back_to_english() {
        let (_dir, site) = site_with_files(&[(INDEX_PAGE, "english")]);
        assert_eq!(site.read_index(Locale::Zh).await.as_deref(), Some("english"));
    }

    #[tokio::test]
    async fn missing_directory_is_allowed() {
        let site = StaticSite::new("/nonexistent/static").unwrap();
        assert!(site.read_index(Locale::En).await.is_none());
        assert!(site.read_file("robots.txt").await.is_none());
    }

    #[test]
    fn file_as_root_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(StaticSite::new(file.path()).is_err());
    }

    #[tokio::test]
    async fn serves_other_files() {
        let (_dir, site) = site_with_files(&[("app.css", "body {}")]);

        let request = Request::builder().uri("/app.css").body(Body::empty()).unwrap();
        let response = site.serve(request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder().uri("/missing.css").body(Body::empty()).unwrap();
        let response = site.serve(request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
