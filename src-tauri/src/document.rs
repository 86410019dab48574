//! Location of the content document loaded into the main window.

use std::path::Path;

use tauri::Url;

use crate::error::{ShellError, ShellResult};

/// Entry document of the content layer.
pub const INDEX_DOCUMENT: &str = "index.html";

/// Where the main window loads its document from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentUrl {
    /// Path resolved against the bundled frontend.
    App(String),
    /// `file://` URL into an unpacked content directory.
    File(Url),
}

/// Build the `open=` query handed to the content layer for a startup file.
pub fn open_query(path: &str) -> String {
    format!("open={}", urlencoding::encode(path))
}

/// Resolve the document URL from the optional content directory and
/// startup file.
pub fn resolve(content_dir: Option<&Path>, startup_file: Option<&str>) -> ShellResult<DocumentUrl> {
    let query = startup_file.map(open_query);

    let Some(dir) = content_dir else {
        let path = match query {
            Some(query) => format!("{}?{}", INDEX_DOCUMENT, query),
            None => INDEX_DOCUMENT.to_string(),
        };
        return Ok(DocumentUrl::App(path));
    };

    let index = dir.join(INDEX_DOCUMENT);
    let mut url = Url::from_file_path(&index).map_err(|_| {
        ShellError::Config(format!("content directory must be absolute: {:?}", dir))
    })?;
    url.set_query(query.as_deref());

    Ok(DocumentUrl::File(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_query_encodes_like_uri_component() {
        assert_eq!(open_query("/a/b c.txt"), "open=%2Fa%2Fb%20c.txt");
        assert_eq!(open_query("C:\\docs\\x&y.md"), "open=C%3A%5Cdocs%5Cx%26y.md");
    }

    #[test]
    fn test_bundled_without_startup_file() {
        assert_eq!(
            resolve(None, None).unwrap(),
            DocumentUrl::App("index.html".to_string())
        );
    }

    #[test]
    fn test_bundled_with_startup_file() {
        assert_eq!(
            resolve(None, Some("/a/b c.txt")).unwrap(),
            DocumentUrl::App("index.html?open=%2Fa%2Fb%20c.txt".to_string())
        );
    }

    #[test]
    fn test_content_dir_with_startup_file() {
        let dir = std::env::temp_dir().join("tagspaces");
        let DocumentUrl::File(url) = resolve(Some(&dir), Some("/a/b c.txt")).unwrap() else {
            panic!("expected a file URL");
        };

        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with("/tagspaces/index.html"));
        assert_eq!(url.query(), Some("open=%2Fa%2Fb%20c.txt"));
    }

    #[test]
    fn test_content_dir_without_startup_file() {
        let dir = std::env::temp_dir();
        let DocumentUrl::File(url) = resolve(Some(&dir), None).unwrap() else {
            panic!("expected a file URL");
        };
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_relative_content_dir_is_rejected() {
        let err = resolve(Some(Path::new("relative/dir")), None).unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }
}
