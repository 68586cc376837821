use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A filesystem read failed.
///
/// Displays as `"<path>: <reason>"`, where the reason is the operating
/// system's description of the failure (for example
/// `"no/such/file: No such file or directory"`).
#[derive(Debug, Error)]
#[error("{}: {}", .path.display(), os_reason(.source))]
pub struct ReadError {
    path: PathBuf,
    source: io::Error,
}

impl ReadError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// The path that could not be read, as it was given to the failing call.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The kind of the underlying I/O failure.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

/// A URL failed validation.
///
/// Displays as `"<url>: Invalid URL"`.
#[derive(Debug, Error)]
#[error("{url}: Invalid URL")]
pub struct UrlError {
    url: String,
    #[source]
    source: Option<url::ParseError>,
}

impl UrlError {
    pub(crate) fn new(url: impl Into<String>, source: Option<url::ParseError>) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }

    /// The offending URL, exactly as it was supplied.
    pub fn url(&self) -> &str {
        &self.url
    }
}

// io::Error appends " (os error N)" to OS failures; only the description is wanted.
fn os_reason(err: &io::Error) -> String {
    let text = err.to_string();
    match text.rfind(" (os error ") {
        Some(idx) if err.raw_os_error().is_some() => text[..idx].to_string(),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_strips_os_code() {
        let err = ReadError::new("no/such/file", io::Error::from_raw_os_error(2));
        assert_eq!(err.to_string(), "no/such/file: No such file or directory");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_read_error_keeps_custom_message() {
        let err = ReadError::new("a/b", io::Error::other("filesystem loop"));
        assert_eq!(err.to_string(), "a/b: filesystem loop");
    }

    #[test]
    fn test_url_error_display() {
        let err = UrlError::new("http://bar:456:789", None);
        assert_eq!(err.to_string(), "http://bar:456:789: Invalid URL");
        assert_eq!(err.url(), "http://bar:456:789");
    }
}
