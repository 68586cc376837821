//! Validated announce and web-seed URLs.
//!
//! A [`Url`] keeps the string exactly as it was supplied (so it compares and
//! displays the way the caller wrote it) but is only constructible from
//! strings that parse as absolute URLs with a non-empty host and a port in
//! `0..=65535`.
//!
//! ```
//! use tormeta::Url;
//!
//! let url = Url::parse("http://tracker.example.com:6969/announce").unwrap();
//! assert_eq!(url.as_str(), "http://tracker.example.com:6969/announce");
//! assert_eq!(url.port(), Some(6969));
//!
//! let err = Url::parse("http://tracker.example.com:65536").unwrap_err();
//! assert_eq!(err.to_string(), "http://tracker.example.com:65536: Invalid URL");
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::UrlError;

/// A syntactically valid absolute URL.
#[derive(Clone)]
pub struct Url {
    raw: String,
    parsed: url::Url,
}

impl Url {
    /// Validates `input` and wraps it.
    pub fn parse(input: impl Into<String>) -> Result<Self, UrlError> {
        let raw = input.into();
        let parsed = match url::Url::parse(&raw) {
            Ok(parsed) => parsed,
            Err(e) => return Err(UrlError::new(raw, Some(e))),
        };

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(UrlError::new(raw, None));
        }

        Ok(Self { raw, parsed })
    }

    /// The URL as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    pub fn host(&self) -> &str {
        self.parsed.host_str().unwrap_or_default()
    }

    /// The explicit port, or the scheme's well-known port when omitted.
    pub fn port(&self) -> Option<u16> {
        self.parsed.port_or_known_default()
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Url {}

impl Hash for Url {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialEq<str> for Url {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for Url {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

impl Borrow<str> for Url {
    fn borrow(&self) -> &str {
        &self.raw
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.raw, f)
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = UrlError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Url::parse(s)
    }
}

impl TryFrom<String> for Url {
    type Error = UrlError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Url::parse(s)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.raw
    }
}

impl From<&Url> for String {
    fn from(url: &Url) -> Self {
        url.raw.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_bounds() {
        assert!(Url::parse("http://foohost:65535").is_ok());
        assert!(Url::parse("http://foohost:0").is_ok());
        assert!(Url::parse("http://foohost:65536").is_err());
        assert!(Url::parse("http://foohost:-1").is_err());
    }

    #[test]
    fn test_malformed_authority() {
        let err = Url::parse("http://bar:456:789").unwrap_err();
        assert_eq!(err.to_string(), "http://bar:456:789: Invalid URL");
        assert!(Url::parse("http://").is_err());
        assert!(Url::parse("not a url").is_err());
        assert!(Url::parse("/just/a/path").is_err());
    }

    #[test]
    fn test_requires_host() {
        assert!(Url::parse("file:///etc/hosts").is_err());
        assert!(Url::parse("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_keeps_original_spelling() {
        let url = Url::parse("http://foo:123").unwrap();
        assert_eq!(url.as_str(), "http://foo:123");
        assert_eq!(url.to_string(), "http://foo:123");
        assert_eq!(url, "http://foo:123");
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host(), "foo");
        assert_eq!(url.port(), Some(123));
    }

    #[test]
    fn test_non_special_schemes() {
        let url = Url::parse("udp://tracker.example.org:1337/announce").unwrap();
        assert_eq!(url.scheme(), "udp");
        assert_eq!(url.port(), Some(1337));
        assert!(Url::parse("udp://tracker.example.org:1337:1").is_err());
    }

    #[test]
    fn test_default_port() {
        let url: Url = "https://example.org/announce".parse().unwrap();
        assert_eq!(url.port(), Some(443));
    }
}
