use std::collections::HashSet;

use super::observable::{ListKind, ObservableList};
use crate::error::UrlError;
use crate::uri::Url;

/// Validated, deduplicated URLs, equal to any arrangement of the same URLs.
///
/// ```
/// use tormeta::UrlList;
///
/// let mut urls = UrlList::new(["http://foo:123", "http://bar:456", "http://foo:123"]).unwrap();
/// assert_eq!(urls.len(), 2);
/// assert_eq!(urls, ["http://bar:456", "http://foo:123"]);
///
/// let err = urls.append("http://bar:456:789").unwrap_err();
/// assert_eq!(err.to_string(), "http://bar:456:789: Invalid URL");
/// ```
pub type UrlList = ObservableList<UrlKind>;

/// [`ListKind`] of [`UrlList`]: exact-string identity, set equality.
#[derive(Debug)]
pub enum UrlKind {}

impl ListKind for UrlKind {
    type Item = Url;
    type Input = String;
    type Error = UrlError;

    fn expand(input: String) -> Result<Vec<Url>, UrlError> {
        Url::parse(input).map(|url| vec![url])
    }

    fn admit(existing: &[&Url], incoming: Vec<Url>) -> Vec<Url> {
        let mut seen: HashSet<String> = existing.iter().map(|url| url.to_string()).collect();
        incoming
            .into_iter()
            .filter(|url| seen.insert(url.to_string()))
            .collect()
    }

    fn list_eq(a: &[Url], b: &[Url]) -> bool {
        same_urls(a.iter().map(Url::as_str), b.iter().map(Url::as_str))
    }
}

pub(super) fn same_urls<'a, 'b>(
    a: impl Iterator<Item = &'a str>,
    b: impl Iterator<Item = &'b str>,
) -> bool {
    let a: HashSet<&str> = a.collect();
    let b: HashSet<&str> = b.collect();
    a == b
}

impl ObservableList<UrlKind> {
    /// Removes `url` if present. Returns whether it was.
    pub fn remove_url(&mut self, url: &str) -> bool {
        self.remove_first(|item| item == url)
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.items.iter().any(|item| item == url)
    }
}

impl<T: AsRef<str>> PartialEq<[T]> for ObservableList<UrlKind> {
    fn eq(&self, other: &[T]) -> bool {
        same_urls(
            self.items.iter().map(Url::as_str),
            other.iter().map(AsRef::<str>::as_ref),
        )
    }
}

impl<T: AsRef<str>> PartialEq<Vec<T>> for ObservableList<UrlKind> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: AsRef<str>, const N: usize> PartialEq<[T; N]> for ObservableList<UrlKind> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}
