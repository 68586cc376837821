use std::collections::HashSet;
use std::ops::Deref;

use super::observable::{ListKind, ObservableList};
use super::urls::{same_urls, UrlList};
use crate::error::UrlError;
use crate::uri::Url;

/// Announce URLs grouped into tiers.
///
/// No URL appears in two tiers and no tier is empty. New tiers lose the URLs
/// that earlier content already holds; a tier that ends up empty is left
/// out. Tiers are edited through [`tier_mut`](ObservableList::tier_mut).
///
/// How an input becomes tiers:
///
/// | Call | Each element / argument |
/// |------|-------------------------|
/// | `new`, `replace`, `extend`, `&tiers + x` | one tier per element |
/// | `append`, `insert`, `set` | the whole argument, flattened, is one tier |
///
/// So `&tiers + ["http://x"]` merges `http://x` into the first tier, while
/// `tiers.append(["http://x", "http://y"])` adds one new tier.
///
/// ```
/// use tormeta::{TierInput, TierList};
///
/// let tiers = TierList::new([
///     TierInput::from(["http://a:1", "http://b:2", "http://c:3"]),
///     TierInput::from(["http://d:4", "http://a:1", "http://e:5"]),
///     TierInput::from(["http://e:5", "http://c:3", "http://f:6"]),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     tiers,
///     vec![
///         vec!["http://a:1", "http://b:2", "http://c:3"],
///         vec!["http://d:4", "http://e:5"],
///         vec!["http://f:6"],
///     ]
/// );
/// ```
pub type TierList = ObservableList<TierKind>;

/// [`ListKind`] of [`TierList`]: cross-tier deduplication, per-tier set
/// equality.
#[derive(Debug)]
pub enum TierKind {}

/// Anything that can become a tier: one URL or a nested sequence of URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierInput {
    Url(String),
    Many(Vec<TierInput>),
}

impl TierInput {
    fn flatten_into(self, out: &mut Vec<String>) {
        match self {
            TierInput::Url(url) => out.push(url),
            TierInput::Many(inputs) => {
                for input in inputs {
                    input.flatten_into(out);
                }
            }
        }
    }
}

impl From<&str> for TierInput {
    fn from(url: &str) -> Self {
        TierInput::Url(url.to_string())
    }
}

impl From<String> for TierInput {
    fn from(url: String) -> Self {
        TierInput::Url(url)
    }
}

impl From<Url> for TierInput {
    fn from(url: Url) -> Self {
        TierInput::Url(url.into_string())
    }
}

impl From<&Url> for TierInput {
    fn from(url: &Url) -> Self {
        TierInput::Url(url.to_string())
    }
}

impl<T: Into<TierInput>> From<Vec<T>> for TierInput {
    fn from(inputs: Vec<T>) -> Self {
        TierInput::Many(inputs.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TierInput>, const N: usize> From<[T; N]> for TierInput {
    fn from(inputs: [T; N]) -> Self {
        TierInput::Many(inputs.into_iter().map(Into::into).collect())
    }
}

impl From<&UrlList> for TierInput {
    fn from(tier: &UrlList) -> Self {
        TierInput::Many(tier.iter().map(TierInput::from).collect())
    }
}

impl From<UrlList> for TierInput {
    fn from(tier: UrlList) -> Self {
        TierInput::from(&tier)
    }
}

impl ListKind for TierKind {
    type Item = UrlList;
    type Input = TierInput;
    type Error = UrlError;

    fn expand(input: TierInput) -> Result<Vec<UrlList>, UrlError> {
        let mut raw = Vec::new();
        input.flatten_into(&mut raw);
        let tier = UrlList::new(raw)?;
        Ok(if tier.is_empty() { Vec::new() } else { vec![tier] })
    }

    fn admit(existing: &[&UrlList], incoming: Vec<UrlList>) -> Vec<UrlList> {
        let mut seen: HashSet<String> = existing
            .iter()
            .flat_map(|tier| tier.iter())
            .map(Url::to_string)
            .collect();
        incoming
            .into_iter()
            .filter_map(|tier| {
                let urls: Vec<Url> = tier
                    .items
                    .into_iter()
                    .filter(|url| seen.insert(url.to_string()))
                    .collect();
                (!urls.is_empty()).then(|| UrlList::from_items(urls))
            })
            .collect()
    }

    /// Tier `i` of `rhs` is merged into tier `i` of `lhs`; tiers past the end
    /// of `lhs` are appended. URLs already present anywhere stay where they
    /// are.
    fn concat(lhs: &[UrlList], rhs: Vec<UrlList>) -> Vec<UrlList> {
        let mut tiers = lhs.to_vec();
        for (i, tier) in rhs.into_iter().enumerate() {
            let existing: Vec<&UrlList> = tiers.iter().collect();
            let Some(tier) = Self::admit(&existing, vec![tier]).pop() else {
                continue;
            };
            match tiers.get_mut(i) {
                Some(merged) => merged.items.extend(tier.items),
                None => tiers.push(tier),
            }
        }
        tiers
    }

    fn list_eq(a: &[UrlList], b: &[UrlList]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a == b)
    }
}

impl ObservableList<TierKind> {
    /// Every URL of every tier, in tier order.
    pub fn flat(&self) -> impl Iterator<Item = &Url> + '_ {
        self.items.iter().flat_map(|tier| tier.iter())
    }

    /// Opens tier `index` for editing, or `None` if there is no such tier.
    ///
    /// Changes are settled when the returned guard is dropped: URLs that
    /// another tier already holds are taken out of the edited tier, the tier
    /// is removed if that leaves it empty, and the callback fires once.
    pub fn tier_mut(&mut self, index: usize) -> Option<TierMut<'_>> {
        (index < self.items.len()).then(move || TierMut {
            tiers: self,
            index,
            changed: false,
        })
    }

    fn settle(&mut self, index: usize) {
        let elsewhere: HashSet<String> = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .flat_map(|(_, tier)| tier.iter())
            .map(Url::to_string)
            .collect();

        let tier = &mut self.items[index];
        tier.items.retain(|url| !elsewhere.contains(url.as_str()));
        if tier.is_empty() {
            self.items.remove(index);
        }
    }
}

fn same_tiers<T: AsRef<str>, U: AsRef<[T]>>(tiers: &[UrlList], other: &[U]) -> bool {
    tiers.len() == other.len()
        && tiers.iter().zip(other).all(|(tier, urls)| {
            same_urls(
                tier.iter().map(Url::as_str),
                urls.as_ref().iter().map(AsRef::<str>::as_ref),
            )
        })
}

impl<T: AsRef<str>> PartialEq<[Vec<T>]> for ObservableList<TierKind> {
    fn eq(&self, other: &[Vec<T>]) -> bool {
        same_tiers::<T, _>(&self.items, other)
    }
}

impl<T: AsRef<str>> PartialEq<Vec<Vec<T>>> for ObservableList<TierKind> {
    fn eq(&self, other: &Vec<Vec<T>>) -> bool {
        same_tiers::<T, _>(&self.items, other)
    }
}

impl<T: AsRef<str>, const N: usize> PartialEq<[Vec<T>; N]> for ObservableList<TierKind> {
    fn eq(&self, other: &[Vec<T>; N]) -> bool {
        same_tiers::<T, _>(&self.items, other)
    }
}

impl<T: AsRef<str>, const M: usize> PartialEq<[[T; M]]> for ObservableList<TierKind> {
    fn eq(&self, other: &[[T; M]]) -> bool {
        same_tiers::<T, _>(&self.items, other)
    }
}

impl<T: AsRef<str>, const M: usize> PartialEq<Vec<[T; M]>> for ObservableList<TierKind> {
    fn eq(&self, other: &Vec<[T; M]>) -> bool {
        same_tiers::<T, _>(&self.items, other)
    }
}

impl<T: AsRef<str>, const M: usize, const N: usize> PartialEq<[[T; M]; N]>
    for ObservableList<TierKind>
{
    fn eq(&self, other: &[[T; M]; N]) -> bool {
        same_tiers::<T, _>(&self.items, other)
    }
}

/// Write access to one tier of a [`TierList`].
///
/// Reads go through `Deref<Target = UrlList>`. See
/// [`TierList::tier_mut`](ObservableList::tier_mut) for what happens on drop.
pub struct TierMut<'a> {
    tiers: &'a mut TierList,
    index: usize,
    changed: bool,
}

impl TierMut<'_> {
    fn tier(&mut self) -> &mut UrlList {
        &mut self.tiers.items[self.index]
    }

    fn grow(
        &mut self,
        f: impl FnOnce(&mut UrlList) -> Result<(), UrlError>,
    ) -> Result<(), UrlError> {
        let tier = self.tier();
        let before = tier.len();
        f(tier)?;
        let grew = tier.len() != before;
        self.changed |= grew;
        Ok(())
    }

    pub fn append(&mut self, url: impl Into<String>) -> Result<(), UrlError> {
        self.grow(|tier| tier.append(url))
    }

    pub fn extend<I>(&mut self, urls: I) -> Result<(), UrlError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.grow(|tier| tier.extend(urls))
    }

    pub fn insert(&mut self, index: usize, url: impl Into<String>) -> Result<(), UrlError> {
        self.grow(|tier| tier.insert(index, url))
    }

    pub fn set(&mut self, index: usize, url: impl Into<String>) -> Result<(), UrlError> {
        self.tier().set(index, url)?;
        self.changed = true;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Url {
        let url = self.tier().remove(index);
        self.changed = true;
        url
    }

    pub fn remove_url(&mut self, url: &str) -> bool {
        let removed = self.tier().remove_url(url);
        self.changed |= removed;
        removed
    }

    pub fn clear(&mut self) {
        self.tier().clear();
        self.changed = true;
    }

    pub fn replace<I>(&mut self, urls: I) -> Result<(), UrlError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.tier().replace(urls)?;
        self.changed = true;
        Ok(())
    }
}

impl Deref for TierMut<'_> {
    type Target = UrlList;

    fn deref(&self) -> &UrlList {
        &self.tiers.items[self.index]
    }
}

impl Drop for TierMut<'_> {
    fn drop(&mut self) {
        if self.changed {
            self.tiers.settle(self.index);
            self.tiers.notify();
        }
    }
}
