use std::fmt;
use std::ops::{Add, Deref};
use std::slice;

/// Change notification attached to one list instance.
pub type Callback<K> = Box<dyn FnMut(&ObservableList<K>)>;

/// Per-type policy of an [`ObservableList`].
///
/// A kind decides what an input turns into, which incoming items survive
/// deduplication, how two lists are concatenated and when two lists are
/// equal. The list itself only sequences those steps and fires the callback.
pub trait ListKind: Sized {
    /// What the list stores.
    type Item: Clone + fmt::Debug;
    /// What mutators accept.
    type Input;
    /// Raised when an input fails validation.
    type Error: std::error::Error;

    /// Validates one input and converts it into zero or more items.
    fn expand(input: Self::Input) -> Result<Vec<Self::Item>, Self::Error>;

    /// Drops incoming items that duplicate `existing` or an earlier incoming
    /// item. Existing entries always win.
    fn admit(existing: &[&Self::Item], incoming: Vec<Self::Item>) -> Vec<Self::Item>;

    /// The items of `lhs + rhs`.
    fn concat(lhs: &[Self::Item], rhs: Vec<Self::Item>) -> Vec<Self::Item> {
        let existing: Vec<&Self::Item> = lhs.iter().collect();
        let added = Self::admit(&existing, rhs);
        let mut items = lhs.to_vec();
        items.extend(added);
        items
    }

    fn list_eq(a: &[Self::Item], b: &[Self::Item]) -> bool;
}

/// A deduplicating list that validates its input and reports changes.
///
/// Every mutator validates the whole input before touching the list, so a
/// failed call leaves the list as it was and fires nothing. Successful
/// mutations invoke the callback once, after the change, with the list
/// itself. Index arguments out of range panic the way `Vec` does.
///
/// Reading goes through `Deref<Target = [K::Item]>`.
pub struct ObservableList<K: ListKind> {
    pub(super) items: Vec<K::Item>,
    callback: Option<Callback<K>>,
}

impl<K: ListKind> ObservableList<K> {
    /// Builds a list from `inputs`. Duplicates are dropped silently.
    ///
    /// `inputs` is always a sequence; a lone `&str` is not split into
    /// characters but rejected at compile time. Use [`single`](Self::single)
    /// for one item.
    pub fn new<I>(inputs: I) -> Result<Self, K::Error>
    where
        I: IntoIterator,
        I::Item: Into<K::Input>,
    {
        let items = Self::expand_all(inputs)?;
        Ok(Self::from_items(K::admit(&[], items)))
    }

    /// Builds a list from one input, expanded the way
    /// [`append`](Self::append) expands it.
    ///
    /// ```
    /// use tormeta::{TierList, UrlList};
    ///
    /// let urls = UrlList::single("http://foo:123").unwrap();
    /// assert_eq!(urls, ["http://foo:123"]);
    ///
    /// let tiers = TierList::single(["http://a", "http://b"]).unwrap();
    /// assert_eq!(tiers, [["http://a", "http://b"]]);
    /// ```
    pub fn single(input: impl Into<K::Input>) -> Result<Self, K::Error> {
        let items = K::expand(input.into())?;
        Ok(Self::from_items(K::admit(&[], items)))
    }

    /// Builds a list that calls `callback` after every change.
    ///
    /// Construction itself does not invoke the callback.
    pub fn with_callback<I, F>(inputs: I, callback: F) -> Result<Self, K::Error>
    where
        I: IntoIterator,
        I::Item: Into<K::Input>,
        F: FnMut(&ObservableList<K>) + 'static,
    {
        let mut list = Self::new(inputs)?;
        list.callback = Some(Box::new(callback));
        Ok(list)
    }

    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&ObservableList<K>) + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Items that are already validated and deduplicated.
    pub(super) fn from_items(items: Vec<K::Item>) -> Self {
        Self {
            items,
            callback: None,
        }
    }

    fn expand_all<I>(inputs: I) -> Result<Vec<K::Item>, K::Error>
    where
        I: IntoIterator,
        I::Item: Into<K::Input>,
    {
        let mut items = Vec::new();
        for input in inputs {
            items.extend(K::expand(input.into())?);
        }
        Ok(items)
    }

    pub fn append(&mut self, input: impl Into<K::Input>) -> Result<(), K::Error> {
        let incoming = K::expand(input.into())?;
        self.splice_in(self.items.len(), incoming);
        Ok(())
    }

    pub fn extend<I>(&mut self, inputs: I) -> Result<(), K::Error>
    where
        I: IntoIterator,
        I::Item: Into<K::Input>,
    {
        let incoming = Self::expand_all(inputs)?;
        self.splice_in(self.items.len(), incoming);
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, input: impl Into<K::Input>) -> Result<(), K::Error> {
        let len = self.items.len();
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        let incoming = K::expand(input.into())?;
        self.splice_in(index, incoming);
        Ok(())
    }

    /// Replaces the item at `index` with whatever `input` expands to.
    ///
    /// Items the input shares with the rest of the list are dropped from the
    /// replacement, which may leave nothing in the slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, input: impl Into<K::Input>) -> Result<(), K::Error> {
        let len = self.items.len();
        assert!(
            index < len,
            "index out of bounds: the len is {len} but the index is {index}"
        );
        let incoming = K::expand(input.into())?;
        let others: Vec<&K::Item> = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item)
            .collect();
        let admitted = K::admit(&others, incoming);
        self.items.splice(index..=index, admitted);
        self.notify();
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> K::Item {
        let item = self.items.remove(index);
        self.notify();
        item
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.notify();
    }

    /// Swaps the whole content for `inputs`, built as [`new`](Self::new)
    /// would build it.
    pub fn replace<I>(&mut self, inputs: I) -> Result<(), K::Error>
    where
        I: IntoIterator,
        I::Item: Into<K::Input>,
    {
        let incoming = Self::expand_all(inputs)?;
        self.items = K::admit(&[], incoming);
        self.notify();
        Ok(())
    }

    /// Removes the first item matching `pred`. Returns whether one was found.
    pub(super) fn remove_first(&mut self, pred: impl FnMut(&K::Item) -> bool) -> bool {
        match self.items.iter().position(pred) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    fn splice_in(&mut self, index: usize, incoming: Vec<K::Item>) {
        let existing: Vec<&K::Item> = self.items.iter().collect();
        let admitted = K::admit(&existing, incoming);
        if admitted.is_empty() {
            return;
        }
        self.items.splice(index..index, admitted);
        self.notify();
    }

    pub(super) fn notify(&mut self) {
        if let Some(mut callback) = self.callback.take() {
            callback(self);
            self.callback = Some(callback);
        }
    }
}

impl<K: ListKind> Default for ObservableList<K> {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}

/// The copy has no callback.
impl<K: ListKind> Clone for ObservableList<K> {
    fn clone(&self) -> Self {
        Self::from_items(self.items.clone())
    }
}

impl<K: ListKind> Deref for ObservableList<K> {
    type Target = [K::Item];

    fn deref(&self) -> &[K::Item] {
        &self.items
    }
}

impl<'a, K: ListKind> IntoIterator for &'a ObservableList<K> {
    type Item = &'a K::Item;
    type IntoIter = slice::Iter<'a, K::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K: ListKind> fmt::Debug for ObservableList<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<K: ListKind> PartialEq for ObservableList<K> {
    fn eq(&self, other: &Self) -> bool {
        K::list_eq(&self.items, &other.items)
    }
}

/// `&list + inputs` builds a new list without a callback.
///
/// The right side is a sequence. One item is written `Some(item)` or
/// `[item]`:
///
/// ```
/// use tormeta::UrlList;
///
/// let urls = UrlList::single("http://foo:123").unwrap();
/// let sum = (&urls + Some("http://bar:456")).unwrap();
/// assert_eq!(sum, ["http://foo:123", "http://bar:456"]);
/// ```
impl<K, I> Add<I> for &ObservableList<K>
where
    K: ListKind,
    I: IntoIterator,
    I::Item: Into<K::Input>,
{
    type Output = Result<ObservableList<K>, K::Error>;

    fn add(self, rhs: I) -> Self::Output {
        let rhs = ObservableList::<K>::expand_all(rhs)?;
        Ok(ObservableList::from_items(K::concat(&self.items, rhs)))
    }
}
