use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::ops::Range;

/// A node of the native tree.
///
/// This is the in-memory form of metainfo: text and numbers rather than byte
/// strings. [`encode`](super::encode) lowers it to the wire tree and
/// [`decode`](super::decode) lifts a wire tree back.
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
    Text(String),
    Int(i64),
    /// Truncated toward zero when encoded.
    Float(f64),
    /// Bytes that are not text, such as concatenated piece hashes.
    Bytes(Vec<u8>),
    List(Vec<Native>),
    Map(BTreeMap<String, Native>),
}

impl Native {
    /// Text taken from a value's `Display` output rather than its contents.
    ///
    /// This is how text-like wrapper types enter the tree: they are encoded
    /// through their string conversion.
    pub fn display(value: impl Display) -> Self {
        Native::Text(value.to_string())
    }

    /// Builds a map from key/value pairs; later duplicates win.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Native>,
    {
        Native::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Native::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Native::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Native]> {
        match self {
            Native::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Native> {
        match self {
            Native::Map(entries) => entries.get(key),
            _ => None,
        }
    }
}

impl From<&str> for Native {
    fn from(s: &str) -> Self {
        Native::Text(s.to_string())
    }
}

impl From<String> for Native {
    fn from(s: String) -> Self {
        Native::Text(s)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Native {
            fn from(i: $t) -> Self {
                Native::Int(i64::from(i))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_size {
    ($($t:ty),*) => {
        $(impl From<$t> for Native {
            /// Saturates at `i64::MAX`.
            fn from(n: $t) -> Self {
                Native::Int(i64::try_from(n).unwrap_or(i64::MAX))
            }
        })*
    };
}

impl_from_size!(u64, usize);

impl From<f64> for Native {
    fn from(f: f64) -> Self {
        Native::Float(f)
    }
}

impl From<bool> for Native {
    fn from(b: bool) -> Self {
        Native::Int(i64::from(b))
    }
}

impl<T: Into<Native>> From<Vec<T>> for Native {
    fn from(items: Vec<T>) -> Self {
        Native::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Native>, const N: usize> From<[T; N]> for Native {
    fn from(items: [T; N]) -> Self {
        Native::List(items.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Native>, B: Into<Native>> From<(A, B)> for Native {
    fn from((a, b): (A, B)) -> Self {
        Native::List(vec![a.into(), b.into()])
    }
}

impl<A: Into<Native>, B: Into<Native>, C: Into<Native>> From<(A, B, C)> for Native {
    fn from((a, b, c): (A, B, C)) -> Self {
        Native::List(vec![a.into(), b.into(), c.into()])
    }
}

impl From<Range<i64>> for Native {
    fn from(range: Range<i64>) -> Self {
        Native::List(range.map(Native::Int).collect())
    }
}

impl<K: Into<String>, V: Into<Native>> From<BTreeMap<K, V>> for Native {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Native::map(entries)
    }
}

impl<K: Into<String>, V: Into<Native>, S> From<HashMap<K, V, S>> for Native {
    fn from(entries: HashMap<K, V, S>) -> Self {
        Native::map(entries)
    }
}
