use std::collections::BTreeMap;

use bytes::Bytes;

/// A node of the wire tree.
///
/// Scalars are integers or raw byte strings; containers are lists and
/// dictionaries keyed by byte strings. Dictionary keys are kept sorted,
/// which is also the order bencode requires on the wire.
///
/// ```
/// use tormeta::bencode::Value;
///
/// let tier: Value = ["http://a:1", "http://b:2"].into_iter().map(Value::string).collect();
/// let root = Value::dict([("announce-list", Value::List(vec![tier]))]);
///
/// let tiers = root.get("announce-list").and_then(Value::items).unwrap();
/// assert_eq!(tiers[0].items().unwrap()[1].text(), Some("http://b:2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    /// Not necessarily UTF-8.
    Bytes(Bytes),
    List(Vec<Value>),
    Dict(BTreeMap<Bytes, Value>),
}

impl Value {
    /// The UTF-8 encoding of `s` as a byte string.
    pub fn string(s: &str) -> Self {
        Self::bytes(s)
    }

    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Value::Bytes(Bytes::copy_from_slice(b.as_ref()))
    }

    /// A dictionary with text keys. Later duplicates win.
    pub fn dict<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        Value::Dict(
            entries
                .into_iter()
                .map(|(key, value)| (Bytes::copy_from_slice(key.as_bytes()), value))
                .collect(),
        )
    }

    pub fn integer(&self) -> Option<i64> {
        match *self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn byte_string(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// The byte string as text, if it is valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(self.byte_string()?).ok()
    }

    pub fn items(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn entries(&self) -> Option<&BTreeMap<Bytes, Value>> {
        match self {
            Value::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    /// Dictionary lookup; `None` for missing keys and non-dictionaries.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        self.entries()?.get(key.as_ref())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}
