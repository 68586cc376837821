use bytes::Bytes;
use std::collections::BTreeMap;

use super::error::BencodeError;
use super::value::Value;

/// Containers nested deeper than this are rejected.
pub const MAX_DEPTH: usize = 64;

/// Parses exactly one bencoded value from `input`.
///
/// # Errors
///
/// Rejects truncated input, integers with leading zeros or `-0`, non-string
/// dictionary keys, nesting beyond [`MAX_DEPTH`] and bytes after the value.
pub fn decode(input: &[u8]) -> Result<Value, BencodeError> {
    let mut decoder = Decoder { input, pos: 0 };
    let value = decoder.value(0)?;
    if decoder.pos != input.len() {
        return Err(BencodeError::TrailingData(decoder.pos));
    }
    Ok(value)
}

struct Decoder<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    fn peek(&self) -> Result<u8, BencodeError> {
        self.input
            .get(self.pos)
            .copied()
            .ok_or(BencodeError::UnexpectedEof(self.pos))
    }

    /// Consumes bytes up to (not including) `delim` and then the delimiter.
    fn until(&mut self, delim: u8) -> Result<&'a [u8], BencodeError> {
        let input = self.input;
        let start = self.pos;
        let len = input[start..]
            .iter()
            .position(|&b| b == delim)
            .ok_or(BencodeError::UnexpectedEof(input.len()))?;
        self.pos = start + len + 1;
        Ok(&input[start..start + len])
    }

    fn value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        if depth > MAX_DEPTH {
            return Err(BencodeError::NestingTooDeep(MAX_DEPTH));
        }

        match self.peek()? {
            b'i' => self.integer(),
            b'0'..=b'9' => self.bytes().map(Value::Bytes),
            b'l' => {
                self.pos += 1;
                let mut items = Vec::new();
                while self.peek()? != b'e' {
                    items.push(self.value(depth + 1)?);
                }
                self.pos += 1;
                Ok(Value::List(items))
            }
            b'd' => {
                self.pos += 1;
                let mut entries = BTreeMap::new();
                while self.peek()? != b'e' {
                    if !self.peek()?.is_ascii_digit() {
                        return Err(BencodeError::NonStringKey(self.pos));
                    }
                    let key = self.bytes()?;
                    let item = self.value(depth + 1)?;
                    entries.insert(key, item);
                }
                self.pos += 1;
                Ok(Value::Dict(entries))
            }
            byte => Err(BencodeError::UnexpectedByte {
                byte,
                pos: self.pos,
            }),
        }
    }

    fn integer(&mut self) -> Result<Value, BencodeError> {
        let start = self.pos;
        self.pos += 1;
        let digits = self.until(b'e')?;

        let unsigned = digits.strip_prefix(b"-").unwrap_or(digits);
        let canonical = match unsigned {
            [] => false,
            [b'0'] => digits.len() == 1,
            [first, ..] => *first != b'0' && unsigned.iter().all(u8::is_ascii_digit),
        };
        if !canonical {
            return Err(BencodeError::InvalidInteger(start));
        }

        std::str::from_utf8(digits)
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Value::Integer)
            .ok_or(BencodeError::InvalidInteger(start))
    }

    fn bytes(&mut self) -> Result<Bytes, BencodeError> {
        let start = self.pos;
        let len = self.until(b':')?;
        let len: usize = std::str::from_utf8(len)
            .ok()
            .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse().ok())
            .ok_or(BencodeError::InvalidLength(start))?;

        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.input.len())
            .ok_or(BencodeError::UnexpectedEof(self.input.len()))?;
        let bytes = Bytes::copy_from_slice(&self.input[self.pos..end]);
        self.pos = end;
        Ok(bytes)
    }
}
