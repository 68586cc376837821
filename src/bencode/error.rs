use thiserror::Error;

/// Malformed bencode input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BencodeError {
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEof(usize),

    #[error("invalid integer at byte {0}")]
    InvalidInteger(usize),

    #[error("invalid string length at byte {0}")]
    InvalidLength(usize),

    #[error("unexpected byte {byte:#04x} at byte {pos}")]
    UnexpectedByte { byte: u8, pos: usize },

    #[error("dictionary key at byte {0} is not a byte string")]
    NonStringKey(usize),

    #[error("trailing data at byte {0}")]
    TrailingData(usize),

    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}
