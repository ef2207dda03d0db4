/// Decode-time failures from the TLV primitives.
///
/// Every variant is a dead end for the enclosing struct decode: there is no
/// partial recovery, only abort-and-report (see the primitives' failure
/// semantics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Ran out of bytes while reading a VarNum, a length-prefixed value, or a
    /// fixed-width field.
    UnexpectedEnd,
    /// A TLV block's type word did not match what the caller expected.
    TypeMismatch { expected: u64, actual: u64 },
    /// A natural-number field's inner slice was not 1, 2, 4, or 8 bytes.
    InvalidNaturalWidth(usize),
    /// Byte string was declared UTF-8 but isn't.
    InvalidUtf8,
    /// Bytes remained after the outermost decode consumed its last field.
    TrailingBytes(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnexpectedEnd => write!(f, "unexpected end of buffer"),
            Error::TypeMismatch { expected, actual } => {
                write!(f, "expected TLV type {expected:#x}, found {actual:#x}")
            }
            Error::InvalidNaturalWidth(n) => {
                write!(f, "natural number field has invalid width {n}")
            }
            Error::InvalidUtf8 => write!(f, "byte string is not valid UTF-8"),
            Error::TrailingBytes(n) => write!(f, "{n} trailing byte(s) after outermost decode"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
