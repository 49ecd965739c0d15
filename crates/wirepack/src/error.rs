//! # Error Definitions
//!
//! Every failure the codec can report, from truncated buffers to JSON
//! coercion problems. Field context is attached on the way out of a record
//! through [`Error::at`], so a failure deep inside a nested record reads as a
//! dotted path (`body.timeout_height: ...`).

use crate::wire::WireType;

/// Wirepack serialization and deserialization errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Buffer exhausted while reading.
    UnexpectedEnd,
    /// A varint ran past ten bytes.
    VarintOverflow,
    /// The low three bits of a tag do not name a wire type.
    InvalidWireType(u8),
    /// Field number zero, or one above `u32::MAX >> 3`.
    InvalidFieldNumber(u64),
    /// A known field arrived with a wire type its kind cannot read.
    WireTypeMismatch { expected: WireType, actual: WireType },
    /// String data is not valid UTF-8.
    InvalidUtf8,
    /// A 64-bit value would not survive a round trip through an IEEE double.
    IntegerOutOfRange(i128),
    /// Closing a nested scope when none is open.
    ScopeUnderflow,
    /// Attempted to finalize the buffer with open nested scopes.
    ScopeStillOpen,
    /// An end-group tag without a matching start, or a group left open.
    UnbalancedGroup,
    /// The nesting depth of the record exceeded `MAX_RECURSION_DEPTH`.
    RecursionLimitExceeded,
    /// A JSON value could not be turned into the field's type.
    Json(String),
    /// `Any::unpack` was asked for a type the payload does not carry.
    TypeUrlMismatch { expected: String, actual: String },
    /// An error raised while reading the named field.
    Field { path: String, source: Box<Error> },
}

impl Error {
    /// Prefixes the error with the field it was raised in.
    pub fn at(self, field: &str) -> Self {
        let field = field.trim_start_matches("r#");
        match self {
            Error::Field { path, source } => Error::Field { path: format!("{}.{}", field, path), source },
            other => Error::Field { path: field.to_string(), source: Box::new(other) },
        }
    }

    /// Strips any field context and returns the underlying failure.
    pub fn root(&self) -> &Error {
        match self {
            Error::Field { source, .. } => source.root(),
            other => other,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnexpectedEnd => write!(f, "Unexpected end of buffer"),
            Error::VarintOverflow => write!(f, "Varint exceeds 10 bytes"),
            Error::InvalidWireType(b) => write!(f, "Invalid wire type: {}", b),
            Error::InvalidFieldNumber(n) => write!(f, "Invalid field number: {}", n),
            Error::WireTypeMismatch { expected, actual } => {
                write!(f, "Wire type mismatch: expected {:?}, found {:?}", expected, actual)
            }
            Error::IntegerOutOfRange(v) => {
                write!(f, "Value {} is outside the safe integer range (+/- 2^53 - 1)", v)
            }
            Error::Json(reason) => write!(f, "JSON error: {}", reason),
            Error::TypeUrlMismatch { expected, actual } => {
                write!(f, "Type URL mismatch: expected {}, found {}", expected, actual)
            }
            Error::Field { path, source } => write!(f, "{}: {}", path, source),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl std::error::Error for Error {}

/// Specialized `Result` for Wirepack operations.
pub type Result<T> = std::result::Result<T, Error>;
