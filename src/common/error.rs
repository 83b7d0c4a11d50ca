use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QrError {
    EmptyValue,
    InvalidVersion(u8),
    ProvidedValueExceedsCapacity { len: usize, cap: usize },
    InvalidNumericEncoding,
    InvalidAlphanumericEncoding,
    InvalidUtf8Encoding,
    InvalidRemainingBits,
}

impl Display for QrError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match *self {
            Self::EmptyValue => f.write_str("Empty value"),
            Self::InvalidVersion(v) => write!(f, "Invalid version: {v}"),
            Self::ProvidedValueExceedsCapacity { len, cap } => {
                write!(f, "Value of length {len} exceeds capacity {cap}")
            }
            Self::InvalidNumericEncoding => f.write_str("Invalid numeric encoding"),
            Self::InvalidAlphanumericEncoding => f.write_str("Invalid alphanumeric encoding"),
            Self::InvalidUtf8Encoding => f.write_str("Invalid UTF8 encoding"),
            Self::InvalidRemainingBits => f.write_str("Bit stream not byte aligned after padding"),
        }
    }
}

impl std::error::Error for QrError {}

pub type QrResult<T> = Result<T, QrError>;
