//! Text to value conversion used by the storing actions.
//!
//! Numbers go through one of three strategies picked by [`NumericKind`]:
//! signed integers, unsigned integers and floats, each checked against the
//! width of the target type. Malformed text, overflow and underflow come
//! back as distinct [`ConversionError`] variants.

use std::ffi::OsString;
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::path::PathBuf;

/// Numeric target of a conversion, tagged with its width in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Signed(u32),
    Unsigned(u32),
    Float(u32),
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NumericKind::Signed(bits) => write!(f, "i{}", bits),
            NumericKind::Unsigned(bits) => write!(f, "u{}", bits),
            NumericKind::Float(bits) => write!(f, "f{}", bits),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A value-taking action was invoked without a value.
    #[error("missing value")]
    Missing,

    #[error("invalid {kind} value '{value}'")]
    Invalid { kind: NumericKind, value: String },

    #[error("'{value}' is too large for {kind}")]
    Overflow { kind: NumericKind, value: String },

    #[error("'{value}' is too small for {kind}")]
    Underflow { kind: NumericKind, value: String },

    /// Raised by caller supplied conversions.
    #[error("{reason}: '{value}'")]
    Rejected { value: String, reason: String },
}

impl ConversionError {
    pub fn rejected(value: &str, reason: impl Into<String>) -> Self {
        ConversionError::Rejected {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// The text that failed to convert.
    pub fn value(&self) -> Option<&str> {
        match self {
            ConversionError::Missing => None,
            ConversionError::Invalid { value, .. }
            | ConversionError::Overflow { value, .. }
            | ConversionError::Underflow { value, .. }
            | ConversionError::Rejected { value, .. } => Some(value),
        }
    }

    fn invalid(kind: NumericKind, value: &str) -> Self {
        ConversionError::Invalid {
            kind,
            value: value.to_string(),
        }
    }

    fn overflow(kind: NumericKind, value: &str) -> Self {
        ConversionError::Overflow {
            kind,
            value: value.to_string(),
        }
    }

    fn underflow(kind: NumericKind, value: &str) -> Self {
        ConversionError::Underflow {
            kind,
            value: value.to_string(),
        }
    }
}

/// Integer widths the strategies can check against.
const INT_WIDTHS: std::ops::RangeInclusive<u32> = 1..=64;

/// Parses a decimal signed integer that must fit in `bits` bits.
///
/// Widths outside 1..=64 reject every value as invalid.
pub fn parse_signed(value: &str, bits: u32) -> Result<i64, ConversionError> {
    let kind = NumericKind::Signed(bits);
    if !INT_WIDTHS.contains(&bits) {
        return Err(ConversionError::invalid(kind, value));
    }
    let n: i64 = value.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => ConversionError::overflow(kind, value),
        IntErrorKind::NegOverflow => ConversionError::underflow(kind, value),
        _ => ConversionError::invalid(kind, value),
    })?;

    let n = i128::from(n);
    if n > (1i128 << (bits - 1)) - 1 {
        return Err(ConversionError::overflow(kind, value));
    }
    if n < -(1i128 << (bits - 1)) {
        return Err(ConversionError::underflow(kind, value));
    }
    Ok(n as i64)
}

/// Parses a decimal unsigned integer that must fit in `bits` bits.
///
/// Negative numbers are an underflow rather than malformed text. Widths
/// outside 1..=64 reject every value as invalid.
pub fn parse_unsigned(value: &str, bits: u32) -> Result<u64, ConversionError> {
    let kind = NumericKind::Unsigned(bits);
    if !INT_WIDTHS.contains(&bits) {
        return Err(ConversionError::invalid(kind, value));
    }
    if let Some(digits) = value.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if digits.bytes().all(|b| b == b'0') {
                return Ok(0);
            }
            return Err(ConversionError::underflow(kind, value));
        }
    }

    let n: u64 = value.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => ConversionError::overflow(kind, value),
        _ => ConversionError::invalid(kind, value),
    })?;

    if u128::from(n) > (1u128 << bits) - 1 {
        return Err(ConversionError::overflow(kind, value));
    }
    Ok(n)
}

/// Parses a float of `bits` width (32 or 64).
///
/// Finite text that rounds to infinity overflows; text with a non-zero
/// mantissa that rounds to zero underflows. `inf` and `nan` spelled out are
/// accepted as is.
pub fn parse_float(value: &str, bits: u32) -> Result<f64, ConversionError> {
    let kind = NumericKind::Float(bits);
    let n = if bits == 32 {
        value.parse::<f32>().map(f64::from)
    } else {
        value.parse::<f64>()
    }
    .map_err(|_| ConversionError::invalid(kind, value))?;

    if !n.is_finite() && !is_non_finite_literal(value) {
        return Err(ConversionError::overflow(kind, value));
    }
    if n == 0.0 && has_nonzero_mantissa(value) {
        return Err(ConversionError::underflow(kind, value));
    }
    Ok(n)
}

fn is_non_finite_literal(value: &str) -> bool {
    let unsigned = value.trim_start_matches(['+', '-']).to_ascii_lowercase();
    matches!(unsigned.as_str(), "inf" | "infinity" | "nan")
}

fn has_nonzero_mantissa(value: &str) -> bool {
    value
        .split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')))
}

/// Types a storing action can produce from argument text.
pub trait FromArg: Sized {
    fn from_arg(value: &str) -> Result<Self, ConversionError>;
}

macro_rules! signed_from_arg {
    ($($t:ty),*) => {$(
        impl FromArg for $t {
            fn from_arg(value: &str) -> Result<Self, ConversionError> {
                parse_signed(value, <$t>::BITS).map(|n| n as $t)
            }
        }
    )*};
}

macro_rules! unsigned_from_arg {
    ($($t:ty),*) => {$(
        impl FromArg for $t {
            fn from_arg(value: &str) -> Result<Self, ConversionError> {
                parse_unsigned(value, <$t>::BITS).map(|n| n as $t)
            }
        }
    )*};
}

signed_from_arg!(i8, i16, i32, i64, isize);
unsigned_from_arg!(u8, u16, u32, u64, usize);

impl FromArg for f32 {
    fn from_arg(value: &str) -> Result<Self, ConversionError> {
        parse_float(value, 32).map(|n| n as f32)
    }
}

impl FromArg for f64 {
    fn from_arg(value: &str) -> Result<Self, ConversionError> {
        parse_float(value, 64)
    }
}

impl FromArg for String {
    fn from_arg(value: &str) -> Result<Self, ConversionError> {
        Ok(value.to_string())
    }
}

impl FromArg for PathBuf {
    fn from_arg(value: &str) -> Result<Self, ConversionError> {
        Ok(PathBuf::from(value))
    }
}

impl FromArg for OsString {
    fn from_arg(value: &str) -> Result<Self, ConversionError> {
        Ok(OsString::from(value))
    }
}

impl<T: FromArg> FromArg for Option<T> {
    fn from_arg(value: &str) -> Result<Self, ConversionError> {
        T::from_arg(value).map(Some)
    }
}
