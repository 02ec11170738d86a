//! Number value type for integers and floats.

use core::fmt::{self, Formatter};

#[derive(Copy, Clone, Debug, PartialEq)]
enum N {
    /// Non-negative integer
    PosInt(u64),
    /// Negative integer
    NegInt(i64),
    /// Floating point
    Float(f64),
}

/// A number value.
///
/// `VNumber` keeps integers exact (anything that fits `i64` or `u64`) and
/// stores everything else as `f64`. Non-negative integers are always stored
/// unsigned, so `VNumber::from_i64(3) == VNumber::from_u64(3)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VNumber(N);

impl VNumber {
    /// Creates a number from an i64.
    pub const fn from_i64(v: i64) -> Self {
        if v < 0 {
            Self(N::NegInt(v))
        } else {
            Self(N::PosInt(v as u64))
        }
    }

    /// Creates a number from a u64.
    pub const fn from_u64(v: u64) -> Self {
        Self(N::PosInt(v))
    }

    /// Creates a number from an f64.
    pub const fn from_f64(v: f64) -> Self {
        Self(N::Float(v))
    }

    /// Whether the number is stored as a float.
    pub const fn is_float(&self) -> bool {
        matches!(self.0, N::Float(_))
    }

    /// Whether the number is an integer (stored as one, not a float with no
    /// fractional part).
    pub const fn is_integer(&self) -> bool {
        !self.is_float()
    }

    /// Converts to i64 if the value is an integer that fits, or a float with
    /// no fractional part that fits.
    pub fn to_i64(&self) -> Option<i64> {
        match self.0 {
            N::PosInt(v) => i64::try_from(v).ok(),
            N::NegInt(v) => Some(v),
            N::Float(f) if f.fract() == 0.0 => exact_float_to_i128(f).and_then(|v| v.try_into().ok()),
            N::Float(_) => None,
        }
    }

    /// Converts to u64 if the value is a non-negative integer that fits, or a
    /// float with no fractional part that fits.
    pub fn to_u64(&self) -> Option<u64> {
        match self.0 {
            N::PosInt(v) => Some(v),
            N::NegInt(_) => None,
            N::Float(f) if f.fract() == 0.0 => exact_float_to_i128(f).and_then(|v| v.try_into().ok()),
            N::Float(_) => None,
        }
    }

    /// Converts to i128, truncating floats toward zero.
    ///
    /// Returns `None` for NaN, infinities, and floats beyond the i128 range.
    pub fn to_i128_truncated(&self) -> Option<i128> {
        match self.0 {
            N::PosInt(v) => Some(v as i128),
            N::NegInt(v) => Some(v as i128),
            N::Float(f) => exact_float_to_i128(f.trunc()),
        }
    }

    /// Converts to f64, possibly losing precision for large integers.
    pub fn to_f64_lossy(&self) -> f64 {
        match self.0 {
            N::PosInt(v) => v as f64,
            N::NegInt(v) => v as f64,
            N::Float(f) => f,
        }
    }

    /// Whether the number is zero.
    pub fn is_zero(&self) -> bool {
        match self.0 {
            N::PosInt(v) => v == 0,
            N::NegInt(_) => false,
            N::Float(f) => f == 0.0,
        }
    }
}

/// `f` must already have no fractional part.
fn exact_float_to_i128(f: f64) -> Option<i128> {
    // 2^127: the first float outside the i128 range
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
    if f.is_finite() && f >= -LIMIT && f < LIMIT {
        Some(f as i128)
    } else {
        None
    }
}

impl fmt::Display for VNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            N::PosInt(v) => write!(f, "{v}"),
            N::NegInt(v) => write!(f, "{v}"),
            N::Float(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for VNumber {
                fn from(v: $ty) -> Self {
                    Self::from_i64(v as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for VNumber {
                fn from(v: $ty) -> Self {
                    Self::from_u64(v as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for VNumber {
    fn from(v: f32) -> Self {
        Self::from_f64(v as f64)
    }
}

impl From<f64> for VNumber {
    fn from(v: f64) -> Self {
        Self::from_f64(v)
    }
}
