//! Errors reported while decoding and encoding.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use mapshape_core::{Def, Shape, WrongType};
use mapshape_value::ValueType;

use crate::Path;

/// What went wrong at one location.
#[derive(Clone, Debug, PartialEq)]
pub enum DecodeErrorKind {
    /// A scalar slot was offered a value it has no conversion from.
    TypeMismatch {
        /// The slot's shape
        expected: &'static Shape,
        /// What the input held
        got: ValueType,
    },

    /// A container slot was offered a value of the wrong structure, such as
    /// an array for a struct.
    ShapeMismatch {
        /// The slot's shape
        expected: &'static Shape,
        /// What the input held
        got: ValueType,
    },

    /// A number does not fit the target type.
    NumberOutOfRange {
        /// The number as it appeared in the input
        number: String,
        /// The slot's shape
        target: &'static Shape,
    },

    /// A string could not be parsed as the target type. Only reported with
    /// weakly typed input.
    InvalidString {
        /// The rejected string
        value: String,
        /// The slot's shape
        target: &'static Shape,
    },

    /// An input key matched no field.
    UnusedKey {
        /// The key
        key: String,
        /// The closest field name, if one is close enough
        suggestion: Option<&'static str>,
    },

    /// A declared field had no input key.
    UnsetField {
        /// The field
        field: &'static str,
    },

    /// A shape's vtable was handed a value of another type.
    WrongType(WrongType),
}

impl From<WrongType> for DecodeErrorKind {
    fn from(err: WrongType) -> Self {
        DecodeErrorKind::WrongType(err)
    }
}

fn expected_structure(shape: &Shape) -> &'static str {
    match shape.def {
        Def::Struct(_) | Def::Map(_) => "an object",
        Def::List(_) => "an array",
        Def::Scalar(_) => "a scalar",
        Def::Pointer(_) | Def::Dynamic => "a value",
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::TypeMismatch { expected, got } => {
                write!(f, "expected `{expected}`, got {got}")
            }
            DecodeErrorKind::ShapeMismatch { expected, got } => write!(
                f,
                "expected {} for `{expected}`, got {got}",
                expected_structure(expected)
            ),
            DecodeErrorKind::NumberOutOfRange { number, target } => {
                write!(f, "{number} is out of range for `{target}`")
            }
            DecodeErrorKind::InvalidString { value, target } => {
                write!(f, "cannot parse {value:?} as `{target}`")
            }
            DecodeErrorKind::UnusedKey { key, suggestion } => {
                write!(f, "unused key `{key}`")?;
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean `{suggestion}`?)")?;
                }
                Ok(())
            }
            DecodeErrorKind::UnsetField { field } => write!(f, "field `{field}` was not set"),
            DecodeErrorKind::WrongType(err) => write!(f, "{err}"),
        }
    }
}

/// A single failure, tagged with where in the input it happened.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeError {
    /// Where the failure happened
    pub path: Path,
    /// What went wrong
    pub kind: DecodeErrorKind,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

impl core::error::Error for DecodeError {}

/// Every error from one decode call, in the order they were found.
///
/// Never empty: a call without errors returns `Ok` instead.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeErrors {
    errors: Vec<DecodeError>,
}

impl DecodeErrors {
    pub(crate) fn new(errors: Vec<DecodeError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// The errors, in traversal order.
    pub fn errors(&self) -> &[DecodeError] {
        &self.errors
    }

    /// How many errors there are.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over the errors.
    pub fn iter(&self) -> core::slice::Iter<'_, DecodeError> {
        self.errors.iter()
    }

    /// Takes the error list.
    pub fn into_errors(self) -> Vec<DecodeError> {
        self.errors
    }
}

impl IntoIterator for DecodeErrors {
    type Item = DecodeError;
    type IntoIter = alloc::vec::IntoIter<DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodeErrors {
    type Item = &'a DecodeError;
    type IntoIter = core::slice::Iter<'a, DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for DecodeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        write!(
            f,
            "{count} {} decoding:",
            if count == 1 { "error" } else { "errors" }
        )?;
        for error in &self.errors {
            write!(f, "\n* {error}")?;
        }
        Ok(())
    }
}

impl core::error::Error for DecodeErrors {}

/// What went wrong while turning a typed value back into a [`Value`](crate::Value).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodeErrorKind {
    /// An integer beyond what a `Value` number holds (`u128`/`i128` beyond
    /// 64 bits).
    NumberOutOfRange {
        /// The number
        number: String,
    },

    /// A shape's vtable was handed a value of another type.
    WrongType(WrongType),
}

impl From<WrongType> for EncodeErrorKind {
    fn from(err: WrongType) -> Self {
        EncodeErrorKind::WrongType(err)
    }
}

impl fmt::Display for EncodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeErrorKind::NumberOutOfRange { number } => {
                write!(f, "{number} does not fit in a 64-bit number")
            }
            EncodeErrorKind::WrongType(err) => write!(f, "{err}"),
        }
    }
}

/// An encode failure and the path of the value that caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeError {
    /// Where the failure happened
    pub path: Path,
    /// What went wrong
    pub kind: EncodeErrorKind,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

impl core::error::Error for EncodeError {}
