use alloc::string::{String, ToString};
use core::any::Any;

use mapshape_core::{ScalarType, Shape, WrongType, downcast_mut};
use mapshape_value::Value;

use super::{DecodeContext, Outcome};
use crate::DecodeErrorKind;

/// Assigns one scalar. On failure the slot keeps its previous value.
pub(super) fn decode_scalar(
    cx: &mut DecodeContext<'_>,
    input: &Value,
    shape: &'static Shape,
    scalar: ScalarType,
    slot: &mut dyn Any,
) -> Outcome {
    let weak = cx.config().weakly_typed_input;
    match assign(input, shape, scalar, weak, slot) {
        Ok(()) => {
            cx.assigned();
            Outcome::Written
        }
        Err(kind) => cx.reject(kind),
    }
}

fn store<T: Any>(slot: &mut dyn Any, value: T) -> Result<(), WrongType> {
    *downcast_mut::<T>(slot)? = value;
    Ok(())
}

fn assign(
    input: &Value,
    shape: &'static Shape,
    scalar: ScalarType,
    weak: bool,
    slot: &mut dyn Any,
) -> Result<(), DecodeErrorKind> {
    let mismatch = || DecodeErrorKind::TypeMismatch {
        expected: shape,
        got: input.value_type(),
    };

    macro_rules! store_int {
        ($ty:ty) => {{
            let n = integer(input, shape, weak)?.ok_or_else(mismatch)?;
            let v = <$ty>::try_from(n).map_err(|_| DecodeErrorKind::NumberOutOfRange {
                number: rendered_number(input),
                target: shape,
            })?;
            store::<$ty>(slot, v)?;
        }};
    }

    macro_rules! store_float {
        ($ty:ty) => {{
            let f = float(input, shape, weak)?.ok_or_else(mismatch)?;
            store::<$ty>(slot, f as $ty)?;
        }};
    }

    match scalar {
        ScalarType::Bool => {
            let b = boolean(input, shape, weak)?.ok_or_else(mismatch)?;
            store::<bool>(slot, b)?;
        }
        ScalarType::String => {
            let s = string(input, weak).ok_or_else(mismatch)?;
            store::<String>(slot, s)?;
        }
        ScalarType::Char => {
            let c = input.as_str().and_then(single_char).ok_or_else(mismatch)?;
            store::<char>(slot, c)?;
        }
        ScalarType::U8 => store_int!(u8),
        ScalarType::U16 => store_int!(u16),
        ScalarType::U32 => store_int!(u32),
        ScalarType::U64 => store_int!(u64),
        ScalarType::U128 => store_int!(u128),
        ScalarType::USize => store_int!(usize),
        ScalarType::I8 => store_int!(i8),
        ScalarType::I16 => store_int!(i16),
        ScalarType::I32 => store_int!(i32),
        ScalarType::I64 => store_int!(i64),
        ScalarType::I128 => store_int!(i128),
        ScalarType::ISize => store_int!(isize),
        ScalarType::F32 => store_float!(f32),
        ScalarType::F64 => store_float!(f64),
        _ => return Err(mismatch()),
    }
    Ok(())
}

fn rendered_number(input: &Value) -> String {
    match input {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// `Ok(None)` means no conversion exists from this input kind.
fn integer(input: &Value, shape: &'static Shape, weak: bool) -> Result<Option<i128>, DecodeErrorKind> {
    match input {
        Value::Number(n) => n
            .to_i128_truncated()
            .map(Some)
            .ok_or_else(|| DecodeErrorKind::NumberOutOfRange {
                number: n.to_string(),
                target: shape,
            }),
        Value::Bool(b) if weak => Ok(Some(i128::from(*b))),
        Value::String(s) if weak => {
            if s.is_empty() {
                return Ok(Some(0));
            }
            s.parse::<i128>()
                .map(Some)
                .map_err(|_| DecodeErrorKind::InvalidString {
                    value: s.clone(),
                    target: shape,
                })
        }
        _ => Ok(None),
    }
}

fn float(input: &Value, shape: &'static Shape, weak: bool) -> Result<Option<f64>, DecodeErrorKind> {
    match input {
        Value::Number(n) => Ok(Some(n.to_f64_lossy())),
        Value::Bool(b) if weak => Ok(Some(if *b { 1.0 } else { 0.0 })),
        Value::String(s) if weak => {
            if s.is_empty() {
                return Ok(Some(0.0));
            }
            s.parse::<f64>()
                .map(Some)
                .map_err(|_| DecodeErrorKind::InvalidString {
                    value: s.clone(),
                    target: shape,
                })
        }
        _ => Ok(None),
    }
}

fn boolean(input: &Value, shape: &'static Shape, weak: bool) -> Result<Option<bool>, DecodeErrorKind> {
    match input {
        Value::Bool(b) => Ok(Some(*b)),
        Value::Number(n) if weak => Ok(Some(!n.is_zero())),
        Value::String(s) if weak => match s.as_str() {
            "" => Ok(Some(false)),
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(Some(true)),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(Some(false)),
            _ => Err(DecodeErrorKind::InvalidString {
                value: s.clone(),
                target: shape,
            }),
        },
        _ => Ok(None),
    }
}

fn string(input: &Value, weak: bool) -> Option<String> {
    match input {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) if weak => Some(if *b { "1" } else { "0" }.into()),
        _ => None,
    }
}
