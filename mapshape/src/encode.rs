//! Turning typed values back into [`Value`] trees.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::any::Any;

use mapshape_core::{Def, ScalarType, Shape, Shaped, WrongType, downcast_ref};
use mapshape_value::{VNumber, VObject, Value};

use crate::{EncodeError, EncodeErrorKind, Path, PathSegment};

/// Encodes `value` as a [`Value`], following its shape.
///
/// Empty pointers become null and structs become objects keyed by field
/// name, so decoding the result into a fresh `T` reproduces `value`.
///
/// ```
/// use mapshape::{Shaped, to_value, value};
///
/// #[derive(Default, Shaped)]
/// struct Point {
///     x: i32,
///     label: Option<String>,
/// }
///
/// let encoded = to_value(&Point { x: 3, label: None }).unwrap();
/// assert_eq!(encoded, value!({ "x": 3, "label": null }));
/// ```
pub fn to_value<T: Shaped>(value: &T) -> Result<Value, EncodeError> {
    let mut path = Path::root();
    match encode(value, T::SHAPE, &mut path) {
        Ok(encoded) => Ok(encoded),
        Err(kind) => Err(EncodeError { path, kind }),
    }
}

/// On error, `path` is left pointing at the failing value.
fn encode(value: &dyn Any, shape: &'static Shape, path: &mut Path) -> Result<Value, EncodeErrorKind> {
    let encoded = match shape.def {
        Def::Scalar(scalar) => encode_scalar(value, scalar)?,
        Def::Pointer(def) => match (def.vtable.borrow)(value)? {
            Some(pointee) => encode(pointee, def.pointee(), path)?,
            None => Value::Null,
        },
        Def::Struct(def) => {
            let mut object = VObject::with_capacity(def.fields.len());
            for field in def.fields {
                path.push(PathSegment::Field(Cow::Borrowed(field.name)));
                let encoded = encode((field.get)(value)?, field.shape(), path)?;
                path.pop();
                object.insert(field.name.to_string(), encoded);
            }
            Value::Object(object)
        }
        Def::List(def) => {
            let len = (def.vtable.len)(value)?;
            let mut items = Vec::with_capacity(len);
            for index in 0..len {
                path.push(PathSegment::Index(index));
                if let Some(item) = (def.vtable.item)(value, index)? {
                    items.push(encode(item, def.item(), path)?);
                }
                path.pop();
            }
            Value::Array(items)
        }
        Def::Map(def) => {
            let entries = (def.vtable.entries)(value)?;
            let mut object = VObject::with_capacity(entries.len());
            for (key, entry) in entries {
                path.push(PathSegment::Key(key.to_string()));
                let encoded = encode(entry, def.value(), path)?;
                path.pop();
                object.insert(key.to_string(), encoded);
            }
            Value::Object(object)
        }
        Def::Dynamic => downcast_ref::<Value>(value)?.clone(),
    };
    Ok(encoded)
}

fn encode_scalar(value: &dyn Any, scalar: ScalarType) -> Result<Value, EncodeErrorKind> {
    macro_rules! number {
        ($ty:ty) => {
            Value::from(*downcast_ref::<$ty>(value)?)
        };
    }

    let encoded = match scalar {
        ScalarType::Bool => Value::Bool(*downcast_ref::<bool>(value)?),
        ScalarType::Char => Value::from(*downcast_ref::<char>(value)?),
        ScalarType::String => Value::String(downcast_ref::<String>(value)?.clone()),
        ScalarType::F32 => number!(f32),
        ScalarType::F64 => number!(f64),
        ScalarType::U8 => number!(u8),
        ScalarType::U16 => number!(u16),
        ScalarType::U32 => number!(u32),
        ScalarType::U64 => number!(u64),
        ScalarType::USize => number!(usize),
        ScalarType::I8 => number!(i8),
        ScalarType::I16 => number!(i16),
        ScalarType::I32 => number!(i32),
        ScalarType::I64 => number!(i64),
        ScalarType::ISize => number!(isize),
        ScalarType::U128 => {
            let n = *downcast_ref::<u128>(value)?;
            u64::try_from(n)
                .map(|n| Value::Number(VNumber::from_u64(n)))
                .map_err(|_| EncodeErrorKind::NumberOutOfRange {
                    number: n.to_string(),
                })?
        }
        ScalarType::I128 => {
            let n = *downcast_ref::<i128>(value)?;
            i64::try_from(n)
                .map(|n| Value::Number(VNumber::from_i64(n)))
                .map_err(|_| EncodeErrorKind::NumberOutOfRange {
                    number: n.to_string(),
                })?
        }
        _ => {
            return Err(EncodeErrorKind::WrongType(WrongType {
                expected: "a supported scalar",
            }));
        }
    };
    Ok(encoded)
}
