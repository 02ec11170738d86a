use core::any::Any;

use mapshape_core::{ListDef, Shape};
use mapshape_value::Value;

use super::{DecodeContext, Outcome};
use crate::{DecodeErrorKind, PathSegment};

/// Rebuilds the list with one slot per input element.
///
/// Elements decode independently; a failed element stays at its zero value,
/// so output index `i` always corresponds to input index `i`.
pub(super) fn decode_list(
    cx: &mut DecodeContext<'_>,
    input: &Value,
    shape: &'static Shape,
    def: ListDef,
    slot: &mut dyn Any,
) -> Outcome {
    let items: &[Value] = match input {
        Value::Array(items) => items,
        Value::Object(entries) if cx.config().weakly_typed_input && entries.is_empty() => &[],
        Value::Object(_) | Value::Bool(_) | Value::Number(_) | Value::String(_)
            if cx.config().weakly_typed_input =>
        {
            core::slice::from_ref(input)
        }
        other => {
            return cx.reject(DecodeErrorKind::ShapeMismatch {
                expected: shape,
                got: other.value_type(),
            });
        }
    };

    if let Err(err) = (def.vtable.reset)(slot, items.len()) {
        return cx.reject(err.into());
    }

    let item_shape = def.item();
    for (index, item) in items.iter().enumerate() {
        cx.nested(PathSegment::Index(index), |cx| {
            match (def.vtable.item_mut)(&mut *slot, index) {
                Ok(Some(element)) => {
                    cx.dispatch(item, item_shape, element);
                }
                // reset above guarantees the index exists
                Ok(None) => {}
                Err(err) => cx.record(err.into()),
            }
        });
    }

    if !items.is_empty() {
        cx.assigned();
    }
    Outcome::Written
}
