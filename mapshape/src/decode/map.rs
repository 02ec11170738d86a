use core::any::Any;

use mapshape_core::{MapDef, Shape};
use mapshape_value::Value;

use super::{DecodeContext, Outcome};
use crate::{DecodeErrorKind, PathSegment};

/// Merges the input object into a string-keyed map.
///
/// Each value decodes into a fresh zero value and is inserted unless it was
/// rejected outright; keys already in the map but absent from the input stay.
/// Only an inserted entry counts as an assignment.
pub(super) fn decode_map(
    cx: &mut DecodeContext<'_>,
    input: &Value,
    shape: &'static Shape,
    def: MapDef,
    slot: &mut dyn Any,
) -> Outcome {
    let Some(entries) = input.as_object() else {
        return cx.reject(DecodeErrorKind::ShapeMismatch {
            expected: shape,
            got: input.value_type(),
        });
    };

    if cx.config().zero_fields {
        if let Err(err) = (def.vtable.clear)(slot) {
            return cx.reject(err.into());
        }
    }

    let value_shape = def.value();
    let mut inserted = false;
    for (key, value) in entries {
        cx.nested(PathSegment::Key(key.clone()), |cx| {
            let mut fresh = (def.vtable.alloc_value)();
            if cx.dispatch(value, value_shape, &mut *fresh) == Outcome::Rejected {
                return;
            }
            match (def.vtable.insert)(&mut *slot, key.clone(), fresh) {
                Ok(()) => inserted = true,
                Err(err) => cx.record(err.into()),
            }
        });
    }

    if inserted {
        cx.assigned();
    }
    Outcome::Written
}
