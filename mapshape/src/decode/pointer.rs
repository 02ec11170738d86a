use core::any::Any;

use mapshape_core::PointerDef;
use mapshape_value::Value;

use super::{DecodeContext, Outcome};
use crate::trace;

/// Decodes through an `Option`/`Box`. `input` is never null here.
///
/// An existing pointee is decoded into in place. Otherwise a fresh pointee
/// is decoded and attached unless it was rejected outright, so a struct with
/// some bad fields still ends up reachable.
pub(super) fn decode_pointer(
    cx: &mut DecodeContext<'_>,
    input: &Value,
    def: PointerDef,
    slot: &mut dyn Any,
) -> Outcome {
    let pointee_shape = def.pointee();

    if !cx.config().zero_fields {
        match (def.vtable.borrow_mut)(slot) {
            Ok(Some(existing)) => return cx.dispatch(input, pointee_shape, existing),
            Ok(None) => {}
            Err(err) => return cx.reject(err.into()),
        }
    }

    let mut fresh = (def.vtable.alloc)();
    match cx.dispatch(input, pointee_shape, &mut *fresh) {
        Outcome::Written => match (def.vtable.attach)(slot, fresh) {
            Ok(()) => {
                trace!(path = %cx.path(), pointee = %pointee_shape, "attached fresh pointee");
                cx.assigned();
                Outcome::Written
            }
            Err(err) => cx.reject(err.into()),
        },
        outcome => outcome,
    }
}
