use alloc::borrow::Cow;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::any::Any;

use mapshape_core::{Shape, StructDef};
use mapshape_value::Value;

use super::{DecodeContext, Outcome};
use crate::lookup::{MatchKind, field_lookup};
use crate::{DecodeErrorKind, PathSegment, trace};

/// Jaro-Winkler similarity a field name needs to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// The input entry a field will be decoded from.
#[derive(Clone, Copy)]
struct Claim<'v> {
    position: usize,
    kind: MatchKind,
    value: &'v Value,
}

/// Decodes an object into a struct, field by field in declaration order.
pub(super) fn decode_struct(
    cx: &mut DecodeContext<'_>,
    input: &Value,
    shape: &'static Shape,
    def: StructDef,
    slot: &mut dyn Any,
) -> Outcome {
    let Some(entries) = input.as_object() else {
        return cx.reject(DecodeErrorKind::ShapeMismatch {
            expected: shape,
            got: input.value_type(),
        });
    };

    let lookup = field_lookup(shape, &def);
    let matching = cx.config().field_matching;

    let mut claims: Vec<Option<Claim<'_>>> = alloc::vec![None; def.fields.len()];
    let mut unused: Vec<(usize, &str)> = Vec::new();

    for (position, (key, value)) in entries.iter().enumerate() {
        let Some((index, kind)) = lookup.resolve(key, matching) else {
            unused.push((position, key.as_str()));
            continue;
        };
        let claim = Claim {
            position,
            kind,
            value,
        };
        match claims[index] {
            None => claims[index] = Some(claim),
            Some(previous) if kind == MatchKind::Exact && previous.kind == MatchKind::Folded => {
                if let Some((previous_key, _)) = entries.get_index(previous.position) {
                    unused.push((previous.position, previous_key.as_str()));
                }
                claims[index] = Some(claim);
            }
            Some(_) => unused.push((position, key.as_str())),
        }
    }
    unused.sort_by_key(|&(position, _)| position);

    for (field, claim) in def.fields.iter().zip(&claims) {
        let segment = PathSegment::Field(Cow::Borrowed(field.name));
        cx.nested(segment, |cx| {
            let Some(claim) = claim else {
                let path = cx.path().to_string();
                cx.metadata_mut().unset.push(path);
                if cx.config().error_unset {
                    cx.record(DecodeErrorKind::UnsetField { field: field.name });
                }
                return;
            };

            let path = cx.path().to_string();
            cx.metadata_mut().keys.push(path);
            match (field.get_mut)(&mut *slot) {
                Ok(field_slot) => {
                    cx.dispatch(claim.value, field.shape(), field_slot);
                }
                Err(err) => cx.record(err.into()),
            }
        });
    }

    for (_, key) in unused {
        trace!(path = %cx.path(), key, "unused key");
        cx.nested(PathSegment::Field(Cow::Owned(key.into())), |cx| {
            let path = cx.path().to_string();
            cx.metadata_mut().unused.push(path);
            if cx.config().error_unused {
                let suggestion = suggest(key, &def);
                cx.record(DecodeErrorKind::UnusedKey {
                    key: key.into(),
                    suggestion,
                });
            }
        });
    }

    Outcome::Written
}

/// The declared field name closest to `key`, if any is close enough.
fn suggest(key: &str, def: &StructDef) -> Option<&'static str> {
    let mut best: Option<(f64, &'static str)> = None;
    for field in def.fields {
        let similarity = strsim::jaro_winkler(key, field.name);
        if similarity >= SUGGESTION_THRESHOLD
            && best.is_none_or(|(best_similarity, _)| similarity > best_similarity)
        {
            best = Some((similarity, field.name));
        }
    }
    best.map(|(_, name)| name)
}
