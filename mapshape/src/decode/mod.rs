//! The decoder: walks a [`Value`] and a destination's [`Shape`] side by side.
//!
//! Every (value, shape) pair goes through [`DecodeContext::dispatch`], which
//! handles null input and routes on the shape's [`Def`]. Failures are recorded
//! in the context and never stop the walk, so one call reports every problem
//! and keeps every assignment that worked.

use alloc::vec::Vec;
use core::any::Any;

use mapshape_core::{Def, Shape, Shaped, downcast_mut};
use mapshape_value::Value;

use crate::{
    DecodeError, DecodeErrorKind, DecodeErrors, DecodeResult, DecoderConfig, Metadata, Path,
    PathSegment, debug, trace,
};

mod list;
mod map;
mod pointer;
mod scalar;
mod struct_;

/// What a dispatch did to its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The slot now holds decoded data, possibly with errors further down.
    Written,
    /// Null input; the slot is as it was (or reset, under `zero_fields`).
    Skipped,
    /// Nothing was written and an error was recorded for this slot.
    Rejected,
}

/// Per-call state: configuration, current path, and the error accumulator.
pub(crate) struct DecodeContext<'cfg> {
    config: &'cfg DecoderConfig,
    path: Path,
    errors: Vec<DecodeError>,
    assigned: usize,
    metadata: Metadata,
}

impl<'cfg> DecodeContext<'cfg> {
    fn new(config: &'cfg DecoderConfig) -> Self {
        Self {
            config,
            path: Path::root(),
            errors: Vec::new(),
            assigned: 0,
            metadata: Metadata::default(),
        }
    }

    pub(crate) fn config(&self) -> &DecoderConfig {
        self.config
    }

    /// Records an error at the current path.
    pub(crate) fn record(&mut self, kind: DecodeErrorKind) {
        debug!(path = %self.path, error = %kind, "decode error");
        self.errors.push(DecodeError {
            path: self.path.clone(),
            kind,
        });
    }

    /// Records an error at the current path and reports the slot untouched.
    pub(crate) fn reject(&mut self, kind: DecodeErrorKind) -> Outcome {
        self.record(kind);
        Outcome::Rejected
    }

    /// Counts one successful assignment towards the total-failure verdict.
    pub(crate) fn assigned(&mut self) {
        self.assigned += 1;
    }

    /// Runs `f` one level further down the path.
    pub(crate) fn nested<R>(&mut self, segment: PathSegment, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();
        result
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Decodes `input` into `slot`, which must be a value of `shape`'s type.
    pub(crate) fn dispatch(
        &mut self,
        input: &Value,
        shape: &'static Shape,
        slot: &mut dyn Any,
    ) -> Outcome {
        trace!(path = %self.path, shape = %shape, input = %input.value_type(), "dispatch");

        if input.is_null() {
            if self.config.zero_fields {
                if let Err(err) = shape.reset(slot) {
                    return self.reject(err.into());
                }
            }
            return Outcome::Skipped;
        }

        match shape.def {
            Def::Scalar(scalar) => scalar::decode_scalar(self, input, shape, scalar, slot),
            Def::Pointer(def) => pointer::decode_pointer(self, input, def, slot),
            Def::Struct(def) => struct_::decode_struct(self, input, shape, def, slot),
            Def::List(def) => list::decode_list(self, input, shape, def, slot),
            Def::Map(def) => map::decode_map(self, input, shape, def, slot),
            Def::Dynamic => self.decode_dynamic(input, slot),
        }
    }

    fn decode_dynamic(&mut self, input: &Value, slot: &mut dyn Any) -> Outcome {
        match downcast_mut::<Value>(slot) {
            Ok(slot) => {
                *slot = input.clone();
                self.assigned();
                Outcome::Written
            }
            Err(err) => self.reject(err.into()),
        }
    }

    fn finish(self) -> DecodeResult {
        let total_failure = !self.errors.is_empty() && self.assigned == 0;
        debug!(
            errors = self.errors.len(),
            assigned = self.assigned,
            total_failure,
            "decode finished"
        );
        DecodeResult {
            errors: self.errors,
            total_failure,
            metadata: self.metadata,
        }
    }
}

/// Decodes dynamic values into [`Shaped`] destinations.
///
/// ```
/// use mapshape::{Decoder, DecoderConfig, Shaped, value};
///
/// #[derive(Debug, Default, PartialEq, Shaped)]
/// struct Limits {
///     max_conns: u32,
/// }
///
/// let decoder = Decoder::new(DecoderConfig::new().weakly_typed_input(true));
/// let mut limits = Limits::default();
/// decoder.decode(&value!({ "max_conns": "128" }), &mut limits).unwrap();
/// assert_eq!(limits.max_conns, 128);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// A decoder with the given configuration.
    pub const fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// This decoder's configuration.
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes `input` into `dest`, returning every error at once.
    ///
    /// `dest` keeps everything that decoded, even when this returns `Err`.
    pub fn decode<T: Shaped>(&self, input: &Value, dest: &mut T) -> Result<(), DecodeErrors> {
        self.decode_with_metadata(input, dest).map(drop)
    }

    /// Like [`Decoder::decode`], also reporting which keys were used.
    pub fn decode_with_metadata<T: Shaped>(
        &self,
        input: &Value,
        dest: &mut T,
    ) -> Result<Metadata, DecodeErrors> {
        self.decode_partial(input, dest).into_result()
    }

    /// Decodes `input` into `dest`, returning the error list, the
    /// total-failure verdict and key metadata.
    pub fn decode_partial<T: Shaped>(&self, input: &Value, dest: &mut T) -> DecodeResult {
        let shape = T::SHAPE;
        debug!(shape = %shape, input = %input.value_type(), "decode");
        let mut cx = DecodeContext::new(&self.config);
        cx.dispatch(input, shape, dest);
        cx.finish()
    }
}

/// Decodes `input` into `dest` with the default configuration.
///
/// Decoding is maximal-effort: fields and elements that fail keep their
/// previous value, everything else is assigned, and all failures come back
/// together.
///
/// ```
/// use mapshape::{Shaped, decode, value};
///
/// #[derive(Debug, Default, Shaped)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// let mut server = Server::default();
/// let err = decode(&value!({ "Host": "db", "port": "eighty" }), &mut server).unwrap_err();
/// assert_eq!(server.host, "db");
/// assert_eq!(server.port, 0);
/// assert_eq!(err.to_string(), "1 error decoding:\n* port: expected `u16`, got string");
/// ```
pub fn decode<T: Shaped>(input: &Value, dest: &mut T) -> Result<(), DecodeErrors> {
    Decoder::default().decode(input, dest)
}

/// Decodes `input` into `dest` with the default configuration, telling a
/// partial success apart from a total failure.
///
/// ```
/// use mapshape::{Shaped, decode_partial, value};
///
/// #[derive(Debug, Default, Shaped)]
/// struct Pair {
///     foo: i64,
///     bar: i64,
/// }
///
/// let mut pair = Pair::default();
/// let result = decode_partial(&value!({ "foo": "x", "baz": 1 }), &mut pair);
/// assert_eq!(result.errors.len(), 1);
/// assert!(result.total_failure);
///
/// let result = decode_partial(&value!({ "foo": "x", "bar": 1 }), &mut pair);
/// assert!(!result.total_failure);
/// assert_eq!(pair.bar, 1);
/// ```
pub fn decode_partial<T: Shaped>(input: &Value, dest: &mut T) -> DecodeResult {
    Decoder::default().decode_partial(input, dest)
}
