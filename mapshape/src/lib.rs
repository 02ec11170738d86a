#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;
extern crate self as mapshape;

pub use mapshape_core::*;
pub use mapshape_macros::Shaped;
pub use mapshape_value::{VArray, VNumber, VObject, Value, ValueType, value};

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
pub(crate) use trace;

#[cfg(not(feature = "tracing"))]
/// Forwards to tracing::debug when the tracing feature is enabled
macro_rules! debug {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
pub(crate) use debug;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod path;
pub use path::*;

mod result;
pub use result::*;

mod lookup;

mod decode;
pub use decode::{Decoder, decode, decode_partial};

mod encode;
pub use encode::to_value;
