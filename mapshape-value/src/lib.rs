#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[macro_use]
mod macros;

mod value;
pub use value::*;

mod number;
pub use number::*;

mod format;

mod shaped_impl;

#[cfg(feature = "serde_json")]
mod json;
