#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod error;
pub use error::*;

mod scalar;
pub use scalar::*;

mod shape;
pub use shape::*;

mod def;
pub use def::*;

mod impls;

/// Types that have a static shape the decoder can walk.
///
/// The shape is a `'static` constant, so it is computed at compile time and
/// shared by every decode of the type. Decode targets need a zero value, hence
/// the `Default` bound: fresh pointees, list slots and map values all start
/// out as `T::default()`.
///
/// Implement it with `#[derive(Shaped)]` for structs with named fields.
pub trait Shaped: Default + 'static {
    /// The shape of this type.
    const SHAPE: &'static Shape;
}

/// Returns the shape of `T`.
///
/// Field and element descriptors store this as a function pointer rather
/// than a reference, which lets self-referential types (a struct holding an
/// `Option<Box<Self>>`) have their shapes defined in terms of each other.
pub fn shape_of<T: Shaped>() -> &'static Shape {
    T::SHAPE
}
