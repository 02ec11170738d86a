use alloc::boxed::Box;
use core::any::{Any, type_name};

/// A vtable function was handed a value of a different type than the shape
/// it belongs to.
///
/// Derived and built-in shapes never produce this; it shows up when a
/// hand-written [`Shaped`](crate::Shaped) impl wires the wrong functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrongType {
    /// The type the vtable function expected.
    pub expected: &'static str,
}

impl WrongType {
    /// A `WrongType` expecting `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self {
            expected: type_name::<T>(),
        }
    }
}

impl core::fmt::Display for WrongType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "vtable applied to a value that is not a `{}`", self.expected)
    }
}

impl core::error::Error for WrongType {}

/// Borrow `value` as a `T`.
#[inline]
pub fn downcast_ref<T: Any>(value: &dyn Any) -> Result<&T, WrongType> {
    value.downcast_ref::<T>().ok_or_else(WrongType::of::<T>)
}

/// Mutably borrow `value` as a `T`.
#[inline]
pub fn downcast_mut<T: Any>(value: &mut dyn Any) -> Result<&mut T, WrongType> {
    value.downcast_mut::<T>().ok_or_else(WrongType::of::<T>)
}

/// Take ownership of a boxed `T`.
#[inline]
pub fn downcast_box<T: Any>(value: Box<dyn Any>) -> Result<Box<T>, WrongType> {
    value.downcast::<T>().map_err(|_| WrongType::of::<T>())
}
