use core::any::{Any, TypeId};

use crate::{Def, ScalarType, Shaped, WrongType, downcast_mut};

/// Resets a value to its type's zero value.
pub type DefaultInPlaceFn = fn(value: &mut dyn Any) -> Result<(), WrongType>;

/// Schema for a type: what it is made of, and how to reach into it.
///
/// Shapes are `'static` and immutable. Two shapes describe the same type iff
/// their [`Shape::type_id`] is equal.
#[derive(Clone, Copy)]
pub struct Shape {
    /// Returns the `TypeId` of the described type.
    pub id: fn() -> TypeId,

    /// Unqualified name of the type, without generic parameters (e.g. `Vec`)
    pub type_identifier: &'static str,

    /// What kind of type this is, and the vtable to operate on it
    pub def: Def,

    /// Resets a value of this type to its zero value
    pub default_in_place: DefaultInPlaceFn,
}

fn default_in_place<T: Shaped>(value: &mut dyn Any) -> Result<(), WrongType> {
    *downcast_mut::<T>(value)? = T::default();
    Ok(())
}

impl Shape {
    /// Create the shape of `T`.
    pub const fn new<T: Shaped>(type_identifier: &'static str, def: Def) -> Self {
        Self {
            id: TypeId::of::<T>,
            type_identifier,
            def,
            default_in_place: default_in_place::<T>,
        }
    }

    /// The `TypeId` of the described type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        (self.id)()
    }

    /// Whether this shape describes `T`.
    #[inline]
    pub fn is_type<T: Any>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }

    /// The scalar type, if this shape is a scalar.
    #[inline]
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self.def {
            Def::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Reset `value` to this shape's zero value.
    #[inline]
    pub fn reset(&self, value: &mut dyn Any) -> Result<(), WrongType> {
        (self.default_in_place)(value)
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for Shape {}

impl core::hash::Hash for Shape {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id().hash(state);
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.def {
            Def::Pointer(ptr) => write!(f, "{}<{}>", self.type_identifier, ptr.pointee()),
            Def::List(list) => write!(f, "{}<{}>", self.type_identifier, list.item()),
            Def::Map(map) => write!(f, "{}<String, {}>", self.type_identifier, map.value()),
            Def::Scalar(_) | Def::Struct(_) | Def::Dynamic => {
                write!(f, "{}", self.type_identifier)
            }
        }
    }
}

impl core::fmt::Debug for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shape")
            .field("type", &format_args!("{self}"))
            .field("def", &self.def)
            .finish()
    }
}
