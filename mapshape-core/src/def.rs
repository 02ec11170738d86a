use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;

use crate::{ScalarType, Shape, WrongType};

/// The semantic definition of a shape: what kind of type it is and how to
/// operate on values of it.
#[derive(Clone, Copy)]
pub enum Def {
    /// A leaf value: integers, floats, `bool`, `char`, `String`.
    Scalar(ScalarType),

    /// An indirection to a single pointee, possibly null: `Option<T>`, `Box<T>`.
    Pointer(PointerDef),

    /// A struct with named fields.
    Struct(StructDef),

    /// A growable sequence: `Vec<T>`.
    List(ListDef),

    /// A string-keyed map: `BTreeMap<String, V>`, `HashMap<String, V>`.
    Map(MapDef),

    /// A dynamic value that holds whatever it is given.
    Dynamic,
}

impl Def {
    /// A short name for the kind of definition, for diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Def::Scalar(_) => "scalar",
            Def::Pointer(_) => "pointer",
            Def::Struct(_) => "struct",
            Def::List(_) => "list",
            Def::Map(_) => "map",
            Def::Dynamic => "dynamic value",
        }
    }
}

impl core::fmt::Debug for Def {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Def::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Def::Pointer(ptr) => f
                .debug_struct("Pointer")
                .field("kind", &ptr.kind)
                .field("pointee", &format_args!("{}", ptr.pointee()))
                .finish(),
            Def::Struct(def) => f
                .debug_struct("Struct")
                .field(
                    "fields",
                    &def.fields.iter().map(|field| field.name).collect::<Vec<_>>(),
                )
                .finish(),
            Def::List(list) => f
                .debug_struct("List")
                .field("item", &format_args!("{}", list.item()))
                .finish(),
            Def::Map(map) => f
                .debug_struct("Map")
                .field("value", &format_args!("{}", map.value()))
                .finish(),
            Def::Dynamic => f.write_str("Dynamic"),
        }
    }
}

/// Which pointer type a [`PointerDef`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// `Option<T>`: may be null.
    Option,
    /// `Box<T>`: always holds a pointee.
    Box,
}

/// Definition of a pointer-like shape.
#[derive(Clone, Copy)]
pub struct PointerDef {
    /// What kind of pointer this is
    pub kind: PointerKind,

    /// Shape of the pointee
    pub pointee: fn() -> &'static Shape,

    /// Operations on the pointer
    pub vtable: &'static PointerVTable,
}

impl PointerDef {
    /// Shape of the pointee.
    #[inline]
    pub fn pointee(&self) -> &'static Shape {
        (self.pointee)()
    }

    /// Whether the pointer can be null.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        matches!(self.kind, PointerKind::Option)
    }
}

/// Borrows the pointee, or `None` if the pointer is null.
pub type PointerBorrowFn = fn(ptr: &dyn Any) -> Result<Option<&dyn Any>, WrongType>;

/// Mutably borrows the pointee, or `None` if the pointer is null.
pub type PointerBorrowMutFn = fn(ptr: &mut dyn Any) -> Result<Option<&mut dyn Any>, WrongType>;

/// Allocates a fresh, zero-valued pointee.
pub type PointerAllocFn = fn() -> Box<dyn Any>;

/// Points the pointer at `pointee`, dropping whatever it pointed to before.
pub type PointerAttachFn = fn(ptr: &mut dyn Any, pointee: Box<dyn Any>) -> Result<(), WrongType>;

/// Operations on a pointer.
#[derive(Clone, Copy)]
pub struct PointerVTable {
    /// See [`PointerBorrowFn`]
    pub borrow: PointerBorrowFn,
    /// See [`PointerBorrowMutFn`]
    pub borrow_mut: PointerBorrowMutFn,
    /// See [`PointerAllocFn`]
    pub alloc: PointerAllocFn,
    /// See [`PointerAttachFn`]
    pub attach: PointerAttachFn,
}

/// Definition of a struct with named fields.
#[derive(Clone, Copy)]
pub struct StructDef {
    /// all fields, in declaration order
    pub fields: &'static [Field],
}

impl StructDef {
    /// Create a struct definition from its fields.
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }
}

/// Borrows a field out of its parent struct.
pub type FieldGetFn = fn(parent: &dyn Any) -> Result<&dyn Any, WrongType>;

/// Mutably borrows a field out of its parent struct.
pub type FieldGetMutFn = fn(parent: &mut dyn Any) -> Result<&mut dyn Any, WrongType>;

/// Describes a field in a struct.
#[derive(Clone, Copy)]
pub struct Field {
    /// Name of the field, as matched against mapping keys
    pub name: &'static str,

    /// shape of the field's type
    ///
    /// the layer of indirection allows for cyclic type definitions
    pub shape: fn() -> &'static Shape,

    /// See [`FieldGetFn`]
    pub get: FieldGetFn,

    /// See [`FieldGetMutFn`]
    pub get_mut: FieldGetMutFn,
}

impl Field {
    /// Create a field descriptor.
    pub const fn new(
        name: &'static str,
        shape: fn() -> &'static Shape,
        get: FieldGetFn,
        get_mut: FieldGetMutFn,
    ) -> Self {
        Self {
            name,
            shape,
            get,
            get_mut,
        }
    }

    /// Returns the shape of the field's type
    #[inline]
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }
}

impl core::fmt::Debug for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("shape", &format_args!("{}", self.shape()))
            .finish()
    }
}

/// Definition of a list shape.
#[derive(Clone, Copy)]
pub struct ListDef {
    /// shape of the items in the list
    pub item: fn() -> &'static Shape,

    /// Operations on the list
    pub vtable: &'static ListVTable,
}

impl ListDef {
    /// Returns the shape of the items in the list
    #[inline]
    pub fn item(&self) -> &'static Shape {
        (self.item)()
    }
}

/// Returns the number of items in the list.
pub type ListLenFn = fn(list: &dyn Any) -> Result<usize, WrongType>;

/// Replaces the list's contents with `len` zero-valued items.
pub type ListResetFn = fn(list: &mut dyn Any, len: usize) -> Result<(), WrongType>;

/// Borrows the item at `index`, `None` when out of bounds.
pub type ListItemFn = fn(list: &dyn Any, index: usize) -> Result<Option<&dyn Any>, WrongType>;

/// Mutably borrows the item at `index`, `None` when out of bounds.
pub type ListItemMutFn =
    fn(list: &mut dyn Any, index: usize) -> Result<Option<&mut dyn Any>, WrongType>;

/// Operations on a list.
#[derive(Clone, Copy)]
pub struct ListVTable {
    /// See [`ListLenFn`]
    pub len: ListLenFn,
    /// See [`ListResetFn`]
    pub reset: ListResetFn,
    /// See [`ListItemFn`]
    pub item: ListItemFn,
    /// See [`ListItemMutFn`]
    pub item_mut: ListItemMutFn,
}

/// Definition of a string-keyed map shape.
#[derive(Clone, Copy)]
pub struct MapDef {
    /// shape of the map's values
    pub value: fn() -> &'static Shape,

    /// Operations on the map
    pub vtable: &'static MapVTable,
}

impl MapDef {
    /// Returns the shape of the map's values
    #[inline]
    pub fn value(&self) -> &'static Shape {
        (self.value)()
    }
}

/// Removes every entry from the map.
pub type MapClearFn = fn(map: &mut dyn Any) -> Result<(), WrongType>;

/// Allocates a fresh, zero-valued map value.
pub type MapAllocValueFn = fn() -> Box<dyn Any>;

/// Inserts `value` under `key`, replacing any previous entry.
pub type MapInsertFn =
    fn(map: &mut dyn Any, key: String, value: Box<dyn Any>) -> Result<(), WrongType>;

/// Lists the map's entries, in the map's iteration order.
pub type MapEntriesFn = fn(map: &dyn Any) -> Result<Vec<(&str, &dyn Any)>, WrongType>;

/// Operations on a map.
#[derive(Clone, Copy)]
pub struct MapVTable {
    /// See [`MapClearFn`]
    pub clear: MapClearFn,
    /// See [`MapAllocValueFn`]
    pub alloc_value: MapAllocValueFn,
    /// See [`MapInsertFn`]
    pub insert: MapInsertFn,
    /// See [`MapEntriesFn`]
    pub entries: MapEntriesFn,
}
