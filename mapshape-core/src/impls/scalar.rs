use alloc::string::String;

use crate::{Def, ScalarType, Shape, Shaped};

macro_rules! impl_shaped_for_scalar {
    ($($ty:ident => $scalar:ident),* $(,)?) => {
        $(
            impl Shaped for $ty {
                const SHAPE: &'static Shape = &const {
                    Shape::new::<$ty>(stringify!($ty), Def::Scalar(ScalarType::$scalar))
                };
            }
        )*
    };
}

impl_shaped_for_scalar! {
    bool => Bool,
    char => Char,
    String => String,
    f32 => F32,
    f64 => F64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => USize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => ISize,
}
