use alloc::vec::Vec;
use core::any::Any;

use crate::{Def, ListDef, ListVTable, Shape, Shaped, WrongType, downcast_mut, downcast_ref, shape_of};

fn vec_len<T: Shaped>(list: &dyn Any) -> Result<usize, WrongType> {
    Ok(downcast_ref::<Vec<T>>(list)?.len())
}

fn vec_reset<T: Shaped>(list: &mut dyn Any, len: usize) -> Result<(), WrongType> {
    let list = downcast_mut::<Vec<T>>(list)?;
    list.clear();
    list.resize_with(len, T::default);
    Ok(())
}

fn vec_item<T: Shaped>(list: &dyn Any, index: usize) -> Result<Option<&dyn Any>, WrongType> {
    Ok(downcast_ref::<Vec<T>>(list)?
        .get(index)
        .map(|item| item as &dyn Any))
}

fn vec_item_mut<T: Shaped>(
    list: &mut dyn Any,
    index: usize,
) -> Result<Option<&mut dyn Any>, WrongType> {
    Ok(downcast_mut::<Vec<T>>(list)?
        .get_mut(index)
        .map(|item| item as &mut dyn Any))
}

impl<T: Shaped> Shaped for Vec<T> {
    const SHAPE: &'static Shape = &const {
        Shape::new::<Vec<T>>(
            "Vec",
            Def::List(ListDef {
                item: shape_of::<T>,
                vtable: &const {
                    ListVTable {
                        len: vec_len::<T>,
                        reset: vec_reset::<T>,
                        item: vec_item::<T>,
                        item_mut: vec_item_mut::<T>,
                    }
                },
            }),
        )
    };
}
