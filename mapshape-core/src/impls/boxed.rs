use alloc::boxed::Box;
use core::any::Any;

use crate::{
    Def, PointerDef, PointerKind, PointerVTable, Shape, Shaped, WrongType, downcast_box,
    downcast_mut, downcast_ref, shape_of,
};

fn box_borrow<T: Shaped>(ptr: &dyn Any) -> Result<Option<&dyn Any>, WrongType> {
    let pointee: &dyn Any = &**downcast_ref::<Box<T>>(ptr)?;
    Ok(Some(pointee))
}

fn box_borrow_mut<T: Shaped>(ptr: &mut dyn Any) -> Result<Option<&mut dyn Any>, WrongType> {
    let pointee: &mut dyn Any = &mut **downcast_mut::<Box<T>>(ptr)?;
    Ok(Some(pointee))
}

fn box_alloc<T: Shaped>() -> Box<dyn Any> {
    Box::new(T::default())
}

fn box_attach<T: Shaped>(ptr: &mut dyn Any, pointee: Box<dyn Any>) -> Result<(), WrongType> {
    let pointee = downcast_box::<T>(pointee)?;
    *downcast_mut::<Box<T>>(ptr)? = pointee;
    Ok(())
}

impl<T: Shaped> Shaped for Box<T> {
    const SHAPE: &'static Shape = &const {
        Shape::new::<Box<T>>(
            "Box",
            Def::Pointer(PointerDef {
                kind: PointerKind::Box,
                pointee: shape_of::<T>,
                vtable: &const {
                    PointerVTable {
                        borrow: box_borrow::<T>,
                        borrow_mut: box_borrow_mut::<T>,
                        alloc: box_alloc::<T>,
                        attach: box_attach::<T>,
                    }
                },
            }),
        )
    };
}
