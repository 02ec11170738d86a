use alloc::boxed::Box;
use core::any::Any;

use crate::{
    Def, PointerDef, PointerKind, PointerVTable, Shape, Shaped, WrongType, downcast_box,
    downcast_mut, downcast_ref, shape_of,
};

fn option_borrow<T: Shaped>(ptr: &dyn Any) -> Result<Option<&dyn Any>, WrongType> {
    Ok(downcast_ref::<Option<T>>(ptr)?
        .as_ref()
        .map(|pointee| pointee as &dyn Any))
}

fn option_borrow_mut<T: Shaped>(ptr: &mut dyn Any) -> Result<Option<&mut dyn Any>, WrongType> {
    Ok(downcast_mut::<Option<T>>(ptr)?
        .as_mut()
        .map(|pointee| pointee as &mut dyn Any))
}

fn option_alloc<T: Shaped>() -> Box<dyn Any> {
    Box::new(T::default())
}

fn option_attach<T: Shaped>(ptr: &mut dyn Any, pointee: Box<dyn Any>) -> Result<(), WrongType> {
    let pointee = downcast_box::<T>(pointee)?;
    *downcast_mut::<Option<T>>(ptr)? = Some(*pointee);
    Ok(())
}

impl<T: Shaped> Shaped for Option<T> {
    const SHAPE: &'static Shape = &const {
        Shape::new::<Option<T>>(
            "Option",
            Def::Pointer(PointerDef {
                kind: PointerKind::Option,
                pointee: shape_of::<T>,
                vtable: &const {
                    PointerVTable {
                        borrow: option_borrow::<T>,
                        borrow_mut: option_borrow_mut::<T>,
                        alloc: option_alloc::<T>,
                        attach: option_attach::<T>,
                    }
                },
            }),
        )
    };
}
