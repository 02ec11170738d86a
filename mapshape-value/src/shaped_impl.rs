use mapshape_core::{Def, Shape, Shaped};

use crate::Value;

impl Shaped for Value {
    const SHAPE: &'static Shape = &const { Shape::new::<Value>("Value", Def::Dynamic) };
}
