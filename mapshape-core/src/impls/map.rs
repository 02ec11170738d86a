use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use std::collections::HashMap;

use crate::{
    Def, MapDef, MapVTable, Shape, Shaped, WrongType, downcast_box, downcast_mut, downcast_ref,
    shape_of,
};

fn map_alloc_value<V: Shaped>() -> Box<dyn Any> {
    Box::new(V::default())
}

/// Implements `Shaped` for a string-keyed map type whose API mirrors `BTreeMap`.
macro_rules! impl_shaped_for_map {
    ($map:ident, $name:literal, $clear:ident, $insert:ident, $entries:ident) => {
        fn $clear<V: Shaped>(map: &mut dyn Any) -> Result<(), WrongType> {
            downcast_mut::<$map<String, V>>(map)?.clear();
            Ok(())
        }

        fn $insert<V: Shaped>(
            map: &mut dyn Any,
            key: String,
            value: Box<dyn Any>,
        ) -> Result<(), WrongType> {
            let value = downcast_box::<V>(value)?;
            downcast_mut::<$map<String, V>>(map)?.insert(key, *value);
            Ok(())
        }

        fn $entries<V: Shaped>(map: &dyn Any) -> Result<Vec<(&str, &dyn Any)>, WrongType> {
            Ok(downcast_ref::<$map<String, V>>(map)?
                .iter()
                .map(|(key, value)| (key.as_str(), value as &dyn Any))
                .collect())
        }

        impl<V: Shaped> Shaped for $map<String, V> {
            const SHAPE: &'static Shape = &const {
                Shape::new::<$map<String, V>>(
                    $name,
                    Def::Map(MapDef {
                        value: shape_of::<V>,
                        vtable: &const {
                            MapVTable {
                                clear: $clear::<V>,
                                alloc_value: map_alloc_value::<V>,
                                insert: $insert::<V>,
                                entries: $entries::<V>,
                            }
                        },
                    }),
                )
            };
        }
    };
}

impl_shaped_for_map!(BTreeMap, "BTreeMap", btreemap_clear, btreemap_insert, btreemap_entries);
impl_shaped_for_map!(HashMap, "HashMap", hashmap_clear, hashmap_insert, hashmap_entries);

#[cfg(feature = "indexmap")]
use indexmap::IndexMap;

#[cfg(feature = "indexmap")]
impl_shaped_for_map!(IndexMap, "IndexMap", indexmap_clear, indexmap_insert, indexmap_entries);
