//! A `Shaped` impl written out by hand, the way the derive macro expands.

use core::any::Any;

use mapshape_core::{
    Def, Field, PointerKind, Shape, Shaped, StructDef, WrongType, downcast_mut, downcast_ref,
    shape_of,
};
use mapshape_testhelpers::test;

#[derive(Debug, Default, PartialEq)]
struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

fn node_value(parent: &dyn Any) -> Result<&dyn Any, WrongType> {
    let field: &dyn Any = &downcast_ref::<Node>(parent)?.value;
    Ok(field)
}

fn node_value_mut(parent: &mut dyn Any) -> Result<&mut dyn Any, WrongType> {
    let field: &mut dyn Any = &mut downcast_mut::<Node>(parent)?.value;
    Ok(field)
}

fn node_next(parent: &dyn Any) -> Result<&dyn Any, WrongType> {
    let field: &dyn Any = &downcast_ref::<Node>(parent)?.next;
    Ok(field)
}

fn node_next_mut(parent: &mut dyn Any) -> Result<&mut dyn Any, WrongType> {
    let field: &mut dyn Any = &mut downcast_mut::<Node>(parent)?.next;
    Ok(field)
}

impl Shaped for Node {
    const SHAPE: &'static Shape = &const {
        Shape::new::<Node>(
            "Node",
            Def::Struct(StructDef::new(&const {
                [
                    Field::new("value", shape_of::<i64>, node_value, node_value_mut),
                    Field::new(
                        "next",
                        shape_of::<Option<Box<Node>>>,
                        node_next,
                        node_next_mut,
                    ),
                ]
            })),
        )
    };
}

fn struct_def(shape: &Shape) -> StructDef {
    match shape.def {
        Def::Struct(def) => def,
        other => panic!("expected a struct, got {other:?}"),
    }
}

#[test]
fn recursive_shape_resolves_lazily() {
    let def = struct_def(Node::SHAPE);
    assert_eq!(def.fields.len(), 2);

    let next = def.fields[1].shape();
    assert_eq!(next.to_string(), "Option<Box<Node>>");

    let Def::Pointer(option) = next.def else {
        panic!("Option should be a pointer");
    };
    assert_eq!(option.kind, PointerKind::Option);

    let Def::Pointer(boxed) = option.pointee().def else {
        panic!("Box should be a pointer");
    };
    assert_eq!(boxed.kind, PointerKind::Box);
    assert_eq!(boxed.pointee(), Node::SHAPE);
}

#[test]
fn fields_reach_into_the_parent() {
    let def = struct_def(Node::SHAPE);
    let mut node = Node::default();

    let value = (def.fields[0].get_mut)(&mut node).unwrap();
    *value.downcast_mut::<i64>().unwrap() = 42;
    assert_eq!(node.value, 42);

    let next = (def.fields[1].get)(&node).unwrap();
    assert_eq!(next.downcast_ref::<Option<Box<Node>>>(), Some(&None));
}

#[test]
fn vtables_reject_other_types() {
    let def = struct_def(Node::SHAPE);
    let mut not_a_node = 3u8;
    let err = (def.fields[0].get_mut)(&mut not_a_node).unwrap_err();
    assert!(err.expected.ends_with("Node"), "{err}");
}

#[test]
fn reset_restores_the_zero_value() {
    let mut node = Node {
        value: 1,
        next: Some(Box::default()),
    };
    Node::SHAPE.reset(&mut node).unwrap();
    assert_eq!(node, Node::default());
}
