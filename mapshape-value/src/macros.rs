//! The `value!` macro for building [`Value`](crate::Value) trees inline.

/// Builds a [`Value`](crate::Value) using JSON-like syntax.
///
/// Object keys must be string literals. Anything that is not `null`, an
/// array or an object is converted with `Value::from`, so expressions work in
/// value position.
///
/// ```
/// use mapshape_value::{Value, value};
///
/// let port = 8080;
/// let v = value!({
///     "host": "localhost",
///     "port": port,
///     "tls": { "enabled": false },
///     "peers": [1, 2.5, null]
/// });
/// assert_eq!(v.get("port"), Some(&Value::from(8080)));
/// assert!(v.get("peers").and_then(|p| p.get_index(2)).is_some_and(Value::is_null));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };
    ([ $($tt:tt)* ]) => {
        $crate::__value_array!(@elems [] $($tt)*)
    };
    ({ $($tt:tt)* }) => {
        $crate::__value_object!(@entries [] $($tt)*)
    };
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __value_array {
    (@elems [$($elems:expr,)*]) => {
        $crate::Value::Array(::std::vec![$($elems),*])
    };
    (@elems [$($elems:expr,)*] null $(, $($rest:tt)*)?) => {
        $crate::__value_array!(@elems [$($elems,)* $crate::Value::Null,] $($($rest)*)?)
    };
    (@elems [$($elems:expr,)*] [ $($inner:tt)* ] $(, $($rest:tt)*)?) => {
        $crate::__value_array!(@elems [$($elems,)* $crate::value!([ $($inner)* ]),] $($($rest)*)?)
    };
    (@elems [$($elems:expr,)*] { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $crate::__value_array!(@elems [$($elems,)* $crate::value!({ $($inner)* }),] $($($rest)*)?)
    };
    (@elems [$($elems:expr,)*] $next:expr $(, $($rest:tt)*)?) => {
        $crate::__value_array!(@elems [$($elems,)* $crate::Value::from($next),] $($($rest)*)?)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __value_object {
    (@entries [$(($key:expr, $val:expr))*]) => {{
        #[allow(unused_mut)]
        let mut object = $crate::VObject::new();
        $(
            object.insert(::std::string::String::from($key), $val);
        )*
        $crate::Value::Object(object)
    }};
    (@entries [$($entries:tt)*] $key:literal : null $(, $($rest:tt)*)?) => {
        $crate::__value_object!(@entries [$($entries)* ($key, $crate::Value::Null)] $($($rest)*)?)
    };
    (@entries [$($entries:tt)*] $key:literal : [ $($inner:tt)* ] $(, $($rest:tt)*)?) => {
        $crate::__value_object!(@entries [$($entries)* ($key, $crate::value!([ $($inner)* ]))] $($($rest)*)?)
    };
    (@entries [$($entries:tt)*] $key:literal : { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $crate::__value_object!(@entries [$($entries)* ($key, $crate::value!({ $($inner)* }))] $($($rest)*)?)
    };
    (@entries [$($entries:tt)*] $key:literal : $val:expr $(, $($rest:tt)*)?) => {
        $crate::__value_object!(@entries [$($entries)* ($key, $crate::Value::from($val))] $($($rest)*)?)
    };
}
