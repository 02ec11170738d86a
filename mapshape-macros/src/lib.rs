#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;

mod derive_shaped;

/// Derives `mapshape::Shaped` for a struct with named fields.
///
/// Every field type must implement `Shaped`, and the struct must implement
/// `Default`.
#[proc_macro_derive(Shaped)]
pub fn derive_shaped(input: TokenStream) -> TokenStream {
    derive_shaped::derive_shaped(input.into()).into()
}
