#![doc = include_str!("../README.md")]

use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    /// Attributes, visibility and qualifiers in front of `fn`.
    struct BeforeFn {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    /// Generics, arguments and return type.
    struct Signature {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        before_fn: BeforeFn,
        _fn: KFn,
        name: Ident,
        signature: Signature,
        body: BraceGroup,
    }
}

impl quote::ToTokens for BeforeFn {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Signature {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

/// Marks a test whose body runs after the tracing subscriber is installed.
///
/// ```ignore
/// use mapshape_testhelpers::test;
///
/// #[test]
/// fn decodes_things() {
///     // trace output from the decoder shows up in the test log
/// }
/// ```
///
/// An argument replaces the inner test attribute, e.g.
/// `#[mapshape_testhelpers::test(tokio::test)]`.
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut tokens = item.to_token_iter();
    let TestFn {
        before_fn,
        _fn,
        name,
        signature,
        body,
    } = match tokens.parse::<TestFn>() {
        Ok(decl) => decl,
        Err(err) => {
            let message = format!("#[test] expects a function: {err}");
            return quote::quote! { ::core::compile_error!(#message); }.into();
        }
    };

    let test_attr = if attr.is_empty() {
        quote::quote! { #[::core::prelude::rust_2024::test] }
    } else {
        let attr = TokenStream::from(attr);
        quote::quote! { #[#attr] }
    };

    let body = body.0.stream();

    quote::quote! {
        #test_attr
        #before_fn fn #name #signature {
            ::mapshape_testhelpers::setup();

            #body
        }
    }
    .into()
}
