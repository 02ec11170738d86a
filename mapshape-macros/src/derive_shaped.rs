//! Implementation of `#[derive(Shaped)]`.
//!
//! The item is parsed with unsynn down to the struct body; the body itself is
//! split into fields by hand, since field types may contain top-level commas
//! inside angle brackets (`HashMap<String, u8>`) that no token group encloses.

use proc_macro2::{Delimiter, Literal, Span, TokenStream as TokenStream2, TokenTree};
use quote::{format_ident, quote, quote_spanned};
use unsynn::*;

keyword! {
    KStruct = "struct";
    KEnum = "enum";
    KPub = "pub";
}

unsynn! {
    /// Visibility: `pub`, `pub(...)` or nothing
    enum Vis {
        PubIn(Cons<KPub, ParenthesisGroup>),
        Pub(KPub),
    }

    /// An attribute: `#[...]`
    struct Attribute {
        _pound: Pound,
        content: BracketGroup,
    }

    enum DeriveInput {
        Struct(StructItem),
        Enum(EnumItem),
    }

    struct StructItem {
        _attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        _kw_struct: KStruct,
        name: Ident,
        rest: Vec<TokenTree>,
    }

    struct EnumItem {
        _attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        _kw_enum: KEnum,
        name: Ident,
        _rest: Vec<TokenTree>,
    }
}

/// One named field of the struct being derived.
struct NamedField {
    /// The field's identifier as written, possibly raw (`r#type`)
    ident: proc_macro2::Ident,
    /// The name mapping keys are matched against
    name: String,
    ty: TokenStream2,
}

fn error_at(span: Span, message: &str) -> TokenStream2 {
    quote_spanned! { span => ::core::compile_error!(#message); }
}

pub fn derive_shaped(input: TokenStream2) -> TokenStream2 {
    let mut iter = input.to_token_iter();
    let parsed: DeriveInput = match iter.parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            let message = err.to_string();
            return quote! { ::core::compile_error!(#message); };
        }
    };

    match parsed {
        DeriveInput::Struct(item) => match named_fields(&item) {
            Ok(fields) => expand(&item.name, &fields),
            Err((span, message)) => error_at(span, &message),
        },
        DeriveInput::Enum(item) => error_at(
            item.name.span(),
            "`Shaped` can only be derived for structs with named fields",
        ),
    }
}

/// Extracts the named fields of `item`, rejecting generic, tuple and unit
/// structs.
fn named_fields(item: &StructItem) -> core::result::Result<Vec<NamedField>, (Span, String)> {
    let name_span = item.name.span();
    match item.rest.first() {
        Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Brace => {
            split_fields(group.stream())
        }
        Some(TokenTree::Punct(punct)) if punct.as_char() == '<' => Err((
            punct.span(),
            "`Shaped` cannot be derived for generic structs".to_owned(),
        )),
        Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Parenthesis => Err((
            group.span(),
            "`Shaped` cannot be derived for tuple structs; name the fields".to_owned(),
        )),
        _ => Err((
            name_span,
            "`Shaped` can only be derived for structs with named fields".to_owned(),
        )),
    }
}

/// Splits a brace-delimited field list on its top-level commas.
fn split_fields(body: TokenStream2) -> core::result::Result<Vec<NamedField>, (Span, String)> {
    let mut fields = Vec::new();
    let mut current: Vec<TokenTree> = Vec::new();
    let mut angle_depth = 0usize;
    let mut after_dash = false;

    for tt in body {
        if let TokenTree::Punct(punct) = &tt {
            match punct.as_char() {
                ',' if angle_depth == 0 => {
                    if let Some(field) = parse_field(core::mem::take(&mut current))? {
                        fields.push(field);
                    }
                    after_dash = false;
                    continue;
                }
                '<' => angle_depth += 1,
                // `->` in a fn pointer type closes nothing
                '>' if !after_dash => angle_depth = angle_depth.saturating_sub(1),
                _ => {}
            }
            after_dash = punct.as_char() == '-';
        } else {
            after_dash = false;
        }
        current.push(tt);
    }

    if let Some(field) = parse_field(current)? {
        fields.push(field);
    }
    Ok(fields)
}

/// Parses `#[attrs]* vis? name: Type`. An empty token list (after a trailing
/// comma) yields `None`.
fn parse_field(
    tokens: Vec<TokenTree>,
) -> core::result::Result<Option<NamedField>, (Span, String)> {
    let mut tokens = tokens.into_iter().peekable();

    // attributes, doc comments included
    while matches!(tokens.peek(), Some(TokenTree::Punct(p)) if p.as_char() == '#') {
        tokens.next();
        tokens.next();
    }

    if matches!(tokens.peek(), Some(TokenTree::Ident(ident)) if ident == "pub") {
        tokens.next();
        if matches!(tokens.peek(), Some(TokenTree::Group(g)) if g.delimiter() == Delimiter::Parenthesis)
        {
            tokens.next();
        }
    }

    let ident = match tokens.next() {
        None => return Ok(None),
        Some(TokenTree::Ident(ident)) => ident,
        Some(other) => return Err((other.span(), "expected a field name".to_owned())),
    };

    match tokens.next() {
        Some(TokenTree::Punct(colon)) if colon.as_char() == ':' => {}
        _ => {
            return Err((
                ident.span(),
                format!("expected `:` after field `{ident}`"),
            ));
        }
    }

    let ty: TokenStream2 = tokens.collect();
    if ty.is_empty() {
        return Err((ident.span(), format!("field `{ident}` has no type")));
    }

    let rendered = ident.to_string();
    let name = rendered
        .strip_prefix("r#")
        .map(str::to_owned)
        .unwrap_or(rendered);

    Ok(Some(NamedField { ident, name, ty }))
}

fn expand(struct_name: &proc_macro2::Ident, fields: &[NamedField]) -> TokenStream2 {
    let struct_name_str = struct_name.to_string();
    let count = Literal::usize_unsuffixed(fields.len());

    let mut accessors = Vec::with_capacity(fields.len());
    let mut descriptors = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let get = format_ident!("__shaped_get_{}", index);
        let get_mut = format_ident!("__shaped_get_mut_{}", index);
        let ident = &field.ident;
        let name = &field.name;
        let ty = &field.ty;

        accessors.push(quote! {
            fn #get(
                parent: &dyn ::core::any::Any,
            ) -> ::core::result::Result<&dyn ::core::any::Any, ::mapshape::WrongType> {
                let field: &dyn ::core::any::Any =
                    &::mapshape::downcast_ref::<#struct_name>(parent)?.#ident;
                ::core::result::Result::Ok(field)
            }

            fn #get_mut(
                parent: &mut dyn ::core::any::Any,
            ) -> ::core::result::Result<&mut dyn ::core::any::Any, ::mapshape::WrongType> {
                let field: &mut dyn ::core::any::Any =
                    &mut ::mapshape::downcast_mut::<#struct_name>(parent)?.#ident;
                ::core::result::Result::Ok(field)
            }
        });

        descriptors.push(quote! {
            ::mapshape::Field::new(#name, ::mapshape::shape_of::<#ty>, #get, #get_mut)
        });
    }

    quote! {
        #[automatically_derived]
        impl ::mapshape::Shaped for #struct_name {
            const SHAPE: &'static ::mapshape::Shape = &const {
                #(#accessors)*

                ::mapshape::Shape::new::<#struct_name>(
                    #struct_name_str,
                    ::mapshape::Def::Struct(::mapshape::StructDef::new(&const {
                        let fields: [::mapshape::Field; #count] = [#(#descriptors),*];
                        fields
                    })),
                )
            };
        }
    }
}
