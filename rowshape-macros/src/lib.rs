mod decode_element;
mod encode_family;

use decode_element::{decode_element, pattern_name};
use encode_family::encode_family;
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input, parse_quote};

/// Implements `Element` for a descriptor type.
///
/// ```ignore
/// #[derive(Element)]
/// #[element(kind = "column", pattern = ColumnPattern)]
/// struct Column<T> { name: &'static str, value: T }
/// ```
/// Type parameters get a `'static` bound, lifetime parameters are rejected.
#[proc_macro_derive(Element, attributes(element))]
pub fn derive_element(input: TokenStream) -> TokenStream {
    let mut item = parse_macro_input!(input as DeriveInput);
    if item.generics.lifetimes().next().is_some() {
        panic!(
            "`{}` cannot derive Element: elements must be 'static, remove the lifetime parameters",
            item.ident
        );
    }
    let metadata = decode_element(&item);
    for param in item.generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let kind = metadata.kind;
    let family = encode_family(metadata.pattern.as_ref());
    quote! {
        impl #impl_generics ::rowshape::Element for #name #ty_generics #where_clause {
            fn kind() -> ::rowshape::ElementKind {
                #kind
            }
            #family
        }
    }
    .into()
}

/// Implements `Pattern` for a unit marker struct.
///
/// The name defaults to the struct name without the `Pattern` suffix, override it with
/// `#[pattern_name("...")]`.
#[proc_macro_derive(Pattern, attributes(pattern_name))]
pub fn derive_pattern(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    let is_unit = matches!(&item.data, Data::Struct(data) if matches!(data.fields, Fields::Unit));
    if !is_unit || !item.generics.params.is_empty() {
        panic!(
            "`{}` cannot derive Pattern: only unit structs without generics can name a pattern",
            item.ident
        );
    }
    let name = &item.ident;
    let pattern_name = pattern_name(&item);
    quote! {
        impl ::rowshape::Pattern for #name {
            const NAME: &'static str = #pattern_name;
        }
    }
    .into()
}
