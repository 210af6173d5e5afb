use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

/// `Element::family` override for a type opting into the `pattern` family, nothing when absent.
pub(crate) fn encode_family(pattern: Option<&Path>) -> TokenStream {
    let Some(pattern) = pattern else {
        return TokenStream::new();
    };
    quote! {
        fn family() -> Option<::rowshape::Family> {
            Some(::rowshape::Family::of::<#pattern>())
        }
    }
}
