use proc_macro::TokenStream;

/// Convert `syn::Error` into a TokenStream that emits a proper compiler error.
pub fn to_compile_error(err: syn::Error) -> TokenStream {
    err.to_compile_error().into()
}
