use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, parse_macro_input, parse_quote};

use crate::diag;

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "Emptiness derive can only be used on structs; use `impl_emptiness!(opaque ..)` or a manual impl",
        ));
    };

    let accessors: Vec<TokenStream2> = match &data.fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|f| f.ident.as_ref())
            .map(|ident| quote!(self.#ident))
            .collect(),
        Fields::Unnamed(unnamed) => (0..unnamed.unnamed.len())
            .map(|i| {
                let index = Index::from(i);
                quote!(self.#index)
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    let field_types: Vec<syn::Type> = data.fields.iter().map(|f| f.ty.clone()).collect();

    if !input.generics.params.is_empty() {
        let where_clause = input.generics.make_where_clause();
        for ty in &field_types {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::fieldcheck::foundation::Emptiness));
        }
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::fieldcheck::foundation::Emptiness for #name #ty_generics #where_clause {
            fn is_empty_value(&self) -> bool {
                true #(&& ::fieldcheck::foundation::Emptiness::is_empty_value(&#accessors))*
            }
        }
    })
}
