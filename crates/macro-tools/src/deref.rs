use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{Data, DeriveInput, Fields, Index};

pub fn macro_deref(input: DeriveInput) -> TokenStream {
    let ident = input.ident;
    let generics = input.generics;
    let Data::Struct(data) = input.data else {
        return syn::Error::new(ident.span(), "Deref can only be applied to structs")
            .into_compile_error()
            .into();
    };

    let is_marked = |field: &syn::Field| field.attrs.iter().any(|a| a.path().is_ident("deref"));

    // newtype structs forward to their only field without any marker
    let target = match &data.fields {
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => fields
            .unnamed
            .first()
            .map(|field| (Index::from(0).to_token_stream(), field.ty.clone())),
        fields => fields.iter().enumerate().find(|(_, f)| is_marked(f)).map(|(i, field)| {
            let accessor = match &field.ident {
                Some(field_ident) => field_ident.to_token_stream(),
                None => Index::from(i).to_token_stream(),
            };
            (accessor, field.ty.clone())
        }),
    };

    let Some((accessor, target_ty)) = target else {
        return syn::Error::new(ident.span(), "mark exactly one field with #[deref]")
            .into_compile_error()
            .into();
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote!(
        impl #impl_generics core::ops::Deref for #ident #ty_generics #where_clause {
            type Target = #target_ty;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.#accessor
            }
        }

        impl #impl_generics core::ops::DerefMut for #ident #ty_generics #where_clause {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.#accessor
            }
        }
    )
    .into()
}
