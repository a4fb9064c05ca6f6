use proc_macro::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::{parenthesized, Attribute, Data, DeriveInput, Field, Meta, Type, Visibility};

const COPY_TYPES: [&str; 15] = [
    "bool", "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize", "f32",
    "f64", "FloatNum", "char",
];

#[derive(Clone)]
struct ReadOption {
    vis: Visibility,
    copy: bool,
}

#[derive(Clone)]
struct WriteOption {
    vis: Visibility,
    setter: bool,
}

#[derive(Clone, Default)]
struct FieldOption {
    read: Option<ReadOption>,
    write: Option<WriteOption>,
    skip: bool,
}

fn parse_options(attrs: &[Attribute], default_vis: &Visibility) -> syn::Result<FieldOption> {
    let mut option = FieldOption::default();

    for attr in attrs {
        let is_read = attr.path().is_ident("r");
        if !is_read && !attr.path().is_ident("w") {
            continue;
        }

        let mut vis = default_vis.clone();
        let mut copy = false;
        let mut setter = false;

        if let Meta::List(_) = attr.meta {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("vis") {
                    let content;
                    parenthesized!(content in meta.input);
                    vis = content.parse()?;
                } else if meta.path.is_ident("copy") {
                    copy = true;
                } else if meta.path.is_ident("set") {
                    setter = true;
                } else if meta.path.is_ident("skip") {
                    option.skip = true;
                } else {
                    return Err(meta.error("unknown accessor option"));
                }
                Ok(())
            })?;
        }

        if is_read {
            option.read = Some(ReadOption { vis, copy });
        } else {
            option.write = Some(WriteOption { vis, setter });
        }
    }

    Ok(option)
}

fn is_copy_type(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => {
            let name = path.to_token_stream().to_string();
            COPY_TYPES.iter().any(|t| *t == name)
        }
        _ => false,
    }
}

fn accessors(field: &Field, option: FieldOption) -> proc_macro2::TokenStream {
    let Some(field_ident) = field.ident.clone() else {
        return syn::Error::new_spanned(field, "Fields only supports named fields")
            .into_compile_error();
    };
    let ty = &field.ty;

    let read = option.read.map(|ReadOption { vis, copy }| {
        if copy || is_copy_type(ty) {
            quote!(
                #[inline]
                #vis fn #field_ident(&self) -> #ty {
                    self.#field_ident
                }
            )
        } else {
            quote!(
                #[inline]
                #vis fn #field_ident(&self) -> &#ty {
                    &self.#field_ident
                }
            )
        }
    });

    let write = option.write.map(|WriteOption { vis, setter }| {
        if setter {
            let setter_ident = format_ident!("set_{}", field_ident);
            quote!(
                #vis fn #setter_ident(&mut self, value: impl Into<#ty>) -> &mut Self {
                    self.#field_ident = value.into();
                    self
                }
            )
        } else {
            let mut_ident = format_ident!("{}_mut", field_ident);
            quote!(
                #vis fn #mut_ident(&mut self) -> &mut #ty {
                    &mut self.#field_ident
                }
            )
        }
    });

    quote!(
        #read
        #write
    )
}

pub fn macro_fields(input: DeriveInput) -> TokenStream {
    let ident = input.ident;
    let generics = input.generics;

    let Data::Struct(data) = input.data else {
        return syn::Error::new(ident.span(), "Fields can only be applied to structs")
            .into_compile_error()
            .into();
    };

    let struct_option = match parse_options(&input.attrs, &input.vis) {
        Ok(option) => option,
        Err(err) => return err.into_compile_error().into(),
    };

    let mut methods = Vec::with_capacity(data.fields.len());

    for field in data.fields.iter() {
        let option = match parse_options(&field.attrs, &input.vis) {
            Ok(option) => option,
            Err(err) => return err.into_compile_error().into(),
        };

        if option.skip {
            continue;
        }

        // field level options win over struct level ones
        let option = FieldOption {
            read: option.read.or_else(|| struct_option.read.clone()),
            write: option.write.or_else(|| struct_option.write.clone()),
            skip: false,
        };

        methods.push(accessors(field, option));
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote!(
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    )
    .into()
}
