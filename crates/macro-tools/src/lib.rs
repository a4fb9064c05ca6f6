use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod deref;
mod fields;

/// forward `Deref`/`DerefMut` to the field marked with `#[deref]`
#[proc_macro_derive(Deref, attributes(deref))]
pub fn deref(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    deref::macro_deref(input)
}

/// generate accessors for struct fields
///
/// * `#[r]` read accessor, returns a copy for primitive numbers or when `#[r(copy)]` is set
/// * `#[w]` mutable accessor `field_mut`, `#[w(set)]` setter `set_field`
/// * `vis(..)` overrides the visibility of the generated method, `skip` ignores the field
///
/// attributes placed on the struct apply to every field
#[proc_macro_derive(Fields, attributes(r, w))]
pub fn fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    fields::macro_fields(input)
}
