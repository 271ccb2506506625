use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Field, Fields, Ident, Type};

#[proc_macro_derive(HalResource, attributes(hal))]
pub fn derive_hal_resource(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => &named.named,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "HalResource can only be derived for structs with named fields",
            ))
        }
    };
    let field = hal_field(name, fields)?;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::jsonhal::HalResource for #name #ty_generics #where_clause {
            fn hal(&self) -> &::jsonhal::Hal {
                &self.#field
            }

            fn hal_mut(&mut self) -> &mut ::jsonhal::Hal {
                &mut self.#field
            }
        }
    })
}

/// A field marked `#[hal]` wins; otherwise exactly one field must be a `Hal`.
fn hal_field<'a>(name: &Ident, fields: &'a Punctuated<Field, Comma>) -> syn::Result<&'a Ident> {
    let marked: Vec<&Field> = fields
        .iter()
        .filter(|field| field.attrs.iter().any(|attr| attr.path().is_ident("hal")))
        .collect();
    let candidates: Vec<&Field> = if marked.is_empty() {
        fields.iter().filter(|field| is_hal_type(&field.ty)).collect()
    } else {
        marked
    };

    let mut candidates = candidates.into_iter();
    match (candidates.next(), candidates.next()) {
        (Some(field), None) => field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field")),
        (None, _) => Err(syn::Error::new_spanned(
            name,
            "HalResource requires a field of type `Hal`, or one marked with #[hal]",
        )),
        (Some(_), Some(_)) => Err(syn::Error::new_spanned(
            name,
            "HalResource found more than one candidate field; mark one with #[hal]",
        )),
    }
}

fn is_hal_type(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Hal"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand_err(input: DeriveInput) -> String {
        expand(&input).unwrap_err().to_string()
    }

    #[test]
    fn test_expands_for_single_hal_field() {
        let input: DeriveInput = parse_quote! {
            struct Order { hal: jsonhal::Hal, id: u32 }
        };
        let expanded = expand(&input).unwrap().to_string();
        assert!(expanded.contains("HalResource for Order"));
        assert!(expanded.contains("self . hal"));
    }

    #[test]
    fn test_marked_field_wins_over_type_match() {
        let input: DeriveInput = parse_quote! {
            struct Order { hal: Hal, #[hal] links: Hal }
        };
        let expanded = expand(&input).unwrap().to_string();
        assert!(expanded.contains("self . links"));
    }

    #[test]
    fn test_rejects_struct_without_hal_field() {
        let err = expand_err(parse_quote! {
            struct Order { id: u32 }
        });
        assert_eq!(
            err,
            "HalResource requires a field of type `Hal`, or one marked with #[hal]"
        );
    }

    #[test]
    fn test_rejects_ambiguous_hal_fields() {
        let err = expand_err(parse_quote! {
            struct Order { first: Hal, second: Hal }
        });
        assert_eq!(
            err,
            "HalResource found more than one candidate field; mark one with #[hal]"
        );
    }

    #[test]
    fn test_rejects_tuple_structs_and_enums() {
        let tuple = expand_err(parse_quote! { struct Order(Hal); });
        let enumeration = expand_err(parse_quote! { enum Order { A } });
        for err in [tuple, enumeration] {
            assert_eq!(
                err,
                "HalResource can only be derived for structs with named fields"
            );
        }
    }
}
