//! Form derive macro implementation.

use proc_macro2::{TokenStream, TokenTree};
use quote::quote;
use syn::{DeriveInput, Fields, Ident, LitStr, Type, parse_quote, parse2};

/// Marker token appended to a tag built from `rename` + `omitempty`.
const OMIT_EMPTY: &str = "omitempty";

/// Field options parsed from `#[form(...)]` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FormFieldOptions {
    /// Raw tag, `"wire_name"` or `"wire_name,omitempty"`.
    tag: Option<String>,
}

/// A field that takes part in encoding.
struct TaggedField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    tag: String,
}

/// Expand the `#[derive(Form)]` macro.
pub fn expand_form_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;

    // Only support structs with named fields
    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Form derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Form derive only supports structs",
            ));
        }
    };

    let mut tagged = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        // Untagged fields are not part of the form
        let Some(tag) = parse_form_field_options(&field.attrs)?.tag else {
            continue;
        };
        tagged.push(TaggedField {
            ident,
            ty: &field.ty,
            tag,
        });
    }

    let type_params: Vec<&Ident> = input.generics.type_params().map(|p| &p.ident).collect();
    let mut generics = input.generics.clone();
    if !type_params.is_empty() {
        let where_clause = generics.make_where_clause();
        for field in &tagged {
            if mentions_any(field.ty, &type_params) {
                let ty = field.ty;
                where_clause
                    .predicates
                    .push(parse_quote!(#ty: ::formwire::FormValue));
            }
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_entries = tagged.iter().map(|field| {
        let ident = field.ident;
        let tag = &field.tag;
        quote! {
            ::formwire::FormField::new(#tag, &self.#ident)
        }
    });

    Ok(quote! {
        impl #impl_generics ::formwire::FormValue for #name #ty_generics #where_clause {
            fn form_value(&self) -> ::formwire::FieldValue<'_> {
                ::formwire::FieldValue::Record(::std::vec![#(#field_entries),*])
            }
        }
    })
}

/// Parse field options from `#[form(...)]` attributes.
///
/// Accepts `#[form("name")]`, `#[form("name,omitempty")]` and
/// `#[form(rename = "name", omitempty)]`.
fn parse_form_field_options(attrs: &[syn::Attribute]) -> syn::Result<FormFieldOptions> {
    let mut options = FormFieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("form") {
            continue;
        }

        if let Ok(raw) = attr.parse_args::<LitStr>() {
            options.tag = Some(raw.value());
            continue;
        }

        let mut rename = None;
        let mut omit_empty = false;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
                Ok(())
            } else if meta.path.is_ident(OMIT_EMPTY) {
                omit_empty = true;
                Ok(())
            } else {
                Err(meta.error("unknown form attribute, expected `rename` or `omitempty`"))
            }
        })?;

        let Some(rename) = rename else {
            return Err(syn::Error::new_spanned(
                attr,
                "form attribute needs a wire name: #[form(\"name\")] or #[form(rename = \"name\")]",
            ));
        };
        options.tag = Some(if omit_empty {
            format!("{rename},{OMIT_EMPTY}")
        } else {
            rename
        });
    }

    Ok(options)
}

/// Check if a type mentions any of the given type parameters.
fn mentions_any(ty: &Type, params: &[&Ident]) -> bool {
    fn walk(tokens: TokenStream, params: &[&Ident]) -> bool {
        tokens.into_iter().any(|token| match token {
            TokenTree::Ident(ident) => params.iter().any(|param| **param == ident),
            TokenTree::Group(group) => walk(group.stream(), params),
            TokenTree::Punct(_) | TokenTree::Literal(_) => false,
        })
    }
    walk(quote!(#ty), params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(attr: syn::Attribute) -> syn::Result<FormFieldOptions> {
        parse_form_field_options(&[attr])
    }

    #[test]
    fn parse_string_tag() {
        let attr: syn::Attribute = parse_quote!(#[form("str_field")]);
        assert_eq!(
            options(attr).expect("parse").tag.as_deref(),
            Some("str_field")
        );

        let attr: syn::Attribute = parse_quote!(#[form("int_field,omitempty")]);
        assert_eq!(
            options(attr).expect("parse").tag.as_deref(),
            Some("int_field,omitempty")
        );
    }

    #[test]
    fn parse_rename_and_omit_empty() {
        let attr: syn::Attribute = parse_quote!(#[form(rename = "page")]);
        assert_eq!(options(attr).expect("parse").tag.as_deref(), Some("page"));

        let attr: syn::Attribute = parse_quote!(#[form(rename = "page", omitempty)]);
        assert_eq!(
            options(attr).expect("parse").tag.as_deref(),
            Some("page,omitempty")
        );
    }

    #[test]
    fn parse_rejects_missing_name_and_unknown_keys() {
        let attr: syn::Attribute = parse_quote!(#[form(omitempty)]);
        assert!(options(attr).is_err());

        let attr: syn::Attribute = parse_quote!(#[form(rename = "a", flatten)]);
        assert!(options(attr).is_err());
    }

    #[test]
    fn untagged_and_foreign_attributes_are_ignored() {
        let attr: syn::Attribute = parse_quote!(#[serde(rename = "x")]);
        assert_eq!(options(attr).expect("parse"), FormFieldOptions::default());
    }

    #[test]
    fn mentions_type_params() {
        let t: Ident = parse_quote!(T);
        let params = [&t];

        let ty: Type = parse_quote!(Option<T>);
        assert!(mentions_any(&ty, &params));

        let ty: Type = parse_quote!(&'a [T; 3]);
        assert!(mentions_any(&ty, &params));

        let ty: Type = parse_quote!(String);
        assert!(!mentions_any(&ty, &params));
    }

    #[test]
    fn expand_skips_untagged_fields() {
        let input = quote! {
            struct Login {
                #[form("user")]
                user: String,
                password_hash: [u8; 32],
                #[form(rename = "remember", omitempty)]
                remember: bool,
            }
        };
        let output = expand_form_derive(input).expect("expand").to_string();
        assert!(output.contains("\"user\""), "{output}");
        assert!(output.contains("\"remember,omitempty\""), "{output}");
        assert!(!output.contains("password_hash"), "{output}");
    }

    #[test]
    fn expand_bounds_generic_fields() {
        let input = quote! {
            struct Wrapper<T> {
                #[form("value")]
                value: T,
                #[form("label")]
                label: String,
            }
        };
        let output = expand_form_derive(input).expect("expand").to_string();
        assert!(output.contains("where T : :: formwire :: FormValue"), "{output}");
        assert!(!output.contains("String : :: formwire"), "{output}");
    }

    #[test]
    fn expand_rejects_non_structs() {
        let input = quote! {
            enum Choice { A, B }
        };
        assert!(expand_form_derive(input).is_err());

        let input = quote! {
            struct Pair(#[form("a")] u8, #[form("b")] u8);
        };
        assert!(expand_form_derive(input).is_err());
    }
}
