//! Derive macro for error types.
//!
//! Generates `std::fmt::Display` and `std::error::Error` implementations.
//!
//! # Usage
//!
//! ```ignore
//! use ledger_ids_derive::Error;
//!
//! #[derive(Debug, Error)]
//! pub enum ParseError {
//!     #[error("identifier must be exactly {width} bytes")]
//!     Length { width: usize },
//!
//!     #[error("hex: {0}")]
//!     Hex(#[from] HexError),
//!
//!     #[error("value is not a string")]
//!     Format,
//! }
//! ```
//!
//! # Supported Features
//!
//! - Unit variants: `#[error("message")]`
//! - Tuple variants with positional args: `#[error("error: {0}")]`
//! - Struct variants with named args: `#[error("expected {expected}")]`
//! - `#[from]` on the only field of a tuple variant: emits `From<T>` and
//!   reports the field through `Error::source`
//!
//! Fields the message does not mention are bound but left unused, so a
//! message is free to omit any of them.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, format_ident, quote};
use syn::{Data, DeriveInput, Fields, Lit, Meta, parse_macro_input};

/// Derives `Display` and `Error` for an enum or struct.
///
/// Each variant (or the struct itself) must carry an `#[error("...")]`
/// attribute with the display message.
pub fn derive_error(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_error_derive(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_error_derive(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    match &input.data {
        Data::Enum(data_enum) => {
            let mut display_arms = Vec::new();
            let mut source_arms = Vec::new();
            let mut from_impls = Vec::new();

            for variant in &data_enum.variants {
                let ident = &variant.ident;
                let message = extract_error_message(
                    &variant.attrs,
                    ident,
                    &format!("variant `{}`", ident),
                )?;
                display_arms.push(variant_display_arm(ident, &variant.fields, &message));

                if let Some(source_ty) = from_field(&variant.fields)? {
                    source_arms.push(quote! {
                        Self::#ident(source) => ::std::option::Option::Some(
                            source as &(dyn ::std::error::Error + 'static)
                        ),
                    });
                    from_impls.push(quote! {
                        impl #impl_generics ::std::convert::From<#source_ty> for #name #ty_generics #where_clause {
                            fn from(source: #source_ty) -> Self {
                                Self::#ident(source)
                            }
                        }
                    });
                }
            }

            let error_impl = if source_arms.is_empty() {
                quote! {
                    impl #impl_generics ::std::error::Error for #name #ty_generics #where_clause {}
                }
            } else {
                quote! {
                    impl #impl_generics ::std::error::Error for #name #ty_generics #where_clause {
                        fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                            #[allow(unreachable_patterns)]
                            match self {
                                #(#source_arms)*
                                _ => ::std::option::Option::None,
                            }
                        }
                    }
                }
            };

            Ok(quote! {
                impl #impl_generics ::std::fmt::Display for #name #ty_generics #where_clause {
                    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        match self {
                            #(#display_arms)*
                        }
                    }
                }

                #error_impl

                #(#from_impls)*
            })
        }
        Data::Struct(data_struct) => {
            let message =
                extract_error_message(&input.attrs, name, &format!("type `{}`", name))?;
            let display_body = struct_display_body(&data_struct.fields, &message);

            Ok(quote! {
                impl #impl_generics ::std::fmt::Display for #name #ty_generics #where_clause {
                    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        #display_body
                    }
                }

                impl #impl_generics ::std::error::Error for #name #ty_generics #where_clause {}
            })
        }
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            "Error derive does not support unions",
        )),
    }
}

/// Builds the `Display` match arm for one enum variant.
fn variant_display_arm(ident: &syn::Ident, fields: &Fields, message: &str) -> TokenStream2 {
    match fields {
        Fields::Unit => quote! {
            Self::#ident => write!(f, #message),
        },
        Fields::Unnamed(fields) => {
            let message = convert_positional_to_named(message, fields.unnamed.len());
            let mut bindings = Vec::new();
            let mut args = Vec::new();
            for i in 0..fields.unnamed.len() {
                let binding = format_ident!("f{}", i);
                if mentions(&message, &binding.to_string()) {
                    args.push(quote! { #binding = #binding });
                    bindings.push(quote! { #binding });
                } else {
                    bindings.push(quote! { _ });
                }
            }
            quote! {
                Self::#ident(#(#bindings),*) => write!(f, #message #(, #args)*),
            }
        }
        Fields::Named(fields) => {
            let mut bindings = Vec::new();
            let mut args = Vec::new();
            for field in &fields.named {
                let Some(field_name) = &field.ident else {
                    continue;
                };
                if mentions(message, &field_name.to_string()) {
                    args.push(quote! { #field_name = #field_name });
                    bindings.push(quote! { #field_name });
                } else {
                    bindings.push(quote! { #field_name: _ });
                }
            }
            quote! {
                Self::#ident { #(#bindings),* } => write!(f, #message #(, #args)*),
            }
        }
    }
}

/// Builds the `Display::fmt` body for a struct error type.
fn struct_display_body(fields: &Fields, message: &str) -> TokenStream2 {
    match fields {
        Fields::Unit => quote! {
            write!(f, #message)
        },
        Fields::Named(fields) => {
            let args = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .filter(|field_name| mentions(message, &field_name.to_string()))
                .map(|field_name| quote! { #field_name = self.#field_name });
            quote! {
                write!(f, #message #(, #args)*)
            }
        }
        Fields::Unnamed(fields) => {
            let message = convert_positional_to_named(message, fields.unnamed.len());
            let args = (0..fields.unnamed.len())
                .map(|i| (format_ident!("f{}", i), syn::Index::from(i)))
                .filter(|(binding, _)| mentions(&message, &binding.to_string()))
                .map(|(binding, index)| quote! { #binding = self.#index });
            quote! {
                write!(f, #message #(, #args)*)
            }
        }
    }
}

/// Returns the field type when the variant is a single-field tuple marked `#[from]`.
fn from_field(fields: &Fields) -> syn::Result<Option<&syn::Type>> {
    let marked = |field: &syn::Field| field.attrs.iter().any(|attr| attr.path().is_ident("from"));

    match fields {
        Fields::Unnamed(unnamed) => {
            let Some(field) = unnamed.unnamed.iter().find(|field| marked(field)) else {
                return Ok(None);
            };
            if unnamed.unnamed.len() != 1 {
                return Err(syn::Error::new_spanned(
                    field,
                    "#[from] is only supported on tuple variants with exactly one field",
                ));
            }
            Ok(Some(&field.ty))
        }
        Fields::Named(named) => match named.named.iter().find(|field| marked(field)) {
            Some(field) => Err(syn::Error::new_spanned(
                field,
                "#[from] is only supported on tuple variants, e.g. `Io(#[from] std::io::Error)`",
            )),
            None => Ok(None),
        },
        Fields::Unit => Ok(None),
    }
}

/// Extracts the display message from an `#[error("...")]` attribute.
fn extract_error_message<T: ToTokens>(
    attrs: &[syn::Attribute],
    target: &T,
    target_desc: &str,
) -> syn::Result<String> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("error")) else {
        return Err(syn::Error::new_spanned(
            target,
            format!(
                "missing #[error(\"...\")] attribute on {}; every error variant must declare a display message",
                target_desc
            ),
        ));
    };

    let Meta::List(meta_list) = &attr.meta else {
        return Err(syn::Error::new_spanned(
            &attr.meta,
            "invalid #[error] attribute; use #[error(\"message\")] to describe the error",
        ));
    };

    match syn::parse2::<Lit>(meta_list.tokens.clone()) {
        Ok(Lit::Str(lit_str)) => Ok(lit_str.value()),
        Ok(_) => Err(syn::Error::new_spanned(
            &attr.meta,
            "invalid #[error] attribute: message must be a string literal, e.g. #[error(\"invalid length: {0}\")]",
        )),
        Err(_) => Err(syn::Error::new_spanned(
            &attr.meta,
            "failed to parse #[error] attribute; expected a string literal like #[error(\"bad prefix: {0}\")]",
        )),
    }
}

/// True if `message` interpolates `key`, either as `{key}` or `{key:spec}`.
fn mentions(message: &str, key: &str) -> bool {
    message.contains(&format!("{{{}}}", key)) || message.contains(&format!("{{{}:", key))
}

/// Converts positional format args `{0}`, `{1:?}` to named args `{f0}`, `{f1:?}`.
fn convert_positional_to_named(format_str: &str, field_count: usize) -> String {
    let mut result = format_str.to_string();
    for i in (0..field_count).rev() {
        result = result
            .replace(&format!("{{{}}}", i), &format!("{{f{}}}", i))
            .replace(&format!("{{{}:", i), &format!("{{f{}:", i));
    }
    result
}
