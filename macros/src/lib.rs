//! Derive macros for the Oneway crates
//!
//! This crate provides procedural macros to reduce boilerplate when
//! declaring action enums.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `oneway_core::action::Action` for an action enum
//!
//! # Example
//!
//! ```ignore
//! use oneway_core::action::Action;
//! use oneway_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     AddTodo { text: String },
//!     #[action(rename = "EDIT_TODO")]
//!     UpdateTodo { text: String },
//!     ClearCompleted,
//! }
//!
//! assert_eq!(TodoAction::AddTodo { text: "a".into() }.action_type(), "ADD_TODO");
//! assert_eq!(TodoAction::UpdateTodo { text: "a".into() }.action_type(), "EDIT_TODO");
//! assert_eq!(TodoAction::ACTION_TYPES, &["ADD_TODO", "EDIT_TODO", "CLEAR_COMPLETED"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derive macro for action enums
///
/// Generates:
/// - `impl oneway_core::action::Action` whose `action_type()` returns the
///   variant's tag
/// - an inherent `ACTION_TYPES` constant listing every tag in declaration order
///
/// Tags default to the variant name in SCREAMING_SNAKE_CASE.
///
/// # Attributes
///
/// - `#[action(rename = "TAG")]` - Use `TAG` instead of the derived name
///
/// # Errors
///
/// This macro will produce a compile error if:
/// - Applied to a non-enum type
/// - An `#[action(...)]` attribute is malformed
/// - Two variants end up with the same tag
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut tags: Vec<String> = Vec::with_capacity(data_enum.variants.len());
    let mut arms = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let tag = match rename_of(&variant.attrs) {
            Ok(Some(tag)) => tag,
            Ok(None) => screaming_snake_case(&variant_name.to_string()),
            Err(err) => return err.to_compile_error().into(),
        };

        if tags.contains(&tag) {
            return syn::Error::new_spanned(
                variant,
                format!("action type \"{tag}\" is used by more than one variant"),
            )
            .to_compile_error()
            .into();
        }

        arms.push(match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #tag, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #tag, },
            Fields::Unit => quote! { Self::#variant_name => #tag, },
        });
        tags.push(tag);
    }

    let expanded = quote! {
        impl #impl_generics ::oneway_core::action::Action for #name #ty_generics #where_clause {
            fn action_type(&self) -> &'static str {
                match self {
                    #(#arms)*
                }
            }
        }

        impl #impl_generics #name #ty_generics #where_clause {
            /// Every action type tag, in declaration order
            pub const ACTION_TYPES: &'static [&'static str] = &[#(#tags),*];
        }
    };

    TokenStream::from(expanded)
}

/// Reads `#[action(rename = "...")]` from a variant's attributes
fn rename_of(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                rename = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported action attribute, expected `rename`"))
            }
        })?;
    }
    Ok(rename)
}

/// `AddTodo` -> `ADD_TODO`, `HTTPRequest` -> `HTTP_REQUEST`
///
/// A word starts at an uppercase letter following a lowercase letter or
/// digit, or at the last capital of an acronym run followed by lowercase.
fn screaming_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && ch.is_uppercase() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower) {
                out.push('_');
            }
        }
        out.extend(ch.to_uppercase());
    }
    out
}
