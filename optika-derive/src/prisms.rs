//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! This module contains the procedural macro implementation that generates
//! prism constructors for enum variants. Matching moves the payload out of
//! the source, so every variant shape has a total, owned focus.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            generate_enum_prisms(name, generics, &data_enum.variants.iter().collect::<Vec<_>>())
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates prism methods for an enum's variants.
fn generate_enum_prisms(name: &Ident, generics: &Generics, variants: &[&Variant]) -> TokenStream2 {
    let prism_methods: Vec<TokenStream2> = variants
        .iter()
        .map(|variant| generate_variant_prism(variant))
        .collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// The pieces that differ between variant shapes.
struct VariantShape {
    /// The focus type.
    target: TokenStream2,
    /// Pattern matching the variant and binding its fields.
    pattern: TokenStream2,
    /// Expression building the focus from the bound fields.
    focus: TokenStream2,
    /// Pattern destructuring a focus value.
    focus_pattern: TokenStream2,
    /// Expression rebuilding the variant from a destructured focus.
    construct: TokenStream2,
    /// Field types that need `'static` bounds.
    field_types: Vec<Type>,
}

/// Generates a prism method for a single enum variant.
fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let doc = format!("Returns a prism focusing on the `{variant_name}` variant.");

    let VariantShape {
        target,
        pattern,
        focus,
        focus_pattern,
        construct,
        field_types,
    } = variant_shape(variant);

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> ::optika::optics::SimplePrism<Self, #target>
        where
            Self: 'static,
            #(#field_types: 'static,)*
        {
            ::optika::optics::FunctionPrism::new(
                |source: Self| match source {
                    #pattern => ::optika::Either::Right(#focus),
                    #[allow(unreachable_patterns)]
                    other => ::optika::Either::Left(other),
                },
                |#focus_pattern: #target| #construct,
            )
        }
    }
}

/// Describes how to match and rebuild a variant of the given shape.
fn variant_shape(variant: &Variant) -> VariantShape {
    let variant_name = &variant.ident;

    match &variant.fields {
        // Unit variant: e.g., `None` or `Point`
        Fields::Unit => VariantShape {
            target: quote! { () },
            pattern: quote! { Self::#variant_name },
            focus: quote! { () },
            focus_pattern: quote! { () },
            construct: quote! { Self::#variant_name },
            field_types: Vec::new(),
        },

        // Tuple variant with one field: e.g., `Some(T)`
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = fields
                .unnamed
                .iter()
                .map(|field| field.ty.clone())
                .collect::<Vec<_>>();
            let target = quote! { #(#field_type)* };
            VariantShape {
                target,
                pattern: quote! { Self::#variant_name(value) },
                focus: quote! { value },
                focus_pattern: quote! { value },
                construct: quote! { Self::#variant_name(value) },
                field_types: field_type,
            }
        }

        // Tuple variant with several fields: e.g., `Rectangle(f64, f64)`
        Fields::Unnamed(fields) => {
            let field_types: Vec<Type> =
                fields.unnamed.iter().map(|field| field.ty.clone()).collect();
            let bindings: Vec<Ident> = (0..field_types.len())
                .map(|index| format_ident!("v{}", index))
                .collect();
            VariantShape {
                target: quote! { (#(#field_types),*) },
                pattern: quote! { Self::#variant_name(#(#bindings),*) },
                focus: quote! { (#(#bindings),*) },
                focus_pattern: quote! { (#(#bindings),*) },
                construct: quote! { Self::#variant_name(#(#bindings),*) },
                field_types,
            }
        }

        // Struct variant: e.g., `Click { x: i32, y: i32 }`
        Fields::Named(fields) => {
            let field_names: Vec<&Ident> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let field_types: Vec<Type> =
                fields.named.iter().map(|field| field.ty.clone()).collect();
            VariantShape {
                target: quote! { (#(#field_types,)*) },
                pattern: quote! { Self::#variant_name { #(#field_names),* } },
                focus: quote! { (#(#field_names,)*) },
                focus_pattern: quote! { (#(#field_names,)*) },
                construct: quote! { Self::#variant_name { #(#field_names),* } },
                field_types,
            }
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase()
                    || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.push(character.to_lowercase().next().unwrap_or(character));
        } else {
            result.push(character);
        }
    }

    result
}
