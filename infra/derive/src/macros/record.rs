use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{Attribute, Fields, ItemStruct, Lit, LitStr, Meta};

/// Expands the `#[record_model]` attribute macro.
///
/// Injects the serde/Debug derives with camelCase wire naming and implements
/// the record identity traits with the logical class name.
pub fn expand_record_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    let class = match parse_class_literal(args, &input) {
        Ok(class) => class,
        Err(err) => return err,
    };

    if !matches!(input.fields, Fields::Named(_)) {
        return syn::Error::new_spanned(
            &input.ident,
            "record_model only supports structs with named fields",
        )
        .to_compile_error();
    }

    let derive_attr = inject_derives(&input.attrs);
    let rename_attr = if has_rename_all(&input.attrs) {
        quote! {}
    } else {
        quote! { #[serde(rename_all = "camelCase")] }
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        #derive_attr
        #rename_attr
        #input

        #[automatically_derived]
        impl #impl_generics ::moor_client::record::RemoteRecord for #name #ty_generics #where_clause {
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn class_name(&self) -> &'static str {
                <Self as ::moor_client::record::RecordClass>::CLASS
            }
        }

        #[automatically_derived]
        impl #impl_generics ::moor_client::record::RecordClass for #name #ty_generics #where_clause {
            const CLASS: &'static str = #class;
        }
    }
}

fn parse_class_literal(args: TokenStream, input: &ItemStruct) -> Result<LitStr, TokenStream> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut class: Option<LitStr> = None;
    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(
                syn::Error::new_spanned(meta, "Expected `class = \"...\"`").to_compile_error()
            );
        };

        if !name_value.path.is_ident("class") {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "Only `class = \"...\"` is supported",
            )
            .to_compile_error());
        }

        if class.is_some() {
            return Err(syn::Error::new_spanned(name_value, "Duplicate `class = \"...\"` argument")
                .to_compile_error());
        }

        match &name_value.value {
            syn::Expr::Lit(expr_lit) => match &expr_lit.lit {
                Lit::Str(lit) => class = Some(lit.clone()),
                _ => {
                    return Err(syn::Error::new_spanned(
                        &name_value.value,
                        "Expected string literal for `class = \"...\"`",
                    )
                    .to_compile_error());
                },
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    &name_value.value,
                    "Expected string literal for `class = \"...\"`",
                )
                .to_compile_error());
            },
        }
    }

    Ok(class
        .unwrap_or_else(|| LitStr::new(&input.ident.to_string(), proc_macro2::Span::call_site())))
}

fn inject_derives(attrs: &[Attribute]) -> TokenStream {
    let present = existing_derives(attrs);
    let mut wanted = Vec::new();
    if !present.contains("Debug") {
        wanted.push(quote! { Debug });
    }
    if !present.contains("Serialize") {
        wanted.push(quote! { ::serde::Serialize });
    }
    if !present.contains("Deserialize") {
        wanted.push(quote! { ::serde::Deserialize });
    }

    if wanted.is_empty() { quote! {} } else { quote! { #[derive(#(#wanted),*)] } }
}

fn has_rename_all(attrs: &[Attribute]) -> bool {
    let mut found = false;
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                found = true;
                // Consume the value so parsing can continue cleanly.
                let _ = meta.value().and_then(|v| v.parse::<Lit>());
            } else if let Ok(value) = meta.value() {
                let _ = value.parse::<Lit>();
            }
            Ok(())
        });
    }
    found
}

fn existing_derives(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }

        let _ = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.segments.last().map(|seg| seg.ident.to_string()) {
                traits.insert(ident);
            }
            Ok(())
        });
    }

    traits
}
