#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace: the error-enum convention and
//! the record-model attribute used to mark types that can be registered with
//! the backend client.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// A high-level attribute macro for defining domain-specific error enums.
///
/// Transforms a plain enum into the workspace error convention with minimal
/// boilerplate.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds
///   `.context()` to any `Result` convertible into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants carrying a
///   `source` field, enabling `?` on upstream errors.
/// * **Internal Fallback**: Provides `From<&str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a
///    `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or
///    a field marked with `#[source]`/`#[from]`.
/// 4. Tuple or unit variants are rejected to keep error wiring explicit.
///
/// # Example
///
/// ```rust,ignore
/// use moor_derive::moor_error;
/// use std::borrow::Cow;
///
/// #[moor_error]
/// pub enum RegistryError {
///     #[error("Decode error{}: {source}", format_context(.context))]
///     Decode {
///         #[source]
///         source: serde_json::Error,
///         context: Option<Cow<'static, str>>,
///     },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn moor_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a record type addressable by a logical class name.
///
/// Marks a struct as a backend record: the struct becomes registrable with the
/// client's class registry and materializable from fetched documents.
///
/// # Injected Behaviors
///
/// * **Derives**: Adds `Debug`, `serde::Serialize`, and `serde::Deserialize`
///   if missing.
/// * **Wire Naming**: Applies `#[serde(rename_all = "camelCase")]` unless the
///   struct already pins a policy (the backend stores camelCase keys).
/// * **Class Identity**: Implements `moor_client::record::{RemoteRecord,
///   RecordClass}` with the logical name from `class = "..."`, defaulting to
///   the struct name.
///
/// # Example
///
/// ```rust,ignore
/// use moor_derive::record_model;
///
/// #[record_model(class = "Post")]
/// pub struct Post {
///     pub caption: String,
///     pub image_url: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn record_model(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::record::expand_record_model(args.into(), input).into()
}
