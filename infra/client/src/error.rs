use std::borrow::Cow;

/// A specialized [`ClientError`] enum for backend client failures.
///
/// Every variant indicates a programming or packaging defect rather than a
/// transient condition: callers are expected to surface these immediately and
/// halt startup instead of continuing with a partially configured client.
#[moor_derive::moor_error]
pub enum ClientError {
    /// Missing or malformed connection credentials.
    #[error("Invalid client configuration{}: {message}", format_context(.context))]
    Configuration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A logical class name was registered with two different record types.
    #[error(
        "Class `{class}` is already registered as {existing}, refusing {incoming}{}",
        format_context(.context)
    )]
    DuplicateRegistration {
        class: Cow<'static, str>,
        existing: &'static str,
        incoming: &'static str,
        context: Option<Cow<'static, str>>,
    },

    /// The ambient client was installed twice.
    #[error("Backend client is already initialized{}", format_context(.context))]
    AlreadyInitialized { context: Option<Cow<'static, str>> },

    /// The ambient client was queried before installation.
    #[error("Backend client is not initialized{}", format_context(.context))]
    NotInitialized { context: Option<Cow<'static, str>> },

    /// No record type is registered under the requested logical name.
    #[error("No record class registered for `{class}`{}", format_context(.context))]
    UnknownClass { class: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A fetched document could not be materialized into its record type.
    #[error("Record decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal client error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
