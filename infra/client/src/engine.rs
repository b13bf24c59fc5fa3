use crate::builder::ClientBuilder;
use crate::error::ClientError;
use crate::record::{RecordClass, RemoteRecord};
use crate::registry::{ClassDescriptor, ClassRegistry};
use moor_domain::config::BackendConfig;
use moor_kernel::safe_nanoid;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Inner state of the [`Client`] wrapper.
#[derive(Debug)]
pub(crate) struct ClientInner {
    config: BackendConfig,
    registry: ClassRegistry,
    instance_id: String,
}

impl Drop for ClientInner {
    fn drop(&mut self) {
        info!(instance = %self.instance_id, "Backend client context dropped");
    }
}

/// The configured backend client context.
///
/// Wraps the immutable credential configuration and the frozen class registry
/// in an [`Arc`], making it cheaply clonable and safe to share across
/// threads. Construct one through [`Client::builder`]; tests build isolated
/// contexts, applications usually `install()` the ambient one.
///
/// ### Example
/// ```rust
/// use moor_client::prelude::*;
///
/// #[record_model(class = "Post")]
/// struct Post {
///     caption: String,
/// }
///
/// # fn main() -> Result<(), ClientError> {
/// let client = Client::builder()
///     .server_url("https://records.example.com/api")
///     .application_id("app1")
///     .client_key("key1")
///     .register::<Post>()
///     .build()?;
///
/// let post: Post = client.decode(serde_json::json!({ "caption": "hello" }))?;
/// assert_eq!(post.caption, "hello");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    /// Returns a new [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Assembles the context from validated parts; each context gets a fresh
    /// client-generated instance id for log correlation.
    pub(crate) fn assemble(config: BackendConfig, registry: ClassRegistry) -> Self {
        let instance_id = safe_nanoid!(22);
        Self { inner: Arc::new(ClientInner { config, registry, instance_id }) }
    }

    /// The full credential configuration, exactly as supplied.
    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.inner.config.server_url
    }

    #[must_use]
    pub fn application_id(&self) -> &str {
        &self.inner.config.application_id
    }

    #[must_use]
    pub fn client_key(&self) -> &str {
        &self.inner.config.client_key
    }

    /// Client-generated id for this context, minted at build time.
    #[must_use]
    pub fn instance_id(&self) -> &str {
        &self.inner.instance_id
    }

    /// The frozen class registry.
    #[must_use]
    pub fn registry(&self) -> &ClassRegistry {
        &self.inner.registry
    }

    /// Looks up the descriptor registered under a logical class name.
    #[must_use]
    pub fn descriptor(&self, class: &str) -> Option<&ClassDescriptor> {
        self.inner.registry.get(class)
    }

    /// Materializes a fetched document into the typed record `T`.
    ///
    /// # Errors
    /// * [`ClientError::UnknownClass`] if `T::CLASS` is not registered with
    ///   this context.
    /// * [`ClientError::Decode`] if the document does not match `T`'s shape.
    pub fn decode<T: RecordClass>(&self, value: Value) -> Result<T, ClientError> {
        self.inner.registry.decode(value)
    }

    /// Materializes a fetched document of the given logical class into a
    /// type-erased record.
    ///
    /// # Errors
    /// * [`ClientError::UnknownClass`] if `class` is not registered.
    /// * [`ClientError::Decode`] if the document does not match the
    ///   registered type's shape.
    pub fn decode_any(
        &self,
        class: &str,
        value: Value,
    ) -> Result<Box<dyn RemoteRecord>, ClientError> {
        self.inner.registry.decode_any(class, value)
    }
}
