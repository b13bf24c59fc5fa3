use crate::engine::Client;
use crate::error::ClientError;
use crate::record::RecordClass;
use crate::registry::{ClassDescriptor, ClassRegistry};
use moor_domain::config::BackendConfig;
use tracing::info;
use url::Url;

/// A fluent builder for configuring and initializing the backend [`Client`].
///
/// Model registrations collected here are applied to the registry **before**
/// the credential configuration is validated, so the configuration step can
/// rely on a complete registry. Both finishers enforce that ordering by
/// construction.
#[must_use = "builders do nothing unless you call .build() or .install()"]
#[derive(Debug, Default)]
pub struct ClientBuilder {
    server_url: Option<String>,
    application_id: Option<String>,
    client_key: Option<String>,
    registrations: Vec<ClassDescriptor>,
}

impl ClientBuilder {
    /// Creates a new [`ClientBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies all three credentials from a [`BackendConfig`].
    pub fn config(mut self, cfg: &BackendConfig) -> Self {
        self.server_url = Some(cfg.server_url.clone());
        self.application_id = Some(cfg.application_id.clone());
        self.client_key = Some(cfg.client_key.clone());
        self
    }

    /// Sets the backend server URL.
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Sets the application identifier.
    pub fn application_id(mut self, id: impl Into<String>) -> Self {
        self.application_id = Some(id.into());
        self
    }

    /// Sets the client credential.
    pub fn client_key(mut self, key: impl Into<String>) -> Self {
        self.client_key = Some(key.into());
        self
    }

    /// Queues `T` for registration under its logical class name.
    pub fn register<T: RecordClass>(mut self) -> Self {
        self.registrations.push(ClassDescriptor::of::<T>());
        self
    }

    /// Consumes the builder and constructs an isolated client context.
    ///
    /// # Process
    /// 1. Applies every queued model registration to a fresh registry,
    ///    enforcing the one-type-per-name invariant.
    /// 2. Validates the credentials: all three strings non-blank, the server
    ///    URL an absolute `http`/`https` URL.
    /// 3. Assembles the immutable client context.
    ///
    /// # Errors
    /// * [`ClientError::DuplicateRegistration`] if a logical name is claimed
    ///   by two different record types.
    /// * [`ClientError::Configuration`] if a credential is missing or blank,
    ///   or the server URL is malformed.
    pub fn build(self) -> Result<Client, ClientError> {
        let mut registry = ClassRegistry::new();
        for descriptor in self.registrations {
            registry.insert(descriptor)?;
        }

        let config = validate_config(BackendConfig {
            server_url: self.server_url.unwrap_or_default(),
            application_id: self.application_id.unwrap_or_default(),
            client_key: self.client_key.unwrap_or_default(),
        })?;

        let client = Client::assemble(config, registry);
        info!(
            server_url = %client.server_url(),
            application_id = %client.application_id(),
            classes = client.registry().len(),
            instance = %client.instance_id(),
            "Backend client configured"
        );

        Ok(client)
    }

    /// Consumes the builder and installs the built client as the ambient
    /// process-wide context (the `Uninitialized → Ready` transition).
    ///
    /// # Errors
    /// Everything [`ClientBuilder::build`] returns, plus
    /// [`ClientError::AlreadyInitialized`] if the transition already
    /// happened; a rejected install leaves the ambient state untouched.
    pub fn install(self) -> Result<Client, ClientError> {
        let client = self.build()?;
        crate::install(&client)?;
        Ok(client)
    }
}

fn validate_config(config: BackendConfig) -> Result<BackendConfig, ClientError> {
    require_non_blank(&config.server_url, "server_url")?;
    require_non_blank(&config.application_id, "application_id")?;
    require_non_blank(&config.client_key, "client_key")?;

    let url = Url::parse(&config.server_url).map_err(|e| ClientError::Configuration {
        message: format!("Invalid server URL `{}`: {e}", config.server_url).into(),
        context: None,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Configuration {
            message: format!("Unsupported server URL scheme `{}`", url.scheme()).into(),
            context: Some(config.server_url.into()),
        });
    }

    Ok(config)
}

fn require_non_blank(value: &str, field: &'static str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::Configuration {
            message: format!("`{field}` is required").into(),
            context: None,
        });
    }
    Ok(())
}
