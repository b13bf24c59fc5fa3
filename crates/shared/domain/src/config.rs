use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level application configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub backend: BackendConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Connection settings for the hosted object backend.
///
/// All three values identify the application to the backend; none of them is
/// optional at initialization time. The defaults point at a local development
/// server and deliberately leave the credentials blank so a missing
/// configuration fails loudly during client setup instead of reaching a
/// half-configured backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub server_url: String,
    pub application_id: String,
    pub client_key: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:1337/api".to_owned(),
            application_id: String::new(),
            client_key: String::new(),
        }
    }
}
