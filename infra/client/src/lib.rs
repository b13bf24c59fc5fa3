//! # Backend Client Infrastructure
//!
//! This crate provides the typed bootstrap for the hosted object backend:
//! credential configuration, logical-name → record-type registration, and the
//! process-wide ambient context other code queries after startup.
//!
//! ## Key Pieces
//! - **[`ClientBuilder`]**: fluent configuration + model registration;
//!   registrations are applied before the credentials are validated.
//! - **[`ClassRegistry`]**: the frozen mapping consulted when materializing
//!   fetched documents into typed records.
//! - **[`Client`]**: an explicit, cheaply clonable context object. Tests
//!   construct isolated contexts; applications install one ambient context.
//!
//! ## Bootstrap
//!
//! ```rust,no_run
//! use moor_client::prelude::*;
//! use moor_domain::config::BackendConfig;
//!
//! #[record_model(class = "Post")]
//! struct Post {
//!     caption: String,
//! }
//!
//! # fn main() -> Result<(), ClientError> {
//! let cfg = BackendConfig {
//!     server_url: "https://records.example.com/api".to_owned(),
//!     application_id: "app1".to_owned(),
//!     client_key: "key1".to_owned(),
//! };
//!
//! Client::builder().config(&cfg).register::<Post>().install()?;
//!
//! assert_eq!(moor_client::state(), ClientState::Ready);
//! let ambient = moor_client::global()?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod engine;
mod error;
pub mod record;
mod registry;

pub use builder::ClientBuilder;
pub use engine::Client;
pub use error::{ClientError, ClientErrorExt};
pub use moor_derive::record_model;
pub use registry::{ClassDescriptor, ClassRegistry};

pub mod prelude {
    pub use crate::builder::ClientBuilder;
    pub use crate::engine::Client;
    pub use crate::error::{ClientError, ClientErrorExt};
    pub use crate::record::{RecordClass, RemoteRecord};
    pub use crate::registry::{ClassDescriptor, ClassRegistry};
    pub use crate::{ClientState, global, state, try_global};
    pub use moor_derive::record_model;
}

use std::sync::OnceLock;
use tracing::info;

/// The ambient process-wide client, set at most once per process.
static AMBIENT: OnceLock<Client> = OnceLock::new();

/// Observable lifecycle of the ambient client.
///
/// The transition is one-way: once `Ready`, the process never returns to
/// `Uninitialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    Uninitialized,
    Ready,
}

/// Current state of the ambient client.
#[must_use]
pub fn state() -> ClientState {
    if AMBIENT.get().is_some() { ClientState::Ready } else { ClientState::Uninitialized }
}

/// Publishes a built context as the ambient client.
///
/// Guarded by a one-time-execution primitive: when several threads race the
/// startup path, exactly one wins and the others observe the error.
///
/// # Errors
/// Returns [`ClientError::AlreadyInitialized`] if the transition already
/// happened; the previously installed context is left untouched.
pub(crate) fn install(client: &Client) -> Result<(), ClientError> {
    AMBIENT
        .set(client.clone())
        .map_err(|_| ClientError::AlreadyInitialized { context: None })?;
    info!(instance = %client.instance_id(), "Ambient backend client ready");
    Ok(())
}

/// Returns the ambient client.
///
/// # Errors
/// Returns [`ClientError::NotInitialized`] before the bootstrap has run.
pub fn global() -> Result<Client, ClientError> {
    AMBIENT.get().cloned().ok_or(ClientError::NotInitialized { context: None })
}

/// Returns the ambient client if the bootstrap has run.
#[must_use]
pub fn try_global() -> Option<Client> {
    AMBIENT.get().cloned()
}
