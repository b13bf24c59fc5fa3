//! # Moor Feed
//!
//! Startup glue for the feed application: defines the record model stored by
//! the hosted backend and installs the ambient client during process startup.
//!
//! ## Example
//! ```rust,no_run
//! use moor::prelude::*;
//!
//! # fn main() -> Result<(), ClientError> {
//! let cfg = AppConfig::default();
//! let _client = moor_feed::bootstrap(&cfg)?;
//! # Ok(())
//! # }
//! ```

use moor::prelude::*;

/// A feed post as stored by the backend.
#[record_model(class = "Post")]
#[derive(Clone)]
pub struct Post {
    #[serde(flatten)]
    pub system: SystemFields,
    pub author: String,
    pub caption: String,
    pub image_url: String,
}

/// Registers the application's record types and installs the ambient backend
/// client. Registration completes before the configuration is applied; the
/// client validates types against the registry during setup.
///
/// # Errors
/// Returns [`ClientError`] if the configuration is missing or malformed, or
/// if the ambient client has already been installed.
pub fn bootstrap(cfg: &AppConfig) -> Result<Client, ClientError> {
    Client::builder().register::<Post>().config(&cfg.backend).install()
}
