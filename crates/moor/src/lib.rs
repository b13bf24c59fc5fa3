//! Facade crate for Moor shared modules.
//! Re-exports domain/kernel primitives and the backend client surface.
//! Keep this crate thin: it should compose other crates, not implement logic.
//!
//! ## Usage
//! - Depend on `moor` and pull common items from [`prelude`].
//! - Register record types and install the ambient client during startup,
//!   before any code queries `moor::client::global()`.

pub use moor_client as client;
pub use moor_domain as domain;
pub use moor_kernel as kernel;

pub mod prelude {
    pub use moor_client::prelude::*;
    pub use moor_domain::config::{AppConfig, BackendConfig};
    pub use moor_domain::record::SystemFields;
    pub use moor_kernel::config::load_config;
}
