//! Record typing contract consumed by the class registry.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::any::Any;
use std::fmt::Debug;

/// Type-erased view of a materialized backend record.
///
/// Implemented by `#[record_model]`; used when the caller knows the logical
/// class name but not the concrete type.
pub trait RemoteRecord: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;

    /// The logical class name this record is stored under.
    fn class_name(&self) -> &'static str;
}

/// A concrete record type addressable by its logical class name.
///
/// The serde bounds make the type constructible from fetched documents and
/// serializable back into the backend's wire format.
pub trait RecordClass: RemoteRecord + Serialize + DeserializeOwned + Sized {
    /// The logical name this type registers under. Exactly one record type
    /// may own a given name within a registry.
    const CLASS: &'static str;
}
