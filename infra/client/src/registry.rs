use crate::error::{ClientError, ClientErrorExt};
use crate::record::{RecordClass, RemoteRecord};
use fxhash::FxHashMap;
use serde_json::Value;
use std::any::TypeId;
use tracing::trace;

type DecodeFn = fn(Value) -> Result<Box<dyn RemoteRecord>, serde_json::Error>;

/// A registered mapping from a logical class name to a record type.
///
/// Captures everything the client needs to materialize documents of this
/// class without runtime reflection: the type identity for validation and a
/// monomorphized decode function.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    class: &'static str,
    type_id: TypeId,
    type_name: &'static str,
    decode: DecodeFn,
}

impl ClassDescriptor {
    /// Builds the descriptor for a record type.
    #[must_use]
    pub fn of<T: RecordClass>() -> Self {
        Self {
            class: T::CLASS,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            decode: decode_erased::<T>,
        }
    }

    #[must_use]
    pub const fn class(&self) -> &'static str {
        self.class
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if this descriptor maps to exactly `T`.
    #[must_use]
    pub fn is<T: RecordClass>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

fn decode_erased<T: RecordClass>(value: Value) -> Result<Box<dyn RemoteRecord>, serde_json::Error> {
    serde_json::from_value::<T>(value).map(|record| Box::new(record) as Box<dyn RemoteRecord>)
}

/// The class registry consulted when materializing fetched documents.
///
/// Populated during client construction and frozen afterwards, so lookups on
/// the running client are lock-free. Invariant: each logical name maps to
/// exactly one record type.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: FxHashMap<&'static str, ClassDescriptor>,
}

impl ClassRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under its logical class name.
    ///
    /// Re-registering the same `(name, type)` pair is an idempotent no-op.
    ///
    /// # Errors
    /// Returns [`ClientError::DuplicateRegistration`] if the name is already
    /// owned by a different record type; the registry is left unchanged.
    pub fn register<T: RecordClass>(&mut self) -> Result<(), ClientError> {
        self.insert(ClassDescriptor::of::<T>())
    }

    /// Inserts a pre-built descriptor, applying the duplicate policy.
    ///
    /// # Errors
    /// Returns [`ClientError::DuplicateRegistration`] on a conflicting name.
    pub fn insert(&mut self, descriptor: ClassDescriptor) -> Result<(), ClientError> {
        if let Some(existing) = self.classes.get(descriptor.class) {
            if existing.type_id == descriptor.type_id {
                trace!(class = descriptor.class, "Record class already registered, skipping");
                return Ok(());
            }
            return Err(ClientError::DuplicateRegistration {
                class: descriptor.class.into(),
                existing: existing.type_name,
                incoming: descriptor.type_name,
                context: None,
            });
        }

        trace!(class = descriptor.class, ty = descriptor.type_name, "Record class registered");
        self.classes.insert(descriptor.class, descriptor);
        Ok(())
    }

    /// Looks up the descriptor registered under `class`.
    #[must_use]
    pub fn get(&self, class: &str) -> Option<&ClassDescriptor> {
        self.classes.get(class)
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.values()
    }

    /// Materializes a document into the typed record `T`.
    ///
    /// # Errors
    /// * [`ClientError::UnknownClass`] if `T::CLASS` is not registered, or is
    ///   registered to a different record type.
    /// * [`ClientError::Decode`] if the document does not match `T`'s shape.
    pub fn decode<T: RecordClass>(&self, value: Value) -> Result<T, ClientError> {
        match self.get(T::CLASS) {
            Some(descriptor) if descriptor.is::<T>() => {
                serde_json::from_value::<T>(value).context(T::CLASS)
            },
            Some(descriptor) => Err(ClientError::UnknownClass {
                class: T::CLASS.into(),
                context: Some(format!("`{}` is owned by {}", T::CLASS, descriptor.type_name).into()),
            }),
            None => Err(ClientError::UnknownClass { class: T::CLASS.into(), context: None }),
        }
    }

    /// Materializes a document of the given logical class into a type-erased
    /// record, using the decode function captured at registration.
    ///
    /// # Errors
    /// * [`ClientError::UnknownClass`] if `class` is not registered.
    /// * [`ClientError::Decode`] if the document does not match the registered
    ///   type's shape.
    pub fn decode_any(&self, class: &str, value: Value) -> Result<Box<dyn RemoteRecord>, ClientError> {
        let descriptor = self
            .get(class)
            .ok_or_else(|| ClientError::UnknownClass { class: class.to_owned().into(), context: None })?;
        (descriptor.decode)(value).context(descriptor.type_name)
    }
}
