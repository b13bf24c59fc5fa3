use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend-assigned identity carried by every persisted record.
///
/// The backend mints `objectId` on first save and maintains the timestamps;
/// records that have never been saved leave all three unset. Wire names are
/// camelCase, matching the backend's document format.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemFields {
    pub object_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SystemFields {
    /// Returns `true` once the backend has assigned an identity.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.object_id.is_some()
    }
}
