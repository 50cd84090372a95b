use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    /// Creation timestamp in milliseconds, unique within a process run.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Stored filename inside the cache directory.
    pub photo: Option<String>,
}

/// Requested change for one mutable field.
///
/// Only `Value` overwrites; an empty string is treated like an absent field,
/// so a field can never be cleared through an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Absent,
    Empty,
    Value(String),
}

impl FieldUpdate {
    pub fn apply(self, target: &mut String) -> bool {
        match self {
            FieldUpdate::Value(v) => {
                *target = v;
                true
            }
            FieldUpdate::Absent | FieldUpdate::Empty => false,
        }
    }
}

impl From<Option<String>> for FieldUpdate {
    fn from(value: Option<String>) -> Self {
        match value {
            None => FieldUpdate::Absent,
            Some(v) if v.is_empty() => FieldUpdate::Empty,
            Some(v) => FieldUpdate::Value(v),
        }
    }
}

/// Body of `PUT /inventory/{id}`, accepted as JSON or urlencoded form.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub inventory_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `POST /search`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(default)]
    pub id: Option<String>,
    /// `on`, `true` or `1` enable the photo link.
    #[serde(default)]
    pub has_photo: Option<String>,
}

impl SearchRequest {
    pub fn wants_photo_link(&self) -> bool {
        matches!(
            self.has_photo.as_deref().map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("on" | "true" | "1")
        )
    }
}

// Documentation-only shapes for multipart bodies.

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct RegisterForm {
    pub inventory_name: String,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub photo: Option<Vec<u8>>,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct PhotoUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub photo: Vec<u8>,
}
