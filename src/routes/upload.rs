use axum::body::Bytes;
use axum::extract::multipart::Field;

use crate::error::AppResult;
use crate::state::AppState;

/// Multipart field name carrying the photo.
pub const PHOTO_FIELD: &str = "photo";

/// A file part read fully into memory.
#[derive(Debug)]
pub struct UploadedFile {
    pub field: String,
    pub file_name: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    /// Reads a file field. Browsers submit an empty part with no filename
    /// when no file was chosen; that counts as no upload.
    pub async fn from_field(field: Field<'_>) -> AppResult<Option<Self>> {
        let name = field.name().unwrap_or(PHOTO_FIELD).to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        if file_name.is_empty() && bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self { field: name, file_name, bytes }))
    }

    /// Writes the file into the cache directory and returns its stored name.
    pub async fn persist(&self, state: &AppState) -> AppResult<String> {
        let stored = state.photos.save(&self.field, &self.file_name, &self.bytes).await?;
        state.metrics.add_photo(self.bytes.len() as u64);
        Ok(stored)
    }
}
