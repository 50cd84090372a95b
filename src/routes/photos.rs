use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tokio_util::io::ReaderStream;

use crate::{
    error::{AppError, AppResult, OptionExt},
    routes::upload::{UploadedFile, PHOTO_FIELD},
    state::AppState,
    types::{InventoryItem, PhotoUploadForm},
};

/// Served for every stored photo, whatever the uploaded format was.
pub const PHOTO_CONTENT_TYPE: &str = "image/jpeg";

#[utoipa::path(
    get,
    path = "/inventory/{id}/photo",
    tag = "photos",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 200, description = "Raw photo bytes", content_type = "image/jpeg"),
        (status = 404, description = "Item missing or without photo")
    )
)]
pub async fn get_photo(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let item = state.store.find_by_id(&id).await.ok_or_not_found(&format!("inventory {}", id))?;
    let filename = item.photo.ok_or_not_found(&format!("photo for inventory {}", id))?;
    let file = state.photos.open(&filename).await?;
    let body = Body::from_stream(ReaderStream::new(file));
    Ok(([(header::CONTENT_TYPE, PHOTO_CONTENT_TYPE)], body))
}

/// Replaces the item's photo. The old file is not removed.
#[utoipa::path(
    put,
    path = "/inventory/{id}/photo",
    tag = "photos",
    params(("id" = String, Path, description = "Item id")),
    request_body(content = PhotoUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "The updated item", body = InventoryItem),
        (status = 400, description = "No file attached"),
        (status = 404, description = "No item with this id")
    )
)]
pub async fn put_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<InventoryItem>> {
    state.store.find_by_id(&id).await.ok_or_not_found(&format!("inventory {}", id))?;

    let mut upload: Option<UploadedFile> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(PHOTO_FIELD) {
            upload = UploadedFile::from_field(field).await?;
        }
    }
    let upload = upload.ok_or_else(|| AppError::BadRequest("no photo file attached".to_string()))?;

    let stored = upload.persist(&state).await?;
    // The item may have been deleted while the upload was written.
    let item = state.store.set_photo(&id, stored).await.ok_or_not_found(&format!("inventory {}", id))?;
    tracing::info!(id = %item.id, photo = ?item.photo, "Replaced inventory photo");
    Ok(Json(item))
}
