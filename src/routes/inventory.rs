use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{AppError, AppResult, OptionExt},
    extract::JsonOrForm,
    routes::upload::{UploadedFile, PHOTO_FIELD},
    state::AppState,
    types::{FieldUpdate, InventoryItem, RegisterForm, UpdateItemRequest},
};

/// Creates an item from a multipart form, storing the optional photo first.
#[utoipa::path(
    post,
    path = "/register",
    tag = "inventory",
    request_body(content = RegisterForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Item created, body names the new id", body = String, content_type = "text/plain"),
        (status = 400, description = "inventory_name missing or empty")
    )
)]
pub async fn register(State(state): State<AppState>, mut multipart: Multipart) -> AppResult<impl IntoResponse> {
    let mut name: Option<String> = None;
    let mut description: Option<String> = None;
    let mut photo: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "inventory_name" => name = Some(field.text().await?),
            "description" => description = Some(field.text().await?),
            PHOTO_FIELD => photo = UploadedFile::from_field(field).await?,
            _ => {}
        }
    }

    let name = name.filter(|n| !n.is_empty()).ok_or_else(|| AppError::missing_field("inventory_name"))?;

    // The record is appended only after the write succeeded; there is no
    // rollback of the file if anything after this point fails.
    let stored_photo = match &photo {
        Some(file) => Some(file.persist(&state).await?),
        None => None,
    };

    let item = state.store.create(name, description.unwrap_or_default(), stored_photo).await;
    state.metrics.inc_items_registered();
    tracing::info!(id = %item.id, name = %item.name, photo = ?item.photo, "Registered inventory item");

    Ok((StatusCode::CREATED, format!("Inventory registered with id {}", item.id)))
}

#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    responses((status = 200, description = "All items in registration order", body = [InventoryItem]))
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<InventoryItem>> {
    Json(state.store.all().await)
}

#[utoipa::path(
    get,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = InventoryItem),
        (status = 404, description = "No item with this id")
    )
)]
pub async fn get_item(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<InventoryItem>> {
    let item = state.store.find_by_id(&id).await.ok_or_not_found(&format!("inventory {}", id))?;
    Ok(Json(item))
}

/// Updates name and description. Empty values leave the stored field as it is.
#[utoipa::path(
    put,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = String, Path, description = "Item id")),
    request_body(
        content(
            (UpdateItemRequest = "application/json"),
            (UpdateItemRequest = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (status = 200, description = "The updated item", body = InventoryItem),
        (status = 404, description = "No item with this id")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrForm(body): JsonOrForm<UpdateItemRequest>,
) -> AppResult<Json<InventoryItem>> {
    let name = FieldUpdate::from(body.inventory_name);
    let description = FieldUpdate::from(body.description);
    let item = state
        .store
        .update(&id, name, description)
        .await
        .ok_or_not_found(&format!("inventory {}", id))?;
    state.metrics.inc_items_updated();
    tracing::info!(id = %item.id, "Updated inventory item");
    Ok(Json(item))
}

/// Removes the record. The photo file, if any, is left in the cache directory.
#[utoipa::path(
    delete,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 200, description = "Deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "No item with this id")
    )
)]
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let removed = state.store.remove_by_id(&id).await.ok_or_not_found(&format!("inventory {}", id))?;
    state.metrics.inc_items_deleted();
    tracing::info!(id = %removed.id, "Deleted inventory item");
    Ok((StatusCode::OK, format!("Inventory {} deleted", removed.id)))
}
