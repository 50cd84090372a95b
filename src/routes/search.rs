use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppResult, OptionExt},
    extract::JsonOrForm,
    state::AppState,
    types::{InventoryItem, SearchRequest},
};

/// Marker placed in front of the photo link inside a search result's description.
pub const PHOTO_LINK_MARKER: &str = "Photo: ";

/// Description with a pointer to the photo endpoint appended.
pub fn with_photo_link(description: &str, id: &str) -> String {
    let link = format!("{}/inventory/{}/photo", PHOTO_LINK_MARKER, id);
    if description.is_empty() {
        link
    } else {
        format!("{}\n{}", description, link)
    }
}

/// Looks an item up by exact id. With `has_photo` set and a photo present,
/// the returned description links to the photo; the stored item is unchanged.
#[utoipa::path(
    post,
    path = "/search",
    tag = "inventory",
    request_body(
        content(
            (SearchRequest = "application/x-www-form-urlencoded"),
            (SearchRequest = "application/json")
        )
    ),
    responses(
        (status = 200, description = "The matching item", body = InventoryItem),
        (status = 400, description = "id missing"),
        (status = 404, description = "No item with this id")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<SearchRequest>,
) -> AppResult<Json<InventoryItem>> {
    state.metrics.inc_searches();
    let id = req
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::missing_field("id"))?;

    let mut item = state.store.find_by_id(id).await.ok_or_not_found(&format!("inventory {}", id))?;
    if req.wants_photo_link() && item.photo.is_some() {
        item.description = with_photo_link(&item.description, &item.id);
    }
    tracing::debug!(id = %item.id, "Search hit");
    Ok(Json(item))
}
