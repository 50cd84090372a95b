//! OpenAPI document built from the `#[utoipa::path]` annotations on the handlers,
//! plus a small HTML page that renders it.

use axum::{response::Html, Json};
use utoipa::OpenApi;

use crate::routes::{inventory, photos, search};
use crate::types::{InventoryItem, PhotoUploadForm, RegisterForm, SearchRequest, UpdateItemRequest};

#[derive(OpenApi)]
#[openapi(
    info(title = "Inventory Server", description = "Register, list, search, update and delete inventory items."),
    paths(
        inventory::register,
        inventory::list_items,
        inventory::get_item,
        inventory::update_item,
        inventory::delete_item,
        photos::get_photo,
        photos::put_photo,
        search::search,
    ),
    components(schemas(InventoryItem, UpdateItemRequest, SearchRequest, RegisterForm, PhotoUploadForm)),
    tags(
        (name = "inventory", description = "Item records"),
        (name = "photos", description = "Photo attachments")
    )
)]
pub struct ApiDoc;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

const DOCS_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Inventory API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
  window.onload = () => { window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" }); };
</script>
</body>
</html>
"##;

pub async fn docs_page() -> Html<&'static str> {
    Html(DOCS_HTML)
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
