use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Inventory</title></head>
<body>
<h1>Inventory</h1>
<ul>
  <li><a href="/register">Register an item</a></li>
  <li><a href="/search">Search by id</a></li>
  <li><a href="/inventory">All items (JSON)</a></li>
  <li><a href="/api-docs">API documentation</a></li>
</ul>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
