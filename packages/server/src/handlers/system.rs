use axum::response::Html;

/// Liveness banner.
pub async fn index() -> Html<&'static str> {
    Html("<h1>Superheroes API</h1>")
}
