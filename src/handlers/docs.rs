use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};

use crate::handlers::books::AppState;

/// Bundled OpenAPI document describing the books API
const OPENAPI_DOCUMENT: &str = include_str!("../../openapi.yaml");

/// Swagger UI page template; `__SPEC_URL__` is replaced with the URL the
/// OpenAPI document is mounted at
const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Library API</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {
            SwaggerUIBundle({
                url: "__SPEC_URL__",
                dom_id: "#swagger-ui",
            });
        };
    </script>
</body>
</html>
"##;

/// Handle GET on the docs path
///
/// Serves a Swagger UI page pointed at the bundled OpenAPI document.
pub async fn docs_index(State(state): State<AppState>) -> Html<String> {
    let spec_url = format!("{}/openapi.yaml", state.config.docs.path);
    Html(DOCS_PAGE.replace("__SPEC_URL__", &spec_url))
}

/// Handle GET on `<docs path>/openapi.yaml`
pub async fn openapi_document() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/yaml")],
        OPENAPI_DOCUMENT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, store::BookStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_docs_index_links_openapi_document() {
        let state = AppState {
            config: Arc::new(Config::default()),
            store: Arc::new(BookStore::new()),
        };

        let Html(page) = docs_index(State(state)).await;
        assert!(page.contains("swagger-ui"));
        assert!(page.contains("/docs/openapi.yaml"));
    }

    #[tokio::test]
    async fn test_docs_index_honors_configured_path() {
        let mut config = Config::default();
        config.docs.path = "/api-docs".to_string();
        let state = AppState {
            config: Arc::new(config),
            store: Arc::new(BookStore::new()),
        };

        let Html(page) = docs_index(State(state)).await;
        assert!(page.contains("/api-docs/openapi.yaml"));
    }

    #[tokio::test]
    async fn test_openapi_document_is_yaml() {
        let response = openapi_document().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/yaml"
        );
    }

    #[test]
    fn test_openapi_document_covers_books_routes() {
        assert!(OPENAPI_DOCUMENT.contains("/books"));
        assert!(OPENAPI_DOCUMENT.contains("/books/{id}"));
    }
}
