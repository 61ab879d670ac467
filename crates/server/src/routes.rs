//! HTTP routes of the read API.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /api/widget/kb/:id` | knowledge base with ordered categories |
//! | `GET /api/widget/categories/:id` | categories of a knowledge base |
//! | `GET /api/widget/articles/:id` | articles of a category, newest first |
//! | `GET /api/widget/article/:id` | a single article |
//! | `GET /article/:id` | public article page |
//! | `GET /widget.css` | widget stylesheet |
//! | `GET /health` | `ok` |
//!
//! Unknown ids yield `404` with a JSON body `{ "error", "code" }`. Every
//! response allows cross-origin reads, since widgets run on third-party
//! pages.

use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use kbw_protocol::{API_PREFIX, Article, Category, KnowledgeBase};
use kbw_widget::STYLESHEET;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::debug;

use crate::page::{STYLESHEET_PATH, render_article_page, render_not_found_page};
use crate::store::ContentStore;

pub type SharedState = Arc<ContentStore>;

/// A lookup that found nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    KnowledgeBaseNotFound,
    CategoryNotFound,
    ArticleNotFound,
}

impl ApiError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::KnowledgeBaseNotFound => "KB_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::ArticleNotFound => "ARTICLE_NOT_FOUND",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::KnowledgeBaseNotFound => "Knowledge base not found",
            Self::CategoryNotFound => "Category not found",
            Self::ArticleNotFound => "Article not found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": self.message(), "code": self.code() })),
        )
            .into_response()
    }
}

/// Builds the application router.
///
/// When `assets_dir` is given, unmatched paths are served from it, which is
/// where the loader script and the widget bundle live.
pub fn build_router(store: ContentStore, assets_dir: Option<&FsPath>) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route(&api_route("kb"), get(get_knowledge_base))
        .route(&api_route("categories"), get(get_categories))
        .route(&api_route("articles"), get(get_articles))
        .route(&api_route("article"), get(get_article))
        .route("/article/:id", get(article_page))
        .route(STYLESHEET_PATH, get(stylesheet))
        .with_state(Arc::new(store));

    let router = match assets_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(CorsLayer::permissive())
}

fn api_route(segment: &str) -> String {
    format!("{API_PREFIX}/{segment}/:id")
}

async fn health() -> &'static str {
    "ok"
}

async fn get_knowledge_base(
    State(store): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<KnowledgeBase>, ApiError> {
    store
        .knowledge_base(&id)
        .map(Json)
        .ok_or_else(|| not_found(ApiError::KnowledgeBaseNotFound, &id))
}

async fn get_categories(
    State(store): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Category>>, ApiError> {
    store
        .categories(&id)
        .map(Json)
        .ok_or_else(|| not_found(ApiError::KnowledgeBaseNotFound, &id))
}

async fn get_articles(
    State(store): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Article>>, ApiError> {
    store
        .articles(&id)
        .map(Json)
        .ok_or_else(|| not_found(ApiError::CategoryNotFound, &id))
}

async fn get_article(
    State(store): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    store
        .article(&id)
        .map(Json)
        .ok_or_else(|| not_found(ApiError::ArticleNotFound, &id))
}

async fn article_page(State(store): State<SharedState>, Path(id): Path<String>) -> Response {
    match store.article(&id) {
        Some(article) => Html(render_article_page(&article)).into_response(),
        None => (StatusCode::NOT_FOUND, Html(render_not_found_page())).into_response(),
    }
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

fn not_found(error: ApiError, id: &str) -> ApiError {
    debug!(code = error.code(), id, "lookup failed");
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_router(ContentStore::demo(), None)
    }

    async fn get(app: Router, uri: &str) -> Response {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_check() {
        let response = get(test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }

    #[tokio::test]
    async fn knowledge_base_has_ordered_categories() {
        let response = get(test_app(), "/api/widget/kb/kb-demo").await;
        assert_eq!(response.status(), StatusCode::OK);

        let kb: KnowledgeBase = body_json(response).await;
        assert_eq!(kb.name, "Acme Help Center");
        let ids: Vec<&str> = kb.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["cat-start", "cat-billing", "cat-empty"]);
    }

    #[tokio::test]
    async fn categories_of_knowledge_base() {
        let response = get(test_app(), "/api/widget/categories/kb-demo").await;
        assert_eq!(response.status(), StatusCode::OK);

        let categories: Vec<Category> = body_json(response).await;
        assert_eq!(categories.len(), 3);
        assert!(categories.iter().all(|c| c.knowledge_base_id == "kb-demo"));
    }

    #[tokio::test]
    async fn articles_are_newest_first() {
        let response = get(test_app(), "/api/widget/articles/cat-start").await;
        assert_eq!(response.status(), StatusCode::OK);

        let articles: Vec<Article> = body_json(response).await;
        let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["art-invite", "art-signup"]);
    }

    #[tokio::test]
    async fn empty_category_is_an_empty_list() {
        let response = get(test_app(), "/api/widget/articles/cat-empty").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "[]");
    }

    #[tokio::test]
    async fn article_is_served_unsanitized() {
        let response = get(test_app(), "/api/widget/article/art-refunds").await;
        assert_eq!(response.status(), StatusCode::OK);

        let article: Article = body_json(response).await;
        assert!(article.content.contains("<script>"));
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        for (uri, code) in [
            ("/api/widget/kb/nope", "KB_NOT_FOUND"),
            ("/api/widget/categories/nope", "KB_NOT_FOUND"),
            ("/api/widget/articles/nope", "CATEGORY_NOT_FOUND"),
            ("/api/widget/article/nope", "ARTICLE_NOT_FOUND"),
        ] {
            let response = get(test_app(), uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");

            let body: serde_json::Value = body_json(response).await;
            assert_eq!(body["code"], code, "{uri}");
            assert!(body["error"].is_string());
        }
    }

    #[tokio::test]
    async fn encoded_ids_are_decoded() {
        let json = r#"{
            "knowledge_bases": [{ "id": "kb one", "name": "Spaced" }]
        }"#;
        let app = build_router(ContentStore::from_json(json).unwrap(), None);
        let response = get(app, "/api/widget/kb/kb%20one").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn article_page_is_sanitized_html() {
        let response = get(test_app(), "/article/art-refunds").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Requesting a refund"));
        assert!(html.contains("We reply within one business day."));
        assert!(!html.contains("<script"));
    }

    #[tokio::test]
    async fn unknown_article_page_is_not_found() {
        let response = get(test_app(), "/article/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Article not found"));
    }

    #[tokio::test]
    async fn stylesheet_is_css() {
        let response = get(test_app(), "/widget.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/css; charset=utf-8"
        );
        assert_eq!(body_string(response).await, STYLESHEET);
    }

    #[tokio::test]
    async fn cross_origin_reads_are_allowed() {
        let request = Request::builder()
            .uri("/api/widget/kb/kb-demo")
            .header(header::ORIGIN, "https://shop.example.com")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn assets_dir_serves_bundle() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("loader.js"), "/* loader */").unwrap();
        let app = build_router(ContentStore::demo(), Some(dir.path()));

        let response = get(app.clone(), "/loader.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "/* loader */");

        let response = get(app, "/missing.js").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unmatched_path_without_assets_is_not_found() {
        let response = get(test_app(), "/widget.js").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
