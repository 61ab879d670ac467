//! HTTP implementation of the read API.
//!
//! This module provides the [`HttpApiClient`] struct, a thin wrapper around
//! [`reqwest::Client`] rooted at the origin the widget was served from.

use async_trait::async_trait;
use kbw_protocol::{Article, Category, Endpoint, KnowledgeBase};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::api::{Asset, AssetLoader, WidgetApi};
use crate::error::{Error, Result};

/// Read API client over HTTP.
///
/// Requests are unauthenticated GETs. There is no caching and no retry: a
/// failed request is reported once and the caller decides what to show.
///
/// # Examples
///
/// ```no_run
/// use kbw_client::{HttpApiClient, WidgetApi};
///
/// # async fn example() -> kbw_client::Result<()> {
/// let client = HttpApiClient::new("https://kb.example.com")?;
/// let kb = client.fetch_knowledge_base("kb-1").await?;
/// println!("{} has {} categories", kb.name, kb.categories.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    /// The underlying HTTP client.
    http: reqwest::Client,
    /// Base URL every endpoint path is appended to.
    base_url: Url,
}

impl HttpApiClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if the URL does not parse or cannot
    /// carry a path (e.g. `mailto:`).
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client that reuses an existing [`reqwest::Client`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] under the same conditions as
    /// [`HttpApiClient::new`].
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the absolute URL of an endpoint.
    ///
    /// The endpoint path is appended to the base URL, so a base with a path
    /// prefix (`https://host/kb`) keeps it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if the joined URL does not parse.
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url> {
        let joined = format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint.path()
        );
        Url::parse(&joined).map_err(|e| Error::InvalidBaseUrl {
            url: joined,
            reason: e.to_string(),
        })
    }

    #[instrument(skip(self), fields(endpoint = %endpoint))]
    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let resource = endpoint.resource_name();
        let url = self.endpoint_url(&endpoint)?;
        debug!(%url, "fetching");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(error = %e, "request failed");
            Error::load(resource, e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "unexpected status");
            return Err(Error::load(resource, format!("HTTP {status}")));
        }

        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, "invalid response body");
            Error::load(resource, e.to_string())
        })
    }
}

#[async_trait]
impl WidgetApi for HttpApiClient {
    async fn fetch_knowledge_base(&self, id: &str) -> Result<KnowledgeBase> {
        self.get_json(Endpoint::KnowledgeBase(id.to_string())).await
    }

    async fn fetch_categories(&self, knowledge_base_id: &str) -> Result<Vec<Category>> {
        self.get_json(Endpoint::Categories(knowledge_base_id.to_string()))
            .await
    }

    async fn fetch_articles(&self, category_id: &str) -> Result<Vec<Article>> {
        self.get_json(Endpoint::Articles(category_id.to_string()))
            .await
    }

    async fn fetch_article(&self, id: &str) -> Result<Article> {
        self.get_json(Endpoint::Article(id.to_string())).await
    }
}

#[async_trait]
impl AssetLoader for HttpApiClient {
    #[instrument(skip(self), fields(url = %url))]
    async fn load_asset(&self, url: &Url, asset: Asset) -> Result<()> {
        let resource = asset.resource_name();
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::load(resource, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), ?asset, "asset unavailable");
            return Err(Error::load(resource, format!("HTTP {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::load(resource, e.to_string()))?;
        debug!(bytes = body.len(), ?asset, "asset loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
    use kbw_protocol::dummy::{dummy_articles, dummy_knowledge_base};

    /// Serves a fixed API on an ephemeral port and returns its base URL.
    async fn spawn_api() -> String {
        let app = Router::new()
            .route(
                "/api/widget/kb/:id",
                get(|Path(id): Path<String>| async move {
                    if id == "kb-demo" {
                        Ok(Json(dummy_knowledge_base()))
                    } else {
                        Err(StatusCode::NOT_FOUND)
                    }
                }),
            )
            .route(
                "/api/widget/categories/:id",
                get(|| async { Json(dummy_knowledge_base().categories) }),
            )
            .route(
                "/api/widget/articles/:id",
                get(|Path(id): Path<String>| async move {
                    Json(
                        dummy_articles()
                            .into_iter()
                            .filter(|a| a.category_id == id)
                            .collect::<Vec<_>>(),
                    )
                }),
            )
            .route(
                "/api/widget/article/:id",
                get(|| async { (StatusCode::OK, "this is not json") }),
            )
            .route("/widget.css", get(|| async { ".kb-widget {}" }))
            .route(
                "/widget.js",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn new_rejects_unparseable_url() {
        let err = HttpApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
    }

    #[test]
    fn new_rejects_cannot_be_a_base() {
        let err = HttpApiClient::new("mailto:help@example.com").unwrap_err();
        assert!(err.to_string().contains("cannot carry a path"));
    }

    #[test]
    fn endpoint_url_keeps_base_path() {
        let client = HttpApiClient::new("https://example.com/kb/").unwrap();
        let url = client
            .endpoint_url(&Endpoint::Articles("cat 1".into()))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/kb/api/widget/articles/cat%201"
        );
    }

    #[tokio::test]
    async fn fetch_knowledge_base_decodes_json() {
        let client = HttpApiClient::new(&spawn_api().await).unwrap();
        let kb = client.fetch_knowledge_base("kb-demo").await.unwrap();
        assert_eq!(kb.name, "Acme Help Center");
        assert_eq!(kb.categories.len(), 3);
    }

    #[tokio::test]
    async fn fetch_knowledge_base_not_found_is_load_error() {
        let client = HttpApiClient::new(&spawn_api().await).unwrap();
        let err = client.fetch_knowledge_base("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "failed to load knowledge base");
    }

    #[tokio::test]
    async fn fetch_categories_and_articles() {
        let client = HttpApiClient::new(&spawn_api().await).unwrap();

        let categories = client.fetch_categories("kb-demo").await.unwrap();
        assert_eq!(categories.len(), 3);

        let articles = client.fetch_articles("cat-start").await.unwrap();
        assert_eq!(articles.len(), 2);
        assert!(articles.iter().all(|a| a.category_id == "cat-start"));
    }

    #[tokio::test]
    async fn fetch_article_with_invalid_body_is_load_error() {
        let client = HttpApiClient::new(&spawn_api().await).unwrap();
        let err = client.fetch_article("art-signup").await.unwrap_err();
        assert_eq!(err.to_string(), "failed to load article");
    }

    #[tokio::test]
    async fn load_asset_checks_status() {
        let base = spawn_api().await;
        let client = HttpApiClient::new(&base).unwrap();

        let css = Url::parse(&format!("{base}/widget.css")).unwrap();
        client.load_asset(&css, Asset::Stylesheet).await.unwrap();

        let js = Url::parse(&format!("{base}/widget.js")).unwrap();
        let err = client.load_asset(&js, Asset::Script).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to load widget script");
    }

    #[tokio::test]
    async fn unreachable_server_is_load_error() {
        // Port 9 (discard) is closed on test machines; the connect fails fast.
        let client = HttpApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client.fetch_articles("cat-1").await.unwrap_err();
        assert!(matches!(err, Error::Load { resource: "articles", .. }));
    }
}
