use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::BlogApi;
use crate::model::{Article, ArticleId, NewArticle};

/// `BlogApi` over HTTP against a `/blogs` collection endpoint.
///
/// Single-shot requests: no retries, no timeouts, no pagination.
#[derive(Clone)]
pub struct HttpBlogApi {
    client: Client,
    base_url: String,
}

impl HttpBlogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: ArticleId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        body: Option<&NewArticle>,
    ) -> Result<Response, ApiError> {
        let mut builder = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(method = %method, url = %url, error = %e, "Request failed");
            ApiError::from(e)
        })?;

        let status = response.status();
        tracing::debug!(method = %method, url = %url, status = status.as_u16(), "Response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        tracing::warn!(method = %method, url = %url, status = status.as_u16(), error = %err, "Request rejected");
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    async fn list(&self) -> Result<Vec<Article>, ApiError> {
        let response = self.send(Method::GET, self.base_url.clone(), None).await?;
        Self::decode(response).await
    }

    async fn get(&self, id: ArticleId) -> Result<Article, ApiError> {
        let response = self.send(Method::GET, self.item_url(id), None).await?;
        Self::decode(response).await
    }

    async fn create(&self, article: &NewArticle) -> Result<Article, ApiError> {
        let response = self
            .send(Method::POST, self.base_url.clone(), Some(article))
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: ArticleId) -> Result<(), ApiError> {
        self.send(Method::DELETE, self.item_url(id), None).await?;
        Ok(())
    }
}
