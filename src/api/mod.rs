//! Transport layer for the blog backend.
//!
//! One request per operation against a fixed collection endpoint:
//!
//! ```text
//! GET    /blogs        -> [Article]
//! GET    /blogs/{id}   -> Article
//! POST   /blogs        -> Article   (body: article without id)
//! DELETE /blogs/{id}   -> ()
//! ```
//!
//! Non-2xx responses become [`ApiError::Status`] carrying the server's
//! `message`, or a generic fallback.

mod client;
mod error;

pub use client::HttpBlogApi;
pub use error::{ApiError, GENERIC_ERROR_MESSAGE};

use async_trait::async_trait;

use crate::model::{Article, ArticleId, NewArticle};

/// CRUD operations the client needs from the backend.
#[async_trait]
pub trait BlogApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Article>, ApiError>;

    async fn get(&self, id: ArticleId) -> Result<Article, ApiError>;

    async fn create(&self, article: &NewArticle) -> Result<Article, ApiError>;

    async fn delete(&self, id: ArticleId) -> Result<(), ApiError>;
}
