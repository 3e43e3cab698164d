//! reqwest implementation of [`BookApi`]

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::{ApiError, BookApi};
use crate::config::Config;
use crate::models::{Book, BookDraft, BookPage, ListQuery};

/// Longest backend error body echoed into an [`ApiError::Status`]
const MAX_ERROR_BODY: usize = 200;

/// Book catalog client over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpBookApi {
    client: Client,
    base_url: String,
    base: Url,
}

impl HttpBookApi {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let base_url = config.api_base().to_string();
        let base = match Url::parse(&base_url) {
            Ok(base) if !base.cannot_be_a_base() => base,
            _ => return Err(ApiError::InvalidUrl { url: base_url }),
        };

        let client = Client::builder()
            .user_agent(&config.http.user_agent)
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            base,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `{base}/book/{id}` with the id percent-encoded as a single path segment
    fn book_url(&self, id: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("book").push(id);
        }
        url
    }
}

/// Turn a non-success status into [`ApiError::Status`]
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

    warn!("Backend returned {}: {}", status.as_u16(), message);
    Err(ApiError::Status {
        status_code: status.as_u16(),
        message,
    })
}

/// `{"message": "..."}` bodies are unwrapped, anything else is echoed truncated
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return Some(message.to_string());
        }
    }
    Some(body.chars().take(MAX_ERROR_BODY).collect())
}

async fn decode<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn list_books(&self, query: &ListQuery) -> Result<BookPage, ApiError> {
        debug!(
            "GET /books search={:?} page={} limit={}",
            query.search, query.page, query.limit
        );
        let response = self.client.get(self.url("/books")).query(query).send().await?;
        let page: BookPage = decode(response, "GET /books").await?;
        info!(
            "Fetched {} books (page {} of {})",
            page.books.len(),
            query.page,
            page.total_pages
        );
        Ok(page)
    }

    async fn get_book(&self, id: &str) -> Result<Book, ApiError> {
        debug!("GET /book/{}", id);
        let response = self.client.get(self.book_url(id)).send().await?;
        decode(response, "GET /book/{id}").await
    }

    async fn create_book(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        info!("Creating book '{}'", draft.title);
        let response = self.client.post(self.url("/book")).json(draft).send().await?;
        decode(response, "POST /book").await
    }

    async fn update_book(&self, id: &str, draft: &BookDraft) -> Result<Book, ApiError> {
        info!("Updating book {}", id);
        let response = self.client.put(self.book_url(id)).json(draft).send().await?;
        decode(response, "PUT /book/{id}").await
    }

    async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        info!("Deleting book {}", id);
        let response = self.client.delete(self.book_url(id)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}
