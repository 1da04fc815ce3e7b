//! HTTP client for the todo API.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use todo_core::{Todo, TodoDraft, TodoId};

/// Base URL of the todo API.
pub const API_URL: &str = "http://localhost:9091/api/todo";

/// Client for the todo REST API.
#[derive(Clone, Copy)]
pub struct Api {
    url: &'static str,
}

impl Api {
    /// Creates a client against the given base URL.
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    /// Fetches all todos.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] when the request fails or the server reports one.
    pub async fn list(&self) -> Result<Vec<Todo>> {
        let response = Request::get(self.url).send().await?;
        into_json(response).await
    }

    /// Creates a todo from the draft and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] when the request fails or the server reports one
    /// (a missing title comes back as an API error).
    pub async fn create(&self, draft: &TodoDraft) -> Result<Todo> {
        let response = Request::post(self.url).json(draft)?.send().await?;
        into_json(response).await
    }

    /// Toggles completion of the given todo and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] when the request fails or the server reports one.
    pub async fn toggle_completed(&self, id: TodoId) -> Result<Todo> {
        let url = format!("{}/{id}/completed", self.url);
        let response = Request::patch(&url).send().await?;
        into_json(response).await
    }
}

type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the API (`{"error": "..."}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub error: String,
}

/// Errors produced by API calls.
#[derive(Debug, Error)]
pub enum Error {
    /// The request itself failed (network, serialization).
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    /// The server answered with an error body.
    #[error("{}", .0.error)]
    Api(ApiError),
}

async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got a 2xx status before parsing the payload shape
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(Error::Api(response.json::<ApiError>().await?))
    }
}
