use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::config::BackendConfig;
use crate::constants::{MOVIES_PATH, USER_AGENT};
use crate::models::{Movie, NewMovie};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("backend returned {status}{}", status_detail(.message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("unexpected backend response: {0}")]
    Decode(String),

    #[error("invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

fn status_detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl BackendError {
    /// The `message` field of a failed response, when the backend sent one.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// The remote collaborator that owns the movie records.
#[async_trait]
pub trait MovieBackend: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<Movie>, BackendError>;

    async fn create_movie(&self, movie: &NewMovie) -> Result<Movie, BackendError>;

    /// Reachability probe. Any 2xx answer counts as reachable.
    async fn probe(&self) -> bool;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    movies_url: Url,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(USER_AGENT)
            .build()?;
        Self::with_shared_client(client, &config.base_url)
    }

    pub fn with_shared_client(client: Client, base_url: &str) -> Result<Self, BackendError> {
        let movies_url = Url::parse(base_url)?.join(MOVIES_PATH)?;
        Ok(Self { client, movies_url })
    }

    #[must_use]
    pub const fn movies_url(&self) -> &Url {
        &self.movies_url
    }

    async fn error_from(response: reqwest::Response) -> BackendError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);

        debug!(%status, body = %body, "Backend request failed");
        BackendError::Status { status, message }
    }
}

#[async_trait]
impl MovieBackend for HttpBackend {
    async fn list_movies(&self) -> Result<Vec<Movie>, BackendError> {
        let response = self.client.get(self.movies_url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        response
            .json::<Vec<Movie>>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<Movie, BackendError> {
        let response = self
            .client
            .post(self.movies_url.clone())
            .json(movie)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        response
            .json::<Movie>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn probe(&self) -> bool {
        match self.client.get(self.movies_url.clone()).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!(status = %response.status(), "Backend probe returned non-success status");
                false
            }
            Err(e) => {
                warn!(error = %e, "Backend not reachable");
                false
            }
        }
    }
}
