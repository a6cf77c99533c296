use std::time::Duration;

use dioxus::logger::tracing;

use super::endpoint::Endpoint;
use super::error::{ApiError, ApiResult};
use super::movie::{Movie, MoviePage};
use crate::utils::config::{Credentials, Settings};

/// HTTP client for the movie metadata API, shared through context.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    language: String,
    timeout: Option<Duration>,
}

impl TmdbClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            credentials: settings.credentials.clone(),
            language: settings.language.clone(),
            timeout: settings.request_timeout,
        }
    }

    /// Builds the GET request for an endpoint without sending it
    pub fn request(&self, endpoint: &Endpoint) -> ApiResult<reqwest::Request> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let mut builder = self
            .http
            .get(url)
            .query(&[("language", self.language.as_str())]);

        builder = match &self.credentials {
            Credentials::Bearer(token) => builder.bearer_auth(token),
            Credentials::ApiKey(key) => builder.query(&[("api_key", key.as_str())]),
        };

        // No timeout unless one was configured; a hung request stays pending
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }

    /// Fetches the `results` list of an endpoint, in the order the API returned it
    pub async fn movies(&self, endpoint: &Endpoint) -> ApiResult<Vec<Movie>> {
        let request = self.request(endpoint)?;
        tracing::info!("Fetching movies from {}", endpoint.path());

        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let page: MoviePage = response.json().await.map_err(|e| ApiError::Decode {
            reason: e.to_string(),
        })?;
        Ok(page.results)
    }
}
