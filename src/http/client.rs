//! HTTP client that issues exactly one request per call and classifies failures.

use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::error::RequestError;

/// Thin wrapper around a configured reqwest Client.
///
/// Never retries; a failed request goes straight back to the caller.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request with query parameters and deserializes the JSON response.
    ///
    /// Anything other than `200 OK` is a [`RequestError::Status`].
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RequestError> {
        debug!("GET JSON from {} with query {:?}...", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(RequestError::from_reqwest)?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("GET {} answered {}", url, status);
            return Err(RequestError::Status(status));
        }

        response.json::<T>().await.map_err(RequestError::from_reqwest)
    }
}
