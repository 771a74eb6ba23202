use serde::de::DeserializeOwned;

use common::errors::ErrorPayload;

pub const DEFAULT_UNIVERSITY_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone)]
pub struct UniversityClient {
    base_url: String,
    http: reqwest::Client,
}

pub fn get_university_client() -> UniversityClient {
    UniversityClient::new(std::env::var("UNIVERSITY_API_URL").unwrap_or(DEFAULT_UNIVERSITY_API_URL.to_string()))
}

impl UniversityClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{path}` with `query`, decoding the JSON body.
    ///
    /// A non-success status fails with the `error` field of the body, or the
    /// generic message when the body has none.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> anyhow::Result<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let t0 = std::time::Instant::now();
        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        let dt_ms = t0.elapsed().as_millis() as u64;
        if status.is_client_error() || status.is_server_error() {
            let message = ErrorPayload::message_from_body(&response_txt);
            tracing::warn!("GET {} failed with {} in {}ms: {}", url, status, dt_ms, message);
            anyhow::bail!("{}", message);
        }
        tracing::info!("GET {} -> {} ({} bytes, {}ms)", url, status, response_txt.len(), dt_ms);
        let parsed = serde_json::from_str::<T>(&response_txt)?;
        Ok(parsed)
    }
}
