//! HTTP Executor Module
//!
//! Thin reqwest wrapper every service talks through: base-URL joining, auth
//! header injection, JSON decoding and status-code mapping. The response
//! cache sits on top of this layer — a cached call never reaches it.

use reqwest::{Method, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use crate::auth::AuthMethod;
use crate::config::ClientConfig;
use crate::error::{Result, WebApiError};

// == HTTP Executor ==
/// Executes JSON requests against a WebAPI instance.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
    base_url: String,
    auth: AuthMethod,
}

impl HttpExecutor {
    // == Constructor ==
    /// Builds an executor from client configuration.
    ///
    /// The base URL's trailing slash is trimmed so paths can always start
    /// with one.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth: config.auth.clone(),
        })
    }

    /// The configured base URL (trailing slash trimmed).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "WebAPI request");

        let mut request = self.client.request(method, url);
        for (name, value) in self.auth.headers() {
            request = request.header(name, value);
        }
        request
    }

    // == Verbs ==
    /// GET a JSON document.
    pub async fn get(&self, path: &str) -> Result<Value> {
        let response = self.request(Method::GET, path).send().await?;
        Self::decode(response).await
    }

    /// GET a JSON document with query parameters.
    pub async fn get_with_query(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::decode(response).await
    }

    /// POST a JSON body, returning the JSON response.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::decode(response).await
    }

    /// PUT a JSON body, returning the JSON response.
    pub async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::decode(response).await
    }

    /// DELETE a resource. WebAPI delete endpoints answer with empty bodies.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::decode(response).await.map(|_| ())
    }

    // == Response Handling ==
    /// Maps non-success statuses to errors and decodes the JSON body.
    ///
    /// An empty success body decodes as `null` (several WebAPI endpoints
    /// answer 200 with no content).
    async fn decode(response: Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(WebApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let executor =
            HttpExecutor::new(&ClientConfig::new("http://test/WebAPI/")).unwrap();
        assert_eq!(executor.base_url(), "http://test/WebAPI");
    }
}
