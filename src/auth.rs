//! Authentication Module
//!
//! Header-injection strategies for outgoing WebAPI requests. WebAPI
//! deployments vary (open, token-secured, reverse-proxy basic auth), so the
//! scheme is a value the executor consults per request.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

// == Auth Method ==
/// Authentication scheme applied to every request.
#[derive(Debug, Clone, Default)]
pub enum AuthMethod {
    /// No authentication headers
    #[default]
    None,
    /// `Authorization: Bearer <token>`
    Bearer(String),
    /// A custom header carrying an API key
    ApiKey {
        /// Header name, e.g. `X-Api-Key`
        header: String,
        /// The key value
        key: String,
    },
    /// `Authorization: Basic <base64(user:pass)>`
    Basic {
        /// Account name
        username: String,
        /// Account password
        password: String,
    },
}

impl AuthMethod {
    /// Headers to inject for this scheme.
    pub fn headers(&self) -> Vec<(String, String)> {
        match self {
            AuthMethod::None => Vec::new(),
            AuthMethod::Bearer(token) => {
                vec![("Authorization".to_string(), format!("Bearer {}", token))]
            }
            AuthMethod::ApiKey { header, key } => vec![(header.clone(), key.clone())],
            AuthMethod::Basic { username, password } => {
                let credentials = BASE64.encode(format!("{}:{}", username, password));
                vec![("Authorization".to_string(), format!("Basic {}", credentials))]
            }
        }
    }
}
