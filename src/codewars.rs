/*
    Thin blocking client for the Codewars API. Only the user endpoint is wired up.
*/

use std::collections::HashMap;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

pub mod user;
pub mod webhook;

pub use user::{CodeChallenges, Language, Languages, Overall, Rank, Ranks, User};
pub use webhook::{UserWebhook, WebhookAction};

pub const API_URL: &str = "https://www.codewars.com/api/v1";

/// Service name of the user lookup
pub const GET_USER: &str = "getuser";

#[derive(Error, Debug)]
pub enum CodewarsApiError {
    #[error("Request to codewars failed (status {status:?}): {source}")]
    Http {
        source: reqwest::Error,
        /// `None` if the request never got a response
        status: Option<StatusCode>,
    },
    #[error("Could not decode {subject} from codewars: {source}")]
    Decoding {
        source: serde_json::Error,
        subject: &'static str,
    },
    #[error("Invalid codewars url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("No service named '{0}' is configured")]
    MissingService(String),
}

impl CodewarsApiError {
    fn http(source: reqwest::Error) -> Self {
        let status = source.status();
        CodewarsApiError::Http { source, status }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CodewarsApiError::Http { status, .. } => *status,
            _ => None,
        }
    }

    /// Name of the record that failed to decode
    pub fn subject(&self) -> Option<&'static str> {
        match self {
            CodewarsApiError::Decoding { subject, .. } => Some(*subject),
            _ => None,
        }
    }
}

type CodewarsResult<T> = Result<T, CodewarsApiError>;

/// Server and services provided by the codewars api.
///
/// The config never changes after construction, so a single instance can be
/// cloned or shared between threads freely.
#[derive(Debug, Clone)]
pub struct CodewarsApi {
    server: String,
    services: HashMap<String, String>,
    client: Client,
}

impl CodewarsApi {
    pub fn new() -> CodewarsApi {
        CodewarsApi::with_server(API_URL)
    }

    /// Same services as [`CodewarsApi::new`], different base url
    pub fn with_server(server: &str) -> CodewarsApi {
        let mut services = HashMap::new();
        services.insert(GET_USER.to_string(), "/users/".to_string());

        CodewarsApi {
            server: server.trim_end_matches('/').to_string(),
            services,
            client: Client::new(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn service(&self, name: &str) -> Option<&str> {
        self.services.get(name).map(String::as_str)
    }

    /// Retrieves a user from codewars.
    ///
    /// The username is sent as a single path segment, so characters like `/` or
    /// spaces are percent-encoded instead of changing the route.
    ///
    /// # Example
    /// ```no_run
    /// use codewars_client::codewars::CodewarsApi;
    ///
    /// let api = CodewarsApi::new();
    /// let user = api.get_user("g964")?;
    /// println!("{} has {} honor", user.username, user.honor);
    /// # Ok::<(), codewars_client::codewars::CodewarsApiError>(())
    /// ```
    pub fn get_user(&self, username: &str) -> CodewarsResult<User> {
        let url = self.endpoint(GET_USER, username)?;
        self.request::<User>(url, "User")
    }

    fn endpoint(&self, service: &str, segment: &str) -> CodewarsResult<Url> {
        let path = self
            .service(service)
            .ok_or_else(|| CodewarsApiError::MissingService(service.to_string()))?;

        let mut url = Url::parse(&format!("{}{}", self.server, path))?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(segment);

        Ok(url)
    }

    fn request<T: DeserializeOwned>(&self, url: Url, subject: &'static str) -> CodewarsResult<T> {
        tracing::info!("Requesting {} from {}", subject, url);

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::warn!("Request for {} failed: {}", subject, e);
                CodewarsApiError::http(e)
            })?;

        serde_json::from_reader(response).map_err(|source| {
            tracing::warn!("Could not decode {}: {}", subject, source);
            CodewarsApiError::Decoding { source, subject }
        })
    }
}

impl Default for CodewarsApi {
    fn default() -> Self {
        CodewarsApi::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let api = CodewarsApi::new();
        assert_eq!(api.server(), "https://www.codewars.com/api/v1");
        assert_eq!(api.service(GET_USER), Some("/users/"));
        assert_eq!(api.service("listusers"), None);
    }

    #[test]
    fn username_is_one_path_segment() {
        let api = CodewarsApi::new();

        let url = api.endpoint(GET_USER, "chuck").unwrap();
        assert_eq!(url.as_str(), "https://www.codewars.com/api/v1/users/chuck");

        let url = api.endpoint(GET_USER, "a b/c").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.codewars.com/api/v1/users/a%20b%2Fc"
        );
    }

    #[test]
    fn trailing_slash_on_server() {
        let api = CodewarsApi::with_server("http://localhost:8080/api/v1/");
        let url = api.endpoint(GET_USER, "chuck").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/users/chuck");
    }

    #[test]
    fn unknown_service() {
        let api = CodewarsApi::new();
        let err = api.endpoint("listusers", "chuck").unwrap_err();
        assert!(matches!(err, CodewarsApiError::MissingService(name) if name == "listusers"));
    }

    #[test]
    fn bad_server() {
        let api = CodewarsApi::with_server("not a url");
        let err = api.get_user("chuck").unwrap_err();
        assert!(matches!(err, CodewarsApiError::InvalidUrl(_)));
        assert_eq!(err.status(), None);
        assert_eq!(err.subject(), None);
    }
}
