//! REST transport for the remote record store

use crate::config::ApiConfig;
use crate::core::error::{AdminError, ErrorResponse, RemoteError, Result};
use crate::core::service::StudentStore;
use crate::core::student::{StudentFields, StudentId, StudentRecord};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

/// Resource path of the record collection
pub const STUDENTS_PATH: &str = "/students";

/// Record store reached over HTTP with JSON bodies
///
/// | Operation | Request |
/// |---|---|
/// | list | `GET /students` |
/// | get | `GET /students/{id}` |
/// | create | `POST /students` |
/// | update | `PUT /students/{id}` |
/// | delete | `DELETE /students/{id}` |
///
/// Ids are opaque: each one is percent-encoded as a single path segment, so
/// `/`, `?` or `#` inside an id never change the target of a request.
#[derive(Debug, Clone)]
pub struct HttpStudentStore {
    client: Client,
    base_url: Url,
}

impl HttpStudentStore {
    /// Store rooted at `base_url` (e.g. `http://localhost:3000`)
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let invalid = |reason: String| AdminError::Config {
            message: format!("Invalid record store URL '{}': {}", base_url, reason),
        };
        let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }
        Ok(Self {
            client,
            base_url: url,
        })
    }

    /// Build from configuration, applying the optional request timeout
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| AdminError::Config {
            message: format!("Failed to build HTTP client: {}", e),
        })?;
        Self::with_client(client, &config.base_url)
    }

    /// Root URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn collection_url(&self) -> Url {
        self.url_for(None)
    }

    fn record_url(&self, id: &StudentId) -> Url {
        self.url_for(Some(id))
    }

    fn url_for(&self, id: Option<&StudentId>) -> Url {
        let mut url = self.base_url.clone();
        // Checked hierarchical in `with_client`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(STUDENTS_PATH.trim_start_matches('/'));
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "record store request");
        self.client.request(method, url)
    }

    async fn send(&self, request: RequestBuilder, id: Option<&StudentId>) -> Result<Response> {
        let response = request.send().await.map_err(|e| RemoteError::Network {
            message: e.to_string(),
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(RemoteError::NotFound { id: id.clone() }.into());
            }
        }

        Err(RemoteError::Status {
            status: status.as_u16(),
            message: error_message(response).await,
        }
        .into())
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            RemoteError::Decode {
                message: e.to_string(),
            }
            .into()
        })
    }
}

/// Best-effort message from an error body
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) if !body.trim().is_empty() => body,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        },
        Err(e) => e.to_string(),
    }
}

#[async_trait]
impl StudentStore for HttpStudentStore {
    async fn list(&self) -> Result<Vec<StudentRecord>> {
        let request = self.request(Method::GET, self.collection_url());
        let response = self.send(request, None).await?;
        Self::decode(response).await
    }

    async fn get(&self, id: &StudentId) -> Result<StudentRecord> {
        let request = self.request(Method::GET, self.record_url(id));
        let response = self.send(request, Some(id)).await?;
        Self::decode(response).await
    }

    async fn create(&self, fields: &StudentFields) -> Result<StudentRecord> {
        let request = self
            .request(Method::POST, self.collection_url())
            .json(fields);
        let response = self.send(request, None).await?;
        Self::decode(response).await
    }

    async fn update(&self, id: &StudentId, fields: &StudentFields) -> Result<StudentRecord> {
        let request = self.request(Method::PUT, self.record_url(id)).json(fields);
        let response = self.send(request, Some(id)).await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: &StudentId) -> Result<()> {
        let request = self.request(Method::DELETE, self.record_url(id));
        // Body is an empty object or nothing at all; only the status matters.
        self.send(request, Some(id)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(base_url: &str) -> HttpStudentStore {
        HttpStudentStore::new(base_url).unwrap()
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let store = store("http://localhost:3000/");
        assert_eq!(store.base_url(), "http://localhost:3000");
        assert_eq!(
            store.collection_url().as_str(),
            "http://localhost:3000/students"
        );
        assert_eq!(
            store.record_url(&StudentId::from("7")).as_str(),
            "http://localhost:3000/students/7"
        );
    }

    #[test]
    fn test_base_path_is_kept() {
        let store = store("http://gateway/api/");
        assert_eq!(
            store.record_url(&StudentId::from("7")).as_str(),
            "http://gateway/api/students/7"
        );
    }

    #[test]
    fn test_reserved_characters_stay_in_one_segment() {
        let store = store("http://localhost:3000");
        let cases = [("a/b", "a%2Fb"), ("x?y", "x%3Fy"), ("h#1", "h%231")];

        for (id, encoded) in cases {
            let url = store.record_url(&StudentId::from(id));
            assert_eq!(
                url.as_str(),
                format!("http://localhost:3000/students/{}", encoded)
            );
            assert_eq!(url.query(), None);
            assert_eq!(url.fragment(), None);
        }
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        assert!(matches!(
            HttpStudentStore::new("not a url"),
            Err(AdminError::Config { .. })
        ));
        assert!(matches!(
            HttpStudentStore::new("mailto:admin@example.com"),
            Err(AdminError::Config { .. })
        ));
    }

    #[test]
    fn test_from_config() {
        let config = ApiConfig {
            base_url: "http://store".into(),
            timeout_secs: Some(2),
        };
        let store = HttpStudentStore::from_config(&config).unwrap();
        assert_eq!(store.base_url(), "http://store");
    }
}
