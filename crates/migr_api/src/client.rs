use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Response;

/// Default location of the migration server.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Client for the migration gateway. Holds the base URL and one shared
/// transport client; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client for the server at `base_url`. All requests carry
    /// `Content-Type: application/json`, installed here as a transport
    /// default. A trailing `/` on the base is trimmed.
    pub fn new(base_url: &str) -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// List clients still on the legacy system.
    pub async fn legacy_clients(&self) -> reqwest::Result<Response> {
        self.get("/api/legacy/client").await
    }

    /// List clients already migrated to the new system.
    pub async fn new_clients(&self) -> reqwest::Result<Response> {
        self.get("/api/new/client").await
    }

    /// Trigger migration of one client. The identifier is embedded verbatim
    /// as the final path segment.
    pub async fn migrate_client(&self, client_id: &str) -> reqwest::Result<Response> {
        self.post(&migrate_path(client_id)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get(&self, path: &str) -> reqwest::Result<Response> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        self.http.get(&url).send().await?.error_for_status()
    }

    async fn post(&self, path: &str) -> reqwest::Result<Response> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        self.http.post(&url).send().await?.error_for_status()
    }
}

fn migrate_path(client_id: &str) -> String {
    format!("/api/migrate/{client_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let c = ApiClient::new(DEFAULT_API_URL).unwrap();
        assert_eq!(
            c.url("/api/legacy/client"),
            "http://localhost:8080/api/legacy/client"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_trimmed() {
        let c = ApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(
            c.url("/api/new/client"),
            "http://localhost:8080/api/new/client"
        );
    }

    #[test]
    fn migrate_path_embeds_id_verbatim() {
        assert_eq!(migrate_path("42"), "/api/migrate/42");
        assert_eq!(migrate_path("abc"), "/api/migrate/abc");
    }
}
