//! Rollbar HTTP client for API interactions

use log::debug;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::config::api;
use crate::error::{Result, RollbarError};
use crate::rollbar::models::{ApiResponse, ErrorResult};

/// A single API call: verb, path template with `{placeholders}`, query and body
#[derive(Debug, Clone)]
pub struct Endpoint {
    method: Method,
    template: &'static str,
    params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
    resource: &'static str,
}

impl Endpoint {
    /// Create an endpoint for `template`, labelled with the resource type making the call
    pub fn new(method: Method, template: &'static str, resource: &'static str) -> Self {
        Self {
            method,
            template,
            params: Vec::new(),
            query: Vec::new(),
            body: None,
            resource,
        }
    }

    pub fn get(template: &'static str, resource: &'static str) -> Self {
        Self::new(Method::GET, template, resource)
    }

    pub fn post(template: &'static str, resource: &'static str) -> Self {
        Self::new(Method::POST, template, resource)
    }

    pub fn put(template: &'static str, resource: &'static str) -> Self {
        Self::new(Method::PUT, template, resource)
    }

    pub fn patch(template: &'static str, resource: &'static str) -> Self {
        Self::new(Method::PATCH, template, resource)
    }

    pub fn delete(template: &'static str, resource: &'static str) -> Self {
        Self::new(Method::DELETE, template, resource)
    }

    /// Bind a `{name}` placeholder in the path template
    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    /// Append a query parameter
    pub fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Attach a JSON request body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Substitute path parameters into the template
    ///
    /// Values are percent-encoded. A placeholder left without a value is a
    /// validation error, so a malformed path never reaches the network.
    pub fn path(&self) -> Result<String> {
        let mut path = self.template.to_string();
        for (name, value) in &self.params {
            let placeholder = format!("{{{}}}", name);
            path = path.replace(&placeholder, &urlencoding::encode(value));
        }
        if let Some(start) = path.find('{') {
            let end = path[start..].find('}').map(|i| start + i + 1).unwrap_or(path.len());
            return Err(RollbarError::Validation(format!(
                "missing path parameter {} for '{}'",
                &path[start..end],
                self.template
            )));
        }
        Ok(path)
    }

    /// Path with any query parameters appended as `?a=b&c=d`
    pub fn path_and_query(&self) -> Result<String> {
        let path = self.path()?;
        if self.query.is_empty() {
            return Ok(path);
        }
        let query = self
            .query
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        Ok(format!("{}?{}", path, query))
    }
}

/// Rollbar API client
///
/// One instance per access token. Outbound calls are serialized through an
/// internal mutex, so a shared `&RollbarClient` never interleaves requests.
pub struct RollbarClient {
    client: Client,
    token: String,
    base_url: String,
    max_pages: u32,
    call_guard: Mutex<()>,
}

impl RollbarClient {
    /// Create a new client for the public Rollbar API
    pub fn new(token: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("rollbarctl/", env!("CARGO_PKG_VERSION")))
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token: token.into(),
            base_url: api::DEFAULT_URL.to_string(),
            max_pages: api::DEFAULT_MAX_PAGES,
            call_guard: Mutex::new(()),
        }
    }

    /// Point the client at another API host (self-hosted proxies, mock servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound the number of pages a paginated listing may request
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Build the base URL for API requests
    pub fn base_url(&self) -> String {
        format!("{}{}", self.base_url, api::BASE_PATH)
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Send one request and read the full body while holding the call guard
    async fn send(&self, endpoint: &Endpoint) -> Result<(u16, String)> {
        let url = format!("{}{}", self.base_url(), endpoint.path_and_query()?);

        let mut builder = self
            .client
            .request(endpoint.method.clone(), &url)
            .header(api::TOKEN_HEADER, &self.token)
            .header(api::RESOURCE_HEADER, endpoint.resource);
        if let Some(ref body) = endpoint.body {
            builder = builder.json(body);
        }

        let _guard = self.call_guard.lock().await;
        debug!("{} {} ({})", endpoint.method, url, endpoint.resource);

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("{} {} -> {}", endpoint.method, url, status);
        Ok((status, body))
    }

    /// Issue a call and decode the `result` field of the envelope
    pub(crate) async fn call<T>(&self, endpoint: Endpoint) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let (status, body) = self.send(&endpoint).await?;
        classify_status(status, &body)?;
        decode_result(status, &body)
    }

    /// Issue a call whose result payload is not needed
    pub(crate) async fn call_empty(&self, endpoint: Endpoint) -> Result<()> {
        let (status, body) = self.send(&endpoint).await?;
        classify_status(status, &body)?;

        // Some endpoints answer with an empty body; only a parsed envelope can carry a soft error
        if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body) {
            if envelope.err != 0 {
                return Err(soft_error(status, envelope.err, envelope.message));
            }
        }
        Ok(())
    }

    /// Probe an endpoint: 2xx is `true`, 404 is `false`, anything else is an error
    pub(crate) async fn exists(&self, endpoint: Endpoint) -> Result<bool> {
        match self.call_empty(endpoint).await {
            Ok(()) => Ok(true),
            Err(RollbarError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Fetch page 1, 2, ... until a page comes back empty
    ///
    /// Results are concatenated in page order. At most `max_pages` requests
    /// are made; if the last permitted page still carries items the listing
    /// fails with `PageLimit` rather than returning a silently truncated set.
    pub(crate) async fn fetch_all_pages<T>(&self, endpoint: Endpoint) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let items: Vec<T> = self.call(endpoint.clone().query("page", page)).await?;
            debug!("Page {} returned {} items", page, items.len());

            if items.is_empty() {
                return Ok(all_items);
            }
            all_items.extend(items);

            if page >= self.max_pages {
                return Err(RollbarError::PageLimit {
                    max_pages: self.max_pages,
                });
            }
            page += 1;
        }
    }
}

/// Map an HTTP status to the error taxonomy; 2xx passes through
pub(crate) fn classify_status(status: u16, body: &str) -> Result<()> {
    match status {
        200..=299 => Ok(()),
        401 => Err(RollbarError::Unauthorized),
        404 => Err(RollbarError::NotFound),
        _ => {
            let er: ErrorResult = serde_json::from_str(body).unwrap_or_default();
            let message = er
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| body.trim().to_string());
            Err(RollbarError::Api {
                status,
                code: er.err,
                message,
            })
        }
    }
}

/// Decode a 2xx body, honouring a non-zero `err` field as a failure
fn decode_result<T>(status: u16, body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    // Check `err` before the payload is typed: a soft error's `result` need not match `T`
    let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(body)?;
    if envelope.err != 0 {
        return Err(soft_error(status, envelope.err, envelope.message));
    }
    let result = envelope
        .result
        .ok_or_else(|| RollbarError::Unexpected("response carried no result".to_string()))?;
    Ok(serde_json::from_value(result)?)
}

fn soft_error(status: u16, code: i64, message: Option<String>) -> RollbarError {
    let message = message.unwrap_or_default();
    if message.to_lowercase().contains("not found") {
        return RollbarError::NotFound;
    }
    RollbarError::Api {
        status,
        code,
        message,
    }
}

#[cfg(test)]
impl RollbarClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token").with_base_url(base_url)
    }
}


#[cfg(test)]
mod transport_tests {
    use super::*;
    use serde::Deserialize;
    use std::time::Instant;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug)]
    struct TestItem {
        id: i64,
    }

    #[tokio::test]
    async fn test_call_sends_token_and_resource_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/1/test-items/7"))
            .and(header(api::TOKEN_HEADER, "test-token"))
            .and(header(api::RESOURCE_HEADER, "test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0,
                "result": {"id": 7}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        let item: TestItem = client
            .call(Endpoint::get("/test-items/{id}", "test").param("id", 7))
            .await
            .unwrap();
        assert_eq!(item.id, 7);
    }

    #[tokio::test]
    async fn test_call_sends_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/1/test-items"))
            .and(body_json(serde_json::json!({"name": "x"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0,
                "result": {"id": 1}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        let endpoint = Endpoint::post("/test-items", "test")
            .json(&serde_json::json!({"name": "x"}))
            .unwrap();
        let item: TestItem = client.call(endpoint).await.unwrap();
        assert_eq!(item.id, 1);
    }

    #[tokio::test]
    async fn test_call_empty_accepts_blank_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/1/test-items/1"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        client
            .call_empty(Endpoint::delete("/test-items/{id}", "test").param("id", 1))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_exists() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/1/test-items/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0, "result": {}
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/1/test-items/2"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/1/test-items/3"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        let item = |id: i64| Endpoint::get("/test-items/{id}", "test").param("id", id);
        assert!(client.exists(item(1)).await.unwrap());
        assert!(!client.exists(item(2)).await.unwrap());
        assert!(client.exists(item(3)).await.is_err());
    }

    #[tokio::test]
    async fn test_transport_error() {
        // Nothing listens on port 9 of localhost
        let client = RollbarClient::test_client("http://127.0.0.1:9");
        let result: Result<TestItem> = client.call(Endpoint::get("/test-items", "test")).await;
        assert!(matches!(result, Err(RollbarError::Transport(_))));
    }

    #[tokio::test]
    async fn test_fetch_all_pages_until_empty() {
        let mock_server = MockServer::start().await;

        for (page, ids) in [(1, vec![1, 2]), (2, vec![3]), (3, vec![])] {
            let items: Vec<_> = ids
                .into_iter()
                .map(|id| serde_json::json!({"id": id}))
                .collect();
            Mock::given(method("GET"))
                .and(path("/api/1/test-items"))
                .and(query_param("page", page.to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "err": 0,
                    "result": items
                })))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = RollbarClient::test_client(&mock_server.uri());
        let items: Vec<TestItem> = client
            .fetch_all_pages(Endpoint::get("/test-items", "test"))
            .await
            .unwrap();

        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_respects_bound() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/1/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0,
                "result": [{"id": 1}]
            })))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri()).with_max_pages(2);
        let result: Result<Vec<TestItem>> = client
            .fetch_all_pages(Endpoint::get("/test-items", "test"))
            .await;

        assert!(matches!(
            result,
            Err(RollbarError::PageLimit { max_pages: 2 })
        ));
    }

    #[tokio::test]
    async fn test_fetch_all_pages_error_on_later_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/1/test-items"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0,
                "result": [{"id": 1}]
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/1/test-items"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        let result: Result<Vec<TestItem>> = client
            .fetch_all_pages(Endpoint::get("/test-items", "test"))
            .await;
        assert!(matches!(result, Err(RollbarError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_calls_are_serialized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/1/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"err": 0, "result": {"id": 1}}))
                    .set_delay(Duration::from_millis(200)),
            )
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        let started = Instant::now();
        let (a, b) = tokio::join!(
            client.call::<TestItem>(Endpoint::get("/slow", "test")),
            client.call::<TestItem>(Endpoint::get("/slow", "test")),
        );
        assert!(a.is_ok() && b.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(400));
    }
}
