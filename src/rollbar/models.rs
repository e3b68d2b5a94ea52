//! Response envelope shared by every Rollbar API endpoint

use serde::Deserialize;

/// `{ "err": <int>, "result": <payload> }` wrapper around every response
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub err: i64,
    pub result: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned with non-2xx responses
#[derive(Deserialize, Debug, Default)]
pub struct ErrorResult {
    #[serde(default)]
    pub err: i64,
    #[serde(default)]
    pub message: Option<String>,
}
