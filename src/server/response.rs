use axum::Json;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header::CACHE_CONTROL};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::time::Duration;

use crate::common::client::error::FetchError;

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        // 对外只返回固定文案，不暴露上游细节
        let message = match &self {
            FetchError::MissingParameter(name) => format!("{} is required", name),
            FetchError::UpstreamUnavailable { .. } => "Failed to fetch playlist feed".to_string(),
            FetchError::UnexpectedError(_) => "Unexpected error fetching playlist".to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// 成功响应的缓存头，对应 feed 的重新验证窗口
pub fn cache_headers(revalidate: Duration) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let secs = revalidate.as_secs();
    let value = format!("public, s-maxage={}, stale-while-revalidate={}", secs, secs);
    if let Ok(value) = HeaderValue::from_str(&value) {
        headers.insert(CACHE_CONTROL, value);
    }
    headers
}

/// 查询参数必须存在且非空
pub fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, FetchError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(FetchError::MissingParameter(name))
}
