//! Problem details (RFC 7807) and the error taxonomy shared by every handler.
//!
//! A `Problem` is what the client sees. A `ServiceError` is what a service
//! hands back: either a typed problem, passed through verbatim, or an opaque
//! failure that is logged and replaced by a generic 500.

use axum::{
  http::{header, HeaderValue, StatusCode},
  response::{IntoResponse, Response},
  Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::error;

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

fn about_blank() -> String { "about:blank".into() }

/// RFC 7807 problem detail. Unknown members round-trip through `extensions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Error)]
#[error("{title} ({status}): {detail}")]
pub struct Problem {
  #[serde(rename = "type", default = "about_blank")]
  pub kind: String,
  pub title: String,
  pub status: u16,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub detail: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub instance: Option<String>,
  #[serde(flatten)]
  pub extensions: Map<String, Value>,
}

impl Problem {
  /// Blank problem titled with the canonical reason phrase of `status`.
  pub fn new(status: StatusCode) -> Self {
    Self {
      kind: about_blank(),
      title: status.canonical_reason().unwrap_or("Unknown").to_string(),
      status: status.as_u16(),
      detail: String::new(),
      instance: None,
      extensions: Map::new(),
    }
  }

  pub fn title(mut self, title: impl Into<String>) -> Self {
    self.title = title.into();
    self
  }

  pub fn detail(mut self, detail: impl Into<String>) -> Self {
    self.detail = detail.into();
    self
  }

  pub fn kind(mut self, kind: impl Into<String>) -> Self {
    self.kind = kind.into();
    self
  }

  pub fn instance(mut self, instance: impl Into<String>) -> Self {
    self.instance = Some(instance.into());
    self
  }

  /// Adds an extension member. Reserved member names are ignored.
  pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
    if !matches!(key, "type" | "title" | "status" | "detail" | "instance") {
      self.extensions.insert(key.to_string(), value.into());
    }
    self
  }

  pub fn status_code(&self) -> StatusCode {
    StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
  }

  pub fn missing_parameter(name: &str) -> Self {
    Self::new(StatusCode::BAD_REQUEST)
      .title("Missing required parameter.")
      .detail(format!("The '{name}' parameter is required but was not found in the request."))
      .with("parameter", name)
  }

  pub fn bad_request(detail: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST)
      .title("Malformed request.")
      .detail(detail)
  }

  pub fn payload_too_large(limit: usize) -> Self {
    Self::new(StatusCode::PAYLOAD_TOO_LARGE)
      .title("Request body too large.")
      .detail(format!("body must not be larger than {limit} bytes"))
      .with("limit", limit)
  }

  pub fn conflict(detail: impl Into<String>) -> Self {
    Self::new(StatusCode::CONFLICT)
      .title("Conflict.")
      .detail(detail)
  }

  /// The only body a client ever gets for an opaque failure.
  pub fn unexpected() -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR)
      .title("Unexpected error.")
      .detail("An unexpected error occurred while processing the request. Please try again later.")
  }
}

impl IntoResponse for Problem {
  fn into_response(self) -> Response {
    let status = self.status_code();
    let mut res = (status, Json(self)).into_response();
    res
      .headers_mut()
      .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_CONTENT_TYPE));
    res
  }
}

/// Outcome of a failed service call.
#[derive(Debug, Error)]
pub enum ServiceError {
  #[error(transparent)]
  Problem(#[from] Problem),
  #[error(transparent)]
  Unexpected(#[from] anyhow::Error),
}

impl ServiceError {
  pub fn unexpected(msg: impl std::fmt::Display + std::fmt::Debug + Send + Sync + 'static) -> Self {
    ServiceError::Unexpected(anyhow::Error::msg(msg))
  }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl IntoResponse for ServiceError {
  fn into_response(self) -> Response {
    match self {
      ServiceError::Problem(p) => p.into_response(),
      ServiceError::Unexpected(e) => {
        error!(target: "fontseca", error = ?e, "unexpected error while serving request");
        Problem::unexpected().into_response()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::body::to_bytes;

  #[test]
  fn new_problem_uses_reason_phrase() {
    let p = Problem::new(StatusCode::GONE);
    assert_eq!(p.title, "Gone");
    assert_eq!(p.status, 410);
    assert_eq!(p.kind, "about:blank");
  }

  #[test]
  fn extensions_are_flattened_and_reserved_keys_ignored() {
    let p = Problem::bad_request("nope")
      .with("line", 3)
      .with("status", 999);
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["line"], 3);
    assert_eq!(v["status"], 400);
    assert_eq!(v["detail"], "nope");
    assert!(v.get("instance").is_none());
  }

  #[test]
  fn missing_parameter_names_the_parameter() {
    let p = Problem::missing_parameter("article_uuid");
    assert_eq!(p.status, 400);
    assert!(p.detail.contains("article_uuid"));
    assert_eq!(p.extensions["parameter"], "article_uuid");
  }

  #[tokio::test]
  async fn problem_response_has_problem_content_type() {
    let res = Problem::new(StatusCode::GONE).detail("article is gone").into_response();
    assert_eq!(res.status(), StatusCode::GONE);
    assert_eq!(res.headers()[header::CONTENT_TYPE], PROBLEM_CONTENT_TYPE);
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["detail"], "article is gone");
  }

  #[tokio::test]
  async fn unexpected_errors_do_not_leak() {
    let err = ServiceError::unexpected("connection refused on 10.0.0.3:5432");
    let res = err.into_response();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(!text.contains("10.0.0.3"));
    assert!(text.to_lowercase().contains("unexpected error"));
  }

  #[test]
  fn problems_round_trip_unknown_members() {
    let raw = r#"{"type":"https://fontseca.dev/problems/gone","title":"Gone","status":410,"detail":"x","retry":false}"#;
    let p: Problem = serde_json::from_str(raw).unwrap();
    assert_eq!(p.kind, "https://fontseca.dev/problems/gone");
    assert_eq!(p.extensions["retry"], false);
  }

  #[test]
  fn kind_and_instance_are_serialized() {
    let p = Problem::new(StatusCode::NOT_FOUND)
      .kind("https://fontseca.dev/problems/article-not-found")
      .instance("/archive/articles.info?article_uuid=abc");
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["type"], "https://fontseca.dev/problems/article-not-found");
    assert_eq!(v["instance"], "/archive/articles.info?article_uuid=abc");
    assert_eq!(v["status"], 404);
  }
}
