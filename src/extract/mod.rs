//! Request extractors: request context, form/query values, JSON bodies and
//! the article filter. All rejections are `Problem`s.

use std::convert::Infallible;

use axum::{
  async_trait,
  body::{Body, Bytes},
  extract::{FromRequest, FromRequestParts, Request},
  http::{header, request::Parts},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use url::form_urlencoded;
use uuid::Uuid;

use crate::problem::Problem;

pub mod filter;
pub mod form;
pub mod json;

pub use filter::ArticleFilter;
pub use form::{BindError, BindForm, FormValue};
pub use json::JsonBody;

/// Hard cap on request bodies (1 MiB).
pub const MAX_BODY_BYTES: usize = 1_048_576;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Buffers a body, rejecting anything over `MAX_BODY_BYTES` with a 413.
pub(crate) async fn read_body(body: Body) -> Result<Bytes, Problem> {
  match Limited::new(body, MAX_BODY_BYTES).collect().await {
    Ok(collected) => Ok(collected.to_bytes()),
    Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => Err(Problem::payload_too_large(MAX_BODY_BYTES)),
    Err(e) => {
      tracing::debug!(target: "fontseca", error = %e, "failed to read request body");
      Err(Problem::bad_request("the request body could not be read"))
    }
  }
}

/// Opaque per-request context handed to every service call.
#[derive(Clone, Debug)]
pub struct RequestContext {
  pub request_id: String,
}

impl RequestContext {
  pub fn new() -> Self {
    Self { request_id: Uuid::new_v4().to_string() }
  }
}

impl Default for RequestContext {
  fn default() -> Self { Self::new() }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
  S: Send + Sync,
{
  type Rejection = Infallible;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    let request_id = parts
      .headers
      .get(REQUEST_ID_HEADER)
      .and_then(|h| h.to_str().ok())
      .map(str::trim)
      .filter(|s| !s.is_empty())
      .map(String::from)
      .unwrap_or_else(|| Uuid::new_v4().to_string());
    Ok(RequestContext { request_id })
  }
}

/// Decoded `application/x-www-form-urlencoded` pairs, in arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Values(Vec<(String, String)>);

impl Values {
  pub fn parse(input: &[u8]) -> Self {
    Values(form_urlencoded::parse(input).into_owned().collect())
  }

  /// First value for `name`, if any.
  pub fn get(&self, name: &str) -> Option<&str> {
    self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
  }

  /// Value for `name`, failing with a "missing parameter" problem if it is absent or blank.
  pub fn require(&self, name: &str) -> Result<&str, Problem> {
    match self.get(name) {
      Some(v) if !v.trim().is_empty() => Ok(v),
      _ => Err(Problem::missing_parameter(name)),
    }
  }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Values {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Values(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }
}

/// POST form values. Bodies with another content type yield no values.
#[derive(Clone, Debug, Default)]
pub struct FormValues(pub Values);

impl std::ops::Deref for FormValues {
  type Target = Values;
  fn deref(&self) -> &Values { &self.0 }
}

#[async_trait]
impl<S> FromRequest<S> for FormValues
where
  S: Send + Sync,
{
  type Rejection = Problem;

  async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
    let is_urlencoded = req
      .headers()
      .get(header::CONTENT_TYPE)
      .and_then(|h| h.to_str().ok())
      .and_then(|ct| ct.split(';').next())
      .map(|mime| mime.trim().eq_ignore_ascii_case("application/x-www-form-urlencoded"))
      .unwrap_or(false);

    let bytes = read_body(req.into_body()).await?;
    if !is_urlencoded {
      return Ok(FormValues::default());
    }
    Ok(FormValues(Values::parse(&bytes)))
  }
}

/// URL query values.
#[derive(Clone, Debug, Default)]
pub struct QueryValues(pub Values);

impl std::ops::Deref for QueryValues {
  type Target = Values;
  fn deref(&self) -> &Values { &self.0 }
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryValues
where
  S: Send + Sync,
{
  type Rejection = Infallible;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    let query = parts.uri.query().unwrap_or("");
    Ok(QueryValues(Values::parse(query.as_bytes())))
  }
}
