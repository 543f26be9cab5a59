//! JSON request bodies with client-facing error classification.

use axum::{
  async_trait,
  extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use super::read_body;
use crate::problem::Problem;

/// Decodes the body as a single JSON value of type `T`.
///
/// Records decoded this way should carry `#[serde(deny_unknown_fields)]`
/// so that unexpected keys surface as client errors.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
  T: DeserializeOwned,
  S: Send + Sync,
{
  type Rejection = Problem;

  async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
    let bytes = read_body(req.into_body()).await?;
    decode(&bytes).map(JsonBody)
  }
}

pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Problem> {
  if bytes.iter().all(u8::is_ascii_whitespace) {
    return Err(Problem::bad_request("body must not be empty"));
  }
  serde_json::from_slice(bytes).map_err(classify)
}

fn classify(err: serde_json::Error) -> Problem {
  let (line, column) = (err.line(), err.column());
  match err.classify() {
    Category::Eof => Problem::bad_request("body contains badly-formed JSON"),
    Category::Syntax => Problem::bad_request(format!(
      "body contains badly-formed JSON (at line {line}, column {column})"
    ))
    .with("line", line)
    .with("column", column),
    Category::Data => {
      let msg = err.to_string();
      match unknown_field(&msg) {
        Some(key) => Problem::bad_request(format!("body contains unknown key \"{key}\"")).with("key", key),
        None => Problem::bad_request(format!(
          "body contains incorrect JSON type (at line {line}, column {column})"
        ))
        .with("line", line)
        .with("column", column),
      }
    }
    Category::Io => Problem::bad_request("the request body could not be read"),
  }
}

/// Pulls the key out of serde's "unknown field `x`, expected ..." message.
fn unknown_field(msg: &str) -> Option<&str> {
  let rest = msg.strip_prefix("unknown field `")?;
  rest.split('`').next()
}
