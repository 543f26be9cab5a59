//! Struct validation turned into problem details.

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::error;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::problem::{Problem, ServiceError};

/// One violated rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
  pub field: String,
  pub criterion: String,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub parameter: String,
}

/// Validator handed to the handlers through application state.
#[derive(Clone, Debug, Default)]
pub struct RequestValidator;

impl RequestValidator {
  pub fn new() -> Self { RequestValidator }

  /// Runs the record's rules. Violations become a 422 problem listing every
  /// violation; anything that is not a plain field violation is logged and
  /// reported as an unexpected error.
  pub fn check<T: Validate>(&self, record: &T) -> Result<(), ServiceError> {
    match record.validate() {
      Ok(()) => Ok(()),
      Err(errors) => match violations(&errors) {
        Some(list) => Err(validation_problem(list).into()),
        None => {
          error!(target: "fontseca", error = %errors, "validator produced non-field errors");
          Err(ServiceError::unexpected(format!("unsupported validation errors: {errors}")))
        }
      },
    }
  }
}

fn violations(errors: &ValidationErrors) -> Option<Vec<Violation>> {
  let mut out = Vec::new();
  for (field, kind) in errors.errors() {
    let ValidationErrorsKind::Field(list) = kind else {
      return None;
    };
    for e in list {
      out.push(Violation {
        field: field.to_string(),
        criterion: e.code.to_string(),
        parameter: parameter(&e.params),
      });
    }
  }
  out.sort_by(|a, b| (&a.field, &a.criterion).cmp(&(&b.field, &b.criterion)));
  Some(out)
}

/// Rule parameters other than the offending value: a lone parameter is
/// rendered bare (`"64"`), several as `min=1,max=64`.
fn parameter<K: AsRef<str> + Ord>(params: &std::collections::HashMap<K, Value>) -> String {
  let mut pairs: Vec<(&str, String)> = params
    .iter()
    .filter(|(k, _)| k.as_ref() != "value")
    .map(|(k, v)| {
      let v = match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
      };
      (k.as_ref(), v)
    })
    .collect();
  pairs.sort();
  match pairs.as_slice() {
    [] => String::new(),
    [(_, v)] => v.clone(),
    many => many.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join(","),
  }
}

fn validation_problem(list: Vec<Violation>) -> Problem {
  let detail = match list.as_slice() {
    [one] => format!("The '{}' field failed the '{}' rule.", one.field, one.criterion),
    many => format!("{} fields failed validation.", many.len()),
  };
  Problem::new(StatusCode::UNPROCESSABLE_ENTITY)
    .title("Failed to validate request data.")
    .detail(detail)
    .with("errors", serde_json::to_value(list).unwrap_or(Value::Null))
}
