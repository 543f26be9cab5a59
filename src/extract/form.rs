//! Form binding: typed coercion of form values into request records.
//!
//! Each record lists its fields once through `impl_bind_form!`, in
//! declaration order. Binding walks that list, trims each present value and
//! coerces it into the field's type. The first failure stops the walk, so
//! fields before it stay populated and fields after it keep their defaults.

use std::num::IntErrorKind;

use axum::http::StatusCode;
use thiserror::Error;

use super::Values;
use crate::problem::{Problem, ServiceError};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BindError {
  #[error("unable to parse the value of field '{field}' as {ty}")]
  Unparsable { ty: &'static str, field: &'static str },
  #[error("value '{value}' of field '{field}' is out of range for {ty}")]
  OutOfRange { ty: &'static str, field: &'static str, value: String },
}

impl BindError {
  pub fn field(&self) -> &'static str {
    match self {
      BindError::Unparsable { field, .. } | BindError::OutOfRange { field, .. } => field,
    }
  }
}

impl From<BindError> for Problem {
  fn from(err: BindError) -> Self {
    Problem::new(StatusCode::BAD_REQUEST)
      .title("Malformed form data.")
      .detail(err.to_string())
      .with("field", err.field())
  }
}

impl From<BindError> for ServiceError {
  fn from(err: BindError) -> Self {
    ServiceError::Problem(err.into())
  }
}

/// A type a single form value can be coerced into. `raw` is already trimmed.
pub trait FormValue: Sized {
  fn from_form_value(raw: &str, field: &'static str) -> Result<Self, BindError>;
}

impl FormValue for String {
  fn from_form_value(raw: &str, _field: &'static str) -> Result<Self, BindError> {
    Ok(raw.to_string())
  }
}

macro_rules! signed_form_value {
  ($($t:ty),* $(,)?) => {$(
    impl FormValue for $t {
      fn from_form_value(raw: &str, field: &'static str) -> Result<Self, BindError> {
        raw.parse::<$t>().map_err(|e| match e.kind() {
          IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => BindError::OutOfRange {
            ty: stringify!($t),
            field,
            value: raw.to_string(),
          },
          _ => BindError::Unparsable { ty: stringify!($t), field },
        })
      }
    }
  )*};
}

signed_form_value!(isize, i8, i16, i32, i64);

fn spells_infinity(raw: &str) -> bool {
  let s = raw.trim_start_matches(['+', '-']);
  s.eq_ignore_ascii_case("inf") || s.eq_ignore_ascii_case("infinity")
}

macro_rules! float_form_value {
  ($($t:ty),* $(,)?) => {$(
    impl FormValue for $t {
      fn from_form_value(raw: &str, field: &'static str) -> Result<Self, BindError> {
        match raw.parse::<$t>() {
          Ok(v) if v.is_infinite() && !spells_infinity(raw) => Err(BindError::OutOfRange {
            ty: stringify!($t),
            field,
            value: raw.to_string(),
          }),
          Ok(v) => Ok(v),
          Err(_) => Err(BindError::Unparsable { ty: stringify!($t), field }),
        }
      }
    }
  )*};
}

float_form_value!(f32, f64);

impl FormValue for bool {
  fn from_form_value(raw: &str, field: &'static str) -> Result<Self, BindError> {
    match raw {
      "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
      "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
      _ => Err(BindError::Unparsable { ty: "bool", field }),
    }
  }
}

/// Blank values bind to `None`.
impl<T: FormValue> FormValue for Option<T> {
  fn from_form_value(raw: &str, field: &'static str) -> Result<Self, BindError> {
    if raw.is_empty() {
      Ok(None)
    } else {
      T::from_form_value(raw, field).map(Some)
    }
  }
}

/// A record that can be populated from form values.
pub trait BindForm {
  fn bind_form(&mut self, values: &Values) -> Result<(), BindError>;
}

impl Values {
  /// Coerces the value named `name` into `slot`. Absent names leave `slot` untouched.
  pub fn bind_field<T: FormValue>(&self, name: &'static str, slot: &mut T) -> Result<(), BindError> {
    if let Some(raw) = self.get(name) {
      *slot = T::from_form_value(raw.trim(), name)?;
    }
    Ok(())
  }

  /// Populates `record` in place.
  pub fn bind<R: BindForm>(&self, record: &mut R) -> Result<(), BindError> {
    record.bind_form(self)
  }

  /// Builds a fresh record from its defaults and binds it.
  pub fn bind_new<R: BindForm + Default>(&self) -> Result<R, BindError> {
    let mut record = R::default();
    record.bind_form(self)?;
    Ok(record)
  }
}

/// Implements `BindForm` from an ordered `field => "wire_name"` list.
#[macro_export]
macro_rules! impl_bind_form {
  ($record:ty { $($field:ident => $wire:literal),* $(,)? }) => {
    impl $crate::extract::BindForm for $record {
      fn bind_form(
        &mut self,
        values: &$crate::extract::Values,
      ) -> ::std::result::Result<(), $crate::extract::BindError> {
        $( values.bind_field($wire, &mut self.$field)?; )*
        Ok(())
      }
    }
  };
}
