//! Article listing filter parsed from the query string.
//!
//! Parsing is total: any query, including none at all, yields a usable
//! filter with positive pagination.

use std::{convert::Infallible, sync::OnceLock};

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use regex::Regex;
use serde::Serialize;

use super::Values;
use crate::domain::Publication;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_RESULTS_PER_PAGE: i64 = 20;

static WORD: OnceLock<Regex> = OnceLock::new();

fn words(s: &str) -> impl Iterator<Item = &str> {
  WORD.get_or_init(|| Regex::new(r"\w+").unwrap()).find_iter(s).map(|m| m.as_str())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArticleFilter {
  pub search: String,
  pub topic: String,
  pub tag: String,
  pub page: i64,
  pub results_per_page: i64,
  pub publication: Option<Publication>,
}

impl Default for ArticleFilter {
  fn default() -> Self {
    Self {
      search: String::new(),
      topic: String::new(),
      tag: String::new(),
      page: DEFAULT_PAGE,
      results_per_page: DEFAULT_RESULTS_PER_PAGE,
      publication: None,
    }
  }
}

impl ArticleFilter {
  pub fn from_query(query: &str) -> Self {
    Self::from_values(&Values::parse(query.as_bytes()))
  }

  pub fn from_values(values: &Values) -> Self {
    let get = |name| values.get(name).unwrap_or("");
    Self {
      search: normalize_search(get("search")),
      topic: slugify(get("topic")),
      tag: slugify(get("tag")),
      page: positive_or(get("page"), DEFAULT_PAGE),
      results_per_page: positive_or(get("rpp"), DEFAULT_RESULTS_PER_PAGE),
      publication: parse_publication(get("from")),
    }
  }
}

/// `">> = 20 www? xxx!"` becomes `"20 www xxx"`; underscores split words.
pub fn normalize_search(raw: &str) -> String {
  let raw = raw.trim();
  if raw.is_empty() {
    return String::new();
  }
  let spaced = raw.replace('_', " ");
  words(&spaced).collect::<Vec<_>>().join(" ")
}

/// `"My Topic!"` becomes `"My-Topic"`.
pub fn slugify(raw: &str) -> String {
  let raw = raw.trim();
  if raw.is_empty() {
    return String::new();
  }
  words(raw).collect::<Vec<_>>().join("-")
}

fn positive_or(raw: &str, default: i64) -> i64 {
  match raw.trim().parse::<i64>() {
    Ok(n) if n > 0 => n,
    _ => default,
  }
}

/// `"YYYY/MM"`; anything malformed means no publication filter.
fn parse_publication(raw: &str) -> Option<Publication> {
  let raw = raw.trim();
  if raw.is_empty() {
    return None;
  }
  let mut parts = raw.split('/');
  let (year, month) = match (parts.next(), parts.next(), parts.next()) {
    (Some(y), Some(m), None) => (y, m),
    _ => return None,
  };
  let year = year.parse::<i32>().ok()?;
  let month = month.parse::<u32>().ok()?;
  if !(1..=12).contains(&month) {
    return None;
  }
  Some(Publication { year, month })
}

#[async_trait]
impl<S> FromRequestParts<S> for ArticleFilter
where
  S: Send + Sync,
{
  type Rejection = Infallible;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    Ok(ArticleFilter::from_query(parts.uri.query().unwrap_or("")))
  }
}
