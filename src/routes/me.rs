//! The site owner's profile. Updates arrive as JSON; the photo, resume and
//! hireable setters take form values.

use std::sync::Arc;

use axum::{
  extract::State,
  response::{IntoResponse, Redirect, Response},
  Json,
};
use tracing::{info, instrument};

use super::{no_content, unchanged_conflict};
use crate::domain::Me;
use crate::extract::{FormValue, FormValues, JsonBody, RequestContext};
use crate::problem::ServiceError;
use crate::protocol::MeUpdate;
use crate::state::AppState;

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn get(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
) -> Result<Json<Me>, ServiceError> {
  Ok(Json(state.me.get(&ctx).await?))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn update(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  JsonBody(update): JsonBody<MeUpdate>,
) -> Result<Response, ServiceError> {
  state.validator.check(&update)?;
  if !state.me.update(&ctx, &update).await? {
    // `/me.info` takes no parameters.
    return Ok(Redirect::to("/me.info").into_response());
  }
  info!(target: "fontseca", "profile updated");
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn set_photo(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let photo_url = form.require("photo_url")?;
  if !state.me.set_photo(&ctx, photo_url).await? {
    return Ok(unchanged_conflict("photo_url"));
  }
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn set_resume(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let resume_url = form.require("resume_url")?;
  if !state.me.set_resume(&ctx, resume_url).await? {
    return Ok(unchanged_conflict("resume_url"));
  }
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn set_hireable(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let raw = form.require("hireable")?;
  let hireable = bool::from_form_value(raw.trim(), "hireable")?;
  state.me.set_hireable(&ctx, hireable).await?;
  Ok(no_content())
}
