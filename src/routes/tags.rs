//! Archive tags.

use std::sync::Arc;

use axum::{
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use super::no_content;
use crate::domain::Tag;
use crate::extract::{FormValues, RequestContext};
use crate::problem::ServiceError;
use crate::protocol::{TagCreated, TagCreation, TagUpdate};
use crate::state::AppState;

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn add(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let creation: TagCreation = form.bind_new()?;
  state.validator.check(&creation)?;
  let tag_id = state.tags.create(&ctx, &creation).await?;
  info!(target: "fontseca", %tag_id, "tag added");
  Ok((StatusCode::CREATED, Json(TagCreated { tag_id })).into_response())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn list(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
) -> Result<Json<Vec<Tag>>, ServiceError> {
  Ok(Json(state.tags.list(&ctx).await?))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn update(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let tag_id = form.require("tag_id")?;
  let update: TagUpdate = form.bind_new()?;
  state.validator.check(&update)?;
  state.tags.update(&ctx, tag_id, &update).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn remove(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let tag_id = form.require("tag_id")?;
  state.tags.remove(&ctx, tag_id).await?;
  Ok(no_content())
}
