//! Technology tags attached to portfolio projects.

use std::sync::Arc;

use axum::{
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use super::no_content;
use crate::domain::TechnologyTag;
use crate::extract::{FormValues, RequestContext};
use crate::problem::ServiceError;
use crate::protocol::{TechnologyTagCreated, TechnologyTagCreation, TechnologyTagUpdate};
use crate::state::AppState;

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn add(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let creation: TechnologyTagCreation = form.bind_new()?;
  state.validator.check(&creation)?;
  let technology_id = state.technologies.create(&ctx, &creation).await?;
  info!(target: "fontseca", %technology_id, "technology tag added");
  Ok((StatusCode::CREATED, Json(TechnologyTagCreated { technology_id })).into_response())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn list(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
) -> Result<Json<Vec<TechnologyTag>>, ServiceError> {
  Ok(Json(state.technologies.list(&ctx).await?))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn update(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let technology_id = form.require("technology_id")?;
  let update: TechnologyTagUpdate = form.bind_new()?;
  state.validator.check(&update)?;
  state.technologies.update(&ctx, technology_id, &update).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn remove(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let technology_id = form.require("technology_id")?;
  state.technologies.remove(&ctx, technology_id).await?;
  Ok(no_content())
}
