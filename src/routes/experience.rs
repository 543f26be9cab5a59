//! Work experience entries.

use std::sync::Arc;

use axum::{
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use super::{no_content, see_other};
use crate::domain::Experience;
use crate::extract::{FormValues, QueryValues, RequestContext};
use crate::problem::ServiceError;
use crate::protocol::{ExperienceCreated, ExperienceCreation, ExperienceUpdate};
use crate::state::AppState;

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn list(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
) -> Result<Json<Vec<Experience>>, ServiceError> {
  Ok(Json(state.experience.list(&ctx, false).await?))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn list_hidden(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
) -> Result<Json<Vec<Experience>>, ServiceError> {
  Ok(Json(state.experience.list(&ctx, true).await?))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn get_by_id(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  query: QueryValues,
) -> Result<Json<Experience>, ServiceError> {
  let experience_uuid = query.require("experience_uuid")?;
  Ok(Json(state.experience.get_by_id(&ctx, experience_uuid).await?))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn add(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let creation: ExperienceCreation = form.bind_new()?;
  state.validator.check(&creation)?;
  let experience_uuid = state.experience.save(&ctx, &creation).await?;
  info!(target: "fontseca", %experience_uuid, company = %creation.company, "experience added");
  Ok((StatusCode::CREATED, Json(ExperienceCreated { experience_uuid })).into_response())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn update(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let experience_uuid = form.require("experience_uuid")?;
  let update: ExperienceUpdate = form.bind_new()?;
  state.validator.check(&update)?;
  if !state.experience.update(&ctx, experience_uuid, &update).await? {
    return Ok(see_other("/me/experience.info", "experience_uuid", experience_uuid));
  }
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn hide(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let experience_uuid = form.require("experience_uuid")?;
  state.experience.hide(&ctx, experience_uuid).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn show(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let experience_uuid = form.require("experience_uuid")?;
  state.experience.show(&ctx, experience_uuid).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn remove(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let experience_uuid = form.require("experience_uuid")?;
  state.experience.remove(&ctx, experience_uuid).await?;
  info!(target: "fontseca", %experience_uuid, "experience removed");
  Ok(no_content())
}
