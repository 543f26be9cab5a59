//! Portfolio projects.
//!
//! `projects.set` answers 303 to `projects.info` when nothing changed; the
//! nullable URL setters and removers answer 409 instead.

use std::sync::Arc;

use axum::{
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::post,
  Json, Router,
};
use tracing::{info, instrument};

use super::{no_content, see_other, unchanged_conflict};
use crate::domain::Project;
use crate::extract::{FormValues, QueryValues, RequestContext};
use crate::problem::ServiceError;
use crate::protocol::{ProjectCreated, ProjectCreation, ProjectUpdate, ProjectUrl};
use crate::state::AppState;

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn list(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
) -> Result<Json<Vec<Project>>, ServiceError> {
  Ok(Json(state.projects.list(&ctx, false).await?))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn list_archived(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
) -> Result<Json<Vec<Project>>, ServiceError> {
  Ok(Json(state.projects.list(&ctx, true).await?))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn get_by_id(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  query: QueryValues,
) -> Result<Json<Project>, ServiceError> {
  let project_uuid = query.require("project_uuid")?;
  Ok(Json(state.projects.get_by_id(&ctx, project_uuid).await?))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn add(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let creation: ProjectCreation = form.bind_new()?;
  state.validator.check(&creation)?;
  let project_uuid = state.projects.create(&ctx, &creation).await?;
  info!(target: "fontseca", %project_uuid, name = %creation.name, "project added");
  Ok((StatusCode::CREATED, Json(ProjectCreated { project_uuid })).into_response())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn update(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let project_uuid = form.require("project_uuid")?;
  let update: ProjectUpdate = form.bind_new()?;
  state.validator.check(&update)?;
  if !state.projects.update(&ctx, project_uuid, &update).await? {
    return Ok(see_other("/me/projects.info", "project_uuid", project_uuid));
  }
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn archive(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let project_uuid = form.require("project_uuid")?;
  state.projects.archive(&ctx, project_uuid).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn unarchive(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let project_uuid = form.require("project_uuid")?;
  state.projects.unarchive(&ctx, project_uuid).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn finish(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let project_uuid = form.require("project_uuid")?;
  state.projects.finish(&ctx, project_uuid).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn remove(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let project_uuid = form.require("project_uuid")?;
  state.projects.remove(&ctx, project_uuid).await?;
  info!(target: "fontseca", %project_uuid, "project removed");
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id, field = field.wire_name()))]
pub async fn set_url(
  state: Arc<AppState>,
  ctx: RequestContext,
  form: FormValues,
  field: ProjectUrl,
) -> Result<Response, ServiceError> {
  let project_uuid = form.require("project_uuid")?;
  let url = form.require(field.wire_name())?;
  if !state.projects.set_url(&ctx, project_uuid, field, url).await? {
    return Ok(unchanged_conflict(field.wire_name()));
  }
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id, field = field.wire_name()))]
pub async fn remove_url(
  state: Arc<AppState>,
  ctx: RequestContext,
  form: FormValues,
  field: ProjectUrl,
) -> Result<Response, ServiceError> {
  let project_uuid = form.require("project_uuid")?;
  if !state.projects.remove_url(&ctx, project_uuid, field).await? {
    return Ok(unchanged_conflict(field.wire_name()));
  }
  Ok(no_content())
}

/// `/me/projects.{field}.set` and `/me/projects.{field}.remove` for every URL field.
pub fn url_routes() -> Router<Arc<AppState>> {
  ProjectUrl::ALL.into_iter().fold(Router::new(), |router, field| {
    router
      .route(
        &format!("/me/projects.{}.set", field.wire_name()),
        post(move |State(state): State<Arc<AppState>>, ctx: RequestContext, form: FormValues| {
          set_url(state, ctx, form, field)
        }),
      )
      .route(
        &format!("/me/projects.{}.remove", field.wire_name()),
        post(move |State(state): State<Arc<AppState>>, ctx: RequestContext, form: FormValues| {
          remove_url(state, ctx, form, field)
        }),
      )
  })
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn add_technology_tag(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let project_uuid = form.require("project_uuid")?;
  let technology_id = form.require("technology_id")?;
  state.projects.add_technology_tag(&ctx, project_uuid, technology_id).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn remove_technology_tag(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let project_uuid = form.require("project_uuid")?;
  let technology_id = form.require("technology_id")?;
  state.projects.remove_technology_tag(&ctx, project_uuid, technology_id).await?;
  Ok(no_content())
}
