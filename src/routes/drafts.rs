//! Drafts: unpublished articles, from start to publication or discard.

use std::sync::Arc;

use axum::{
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use super::no_content;
use crate::domain::Article;
use crate::extract::{ArticleFilter, FormValues, QueryValues, RequestContext};
use crate::problem::ServiceError;
use crate::protocol::{ArticleCreation, ArticleUpdate, DraftCreated, ShareableLink};
use crate::state::AppState;

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn start(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let creation: ArticleCreation = form.bind_new()?;
  state.validator.check(&creation)?;
  let draft_uuid = state.drafts.draft(&ctx, &creation).await?;
  info!(target: "fontseca", %draft_uuid, title = %creation.title, "draft started");
  Ok((StatusCode::CREATED, Json(DraftCreated { draft_uuid })).into_response())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn publish(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let draft_uuid = form.require("draft_uuid")?;
  state.drafts.publish(&ctx, draft_uuid).await?;
  info!(target: "fontseca", %draft_uuid, "draft published");
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id, page = filter.page, rpp = filter.results_per_page))]
pub async fn list(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  filter: ArticleFilter,
) -> Result<Json<Vec<Article>>, ServiceError> {
  let drafts = state.drafts.list(&ctx, &filter).await?;
  Ok(Json(drafts))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn get_by_id(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  query: QueryValues,
) -> Result<Json<Article>, ServiceError> {
  let draft_uuid = query.require("draft_uuid")?;
  let draft = state.drafts.get_by_id(&ctx, draft_uuid).await?;
  Ok(Json(draft))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn add_tag(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let draft_uuid = form.require("draft_uuid")?;
  let tag_id = form.require("tag_id")?;
  state.drafts.add_tag(&ctx, draft_uuid, tag_id).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn remove_tag(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let draft_uuid = form.require("draft_uuid")?;
  let tag_id = form.require("tag_id")?;
  state.drafts.remove_tag(&ctx, draft_uuid, tag_id).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn share(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Json<ShareableLink>, ServiceError> {
  let draft_uuid = form.require("draft_uuid")?;
  let shareable_link = state.drafts.share(&ctx, draft_uuid).await?;
  Ok(Json(ShareableLink { shareable_link }))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn revise(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let draft_uuid = form.require("draft_uuid")?;
  let revision: ArticleUpdate = form.bind_new()?;
  state.validator.check(&revision)?;
  state.drafts.revise(&ctx, draft_uuid, &revision).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn discard(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let draft_uuid = form.require("draft_uuid")?;
  state.drafts.discard(&ctx, draft_uuid).await?;
  info!(target: "fontseca", %draft_uuid, "draft discarded");
  Ok(no_content())
}
