//! Pending amendments to published articles.

use std::sync::Arc;

use axum::{extract::State, response::Response, Json};
use tracing::{info, instrument};

use super::no_content;
use crate::domain::ArticlePatch;
use crate::extract::{FormValues, RequestContext};
use crate::problem::ServiceError;
use crate::protocol::{ArticleUpdate, ShareableLink};
use crate::state::AppState;

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn list(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
) -> Result<Json<Vec<ArticlePatch>>, ServiceError> {
  let patches = state.patches.list(&ctx).await?;
  Ok(Json(patches))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn revise(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let article_uuid = form.require("article_uuid")?;
  let revision: ArticleUpdate = form.bind_new()?;
  state.validator.check(&revision)?;
  state.patches.revise(&ctx, article_uuid, &revision).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn share(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Json<ShareableLink>, ServiceError> {
  let article_uuid = form.require("article_uuid")?;
  let shareable_link = state.patches.share(&ctx, article_uuid).await?;
  Ok(Json(ShareableLink { shareable_link }))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn discard(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let article_uuid = form.require("article_uuid")?;
  state.patches.discard(&ctx, article_uuid).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn release(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let article_uuid = form.require("article_uuid")?;
  state.patches.release(&ctx, article_uuid).await?;
  info!(target: "fontseca", %article_uuid, "patch released");
  Ok(no_content())
}
