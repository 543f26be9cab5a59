//! Published articles. Identifiers come from the query on GET and from the
//! form on POST; side-effect actions answer 204.

use std::sync::Arc;

use axum::{extract::State, response::Response, Json};
use tracing::{info, instrument};

use super::no_content;
use crate::domain::{Article, Publication};
use crate::extract::{ArticleFilter, FormValues, QueryValues, RequestContext};
use crate::problem::ServiceError;
use crate::state::AppState;

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id, page = filter.page, rpp = filter.results_per_page))]
pub async fn list(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  filter: ArticleFilter,
) -> Result<Json<Vec<Article>>, ServiceError> {
  let articles = state.articles.list(&ctx, &filter).await?;
  Ok(Json(articles))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id, page = filter.page, rpp = filter.results_per_page))]
pub async fn list_hidden(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  filter: ArticleFilter,
) -> Result<Json<Vec<Article>>, ServiceError> {
  let articles = state.articles.list_hidden(&ctx, &filter).await?;
  Ok(Json(articles))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn publications(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
) -> Result<Json<Vec<Publication>>, ServiceError> {
  let publications = state.articles.publications(&ctx).await?;
  Ok(Json(publications))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn get_by_id(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  query: QueryValues,
) -> Result<Json<Article>, ServiceError> {
  let article_uuid = query.require("article_uuid")?;
  let article = state.articles.get_by_id(&ctx, article_uuid).await?;
  Ok(Json(article))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn amend(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let article_uuid = form.require("article_uuid")?;
  state.articles.amend(&ctx, article_uuid).await?;
  info!(target: "fontseca", %article_uuid, "patch opened on article");
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn remove(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let article_uuid = form.require("article_uuid")?;
  state.articles.remove(&ctx, article_uuid).await?;
  info!(target: "fontseca", %article_uuid, "article removed");
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn pin(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let article_uuid = form.require("article_uuid")?;
  state.articles.pin(&ctx, article_uuid).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn unpin(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let article_uuid = form.require("article_uuid")?;
  state.articles.unpin(&ctx, article_uuid).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn hide(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let article_uuid = form.require("article_uuid")?;
  state.articles.hide(&ctx, article_uuid).await?;
  info!(target: "fontseca", %article_uuid, "article hidden");
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn show(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let article_uuid = form.require("article_uuid")?;
  state.articles.show(&ctx, article_uuid).await?;
  info!(target: "fontseca", %article_uuid, "article shown");
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn add_tag(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let article_uuid = form.require("article_uuid")?;
  let tag_id = form.require("tag_id")?;
  state.articles.add_tag(&ctx, article_uuid, tag_id).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn remove_tag(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let article_uuid = form.require("article_uuid")?;
  let tag_id = form.require("tag_id")?;
  state.articles.remove_tag(&ctx, article_uuid, tag_id).await?;
  Ok(no_content())
}
