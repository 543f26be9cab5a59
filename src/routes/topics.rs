//! Archive topics. An article belongs to at most one topic.

use std::sync::Arc;

use axum::{
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use super::no_content;
use crate::domain::Topic;
use crate::extract::{FormValues, RequestContext};
use crate::problem::ServiceError;
use crate::protocol::{TopicCreated, TopicCreation, TopicUpdate};
use crate::state::AppState;

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn add(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let creation: TopicCreation = form.bind_new()?;
  state.validator.check(&creation)?;
  let topic_id = state.topics.create(&ctx, &creation).await?;
  info!(target: "fontseca", %topic_id, "topic added");
  Ok((StatusCode::CREATED, Json(TopicCreated { topic_id })).into_response())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn list(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
) -> Result<Json<Vec<Topic>>, ServiceError> {
  Ok(Json(state.topics.list(&ctx).await?))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn update(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let topic_id = form.require("topic_id")?;
  let update: TopicUpdate = form.bind_new()?;
  state.validator.check(&update)?;
  state.topics.update(&ctx, topic_id, &update).await?;
  Ok(no_content())
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn remove(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  form: FormValues,
) -> Result<Response, ServiceError> {
  let topic_id = form.require("topic_id")?;
  state.topics.remove(&ctx, topic_id).await?;
  Ok(no_content())
}
