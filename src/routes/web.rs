//! Server-rendered pages.

use std::sync::Arc;

use axum::{
  extract::{rejection::PathRejection, Path, State},
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use serde_json::{json, Value};
use tracing::{error, instrument};

use crate::domain::ArticleLink;
use crate::extract::{ArticleFilter, RequestContext};
use crate::problem::{Problem, ServiceError};
use crate::services::Page;
use crate::state::AppState;

fn render(state: &AppState, page: Page, data: &Value) -> Result<Response, ServiceError> {
  match state.renderer.render(page, data) {
    Ok(html) => Ok(Html(html).into_response()),
    Err(err) => Err(ServiceError::Unexpected(err.context(format!("rendering the {} page", page.template_name())))),
  }
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn home(State(state): State<Arc<AppState>>, ctx: RequestContext) -> Result<Response, ServiceError> {
  let me = state.me.get(&ctx).await?;
  render(&state, Page::Home, &json!({ "me": me }))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn experience(State(state): State<Arc<AppState>>, ctx: RequestContext) -> Result<Response, ServiceError> {
  let experience = state.experience.list(&ctx, false).await?;
  render(&state, Page::Experience, &json!({ "experience": experience }))
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn projects(State(state): State<Arc<AppState>>, ctx: RequestContext) -> Result<Response, ServiceError> {
  let projects = state.projects.list(&ctx, false).await?;
  render(&state, Page::Projects, &json!({ "projects": projects }))
}

/// Listing page. The four reads run concurrently and the page is only
/// rendered when all of them succeed.
#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn archive(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  filter: ArticleFilter,
) -> Result<Response, ServiceError> {
  let fetched = tokio::try_join!(
    state.articles.list(&ctx, &filter),
    state.articles.publications(&ctx),
    state.topics.list(&ctx),
    state.tags.list(&ctx),
  );

  let (articles, publications, topics, tags) = match fetched {
    Ok(all) => all,
    Err(err) => {
      error!(target: "fontseca", error = %err, "archive page aborted");
      return Err(Problem::unexpected().into());
    }
  };

  let data = json!({
    "articles": articles,
    "publications": publications,
    "topics": topics,
    "tags": tags,
    "filter": filter,
  });
  render(&state, Page::Archive, &data)
}

#[instrument(level = "info", skip_all, fields(request_id = %ctx.request_id))]
pub async fn article(
  State(state): State<Arc<AppState>>,
  ctx: RequestContext,
  link: Result<Path<ArticleLink>, PathRejection>,
) -> Result<Response, ServiceError> {
  // A year or month that is not a number cannot name an article.
  let Ok(Path(link)) = link else {
    return Err(Problem::new(StatusCode::NOT_FOUND).detail("The requested article does not exist.").into());
  };
  let article = state.articles.get_by_link(&ctx, &link).await?;
  render(&state, Page::Article, &json!({ "article": article }))
}
