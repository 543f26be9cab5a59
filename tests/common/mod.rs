#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{to_bytes, Body, Bytes},
  http::{header, HeaderMap, Request, StatusCode},
  Router,
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use fontseca_backend::domain::{
  Article, ArticleLink, ArticlePatch, Experience, Me, Project, Publication, Tag, TechnologyTag, Topic,
};
use fontseca_backend::extract::{ArticleFilter, RequestContext};
use fontseca_backend::protocol::{
  ArticleCreation, ArticleUpdate, ExperienceCreation, ExperienceUpdate, MeUpdate, ProjectCreation, ProjectUpdate,
  ProjectUrl, TagCreation, TagUpdate, TechnologyTagCreation, TechnologyTagUpdate, TopicCreation, TopicUpdate,
};
use fontseca_backend::services::{
  ArticlePatchesService, ArticlesService, DraftsService, ExperienceService, MeService, Page, ProjectsService, Renderer,
  TagsService, TechnologyTagService, TopicsService,
};
use fontseca_backend::{build_router, AppState, Problem, RequestValidator, ServerConfig, ServiceError, ServiceResult};

/// How the fake answers a call.
#[derive(Clone, Debug)]
pub enum Outcome {
  Ok,
  /// Succeeds, but `bool`-returning calls report that nothing changed.
  Unchanged,
  Fail(Problem),
  Unexpected(&'static str),
}

#[derive(Clone, Debug)]
pub struct Call {
  pub name: &'static str,
  pub request_id: String,
  pub args: Vec<String>,
}

/// One fake behind every service trait and the renderer.
#[derive(Default)]
pub struct Fake {
  default: Mutex<Option<Outcome>>,
  overrides: Mutex<HashMap<&'static str, Outcome>>,
  calls: Mutex<Vec<Call>>,
  pub filters: Mutex<Vec<ArticleFilter>>,
  pub rendered: Mutex<Vec<(Page, Value)>>,
  pub render_error: Mutex<Option<&'static str>>,
}

impl Fake {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn answer(&self, outcome: Outcome) {
    *self.default.lock().unwrap() = Some(outcome);
  }

  pub fn answer_for(&self, call: &'static str, outcome: Outcome) {
    self.overrides.lock().unwrap().insert(call, outcome);
  }

  pub fn calls(&self) -> Vec<Call> {
    self.calls.lock().unwrap().clone()
  }

  pub fn call_names(&self) -> Vec<&'static str> {
    self.calls().into_iter().map(|c| c.name).collect()
  }

  pub fn last_call(&self) -> Option<Call> {
    self.calls.lock().unwrap().last().cloned()
  }

  fn outcome(&self, name: &'static str) -> Outcome {
    if let Some(o) = self.overrides.lock().unwrap().get(name) {
      return o.clone();
    }
    self.default.lock().unwrap().clone().unwrap_or(Outcome::Ok)
  }

  fn settle<T>(&self, name: &'static str, ctx: &RequestContext, args: &[&str], value: T) -> ServiceResult<T> {
    self.calls.lock().unwrap().push(Call {
      name,
      request_id: ctx.request_id.clone(),
      args: args.iter().map(|a| a.to_string()).collect(),
    });
    match self.outcome(name) {
      Outcome::Ok | Outcome::Unchanged => Ok(value),
      Outcome::Fail(p) => Err(p.into()),
      Outcome::Unexpected(msg) => Err(ServiceError::unexpected(msg)),
    }
  }

  fn settle_changed(&self, name: &'static str, ctx: &RequestContext, args: &[&str]) -> ServiceResult<bool> {
    let changed = !matches!(self.outcome(name), Outcome::Unchanged);
    self.settle(name, ctx, args, changed)
  }

  fn record_filter(&self, filter: &ArticleFilter) {
    self.filters.lock().unwrap().push(filter.clone());
  }
}

pub fn sample_tag() -> Tag {
  Tag { id: "rust".into(), name: "Rust".into(), created_at: Utc::now(), updated_at: None }
}

pub fn sample_topic() -> Topic {
  Topic { id: "systems".into(), name: "Systems".into(), created_at: Utc::now(), updated_at: None }
}

pub fn sample_article() -> Article {
  Article {
    uuid: Uuid::nil(),
    title: "Hello".into(),
    author: "fontseca".into(),
    slug: "hello".into(),
    read_time: 3,
    summary: "A first post.".into(),
    cover_url: None,
    cover_caption: None,
    content: "Body".into(),
    topic: Some(sample_topic()),
    tags: vec![sample_tag()],
    is_draft: false,
    is_pinned: false,
    is_hidden: false,
    published_at: Some(Utc::now()),
    modified_at: None,
    drafted_at: Utc::now(),
    updated_at: None,
  }
}

pub fn sample_project() -> Project {
  Project {
    uuid: Uuid::nil(),
    name: "Site".into(),
    slug: "site".into(),
    homepage: None,
    company: None,
    company_homepage: None,
    language: Some("Rust".into()),
    summary: "This site.".into(),
    read_time: 2,
    content: String::new(),
    first_image_url: None,
    second_image_url: None,
    github_url: None,
    collection_url: None,
    playground_url: None,
    technologies: vec![],
    archived: false,
    finished: true,
    created_at: Utc::now(),
    updated_at: None,
  }
}

pub fn sample_experience() -> Experience {
  Experience {
    uuid: Uuid::nil(),
    starts: 2020,
    ends: None,
    job_title: "Engineer".into(),
    company: "Acme".into(),
    company_homepage: None,
    country: "Nicaragua".into(),
    summary: "Built things.".into(),
    active: true,
    hidden: false,
    created_at: Utc::now(),
    updated_at: None,
  }
}

pub fn sample_me() -> Me {
  Me {
    username: "fontseca".into(),
    first_name: "Jeremy".into(),
    last_name: "Fonseca".into(),
    summary: "Backend developer.".into(),
    job_title: "Software Engineer".into(),
    email: "me@fontseca.dev".into(),
    photo_url: None,
    resume_url: None,
    coding_since: 2017,
    company: None,
    location: None,
    hireable: true,
    github_url: None,
    linkedin_url: None,
    youtube_url: None,
    twitter_url: None,
    instagram_url: None,
    created_at: Utc::now(),
    updated_at: None,
  }
}

#[async_trait]
impl ArticlesService for Fake {
  async fn list(&self, ctx: &RequestContext, filter: &ArticleFilter) -> ServiceResult<Vec<Article>> {
    self.record_filter(filter);
    self.settle("articles.list", ctx, &[], vec![sample_article()])
  }
  async fn list_hidden(&self, ctx: &RequestContext, filter: &ArticleFilter) -> ServiceResult<Vec<Article>> {
    self.record_filter(filter);
    self.settle("articles.list_hidden", ctx, &[], vec![])
  }
  async fn publications(&self, ctx: &RequestContext) -> ServiceResult<Vec<Publication>> {
    self.settle("articles.publications", ctx, &[], vec![Publication { year: 2024, month: 2 }])
  }
  async fn get_by_id(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<Article> {
    self.settle("articles.get_by_id", ctx, &[article_uuid], sample_article())
  }
  async fn get_by_link(&self, ctx: &RequestContext, link: &ArticleLink) -> ServiceResult<Article> {
    let (year, month) = (link.year.to_string(), link.month.to_string());
    self.settle("articles.get_by_link", ctx, &[&link.topic, &year, &month, &link.slug], sample_article())
  }
  async fn amend(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()> {
    self.settle("articles.amend", ctx, &[article_uuid], ())
  }
  async fn remove(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()> {
    self.settle("articles.remove", ctx, &[article_uuid], ())
  }
  async fn pin(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()> {
    self.settle("articles.pin", ctx, &[article_uuid], ())
  }
  async fn unpin(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()> {
    self.settle("articles.unpin", ctx, &[article_uuid], ())
  }
  async fn hide(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()> {
    self.settle("articles.hide", ctx, &[article_uuid], ())
  }
  async fn show(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()> {
    self.settle("articles.show", ctx, &[article_uuid], ())
  }
  async fn add_tag(&self, ctx: &RequestContext, article_uuid: &str, tag_id: &str) -> ServiceResult<()> {
    self.settle("articles.add_tag", ctx, &[article_uuid, tag_id], ())
  }
  async fn remove_tag(&self, ctx: &RequestContext, article_uuid: &str, tag_id: &str) -> ServiceResult<()> {
    self.settle("articles.remove_tag", ctx, &[article_uuid, tag_id], ())
  }
}

#[async_trait]
impl DraftsService for Fake {
  async fn draft(&self, ctx: &RequestContext, creation: &ArticleCreation) -> ServiceResult<String> {
    self.settle("drafts.draft", ctx, &[&creation.title], "5a1f0e0e-0000-4000-8000-000000000001".into())
  }
  async fn publish(&self, ctx: &RequestContext, draft_uuid: &str) -> ServiceResult<()> {
    self.settle("drafts.publish", ctx, &[draft_uuid], ())
  }
  async fn list(&self, ctx: &RequestContext, filter: &ArticleFilter) -> ServiceResult<Vec<Article>> {
    self.record_filter(filter);
    self.settle("drafts.list", ctx, &[], vec![])
  }
  async fn get_by_id(&self, ctx: &RequestContext, draft_uuid: &str) -> ServiceResult<Article> {
    self.settle("drafts.get_by_id", ctx, &[draft_uuid], sample_article())
  }
  async fn add_tag(&self, ctx: &RequestContext, draft_uuid: &str, tag_id: &str) -> ServiceResult<()> {
    self.settle("drafts.add_tag", ctx, &[draft_uuid, tag_id], ())
  }
  async fn remove_tag(&self, ctx: &RequestContext, draft_uuid: &str, tag_id: &str) -> ServiceResult<()> {
    self.settle("drafts.remove_tag", ctx, &[draft_uuid, tag_id], ())
  }
  async fn share(&self, ctx: &RequestContext, draft_uuid: &str) -> ServiceResult<String> {
    self.settle("drafts.share", ctx, &[draft_uuid], format!("https://fontseca.dev/archive/sharing/{draft_uuid}"))
  }
  async fn revise(&self, ctx: &RequestContext, draft_uuid: &str, revision: &ArticleUpdate) -> ServiceResult<()> {
    let title = revision.title.clone().unwrap_or_default();
    self.settle("drafts.revise", ctx, &[draft_uuid, &title], ())
  }
  async fn discard(&self, ctx: &RequestContext, draft_uuid: &str) -> ServiceResult<()> {
    self.settle("drafts.discard", ctx, &[draft_uuid], ())
  }
}

#[async_trait]
impl ArticlePatchesService for Fake {
  async fn list(&self, ctx: &RequestContext) -> ServiceResult<Vec<ArticlePatch>> {
    self.settle("patches.list", ctx, &[], vec![])
  }
  async fn revise(&self, ctx: &RequestContext, article_uuid: &str, revision: &ArticleUpdate) -> ServiceResult<()> {
    let title = revision.title.clone().unwrap_or_default();
    self.settle("patches.revise", ctx, &[article_uuid, &title], ())
  }
  async fn share(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<String> {
    self.settle("patches.share", ctx, &[article_uuid], format!("https://fontseca.dev/archive/sharing/{article_uuid}"))
  }
  async fn discard(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()> {
    self.settle("patches.discard", ctx, &[article_uuid], ())
  }
  async fn release(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()> {
    self.settle("patches.release", ctx, &[article_uuid], ())
  }
}

#[async_trait]
impl ProjectsService for Fake {
  async fn list(&self, ctx: &RequestContext, archived: bool) -> ServiceResult<Vec<Project>> {
    self.settle("projects.list", ctx, &[&archived.to_string()], vec![sample_project()])
  }
  async fn get_by_id(&self, ctx: &RequestContext, project_uuid: &str) -> ServiceResult<Project> {
    self.settle("projects.get_by_id", ctx, &[project_uuid], sample_project())
  }
  async fn create(&self, ctx: &RequestContext, creation: &ProjectCreation) -> ServiceResult<String> {
    self.settle("projects.create", ctx, &[&creation.name], "7c2d0e0e-0000-4000-8000-000000000002".into())
  }
  async fn update(&self, ctx: &RequestContext, project_uuid: &str, _update: &ProjectUpdate) -> ServiceResult<bool> {
    self.settle_changed("projects.update", ctx, &[project_uuid])
  }
  async fn archive(&self, ctx: &RequestContext, project_uuid: &str) -> ServiceResult<()> {
    self.settle("projects.archive", ctx, &[project_uuid], ())
  }
  async fn unarchive(&self, ctx: &RequestContext, project_uuid: &str) -> ServiceResult<()> {
    self.settle("projects.unarchive", ctx, &[project_uuid], ())
  }
  async fn finish(&self, ctx: &RequestContext, project_uuid: &str) -> ServiceResult<()> {
    self.settle("projects.finish", ctx, &[project_uuid], ())
  }
  async fn remove(&self, ctx: &RequestContext, project_uuid: &str) -> ServiceResult<()> {
    self.settle("projects.remove", ctx, &[project_uuid], ())
  }
  async fn set_url(&self, ctx: &RequestContext, project_uuid: &str, field: ProjectUrl, url: &str) -> ServiceResult<bool> {
    self.settle_changed("projects.set_url", ctx, &[project_uuid, field.wire_name(), url])
  }
  async fn remove_url(&self, ctx: &RequestContext, project_uuid: &str, field: ProjectUrl) -> ServiceResult<bool> {
    self.settle_changed("projects.remove_url", ctx, &[project_uuid, field.wire_name()])
  }
  async fn add_technology_tag(&self, ctx: &RequestContext, project_uuid: &str, technology_id: &str) -> ServiceResult<()> {
    self.settle("projects.add_technology_tag", ctx, &[project_uuid, technology_id], ())
  }
  async fn remove_technology_tag(&self, ctx: &RequestContext, project_uuid: &str, technology_id: &str) -> ServiceResult<()> {
    self.settle("projects.remove_technology_tag", ctx, &[project_uuid, technology_id], ())
  }
}

#[async_trait]
impl ExperienceService for Fake {
  async fn list(&self, ctx: &RequestContext, hidden: bool) -> ServiceResult<Vec<Experience>> {
    self.settle("experience.list", ctx, &[&hidden.to_string()], vec![sample_experience()])
  }
  async fn get_by_id(&self, ctx: &RequestContext, experience_uuid: &str) -> ServiceResult<Experience> {
    self.settle("experience.get_by_id", ctx, &[experience_uuid], sample_experience())
  }
  async fn save(&self, ctx: &RequestContext, creation: &ExperienceCreation) -> ServiceResult<String> {
    self.settle("experience.save", ctx, &[&creation.company], "9e3f0e0e-0000-4000-8000-000000000003".into())
  }
  async fn update(&self, ctx: &RequestContext, experience_uuid: &str, _update: &ExperienceUpdate) -> ServiceResult<bool> {
    self.settle_changed("experience.update", ctx, &[experience_uuid])
  }
  async fn hide(&self, ctx: &RequestContext, experience_uuid: &str) -> ServiceResult<()> {
    self.settle("experience.hide", ctx, &[experience_uuid], ())
  }
  async fn show(&self, ctx: &RequestContext, experience_uuid: &str) -> ServiceResult<()> {
    self.settle("experience.show", ctx, &[experience_uuid], ())
  }
  async fn remove(&self, ctx: &RequestContext, experience_uuid: &str) -> ServiceResult<()> {
    self.settle("experience.remove", ctx, &[experience_uuid], ())
  }
}

#[async_trait]
impl TagsService for Fake {
  async fn create(&self, ctx: &RequestContext, creation: &TagCreation) -> ServiceResult<String> {
    self.settle("tags.create", ctx, &[&creation.name], "rust".into())
  }
  async fn list(&self, ctx: &RequestContext) -> ServiceResult<Vec<Tag>> {
    self.settle("tags.list", ctx, &[], vec![sample_tag()])
  }
  async fn update(&self, ctx: &RequestContext, tag_id: &str, update: &TagUpdate) -> ServiceResult<()> {
    self.settle("tags.update", ctx, &[tag_id, &update.name], ())
  }
  async fn remove(&self, ctx: &RequestContext, tag_id: &str) -> ServiceResult<()> {
    self.settle("tags.remove", ctx, &[tag_id], ())
  }
}

#[async_trait]
impl TopicsService for Fake {
  async fn create(&self, ctx: &RequestContext, creation: &TopicCreation) -> ServiceResult<String> {
    self.settle("topics.create", ctx, &[&creation.name], "systems".into())
  }
  async fn list(&self, ctx: &RequestContext) -> ServiceResult<Vec<Topic>> {
    self.settle("topics.list", ctx, &[], vec![sample_topic()])
  }
  async fn update(&self, ctx: &RequestContext, topic_id: &str, update: &TopicUpdate) -> ServiceResult<()> {
    self.settle("topics.update", ctx, &[topic_id, &update.name], ())
  }
  async fn remove(&self, ctx: &RequestContext, topic_id: &str) -> ServiceResult<()> {
    self.settle("topics.remove", ctx, &[topic_id], ())
  }
}

#[async_trait]
impl TechnologyTagService for Fake {
  async fn create(&self, ctx: &RequestContext, creation: &TechnologyTagCreation) -> ServiceResult<String> {
    self.settle("technologies.create", ctx, &[&creation.name], "rust".into())
  }
  async fn list(&self, ctx: &RequestContext) -> ServiceResult<Vec<TechnologyTag>> {
    self.settle("technologies.list", ctx, &[], vec![])
  }
  async fn update(&self, ctx: &RequestContext, technology_id: &str, update: &TechnologyTagUpdate) -> ServiceResult<()> {
    self.settle("technologies.update", ctx, &[technology_id, &update.name], ())
  }
  async fn remove(&self, ctx: &RequestContext, technology_id: &str) -> ServiceResult<()> {
    self.settle("technologies.remove", ctx, &[technology_id], ())
  }
}

#[async_trait]
impl MeService for Fake {
  async fn get(&self, ctx: &RequestContext) -> ServiceResult<Me> {
    self.settle("me.get", ctx, &[], sample_me())
  }
  async fn update(&self, ctx: &RequestContext, update: &MeUpdate) -> ServiceResult<bool> {
    let first_name = update.first_name.clone().unwrap_or_default();
    self.settle_changed("me.update", ctx, &[&first_name])
  }
  async fn set_photo(&self, ctx: &RequestContext, photo_url: &str) -> ServiceResult<bool> {
    self.settle_changed("me.set_photo", ctx, &[photo_url])
  }
  async fn set_resume(&self, ctx: &RequestContext, resume_url: &str) -> ServiceResult<bool> {
    self.settle_changed("me.set_resume", ctx, &[resume_url])
  }
  async fn set_hireable(&self, ctx: &RequestContext, hireable: bool) -> ServiceResult<()> {
    self.settle("me.set_hireable", ctx, &[&hireable.to_string()], ())
  }
}

impl Renderer for Fake {
  fn render(&self, page: Page, data: &Value) -> anyhow::Result<String> {
    if let Some(msg) = *self.render_error.lock().unwrap() {
      anyhow::bail!(msg);
    }
    self.rendered.lock().unwrap().push((page, data.clone()));
    Ok(format!("<h1>{}</h1>", page.template_name()))
  }
}

pub fn app(fake: &Arc<Fake>) -> Router {
  let state = AppState {
    articles: fake.clone(),
    drafts: fake.clone(),
    patches: fake.clone(),
    projects: fake.clone(),
    experience: fake.clone(),
    tags: fake.clone(),
    topics: fake.clone(),
    technologies: fake.clone(),
    me: fake.clone(),
    renderer: fake.clone(),
    validator: RequestValidator::default(),
  };
  build_router(Arc::new(state), &ServerConfig::default())
}

pub struct Reply {
  pub status: StatusCode,
  pub headers: HeaderMap,
  pub body: Bytes,
}

impl Reply {
  pub fn json(&self) -> Value {
    serde_json::from_slice(&self.body).expect("response body is JSON")
  }

  pub fn text(&self) -> String {
    String::from_utf8_lossy(&self.body).into_owned()
  }

  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(name).and_then(|v| v.to_str().ok())
  }
}

pub async fn send(fake: &Arc<Fake>, req: Request<Body>) -> Reply {
  let res = app(fake).oneshot(req).await.expect("router is infallible");
  let status = res.status();
  let headers = res.headers().clone();
  let body = to_bytes(res.into_body(), usize::MAX).await.expect("body");
  Reply { status, headers, body }
}

pub fn get(uri: &str) -> Request<Body> {
  Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
    .body(Body::from(form.to_string()))
    .unwrap()
}

pub fn post_json(uri: &str, json: impl Into<Body>) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(json.into())
    .unwrap()
}
