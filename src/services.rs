//! Collaborator seams. The handlers only ever talk to these traits; the
//! implementations (persistence, business rules, templating) live elsewhere.
//!
//! Every call receives the request's `RequestContext` untouched. Calls that
//! report a `bool` return `false` when they succeeded without changing
//! anything.

use async_trait::async_trait;

use crate::domain::{
  Article, ArticleLink, ArticlePatch, Experience, Me, Project, Publication, Tag, TechnologyTag, Topic,
};
use crate::extract::{ArticleFilter, RequestContext};
use crate::problem::ServiceResult;
use crate::protocol::{
  ArticleCreation, ArticleUpdate, ExperienceCreation, ExperienceUpdate, MeUpdate, ProjectCreation, ProjectUpdate,
  ProjectUrl, TagCreation, TagUpdate, TechnologyTagCreation, TechnologyTagUpdate, TopicCreation, TopicUpdate,
};

#[async_trait]
pub trait ArticlesService: Send + Sync {
  async fn list(&self, ctx: &RequestContext, filter: &ArticleFilter) -> ServiceResult<Vec<Article>>;
  async fn list_hidden(&self, ctx: &RequestContext, filter: &ArticleFilter) -> ServiceResult<Vec<Article>>;
  async fn publications(&self, ctx: &RequestContext) -> ServiceResult<Vec<Publication>>;
  async fn get_by_id(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<Article>;
  async fn get_by_link(&self, ctx: &RequestContext, link: &ArticleLink) -> ServiceResult<Article>;
  /// Opens a patch on a published article.
  async fn amend(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()>;
  async fn remove(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()>;
  async fn pin(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()>;
  async fn unpin(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()>;
  async fn hide(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()>;
  async fn show(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()>;
  async fn add_tag(&self, ctx: &RequestContext, article_uuid: &str, tag_id: &str) -> ServiceResult<()>;
  async fn remove_tag(&self, ctx: &RequestContext, article_uuid: &str, tag_id: &str) -> ServiceResult<()>;
}

#[async_trait]
pub trait DraftsService: Send + Sync {
  /// Starts a draft and returns its UUID.
  async fn draft(&self, ctx: &RequestContext, creation: &ArticleCreation) -> ServiceResult<String>;
  async fn publish(&self, ctx: &RequestContext, draft_uuid: &str) -> ServiceResult<()>;
  async fn list(&self, ctx: &RequestContext, filter: &ArticleFilter) -> ServiceResult<Vec<Article>>;
  async fn get_by_id(&self, ctx: &RequestContext, draft_uuid: &str) -> ServiceResult<Article>;
  async fn add_tag(&self, ctx: &RequestContext, draft_uuid: &str, tag_id: &str) -> ServiceResult<()>;
  async fn remove_tag(&self, ctx: &RequestContext, draft_uuid: &str, tag_id: &str) -> ServiceResult<()>;
  /// Returns a link through which the unpublished draft can be previewed.
  async fn share(&self, ctx: &RequestContext, draft_uuid: &str) -> ServiceResult<String>;
  async fn revise(&self, ctx: &RequestContext, draft_uuid: &str, revision: &ArticleUpdate) -> ServiceResult<()>;
  async fn discard(&self, ctx: &RequestContext, draft_uuid: &str) -> ServiceResult<()>;
}

#[async_trait]
pub trait ArticlePatchesService: Send + Sync {
  async fn list(&self, ctx: &RequestContext) -> ServiceResult<Vec<ArticlePatch>>;
  async fn revise(&self, ctx: &RequestContext, article_uuid: &str, revision: &ArticleUpdate) -> ServiceResult<()>;
  async fn share(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<String>;
  async fn discard(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()>;
  /// Applies the patch to the published article.
  async fn release(&self, ctx: &RequestContext, article_uuid: &str) -> ServiceResult<()>;
}

#[async_trait]
pub trait ProjectsService: Send + Sync {
  async fn list(&self, ctx: &RequestContext, archived: bool) -> ServiceResult<Vec<Project>>;
  async fn get_by_id(&self, ctx: &RequestContext, project_uuid: &str) -> ServiceResult<Project>;
  async fn create(&self, ctx: &RequestContext, creation: &ProjectCreation) -> ServiceResult<String>;
  async fn update(&self, ctx: &RequestContext, project_uuid: &str, update: &ProjectUpdate) -> ServiceResult<bool>;
  async fn archive(&self, ctx: &RequestContext, project_uuid: &str) -> ServiceResult<()>;
  async fn unarchive(&self, ctx: &RequestContext, project_uuid: &str) -> ServiceResult<()>;
  async fn finish(&self, ctx: &RequestContext, project_uuid: &str) -> ServiceResult<()>;
  async fn remove(&self, ctx: &RequestContext, project_uuid: &str) -> ServiceResult<()>;
  async fn set_url(&self, ctx: &RequestContext, project_uuid: &str, field: ProjectUrl, url: &str) -> ServiceResult<bool>;
  async fn remove_url(&self, ctx: &RequestContext, project_uuid: &str, field: ProjectUrl) -> ServiceResult<bool>;
  async fn add_technology_tag(&self, ctx: &RequestContext, project_uuid: &str, technology_id: &str) -> ServiceResult<()>;
  async fn remove_technology_tag(&self, ctx: &RequestContext, project_uuid: &str, technology_id: &str) -> ServiceResult<()>;
}

#[async_trait]
pub trait ExperienceService: Send + Sync {
  async fn list(&self, ctx: &RequestContext, hidden: bool) -> ServiceResult<Vec<Experience>>;
  async fn get_by_id(&self, ctx: &RequestContext, experience_uuid: &str) -> ServiceResult<Experience>;
  async fn save(&self, ctx: &RequestContext, creation: &ExperienceCreation) -> ServiceResult<String>;
  async fn update(&self, ctx: &RequestContext, experience_uuid: &str, update: &ExperienceUpdate) -> ServiceResult<bool>;
  async fn hide(&self, ctx: &RequestContext, experience_uuid: &str) -> ServiceResult<()>;
  async fn show(&self, ctx: &RequestContext, experience_uuid: &str) -> ServiceResult<()>;
  async fn remove(&self, ctx: &RequestContext, experience_uuid: &str) -> ServiceResult<()>;
}

#[async_trait]
pub trait TagsService: Send + Sync {
  async fn create(&self, ctx: &RequestContext, creation: &TagCreation) -> ServiceResult<String>;
  async fn list(&self, ctx: &RequestContext) -> ServiceResult<Vec<Tag>>;
  async fn update(&self, ctx: &RequestContext, tag_id: &str, update: &TagUpdate) -> ServiceResult<()>;
  async fn remove(&self, ctx: &RequestContext, tag_id: &str) -> ServiceResult<()>;
}

#[async_trait]
pub trait TopicsService: Send + Sync {
  async fn create(&self, ctx: &RequestContext, creation: &TopicCreation) -> ServiceResult<String>;
  async fn list(&self, ctx: &RequestContext) -> ServiceResult<Vec<Topic>>;
  async fn update(&self, ctx: &RequestContext, topic_id: &str, update: &TopicUpdate) -> ServiceResult<()>;
  async fn remove(&self, ctx: &RequestContext, topic_id: &str) -> ServiceResult<()>;
}

#[async_trait]
pub trait TechnologyTagService: Send + Sync {
  async fn create(&self, ctx: &RequestContext, creation: &TechnologyTagCreation) -> ServiceResult<String>;
  async fn list(&self, ctx: &RequestContext) -> ServiceResult<Vec<TechnologyTag>>;
  async fn update(&self, ctx: &RequestContext, technology_id: &str, update: &TechnologyTagUpdate) -> ServiceResult<()>;
  async fn remove(&self, ctx: &RequestContext, technology_id: &str) -> ServiceResult<()>;
}

#[async_trait]
pub trait MeService: Send + Sync {
  async fn get(&self, ctx: &RequestContext) -> ServiceResult<Me>;
  async fn update(&self, ctx: &RequestContext, update: &MeUpdate) -> ServiceResult<bool>;
  async fn set_photo(&self, ctx: &RequestContext, photo_url: &str) -> ServiceResult<bool>;
  async fn set_resume(&self, ctx: &RequestContext, resume_url: &str) -> ServiceResult<bool>;
  async fn set_hireable(&self, ctx: &RequestContext, hireable: bool) -> ServiceResult<()>;
}

/// Server-rendered pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
  Home,
  Experience,
  Projects,
  Archive,
  Article,
}

impl Page {
  pub fn template_name(self) -> &'static str {
    match self {
      Page::Home => "home",
      Page::Experience => "experience",
      Page::Projects => "projects",
      Page::Archive => "archive",
      Page::Article => "article",
    }
  }
}

/// Template engine seam. Rendering is synchronous and CPU-bound.
pub trait Renderer: Send + Sync {
  fn render(&self, page: Page, data: &serde_json::Value) -> anyhow::Result<String>;
}
