//! Application state: the service collaborators, the page renderer and the
//! request validator, shared by every handler behind an `Arc`.

use std::sync::Arc;

use crate::services::{
  ArticlePatchesService, ArticlesService, DraftsService, ExperienceService, MeService, ProjectsService, Renderer,
  TagsService, TechnologyTagService, TopicsService,
};
use crate::validation::RequestValidator;

#[derive(Clone)]
pub struct AppState {
  pub articles: Arc<dyn ArticlesService>,
  pub drafts: Arc<dyn DraftsService>,
  pub patches: Arc<dyn ArticlePatchesService>,
  pub projects: Arc<dyn ProjectsService>,
  pub experience: Arc<dyn ExperienceService>,
  pub tags: Arc<dyn TagsService>,
  pub topics: Arc<dyn TopicsService>,
  pub technologies: Arc<dyn TechnologyTagService>,
  pub me: Arc<dyn MeService>,
  pub renderer: Arc<dyn Renderer>,
  pub validator: RequestValidator,
}
