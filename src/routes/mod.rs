//! Router assembly: archive and portfolio endpoints, server-rendered pages,
//! static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use url::form_urlencoded;

use crate::config::ServerConfig;
use crate::problem::Problem;
use crate::state::AppState;

pub mod articles;
pub mod drafts;
pub mod experience;
pub mod me;
pub mod patches;
pub mod projects;
pub mod tags;
pub mod technologies;
pub mod topics;
pub mod web;

/// 303 to a canonical `.info` endpoint; used when an update changed nothing.
pub(crate) fn see_other(path: &str, param: &str, value: &str) -> Response {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(param, value)
        .finish();
    Redirect::to(&format!("{path}?{query}")).into_response()
}

/// 409 for URL setters whose target already held the requested state.
pub(crate) fn unchanged_conflict(what: &str) -> Response {
    Problem::conflict(format!("The {what} could not be changed: it already holds the requested value or does not exist."))
        .into_response()
}

pub(crate) fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Build the application router with:
/// - archive endpoints under `/archive/...` (articles, drafts, patches, tags, topics)
/// - portfolio endpoints under `/me...` (profile, projects, experience, technologies)
/// - server-rendered pages at `/`, `/experience`, `/projects`, `/archive`
/// - static files from `config.static_dir` under `/static`
/// - CORS and a per-request HTTP trace layer
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let api = Router::new()
        // Articles
        .route("/archive/articles.list", get(articles::list))
        .route("/archive/articles.hidden.list", get(articles::list_hidden))
        .route("/archive/articles.publications", get(articles::publications))
        .route("/archive/articles.info", get(articles::get_by_id))
        .route("/archive/articles.amend", post(articles::amend))
        .route("/archive/articles.remove", post(articles::remove))
        .route("/archive/articles.pin", post(articles::pin))
        .route("/archive/articles.unpin", post(articles::unpin))
        .route("/archive/articles.hide", post(articles::hide))
        .route("/archive/articles.show", post(articles::show))
        .route("/archive/articles.tags.add", post(articles::add_tag))
        .route("/archive/articles.tags.remove", post(articles::remove_tag))
        // Patches
        .route("/archive/articles.patches.list", get(patches::list))
        .route("/archive/articles.patches.revise", post(patches::revise))
        .route("/archive/articles.patches.share", post(patches::share))
        .route("/archive/articles.patches.discard", post(patches::discard))
        .route("/archive/articles.patches.release", post(patches::release))
        // Drafts
        .route("/archive/drafts.start", post(drafts::start))
        .route("/archive/drafts.publish", post(drafts::publish))
        .route("/archive/drafts.list", get(drafts::list))
        .route("/archive/drafts.info", get(drafts::get_by_id))
        .route("/archive/drafts.tags.add", post(drafts::add_tag))
        .route("/archive/drafts.tags.remove", post(drafts::remove_tag))
        .route("/archive/drafts.share", post(drafts::share))
        .route("/archive/drafts.revise", post(drafts::revise))
        .route("/archive/drafts.discard", post(drafts::discard))
        // Tags and topics
        .route("/archive/tags.add", post(tags::add))
        .route("/archive/tags.list", get(tags::list))
        .route("/archive/tags.set", post(tags::update))
        .route("/archive/tags.remove", post(tags::remove))
        .route("/archive/topics.add", post(topics::add))
        .route("/archive/topics.list", get(topics::list))
        .route("/archive/topics.set", post(topics::update))
        .route("/archive/topics.remove", post(topics::remove))
        // Me
        .route("/me.info", get(me::get))
        .route("/me.set", post(me::update))
        .route("/me.photo_url.set", post(me::set_photo))
        .route("/me.resume_url.set", post(me::set_resume))
        .route("/me.hireable.set", post(me::set_hireable))
        // Projects
        .route("/me/projects.list", get(projects::list))
        .route("/me/projects.archived.list", get(projects::list_archived))
        .route("/me/projects.info", get(projects::get_by_id))
        .route("/me/projects.add", post(projects::add))
        .route("/me/projects.set", post(projects::update))
        .route("/me/projects.archive", post(projects::archive))
        .route("/me/projects.unarchive", post(projects::unarchive))
        .route("/me/projects.finish", post(projects::finish))
        .route("/me/projects.remove", post(projects::remove))
        .route("/me/projects.technologies.add", post(projects::add_technology_tag))
        .route("/me/projects.technologies.remove", post(projects::remove_technology_tag))
        .merge(projects::url_routes())
        // Experience
        .route("/me/experience.list", get(experience::list))
        .route("/me/experience.hidden.list", get(experience::list_hidden))
        .route("/me/experience.info", get(experience::get_by_id))
        .route("/me/experience.add", post(experience::add))
        .route("/me/experience.set", post(experience::update))
        .route("/me/experience.hide", post(experience::hide))
        .route("/me/experience.show", post(experience::show))
        .route("/me/experience.remove", post(experience::remove))
        // Technologies
        .route("/me/technologies.add", post(technologies::add))
        .route("/me/technologies.list", get(technologies::list))
        .route("/me/technologies.set", post(technologies::update))
        .route("/me/technologies.remove", post(technologies::remove));

    let pages = Router::new()
        .route("/", get(web::home))
        .route("/experience", get(web::experience))
        .route("/projects", get(web::projects))
        .route("/archive", get(web::archive))
        .route("/archive/:topic/:year/:month/:slug", get(web::article));

    let cors = if config.cors_allow_any {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .merge(api)
        .merge(pages)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(cors),
        )
}
