//! Request records (form- or JSON-bound) and response envelopes.
//!
//! Form-bound records list their wire names through `impl_bind_form!` in
//! declaration order; validation rules sit on the fields.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::impl_bind_form;

//
// Archive
//

#[derive(Clone, Debug, Default, PartialEq, Serialize, Validate)]
pub struct ArticleCreation {
  #[validate(length(min = 1, max = 256))]
  pub title: String,
  #[validate(length(max = 1024))]
  pub summary: String,
  #[validate(url)]
  pub cover_url: Option<String>,
  #[validate(length(max = 256))]
  pub cover_caption: Option<String>,
  pub content: String,
}

impl_bind_form!(ArticleCreation {
  title => "title",
  summary => "summary",
  cover_url => "cover_url",
  cover_caption => "cover_caption",
  content => "content",
});

/// Revision of a draft or patch. Unset fields are left as they are.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Validate)]
pub struct ArticleUpdate {
  #[validate(length(min = 1, max = 256))]
  pub title: Option<String>,
  #[validate(length(min = 1, max = 256))]
  pub slug: Option<String>,
  #[validate(length(max = 1024))]
  pub summary: Option<String>,
  #[validate(url)]
  pub cover_url: Option<String>,
  #[validate(length(max = 256))]
  pub cover_caption: Option<String>,
  pub content: Option<String>,
  #[validate(length(max = 32))]
  pub topic_id: Option<String>,
}

impl_bind_form!(ArticleUpdate {
  title => "title",
  slug => "slug",
  summary => "summary",
  cover_url => "cover_url",
  cover_caption => "cover_caption",
  content => "content",
  topic_id => "topic_id",
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Validate)]
pub struct TagCreation {
  #[validate(length(min = 1, max = 32))]
  pub name: String,
}

impl_bind_form!(TagCreation { name => "name" });

#[derive(Clone, Debug, Default, PartialEq, Serialize, Validate)]
pub struct TagUpdate {
  #[validate(length(min = 1, max = 32))]
  pub name: String,
}

impl_bind_form!(TagUpdate { name => "name" });

#[derive(Clone, Debug, Default, PartialEq, Serialize, Validate)]
pub struct TopicCreation {
  #[validate(length(min = 1, max = 32))]
  pub id: Option<String>,
  #[validate(length(min = 1, max = 64))]
  pub name: String,
}

impl_bind_form!(TopicCreation {
  id => "id",
  name => "name",
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Validate)]
pub struct TopicUpdate {
  #[validate(length(min = 1, max = 64))]
  pub name: String,
}

impl_bind_form!(TopicUpdate { name => "name" });

//
// Portfolio
//

#[derive(Clone, Debug, Default, PartialEq, Serialize, Validate)]
pub struct ProjectCreation {
  #[validate(length(min = 1, max = 64))]
  pub name: String,
  #[validate(url)]
  pub homepage: Option<String>,
  #[validate(length(max = 64))]
  pub company: Option<String>,
  #[validate(url)]
  pub company_homepage: Option<String>,
  #[validate(length(max = 64))]
  pub language: Option<String>,
  #[validate(length(min = 1, max = 1024))]
  pub summary: String,
  #[validate(range(min = 0, max = 255))]
  pub read_time: i32,
  pub content: String,
  #[validate(url)]
  pub first_image_url: Option<String>,
  #[validate(url)]
  pub second_image_url: Option<String>,
  #[validate(url)]
  pub github_url: Option<String>,
  #[validate(url)]
  pub collection_url: Option<String>,
  #[validate(url)]
  pub playground_url: Option<String>,
}

impl_bind_form!(ProjectCreation {
  name => "name",
  homepage => "homepage",
  company => "company",
  company_homepage => "company_homepage",
  language => "language",
  summary => "summary",
  read_time => "read_time",
  content => "content",
  first_image_url => "first_image_url",
  second_image_url => "second_image_url",
  github_url => "github_url",
  collection_url => "collection_url",
  playground_url => "playground_url",
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Validate)]
pub struct ProjectUpdate {
  #[validate(length(min = 1, max = 64))]
  pub name: Option<String>,
  #[validate(url)]
  pub homepage: Option<String>,
  #[validate(length(max = 64))]
  pub company: Option<String>,
  #[validate(url)]
  pub company_homepage: Option<String>,
  #[validate(length(max = 64))]
  pub language: Option<String>,
  #[validate(length(min = 1, max = 1024))]
  pub summary: Option<String>,
  #[validate(range(min = 0, max = 255))]
  pub read_time: Option<i32>,
  pub content: Option<String>,
}

impl_bind_form!(ProjectUpdate {
  name => "name",
  homepage => "homepage",
  company => "company",
  company_homepage => "company_homepage",
  language => "language",
  summary => "summary",
  read_time => "read_time",
  content => "content",
});

/// Nullable URL columns of a project that have their own setter endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectUrl {
  Playground,
  FirstImage,
  SecondImage,
  GitHub,
  Collection,
}

impl ProjectUrl {
  pub const ALL: [ProjectUrl; 5] = [
    ProjectUrl::Playground,
    ProjectUrl::FirstImage,
    ProjectUrl::SecondImage,
    ProjectUrl::GitHub,
    ProjectUrl::Collection,
  ];

  /// Form parameter and route segment, e.g. `/me/projects.playground_url.set`.
  pub fn wire_name(self) -> &'static str {
    match self {
      ProjectUrl::Playground => "playground_url",
      ProjectUrl::FirstImage => "first_image_url",
      ProjectUrl::SecondImage => "second_image_url",
      ProjectUrl::GitHub => "github_url",
      ProjectUrl::Collection => "collection_url",
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Validate)]
pub struct ExperienceCreation {
  #[validate(range(min = 1900, max = 2100))]
  pub starts: i32,
  /// Zero while the position is current.
  #[validate(range(min = 0, max = 2100))]
  pub ends: i32,
  #[validate(length(min = 1, max = 64))]
  pub job_title: String,
  #[validate(length(min = 1, max = 64))]
  pub company: String,
  #[validate(url)]
  pub company_homepage: Option<String>,
  #[validate(length(min = 1, max = 64))]
  pub country: String,
  #[validate(length(min = 1, max = 1024))]
  pub summary: String,
}

impl_bind_form!(ExperienceCreation {
  starts => "starts",
  ends => "ends",
  job_title => "job_title",
  company => "company",
  company_homepage => "company_homepage",
  country => "country",
  summary => "summary",
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Validate)]
pub struct ExperienceUpdate {
  #[validate(range(min = 1900, max = 2100))]
  pub starts: Option<i32>,
  #[validate(range(min = 0, max = 2100))]
  pub ends: Option<i32>,
  #[validate(length(min = 1, max = 64))]
  pub job_title: Option<String>,
  #[validate(length(min = 1, max = 64))]
  pub company: Option<String>,
  #[validate(url)]
  pub company_homepage: Option<String>,
  #[validate(length(min = 1, max = 64))]
  pub country: Option<String>,
  #[validate(length(min = 1, max = 1024))]
  pub summary: Option<String>,
}

impl_bind_form!(ExperienceUpdate {
  starts => "starts",
  ends => "ends",
  job_title => "job_title",
  company => "company",
  company_homepage => "company_homepage",
  country => "country",
  summary => "summary",
});

#[derive(Clone, Debug, Default, PartialEq, Serialize, Validate)]
pub struct TechnologyTagCreation {
  #[validate(length(min = 1, max = 64))]
  pub name: String,
}

impl_bind_form!(TechnologyTagCreation { name => "name" });

#[derive(Clone, Debug, Default, PartialEq, Serialize, Validate)]
pub struct TechnologyTagUpdate {
  #[validate(length(min = 1, max = 64))]
  pub name: String,
}

impl_bind_form!(TechnologyTagUpdate { name => "name" });

/// Profile update, sent as a JSON body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MeUpdate {
  #[validate(length(min = 1, max = 32))]
  pub first_name: Option<String>,
  #[validate(length(min = 1, max = 32))]
  pub last_name: Option<String>,
  #[validate(length(max = 1024))]
  pub summary: Option<String>,
  #[validate(length(min = 1, max = 64))]
  pub job_title: Option<String>,
  #[validate(email)]
  pub email: Option<String>,
  #[validate(range(min = 1970, max = 2100))]
  pub coding_since: Option<i32>,
  #[validate(length(max = 64))]
  pub company: Option<String>,
  #[validate(length(max = 64))]
  pub location: Option<String>,
  #[validate(url)]
  pub github_url: Option<String>,
  #[validate(url)]
  pub linkedin_url: Option<String>,
  #[validate(url)]
  pub youtube_url: Option<String>,
  #[validate(url)]
  pub twitter_url: Option<String>,
  #[validate(url)]
  pub instagram_url: Option<String>,
}

//
// Response envelopes
//

#[derive(Debug, Serialize)]
pub struct DraftCreated {
  pub draft_uuid: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectCreated {
  pub project_uuid: String,
}

#[derive(Debug, Serialize)]
pub struct ExperienceCreated {
  pub experience_uuid: String,
}

#[derive(Debug, Serialize)]
pub struct TagCreated {
  pub tag_id: String,
}

#[derive(Debug, Serialize)]
pub struct TopicCreated {
  pub topic_id: String,
}

#[derive(Debug, Serialize)]
pub struct TechnologyTagCreated {
  pub technology_id: String,
}

#[derive(Debug, Serialize)]
pub struct ShareableLink {
  pub shareable_link: String,
}
