//! Read models handed back by the services: archive (articles, patches,
//! tags, topics) and portfolio (projects, experience, technologies, me).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Calendar period in which an article was released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Publication {
  pub year: i32,
  pub month: u32,
}

/// Public address of a published article: `/archive/{topic}/{year}/{month}/{slug}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleLink {
  pub topic: String,
  pub year: i32,
  pub month: u32,
  pub slug: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
  pub id: String,
  pub name: String,
  pub created_at: DateTime<Utc>,
  #[serde(default)] pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
  pub id: String,
  pub name: String,
  pub created_at: DateTime<Utc>,
  #[serde(default)] pub updated_at: Option<DateTime<Utc>>,
}

/// An article; drafts are articles without a publication date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
  pub uuid: Uuid,
  pub title: String,
  pub author: String,
  pub slug: String,
  pub read_time: i32,
  pub summary: String,
  #[serde(default)] pub cover_url: Option<String>,
  #[serde(default)] pub cover_caption: Option<String>,
  #[serde(default)] pub content: String,
  #[serde(default)] pub topic: Option<Topic>,
  #[serde(default)] pub tags: Vec<Tag>,
  pub is_draft: bool,
  pub is_pinned: bool,
  pub is_hidden: bool,
  #[serde(default)] pub published_at: Option<DateTime<Utc>>,
  #[serde(default)] pub modified_at: Option<DateTime<Utc>>,
  pub drafted_at: DateTime<Utc>,
  #[serde(default)] pub updated_at: Option<DateTime<Utc>>,
}

/// Pending amendment of a published article. Unset fields are unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePatch {
  pub article_uuid: Uuid,
  #[serde(default)] pub title: Option<String>,
  #[serde(default)] pub slug: Option<String>,
  #[serde(default)] pub summary: Option<String>,
  #[serde(default)] pub cover_url: Option<String>,
  #[serde(default)] pub cover_caption: Option<String>,
  #[serde(default)] pub content: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyTag {
  pub id: String,
  pub name: String,
  pub created_at: DateTime<Utc>,
  #[serde(default)] pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
  pub uuid: Uuid,
  pub name: String,
  pub slug: String,
  #[serde(default)] pub homepage: Option<String>,
  #[serde(default)] pub company: Option<String>,
  #[serde(default)] pub company_homepage: Option<String>,
  #[serde(default)] pub language: Option<String>,
  pub summary: String,
  pub read_time: i32,
  #[serde(default)] pub content: String,
  #[serde(default)] pub first_image_url: Option<String>,
  #[serde(default)] pub second_image_url: Option<String>,
  #[serde(default)] pub github_url: Option<String>,
  #[serde(default)] pub collection_url: Option<String>,
  #[serde(default)] pub playground_url: Option<String>,
  #[serde(default)] pub technologies: Vec<TechnologyTag>,
  pub archived: bool,
  pub finished: bool,
  pub created_at: DateTime<Utc>,
  #[serde(default)] pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
  pub uuid: Uuid,
  pub starts: i32,
  /// `None` while the position is current.
  #[serde(default)] pub ends: Option<i32>,
  pub job_title: String,
  pub company: String,
  #[serde(default)] pub company_homepage: Option<String>,
  pub country: String,
  pub summary: String,
  pub active: bool,
  pub hidden: bool,
  pub created_at: DateTime<Utc>,
  #[serde(default)] pub updated_at: Option<DateTime<Utc>>,
}

/// The site owner's profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Me {
  pub username: String,
  pub first_name: String,
  pub last_name: String,
  pub summary: String,
  pub job_title: String,
  pub email: String,
  #[serde(default)] pub photo_url: Option<String>,
  #[serde(default)] pub resume_url: Option<String>,
  pub coding_since: i32,
  #[serde(default)] pub company: Option<String>,
  #[serde(default)] pub location: Option<String>,
  pub hireable: bool,
  #[serde(default)] pub github_url: Option<String>,
  #[serde(default)] pub linkedin_url: Option<String>,
  #[serde(default)] pub youtube_url: Option<String>,
  #[serde(default)] pub twitter_url: Option<String>,
  #[serde(default)] pub instagram_url: Option<String>,
  pub created_at: DateTime<Utc>,
  #[serde(default)] pub updated_at: Option<DateTime<Utc>>,
}
