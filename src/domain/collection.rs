use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::photo::{Photo, Tag};
use crate::domain::user::User;

/// A collection of photos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Numeric in older payloads, textual in newer ones.
    #[serde(default, deserialize_with = "crate::transport::deserialize_opt_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub last_collected_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
    pub curated: Option<bool>,
    pub featured: Option<bool>,
    pub total_photos: Option<u64>,
    pub private: Option<bool>,
    pub share_key: Option<String>,
    pub tags: Option<Vec<Tag>>,
    pub cover_photo: Option<Box<Photo>>,
    pub preview_photos: Option<Vec<Photo>>,
    pub user: Option<User>,
    pub links: Option<CollectionLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub html: Option<String>,
    pub photos: Option<String>,
    pub related: Option<String>,
}
