use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::collection::Collection;
use crate::domain::user::User;

/// A photo, as returned by `photos/{id}`, list endpoints and search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub color: Option<String>,
    pub blur_hash: Option<String>,
    pub description: Option<String>,
    pub alt_description: Option<String>,
    pub downloads: Option<u64>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub liked_by_user: Option<bool>,
    pub exif: Option<Exif>,
    pub location: Option<Location>,
    pub tags: Option<Vec<Tag>>,
    pub current_user_collections: Option<Vec<Collection>>,
    pub urls: Option<PhotoUrls>,
    pub links: Option<PhotoLinks>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub raw: Option<String>,
    pub full: Option<String>,
    pub regular: Option<String>,
    pub small: Option<String>,
    pub thumb: Option<String>,
    /// Present when custom dimensions were requested.
    pub custom: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub html: Option<String>,
    pub download: Option<String>,
    pub download_location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exif {
    pub make: Option<String>,
    pub model: Option<String>,
    pub exposure_time: Option<String>,
    pub aperture: Option<String>,
    pub focal_length: Option<String>,
    pub iso: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
}
