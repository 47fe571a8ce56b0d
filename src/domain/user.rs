use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::photo::Photo;

/// An Unsplash user profile.
///
/// Private fields such as `email` and `uploads_remaining` are only present on
/// `GET /me` for the authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub updated_at: Option<DateTime<FixedOffset>>,
    pub username: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub twitter_username: Option<String>,
    pub instagram_username: Option<String>,
    pub portfolio_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub total_likes: Option<u64>,
    pub total_photos: Option<u64>,
    pub total_collections: Option<u64>,
    pub followed_by_user: Option<bool>,
    pub followers_count: Option<u64>,
    pub following_count: Option<u64>,
    pub downloads: Option<u64>,
    pub uploads_remaining: Option<u64>,
    pub profile_image: Option<ProfileImage>,
    pub links: Option<UserLinks>,
    pub photos: Option<Vec<Photo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    /// Present when a custom size was requested.
    pub custom: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub html: Option<String>,
    pub photos: Option<String>,
    pub likes: Option<String>,
    pub portfolio: Option<String>,
    pub following: Option<String>,
    pub followers: Option<String>,
}
