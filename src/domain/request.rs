use serde::Serialize;

use crate::domain::validation::{ValidationError, ensure_range};

pub const MAX_PER_PAGE: u32 = 30;
pub const MAX_RANDOM_COUNT: u32 = 30;
pub const MAX_STATS_QUANTITY: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    Latest,
    Oldest,
    Popular,
}

impl OrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::Popular => "popular",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Squarish => "squarish",
        }
    }
}

/// Paging and ordering for list endpoints (`photos`, `collections`,
/// `users/{username}/photos`, ...).
///
/// Unset fields are left to the API defaults (page 1, 10 per page, latest).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOpt {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub order_by: Option<OrderBy>,
}

impl ListOpt {
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            order_by: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_range("page", self.page, 1, u32::MAX)?;
        ensure_range("per_page", self.per_page, 1, MAX_PER_PAGE)
    }
}

/// Search query for `search/users`, `search/photos` and `search/collections`.
///
/// `orientation` is only honoured by photo search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOpt {
    pub query: String,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub orientation: Option<Orientation>,
}

impl SearchOpt {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.query.trim().is_empty() {
            return Err(ValidationError::Empty { field: "query" });
        }
        ensure_range("page", self.page, 1, u32::MAX)?;
        ensure_range("per_page", self.per_page, 1, MAX_PER_PAGE)
    }
}

/// Crop rectangle in pixels, applied before resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Custom dimensions for a single photo (`photos/{id}?w=..&h=..&rect=..`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoOpt {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub rect: Option<Rect>,
}

/// Filters for `photos/random`.
///
/// The API rejects `query` combined with `collections`; [`RandomPhotoOpt::validate`]
/// reports that before any request is made, along with a blank `query` or
/// `username`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomPhotoOpt {
    pub count: Option<u32>,
    pub collections: Vec<String>,
    pub featured: bool,
    pub username: Option<String>,
    pub query: Option<String>,
    pub orientation: Option<Orientation>,
}

impl RandomPhotoOpt {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_range("count", self.count, 1, MAX_RANDOM_COUNT)?;
        for (field, value) in [("query", &self.query), ("username", &self.username)] {
            if value.as_deref().is_some_and(|value| value.trim().is_empty()) {
                return Err(ValidationError::Empty { field });
            }
        }
        if self.query.is_some() && !self.collections.is_empty() {
            return Err(ValidationError::Conflict {
                first: "query",
                second: "collections",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    #[default]
    Days,
}

impl Resolution {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
        }
    }
}

/// Window for `users/{username}/statistics` and `photos/{id}/statistics`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsOpt {
    pub resolution: Option<Resolution>,
    pub quantity: Option<u32>,
}

impl StatsOpt {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_range("quantity", self.quantity, 1, MAX_STATS_QUANTITY)
    }
}

/// Custom profile image size for `users/{username}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileImageOpt {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewCollection {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

impl NewCollection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        Ok(())
    }
}

/// Partial update for an existing collection; omitted fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

/// Partial update for the authenticated user's profile (`PUT /me`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_username: Option<String>,
}
