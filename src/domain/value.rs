use std::fmt;

use crate::domain::validation::ValidationError;

fn non_empty_trimmed(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn path_segment(field: &'static str, value: String) -> Result<String, ValidationError> {
    let value = non_empty_trimmed(field, value)?;
    if value == "." || value == ".." {
        return Err(ValidationError::DotSegment { field });
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Unsplash application access key, sent as `Authorization: Client-ID <key>`.
///
/// Invariant: non-empty after trimming.
pub struct AccessKey(String);

impl AccessKey {
    pub const FIELD: &'static str = "access_key";

    /// Create a validated [`AccessKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(Self::FIELD, value.into()).map(Self)
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// OAuth user access token, sent as `Authorization: Bearer <token>`.
///
/// Invariant: non-empty after trimming.
pub struct AccessToken(String);

impl AccessToken {
    pub const FIELD: &'static str = "access_token";

    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(Self::FIELD, value.into()).map(Self)
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Unsplash username, used as a path segment (`users/{username}`).
///
/// Invariant: non-empty after trimming, and neither `.` nor `..`.
pub struct Username(String);

impl Username {
    pub const FIELD: &'static str = "username";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        path_segment(Self::FIELD, value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Photo identifier, e.g. `Dwu85P9SOIk`.
pub struct PhotoId(String);

impl PhotoId {
    pub const FIELD: &'static str = "photo_id";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        path_segment(Self::FIELD, value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Collection identifier.
///
/// Older API versions return numeric ids, newer ones return strings; both are
/// kept as text.
pub struct CollectionId(String);

impl CollectionId {
    pub const FIELD: &'static str = "collection_id";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        path_segment(Self::FIELD, value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
