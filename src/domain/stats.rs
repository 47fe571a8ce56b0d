use serde::{Deserialize, Serialize};

/// Totals since the launch of Unsplash (`stats/total`).
///
/// `total_photos` and `photo_downloads` belong to the older payload shape;
/// the remaining counters to the current one. Whichever the API omits stays
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub total_photos: Option<u64>,
    pub photo_downloads: Option<u64>,
    pub photos: Option<u64>,
    pub downloads: Option<u64>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub photographers: Option<u64>,
    pub pixels: Option<u64>,
    pub downloads_per_second: Option<u64>,
    pub views_per_second: Option<u64>,
    pub developers: Option<u64>,
    pub applications: Option<u64>,
    pub requests: Option<u64>,
}

/// Counters for the past 30 days (`stats/month`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthStats {
    pub downloads: Option<u64>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub new_photos: Option<u64>,
    pub new_photographers: Option<u64>,
    pub new_pixels: Option<u64>,
    pub new_developers: Option<u64>,
    pub new_applications: Option<u64>,
    pub new_requests: Option<u64>,
}

/// Download, view and like history of a user or a photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub id: Option<String>,
    pub username: Option<String>,
    pub downloads: Option<StatTrend>,
    pub views: Option<StatTrend>,
    pub likes: Option<StatTrend>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTrend {
    pub total: Option<u64>,
    pub historical: Option<StatHistory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatHistory {
    pub change: Option<i64>,
    pub resolution: Option<String>,
    pub quantity: Option<u32>,
    pub values: Option<Vec<StatValue>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    /// Calendar day, `YYYY-MM-DD`.
    pub date: Option<String>,
    pub value: Option<u64>,
}
