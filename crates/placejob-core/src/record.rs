//! The canonical place record.
//!
//! Field names follow the service's native JSON document. Every field has a
//! default, so a record is always fully populated even when the source row
//! omitted or mangled a value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A free-form nested JSON object (an "about" group or a user review).
pub type Document = serde_json::Map<String, serde_json::Value>;

/// A flat attribute map such as an image descriptor or the owner block.
pub type StringMap = BTreeMap<String, String>;

/// One place returned by a scraping job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceRecord {
    pub input_id: String,
    pub link: String,
    pub cid: String,
    pub title: String,
    pub category: String,
    pub address: String,
    /// Weekday name → ordered opening intervals, e.g. `"Monday" → ["9 AM–5 PM"]`.
    pub open_hours: BTreeMap<String, Vec<String>>,
    /// Weekday (or day index) → hour of day → busyness percentage.
    pub popular_times: BTreeMap<String, BTreeMap<u32, i64>>,
    pub web_site: String,
    pub phone: String,
    pub plus_code: String,
    pub review_count: i64,
    pub review_rating: f64,
    /// Star value (1–5) → number of reviews with that rating.
    pub reviews_per_rating: BTreeMap<u8, i64>,
    pub latitude: f64,
    pub longitude: f64,
    pub status: String,
    pub description: String,
    pub reviews_link: String,
    pub thumbnail: String,
    pub timezone: String,
    pub price_range: String,
    pub data_id: String,
    pub photos_count: i64,
    pub place_id: String,
    pub street_view_url: String,
    pub images: Vec<StringMap>,
    pub reservations: Vec<StringMap>,
    pub order_online: Vec<StringMap>,
    pub menu: StringMap,
    pub owner: StringMap,
    pub complete_address: StringMap,
    pub about: Vec<Document>,
    pub user_reviews: Vec<Document>,
    pub user_reviews_extended: Vec<Document>,
    pub emails: Vec<String>,
}
