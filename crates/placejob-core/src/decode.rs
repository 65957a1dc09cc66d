//! Lenient decoders for the two source shapes of a place.
//!
//! Both entry points return a [`PlaceRecord`] unconditionally. A cell or
//! member that is missing, empty or malformed takes the field default and is
//! reported only through a `debug` trace; nothing here returns an error.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::columns::{document_keys, tabular_column};
use crate::record::PlaceRecord;
use crate::tabular::TabularRow;

/// Decodes one CSV row (keyed by header) into a [`PlaceRecord`].
///
/// Header names are resolved through [`crate::TABULAR_COLUMN_RENAMES`].
/// Structured columns hold embedded JSON; the `emails` column holds either a
/// JSON list or a bare comma-joined string depending on the producer version.
#[must_use]
pub fn decode_tabular_row(row: &TabularRow) -> PlaceRecord {
    let cells = Cells(row);
    PlaceRecord {
        input_id: cells.text("input_id"),
        link: cells.text("link"),
        cid: cells.text("cid"),
        title: cells.text("title"),
        category: cells.text("category"),
        address: cells.text("address"),
        open_hours: cells.nested("open_hours"),
        popular_times: cells.nested("popular_times"),
        web_site: cells.text("web_site"),
        phone: cells.text("phone"),
        plus_code: cells.text("plus_code"),
        review_count: cells.integer("review_count"),
        review_rating: cells.float("review_rating"),
        reviews_per_rating: cells.nested("reviews_per_rating"),
        latitude: cells.float("latitude"),
        longitude: cells.float("longitude"),
        status: cells.text("status"),
        description: cells.text("description"),
        reviews_link: cells.text("reviews_link"),
        thumbnail: cells.text("thumbnail"),
        timezone: cells.text("timezone"),
        price_range: cells.text("price_range"),
        data_id: cells.text("data_id"),
        photos_count: cells.integer("photos_count"),
        place_id: cells.text("place_id"),
        street_view_url: cells.text("street_view_url"),
        images: cells.nested("images"),
        reservations: cells.nested("reservations"),
        order_online: cells.nested("order_online"),
        menu: cells.nested("menu"),
        owner: cells.nested("owner"),
        complete_address: cells.nested("complete_address"),
        about: cells.nested("about"),
        user_reviews: cells.nested("user_reviews"),
        user_reviews_extended: cells.nested("user_reviews_extended"),
        emails: decode_emails(cells.get("emails")),
    }
}

/// Decodes the service's native JSON document into a [`PlaceRecord`].
///
/// Keys are resolved through [`crate::DOCUMENT_FIELD_ALIASES`]. Numbers may
/// arrive as JSON numbers or numeric strings, and structured members may
/// arrive already nested or as embedded JSON text. Anything that is not a
/// JSON object decodes to the default record.
#[must_use]
pub fn decode_document(document: &Value) -> PlaceRecord {
    let Some(object) = document.as_object() else {
        tracing::debug!("place document is not a JSON object; using defaults");
        return PlaceRecord::default();
    };
    let members = Members(object);
    PlaceRecord {
        input_id: members.text("input_id"),
        link: members.text("link"),
        cid: members.text("cid"),
        title: members.text("title"),
        category: members.text("category"),
        address: members.text("address"),
        open_hours: members.nested("open_hours"),
        popular_times: members.nested("popular_times"),
        web_site: members.text("web_site"),
        phone: members.text("phone"),
        plus_code: members.text("plus_code"),
        review_count: members.integer("review_count"),
        review_rating: members.float("review_rating"),
        reviews_per_rating: members.nested("reviews_per_rating"),
        latitude: members.float("latitude"),
        longitude: members.float("longitude"),
        status: members.text("status"),
        description: members.text("description"),
        reviews_link: members.text("reviews_link"),
        thumbnail: members.text("thumbnail"),
        timezone: members.text("timezone"),
        price_range: members.text("price_range"),
        data_id: members.text("data_id"),
        photos_count: members.integer("photos_count"),
        place_id: members.text("place_id"),
        street_view_url: members.text("street_view_url"),
        images: members.nested("images"),
        reservations: members.nested("reservations"),
        order_online: members.nested("order_online"),
        menu: members.nested("menu"),
        owner: members.nested("owner"),
        complete_address: members.nested("complete_address"),
        about: members.nested("about"),
        user_reviews: members.nested("user_reviews"),
        user_reviews_extended: members.nested("user_reviews_extended"),
        emails: members.emails(),
    }
}

/// Cell access for a CSV row. Empty cells count as absent.
struct Cells<'a>(&'a TabularRow);

impl<'a> Cells<'a> {
    fn get(&self, field: &str) -> Option<&'a str> {
        self.0
            .get(tabular_column(field))
            .map(String::as_str)
            .filter(|cell| !cell.is_empty())
    }

    fn text(&self, field: &str) -> String {
        self.get(field).unwrap_or_default().to_owned()
    }

    fn integer(&self, field: &str) -> i64 {
        self.get(field).map_or(0, |raw| parse_integer(raw, field))
    }

    fn float(&self, field: &str) -> f64 {
        self.get(field).map_or(0.0, |raw| parse_float(raw, field))
    }

    fn nested<T: DeserializeOwned + Default>(&self, field: &str) -> T {
        self.get(field)
            .map_or_else(T::default, |raw| parse_nested(raw, field))
    }
}

/// Member access for a JSON object. `null` members count as absent.
struct Members<'a>(&'a serde_json::Map<String, Value>);

impl<'a> Members<'a> {
    fn get(&self, field: &str) -> Option<&'a Value> {
        document_keys(field)
            .into_iter()
            .find_map(|key| self.0.get(key).filter(|v| !v.is_null()))
    }

    fn text(&self, field: &str) -> String {
        match self.get(field) {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => {
                tracing::debug!(field, value = %other, "non-scalar text member; using empty string");
                String::new()
            }
        }
    }

    fn integer(&self, field: &str) -> i64 {
        match self.get(field) {
            None => 0,
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(truncate_finite))
                .unwrap_or(0),
            Some(Value::String(s)) if s.is_empty() => 0,
            Some(Value::String(s)) => parse_integer(s, field),
            Some(other) => {
                tracing::debug!(field, value = %other, "non-numeric integer member; using 0");
                0
            }
        }
    }

    fn float(&self, field: &str) -> f64 {
        match self.get(field) {
            None => 0.0,
            Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
            Some(Value::String(s)) if s.is_empty() => 0.0,
            Some(Value::String(s)) => parse_float(s, field),
            Some(other) => {
                tracing::debug!(field, value = %other, "non-numeric float member; using 0");
                0.0
            }
        }
    }

    fn nested<T: DeserializeOwned + Default>(&self, field: &str) -> T {
        match self.get(field) {
            None => T::default(),
            Some(Value::String(s)) if s.is_empty() => T::default(),
            Some(Value::String(s)) => parse_nested(s, field),
            Some(value) => T::deserialize(value).unwrap_or_else(|e| {
                tracing::debug!(field, error = %e, "malformed nested member; using default");
                T::default()
            }),
        }
    }

    fn emails(&self) -> Vec<String> {
        match self.get("emails") {
            Some(Value::String(s)) => decode_emails(Some(s.as_str()).filter(|s| !s.is_empty())),
            _ => self.nested("emails"),
        }
    }
}

/// Applies the dual email policy: a JSON list when the cell opens with `[`,
/// otherwise a comma-joined string whose pieces are trimmed. Empty pieces are
/// dropped, so a record holding a blank address does not survive an
/// encode/decode round trip: `["", "a@x.com"]` comes back as `["a@x.com"]`.
fn decode_emails(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        return parse_nested(trimmed, "emails");
    }
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses an integer cell. Decimal text is accepted and truncated toward
/// zero, so `"12.0"` and `"12.9"` both give `12`.
fn parse_integer(raw: &str, field: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return value;
    }
    match trimmed.parse::<f64>().ok().and_then(truncate_finite) {
        Some(value) => value,
        None => {
            tracing::debug!(field, raw, "unparseable integer; using 0");
            0
        }
    }
}

fn parse_float(raw: &str, field: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::debug!(field, raw, "unparseable float; using 0");
            0.0
        }
    }
}

fn parse_nested<T: DeserializeOwned + Default>(raw: &str, field: &str) -> T {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::debug!(field, error = %e, "malformed embedded JSON; using default");
        T::default()
    })
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_finite(value: f64) -> Option<i64> {
    // `as` saturates at the i64 bounds for out-of-range finite values.
    value.is_finite().then(|| value.trunc() as i64)
}

#[cfg(test)]
#[path = "decode_test.rs"]
mod tests;
