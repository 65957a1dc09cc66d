//! Conformant encoder for the CSV shape.
//!
//! Produces exactly what [`crate::decode_tabular_row`] expects: structured
//! fields as compact embedded JSON, emails joined with `", "`, headers
//! renamed through [`crate::TABULAR_COLUMN_RENAMES`].

use serde::Serialize;

use crate::columns::tabular_column;
use crate::record::PlaceRecord;
use crate::tabular::TabularRow;

/// Encodes a record into one CSV row keyed by header.
#[must_use]
pub fn encode_tabular_row(record: &PlaceRecord) -> TabularRow {
    let mut row = TabularRow::new();
    let mut put = |field: &str, cell: String| {
        row.insert(tabular_column(field).to_owned(), cell);
    };

    put("input_id", record.input_id.clone());
    put("link", record.link.clone());
    put("title", record.title.clone());
    put("category", record.category.clone());
    put("address", record.address.clone());
    put("open_hours", embed(&record.open_hours));
    put("popular_times", embed(&record.popular_times));
    put("web_site", record.web_site.clone());
    put("phone", record.phone.clone());
    put("plus_code", record.plus_code.clone());
    put("review_count", record.review_count.to_string());
    put("review_rating", record.review_rating.to_string());
    put("reviews_per_rating", embed(&record.reviews_per_rating));
    put("latitude", record.latitude.to_string());
    put("longitude", record.longitude.to_string());
    put("cid", record.cid.clone());
    put("status", record.status.clone());
    put("description", record.description.clone());
    put("reviews_link", record.reviews_link.clone());
    put("thumbnail", record.thumbnail.clone());
    put("timezone", record.timezone.clone());
    put("price_range", record.price_range.clone());
    put("data_id", record.data_id.clone());
    put("photos_count", record.photos_count.to_string());
    put("place_id", record.place_id.clone());
    put("street_view_url", record.street_view_url.clone());
    put("images", embed(&record.images));
    put("reservations", embed(&record.reservations));
    put("order_online", embed(&record.order_online));
    put("menu", embed(&record.menu));
    put("owner", embed(&record.owner));
    put("complete_address", embed(&record.complete_address));
    put("about", embed(&record.about));
    put("user_reviews", embed(&record.user_reviews));
    put("user_reviews_extended", embed(&record.user_reviews_extended));
    put("emails", record.emails.join(", "));

    row
}

fn embed<T: Serialize>(value: &T) -> String {
    // Maps with string or integer keys and JSON values always serialize.
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::TABULAR_HEADERS;

    #[test]
    fn encodes_every_header() {
        let row = encode_tabular_row(&PlaceRecord::default());
        assert_eq!(row.len(), TABULAR_HEADERS.len());
        for header in TABULAR_HEADERS {
            assert!(row.contains_key(*header), "missing header {header}");
        }
    }

    #[test]
    fn renamed_fields_use_tabular_headers() {
        let record = PlaceRecord {
            web_site: "https://cafe.example".to_owned(),
            description: "Small roaster".to_owned(),
            ..PlaceRecord::default()
        };
        let row = encode_tabular_row(&record);
        assert_eq!(row["website"], "https://cafe.example");
        assert_eq!(row["descriptions"], "Small roaster");
        assert!(!row.contains_key("web_site"));
    }

    #[test]
    fn emails_are_comma_joined() {
        let record = PlaceRecord {
            emails: vec!["a@x.com".to_owned(), "b@y.com".to_owned()],
            ..PlaceRecord::default()
        };
        assert_eq!(encode_tabular_row(&record)["emails"], "a@x.com, b@y.com");
    }
}
