//! Field-name drift between the two source shapes.
//!
//! The CSV export and the JSON document were written independently and do not
//! agree on every name. The tables here are the single source of truth for
//! those differences; the decoders and the encoder only ever look names up
//! through [`tabular_column`] and [`document_keys`].

/// A canonical field name paired with the name a source shape uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRename {
    /// Name of the field on [`crate::PlaceRecord`].
    pub canonical: &'static str,
    /// Name used by the source shape.
    pub source: &'static str,
}

/// CSV headers that differ from the canonical field name.
pub const TABULAR_COLUMN_RENAMES: &[FieldRename] = &[
    FieldRename {
        canonical: "web_site",
        source: "website",
    },
    FieldRename {
        canonical: "description",
        source: "descriptions",
    },
];

/// JSON document keys that differ from the canonical field name.
///
/// The producer spells longitude as `longtitude`. When a document carries
/// both spellings the producer's spelling wins.
pub const DOCUMENT_FIELD_ALIASES: &[FieldRename] = &[FieldRename {
    canonical: "longitude",
    source: "longtitude",
}];

/// Full CSV header row in the order the service writes it.
pub const TABULAR_HEADERS: &[&str] = &[
    "input_id",
    "link",
    "title",
    "category",
    "address",
    "open_hours",
    "popular_times",
    "website",
    "phone",
    "plus_code",
    "review_count",
    "review_rating",
    "reviews_per_rating",
    "latitude",
    "longitude",
    "cid",
    "status",
    "descriptions",
    "reviews_link",
    "thumbnail",
    "timezone",
    "price_range",
    "data_id",
    "photos_count",
    "place_id",
    "street_view_url",
    "images",
    "reservations",
    "order_online",
    "menu",
    "owner",
    "complete_address",
    "about",
    "user_reviews",
    "user_reviews_extended",
    "emails",
];

/// Returns the CSV header that carries the canonical field `canonical`.
#[must_use]
pub fn tabular_column(canonical: &str) -> &str {
    TABULAR_COLUMN_RENAMES
        .iter()
        .find(|r| r.canonical == canonical)
        .map_or(canonical, |r| r.source)
}

/// Returns the JSON keys to try, in order, for the canonical field `canonical`.
#[must_use]
pub fn document_keys(canonical: &str) -> Vec<&str> {
    let mut keys: Vec<&str> = DOCUMENT_FIELD_ALIASES
        .iter()
        .filter(|a| a.canonical == canonical)
        .map(|a| a.source)
        .collect();
    keys.push(canonical);
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabular_column_applies_renames() {
        assert_eq!(tabular_column("web_site"), "website");
        assert_eq!(tabular_column("description"), "descriptions");
    }

    #[test]
    fn tabular_column_passes_through_unchanged_names() {
        assert_eq!(tabular_column("title"), "title");
        assert_eq!(tabular_column("longitude"), "longitude");
    }

    #[test]
    fn every_rename_targets_a_real_header() {
        for rename in TABULAR_COLUMN_RENAMES {
            assert!(
                TABULAR_HEADERS.contains(&rename.source),
                "{} is not a header",
                rename.source
            );
            assert!(!TABULAR_HEADERS.contains(&rename.canonical));
        }
    }

    #[test]
    fn document_keys_prefers_producer_spelling() {
        assert_eq!(document_keys("longitude"), vec!["longtitude", "longitude"]);
        assert_eq!(document_keys("latitude"), vec!["latitude"]);
    }
}
