//! Request parameters for one scraping job.

/// What to scrape and how. Built with [`JobParams::new`] and adjusted
/// field by field.
///
/// Numeric values are passed through unchecked; the service validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobParams {
    /// Free-text search, e.g. `"coffee shops in New York"`.
    pub query: String,
    pub lang: String,
    pub zoom: u32,
    /// Search radius in meters.
    pub radius: u32,
    /// How many result pages the scraper scrolls through.
    pub depth: u32,
    pub fast_mode: bool,
    /// Decimal latitude as text. `"0"` leaves the search unanchored.
    pub lat: String,
    /// Decimal longitude as text.
    pub lon: String,
    /// Server-side time budget for the job, in seconds.
    pub max_time: u64,
    pub proxies: Vec<String>,
}

impl JobParams {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            lang: "en".to_string(),
            zoom: 15,
            radius: 5000,
            depth: 1,
            fast_mode: false,
            lat: "0".to_string(),
            lon: "0".to_string(),
            max_time: 180,
            proxies: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_service_defaults() {
        let params = JobParams::new("coffee shops");
        assert_eq!(params.query, "coffee shops");
        assert_eq!(params.lang, "en");
        assert_eq!(params.zoom, 15);
        assert_eq!(params.radius, 5000);
        assert_eq!(params.depth, 1);
        assert!(!params.fast_mode);
        assert_eq!(params.lat, "0");
        assert_eq!(params.lon, "0");
        assert_eq!(params.max_time, 180);
        assert!(params.proxies.is_empty());
    }
}
