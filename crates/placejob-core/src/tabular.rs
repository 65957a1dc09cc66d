//! CSV framing for downloaded job output.

use std::collections::HashMap;

/// One CSV data row keyed by header name. All cells are text.
pub type TabularRow = HashMap<String, String>;

/// Splits CSV text into header-keyed rows, preserving row order.
///
/// The first record is the header. Rows shorter than the header simply lack
/// the trailing columns, which the decoder treats as absent cells. A record
/// the CSV reader cannot frame is logged and skipped; an unreadable header
/// yields no rows at all.
#[must_use]
pub fn parse_tabular(text: &str) -> Vec<TabularRow> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            tracing::warn!(error = %e, "tabular payload has no readable header row");
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        match record {
            Ok(record) => {
                let row: TabularRow = headers
                    .iter()
                    .zip(record.iter())
                    .map(|(header, cell)| (header.to_owned(), cell.to_owned()))
                    .collect();
                rows.push(row);
            }
            Err(e) => {
                tracing::warn!(row = index + 1, error = %e, "skipping unframeable tabular record");
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_in_order_keyed_by_header() {
        let text = "input_id,title\nq1,First\nq2,Second\n";
        let rows = parse_tabular(text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["input_id"], "q1");
        assert_eq!(rows[0]["title"], "First");
        assert_eq!(rows[1]["title"], "Second");
    }

    #[test]
    fn keeps_quoted_json_cells_intact() {
        let text = "title,open_hours\nCafe,\"{\"\"Monday\"\":[\"\"9 AM-5 PM\"\"]}\"\n";
        let rows = parse_tabular(text);
        assert_eq!(rows[0]["open_hours"], r#"{"Monday":["9 AM-5 PM"]}"#);
    }

    #[test]
    fn short_rows_lack_trailing_columns() {
        let text = "input_id,title,phone\nq1,Cafe\n";
        let rows = parse_tabular(text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["title"], "Cafe");
        assert!(!rows[0].contains_key("phone"));
    }

    #[test]
    fn header_only_payload_has_no_rows() {
        assert!(parse_tabular("input_id,title\n").is_empty());
    }

    #[test]
    fn empty_payload_has_no_rows() {
        assert!(parse_tabular("").is_empty());
    }
}
