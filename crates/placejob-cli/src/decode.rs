//! Offline decoding of saved job output.

use std::path::Path;

use anyhow::Context;
use placejob_core::{decode_document, decode_tabular_row, parse_tabular, PlaceRecord};
use serde_json::Value;

/// Decodes a saved export. Files ending in `.json` hold native documents
/// (one object or an array of them); anything else is read as CSV.
pub(crate) fn decode_file(path: &Path) -> anyhow::Result<Vec<PlaceRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("{} is not valid JSON", path.display()))?;
        Ok(decode_documents(&value))
    } else {
        Ok(decode_csv(&text))
    }
}

pub(crate) fn decode_csv(text: &str) -> Vec<PlaceRecord> {
    parse_tabular(text).iter().map(decode_tabular_row).collect()
}

pub(crate) fn decode_documents(value: &Value) -> Vec<PlaceRecord> {
    match value {
        Value::Array(items) => items.iter().map(decode_document).collect(),
        other => vec![decode_document(other)],
    }
}
