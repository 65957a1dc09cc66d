//! Canonical place records and the decoders that build them.
//!
//! The scraping service describes the same place in two shapes: its native
//! JSON document and a flattened CSV export whose headers and cell encodings
//! drifted away from the document field names. Both shapes decode into one
//! [`PlaceRecord`] through [`decode_document`] and [`decode_tabular_row`].
//! Decoding never fails; malformed cells fall back to the field default.

pub mod client_config;
pub mod columns;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod record;
pub mod tabular;

pub use client_config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use columns::{FieldRename, DOCUMENT_FIELD_ALIASES, TABULAR_COLUMN_RENAMES, TABULAR_HEADERS};
pub use config::{load_client_config, load_client_config_from_env};
pub use decode::{decode_document, decode_tabular_row};
pub use encode::encode_tabular_row;
pub use error::ConfigError;
pub use record::{Document, PlaceRecord, StringMap};
pub use tabular::{parse_tabular, TabularRow};
