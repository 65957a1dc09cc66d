//! Wire types for the job service's REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::params::JobParams;

/// Body of `POST /api/v1/jobs`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateJobRequest<'a> {
    name: String,
    keywords: [&'a str; 1],
    lang: &'a str,
    zoom: u32,
    radius: u32,
    depth: u32,
    fast_mode: bool,
    lat: &'a str,
    lon: &'a str,
    max_time: u64,
    email: bool,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    proxies: &'a [String],
}

impl<'a> CreateJobRequest<'a> {
    pub(crate) fn from_params(params: &'a JobParams) -> Self {
        Self {
            name: format!("Job for {}", params.query),
            keywords: [params.query.as_str()],
            lang: &params.lang,
            zoom: params.zoom,
            radius: params.radius,
            depth: params.depth,
            fast_mode: params.fast_mode,
            lat: &params.lat,
            lon: &params.lon,
            max_time: params.max_time,
            email: false,
            proxies: &params.proxies,
        }
    }
}

/// Body of a `201 Created` answer to job creation.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateJobResponse {
    pub id: String,
}

/// The status fields of a job document. The service serializes its job
/// struct without field tags, so both spellings are accepted.
#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    #[serde(alias = "Status")]
    status: String,
    #[serde(default, alias = "Error")]
    error: Option<Value>,
}

/// One status observation: the parsed status fields plus the full document.
#[derive(Debug, Clone, PartialEq)]
pub struct JobStatus {
    pub status: String,
    /// Service-reported failure message, if any.
    pub error: Option<String>,
    /// The job document exactly as the service returned it.
    pub payload: Value,
}

impl JobStatus {
    /// Extracts the status fields from a job document.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error when the document carries no string
    /// status field.
    pub fn from_payload(payload: Value) -> Result<Self, serde_json::Error> {
        let envelope = StatusEnvelope::deserialize(&payload)?;
        let error = match envelope.error {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };
        Ok(Self {
            status: envelope.status,
            error,
            payload,
        })
    }
}
