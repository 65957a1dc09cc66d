//! HTTP client for the job service's REST API.
//!
//! Wraps `reqwest` with the service's endpoint layout and status-code
//! conventions. Submission and download fail fast with a typed [`JobError`];
//! status requests never fail and instead yield a [`PollObservation`] for the
//! polling state machine in [`poll`](self::poll).

mod fetch;
mod poll;

use std::time::Duration;

use placejob_core::{parse_tabular, ClientConfig, TabularRow};
use reqwest::{Client, StatusCode, Url};

use crate::error::JobError;
use crate::params::JobParams;
use crate::state::PollObservation;
use crate::types::{CreateJobRequest, CreateJobResponse, JobStatus};

/// Client for one job service instance.
///
/// Holds only an immutable `reqwest::Client` and configuration, so a single
/// instance can drive any number of independent jobs. Use
/// [`JobClient::new`] with a loaded [`ClientConfig`], or
/// [`JobClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct JobClient {
    client: Client,
    base_url: Url,
    total_timeout: Duration,
    poll_interval: Duration,
}

impl JobClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`JobError::InvalidRequest`] if `base_url` is not
    /// a usable base URL.
    pub fn new(config: &ClientConfig) -> Result<Self, JobError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: parse_base_url(&config.base_url)?,
            total_timeout: config.total_timeout(),
            poll_interval: config.poll_interval(),
        })
    }

    /// Creates a client with default settings against a custom base URL.
    ///
    /// # Errors
    ///
    /// Same as [`JobClient::new`].
    pub fn with_base_url(base_url: &str) -> Result<Self, JobError> {
        Self::new(&ClientConfig {
            base_url: base_url.to_owned(),
            ..ClientConfig::default()
        })
    }

    /// Overrides the polling deadline and interval used by [`JobClient::fetch`].
    #[must_use]
    pub fn with_polling(mut self, total_timeout: Duration, poll_interval: Duration) -> Self {
        self.total_timeout = total_timeout;
        self.poll_interval = poll_interval;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn total_timeout(&self) -> Duration {
        self.total_timeout
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Submits a new job and returns the id the service assigned to it.
    ///
    /// Issues exactly one `POST /api/v1/jobs`.
    ///
    /// # Errors
    ///
    /// - [`JobError::InvalidRequest`] if `params.query` is blank (no request
    ///   is sent).
    /// - [`JobError::Submission`] on any status other than `201 Created`, or
    ///   a `201` without an `id`.
    /// - [`JobError::Http`] on network failure.
    pub async fn submit(&self, params: &JobParams) -> Result<String, JobError> {
        if params.query.trim().is_empty() {
            return Err(JobError::InvalidRequest(
                "job query must not be empty".to_string(),
            ));
        }

        let response = self
            .client
            .post(self.endpoint(&[]))
            .json(&CreateJobRequest::from_params(params))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::CREATED {
            return Err(JobError::Submission {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<CreateJobResponse>(&body) {
            Ok(created) if !created.id.is_empty() => {
                tracing::info!(job_id = %created.id, query = %params.query, "job submitted");
                Ok(created.id)
            }
            _ => Err(JobError::Submission {
                status: status.as_u16(),
                body,
            }),
        }
    }

    /// Downloads a finished job's CSV output as header-keyed rows, in the
    /// order the service wrote them.
    ///
    /// # Errors
    ///
    /// - [`JobError::Download`] on any non-success status.
    /// - [`JobError::Http`] on network failure.
    pub async fn download(&self, job_id: &str) -> Result<Vec<TabularRow>, JobError> {
        let response = self
            .client
            .get(self.endpoint(&[job_id, "download"]))
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(JobError::Download {
                job_id: job_id.to_owned(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let rows = parse_tabular(&text);
        tracing::debug!(job_id, rows = rows.len(), "downloaded job output");
        Ok(rows)
    }

    /// Issues one `GET /api/v1/jobs/{id}` and reports what came back.
    pub(crate) async fn observe_status(&self, job_id: &str) -> PollObservation {
        let response = match self.client.get(self.endpoint(&[job_id])).send().await {
            Ok(response) => response,
            Err(e) => return PollObservation::Transport(e.to_string()),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return PollObservation::NotFound;
        }
        if !status.is_success() {
            return PollObservation::UnexpectedStatus(status.as_u16());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return PollObservation::Transport(e.to_string()),
        };

        match serde_json::from_str(&body).and_then(JobStatus::from_payload) {
            Ok(job_status) => PollObservation::Status(job_status),
            Err(e) => PollObservation::Malformed(e.to_string()),
        }
    }

    /// Builds `{base}/api/v1/jobs/{segments...}`, percent-encoding each
    /// segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["api", "v1", "jobs"])
                .extend(segments);
        }
        url
    }
}

/// Parses the configured base URL. A path prefix is kept, so
/// `http://host/scraper/` yields `http://host/scraper/api/v1/jobs`.
fn parse_base_url(raw: &str) -> Result<Url, JobError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| JobError::InvalidRequest(format!("invalid base URL '{raw}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(JobError::InvalidRequest(format!(
            "invalid base URL '{raw}': not a hierarchical URL"
        )));
    }
    Ok(url)
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
