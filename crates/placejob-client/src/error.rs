use std::time::Duration;

use thiserror::Error;

/// Errors returned by the job lifecycle client.
#[derive(Debug, Error)]
pub enum JobError {
    /// Job creation was answered with something other than `201 Created`,
    /// or a `201` whose body carried no job id.
    #[error("job submission failed with HTTP {status}: {body}")]
    Submission { status: u16, body: String },

    /// The job never reached a terminal status within the polling budget.
    #[error("job {job_id} did not finish within {elapsed:?} ({attempts} status checks)")]
    Timeout {
        job_id: String,
        elapsed: Duration,
        attempts: u32,
    },

    /// The service reported the job as failed.
    #[error("job {job_id} failed: {message}")]
    JobFailed { job_id: String, message: String },

    /// The output download was answered with a non-success status.
    #[error("download of job {job_id} output failed with HTTP {status}")]
    Download { job_id: String, status: u16 },

    /// Network or TLS failure outside the polling loop.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request was rejected locally before reaching the network.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
