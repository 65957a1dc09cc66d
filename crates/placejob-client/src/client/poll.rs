//! Fixed-interval status polling for `JobClient`.

use std::time::{Duration, Instant};

use crate::error::JobError;
use crate::state::{JobState, PollObservation};
use crate::types::JobStatus;

use super::JobClient;

impl JobClient {
    /// Polls a submitted job until it succeeds, fails, or runs out of time.
    ///
    /// The first status request is always sent. After every non-terminal
    /// observation the loop sleeps `poll_interval` and then checks whether
    /// more than `total_timeout` has passed since polling began. A 404,
    /// another non-success status, a malformed body or a network error is
    /// logged and treated like an in-progress status; none of them extends
    /// the deadline.
    ///
    /// # Errors
    ///
    /// - [`JobError::JobFailed`] with the service's error message when the
    ///   job reports a failure status.
    /// - [`JobError::Timeout`] when the deadline passes first.
    /// - [`JobError::InvalidRequest`] if `job_id` is blank (no request is
    ///   sent).
    pub async fn poll(
        &self,
        job_id: &str,
        total_timeout: Duration,
        poll_interval: Duration,
    ) -> Result<JobStatus, JobError> {
        if job_id.trim().is_empty() {
            return Err(JobError::InvalidRequest(
                "job id must not be empty".to_string(),
            ));
        }

        let mut state = JobState::Pending.submitted(job_id);
        self.drive_polling(&mut state, total_timeout, poll_interval)
            .await
    }

    /// Runs the polling loop, advancing `state` in place so the caller can
    /// inspect where the job ended up.
    pub(super) async fn drive_polling(
        &self,
        state: &mut JobState,
        total_timeout: Duration,
        poll_interval: Duration,
    ) -> Result<JobStatus, JobError> {
        let Some(job_id) = state.job_id().map(str::to_owned) else {
            return Err(JobError::InvalidRequest(
                "cannot poll a job that has not been submitted".to_string(),
            ));
        };

        let started = Instant::now();
        loop {
            let observation = self.observe_status(&job_id).await;
            log_observation(&job_id, &observation);
            state.advance(|s| s.observe(observation));

            if let Some(outcome) = state.outcome(started.elapsed()) {
                return outcome;
            }

            tokio::time::sleep(poll_interval).await;

            if started.elapsed() > total_timeout {
                state.advance(JobState::expire);
                tracing::warn!(
                    job_id = %job_id,
                    attempts = state.attempts(),
                    timeout_secs = total_timeout.as_secs_f64(),
                    "job did not finish before the polling deadline"
                );
                if let Some(outcome) = state.outcome(started.elapsed()) {
                    return outcome;
                }
            }
        }
    }
}

fn log_observation(job_id: &str, observation: &PollObservation) {
    match observation {
        PollObservation::Status(status) => {
            tracing::debug!(job_id, status = %status.status, "job status");
        }
        PollObservation::NotFound => {
            tracing::debug!(job_id, "job not visible yet");
        }
        PollObservation::UnexpectedStatus(code) => {
            tracing::warn!(job_id, status = code, "unexpected HTTP status checking job");
        }
        PollObservation::Malformed(reason) => {
            tracing::warn!(job_id, error = %reason, "malformed job status response");
        }
        PollObservation::Transport(reason) => {
            tracing::warn!(job_id, error = %reason, "job status request failed");
        }
    }
}
