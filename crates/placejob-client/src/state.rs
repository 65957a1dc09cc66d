//! The job lifecycle as an explicit state machine.
//!
//! [`JobState::observe`] is the single transition function for polling. It is
//! pure: the HTTP layer turns each status request into a [`PollObservation`]
//! and the state decides what that observation means.

use std::time::Duration;

use crate::error::JobError;
use crate::types::JobStatus;

/// The service's own success token.
pub const CANONICAL_SUCCESS_STATUS: &str = "ok";

/// Status values that end a job successfully. Matched exactly.
pub const SUCCESS_STATUSES: &[&str] = &[CANONICAL_SUCCESS_STATUS, "finished"];

/// Status values that end a job with a failure. Matched exactly.
pub const FAILURE_STATUSES: &[&str] = &["failed", "error"];

/// Message used when a failed job carries no error text.
const UNKNOWN_FAILURE: &str = "unknown error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Failure,
    /// Any value not in the terminal sets, e.g. `"pending"` or `"working"`.
    InProgress,
}

/// Classifies a raw status string. Unrecognized values are never terminal.
#[must_use]
pub fn classify_status(status: &str) -> StatusClass {
    if SUCCESS_STATUSES.contains(&status) {
        StatusClass::Success
    } else if FAILURE_STATUSES.contains(&status) {
        StatusClass::Failure
    } else {
        StatusClass::InProgress
    }
}

/// What one status request produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PollObservation {
    /// A well-formed job document.
    Status(JobStatus),
    /// `404`: the job is not visible yet.
    NotFound,
    /// Any other non-success HTTP status.
    UnexpectedStatus(u16),
    /// A success response whose body had no usable status.
    Malformed(String),
    /// Network failure or per-request timeout.
    Transport(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum JobState {
    /// Not yet submitted; no id.
    #[default]
    Pending,
    Submitted {
        job_id: String,
    },
    Polling {
        job_id: String,
        attempts: u32,
    },
    Succeeded {
        job_id: String,
        status: JobStatus,
    },
    Failed {
        job_id: String,
        message: String,
    },
    TimedOut {
        job_id: String,
        attempts: u32,
    },
}

impl JobState {
    /// Assigns the service id. Only a pending job accepts one; the id of a
    /// submitted job never changes.
    #[must_use]
    pub fn submitted(self, job_id: impl Into<String>) -> Self {
        match self {
            Self::Pending => Self::Submitted {
                job_id: job_id.into(),
            },
            other => other,
        }
    }

    /// Applies one status observation.
    ///
    /// Terminal states and pending jobs are unchanged. Every other state
    /// counts the attempt and moves to `Succeeded`, `Failed` or `Polling`.
    #[must_use]
    pub fn observe(self, observation: PollObservation) -> Self {
        let (job_id, attempts) = match self {
            Self::Submitted { job_id } => (job_id, 1),
            Self::Polling { job_id, attempts } => (job_id, attempts.saturating_add(1)),
            other => return other,
        };

        let PollObservation::Status(status) = observation else {
            return Self::Polling { job_id, attempts };
        };

        match classify_status(&status.status) {
            StatusClass::Success => Self::Succeeded { job_id, status },
            StatusClass::Failure => Self::Failed {
                job_id,
                message: status
                    .error
                    .unwrap_or_else(|| UNKNOWN_FAILURE.to_string()),
            },
            StatusClass::InProgress => Self::Polling { job_id, attempts },
        }
    }

    /// Marks an in-flight job as out of time. Other states are unchanged.
    #[must_use]
    pub fn expire(self) -> Self {
        match self {
            Self::Submitted { job_id } => Self::TimedOut {
                job_id,
                attempts: 0,
            },
            Self::Polling { job_id, attempts } => Self::TimedOut { job_id, attempts },
            other => other,
        }
    }

    /// Replaces the state in place with `transition(state)`.
    pub fn advance(&mut self, transition: impl FnOnce(Self) -> Self) {
        *self = transition(std::mem::take(self));
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Succeeded { .. } | Self::Failed { .. } | Self::TimedOut { .. }
        )
    }

    #[must_use]
    pub fn job_id(&self) -> Option<&str> {
        match self {
            Self::Pending => None,
            Self::Submitted { job_id }
            | Self::Polling { job_id, .. }
            | Self::Succeeded { job_id, .. }
            | Self::Failed { job_id, .. }
            | Self::TimedOut { job_id, .. } => Some(job_id),
        }
    }

    /// Number of status observations applied so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Polling { attempts, .. } | Self::TimedOut { attempts, .. } => *attempts,
            _ => 0,
        }
    }

    /// The lifecycle result of a terminal state; `None` while the job is
    /// still in flight. `elapsed` is reported by a timeout.
    #[must_use]
    pub fn outcome(&self, elapsed: Duration) -> Option<Result<JobStatus, JobError>> {
        match self {
            Self::Succeeded { status, .. } => Some(Ok(status.clone())),
            Self::Failed { job_id, message } => Some(Err(JobError::JobFailed {
                job_id: job_id.clone(),
                message: message.clone(),
            })),
            Self::TimedOut { job_id, attempts } => Some(Err(JobError::Timeout {
                job_id: job_id.clone(),
                elapsed,
                attempts: *attempts,
            })),
            Self::Pending | Self::Submitted { .. } | Self::Polling { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
