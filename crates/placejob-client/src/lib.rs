//! Async client for the place-scraping job service.
//!
//! [`JobClient::fetch`] runs one job end to end: submit, poll until a terminal
//! status or the deadline, download the CSV output and decode every row into a
//! [`placejob_core::PlaceRecord`]. The individual stages are public as well.

pub mod client;
pub mod error;
pub mod job;
pub mod params;
pub mod state;
pub mod types;

pub use client::JobClient;
pub use error::JobError;
pub use job::Job;
pub use params::JobParams;
pub use state::{
    classify_status, JobState, PollObservation, StatusClass, CANONICAL_SUCCESS_STATUS,
    FAILURE_STATUSES, SUCCESS_STATUSES,
};
pub use types::JobStatus;
