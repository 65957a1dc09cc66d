use std::time::Duration;

use serde_json::json;

use super::*;

fn status(value: serde_json::Value) -> PollObservation {
    PollObservation::Status(JobStatus::from_payload(value).expect("valid status document"))
}

fn submitted() -> JobState {
    JobState::Pending.submitted("J1")
}

#[test]
fn classify_success_tokens() {
    assert_eq!(classify_status("ok"), StatusClass::Success);
    assert_eq!(classify_status("finished"), StatusClass::Success);
}

#[test]
fn classify_failure_tokens() {
    assert_eq!(classify_status("failed"), StatusClass::Failure);
    assert_eq!(classify_status("error"), StatusClass::Failure);
}

#[test]
fn classify_is_exact_and_case_sensitive() {
    for raw in ["pending", "working", "OK", "Failed", " ok", "", "done"] {
        assert_eq!(classify_status(raw), StatusClass::InProgress, "{raw:?}");
    }
}

#[test]
fn canonical_token_is_a_success_status() {
    assert!(SUCCESS_STATUSES.contains(&CANONICAL_SUCCESS_STATUS));
}

#[test]
fn pending_job_has_no_id() {
    let state = JobState::default();
    assert_eq!(state, JobState::Pending);
    assert!(state.job_id().is_none());
    assert!(!state.is_terminal());
}

#[test]
fn submission_assigns_id_once() {
    let state = submitted().submitted("J2");
    assert_eq!(state.job_id(), Some("J1"));
    assert!(matches!(state, JobState::Submitted { .. }));
}

#[test]
fn pending_job_ignores_observations() {
    let state = JobState::Pending.observe(status(json!({ "status": "ok" })));
    assert_eq!(state, JobState::Pending);
}

#[test]
fn success_on_first_observation() {
    let state = submitted().observe(status(json!({ "status": "ok", "id": "J1" })));
    assert!(state.is_terminal());
    let outcome = state.outcome(Duration::ZERO).expect("terminal");
    assert_eq!(outcome.expect("success").payload["id"], "J1");
}

#[test]
fn failure_carries_message_verbatim() {
    let state = submitted().observe(status(json!({
        "status": "failed",
        "error": "proxy refused: 407 Proxy Authentication Required",
    })));
    assert_eq!(
        state,
        JobState::Failed {
            job_id: "J1".to_string(),
            message: "proxy refused: 407 Proxy Authentication Required".to_string(),
        }
    );
    let err = state.outcome(Duration::ZERO).expect("terminal").unwrap_err();
    assert!(matches!(
        err,
        JobError::JobFailed { ref job_id, ref message }
            if job_id == "J1" && message == "proxy refused: 407 Proxy Authentication Required"
    ));
}

#[test]
fn failure_without_message_uses_placeholder() {
    let state = submitted().observe(status(json!({ "status": "error" })));
    assert!(matches!(state, JobState::Failed { ref message, .. } if message == "unknown error"));
}

#[test]
fn transient_observations_keep_polling_and_count_attempts() {
    let state = submitted()
        .observe(PollObservation::NotFound)
        .observe(PollObservation::UnexpectedStatus(503))
        .observe(PollObservation::Malformed("expected value".to_string()))
        .observe(PollObservation::Transport("connection reset".to_string()))
        .observe(status(json!({ "status": "working" })));
    assert_eq!(
        state,
        JobState::Polling {
            job_id: "J1".to_string(),
            attempts: 5,
        }
    );
    assert!(state.outcome(Duration::from_secs(1)).is_none());
}

#[test]
fn terminal_states_absorb_observations() {
    let failed = submitted().observe(status(json!({ "status": "failed", "error": "x" })));
    let after = failed
        .clone()
        .observe(status(json!({ "status": "ok" })))
        .expire();
    assert_eq!(after, failed);

    let succeeded = submitted().observe(status(json!({ "status": "finished" })));
    let after = succeeded
        .clone()
        .observe(status(json!({ "status": "failed" })));
    assert_eq!(after, succeeded);
}

#[test]
fn expiry_reports_elapsed_and_attempts() {
    let state = submitted()
        .observe(status(json!({ "status": "working" })))
        .observe(status(json!({ "status": "working" })))
        .expire();
    assert!(state.is_terminal());
    assert_eq!(state.attempts(), 2);

    let err = state
        .outcome(Duration::from_millis(250))
        .expect("terminal")
        .unwrap_err();
    assert!(matches!(
        err,
        JobError::Timeout { ref job_id, elapsed, attempts: 2 }
            if job_id == "J1" && elapsed == Duration::from_millis(250)
    ));
}

#[test]
fn expiring_pending_job_is_a_no_op() {
    assert_eq!(JobState::Pending.expire(), JobState::Pending);
}

#[test]
fn advance_transitions_in_place() {
    let mut state = submitted();
    state.advance(|s| s.observe(PollObservation::NotFound));
    assert_eq!(state.attempts(), 1);
    state.advance(JobState::expire);
    assert!(matches!(state, JobState::TimedOut { attempts: 1, .. }));
}
