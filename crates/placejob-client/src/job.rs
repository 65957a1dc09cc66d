use crate::params::JobParams;
use crate::state::JobState;

/// One unit of submitted work: its parameters and where it is in the
/// lifecycle. Owned by the caller driving the client.
#[derive(Debug, Clone)]
pub struct Job {
    params: JobParams,
    state: JobState,
}

impl Job {
    #[must_use]
    pub fn new(params: JobParams) -> Self {
        Self {
            params,
            state: JobState::Pending,
        }
    }

    #[must_use]
    pub fn params(&self) -> &JobParams {
        &self.params
    }

    #[must_use]
    pub fn state(&self) -> &JobState {
        &self.state
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.state.job_id()
    }

    pub(crate) fn state_mut(&mut self) -> &mut JobState {
        &mut self.state
    }

    pub(crate) fn mark_submitted(&mut self, job_id: String) {
        self.state.advance(|s| s.submitted(job_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_job_is_pending() {
        let job = Job::new(JobParams::new("tea rooms"));
        assert_eq!(job.state(), &JobState::Pending);
        assert!(job.id().is_none());
        assert_eq!(job.params().query, "tea rooms");
    }

    #[test]
    fn submission_fixes_the_id() {
        let mut job = Job::new(JobParams::new("tea rooms"));
        job.mark_submitted("J9".to_string());
        job.mark_submitted("J10".to_string());
        assert_eq!(job.id(), Some("J9"));
    }
}
