use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8090";
pub const DEFAULT_USER_AGENT: &str = "placejob/0.1 (job-client)";

/// Settings for talking to the job service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Wall-clock budget for one job's polling loop.
    pub total_timeout_secs: u64,
    pub poll_interval_secs: u64,
    /// Timeout applied to each individual HTTP request.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl ClientConfig {
    #[must_use]
    pub fn total_timeout(&self) -> Duration {
        Duration::from_secs(self.total_timeout_secs)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            total_timeout_secs: 300,
            poll_interval_secs: 5,
            request_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: "info".to_string(),
        }
    }
}
