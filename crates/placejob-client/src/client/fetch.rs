//! End-to-end job run for `JobClient`.

use placejob_core::{decode_tabular_row, PlaceRecord};

use crate::error::JobError;
use crate::job::Job;
use crate::params::JobParams;

use super::JobClient;

impl JobClient {
    /// Runs one job end to end: submit, poll with the client's deadline and
    /// interval, download, and decode every row.
    ///
    /// The first failing stage's error is returned unchanged; no partial
    /// results are produced. Records come back in download order.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`Self::submit`], [`Self::poll`] or
    /// [`Self::download`].
    pub async fn fetch(&self, params: JobParams) -> Result<Vec<PlaceRecord>, JobError> {
        let mut job = Job::new(params);
        let job_id = self.submit(job.params()).await?;
        job.mark_submitted(job_id.clone());

        let status = self
            .drive_polling(job.state_mut(), self.total_timeout, self.poll_interval)
            .await?;
        tracing::info!(job_id = %job_id, status = %status.status, "job finished");

        let rows = self.download(&job_id).await?;
        let records: Vec<PlaceRecord> = rows.iter().map(decode_tabular_row).collect();
        tracing::info!(job_id = %job_id, records = records.len(), "decoded job output");
        Ok(records)
    }
}
