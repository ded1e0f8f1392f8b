//! Tracks the state of background jobs, such as metadata file imports.
//!
//! - `JobsState`: clonable, shared container of every job's status, injected
//!   into the Actix application in `main.rs`.
//! - `JobUpdate`: a status change sent by a running job.
//! - `start_job_updater`: the single task that applies `JobUpdate`s to the
//!   shared map.
//!
//! Jobs live in memory for the lifetime of the process.

use common::jobs::JobStatus;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{mpsc, RwLock};

#[derive(Clone)]
pub struct JobsState {
    /// Job id to current status. Read by the status endpoint, written by the
    /// updater task and by job scheduling.
    pub jobs: Arc<RwLock<HashMap<String, JobStatus>>>,

    /// Background jobs push their progress here instead of locking `jobs`.
    pub tx: mpsc::Sender<JobUpdate>,
}

#[derive(Debug)]
pub struct JobUpdate {
    pub(crate) job_id: String,
    pub(crate) status: JobStatus,
}

impl JobsState {
    /// Registers a new job as `Pending` and returns its id.
    pub async fn register(&self) -> String {
        let job_id = uuid::Uuid::new_v4().to_string();
        self.jobs
            .write()
            .await
            .insert(job_id.clone(), JobStatus::Pending);
        job_id
    }

    pub async fn status(&self, job_id: &str) -> Option<JobStatus> {
        self.jobs.read().await.get(job_id).cloned()
    }
}

/// Applies every received `JobUpdate` to the shared job map until all senders
/// are dropped. Spawned once from `main.rs`.
pub async fn start_job_updater(state: JobsState, mut rx: mpsc::Receiver<JobUpdate>) {
    while let Some(update) = rx.recv().await {
        let mut jobs = state.jobs.write().await;
        jobs.insert(update.job_id.clone(), update.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_updates_are_applied_in_order() {
        let (tx, rx) = mpsc::channel(10);
        // the updater gets an unrelated sender so `rx` closes once `tx` is dropped
        let (idle_tx, _idle_rx) = mpsc::channel(1);
        let state = JobsState {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            tx: idle_tx,
        };
        let job_id = state.register().await;
        assert_eq!(state.status(&job_id).await, Some(JobStatus::Pending));

        for status in [
            JobStatus::InProgress(50),
            JobStatus::Completed("{}".to_string()),
        ] {
            tx.send(JobUpdate {
                job_id: job_id.clone(),
                status,
            })
            .await
            .unwrap();
        }
        drop(tx);
        start_job_updater(state.clone(), rx).await;

        assert_eq!(
            state.status(&job_id).await,
            Some(JobStatus::Completed("{}".to_string()))
        );
    }

    #[actix_web::test]
    async fn test_unknown_job_has_no_status() {
        let (tx, _rx) = mpsc::channel(1);
        let state = JobsState {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            tx,
        };
        assert_eq!(state.status("nope").await, None);
    }
}
