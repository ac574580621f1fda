//! Worker pool processing queued jobs with bounded concurrency.
//!
//! Dispatcher tasks poll the queue and spawn an execution task per job; a
//! semaphore caps how many jobs run at once and a per-job timeout stops a
//! hung job from pinning a permit forever.

mod config;

pub use config::WorkerPoolConfig;

use std::sync::Arc;
use std::time::Duration;

use dioxus_logger::tracing;
use tokio::sync::{Notify, RwLock, Semaphore};
use tokio::task::JoinHandle;

use crate::server::{
    error::Error,
    model::worker::WorkerJob,
    worker::{handler::WorkerJobHandler, queue::WorkerQueue},
};

#[derive(Clone)]
pub struct WorkerPool {
    inner: Arc<WorkerPoolRef>,
}

struct WorkerPoolRef {
    config: WorkerPoolConfig,
    queue: WorkerQueue,
    handler: Arc<WorkerJobHandler>,
    semaphore: Arc<Semaphore>,
    shutdown: Arc<Notify>,
    dispatcher_handles: RwLock<Vec<JoinHandle<()>>>,
}

impl WorkerPool {
    /// Creates a new pool in a stopped state; call [`WorkerPool::start`] to
    /// begin processing.
    pub fn new(config: WorkerPoolConfig, queue: WorkerQueue, handler: WorkerJobHandler) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent_jobs));

        Self {
            inner: Arc::new(WorkerPoolRef {
                config,
                queue,
                handler: Arc::new(handler),
                semaphore,
                shutdown: Arc::new(Notify::new()),
                dispatcher_handles: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Spawn the dispatchers and the queue cleanup task.
    ///
    /// Non-blocking and idempotent; starting a running pool logs a warning
    /// and returns Ok.
    pub async fn start(&self) -> Result<(), Error> {
        let mut handles = self.inner.dispatcher_handles.write().await;

        if !handles.is_empty() {
            tracing::warn!("Worker pool is already running");
            return Ok(());
        }

        tracing::info!(
            "Starting worker pool with {} dispatcher(s) (max {} concurrent jobs)",
            self.inner.config.dispatcher_count,
            self.inner.config.max_concurrent_jobs
        );

        self.inner.queue.start_cleanup().await;

        for id in 0..self.inner.config.dispatcher_count {
            let handle = self.spawn_dispatcher(id);
            handles.push(handle);
        }

        Ok(())
    }

    fn spawn_dispatcher(&self, id: usize) -> JoinHandle<()> {
        let config = self.inner.config.clone();
        let queue = self.inner.queue.clone();
        let handler = Arc::clone(&self.inner.handler);
        let semaphore = Arc::clone(&self.inner.semaphore);
        let shutdown = Arc::clone(&self.inner.shutdown);

        tokio::spawn(async move {
            tracing::debug!("Dispatcher {} started", id);

            loop {
                tokio::select! {
                    // Shutdown wins over picking up another job.
                    biased;

                    _ = shutdown.notified() => {
                        break;
                    }

                    _ = Self::process_jobs(id, &config, &queue, &handler, &semaphore) => {}
                }
            }

            tracing::debug!("Dispatcher {} stopped", id);
        })
    }

    /// One poll iteration: pop a due job and spawn an execution task for it,
    /// sleeping when the queue is empty or erroring.
    async fn process_jobs(
        dispatcher_id: usize,
        config: &WorkerPoolConfig,
        queue: &WorkerQueue,
        handler: &Arc<WorkerJobHandler>,
        semaphore: &Arc<Semaphore>,
    ) {
        match queue.pop().await {
            Ok(Some(job)) => {
                // Blocks while the pool is at capacity.
                match semaphore.clone().acquire_owned().await {
                    Ok(permit) => {
                        let handler = Arc::clone(handler);
                        let timeout = config.job_timeout();

                        tokio::spawn(async move {
                            Self::execute_job(job, handler, timeout, permit).await;
                        });
                    }
                    Err(_) => {
                        // Semaphore closed mid-shutdown; return the job.
                        let _ = queue.push(job).await;
                        tracing::debug!(
                            "Dispatcher {} semaphore closed, returned job to queue",
                            dispatcher_id
                        );
                    }
                }
            }
            Ok(None) => {
                tokio::time::sleep(config.poll_interval()).await;
            }
            Err(e) => {
                tracing::error!("Dispatcher {} queue error: {:?}", dispatcher_id, e);
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }

    async fn execute_job(
        job: WorkerJob,
        handler: Arc<WorkerJobHandler>,
        timeout: Duration,
        _permit: tokio::sync::OwnedSemaphorePermit,
    ) {
        let result = tokio::time::timeout(timeout, handler.handle(&job)).await;

        match result {
            Ok(Ok(())) => {
                tracing::debug!("Job completed: {}", job);
            }
            Ok(Err(e)) => {
                tracing::error!("Job failed: {}, error: {:?}", job, e);
            }
            Err(_) => {
                tracing::error!("Job timed out after {} seconds: {}", timeout.as_secs(), job);
            }
        }
        // Dropping the permit frees a concurrency slot.
    }

    /// Graceful shutdown: no new jobs are started, dispatchers are signalled
    /// and awaited with a timeout, and in-flight jobs run to completion.
    pub async fn stop(&self) -> Result<(), Error> {
        if !self.is_running().await {
            tracing::debug!("Worker pool is already stopped");
            return Ok(());
        }

        tracing::info!("Shutting down worker pool");

        self.inner.semaphore.close();
        self.inner.shutdown.notify_waiters();
        self.inner.queue.stop_cleanup().await;

        let mut handles = self.inner.dispatcher_handles.write().await;
        let dispatcher_count = handles.len();

        for (i, handle) in handles.drain(..).enumerate() {
            match tokio::time::timeout(self.inner.config.shutdown_timeout(), handle).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::error!("Dispatcher {} panicked: {:?}", i, e);
                }
                Err(_) => {
                    tracing::warn!("Dispatcher {} did not stop within timeout", i);
                }
            }
        }

        tracing::info!(
            "Worker pool shut down ({} dispatcher(s) stopped, in-flight tasks will complete)",
            dispatcher_count
        );

        Ok(())
    }

    pub async fn is_running(&self) -> bool {
        let handles = self.inner.dispatcher_handles.read().await;
        !handles.is_empty()
    }

    pub async fn dispatcher_count(&self) -> usize {
        let handles = self.inner.dispatcher_handles.read().await;
        handles.len()
    }

    /// Permits still available; 0 means the pool is at capacity.
    pub fn available_permits(&self) -> usize {
        self.inner.semaphore.available_permits()
    }

    pub fn max_concurrent_jobs(&self) -> usize {
        self.inner.config.max_concurrent_jobs
    }

    pub fn active_job_count(&self) -> usize {
        self.inner.config.max_concurrent_jobs - self.inner.semaphore.available_permits()
    }
}
