//! Background worker for the notification pipeline.
//!
//! The worker is the queue plus the pool that drains it: reminder and
//! dispatch jobs are queued by the cron scheduler and the booking flow, and
//! executed by [`handler::WorkerJobHandler`].

pub mod handler;
pub mod pool;
pub mod queue;

use fred::prelude::Pool;
pub use pool::WorkerPool;
pub use queue::WorkerQueue;

use crate::server::worker::{handler::WorkerJobHandler, pool::WorkerPoolConfig};

#[derive(Clone)]
pub struct Worker {
    pub queue: WorkerQueue,
    pub pool: WorkerPool,
}

impl Worker {
    pub fn new(max_concurrent_jobs: usize, redis_pool: Pool, handler: WorkerJobHandler) -> Self {
        let config = WorkerPoolConfig::new(max_concurrent_jobs);
        let queue = WorkerQueue::new(redis_pool);
        let pool = WorkerPool::new(config, queue.clone(), handler);

        Self { queue, pool }
    }
}
