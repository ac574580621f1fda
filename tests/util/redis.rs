//! Redis test setup with a unique queue name per test.
//!
//! These tests run against a real Valkey/Redis instance at localhost:6379
//! (the `redis-test` feature gates them out of the default test run).

use curbside::server::worker::queue::{WorkerQueue, WorkerQueueConfig};
use fred::prelude::*;

pub struct RedisTest {
    pub redis_pool: Pool,
    queue_name: String,
}

impl RedisTest {
    pub async fn new() -> Result<Self, fred::prelude::Error> {
        let redis_config = Config::from_url("redis://127.0.0.1:6379")?;
        let redis_pool = Pool::new(redis_config, None, None, None, 5)?;
        redis_pool.init().await?;

        Ok(RedisTest {
            redis_pool: redis_pool.clone(),
            queue_name: Self::generate_unique_queue_name(),
        })
    }

    /// Build a queue bound to this test's unique name, so parallel tests
    /// never see each other's jobs.
    pub fn queue(&self) -> WorkerQueue {
        WorkerQueue::with_config(
            self.redis_pool.clone(),
            WorkerQueueConfig::with_queue_name(self.queue_name.clone()),
        )
    }

    fn generate_unique_queue_name() -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let thread_id = std::thread::current().id();

        let mut hasher = DefaultHasher::new();
        timestamp.hash(&mut hasher);
        thread_id.hash(&mut hasher);
        let hash = hasher.finish();

        format!("test:{}:{:x}:worker:queue", timestamp, hash)
    }

    /// Explicitly clean up Redis data; call at the end of every test.
    pub async fn cleanup(self) -> Result<(), fred::prelude::Error> {
        self.redis_pool.del::<(), _>(&self.queue_name).await?;
        Ok(())
    }
}
