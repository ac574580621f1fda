use std::time::Duration;

/// Configuration for the worker pool.
#[derive(Debug, Clone)]
pub struct WorkerPoolConfig {
    /// Maximum concurrent jobs that can be processed simultaneously.
    ///
    /// Keep this below the database connection pool size; every running job
    /// holds a connection.
    pub max_concurrent_jobs: usize,

    /// Number of dispatcher tasks that poll Redis for jobs.
    ///
    /// Scaled as 1 dispatcher per 40 concurrent jobs, minimum 1.
    pub dispatcher_count: usize,

    /// How long to wait between polls when the queue is empty (milliseconds).
    pub poll_interval_ms: u64,

    /// Maximum time a job can run before being cancelled (seconds).
    pub job_timeout_seconds: u64,

    /// Maximum time to wait for a dispatcher to shut down (seconds).
    pub shutdown_timeout_seconds: u64,
}

impl WorkerPoolConfig {
    pub fn new(max_concurrent_jobs: usize) -> Self {
        let dispatcher_count = max_concurrent_jobs.div_ceil(40).max(1);

        Self {
            max_concurrent_jobs,
            dispatcher_count,
            poll_interval_ms: 50,
            job_timeout_seconds: 60,
            shutdown_timeout_seconds: 5,
        }
    }

    pub fn job_timeout(&self) -> Duration {
        Duration::from_secs(self.job_timeout_seconds)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_seconds)
    }
}

impl Default for WorkerPoolConfig {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::server::worker::pool::WorkerPoolConfig;

    #[test]
    fn default_config() {
        let config = WorkerPoolConfig::default();

        assert_eq!(config.max_concurrent_jobs, 4);
        assert_eq!(config.dispatcher_count, 1);
        assert_eq!(config.job_timeout(), Duration::from_secs(60));
        assert_eq!(config.poll_interval(), Duration::from_millis(50));
        assert_eq!(config.shutdown_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn dispatcher_scaling() {
        assert_eq!(WorkerPoolConfig::new(1).dispatcher_count, 1);
        assert_eq!(WorkerPoolConfig::new(40).dispatcher_count, 1);
        assert_eq!(WorkerPoolConfig::new(41).dispatcher_count, 2);
        assert_eq!(WorkerPoolConfig::new(80).dispatcher_count, 2);
        assert_eq!(WorkerPoolConfig::new(81).dispatcher_count, 3);
    }

    #[test]
    fn custom_timeouts() {
        let mut config = WorkerPoolConfig::new(8);
        config.job_timeout_seconds = 10;
        config.shutdown_timeout_seconds = 3;
        config.poll_interval_ms = 10;

        assert_eq!(config.job_timeout(), Duration::from_secs(10));
        assert_eq!(config.shutdown_timeout(), Duration::from_secs(3));
        assert_eq!(config.poll_interval(), Duration::from_millis(10));
    }
}
