mod pool;
mod queue;
