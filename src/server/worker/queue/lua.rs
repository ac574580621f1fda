//! Lua scripts for the Redis-backed worker queue.

// Atomically check for duplicates and add a job to the sorted set.
// The job identity is the ZSET member, so uniqueness falls out of the
// data structure; the score is the scheduled execution time.
//
// KEYS[1]: sorted set key (queue name)
// ARGV[1]: identity string
// ARGV[2]: score (execution timestamp, milliseconds)
//
// Returns:
//   1 if job was added
//   0 if a job with the same identity already exists
pub static PUSH_JOB_SCRIPT: &str = r#"
local queue_key = KEYS[1]
local identity = ARGV[1]
local score = tonumber(ARGV[2])

local exists = redis.call('ZSCORE', queue_key, identity)
if exists then
    return 0
end

redis.call('ZADD', queue_key, score, identity)
return 1
"#;

// Atomically pop the earliest job whose scheduled time has passed.
// Jobs scored in the future stay put until they come due.
//
// KEYS[1]: sorted set key (queue name)
// ARGV[1]: current timestamp (milliseconds)
//
// Returns the job identity, or false when nothing is due.
pub static POP_DUE_JOB_SCRIPT: &str = r#"
local queue_key = KEYS[1]
local now = tonumber(ARGV[1])

local due = redis.call('ZRANGEBYSCORE', queue_key, '-inf', now, 'LIMIT', 0, 1)
if #due == 0 then
    return false
end

redis.call('ZREM', queue_key, due[1])
return due[1]
"#;

// Remove all jobs scheduled before the cutoff.
//
// KEYS[1]: sorted set key (queue name)
// ARGV[1]: cutoff score (timestamp, milliseconds)
//
// Returns: number of jobs removed
pub static CLEANUP_STALE_JOBS_SCRIPT: &str = r#"
local queue_key = KEYS[1]
local cutoff_score = tonumber(ARGV[1])

local removed = redis.call('ZREMRANGEBYSCORE', queue_key, '-inf', cutoff_score)
return removed
"#;
