#[cfg(feature = "server")]
mod controller;

#[cfg(feature = "redis-test")]
mod util;

#[cfg(feature = "redis-test")]
mod worker;
