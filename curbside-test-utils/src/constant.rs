//! Shared constant values for test configuration.
//!
//! None of these are real credentials; they exist so every test signs tokens
//! and hashes passwords with the same inputs.

/// HMAC secret used to sign admin JWTs in tests.
pub static TEST_JWT_SECRET: &str = "curbside-test-secret";

/// Default admin username inserted by the admin account fixture.
pub static TEST_ADMIN_USERNAME: &str = "dispatch";

/// Plaintext counterpart of the fixture admin's bcrypt hash.
pub static TEST_ADMIN_PASSWORD: &str = "wrench-and-roll";
