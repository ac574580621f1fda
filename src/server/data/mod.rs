//! Data access layer repositories.
//!
//! Repositories provide a thin abstraction over database operations for each
//! domain record. Business rules live in the service layer; everything here
//! is plain queries.

pub mod admin_account;
pub mod appointment;
pub mod customer;
pub mod invoice;
pub mod notification;
pub mod service_operation;
pub mod template;
pub mod vehicle;
