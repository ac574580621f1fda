//! Session data models and utilities.
//!
//! Type-safe wrappers for session data storage and retrieval using
//! tower-sessions. Customer identity is the only session state the booking
//! flow needs; the admin dashboard uses bearer tokens instead.

pub mod customer;
