//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and enforce the rules the HTTP layer
//! relies on: slot conflicts, the appointment status machine, invoice totals,
//! template rendering, and the notification lifecycle.

pub mod analytics;
pub mod auth;
pub mod booking;
pub mod customer;
pub mod invoice;
pub mod notification;
pub mod template;
