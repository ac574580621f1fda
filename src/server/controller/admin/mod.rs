//! JWT-protected admin dashboard endpoints.
//!
//! Every handler here (except login) calls
//! [`require_admin`](crate::server::controller::util::auth::require_admin)
//! before touching data.

pub mod analytics;
pub mod appointment;
pub mod invoice;
pub mod login;
pub mod notification;
pub mod template;

pub static ADMIN_TAG: &str = "admin";
