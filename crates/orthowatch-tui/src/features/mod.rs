//! Feature slices: session, routing, login, dashboard.

pub mod dashboard;
pub mod login;
pub mod router;
pub mod session;
