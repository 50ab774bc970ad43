//! User domain module.
//!
//! - `model`: the authenticated account as reported by the backend
//! - `service`: identity lookup for a bearer token

mod model;
mod service;

pub use model::{LoginProvider, Role, User};
pub use service::AuthService;
