//! Domain layer of the brainstorm client.
//!
//! Models and the capability traits that the application layer is written
//! against: remote stores for ideas, inquiries and identity, the AI session
//! backend, local key-value storage and user notifications.

pub mod brainstorm;
pub mod config;
pub mod error;
pub mod idea;
pub mod inquiry;
pub mod notify;
pub mod storage;
pub mod user;

pub use error::BrainstormError;
