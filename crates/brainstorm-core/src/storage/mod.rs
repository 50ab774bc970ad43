//! Local key-value storage capability.
//!
//! Stands in for browser local storage: a flat map of string keys to string
//! values that survives between runs. Callers read-then-write without any
//! cross-key atomicity.

use crate::error::Result;

/// Key holding the bearer token of the logged-in user.
pub const TOKEN_KEY: &str = "token";

/// Key holding the guest session id whose ideas still await a user.
pub const PENDING_GUEST_SESSION_KEY: &str = "pendingGuestSessionId";

/// Narrow key-value capability injected into the use cases.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
