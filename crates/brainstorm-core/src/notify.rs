//! User-facing notifications.

/// Blocking dialogs shown to the user.
///
/// Both calls return only once the user has acknowledged the message.
pub trait Notifier: Send + Sync {
    /// Shows `message` and waits for acknowledgment.
    fn notify(&self, message: &str);

    /// Asks a yes/no question.
    fn confirm(&self, message: &str) -> bool;
}
