//! Terminal implementation of the notification dialogs.

use brainstorm_core::notify::Notifier;
use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};

pub struct TerminalNotifier {
    assume_yes: bool,
}

impl TerminalNotifier {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    /// Notifications block for Enter only on an interactive terminal
    /// without `--yes`.
    fn waits_for_acknowledgment(&self) -> bool {
        !self.assume_yes && io::stdin().is_terminal()
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        for line in message.lines() {
            println!("{}", line.bright_yellow());
        }
        if !self.waits_for_acknowledgment() {
            return;
        }

        print!("{}", "Press Enter to continue".bright_black());
        if io::stdout().flush().is_err() {
            return;
        }
        let mut ignored = String::new();
        if let Err(err) = io::stdin().lock().read_line(&mut ignored) {
            tracing::warn!(error = %err, "could not read acknowledgment");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            println!("{} {}", message.bright_yellow(), "[y/N] y".bright_black());
            return true;
        }

        print!("{} {} ", message.bright_yellow(), "[y/N]".bright_black());
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(err) => {
                tracing::warn!(error = %err, "could not read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
