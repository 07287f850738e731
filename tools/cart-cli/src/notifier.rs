//! Terminal notifier.

use cart_core::{Notifier, Severity};
use console::{style, Term};

/// [`Notifier`] printing toast-like lines to stderr.
pub struct ConsoleNotifier {
    json: bool,
    term: Term,
}

impl ConsoleNotifier {
    /// Create a notifier; `json` switches to one JSON object per message.
    pub fn new(json: bool) -> Self {
        Self {
            json,
            term: Term::stderr(),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let line = if self.json {
            serde_json::json!({ "notification": message, "severity": severity }).to_string()
        } else {
            match severity {
                Severity::Info => format!("{} {}", style("ℹ").blue(), message),
                Severity::Warning => format!("{} {}", style("⚠").yellow(), message),
                Severity::Error => format!("{} {}", style("✗").red(), style(message).red()),
            }
        };
        let _ = self.term.write_line(&line);
    }
}
