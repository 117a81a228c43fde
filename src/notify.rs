//! Toast notifications emitted by the contact actions.
//!
//! The presentation layer owns the receiving end; this side only ever sends.

use tokio::sync::mpsc;
use tracing::trace;

use crate::contact::CopyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    /// Error styling; the user has to do something by hand.
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn copied(kind: CopyKind) -> Self {
        Self {
            title: "Copied".into(),
            description: kind.success_description().into(),
            severity: Severity::Normal,
        }
    }

    pub fn copy_failed() -> Self {
        Self {
            title: "Copy failed".into(),
            description: "Please copy manually.".into(),
            severity: Severity::Destructive,
        }
    }
}

/// Sending half of the notification queue.
#[derive(Debug, Clone)]
pub struct Toaster {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Toaster {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue `notification`. A closed receiver means nobody is rendering
    /// toasts any more, so the notification is dropped.
    pub fn toast(&self, notification: Notification) {
        if let Err(e) = self.tx.send(notification) {
            trace!(title = %e.0.title, "toast dropped, no receiver");
        }
    }
}
