//! Clipboard access and the copy action.
//!
//! [`SystemClipboard`] is a thin wrapper around the `arboard` crate. On some
//! platforms, or in headless CI, clipboard initialization fails; the copy
//! action treats that like any other write failure and tells the user to
//! copy by hand instead of propagating an error.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

use crate::contact::CopyKind;
use crate::error::ClipboardError;
use crate::feedback::TransientFeedback;
use crate::notify::{Notification, Toaster};

/// Something that can receive copied text.
pub trait ClipboardWrite {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// The platform clipboard. Writes run on tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardWrite for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || write_system_clipboard(&text))
            .await
            .map_err(|e| ClipboardError::WriteFailed(format!("clipboard task: {}", e)))?
    }
}

fn write_system_clipboard(s: &str) -> Result<(), ClipboardError> {
    let mut ctx = arboard::Clipboard::new()
        .map_err(|e| ClipboardError::Unavailable(format!("clipboard init: {}", e)))?;
    ctx.set_text(s.to_owned())
        .map_err(|e| ClipboardError::WriteFailed(format!("clipboard set: {}", e)))
}

/// Clipboard held in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ClipboardWrite for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_owned());
        Ok(())
    }
}

/// Clipboard that refuses every write with the given error.
#[derive(Debug, Clone)]
pub struct RejectingClipboard(pub ClipboardError);

impl ClipboardWrite for RejectingClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(self.0.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyKind),
    Failed(ClipboardError),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }
}

/// Copy `text` and report the result.
///
/// Success shows the feedback flag for `kind` and queues a "Copied" toast.
/// Failure queues a destructive "Copy failed" toast and leaves the flag
/// alone. Either way exactly one notification is sent.
pub async fn copy_to_clipboard<W: ClipboardWrite>(
    writer: &W,
    text: &str,
    kind: CopyKind,
    feedback: &mut TransientFeedback,
    toaster: &Toaster,
) -> CopyOutcome {
    match writer.write_text(text).await {
        Ok(()) => {
            info!(%kind, "copied to clipboard");
            feedback.show(kind);
            toaster.toast(Notification::copied(kind));
            CopyOutcome::Copied(kind)
        }
        Err(e) => {
            warn!(%kind, error = %e, "clipboard copy failed");
            toaster.toast(Notification::copy_failed());
            CopyOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackState;
    use crate::notify::Severity;

    #[tokio::test(start_paused = true)]
    async fn success_sets_flag_and_toasts() {
        let clipboard = MemoryClipboard::default();
        let mut feedback = TransientFeedback::default();
        let (toaster, mut rx) = Toaster::channel();

        let outcome =
            copy_to_clipboard(&clipboard, "a@b.c", CopyKind::Email, &mut feedback, &toaster).await;

        assert_eq!(outcome, CopyOutcome::Copied(CopyKind::Email));
        assert_eq!(clipboard.contents().as_deref(), Some("a@b.c"));
        assert_eq!(feedback.state(), FeedbackState::Showing(CopyKind::Email));
        let toast = rx.try_recv().unwrap();
        assert_eq!(toast.title, "Copied");
        assert_eq!(toast.description, "Email copied.");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn rejection_toasts_once_and_leaves_flag_idle() {
        let clipboard = RejectingClipboard(ClipboardError::WriteFailed("denied".into()));
        let mut feedback = TransientFeedback::default();
        let (toaster, mut rx) = Toaster::channel();

        let outcome =
            copy_to_clipboard(&clipboard, "+1", CopyKind::Whatsapp, &mut feedback, &toaster).await;

        assert!(!outcome.is_copied());
        assert_eq!(feedback.state(), FeedbackState::Idle);
        let toast = rx.try_recv().unwrap();
        assert_eq!(toast.severity, Severity::Destructive);
        assert_eq!(toast.description, "Please copy manually.");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn failure_keeps_existing_flag() {
        let mut feedback = TransientFeedback::default();
        let (toaster, _rx) = Toaster::channel();
        copy_to_clipboard(&MemoryClipboard::default(), "x", CopyKind::Email, &mut feedback, &toaster)
            .await;
        let rejecting = RejectingClipboard(ClipboardError::Unavailable("headless".into()));
        copy_to_clipboard(&rejecting, "y", CopyKind::Whatsapp, &mut feedback, &toaster).await;
        assert!(feedback.is_showing(CopyKind::Email));
    }

    #[test]
    fn system_clipboard_copy_no_panic() {
        // Best-effort: depends on the platform, we only check it does not panic.
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let _ = rt.block_on(SystemClipboard.write_text("test"));
    }
}
