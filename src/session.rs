use tokio::sync::watch;

use crate::clipboard::{ClipboardWrite, CopyOutcome, copy_to_clipboard};
use crate::contact::{ContactIdentity, CopyKind};
use crate::feedback::{FeedbackState, TransientFeedback};
use crate::notify::Toaster;

/// Contact actions for one UI session: one clipboard, one feedback flag,
/// one toast queue.
pub struct ContactSession<W> {
    identity: ContactIdentity,
    clipboard: W,
    feedback: TransientFeedback,
    toaster: Toaster,
}

impl<W: ClipboardWrite> ContactSession<W> {
    pub fn new(
        identity: ContactIdentity,
        clipboard: W,
        feedback: TransientFeedback,
        toaster: Toaster,
    ) -> Self {
        Self {
            identity,
            clipboard,
            feedback,
            toaster,
        }
    }

    pub fn identity(&self) -> &ContactIdentity {
        &self.identity
    }

    pub fn clipboard(&self) -> &W {
        &self.clipboard
    }

    /// Copy the identity field that belongs to `kind`.
    pub async fn copy(&mut self, kind: CopyKind) -> CopyOutcome {
        let text = kind.payload(&self.identity).to_owned();
        copy_to_clipboard(&self.clipboard, &text, kind, &mut self.feedback, &self.toaster).await
    }

    pub fn feedback(&self) -> FeedbackState {
        self.feedback.state()
    }

    pub fn watch_feedback(&self) -> watch::Receiver<FeedbackState> {
        self.feedback.watch()
    }

    pub fn dismiss(&mut self) {
        self.feedback.dismiss();
    }
}
