//! Short-lived "Copied!" indicator state.
//!
//! [`TransientFeedback`] is a two-state machine, `Idle` and `Showing(kind)`,
//! with at most one live expiry timer. Every transition bumps a generation
//! counter and aborts the previous timer, so an older timer can never clear
//! a newer flag even if it was already past its sleep when superseded.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::contact::CopyKind;

/// How long the indicator stays up after a successful copy.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackState {
    #[default]
    Idle,
    Showing(CopyKind),
}

/// Feedback flag for one UI session. Timers run on the current tokio runtime.
pub struct TransientFeedback {
    delay: Duration,
    tx: Arc<watch::Sender<FeedbackState>>,
    generation: Arc<AtomicU64>,
    timer: Option<JoinHandle<()>>,
}

impl TransientFeedback {
    pub fn new(delay: Duration) -> Self {
        let (tx, _) = watch::channel(FeedbackState::Idle);
        Self {
            delay,
            tx: Arc::new(tx),
            generation: Arc::new(AtomicU64::new(0)),
            timer: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> FeedbackState {
        *self.tx.borrow()
    }

    pub fn is_showing(&self, kind: CopyKind) -> bool {
        self.state() == FeedbackState::Showing(kind)
    }

    pub fn watch(&self) -> watch::Receiver<FeedbackState> {
        self.tx.subscribe()
    }

    /// Enter `Showing(kind)` and restart the expiry timer.
    pub fn show(&mut self, kind: CopyKind) {
        let generation = self.supersede();
        self.tx.send_replace(FeedbackState::Showing(kind));

        let tx = Arc::clone(&self.tx);
        let current = Arc::clone(&self.generation);
        let delay = self.delay;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) == generation {
                trace!(%kind, "feedback expired");
                tx.send_replace(FeedbackState::Idle);
            }
        }));
    }

    /// Return to `Idle` now, cancelling any pending expiry.
    pub fn dismiss(&mut self) {
        self.supersede();
        self.tx.send_if_modified(|state| {
            if *state == FeedbackState::Idle {
                return false;
            }
            *state = FeedbackState::Idle;
            true
        });
    }

    fn supersede(&mut self) -> u64 {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for TransientFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_DELAY)
    }
}

impl Drop for TransientFeedback {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
