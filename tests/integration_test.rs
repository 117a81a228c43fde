use std::sync::Arc;
use std::time::Duration;

use reachout_lib::clipboard::{CopyOutcome, MemoryClipboard, RejectingClipboard};
use reachout_lib::contact::{ContactIdentity, CopyKind, DEFAULT_MESSAGE};
use reachout_lib::error::ClipboardError;
use reachout_lib::feedback::{FeedbackState, TransientFeedback};
use reachout_lib::link::format_messaging_link;
use reachout_lib::motion::{ReducedMotionObserver, SimulatedPreference};
use reachout_lib::notify::{Severity, Toaster};
use reachout_lib::session::ContactSession;

#[test]
fn integration_reference_messaging_link() {
    let link = format_messaging_link("+919696658203", DEFAULT_MESSAGE);
    assert_eq!(
        link,
        "https://wa.me/919696658203?text=Discussing%20backend%20engineering%20opportunities."
    );
}

#[tokio::test(start_paused = true)]
async fn integration_session_copy_then_expire() {
    let (toaster, mut toasts) = Toaster::channel();
    let mut session = ContactSession::new(
        ContactIdentity::default(),
        MemoryClipboard::default(),
        TransientFeedback::default(),
        toaster,
    );

    let outcome = session.copy(CopyKind::Whatsapp).await;
    assert_eq!(outcome, CopyOutcome::Copied(CopyKind::Whatsapp));
    assert_eq!(session.clipboard().contents().as_deref(), Some("+919696658203"));
    assert_eq!(session.feedback(), FeedbackState::Showing(CopyKind::Whatsapp));
    assert_eq!(toasts.try_recv().unwrap().description, "WhatsApp number copied.");

    tokio::time::sleep(Duration::from_millis(500)).await;
    session.copy(CopyKind::Email).await;
    tokio::time::sleep(Duration::from_millis(1199)).await;
    assert_eq!(session.feedback(), FeedbackState::Showing(CopyKind::Email));
    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(session.feedback(), FeedbackState::Idle);
}

#[tokio::test(start_paused = true)]
async fn integration_rejected_copy() {
    let (toaster, mut toasts) = Toaster::channel();
    let mut session = ContactSession::new(
        ContactIdentity::default(),
        RejectingClipboard(ClipboardError::Unavailable("no display".into())),
        TransientFeedback::default(),
        toaster,
    );

    let outcome = session.copy(CopyKind::Email).await;
    assert!(matches!(outcome, CopyOutcome::Failed(ClipboardError::Unavailable(_))));
    assert_eq!(session.feedback(), FeedbackState::Idle);

    let toast = toasts.try_recv().unwrap();
    assert_eq!(toast.title, "Copy failed");
    assert_eq!(toast.severity, Severity::Destructive);
    assert!(toasts.try_recv().is_err());
}

#[test]
fn integration_motion_observer_lifetime() {
    let system = Arc::new(SimulatedPreference::new(false));
    let observer = ReducedMotionObserver::mount(system.clone());
    let rx = observer.watch();

    system.set(true);
    assert!(observer.get());
    assert_eq!(observer.fade_up().hidden.y, 0.0);

    drop(observer);
    system.set(false);
    assert!(*rx.borrow());
    assert_eq!(system.listener_count(), 0);
}
