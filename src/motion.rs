//! Reduced-motion preference tracking.
//!
//! A [`ReducedMotionObserver`] mirrors a platform accessibility setting into a
//! `tokio::sync::watch` channel. Mounting reads the current value and
//! registers a change listener with the [`PreferenceSource`]; dropping the
//! observer deregisters it, so a torn-down view never hears about later
//! changes. Sources that cannot answer the query leave the value at `false`.

use std::env;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tracing::{debug, trace};

use crate::error::PreferenceError;

const REDUCED_MOTION_ENV: &str = "REACHOUT_REDUCED_MOTION";

/// Vertical offset (px) the fade-up animation starts from when motion is allowed.
pub const FADE_UP_OFFSET: f32 = 20.0;

pub type ListenerId = u64;

/// Change callback; receives the new "reduce motion" value.
pub type Listener = Arc<dyn Fn(bool) + Send + Sync>;

/// Platform side of the reduced-motion query.
pub trait PreferenceSource: Send + Sync {
    /// Current value of the setting.
    fn query(&self) -> Result<bool, PreferenceError>;

    /// Register `listener` for change notifications. `None` means the
    /// platform never sends any.
    fn subscribe(&self, listener: Listener) -> Option<ListenerId>;

    fn unsubscribe(&self, id: ListenerId);
}

/// Live mirror of the reduced-motion setting, scoped to the consuming view.
pub struct ReducedMotionObserver {
    source: Arc<dyn PreferenceSource>,
    listener: Option<ListenerId>,
    rx: watch::Receiver<bool>,
}

impl ReducedMotionObserver {
    pub fn mount(source: Arc<dyn PreferenceSource>) -> Self {
        let initial = read_or_default(source.as_ref());
        let (tx, rx) = watch::channel(initial);
        let tx = Arc::new(tx);

        let publish = Arc::clone(&tx);
        let listener = source.subscribe(Arc::new(move |reduced| {
            publish.send_if_modified(|current| {
                if *current == reduced {
                    return false;
                }
                *current = reduced;
                true
            });
        }));
        match listener {
            Some(id) => trace!(id, initial, "reduced-motion listener registered"),
            None => debug!(initial, "reduced-motion changes are not reported by this platform"),
        }

        Self {
            source,
            listener,
            rx,
        }
    }

    /// Latest known value.
    pub fn get(&self) -> bool {
        *self.rx.borrow()
    }

    /// A receiver that is notified whenever the value changes.
    pub fn watch(&self) -> watch::Receiver<bool> {
        self.rx.clone()
    }

    pub fn fade_up(&self) -> FadeUp {
        FadeUp::for_preference(self.get())
    }
}

impl Drop for ReducedMotionObserver {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            self.source.unsubscribe(id);
            trace!(id, "reduced-motion listener released");
        }
    }
}

fn read_or_default(source: &dyn PreferenceSource) -> bool {
    source.query().unwrap_or_else(|e| {
        debug!(error = %e, "falling back to no reduced-motion preference");
        false
    })
}

/// One keyframe of the entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    pub y: f32,
}

/// Entrance animation handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeUp {
    pub hidden: Frame,
    pub show: Frame,
}

impl FadeUp {
    /// Reduced motion keeps the fade but drops the vertical slide.
    pub fn for_preference(reduced_motion: bool) -> Self {
        Self {
            hidden: Frame {
                opacity: 0.0,
                y: if reduced_motion { 0.0 } else { FADE_UP_OFFSET },
            },
            show: Frame {
                opacity: 1.0,
                y: 0.0,
            },
        }
    }
}

#[derive(Default)]
struct SimulatedState {
    value: Option<bool>,
    next_id: ListenerId,
    listeners: Vec<(ListenerId, Listener)>,
}

/// In-process preference that can be toggled, for tests and demos.
pub struct SimulatedPreference {
    state: Mutex<SimulatedState>,
}

impl SimulatedPreference {
    pub fn new(initial: bool) -> Self {
        Self {
            state: Mutex::new(SimulatedState {
                value: Some(initial),
                ..Default::default()
            }),
        }
    }

    /// A platform without the query: reads fail and nothing is ever notified.
    pub fn unsupported() -> Self {
        Self {
            state: Mutex::new(SimulatedState::default()),
        }
    }

    /// Change the setting and notify every registered listener.
    pub fn set(&self, reduced: bool) {
        let listeners: Vec<Listener> = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.value.is_none() {
                return;
            }
            state.value = Some(reduced);
            state.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in listeners {
            listener(reduced);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }
}

impl PreferenceSource for SimulatedPreference {
    fn query(&self) -> Result<bool, PreferenceError> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .value
            .ok_or(PreferenceError::Unsupported)
    }

    fn subscribe(&self, listener: Listener) -> Option<ListenerId> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.value?;
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, listener));
        Some(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .retain(|(existing, _)| *existing != id);
    }
}

/// Preference taken from `REACHOUT_REDUCED_MOTION`; read once, never changes.
#[derive(Debug, Clone, Default)]
pub struct EnvPreference {
    raw: Option<String>,
}

impl EnvPreference {
    pub fn from_env() -> Self {
        Self::new(env::var(REDUCED_MOTION_ENV).ok())
    }

    pub fn new(raw: Option<String>) -> Self {
        Self { raw }
    }
}

impl PreferenceSource for EnvPreference {
    fn query(&self) -> Result<bool, PreferenceError> {
        let Some(raw) = self.raw.as_deref().map(str::trim).filter(|v| !v.is_empty()) else {
            return Err(PreferenceError::Unsupported);
        };
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "reduce" => Ok(true),
            "0" | "false" | "no" | "no-preference" => Ok(false),
            _ => Err(PreferenceError::InvalidValue(raw.to_string())),
        }
    }

    fn subscribe(&self, _listener: Listener) -> Option<ListenerId> {
        None
    }

    fn unsubscribe(&self, _id: ListenerId) {}
}
