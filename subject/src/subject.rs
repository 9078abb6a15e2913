use std::sync::Mutex;

use tracing::debug;

use crate::observer::IntoWeakObserver;
use crate::registry::ObserverRegistry;

/// A Subject holds an integer state and tells its observers whenever the state changes.
/// Observers are held weakly, so dropping an observer is all it takes to stop receiving events.
#[derive(Debug, Default)]
pub struct Subject {
    state: Mutex<i64>,
    observers: ObserverRegistry,
}

impl Subject {
    pub fn new() -> Self { Self::default() }

    pub fn with_state(state: i64) -> Self { Self { state: Mutex::new(state), observers: ObserverRegistry::new() } }

    pub fn state(&self) -> i64 { *self.state.lock().expect("state lock is poisoned") }

    pub fn register_observer<O: IntoWeakObserver>(&self, observer: O) -> bool { self.observers.register_observer(observer) }

    pub fn unregister_observer<O: IntoWeakObserver>(&self, observer: O) -> bool { self.observers.unregister_observer(observer) }

    /// Sets the state, notifying every live observer if it changed.
    /// All observers have been notified by the time this returns.
    pub fn set_state(&self, new_state: i64) {
        {
            let mut state = self.state.lock().expect("state lock is poisoned");
            if *state == new_state {
                return;
            }
            *state = new_state;
        }
        debug!("state changed to {new_state}");
        self.notify(&format!("Changed state on: {new_state}"));
    }

    /// Number of registered observers, including expired ones not yet pruned
    pub fn observer_count(&self) -> usize { self.observers.len() }

    pub(crate) fn notify(&self, event: &str) -> usize { self.observers.notify(event) }
}
