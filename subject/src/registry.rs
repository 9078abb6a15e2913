use std::collections::BTreeMap;
use std::sync::{Mutex, Weak};

use tracing::{debug, trace};

use crate::observer::{IntoWeakObserver, Observer};

/// Identity of a registered observer, derived from the address of its shared allocation.
///
/// Handles made with `Weak::new()` have no allocation and all share one sentinel identity.
/// They never upgrade, so such an entry is pruned by the next notification.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObserverId(usize);

impl ObserverId {
    pub fn of(observer: &Weak<dyn Observer>) -> Self {
        // A weak handle keeps the allocation reserved even after the observer is dropped,
        // and the registry holds one for every entry, so the address cannot be reused
        // while the entry exists.
        Self(observer.as_ptr() as *const () as usize)
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{:#x}", self.0) }
}

/// A set of weak observer handles keyed by identity.
///
/// Registration and traversal share a single lock. Expired handles are pruned
/// by the same pass that collects the live observers for a notification.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Mutex<BTreeMap<ObserverId, Weak<dyn Observer>>>,
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry").field("observers", &self.len()).finish()
    }
}

impl ObserverRegistry {
    pub fn new() -> Self { Self::default() }

    /// Adds an observer. Returns false if an observer with the same identity was already registered.
    pub fn register_observer<O: IntoWeakObserver>(&self, observer: O) -> bool {
        let observer = observer.into_weak_observer();
        let id = ObserverId::of(&observer);
        let mut observers = self.observers.lock().expect("observers lock is poisoned");
        if observers.contains_key(&id) {
            return false;
        }
        trace!("register observer {id}");
        observers.insert(id, observer);
        true
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unregister_observer<O: IntoWeakObserver>(&self, observer: O) -> bool {
        let id = ObserverId::of(&observer.into_weak_observer());
        let removed = self.observers.lock().expect("observers lock is poisoned").remove(&id).is_some();
        if removed {
            trace!("unregister observer {id}");
        }
        removed
    }

    pub fn contains<O: IntoWeakObserver>(&self, observer: O) -> bool {
        let id = ObserverId::of(&observer.into_weak_observer());
        self.observers.lock().expect("observers lock is poisoned").contains_key(&id)
    }

    /// Delivers an event to every live observer and prunes the expired ones.
    /// Returns the number of observers the event was delivered to.
    pub fn notify(&self, event: &str) -> usize {
        // Snapshot the entries under the lock, then deliver without holding it so observers
        // can register or unregister from inside their callback. Such changes apply from
        // the next notification on.
        let entries: Vec<(ObserverId, Weak<dyn Observer>)> = {
            let mut observers = self.observers.lock().expect("observers lock is poisoned");
            let mut entries = Vec::with_capacity(observers.len());
            observers.retain(|id, observer| {
                if observer.strong_count() == 0 {
                    debug!("Removing expired observer {id}");
                    return false;
                }
                entries.push((*id, observer.clone()));
                true
            });
            entries
        };

        // Each observer is upgraded only for the duration of its own delivery, so one
        // dropped by an earlier callback in this pass is skipped and pruned.
        let mut delivered = 0;
        for (id, observer) in entries {
            match observer.upgrade() {
                Some(observer) => {
                    trace!("notify observer {id}: {event}");
                    observer.notify(event);
                    delivered += 1;
                }
                None => {
                    debug!("Removing expired observer {id}");
                    self.observers.lock().expect("observers lock is poisoned").remove(&id);
                }
            }
        }
        delivered
    }

    /// Number of entries held, including expired ones which have not been pruned yet
    pub fn len(&self) -> usize { self.observers.lock().expect("observers lock is poisoned").len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn clear(&self) { self.observers.lock().expect("observers lock is poisoned").clear(); }
}
