use super::Observer;
use crate::{Error, Subject};
use std::sync::{Arc, Weak};

/// A CallbackObserver wraps a callback which is called whenever a subject
/// it is registered with emits an event.
///
/// It can only be constructed behind an `Arc`, which is what allows it to hand
/// out weak handles to itself and register itself with a subject.
pub struct CallbackObserver {
    callback: Box<dyn Fn(&str) + Send + Sync>,
    me: Weak<CallbackObserver>,
}

impl CallbackObserver {
    /// Create a new callback observer, owned by the returned handle
    pub fn new<F: Fn(&str) + Send + Sync + 'static>(callback: F) -> Arc<Self> {
        Arc::new_cyclic(|me| Self { callback: Box::new(callback), me: me.clone() })
    }

    /// A weak handle to this observer
    pub fn weak(&self) -> Weak<Self> { self.me.clone() }

    /// Recover an owning handle to this observer.
    /// Fails once every owning handle has been dropped.
    pub fn shared_from_this(&self) -> Result<Arc<Self>, Error> { self.me.upgrade().ok_or(Error::Expired) }

    /// Register this observer with a subject without the caller needing an owning handle
    pub fn register_me(&self, subject: &Subject) -> bool { subject.register_observer(self.weak()) }

    pub fn unregister_me(&self, subject: &Subject) -> bool { subject.unregister_observer(self.weak()) }
}

impl Observer for CallbackObserver {
    fn notify(&self, event: &str) { (self.callback)(event) }
}

impl std::fmt::Debug for CallbackObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackObserver").field("alive", &(self.me.strong_count() > 0)).finish()
    }
}
