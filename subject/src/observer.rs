use std::sync::{Arc, Weak};

mod callback_observer;
mod logging_observer;
pub use callback_observer::*;
pub use logging_observer::*;

/// An Observer is told about every event a subject it is registered with emits.
/// The subject only ever holds a weak handle, so the observer's lifetime belongs to whoever created it.
pub trait Observer: Send + Sync {
    fn notify(&self, event: &str);
}

/// Trait for types that can be converted into the weak handle a registry stores.
pub trait IntoWeakObserver {
    fn into_weak_observer(self) -> Weak<dyn Observer>;
}

impl IntoWeakObserver for Weak<dyn Observer> {
    fn into_weak_observer(self) -> Weak<dyn Observer> { self }
}

impl<T: Observer + 'static> IntoWeakObserver for Weak<T> {
    fn into_weak_observer(self) -> Weak<dyn Observer> { self }
}

impl IntoWeakObserver for &Weak<dyn Observer> {
    fn into_weak_observer(self) -> Weak<dyn Observer> { self.clone() }
}

impl<T: Observer + 'static> IntoWeakObserver for &Weak<T> {
    fn into_weak_observer(self) -> Weak<dyn Observer> {
        let weak: Weak<T> = self.clone();
        weak
    }
}

impl<T: Observer + 'static> IntoWeakObserver for &Arc<T> {
    fn into_weak_observer(self) -> Weak<dyn Observer> {
        let weak: Weak<T> = Arc::downgrade(self);
        weak
    }
}

impl IntoWeakObserver for &Arc<dyn Observer> {
    fn into_weak_observer(self) -> Weak<dyn Observer> { Arc::downgrade(self) }
}

// Channel observers forward each event as an owned string

impl Observer for std::sync::mpsc::Sender<String> {
    fn notify(&self, event: &str) {
        let _ = self.send(event.to_owned()); // Ignore send errors
    }
}

#[cfg(feature = "tokio")]
impl Observer for tokio::sync::mpsc::UnboundedSender<String> {
    fn notify(&self, event: &str) {
        let _ = self.send(event.to_owned()); // Ignore send errors
    }
}
