use super::Observer;
use std::sync::{Arc, Mutex};
use tracing::info;

/// A named observer which logs every event it receives and keeps a record of them.
#[derive(Debug)]
pub struct LoggingObserver {
    name: String,
    events: Mutex<Vec<String>>,
}

impl LoggingObserver {
    pub fn new(name: impl Into<String>) -> Arc<Self> { Arc::new(Self { name: name.into(), events: Mutex::new(Vec::new()) }) }

    pub fn name(&self) -> &str { &self.name }

    /// All events received so far
    pub fn events(&self) -> Vec<String> { self.events.lock().expect("events lock is poisoned").clone() }

    /// Drain the events received since the last call
    pub fn take_events(&self) -> Vec<String> { self.events.lock().expect("events lock is poisoned").drain(..).collect() }
}

impl Observer for LoggingObserver {
    fn notify(&self, event: &str) {
        info!("{}: {event}", self.name);
        self.events.lock().expect("events lock is poisoned").push(event.to_string());
    }
}
