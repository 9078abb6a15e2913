use std::sync::{Arc, Mutex};

use tracing::Level;

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() { tracing_subscriber::fmt().with_max_level(Level::DEBUG).with_test_writer().init(); }

/// Shared record of the events delivered to one or more observers
#[allow(unused)]
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

#[allow(unused)]
impl EventLog {
    pub fn new() -> Self { Self::default() }

    pub fn record(&self, event: &str) { self.0.lock().unwrap().push(event.to_owned()); }

    /// Events recorded since the last drain
    pub fn drain(&self) -> Vec<String> { self.0.lock().unwrap().drain(..).collect() }
}
