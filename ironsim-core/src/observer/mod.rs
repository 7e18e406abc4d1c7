//! Observer pattern for simulation event sinks.
//!
//! Tick and command handlers produce [`GameEvent`]s; observers consume
//! them without being able to affect simulation state. The registry fans
//! events out and logs (never propagates) observer failures, so a broken
//! sink cannot stall the simulation.
//!
//! ```text
//! SimObserver trait
//!        │
//!        ├── MessageLog   (bounded user-facing message buffer)
//!        └── JsonlEventLog (structured JSON lines to any Write)
//! ```

pub mod event_log;
pub mod message_log;

use crate::events::GameEvent;
use crate::state::Date;
use thiserror::Error;

/// Errors that can occur during observation.
#[derive(Error, Debug)]
pub enum ObserverError {
    /// I/O error (e.g., writing to a file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error (e.g., JSON output)
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Rendering/formatting error
    #[error("Render error: {0}")]
    Render(String),
}

/// Trait for simulation event sinks.
///
/// Implementations receive events after they happened and **must not**
/// affect simulation determinism. They are `Send + Sync` so the embedder
/// may share them across threads; internal mutability (a `Mutex` around a
/// buffer) is the expected pattern.
pub trait SimObserver: Send + Sync {
    /// Called once per event, with the in-game date it occurred on.
    fn on_event(&self, date: Date, event: &GameEvent) -> Result<(), ObserverError>;

    /// Human-readable name for logging/debugging.
    fn name(&self) -> &str;

    /// Called when the simulation ends or the registry is dropped.
    fn on_shutdown(&self) {}
}

/// Observers are often shared between the registry and the embedder that
/// reads them back (e.g. a message log rendered at exit).
impl<T: SimObserver> SimObserver for std::sync::Arc<T> {
    fn on_event(&self, date: Date, event: &GameEvent) -> Result<(), ObserverError> {
        (**self).on_event(date, event)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_shutdown(&self) {
        (**self).on_shutdown()
    }
}

/// Registry for managing multiple observers.
pub struct ObserverRegistry {
    observers: Vec<Box<dyn SimObserver>>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { observers: vec![] }
    }

    /// Register a new observer.
    pub fn register(&mut self, observer: Box<dyn SimObserver>) {
        log::info!("Registered observer: {}", observer.name());
        self.observers.push(observer);
    }

    /// Deliver a batch of events to every observer.
    ///
    /// Errors are logged but do not propagate (non-blocking).
    pub fn notify(&self, date: Date, events: &[GameEvent]) {
        for observer in &self.observers {
            for event in events {
                if let Err(e) = observer.on_event(date, event) {
                    log::warn!("Observer '{}' error: {}", observer.name(), e);
                }
            }
        }
    }

    /// Notify all observers of shutdown.
    pub fn shutdown(&self) {
        for observer in &self.observers {
            observer.on_shutdown();
        }
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ObserverRegistry {
    fn drop(&mut self) {
        // Ensure all observers flush their buffers.
        self.shutdown();
    }
}
