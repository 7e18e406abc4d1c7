//! Event log observer for recording simulation events as JSONL.
//!
//! Writes one structured JSON line per event to any `Write` destination
//! (stdout, file, pipe), e.g.:
//!
//! ```json
//! {"date":"1936.3.14","type":"battle_victory","nation":"france"}
//! ```

use super::{ObserverError, SimObserver};
use crate::events::GameEvent;
use crate::state::Date;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// One output line: the event plus the in-game date it occurred on.
#[derive(Serialize)]
struct EventRecord<'a> {
    date: String,
    #[serde(flatten)]
    event: &'a GameEvent,
}

/// JSONL sink over any writer.
pub struct JsonlEventLog {
    writer: Mutex<BufWriter<Box<dyn Write + Send>>>,
}

impl JsonlEventLog {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(BufWriter::new(writer)),
        }
    }

    /// Log events to standard output.
    pub fn to_stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Log events to a file, truncating any existing content.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::new(Box::new(File::create(path)?)))
    }
}

impl SimObserver for JsonlEventLog {
    fn on_event(&self, date: Date, event: &GameEvent) -> Result<(), ObserverError> {
        let record = EventRecord {
            date: date.to_string(),
            event,
        };
        let line = serde_json::to_string(&record)?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ObserverError::Render("Lock poisoned".to_string()))?;
        writeln!(writer, "{line}")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "JsonlEventLog"
    }

    fn on_shutdown(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writer.flush() {
                log::warn!("Failed to flush event log: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NationId, START_DATE};
    use std::sync::Arc;

    /// Writer that shares its buffer so tests can inspect output.
    #[derive(Clone)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_one_line_per_event() {
        let buffer = SharedBuffer(Arc::new(Mutex::new(Vec::new())));
        let log = JsonlEventLog::new(Box::new(buffer.clone()));

        log.on_event(
            START_DATE,
            &GameEvent::WarDeclared {
                nation: NationId::France,
            },
        )
        .unwrap();
        log.on_event(START_DATE.add_days(1), &GameEvent::Paused)
            .unwrap();
        log.on_shutdown();

        let bytes = buffer.0.lock().expect("buffer lock").clone();
        let output = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"date":"1936.1.1","type":"war_declared","nation":"france"}"#
        );
        assert_eq!(lines[1], r#"{"date":"1936.1.2","type":"paused"}"#);
    }
}
