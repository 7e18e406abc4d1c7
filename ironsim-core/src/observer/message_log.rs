//! Bounded user-facing message buffer.
//!
//! Renders simulation events into timestamped text with a severity, and
//! retains only the most recent entries, newest first.

use super::{ObserverError, SimObserver};
use crate::events::GameEvent;
use crate::state::Date;
use crate::step::ActionError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Maximum number of retained messages.
pub const MESSAGE_CAP: usize = 20;

/// Message severity, matching the four display classes of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

/// One rendered log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
}

/// Newest-first message buffer capped at [`MESSAGE_CAP`] entries.
pub struct MessageLog {
    entries: Mutex<VecDeque<Message>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
        }
    }

    /// Append a message, evicting the oldest entries beyond the cap.
    pub fn push(&self, date: Date, text: impl Into<String>, severity: Severity) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        entries.push_front(Message {
            text: format!(
                "[{} {}, {}] {}",
                date.month_abbrev(),
                date.day,
                date.year,
                text.into()
            ),
            severity,
        });
        entries.truncate(MESSAGE_CAP);
    }

    /// Report a failed command the same way the UI would.
    pub fn push_error(&self, date: Date, error: &ActionError) {
        self.push(date, error.to_string(), error.severity());
    }

    /// Snapshot of the retained messages, newest first.
    pub fn messages(&self) -> Vec<Message> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

impl SimObserver for MessageLog {
    fn on_event(&self, date: Date, event: &GameEvent) -> Result<(), ObserverError> {
        let (text, severity) = render_event(event);
        self.push(date, text, severity);
        Ok(())
    }

    fn name(&self) -> &str {
        "MessageLog"
    }
}

/// Render an event to its user-facing text and severity.
pub fn render_event(event: &GameEvent) -> (String, Severity) {
    match event {
        GameEvent::GameStarted { nation } => (
            format!("Game started! You are playing as {nation}"),
            Severity::Success,
        ),
        GameEvent::Paused => ("Game paused".to_string(), Severity::Warning),
        GameEvent::Resumed => ("Game resumed".to_string(), Severity::Warning),
        GameEvent::SpeedChanged { speed } => {
            (format!("Game speed set to {speed}x"), Severity::Success)
        }
        GameEvent::DivisionRecruited => (
            "Recruited new Infantry Division".to_string(),
            Severity::Success,
        ),
        GameEvent::ResearchStarted { tech } => {
            (format!("Started researching {tech}"), Severity::Success)
        }
        GameEvent::ResearchCompleted { tech } => {
            (format!("Completed research: {tech}"), Severity::Success)
        }
        GameEvent::FactoriesGained { count } => (
            format!("Gained {count} Civilian Factories from research"),
            Severity::Success,
        ),
        GameEvent::WarDeclared { nation } => {
            (format!("War declared on {nation}!"), Severity::Danger)
        }
        GameEvent::AllianceAccepted { nation } => (
            format!("{nation} accepted your alliance offer!"),
            Severity::Success,
        ),
        GameEvent::AllianceRejected { nation } => (
            format!("{nation} rejected your alliance offer"),
            Severity::Warning,
        ),
        GameEvent::BattleVictory { nation } => (
            format!("Victory in battle against {nation}!"),
            Severity::Success,
        ),
        GameEvent::BattleDefeat { nation } => {
            (format!("Defeat in battle against {nation}"), Severity::Danger)
        }
    }
}
