//! Transition logging.
//!
//! Provides immutable tracking of applied machine transitions over time,
//! following functional programming principles. Rejected commands do not
//! appear here - only transitions the machine actually applied.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// Records are immutable values representing a move from one state to
/// another at a specific point in time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of applied transitions.
///
/// The log is immutable - `record` returns a new log with the transition
/// added, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use vendo::core::{State, TransitionLog, TransitionRecord};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: Door::Open,
///     to: Door::Closed,
///     timestamp: Utc::now(),
/// });
///
/// let path = log.path();
/// assert_eq!(path, vec![&Door::Open, &Door::Closed]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    records: Vec<TransitionRecord<S>>,
}

impl<S: State> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionLog<S> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    ///
    /// This is a pure function - it does not mutate the existing log
    /// but returns a new one with the record added.
    pub fn record(&self, record: TransitionRecord<S>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the state before the first
    /// transition, then the `to` state of each record. Empty when nothing
    /// has transitioned yet.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }

    /// Number of applied transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no transition has been applied yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
