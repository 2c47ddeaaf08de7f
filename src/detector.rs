//! Change detection between two snapshots of the same query.
//!
//! Only files present in both snapshots are reported. A file that appeared
//! or vanished since the previous run is not a change of a tracked file and
//! produces no record.

use crate::storage::{FileObservation, Snapshot};
use std::collections::HashMap;
use std::fmt;

/// Whether a tracked file changed between two runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeValue {
    /// Modification time differs from the previous run
    Changed = 0,
    /// Modification time is the same as in the previous run
    Unchanged = 1,
}

impl ChangeValue {
    /// Numeric value printed in the metric line.
    #[must_use]
    pub const fn as_metric(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ChangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_metric())
    }
}

/// One metric emission for a file present in both snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Metric identifier
    pub metric_id: String,
    /// Capture timestamp of the current observation
    pub timestamp: String,
    /// Object label (the file name)
    pub object: String,
    /// Changed or unchanged
    pub value: ChangeValue,
}

/// Outcome of comparing the current snapshot against the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// No previous snapshot exists for this query
    Bootstrap,
    /// Records for every file present in both snapshots, in current order
    Compared(Vec<ChangeRecord>),
}

impl Detection {
    /// Records to emit; empty for a bootstrap run.
    #[must_use]
    pub fn records(&self) -> &[ChangeRecord] {
        match self {
            Self::Bootstrap => &[],
            Self::Compared(records) => records,
        }
    }

    /// Whether this was the first run for the query.
    #[must_use]
    pub const fn is_bootstrap(&self) -> bool {
        matches!(self, Self::Bootstrap)
    }
}

/// Compare `current` against `previous`.
///
/// If `previous` lists the same file name more than once, its first
/// occurrence is used.
#[must_use]
pub fn detect(previous: Option<&Snapshot>, current: &Snapshot, metric_id: &str) -> Detection {
    let Some(previous) = previous else {
        return Detection::Bootstrap;
    };

    let mut earlier: HashMap<&str, &FileObservation> = HashMap::with_capacity(previous.len());
    for observation in previous {
        earlier.entry(observation.filename()).or_insert(observation);
    }

    let records = current
        .iter()
        .filter_map(|now| {
            let before = earlier.get(now.filename())?;
            let value = if before.modified_millis() == now.modified_millis() {
                ChangeValue::Unchanged
            } else {
                ChangeValue::Changed
            };
            Some(ChangeRecord {
                metric_id: metric_id.to_string(),
                timestamp: now.captured_at().to_string(),
                object: now.object().to_string(),
                value,
            })
        })
        .collect();

    Detection::Compared(records)
}
