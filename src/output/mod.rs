//! Metric line output.
//!
//! Each change record becomes one pipe-delimited line on standard output:
//!
//! ```text
//! 1470:File Status:9|0|a.txt|
//! 1470:File Status:9|1|b.txt|
//! ```

use crate::detector::ChangeRecord;
use std::io::{self, Write};

/// Writes change records as metric lines.
#[derive(Debug, Clone)]
pub struct MetricEmitter {
    /// Identifier printed as the first field of every line
    metric_id: String,
}

impl MetricEmitter {
    /// Create an emitter for `metric_id`.
    #[must_use]
    pub fn new(metric_id: impl Into<String>) -> Self {
        Self {
            metric_id: metric_id.into(),
        }
    }

    /// Identifier printed with every line.
    #[must_use]
    pub fn metric_id(&self) -> &str {
        &self.metric_id
    }

    /// Format a single record.
    #[must_use]
    pub fn format_line(&self, record: &ChangeRecord) -> String {
        format!("{}|{}|{}|", self.metric_id, record.value, record.object)
    }

    /// Write every record in order and flush.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails
    pub fn emit<W: Write>(&self, out: &mut W, records: &[ChangeRecord]) -> io::Result<()> {
        for record in records {
            writeln!(out, "{}", self.format_line(record))?;
        }
        out.flush()
    }
}
