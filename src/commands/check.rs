use crate::MonitorContext;
use crate::cli::MonitorRequest;
use crate::detector::{self, Detection};
use crate::error::Result;
use crate::output::MetricEmitter;
use crate::pattern::FilenamePattern;
use crate::scanner::DirectorySnapshotter;
use crate::storage::{SnapshotIdentity, SnapshotStore};
use anyhow::Context;
use std::io::Write;
use tracing::{Level, debug, info, span};

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// First run for this query; baseline stored, nothing emitted
    Bootstrap,
    /// Metric lines written for files present in both runs
    Reported {
        /// Number of lines written
        records: usize,
    },
}

/// Run the monitor once for `request`, writing metric lines to `out`.
///
/// The current snapshot is persisted before anything is written, so a
/// failure while emitting never leaves the previous state behind.
///
/// # Errors
///
/// Returns an error if:
/// - The filename pattern is invalid
/// - The directory cannot be listed
/// - The state directory cannot be created or the state file written
/// - Writing to `out` fails
pub fn execute<W: Write>(
    ctx: &MonitorContext,
    request: &MonitorRequest,
    out: &mut W,
) -> Result<RunOutcome> {
    let _span = span!(
        Level::INFO,
        "check",
        directory = %request.directory.display(),
        pattern = %request.pattern
    )
    .entered();
    debug!(metric_enabled = request.metric_enabled, "starting run");

    let pattern = FilenamePattern::new(&request.pattern)?;
    let current = DirectorySnapshotter::new(pattern).capture(&request.directory)?;

    let identity = SnapshotIdentity::new(&request.directory, &request.pattern);
    let store = SnapshotStore::new(ctx.state_dir.clone(), &ctx.config.state);
    let previous = store.load(&identity);

    let detection = detector::detect(previous.as_ref(), &current, &ctx.config.metric.id);

    store.save(&identity, &current)?;

    match detection {
        Detection::Bootstrap => {
            info!(files = current.len(), "stored baseline snapshot");
            Ok(RunOutcome::Bootstrap)
        }
        Detection::Compared(records) => {
            MetricEmitter::new(ctx.config.metric.id.as_str())
                .emit(out, &records)
                .context("Failed to write metrics")?;
            info!(records = records.len(), "emitted metrics");
            Ok(RunOutcome::Reported {
                records: records.len(),
            })
        }
    }
}
