use anyhow::Result;

use crate::genet_objects::{event_log::EventLog, process_net::ProcessNet};

/// The conformance half of a fitness evaluation. No implementation ships with
/// this crate; the GA driver injects one. Evaluations run on a thread pool, so
/// implementations must be shareable.
pub trait TraceAligner: Send + Sync {
    /// Aligns every trace of the log on the net. An `Err` signals that the net
    /// could not be aligned at all, for instance because it is unsound for the
    /// engine; the caller maps this to a sentinel score.
    fn align_log(&self, net: &ProcessNet, log: &EventLog) -> Result<AlignmentSummary>;
}

pub struct AlignmentSummary {
    /// Average of the per-trace alignment fitness values, in [0, 1].
    pub average_trace_fitness: f64,
}
