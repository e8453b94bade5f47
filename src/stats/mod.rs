//! Live transport statistics: report payloads and metric derivation.
//!
//! The session collaborator emits periodic [`StatsReport`] values; one
//! [`StatsAggregator`] per session folds them into the latest
//! [`DerivedMetrics`] snapshot. See [`crate::monitor`] for the task that
//! drives the aggregator from a report source.

mod aggregator;
mod report;

pub use aggregator::{DerivedMetrics, PacketLossState, StatsAggregator};
pub use report::{CandidatePairReport, InboundRtpReport, MediaKind, StatsReport};
