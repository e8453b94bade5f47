//! Scripted report source with optional pacing

use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::{Interval, interval};
use tracing::debug;

use crate::Result;
use crate::source::ReportSource;
use crate::stats::StatsReport;

/// Report source that replays a fixed sequence.
///
/// Without a cadence the script drains as fast as the consumer polls,
/// which is what unit tests and benches want. With a cadence each report
/// is released on an interval tick, approximating a live transport's
/// periodic emission.
pub struct ScriptedSource {
    reports: VecDeque<StatsReport>,
    cadence: Option<Interval>,
}

impl ScriptedSource {
    /// Replay `reports` in order, as fast as they are polled.
    pub fn new(reports: impl IntoIterator<Item = StatsReport>) -> Self {
        Self { reports: reports.into_iter().collect(), cadence: None }
    }

    /// Replay `reports` in order, one per `period` tick.
    pub fn with_cadence(reports: impl IntoIterator<Item = StatsReport>, period: Duration) -> Self {
        Self { reports: reports.into_iter().collect(), cadence: Some(interval(period)) }
    }

    /// Reports remaining in the script.
    pub fn remaining(&self) -> usize {
        self.reports.len()
    }
}

#[async_trait::async_trait]
impl ReportSource for ScriptedSource {
    async fn next_report(&mut self) -> Result<Option<StatsReport>> {
        if self.reports.is_empty() {
            debug!("Script exhausted, ending stream");
            return Ok(None);
        }

        if let Some(cadence) = self.cadence.as_mut() {
            cadence.tick().await;
        }

        Ok(self.reports.pop_front())
    }
}
