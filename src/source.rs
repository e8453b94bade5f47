//! Report source trait for session stats streams

use crate::Result;
use crate::stats::StatsReport;

/// Trait for sources of session stats reports
///
/// Sources abstract over how reports reach the monitor (a live player
/// integration pushing into a channel, a scripted replay, a test fixture)
/// and handle their own timing internally. Delivery is sequential by
/// contract: `next_report` is polled by a single consumer, so handlers
/// downstream never observe overlapping invocations for one session.
#[async_trait::async_trait]
pub trait ReportSource: Send + 'static {
    /// Get the next stats report
    ///
    /// Returns:
    /// - `Ok(Some(report))` - New report available
    /// - `Ok(None)` - Stream ended (session unloaded, normal termination)
    /// - `Err(e)` - Error occurred
    async fn next_report(&mut self) -> Result<Option<StatsReport>>;
}
