//! Stats monitor: drives the aggregator from a report source.
//!
//! One monitor attaches to one session after creation and runs for the
//! session's lifetime. A single spawned task owns the [`ReportSource`] and
//! the [`StatsAggregator`], so reports are handled strictly in delivery
//! order and no state is shared across sessions. Consumers observe
//! [`DerivedMetrics`] snapshots through a watch channel.
//!
//! Dropping the monitor handle cancels the task, releasing the
//! subscription so no stale handler keeps mutating state after teardown.

use std::time::Duration;

use futures::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace};

use crate::source::ReportSource;
use crate::stats::{DerivedMetrics, StatsAggregator};

/// Handle to a running stats monitor.
pub struct StatsMonitor {
    /// Metrics watch receiver
    metrics: watch::Receiver<DerivedMetrics>,

    /// Cancellation token for stopping the report task
    cancel: CancellationToken,
}

impl StatsMonitor {
    /// Spawn the monitor task for the given report source.
    ///
    /// The returned handle is the only way to observe the session's derived
    /// metrics; dropping it stops the task.
    pub fn spawn<S>(source: S) -> Self
    where
        S: ReportSource,
    {
        let (metrics_tx, metrics_rx) = watch::channel(DerivedMetrics::default());
        let cancel = CancellationToken::new();
        let cancel_task = cancel.clone();

        tokio::spawn(async move {
            Self::report_task(source, metrics_tx, cancel_task).await;
        });

        Self { metrics: metrics_rx, cancel }
    }

    /// Report task - consumes the source and publishes metric snapshots
    async fn report_task<S>(
        mut source: S,
        metrics_tx: watch::Sender<DerivedMetrics>,
        cancel: CancellationToken,
    ) where
        S: ReportSource,
    {
        info!("Stats monitor task started");
        let mut aggregator = StatsAggregator::new();
        let mut report_count = 0u64;
        let mut error_count = 0u32;
        const MAX_ERRORS: u32 = 10;

        loop {
            if cancel.is_cancelled() {
                info!("Stats monitor cancelled");
                break;
            }

            // Use select to allow cancellation during source.next_report()
            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Stats monitor cancelled during read");
                    break;
                }
                result = source.next_report() => result,
            };

            match result {
                Ok(Some(report)) => {
                    report_count += 1;
                    error_count = 0; // Reset error count on success

                    trace!("Report {}: type={}", report_count, report.report_type());
                    aggregator.handle_report(&report);

                    if metrics_tx.send(aggregator.snapshot()).is_err() {
                        debug!("Metrics receiver dropped, shutting down");
                        break;
                    }
                }
                Ok(None) => {
                    info!("Report stream ended after {} reports", report_count);
                    break;
                }
                Err(e) => {
                    // Source error - don't crash the monitor on transient failures
                    error_count += 1;
                    error!("Report source error ({}/{}): {}", error_count, MAX_ERRORS, e);

                    if error_count >= MAX_ERRORS {
                        error!("Too many report source errors, shutting down");
                        break;
                    }

                    // Exponential backoff: 100ms, 200ms, 400ms, ...
                    let backoff = Duration::from_millis(50 * (1 << error_count.min(5)));
                    tokio::time::sleep(backoff).await;
                }
            }
        }

        info!("Stats monitor task ended (processed {} reports)", report_count);
    }

    /// The latest derived metrics snapshot.
    pub fn metrics(&self) -> DerivedMetrics {
        self.metrics.borrow().clone()
    }

    /// Metric updates as a stream.
    ///
    /// Yields the current snapshot immediately, then one snapshot per
    /// handled report. Slow consumers observe latest-wins semantics.
    pub fn updates(&self) -> impl Stream<Item = DerivedMetrics> + 'static {
        WatchStream::new(self.metrics.clone())
    }

    /// Stop the monitor task without dropping the handle.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for StatsMonitor {
    fn drop(&mut self) {
        debug!("Dropping stats monitor");
        // Cancel the task on drop so no stale handler outlives the session
        self.cancel.cancel();
    }
}
