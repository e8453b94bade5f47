//! Channel-backed report source for live player integrations

use tokio::sync::mpsc;
use tracing::debug;

use crate::Result;
use crate::source::ReportSource;
use crate::stats::StatsReport;

/// Report source fed through an mpsc channel.
///
/// The player integration holds the [`mpsc::Sender`] and pushes each report
/// as the transport emits it; the monitor consumes the receiving half. When
/// every sender is dropped (session unloaded), the source reports end of
/// stream.
pub struct ChannelSource {
    rx: mpsc::Receiver<StatsReport>,
}

impl ChannelSource {
    /// Create a source and the sender that feeds it.
    ///
    /// `capacity` bounds the in-flight backlog; a full channel applies
    /// backpressure to the producer rather than buffering without limit.
    pub fn new(capacity: usize) -> (mpsc::Sender<StatsReport>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self { rx })
    }

    /// Wrap an existing receiver.
    pub fn from_receiver(rx: mpsc::Receiver<StatsReport>) -> Self {
        Self { rx }
    }
}

#[async_trait::async_trait]
impl ReportSource for ChannelSource {
    async fn next_report(&mut self) -> Result<Option<StatsReport>> {
        match self.rx.recv().await {
            Some(report) => Ok(Some(report)),
            None => {
                debug!("Report channel closed, ending stream");
                Ok(None)
            }
        }
    }
}
