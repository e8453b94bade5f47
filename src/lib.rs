//! Modern, type-safe Rust library for WebRTC playback session control.
//!
//! Vantage provides the setup and monitoring core of a playback control
//! surface: resolving which resource URL a session should connect to,
//! parsing operator-authored relay-server directives, and aggregating the
//! session's live transport statistics into display-ready metrics.
//!
//! # Features
//!
//! - **Channel resolution**: registry-backed and direct-URL adapter
//!   families, degrading gracefully to "no default"
//! - **Relay directives**: permissive parsing of compact TURN credential
//!   strings
//! - **Live stats**: per-session aggregation of candidate-pair and
//!   inbound-RTP reports with best-effort handling of partial telemetry
//! - **Clean teardown**: monitors release their subscriptions when dropped
//!
//! The media transport itself is an external collaborator; see
//! [`session::PlayerSession`] for the seam.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use vantage::sources::ChannelSource;
//! use vantage::{AdapterType, Deployment, Vantage};
//!
//! #[tokio::main]
//! async fn main() -> vantage::Result<()> {
//!     let deployment = Deployment::from_env();
//!     let params = Vantage::prepare(&deployment, AdapterType::Whpp).await?;
//!     println!("Default playback URL: {:?}", params.playback_url);
//!
//!     // The player integration pushes reports into `reports`
//!     let (reports, source) = ChannelSource::new(64);
//!     let monitor = Vantage::monitor(source);
//!
//!     let mut updates = Box::pin(monitor.updates());
//!     while let Some(metrics) = updates.next().await {
//!         println!("RTT: {:?}ms", metrics.rtt_ms);
//!     }
//!     # drop(reports);
//!     Ok(())
//! }
//! ```

// Core types and error handling
pub mod adapter;
pub mod config;
mod error;
pub mod ice;
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;

// Session setup
pub mod resolver;
pub mod session;

// Stats monitoring architecture
pub mod monitor;
pub mod source;
pub mod sources;
pub mod stats;

// Core exports
pub use adapter::{AdapterType, ResolutionFamily};
pub use config::{DEFAULT_BROADCASTER_URL, DEFAULT_WHEP_URL, Deployment};
pub use error::{PlayerError, Result};
pub use ice::{IceServerDirective, parse_directive};

// Session setup exports
pub use resolver::{ChannelRecord, ChannelResolver};
pub use session::{DEFAULT_STATS_FILTER, PlayerSession, SessionConfig, SessionParams};

// Stats exports
pub use monitor::StatsMonitor;
pub use source::ReportSource;
pub use stats::{
    CandidatePairReport, DerivedMetrics, InboundRtpReport, MediaKind, PacketLossState,
    StatsAggregator, StatsReport,
};

/// Unified entry point for session setup and monitoring.
///
/// # Examples
///
/// ## Resolve connection parameters
/// ```rust,no_run
/// use vantage::{AdapterType, Deployment, Vantage};
///
/// #[tokio::main]
/// async fn main() -> vantage::Result<()> {
///     let params = Vantage::prepare(&Deployment::from_env(), AdapterType::Whep).await?;
///     // Hand params to the player...
///     Ok(())
/// }
/// ```
///
/// ## Attach a stats monitor
/// ```rust,no_run
/// use vantage::Vantage;
/// use vantage::sources::ChannelSource;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (reports, source) = ChannelSource::new(64);
/// let monitor = Vantage::monitor(source);
/// # drop(reports);
/// # }
/// ```
pub struct Vantage;

impl Vantage {
    /// Resolve the connection parameters for a session.
    ///
    /// Runs the channel resolver and the relay-directive parser once, per
    /// the deployment settings. Registry failures degrade to
    /// `playback_url: None`; a malformed directive degrades to an empty
    /// relay list. The only error here is failing to construct the HTTP
    /// client itself.
    pub async fn prepare(deployment: &Deployment, adapter: AdapterType) -> Result<SessionParams> {
        let resolver = ChannelResolver::new(deployment)?;
        let playback_url = resolver.resolve(&adapter).await;

        Ok(SessionParams { adapter, playback_url, ice_servers: deployment.ice_servers() })
    }

    /// Attach a stats monitor to a session's report stream.
    ///
    /// Call after session creation; drop the returned handle when the
    /// session is stopped.
    pub fn monitor<S: ReportSource>(source: S) -> StatsMonitor {
        StatsMonitor::spawn(source)
    }
}
