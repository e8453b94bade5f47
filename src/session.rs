//! Session collaborator contract and configuration bundle.
//!
//! The player session itself (media transport, peer-connection
//! negotiation, rendering) lives outside this crate. What lives here is
//! the seam: the configuration bundle a session is created from,
//! the parameters session setup produces, and the load/unload surface
//! whose failures are the only ones that propagate to the caller.

use url::Url;

use crate::Result;
use crate::adapter::AdapterType;
use crate::ice::IceServerDirective;

/// Default report-type filter: only the two report types the monitor
/// derives metrics from are delivered.
pub const DEFAULT_STATS_FILTER: &str = "^candidate-pair|^inbound-rtp";

/// Configuration bundle recognized by the session collaborator.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Transport adapter used to establish the peer connection.
    pub adapter: AdapterType,

    /// Relay servers to offer during connectivity establishment. Empty
    /// means "no custom relay servers", not a failure.
    pub ice_servers: Vec<IceServerDirective>,

    /// Verbose session-side logging.
    pub debug_logging: bool,

    /// Optional preroll played before the live resource.
    pub preroll_url: Option<Url>,

    /// Regular-expression-like filter limiting which report types the
    /// session delivers.
    pub stats_filter_pattern: String,
}

impl SessionConfig {
    /// A bundle for `adapter` with the default stats filter and no extras.
    pub fn new(adapter: AdapterType) -> Self {
        Self {
            adapter,
            ice_servers: Vec::new(),
            debug_logging: false,
            preroll_url: None,
            stats_filter_pattern: DEFAULT_STATS_FILTER.to_string(),
        }
    }

    pub fn with_ice_servers(mut self, ice_servers: Vec<IceServerDirective>) -> Self {
        self.ice_servers = ice_servers;
        self
    }

    pub fn with_preroll(mut self, preroll_url: Url) -> Self {
        self.preroll_url = Some(preroll_url);
        self
    }

    pub fn with_debug_logging(mut self, debug_logging: bool) -> Self {
        self.debug_logging = debug_logging;
        self
    }
}

/// Connection parameters produced by session setup.
///
/// The resolver and directive parser run once and their outputs land here,
/// ready to hand to the player. `playback_url` is `None` when no default
/// exists for the adapter and the user must supply one.
#[derive(Debug, Clone)]
pub struct SessionParams {
    pub adapter: AdapterType,
    pub playback_url: Option<Url>,
    pub ice_servers: Vec<IceServerDirective>,
}

impl SessionParams {
    /// Build the session configuration bundle from these parameters.
    pub fn into_config(self) -> SessionConfig {
        SessionConfig::new(self.adapter).with_ice_servers(self.ice_servers)
    }
}

/// Contract of the external player session.
///
/// Load/unload are the only operations in this crate whose failures must
/// propagate to the caller; everything upstream degrades instead.
#[async_trait::async_trait]
pub trait PlayerSession: Send + 'static {
    /// Start playback of `url`.
    async fn load(&mut self, url: &Url) -> Result<()>;

    /// Stop playback and release transport resources.
    ///
    /// Whoever stops the session is also responsible for dropping its
    /// stats monitor so no stale handler outlives the session.
    async fn unload(&mut self) -> Result<()>;
}
