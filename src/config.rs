//! Deployment configuration surface.
//!
//! The deployment hands the player three plain strings: the broadcaster
//! registry base URL, the static WHEP endpoint, and an optional relay-server
//! directive. None of them are validated here beyond being present; the
//! resolver and directive parser apply their own rules at use time.
//!
//! Sources, in the order a deployment typically layers them:
//! - [`Deployment::default`]: the reference lab endpoints
//! - [`Deployment::from_env`]: `BROADCASTER_URL`, `WHEP_URL`, `ICE_SERVERS`
//! - [`Deployment::from_yaml`]: an optional YAML document, partial keys
//!   falling back to defaults

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::ice::{IceServerDirective, parse_directive};

/// Broadcaster channel registry of the reference deployment.
pub const DEFAULT_BROADCASTER_URL: &str =
    "https://broadcaster.lab.sto.eyevinn.technology:8443/broadcaster";

/// Static WHEP endpoint of the reference deployment.
pub const DEFAULT_WHEP_URL: &str = "https://srtwhep.lab.sto.eyevinn.technology:8443/channel";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

/// Deployment-level settings consumed at session setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Deployment {
    /// Base URL of the channel registry service.
    pub broadcaster_url: String,

    /// Preconfigured endpoint for direct-URL adapters.
    pub whep_url: String,

    /// Relay-server directive string, if the deployment uses TURN relays.
    pub ice_directive: Option<String>,

    /// Timeout applied to registry lookups.
    pub http_timeout_secs: u64,
}

impl Default for Deployment {
    fn default() -> Self {
        Self {
            broadcaster_url: DEFAULT_BROADCASTER_URL.to_string(),
            whep_url: DEFAULT_WHEP_URL.to_string(),
            ice_directive: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Deployment {
    /// Build settings from the process environment, falling back to the
    /// reference deployment for unset variables.
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    fn from_env_with(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            broadcaster_url: get("BROADCASTER_URL").unwrap_or(defaults.broadcaster_url),
            whep_url: get("WHEP_URL").unwrap_or(defaults.whep_url),
            ice_directive: get("ICE_SERVERS"),
            http_timeout_secs: defaults.http_timeout_secs,
        }
    }

    /// Parse settings from a YAML document. Missing keys take their default
    /// values; unknown keys are rejected.
    pub fn from_yaml(document: &str) -> Result<Self> {
        let deployment = serde_yaml_ng::from_str(document)?;
        Ok(deployment)
    }

    /// The relay servers parsed from the directive string.
    ///
    /// An unset or fully malformed directive yields an empty list, meaning
    /// "no custom relay servers".
    pub fn ice_servers(&self) -> Vec<IceServerDirective> {
        parse_directive(self.ice_directive.as_deref().unwrap_or(""))
    }

    /// Timeout for the registry lookup HTTP call.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
