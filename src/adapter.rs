//! Transport adapter tags and their resolution behavior.
//!
//! An adapter identifies the signaling strategy used to establish the peer
//! connection (WHPP, broadcaster-orchestrated WebRTC, WHEP pull). The set of
//! adapters is fixed by deployment policy, so dispatch is a closed enum with
//! an explicit mapping to a [`ResolutionFamily`] rather than string
//! comparisons scattered through the setup path.

use serde::{Deserialize, Serialize};

/// How a playback URL is determined for an adapter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionFamily {
    /// Look up live channels in the broadcaster registry; first entry wins.
    RegistryBacked,

    /// Use the deployment's preconfigured static endpoint, no network call.
    DirectUrl,

    /// No default; the caller supplies the URL.
    CallerSupplied,
}

/// Transport adapter tag.
///
/// Tags are opaque strings on the wire (query parameters, adapter registry
/// entries); unknown tags round-trip through [`AdapterType::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AdapterType {
    /// WHPP broadcaster adapter (`se.eyevinn.whpp`).
    Whpp,

    /// Broadcaster-orchestrated peer-signaling adapter (`se.eyevinn.webrtc`).
    Webrtc,

    /// WHEP pull adapter (`whep`).
    Whep,

    /// Any other tag; resolution is left to the caller.
    Custom(String),
}

impl AdapterType {
    /// The adapter set offered by the reference deployment.
    ///
    /// Used to drive presentation (adapter pickers); `Custom` tags are by
    /// definition not listed.
    pub fn available() -> Vec<AdapterType> {
        vec![AdapterType::Whpp, AdapterType::Webrtc, AdapterType::Whep]
    }

    /// The resolution behavior family for this adapter.
    pub fn family(&self) -> ResolutionFamily {
        match self {
            AdapterType::Whpp | AdapterType::Webrtc => ResolutionFamily::RegistryBacked,
            AdapterType::Whep => ResolutionFamily::DirectUrl,
            AdapterType::Custom(_) => ResolutionFamily::CallerSupplied,
        }
    }

    /// The wire tag for this adapter.
    pub fn tag(&self) -> &str {
        match self {
            AdapterType::Whpp => "se.eyevinn.whpp",
            AdapterType::Webrtc => "se.eyevinn.webrtc",
            AdapterType::Whep => "whep",
            AdapterType::Custom(tag) => tag,
        }
    }
}

impl std::fmt::Display for AdapterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for AdapterType {
    type Err = std::convert::Infallible;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(AdapterType::from(tag.to_string()))
    }
}

impl From<String> for AdapterType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "se.eyevinn.whpp" => AdapterType::Whpp,
            "se.eyevinn.webrtc" => AdapterType::Webrtc,
            "whep" => AdapterType::Whep,
            _ => AdapterType::Custom(tag),
        }
    }
}

impl From<AdapterType> for String {
    fn from(adapter: AdapterType) -> Self {
        adapter.tag().to_string()
    }
}
