//! Playback URL resolution against the channel registry.
//!
//! Resolution is a one-shot step at session setup. Registry-backed adapter
//! families ask the broadcaster registry for its live channels and take the
//! first entry as the default; direct-URL families use the deployment's
//! static endpoint without touching the network. Registry failures are
//! never fatal: an unreachable or empty registry resolves to "no default
//! URL" and the caller must supply one.

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::adapter::{AdapterType, ResolutionFamily};
use crate::config::Deployment;
use crate::{PlayerError, Result};

/// One live channel known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ChannelRecord {
    /// Playback resource URL for the channel.
    pub resource: String,
}

/// Resolves the playback URL for an adapter type.
pub struct ChannelResolver {
    client: Client,
    registry_url: String,
    direct_url: String,
}

impl ChannelResolver {
    /// Build a resolver from deployment settings.
    ///
    /// The HTTP client carries the deployment's lookup timeout so a stalled
    /// registry cannot block session setup indefinitely.
    pub fn new(deployment: &Deployment) -> Result<Self> {
        let client = Client::builder().timeout(deployment.http_timeout()).build().map_err(
            |err| PlayerError::registry_failed(deployment.broadcaster_url.clone(), Box::new(err)),
        )?;

        Ok(Self {
            client,
            registry_url: deployment.broadcaster_url.clone(),
            direct_url: deployment.whep_url.clone(),
        })
    }

    /// Resolve the default playback URL for `adapter`.
    ///
    /// Returns `None` when no default exists: caller-supplied adapter
    /// families, an empty or unreachable registry, or an unparseable
    /// endpoint string. The caller treats `None` as "user must supply a
    /// URL".
    pub async fn resolve(&self, adapter: &AdapterType) -> Option<Url> {
        match adapter.family() {
            ResolutionFamily::RegistryBacked => {
                let channels = match self.fetch_channels().await {
                    Ok(channels) => channels,
                    Err(err) => {
                        warn!("Channel registry lookup failed, no default URL: {err}");
                        Vec::new()
                    }
                };

                let first = channels.into_iter().next()?;
                debug!("Registry resolved default channel: {}", first.resource);
                parse_endpoint(&first.resource, "registry channel resource")
            }
            ResolutionFamily::DirectUrl => parse_endpoint(&self.direct_url, "direct endpoint"),
            ResolutionFamily::CallerSupplied => {
                debug!("Adapter '{adapter}' has no default URL");
                None
            }
        }
    }

    /// Fetch the registry's channel list.
    ///
    /// A non-2xx response is "zero channels", not an error; only transport
    /// and decode failures surface as `Err` (and the caller degrades those
    /// to zero channels as well).
    async fn fetch_channels(&self) -> Result<Vec<ChannelRecord>> {
        let url = format!("{}/channel", self.registry_url.trim_end_matches('/'));
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            debug!("Channel registry returned {}, treating as no channels", response.status());
            return Ok(Vec::new());
        }

        let channels = response.json::<Vec<ChannelRecord>>().await?;
        debug!("Channel registry returned {} channel(s)", channels.len());
        Ok(channels)
    }
}

fn parse_endpoint(raw: &str, what: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(err) => {
            warn!("Ignoring unparseable {what} '{raw}': {err}");
            None
        }
    }
}
