//! Transport statistics report payloads.
//!
//! The session multiplexes periodic reports of several types onto one
//! emission channel; the two variants below are the ones the monitor
//! derives display metrics from. Wire shapes follow the WebRTC stats
//! dictionaries (camelCase fields, kebab-case type tags), and every field
//! the transport may omit is optional; a partial report is still a report.

use serde::{Deserialize, Serialize};

/// Media kind carried by an inbound RTP report.
///
/// Only `video` and `audio` participate in packet-loss tracking; anything
/// else deserializes to [`MediaKind::Unknown`] and is ignored by the
/// aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Unknown => "unknown",
        }
    }
}

/// Candidate-pair report: connectivity metrics for one local/remote path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePairReport {
    /// Whether this pair is the currently active path. Non-nominated pairs
    /// are transport-internal probing noise.
    #[serde(default)]
    pub nominated: bool,

    /// Round-trip time in seconds.
    pub current_round_trip_time: Option<f64>,

    /// Estimated available incoming bitrate in bits per second.
    pub available_incoming_bitrate: Option<f64>,
}

/// Inbound RTP report: receive-side counters for one media stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRtpReport {
    #[serde(default)]
    pub kind: MediaKind,

    /// Cumulative lost-packet count since stream start.
    pub packets_lost: Option<u64>,
}

/// A stats report, tagged by report type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StatsReport {
    #[serde(rename = "candidate-pair")]
    CandidatePair(CandidatePairReport),

    #[serde(rename = "inbound-rtp")]
    InboundRtp(InboundRtpReport),
}

impl StatsReport {
    /// The report-type tag, as used on the wire and in filter patterns.
    pub fn report_type(&self) -> &'static str {
        match self {
            StatsReport::CandidatePair(_) => "candidate-pair",
            StatsReport::InboundRtp(_) => "inbound-rtp",
        }
    }

    /// The session event name this report is delivered under.
    pub fn event_name(&self) -> &'static str {
        match self {
            StatsReport::CandidatePair(_) => "stats:candidate-pair",
            StatsReport::InboundRtp(_) => "stats:inbound-rtp",
        }
    }
}
