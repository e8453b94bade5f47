//! Test utilities for building report fixtures
//!
//! This module provides report builders used by unit tests, the integration
//! suite, and the benchmark harness.

#![cfg(any(test, feature = "benchmark"))]

use crate::stats::{CandidatePairReport, InboundRtpReport, MediaKind, StatsReport};

/// Build a candidate-pair report.
pub fn candidate_pair(
    nominated: bool,
    rtt_seconds: Option<f64>,
    bitrate_bps: Option<f64>,
) -> StatsReport {
    StatsReport::CandidatePair(CandidatePairReport {
        nominated,
        current_round_trip_time: rtt_seconds,
        available_incoming_bitrate: bitrate_bps,
    })
}

/// Build an inbound RTP report.
pub fn inbound_rtp(kind: MediaKind, packets_lost: Option<u64>) -> StatsReport {
    StatsReport::InboundRtp(InboundRtpReport { kind, packets_lost })
}

/// A plausible steady-state session script of `len` reports: nominated
/// candidate pairs interleaved with slowly-accumulating video/audio loss
/// counters, plus the occasional non-nominated pair and unknown-kind
/// report the aggregator must ignore.
pub fn steady_session_script(len: usize) -> Vec<StatsReport> {
    (0..len)
        .map(|i| match i % 5 {
            0 => candidate_pair(true, Some(0.030 + (i % 7) as f64 * 0.001), Some(2_500_000.0)),
            1 => inbound_rtp(MediaKind::Video, Some((i / 5) as u64)),
            2 => candidate_pair(false, Some(0.9), None),
            3 => inbound_rtp(MediaKind::Audio, Some((i / 10) as u64)),
            _ => inbound_rtp(MediaKind::Unknown, Some(999)),
        })
        .collect()
}
