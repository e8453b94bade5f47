//! Derivation of display metrics from the report stream.
//!
//! One [`StatsAggregator`] exists per session. It is purely reactive: the
//! monitor task hands it each report as it arrives, in delivery order, and
//! it folds the report into the latest [`DerivedMetrics`] snapshot. There
//! is no polling loop and no internal queueing; emission cadence belongs
//! entirely to the transport.
//!
//! The update policy is best-effort display: a report missing an expected
//! field skips that field's update and leaves the prior value intact.
//! Partial telemetry is far more useful than a crashed monitor.

use serde::Serialize;
use tracing::trace;

use super::report::{CandidatePairReport, InboundRtpReport, MediaKind, StatsReport};

/// Last-seen cumulative packet loss per media kind.
///
/// Exactly the `video` and `audio` entries exist for the session's
/// lifetime, both starting at zero; reports for other kinds never insert
/// anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PacketLossState {
    pub video: u64,
    pub audio: u64,
}

impl PacketLossState {
    /// The stored count for `kind`, or `None` for kinds that are not
    /// tracked.
    pub fn get(&self, kind: MediaKind) -> Option<u64> {
        match kind {
            MediaKind::Video => Some(self.video),
            MediaKind::Audio => Some(self.audio),
            MediaKind::Unknown => None,
        }
    }

    /// Store the latest cumulative count. Returns false for untracked
    /// kinds, which leave the state untouched.
    fn record(&mut self, kind: MediaKind, packets_lost: u64) -> bool {
        match kind {
            MediaKind::Video => self.video = packets_lost,
            MediaKind::Audio => self.audio = packets_lost,
            MediaKind::Unknown => return false,
        }
        true
    }
}

/// Presentation-ready metrics, recomputed on each relevant report.
///
/// `rtt_ms` and `incoming_bitrate_kbps` stay `None` until the first
/// nominated candidate-pair report carrying the respective field arrives.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// Round-trip time of the active candidate pair, in milliseconds.
    pub rtt_ms: Option<f64>,

    /// Available incoming bitrate of the active pair, in kbit/s.
    pub incoming_bitrate_kbps: Option<u64>,

    /// Cumulative packet loss per media kind.
    pub packets_lost: PacketLossState,
}

/// Folds the session's report stream into the latest [`DerivedMetrics`].
#[derive(Debug, Default)]
pub struct StatsAggregator {
    metrics: DerivedMetrics,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demultiplex a report by variant and apply it.
    pub fn handle_report(&mut self, report: &StatsReport) {
        match report {
            StatsReport::CandidatePair(pair) => self.handle_candidate_pair(pair),
            StatsReport::InboundRtp(rtp) => self.handle_inbound_rtp(rtp),
        }
    }

    /// Apply a candidate-pair report.
    ///
    /// Non-nominated pairs are ignored entirely; only the active path's
    /// numbers may overwrite the displayed metrics. A present RTT updates
    /// `rtt_ms`; a present bitrate updates `incoming_bitrate_kbps`; absent
    /// fields leave prior values unchanged (absence is not zero).
    pub fn handle_candidate_pair(&mut self, report: &CandidatePairReport) {
        if !report.nominated {
            trace!("Ignoring non-nominated candidate pair");
            return;
        }

        if let Some(rtt_seconds) = report.current_round_trip_time {
            self.metrics.rtt_ms = Some(rtt_seconds * 1000.0);
        }
        if let Some(bits_per_second) = report.available_incoming_bitrate {
            self.metrics.incoming_bitrate_kbps = Some((bits_per_second / 1000.0).round() as u64);
        }
    }

    /// Apply an inbound RTP report.
    ///
    /// Stores the latest cumulative `packetsLost` for `video`/`audio`;
    /// other kinds and reports without the counter are ignored. The value
    /// is stored as reported: the source defines it as cumulative, and a
    /// decrease after a stream restart is displayed rather than clamped.
    pub fn handle_inbound_rtp(&mut self, report: &InboundRtpReport) {
        let Some(packets_lost) = report.packets_lost else {
            trace!("Inbound RTP report without packetsLost, skipping");
            return;
        };

        if !self.metrics.packets_lost.record(report.kind, packets_lost) {
            trace!("Ignoring inbound RTP report for kind '{}'", report.kind.as_str());
        }
    }

    /// The latest derived metrics.
    pub fn metrics(&self) -> &DerivedMetrics {
        &self.metrics
    }

    /// An owned copy of the latest derived metrics.
    pub fn snapshot(&self) -> DerivedMetrics {
        self.metrics.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pair(nominated: bool, rtt: Option<f64>, bitrate: Option<f64>) -> CandidatePairReport {
        CandidatePairReport {
            nominated,
            current_round_trip_time: rtt,
            available_incoming_bitrate: bitrate,
        }
    }

    fn rtp(kind: MediaKind, packets_lost: Option<u64>) -> InboundRtpReport {
        InboundRtpReport { kind, packets_lost }
    }

    #[test]
    fn nominated_pair_updates_rtt_and_bitrate() {
        let mut aggregator = StatsAggregator::new();
        aggregator.handle_candidate_pair(&pair(true, Some(0.042), Some(2_000_000.0)));

        assert_eq!(aggregator.metrics().rtt_ms, Some(42.0));
        assert_eq!(aggregator.metrics().incoming_bitrate_kbps, Some(2000));
    }

    #[test]
    fn non_nominated_pair_changes_nothing() {
        let mut aggregator = StatsAggregator::new();
        aggregator.handle_candidate_pair(&pair(true, Some(0.042), Some(2_000_000.0)));
        aggregator.handle_candidate_pair(&pair(false, Some(0.9), Some(1.0)));

        assert_eq!(aggregator.metrics().rtt_ms, Some(42.0));
        assert_eq!(aggregator.metrics().incoming_bitrate_kbps, Some(2000));
    }

    #[test]
    fn absent_bitrate_retains_previous_value() {
        let mut aggregator = StatsAggregator::new();
        aggregator.handle_candidate_pair(&pair(true, Some(0.042), Some(2_000_000.0)));
        aggregator.handle_candidate_pair(&pair(true, Some(0.01), None));

        assert_eq!(aggregator.metrics().rtt_ms, Some(10.0));
        assert_eq!(aggregator.metrics().incoming_bitrate_kbps, Some(2000));
    }

    #[test]
    fn absent_rtt_retains_previous_value() {
        let mut aggregator = StatsAggregator::new();
        aggregator.handle_candidate_pair(&pair(true, Some(0.042), None));
        aggregator.handle_candidate_pair(&pair(true, None, Some(500_000.0)));

        assert_eq!(aggregator.metrics().rtt_ms, Some(42.0));
        assert_eq!(aggregator.metrics().incoming_bitrate_kbps, Some(500));
    }

    #[test]
    fn packet_loss_tracks_latest_value_per_kind() {
        let mut aggregator = StatsAggregator::new();
        aggregator.handle_inbound_rtp(&rtp(MediaKind::Video, Some(3)));
        aggregator.handle_inbound_rtp(&rtp(MediaKind::Audio, Some(1)));
        aggregator.handle_inbound_rtp(&rtp(MediaKind::Video, Some(5)));

        assert_eq!(aggregator.metrics().packets_lost, PacketLossState { video: 5, audio: 1 });

        // Unrecognized kinds are ignored, never inserted
        aggregator.handle_inbound_rtp(&rtp(MediaKind::Unknown, Some(99)));
        assert_eq!(aggregator.metrics().packets_lost, PacketLossState { video: 5, audio: 1 });
    }

    #[test]
    fn packet_loss_starts_at_zero_for_both_kinds() {
        let aggregator = StatsAggregator::new();
        assert_eq!(aggregator.metrics().packets_lost.get(MediaKind::Video), Some(0));
        assert_eq!(aggregator.metrics().packets_lost.get(MediaKind::Audio), Some(0));
        assert_eq!(aggregator.metrics().packets_lost.get(MediaKind::Unknown), None);
    }

    #[test]
    fn missing_counter_skips_the_update() {
        let mut aggregator = StatsAggregator::new();
        aggregator.handle_inbound_rtp(&rtp(MediaKind::Video, Some(4)));
        aggregator.handle_inbound_rtp(&rtp(MediaKind::Video, None));

        assert_eq!(aggregator.metrics().packets_lost.video, 4);
    }

    #[test]
    fn decreasing_counter_is_stored_as_reported() {
        let mut aggregator = StatsAggregator::new();
        aggregator.handle_inbound_rtp(&rtp(MediaKind::Audio, Some(10)));
        aggregator.handle_inbound_rtp(&rtp(MediaKind::Audio, Some(2)));

        assert_eq!(aggregator.metrics().packets_lost.audio, 2);
    }

    // Property test strategies
    fn arb_report() -> impl Strategy<Value = StatsReport> {
        prop_oneof![
            (any::<bool>(), proptest::option::of(0.0f64..2.0), proptest::option::of(0.0f64..1e8))
                .prop_map(|(nominated, rtt, bitrate)| {
                    StatsReport::CandidatePair(CandidatePairReport {
                        nominated,
                        current_round_trip_time: rtt,
                        available_incoming_bitrate: bitrate,
                    })
                }),
            (
                prop::sample::select(vec![MediaKind::Video, MediaKind::Audio, MediaKind::Unknown]),
                proptest::option::of(any::<u64>())
            )
                .prop_map(|(kind, packets_lost)| {
                    StatsReport::InboundRtp(InboundRtpReport { kind, packets_lost })
                }),
        ]
    }

    proptest! {
        #[test]
        fn aggregation_matches_a_sequential_fold(reports in prop::collection::vec(arb_report(), 0..64)) {
            let mut aggregator = StatsAggregator::new();
            for report in &reports {
                aggregator.handle_report(report);
            }

            // Reference fold: last-seen semantics per field
            let mut expected = DerivedMetrics::default();
            for report in &reports {
                match report {
                    StatsReport::CandidatePair(pair) if pair.nominated => {
                        if let Some(rtt) = pair.current_round_trip_time {
                            expected.rtt_ms = Some(rtt * 1000.0);
                        }
                        if let Some(bps) = pair.available_incoming_bitrate {
                            expected.incoming_bitrate_kbps = Some((bps / 1000.0).round() as u64);
                        }
                    }
                    StatsReport::CandidatePair(_) => {}
                    StatsReport::InboundRtp(rtp) => {
                        if let Some(lost) = rtp.packets_lost {
                            match rtp.kind {
                                MediaKind::Video => expected.packets_lost.video = lost,
                                MediaKind::Audio => expected.packets_lost.audio = lost,
                                MediaKind::Unknown => {}
                            }
                        }
                    }
                }
            }

            prop_assert_eq!(aggregator.metrics(), &expected);
        }

        #[test]
        fn non_nominated_pairs_never_touch_metrics(
            rtt in 0.0f64..2.0,
            bitrate in 0.0f64..1e8,
        ) {
            let mut aggregator = StatsAggregator::new();
            aggregator.handle_candidate_pair(&CandidatePairReport {
                nominated: false,
                current_round_trip_time: Some(rtt),
                available_incoming_bitrate: Some(bitrate),
            });

            prop_assert_eq!(aggregator.metrics(), &DerivedMetrics::default());
        }
    }
}
