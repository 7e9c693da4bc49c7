// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsers for BrewOS telemetry messages.
//!
//! The firmware publishes four inbound streams per machine: `status` (full
//! machine state), `power` (energy-meter readings), `statistics` (shot
//! counters) and `availability` (the `"online"`/`"offline"` liveness
//! sentinel, also used as the broker last-will). The first three carry JSON
//! bodies decoded through an explicit schema; availability is a raw byte
//! comparison and never fails.
//!
//! Each decoder yields a [`StateUpdate`] carrying exactly the snapshot
//! fields its stream owns. The static [`STREAMS`] table describes all four
//! streams and drives subscription and dispatch in the coordinator.
//!
//! # Examples
//!
//! ```
//! use brewlink::telemetry::{self, Stream};
//!
//! let update = telemetry::decode(Stream::Status, br#"{"state":"ready"}"#).unwrap();
//! assert_eq!(update.machine_state.as_deref(), Some("ready"));
//! ```

use std::fmt;

use crate::error::DecodeError;
use crate::state::StateUpdate;

mod power;
mod statistics;
mod status;

pub use power::PowerPayload;
pub use statistics::StatisticsPayload;
pub use status::StatusPayload;

/// The inbound telemetry streams a machine publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Full machine state.
    Status,
    /// Energy-meter readings.
    Power,
    /// Shot and energy counters.
    Statistics,
    /// Liveness sentinel.
    Availability,
}

impl Stream {
    /// Returns the topic suffix the stream is published under.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Power => "power",
            Self::Statistics => "statistics",
            Self::Availability => "availability",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Static description of one telemetry stream.
pub struct StreamDescriptor {
    /// The stream this entry describes.
    pub stream: Stream,
    /// Topic suffix the firmware publishes under.
    pub suffix: &'static str,
    /// Decoder turning a raw body into a partial update.
    pub decoder: fn(&[u8]) -> Result<StateUpdate, DecodeError>,
    /// Snapshot fields this stream owns. Disjoint across streams.
    pub fields: &'static [&'static str],
}

impl fmt::Debug for StreamDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamDescriptor")
            .field("stream", &self.stream)
            .field("suffix", &self.suffix)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// All four inbound streams, in subscription order.
pub const STREAMS: [StreamDescriptor; 4] = [
    StreamDescriptor {
        stream: Stream::Status,
        suffix: Stream::Status.suffix(),
        decoder: status::decode,
        fields: &[
            "machine_state",
            "mode",
            "heating_strategy",
            "brew_temp",
            "brew_setpoint",
            "steam_temp",
            "steam_setpoint",
            "pressure",
            "scale_weight",
            "flow_rate",
            "shot_duration",
            "shot_weight",
            "target_weight",
            "is_brewing",
            "is_heating",
            "water_low",
            "alarm_active",
            "pico_connected",
            "wifi_connected",
            "scale_connected",
        ],
    },
    StreamDescriptor {
        stream: Stream::Power,
        suffix: Stream::Power.suffix(),
        decoder: power::decode,
        fields: &[
            "power",
            "voltage",
            "current",
            "energy_import",
            "energy_export",
            "frequency",
            "power_factor",
        ],
    },
    StreamDescriptor {
        stream: Stream::Statistics,
        suffix: Stream::Statistics.suffix(),
        decoder: statistics::decode,
        fields: &["shots_today", "total_shots", "kwh_today"],
    },
    StreamDescriptor {
        stream: Stream::Availability,
        suffix: Stream::Availability.suffix(),
        decoder: decode_availability,
        fields: &["available"],
    },
];

/// Returns the descriptor for a stream.
#[must_use]
pub fn descriptor(stream: Stream) -> &'static StreamDescriptor {
    match stream {
        Stream::Status => &STREAMS[0],
        Stream::Power => &STREAMS[1],
        Stream::Statistics => &STREAMS[2],
        Stream::Availability => &STREAMS[3],
    }
}

/// Decodes a message body for the given stream.
///
/// # Errors
///
/// Returns [`DecodeError`] when a JSON stream's body is malformed or a
/// present field has the wrong type. The availability stream never fails.
pub fn decode(stream: Stream, payload: &[u8]) -> Result<StateUpdate, DecodeError> {
    (descriptor(stream).decoder)(payload)
}

/// Whether an availability payload reports the machine online.
///
/// The comparison is exact and case-sensitive: only the bytes `online`
/// count. `"ONLINE"`, an empty body, `"offline"` and non-UTF-8 bodies all
/// mean offline.
#[must_use]
pub fn is_online(payload: &[u8]) -> bool {
    payload == b"online"
}

fn decode_availability(payload: &[u8]) -> Result<StateUpdate, DecodeError> {
    Ok(StateUpdate {
        available: Some(is_online(payload)),
        ..StateUpdate::default()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::state::DeviceState;

    use super::*;

    #[test]
    fn descriptors_match_their_streams() {
        for stream in [
            Stream::Status,
            Stream::Power,
            Stream::Statistics,
            Stream::Availability,
        ] {
            let entry = descriptor(stream);
            assert_eq!(entry.stream, stream);
            assert_eq!(entry.suffix, stream.suffix());
        }
    }

    #[test]
    fn decode_dispatches_per_stream() {
        let update = decode(Stream::Status, br#"{"state":"heating"}"#).unwrap();
        assert_eq!(update.machine_state.as_deref(), Some("heating"));

        let update = decode(Stream::Power, br#"{"voltage":230.1}"#).unwrap();
        assert_eq!(update.voltage, Some(230.1));

        let update = decode(Stream::Statistics, br#"{"total_shots":12}"#).unwrap();
        assert_eq!(update.total_shots, Some(12));

        let update = decode(Stream::Availability, b"online").unwrap();
        assert_eq!(update.available, Some(true));
    }

    #[test]
    fn online_requires_the_exact_sentinel() {
        assert!(is_online(b"online"));
        assert!(!is_online(b"offline"));
        assert!(!is_online(b"ONLINE"));
        assert!(!is_online(b"Online"));
        assert!(!is_online(b""));
        assert!(!is_online(b"online "));
        assert!(!is_online(&[0xff, 0xfe]));
    }

    #[test]
    fn availability_decode_never_fails() {
        let update = decode(Stream::Availability, &[0xff, 0x00, 0x99]).unwrap();
        assert_eq!(
            update,
            StateUpdate {
                available: Some(false),
                ..StateUpdate::default()
            }
        );
    }

    #[test]
    fn stream_ownership_is_disjoint_and_covers_the_snapshot() {
        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &STREAMS {
            for field in entry.fields {
                assert!(seen.insert(field), "field {field} owned by two streams");
            }
        }

        let snapshot = serde_json::to_value(DeviceState::default()).unwrap();
        let snapshot_fields: HashSet<&str> = snapshot
            .as_object()
            .expect("snapshot serializes to an object")
            .keys()
            .map(String::as_str)
            .collect();

        // sw_version is populated out-of-band; every other snapshot field
        // belongs to exactly one stream.
        let mut expected = seen.clone();
        expected.insert("sw_version");
        assert_eq!(expected, snapshot_fields);
    }
}
