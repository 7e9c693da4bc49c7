// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoder for the `statistics` telemetry stream.

use serde::Deserialize;

use crate::error::DecodeError;
use crate::state::StateUpdate;

use super::Stream;

/// Parsed body of a `statistics` message.
///
/// Counters default to zero when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatisticsPayload {
    #[serde(default)]
    shots_today: u32,
    #[serde(default)]
    total_shots: u32,
    #[serde(default)]
    kwh_today: f64,
}

impl StatisticsPayload {
    /// Converts the parsed body into a partial update carrying every
    /// statistics-owned field.
    #[must_use]
    pub fn into_update(self) -> StateUpdate {
        StateUpdate {
            shots_today: Some(self.shots_today),
            total_shots: Some(self.total_shots),
            kwh_today: Some(self.kwh_today),
            ..StateUpdate::default()
        }
    }
}

/// Decodes a `statistics` message body into a partial update.
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is not a JSON object, a counter is
/// not a non-negative integer, or `kwh_today` is not numeric. Nothing is
/// merged in that case.
pub fn decode(payload: &[u8]) -> Result<StateUpdate, DecodeError> {
    let statistics: StatisticsPayload =
        serde_json::from_slice(payload).map_err(|source| DecodeError {
            stream: Stream::Statistics.suffix(),
            source,
        })?;
    Ok(statistics.into_update())
}
