// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoder for the `power` telemetry stream.

use serde::Deserialize;

use crate::error::DecodeError;
use crate::state::StateUpdate;

use super::Stream;

/// Parsed body of a `power` message from the machine's energy meter.
///
/// All readings default to zero when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PowerPayload {
    #[serde(default)]
    power: f64,
    #[serde(default)]
    voltage: f64,
    #[serde(default)]
    current: f64,
    #[serde(default)]
    energy_import: f64,
    #[serde(default)]
    energy_export: f64,
    #[serde(default)]
    frequency: f64,
    #[serde(default)]
    power_factor: f64,
}

impl PowerPayload {
    /// Converts the parsed body into a partial update carrying every
    /// power-owned field.
    #[must_use]
    pub fn into_update(self) -> StateUpdate {
        StateUpdate {
            power: Some(self.power),
            voltage: Some(self.voltage),
            current: Some(self.current),
            energy_import: Some(self.energy_import),
            energy_export: Some(self.energy_export),
            frequency: Some(self.frequency),
            power_factor: Some(self.power_factor),
            ..StateUpdate::default()
        }
    }
}

/// Decodes a `power` message body into a partial update.
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is not a JSON object or a present
/// field is not numeric. Nothing is merged in that case.
pub fn decode(payload: &[u8]) -> Result<StateUpdate, DecodeError> {
    let power: PowerPayload = serde_json::from_slice(payload).map_err(|source| DecodeError {
        stream: Stream::Power.suffix(),
        source,
    })?;
    Ok(power.into_update())
}
