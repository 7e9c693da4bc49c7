// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoder for the `status` telemetry stream.

use serde::Deserialize;

use crate::error::DecodeError;
use crate::state::StateUpdate;
use crate::types::StrategyValue;

use super::Stream;

/// Parsed body of a `status` message.
///
/// The firmware publishes the full machine state on every status message.
/// Every field is optional on the wire and falls back to the documented
/// per-field default; a field that is present with the wrong type fails the
/// whole decode. Unknown keys (the firmware also sends a `seq` counter) are
/// ignored.
///
/// # Examples
///
/// ```
/// use brewlink::telemetry::StatusPayload;
///
/// let json = r#"{"state":"ready","brew_temp":92.1}"#;
/// let status: StatusPayload = serde_json::from_str(json).unwrap();
/// let update = status.into_update();
///
/// assert_eq!(update.machine_state.as_deref(), Some("ready"));
/// // Absent wire fields decode to their defaults, not to None.
/// assert_eq!(update.brew_setpoint, Some(93.5));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StatusPayload {
    #[serde(rename = "state", default = "default_standby")]
    machine_state: String,
    #[serde(default = "default_standby")]
    mode: String,
    #[serde(default)]
    heating_strategy: StrategyValue,
    #[serde(default)]
    brew_temp: f64,
    #[serde(default = "default_brew_setpoint")]
    brew_setpoint: f64,
    #[serde(default)]
    steam_temp: f64,
    #[serde(default = "default_steam_setpoint")]
    steam_setpoint: f64,
    #[serde(default)]
    pressure: f64,
    #[serde(default)]
    scale_weight: f64,
    #[serde(default)]
    flow_rate: f64,
    #[serde(default)]
    shot_duration: f64,
    #[serde(default)]
    shot_weight: f64,
    #[serde(default = "default_target_weight")]
    target_weight: f64,
    #[serde(default)]
    is_brewing: bool,
    #[serde(default)]
    is_heating: bool,
    #[serde(default)]
    water_low: bool,
    #[serde(default)]
    alarm_active: bool,
    #[serde(default)]
    pico_connected: bool,
    #[serde(default = "default_true")]
    wifi_connected: bool,
    #[serde(default)]
    scale_connected: bool,
}

fn default_standby() -> String {
    "standby".to_string()
}

fn default_brew_setpoint() -> f64 {
    93.5
}

fn default_steam_setpoint() -> f64 {
    145.0
}

fn default_target_weight() -> f64 {
    36.0
}

fn default_true() -> bool {
    true
}

impl StatusPayload {
    /// Converts the parsed body into a partial update carrying every
    /// status-owned field.
    #[must_use]
    pub fn into_update(self) -> StateUpdate {
        StateUpdate {
            machine_state: Some(self.machine_state),
            mode: Some(self.mode),
            heating_strategy: Some(self.heating_strategy),
            brew_temp: Some(self.brew_temp),
            brew_setpoint: Some(self.brew_setpoint),
            steam_temp: Some(self.steam_temp),
            steam_setpoint: Some(self.steam_setpoint),
            pressure: Some(self.pressure),
            scale_weight: Some(self.scale_weight),
            flow_rate: Some(self.flow_rate),
            shot_duration: Some(self.shot_duration),
            shot_weight: Some(self.shot_weight),
            target_weight: Some(self.target_weight),
            is_brewing: Some(self.is_brewing),
            is_heating: Some(self.is_heating),
            water_low: Some(self.water_low),
            alarm_active: Some(self.alarm_active),
            pico_connected: Some(self.pico_connected),
            wifi_connected: Some(self.wifi_connected),
            scale_connected: Some(self.scale_connected),
            ..StateUpdate::default()
        }
    }
}

/// Decodes a `status` message body into a partial update.
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is not a JSON object or a present
/// field has the wrong type. Nothing is merged in that case.
pub fn decode(payload: &[u8]) -> Result<StateUpdate, DecodeError> {
    let status: StatusPayload = serde_json::from_slice(payload).map_err(|source| DecodeError {
        stream: Stream::Status.suffix(),
        source,
    })?;
    Ok(status.into_update())
}
