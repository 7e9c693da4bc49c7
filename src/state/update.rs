// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Partial state updates produced by the telemetry decoders.

use crate::types::StrategyValue;

/// A partial update against [`DeviceState`](super::DeviceState).
///
/// Each telemetry decoder fills in exactly the fields its stream owns and
/// leaves every other field `None`. Applying an update overwrites the `Some`
/// fields and never touches the rest, which is what keeps unrelated streams
/// from clobbering each other's values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
    /// Machine state string (wire key `state`).
    pub machine_state: Option<String>,
    /// Operating mode string.
    pub mode: Option<String>,
    /// Raw heating-strategy value.
    pub heating_strategy: Option<StrategyValue>,
    /// Brew boiler temperature in °C.
    pub brew_temp: Option<f64>,
    /// Brew boiler setpoint in °C.
    pub brew_setpoint: Option<f64>,
    /// Steam boiler temperature in °C.
    pub steam_temp: Option<f64>,
    /// Steam boiler setpoint in °C.
    pub steam_setpoint: Option<f64>,
    /// Brew pressure in bar.
    pub pressure: Option<f64>,
    /// Scale reading in grams.
    pub scale_weight: Option<f64>,
    /// Flow rate in g/s.
    pub flow_rate: Option<f64>,
    /// Current shot duration in seconds.
    pub shot_duration: Option<f64>,
    /// Current shot weight in grams.
    pub shot_weight: Option<f64>,
    /// Target shot weight in grams.
    pub target_weight: Option<f64>,
    /// Shot in progress.
    pub is_brewing: Option<bool>,
    /// Either boiler actively heating.
    pub is_heating: Option<bool>,
    /// Water tank low.
    pub water_low: Option<bool>,
    /// Alarm latched.
    pub alarm_active: Option<bool>,
    /// Brew Pico controller link up.
    pub pico_connected: Option<bool>,
    /// Wi-Fi link up.
    pub wifi_connected: Option<bool>,
    /// Bluetooth scale connected.
    pub scale_connected: Option<bool>,
    /// Instantaneous power draw in W.
    pub power: Option<f64>,
    /// Mains voltage in V.
    pub voltage: Option<f64>,
    /// Mains current in A.
    pub current: Option<f64>,
    /// Imported energy in kWh.
    pub energy_import: Option<f64>,
    /// Exported energy in kWh.
    pub energy_export: Option<f64>,
    /// Mains frequency in Hz.
    pub frequency: Option<f64>,
    /// Power factor (0-1).
    pub power_factor: Option<f64>,
    /// Shots pulled today.
    pub shots_today: Option<u32>,
    /// Lifetime shot count.
    pub total_shots: Option<u32>,
    /// Energy used today in kWh.
    pub kwh_today: Option<f64>,
    /// Machine availability (mirror of the availability flag).
    pub available: Option<bool>,
}

impl StateUpdate {
    /// Creates an empty update that touches no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
