// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state snapshot.

use crate::types::StrategyValue;

use super::StateUpdate;

/// Complete state of a BrewOS machine.
///
/// Every field carries a default, so a snapshot is fully populated from the
/// moment a coordinator is created and consumers never have to handle
/// missing values. Telemetry merges overwrite only the fields present in the
/// incoming update; everything else keeps its previous value.
///
/// The string-typed fields (`machine_state`, `mode`) hold whatever the
/// firmware published. Unrecognized values from a newer firmware are stored
/// verbatim rather than rejected; see [`crate::types::machine`] for the
/// values current firmware emits.
///
/// # Examples
///
/// ```
/// use brewlink::state::DeviceState;
///
/// let state = DeviceState::new();
/// assert_eq!(state.machine_state, "standby");
/// assert!((state.brew_setpoint - 93.5).abs() < f64::EPSILON);
/// assert!(!state.available);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DeviceState {
    /// Machine state string (wire key `state`).
    pub machine_state: String,
    /// Operating mode: `standby`, `on` or `eco`.
    pub mode: String,
    /// Raw heating-strategy value as last published.
    pub heating_strategy: StrategyValue,
    /// Brew boiler temperature in °C.
    pub brew_temp: f64,
    /// Brew boiler setpoint in °C.
    pub brew_setpoint: f64,
    /// Steam boiler temperature in °C.
    pub steam_temp: f64,
    /// Steam boiler setpoint in °C.
    pub steam_setpoint: f64,
    /// Brew pressure in bar.
    pub pressure: f64,
    /// Scale reading in grams.
    pub scale_weight: f64,
    /// Flow rate in g/s.
    pub flow_rate: f64,
    /// Current shot duration in seconds.
    pub shot_duration: f64,
    /// Current shot weight in grams.
    pub shot_weight: f64,
    /// Target shot weight in grams.
    pub target_weight: f64,
    /// Shot in progress.
    pub is_brewing: bool,
    /// Either boiler actively heating.
    pub is_heating: bool,
    /// Water tank low.
    pub water_low: bool,
    /// Alarm latched.
    pub alarm_active: bool,
    /// Brew Pico controller link up.
    pub pico_connected: bool,
    /// Wi-Fi link up.
    pub wifi_connected: bool,
    /// Bluetooth scale connected.
    pub scale_connected: bool,
    /// Instantaneous power draw in W.
    pub power: f64,
    /// Mains voltage in V.
    pub voltage: f64,
    /// Mains current in A.
    pub current: f64,
    /// Imported energy in kWh.
    pub energy_import: f64,
    /// Exported energy in kWh.
    pub energy_export: f64,
    /// Mains frequency in Hz.
    pub frequency: f64,
    /// Power factor (0-1).
    pub power_factor: f64,
    /// Shots pulled today.
    pub shots_today: u32,
    /// Lifetime shot count.
    pub total_shots: u32,
    /// Energy used today in kWh.
    pub kwh_today: f64,
    /// Machine availability, mirrored from the availability stream.
    pub available: bool,
    /// Firmware version, populated out-of-band during pairing.
    pub sw_version: String,
}

impl DeviceState {
    /// Creates a snapshot with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a partial update, overwriting only the fields it carries.
    pub fn apply(&mut self, update: &StateUpdate) {
        if let Some(machine_state) = &update.machine_state {
            self.machine_state.clone_from(machine_state);
        }
        if let Some(mode) = &update.mode {
            self.mode.clone_from(mode);
        }
        if let Some(heating_strategy) = &update.heating_strategy {
            self.heating_strategy.clone_from(heating_strategy);
        }

        // Copyable fields share one pattern.
        macro_rules! set_if_some {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = update.$field {
                        self.$field = value;
                    }
                )+
            };
        }

        set_if_some!(
            brew_temp,
            brew_setpoint,
            steam_temp,
            steam_setpoint,
            pressure,
            scale_weight,
            flow_rate,
            shot_duration,
            shot_weight,
            target_weight,
            is_brewing,
            is_heating,
            water_low,
            alarm_active,
            pico_connected,
            wifi_connected,
            scale_connected,
            power,
            voltage,
            current,
            energy_import,
            energy_export,
            frequency,
            power_factor,
            shots_today,
            total_shots,
            kwh_today,
            available,
        );
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            machine_state: "standby".to_string(),
            mode: "standby".to_string(),
            heating_strategy: StrategyValue::default(),
            brew_temp: 0.0,
            brew_setpoint: 93.5,
            steam_temp: 0.0,
            steam_setpoint: 145.0,
            pressure: 0.0,
            scale_weight: 0.0,
            flow_rate: 0.0,
            shot_duration: 0.0,
            shot_weight: 0.0,
            target_weight: 36.0,
            is_brewing: false,
            is_heating: false,
            water_low: false,
            alarm_active: false,
            pico_connected: false,
            wifi_connected: true,
            scale_connected: false,
            power: 0.0,
            voltage: 0.0,
            current: 0.0,
            energy_import: 0.0,
            energy_export: 0.0,
            frequency: 0.0,
            power_factor: 0.0,
            shots_today: 0,
            total_shots: 0,
            kwh_today: 0.0,
            available: false,
            sw_version: "unknown".to_string(),
        }
    }
}
