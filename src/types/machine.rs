// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Machine state and mode wire vocabulary.
//!
//! The firmware publishes `state` and `mode` as plain strings and the device
//! state stores them as such, so an unrecognized value from a newer firmware
//! never fails a decode. The constants here name the values current firmware
//! emits; comparisons against them drive the derived views.

/// Machine state values published in the status stream.
pub mod states {
    /// Controller is booting.
    pub const INIT: &str = "init";
    /// Boilers off, machine idle.
    pub const STANDBY: &str = "standby";
    /// Boilers heating towards their setpoints.
    pub const HEATING: &str = "heating";
    /// At temperature and ready to pull a shot.
    pub const READY: &str = "ready";
    /// Shot in progress.
    pub const BREWING: &str = "brewing";
    /// Steam boiler in active use.
    pub const STEAMING: &str = "steaming";
    /// Cooling down after overshoot.
    pub const COOLDOWN: &str = "cooldown";
    /// A fault latched; heaters disabled.
    pub const FAULT: &str = "fault";
    /// Safe mode after repeated faults.
    pub const SAFE: &str = "safe";
    /// Reduced-temperature eco hold.
    pub const ECO: &str = "eco";
}

/// Operating mode values published in the status stream.
pub mod modes {
    /// Machine off (the power switch reads "off" in this mode).
    pub const STANDBY: &str = "standby";
    /// Normal operation.
    pub const ON: &str = "on";
    /// Eco hold at reduced temperature.
    pub const ECO: &str = "eco";
}
