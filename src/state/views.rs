// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Derived views over a device state snapshot.
//!
//! Entity-style consumers (switches, selects, binary sensors) read these
//! instead of re-deriving the rules themselves. All of them are pure reads;
//! none consults availability or any other field than the ones documented.

use crate::types::machine::{modes, states};

use super::DeviceState;

impl DeviceState {
    /// `true` when the machine reports it is ready to pull a shot.
    ///
    /// This is a single string equality against `"ready"`. Other flags are
    /// deliberately ignored; if a contradictory payload reports
    /// `is_brewing: true` alongside a different state, the state string
    /// wins.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.machine_state == states::READY
    }

    /// `true` when the machine is powered up in any mode other than standby.
    ///
    /// Backs the power-switch view: `on` and `eco` both count as on.
    #[must_use]
    pub fn mode_switch_is_on(&self) -> bool {
        self.mode != modes::STANDBY
    }

    /// Resolves the stored heating-strategy value to a display name.
    ///
    /// A numeric code goes through the codec with the usual fallback to
    /// `"sequential"`; a string value is passed through unchanged.
    #[must_use]
    pub fn strategy_option(&self) -> &str {
        self.heating_strategy.option_name()
    }

    /// The operating mode as a select option, with the empty string
    /// rendered as `"standby"`.
    #[must_use]
    pub fn mode_option(&self) -> &str {
        if self.mode.is_empty() {
            modes::STANDBY
        } else {
            &self.mode
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::StrategyValue;

    use super::*;

    #[test]
    fn ready_is_a_pure_state_equality() {
        let mut state = DeviceState::new();
        assert!(!state.is_ready());

        state.machine_state = "ready".to_string();
        assert!(state.is_ready());

        // Contradictory flags do not override the state string.
        state.is_brewing = true;
        assert!(state.is_ready());

        state.machine_state = "brewing".to_string();
        assert!(!state.is_ready());
    }

    #[test]
    fn mode_switch_follows_standby_boundary() {
        let mut state = DeviceState::new();
        assert!(!state.mode_switch_is_on());

        state.mode = "on".to_string();
        assert!(state.mode_switch_is_on());

        state.mode = "eco".to_string();
        assert!(state.mode_switch_is_on());

        state.mode = "standby".to_string();
        assert!(!state.mode_switch_is_on());
    }

    #[test]
    fn strategy_option_resolves_known_codes() {
        let mut state = DeviceState::new();
        assert_eq!(state.strategy_option(), "sequential");

        state.heating_strategy = StrategyValue::Code(0);
        assert_eq!(state.strategy_option(), "brew_only");

        state.heating_strategy = StrategyValue::Code(2);
        assert_eq!(state.strategy_option(), "parallel");
    }

    #[test]
    fn strategy_option_defaults_unknown_codes() {
        let mut state = DeviceState::new();
        state.heating_strategy = StrategyValue::Code(99);
        assert_eq!(state.strategy_option(), "sequential");
    }

    #[test]
    fn strategy_option_passes_strings_through() {
        let mut state = DeviceState::new();
        state.heating_strategy = StrategyValue::Name("smart_stagger".to_string());
        assert_eq!(state.strategy_option(), "smart_stagger");

        state.heating_strategy = StrategyValue::Name("experimental".to_string());
        assert_eq!(state.strategy_option(), "experimental");
    }

    #[test]
    fn mode_option_falls_back_on_empty() {
        let mut state = DeviceState::new();
        assert_eq!(state.mode_option(), "standby");

        state.mode = "eco".to_string();
        assert_eq!(state.mode_option(), "eco");

        state.mode = String::new();
        assert_eq!(state.mode_option(), "standby");
    }
}
