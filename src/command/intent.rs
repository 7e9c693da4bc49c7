// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command intents and their wire encoding.

use serde_json::{Map, Value};

use crate::types::{Boiler, HeatingStrategy};

/// A command to publish on the machine's command topic.
///
/// The wire body is a flat JSON object: the reserved `cmd` key names the
/// command, every parameter sits beside it at the top level. Should a
/// parameter be registered under the reserved key, the command name wins;
/// the body always announces the command actually being sent.
///
/// Use the typed constructors for the firmware's command vocabulary and
/// [`new`](Self::new)/[`param`](Self::param) for anything else (newer
/// firmware commands this library does not know about yet).
///
/// # Examples
///
/// ```
/// use brewlink::command::CommandIntent;
/// use brewlink::types::HeatingStrategy;
///
/// let intent = CommandIntent::set_heating_strategy(HeatingStrategy::Parallel);
/// assert_eq!(intent.name(), "set_heating_strategy");
/// assert_eq!(
///     intent.body(),
///     serde_json::json!({"cmd": "set_heating_strategy", "strategy": 2})
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CommandIntent {
    name: String,
    params: Map<String, Value>,
}

impl CommandIntent {
    /// Creates a command with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Map::new(),
        }
    }

    /// Adds a parameter to the command body.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the wire body.
    #[must_use]
    pub fn body(&self) -> Value {
        let mut body = self.params.clone();
        // Inserted last so the command name overrides a colliding param.
        body.insert("cmd".to_string(), Value::String(self.name.clone()));
        Value::Object(body)
    }

    /// Renders the wire body as bytes ready to publish.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.body().to_string().into_bytes()
    }

    // ========== Firmware command vocabulary ==========

    /// Switches the operating mode (`standby`, `on` or `eco`).
    #[must_use]
    pub fn set_mode(mode: impl Into<String>) -> Self {
        Self::new("set_mode").param("mode", mode.into())
    }

    /// Starts a shot.
    #[must_use]
    pub fn brew_start() -> Self {
        Self::new("brew_start")
    }

    /// Stops the running shot.
    #[must_use]
    pub fn brew_stop() -> Self {
        Self::new("brew_stop")
    }

    /// Tares the connected scale.
    #[must_use]
    pub fn tare() -> Self {
        Self::new("tare")
    }

    /// Enters the reduced-temperature eco hold.
    #[must_use]
    pub fn enter_eco() -> Self {
        Self::new("enter_eco")
    }

    /// Leaves the eco hold.
    #[must_use]
    pub fn exit_eco() -> Self {
        Self::new("exit_eco")
    }

    /// Sets a boiler setpoint in °C.
    #[must_use]
    pub fn set_temp(boiler: Boiler, temp: f64) -> Self {
        Self::new("set_temp")
            .param("temp", temp)
            .param("boiler", boiler.as_str())
    }

    /// Sets the target shot weight in grams.
    #[must_use]
    pub fn set_target_weight(weight: f64) -> Self {
        Self::new("set_target_weight").param("weight", weight)
    }

    /// Selects the boiler heating strategy.
    #[must_use]
    pub fn set_heating_strategy(strategy: HeatingStrategy) -> Self {
        Self::new("set_heating_strategy").param("strategy", strategy.code())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn body_carries_cmd_and_flat_params() {
        let intent = CommandIntent::new("set_mode").param("mode", "on");
        assert_eq!(intent.body(), json!({"cmd": "set_mode", "mode": "on"}));
    }

    #[test]
    fn body_without_params_is_just_cmd() {
        let intent = CommandIntent::brew_start();
        assert_eq!(intent.body(), json!({"cmd": "brew_start"}));
    }

    #[test]
    fn command_name_wins_a_cmd_collision() {
        let intent = CommandIntent::new("brew_stop").param("cmd", "malicious");
        assert_eq!(intent.body(), json!({"cmd": "brew_stop"}));
    }

    #[test]
    fn to_bytes_roundtrips_through_json() {
        let intent = CommandIntent::set_target_weight(36.5);
        let parsed: Value = serde_json::from_slice(&intent.to_bytes()).unwrap();
        assert_eq!(parsed, json!({"cmd": "set_target_weight", "weight": 36.5}));
    }

    #[test]
    fn set_mode_body() {
        assert_eq!(
            CommandIntent::set_mode("eco").body(),
            json!({"cmd": "set_mode", "mode": "eco"})
        );
    }

    #[test]
    fn set_temp_targets_a_boiler() {
        assert_eq!(
            CommandIntent::set_temp(Boiler::Brew, 94.0).body(),
            json!({"cmd": "set_temp", "temp": 94.0, "boiler": "brew"})
        );
        assert_eq!(
            CommandIntent::set_temp(Boiler::Steam, 150.0).body(),
            json!({"cmd": "set_temp", "temp": 150.0, "boiler": "steam"})
        );
    }

    #[test]
    fn set_heating_strategy_sends_the_code() {
        assert_eq!(
            CommandIntent::set_heating_strategy(HeatingStrategy::Parallel).body(),
            json!({"cmd": "set_heating_strategy", "strategy": 2})
        );
        assert_eq!(
            CommandIntent::set_heating_strategy(HeatingStrategy::BrewOnly).body(),
            json!({"cmd": "set_heating_strategy", "strategy": 0})
        );
    }

    #[test]
    fn parameterless_commands() {
        for (intent, name) in [
            (CommandIntent::brew_start(), "brew_start"),
            (CommandIntent::brew_stop(), "brew_stop"),
            (CommandIntent::tare(), "tare"),
            (CommandIntent::enter_eco(), "enter_eco"),
            (CommandIntent::exit_eco(), "exit_eco"),
        ] {
            assert_eq!(intent.name(), name);
            assert_eq!(intent.body(), json!({"cmd": name}));
        }
    }
}
