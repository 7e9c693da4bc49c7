// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heating strategy type for dual-boiler scheduling.
//!
//! This module provides a type-safe representation of the BrewOS heating
//! strategies together with the bidirectional code/name codec used on the
//! wire.

use std::fmt;

/// Boiler heating strategy (0-3).
///
/// BrewOS schedules the brew and steam boilers according to one of four
/// built-in strategies:
///
/// | Code | Name | Description |
/// |------|------|-------------|
/// | 0 | `brew_only` | Steam boiler stays cold |
/// | 1 | `sequential` | Brew boiler first, then steam (default) |
/// | 2 | `parallel` | Both boilers heat simultaneously |
/// | 3 | `smart_stagger` | Staggered heating to cap peak draw |
///
/// The firmware publishes the numeric code; user-facing layers work with the
/// symbolic name. Lookups in either direction fall back to [`Sequential`]
/// when given an unknown value, so a firmware newer than this library
/// degrades to the safe default instead of failing.
///
/// [`Sequential`]: HeatingStrategy::Sequential
///
/// # Examples
///
/// ```
/// use brewlink::types::HeatingStrategy;
///
/// let strategy = HeatingStrategy::Parallel;
/// assert_eq!(strategy.code(), 2);
/// assert_eq!(strategy.name(), "parallel");
///
/// // Strict lookups return None for unknown values
/// assert_eq!(HeatingStrategy::from_code(3), Some(HeatingStrategy::SmartStagger));
/// assert_eq!(HeatingStrategy::from_code(99), None);
///
/// // Lenient lookups fall back to the default
/// assert_eq!(HeatingStrategy::name_for(99), "sequential");
/// assert_eq!(HeatingStrategy::code_for("no_such_strategy"), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatingStrategy {
    /// Steam boiler stays cold; only the brew boiler heats.
    BrewOnly,
    /// Brew boiler heats first, steam boiler follows (firmware default).
    Sequential,
    /// Both boilers heat at the same time.
    Parallel,
    /// Staggered duty cycles to limit peak power draw.
    SmartStagger,
}

impl HeatingStrategy {
    /// Returns the numeric code published by the firmware.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::BrewOnly => 0,
            Self::Sequential => 1,
            Self::Parallel => 2,
            Self::SmartStagger => 3,
        }
    }

    /// Returns the symbolic strategy name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BrewOnly => "brew_only",
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
            Self::SmartStagger => "smart_stagger",
        }
    }

    /// Looks up a strategy by its numeric code.
    ///
    /// Returns `None` for codes outside 0-3.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::BrewOnly),
            1 => Some(Self::Sequential),
            2 => Some(Self::Parallel),
            3 => Some(Self::SmartStagger),
            _ => None,
        }
    }

    /// Looks up a strategy by its symbolic name.
    ///
    /// Returns `None` for unknown names. Matching is case-sensitive; the
    /// firmware and this library both use lowercase names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "brew_only" => Some(Self::BrewOnly),
            "sequential" => Some(Self::Sequential),
            "parallel" => Some(Self::Parallel),
            "smart_stagger" => Some(Self::SmartStagger),
            _ => None,
        }
    }

    /// Returns the name for a numeric code, falling back to `"sequential"`
    /// for unknown codes.
    #[must_use]
    pub const fn name_for(code: i64) -> &'static str {
        match Self::from_code(code) {
            Some(strategy) => strategy.name(),
            None => Self::Sequential.name(),
        }
    }

    /// Returns the code for a symbolic name, falling back to `1`
    /// (the [`Sequential`](Self::Sequential) code) for unknown names.
    ///
    /// The fallback is silent: a misspelled name selects `sequential`
    /// rather than raising an error. Callers that need to distinguish typos
    /// from the real default should use [`from_name`](Self::from_name).
    #[must_use]
    pub fn code_for(name: &str) -> u8 {
        Self::from_name(name).unwrap_or_default().code()
    }
}

impl Default for HeatingStrategy {
    fn default() -> Self {
        Self::Sequential
    }
}

impl fmt::Display for HeatingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Raw heating-strategy value as carried in a status payload.
///
/// The firmware is expected to publish the numeric code, but the field is
/// accepted in either representation and surfaced unchanged in the device
/// state. [`DeviceState::strategy_option`](crate::state::DeviceState::strategy_option)
/// resolves it to a display name.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum StrategyValue {
    /// Numeric strategy code.
    Code(i64),
    /// Symbolic strategy name.
    Name(String),
}

impl StrategyValue {
    /// Resolves the stored value to a strategy name.
    ///
    /// A numeric code is looked up through the codec (unknown codes fall
    /// back to `"sequential"`); a string value is passed through unchanged,
    /// whatever it contains.
    #[must_use]
    pub fn option_name(&self) -> &str {
        match self {
            Self::Code(code) => HeatingStrategy::name_for(*code),
            Self::Name(name) => name,
        }
    }
}

impl Default for StrategyValue {
    fn default() -> Self {
        Self::Code(i64::from(HeatingStrategy::Sequential.code()))
    }
}

impl From<HeatingStrategy> for StrategyValue {
    fn from(strategy: HeatingStrategy) -> Self {
        Self::Code(i64::from(strategy.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_codes() {
        assert_eq!(HeatingStrategy::BrewOnly.code(), 0);
        assert_eq!(HeatingStrategy::Sequential.code(), 1);
        assert_eq!(HeatingStrategy::Parallel.code(), 2);
        assert_eq!(HeatingStrategy::SmartStagger.code(), 3);
    }

    #[test]
    fn strategy_names() {
        assert_eq!(HeatingStrategy::BrewOnly.name(), "brew_only");
        assert_eq!(HeatingStrategy::Sequential.name(), "sequential");
        assert_eq!(HeatingStrategy::Parallel.name(), "parallel");
        assert_eq!(HeatingStrategy::SmartStagger.name(), "smart_stagger");
    }

    #[test]
    fn strategy_roundtrip_both_directions() {
        for strategy in [
            HeatingStrategy::BrewOnly,
            HeatingStrategy::Sequential,
            HeatingStrategy::Parallel,
            HeatingStrategy::SmartStagger,
        ] {
            assert_eq!(
                HeatingStrategy::from_code(i64::from(strategy.code())),
                Some(strategy)
            );
            assert_eq!(HeatingStrategy::from_name(strategy.name()), Some(strategy));
        }
    }

    #[test]
    fn unknown_code_falls_back_to_sequential() {
        assert_eq!(HeatingStrategy::from_code(4), None);
        assert_eq!(HeatingStrategy::from_code(-1), None);
        assert_eq!(HeatingStrategy::name_for(4), "sequential");
        assert_eq!(HeatingStrategy::name_for(-1), "sequential");
        assert_eq!(HeatingStrategy::name_for(99), "sequential");
    }

    #[test]
    fn unknown_name_falls_back_to_code_one() {
        assert_eq!(HeatingStrategy::from_name("paralel"), None);
        assert_eq!(HeatingStrategy::code_for("paralel"), 1);
        assert_eq!(HeatingStrategy::code_for(""), 1);
        assert_eq!(HeatingStrategy::code_for("PARALLEL"), 1);
    }

    #[test]
    fn strategy_default() {
        assert_eq!(HeatingStrategy::default(), HeatingStrategy::Sequential);
    }

    #[test]
    fn strategy_display() {
        assert_eq!(HeatingStrategy::BrewOnly.to_string(), "brew_only (0)");
        assert_eq!(HeatingStrategy::Parallel.to_string(), "parallel (2)");
    }

    #[test]
    fn strategy_value_default_is_sequential_code() {
        assert_eq!(StrategyValue::default(), StrategyValue::Code(1));
    }

    #[test]
    fn strategy_value_resolves_codes() {
        assert_eq!(StrategyValue::Code(0).option_name(), "brew_only");
        assert_eq!(StrategyValue::Code(3).option_name(), "smart_stagger");
        assert_eq!(StrategyValue::Code(42).option_name(), "sequential");
    }

    #[test]
    fn strategy_value_passes_names_through() {
        assert_eq!(
            StrategyValue::Name("parallel".to_string()).option_name(),
            "parallel"
        );
        // Unrecognized names are surfaced as-is, not coerced.
        assert_eq!(
            StrategyValue::Name("custom".to_string()).option_name(),
            "custom"
        );
    }

    #[test]
    fn strategy_value_deserializes_from_integer_or_string() {
        let from_int: StrategyValue = serde_json::from_str("2").unwrap();
        assert_eq!(from_int, StrategyValue::Code(2));

        let from_str: StrategyValue = serde_json::from_str("\"parallel\"").unwrap();
        assert_eq!(from_str, StrategyValue::Name("parallel".to_string()));

        let from_float: Result<StrategyValue, _> = serde_json::from_str("1.5");
        assert!(from_float.is_err());
    }

    #[test]
    fn strategy_value_from_strategy() {
        assert_eq!(
            StrategyValue::from(HeatingStrategy::SmartStagger),
            StrategyValue::Code(3)
        );
    }
}
