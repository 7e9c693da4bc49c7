// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BrewOS command definitions.
//!
//! Commands are published to a single `command` topic as flat JSON objects
//! with a reserved `cmd` key. They are fire-and-forget; the machine answers
//! indirectly through its next status publication.
//!
//! # Available Commands
//!
//! | Constructor | Command | Parameters |
//! |-------------|---------|------------|
//! | [`CommandIntent::set_mode`] | `set_mode` | `mode` |
//! | [`CommandIntent::brew_start`] | `brew_start` | none |
//! | [`CommandIntent::brew_stop`] | `brew_stop` | none |
//! | [`CommandIntent::tare`] | `tare` | none |
//! | [`CommandIntent::enter_eco`] | `enter_eco` | none |
//! | [`CommandIntent::exit_eco`] | `exit_eco` | none |
//! | [`CommandIntent::set_temp`] | `set_temp` | `temp`, `boiler` |
//! | [`CommandIntent::set_target_weight`] | `set_target_weight` | `weight` |
//! | [`CommandIntent::set_heating_strategy`] | `set_heating_strategy` | `strategy` |
//!
//! # Examples
//!
//! ```
//! use brewlink::command::CommandIntent;
//! use brewlink::types::machine::modes;
//!
//! let intent = CommandIntent::set_mode(modes::ON);
//! assert_eq!(
//!     intent.body(),
//!     serde_json::json!({"cmd": "set_mode", "mode": "on"})
//! );
//! ```

mod intent;

pub use intent::CommandIntent;
