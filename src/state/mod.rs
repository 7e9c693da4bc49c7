// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! The [`DeviceState`] struct is the always-fully-populated snapshot of one
//! machine, [`StateUpdate`] is the partial update a telemetry decoder
//! produces, and [`StateStore`] guards the snapshot behind atomic merges.
//! Derived views (`is_ready`, `strategy_option`, ...) live as methods on the
//! snapshot.
//!
//! # Examples
//!
//! ```
//! use brewlink::state::{DeviceState, StateUpdate};
//!
//! let mut state = DeviceState::new();
//!
//! let update = StateUpdate {
//!     machine_state: Some("ready".to_string()),
//!     ..StateUpdate::default()
//! };
//! state.apply(&update);
//!
//! assert!(state.is_ready());
//! // Fields the update did not carry keep their values.
//! assert!((state.brew_setpoint - 93.5).abs() < f64::EPSILON);
//! ```

mod device_state;
mod store;
mod update;
mod views;

pub use device_state::DeviceState;
pub use store::StateStore;
pub use update::StateUpdate;
