// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for BrewOS machine control.
//!
//! # Types
//!
//! - [`HeatingStrategy`] - Boiler scheduling strategy with its code/name codec
//! - [`StrategyValue`] - Raw strategy value as carried on the wire
//! - [`Boiler`] - Brew/steam selector for temperature commands
//! - [`machine`] - Machine state and mode wire vocabulary

pub mod machine;

mod boiler;
mod heating_strategy;

pub use boiler::Boiler;
pub use heating_strategy::{HeatingStrategy, StrategyValue};
