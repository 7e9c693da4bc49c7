// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `BrewLink` - A Rust library to monitor and control BrewOS espresso machines.
//!
//! This library provides async APIs to interact with machines running the
//! BrewOS firmware over MQTT. A [`Coordinator`] subscribes to the firmware's
//! telemetry streams, merges them into one always-populated state snapshot,
//! and publishes typed commands back to the machine.
//!
//! # Supported Features
//!
//! - **Live state**: Boiler temperatures, pressure, flow, scale weight, shot
//!   progress, merged from the `status`, `power`, and `statistics` streams
//! - **Availability**: Online/offline tracking from the firmware's
//!   availability topic
//! - **Machine control**: Mode switching, brew start/stop, boiler setpoints,
//!   brew-by-weight target, heating strategy, scale tare
//! - **Subscriptions**: Synchronous callbacks with the post-merge snapshot,
//!   invoked in registration order
//!
//! # Feature Flags
//!
//! - `mqtt` (default): The [`MqttBroker`] transport built on `rumqttc`.
//!   Without it, bring your own [`Transport`] implementation.
//!
//! # Quick Start
//!
//! ```no_run
//! use brewlink::Coordinator;
//! use brewlink::protocol::MqttBroker;
//!
//! #[tokio::main]
//! async fn main() -> brewlink::Result<()> {
//!     let broker = MqttBroker::builder()
//!         .host("192.168.1.50")
//!         .port(1883)
//!         .build()
//!         .await?;
//!
//!     let coordinator = Coordinator::builder(broker)
//!         .device_id("gs3_kitchen")
//!         .build();
//!     coordinator.setup().await?;
//!
//!     // React to every merged telemetry message
//!     coordinator.on_update(|state| {
//!         if state.is_ready() {
//!             println!("machine ready, brew boiler at {:.1}C", state.brew_temp);
//!         }
//!     });
//!
//!     // Wake the machine
//!     coordinator.set_mode("on").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Availability Tracking
//!
//! The firmware publishes a last-will style availability payload; the
//! coordinator mirrors it into the snapshot and into a dedicated callback
//! channel:
//!
//! ```ignore
//! coordinator.on_availability_changed(|online| {
//!     println!("machine is {}", if online { "online" } else { "offline" });
//! });
//!
//! if coordinator.available() {
//!     coordinator.brew_start().await?;
//! }
//! ```
//!
//! ## Raw Commands
//!
//! Commands the typed helpers do not cover can be built directly; the wire
//! body is a flat JSON object carrying the command name under `cmd`:
//!
//! ```
//! use brewlink::CommandIntent;
//!
//! let intent = CommandIntent::new("set_preinfusion").param("seconds", 4);
//! assert_eq!(
//!     intent.body(),
//!     serde_json::json!({"cmd": "set_preinfusion", "seconds": 4})
//! );
//! ```

pub mod command;
mod coordinator;
pub mod error;
pub mod protocol;
pub mod state;
pub mod subscription;
pub mod telemetry;
pub mod topic;
pub mod types;

pub use command::CommandIntent;
pub use coordinator::{Coordinator, CoordinatorBuilder};
pub use error::{DecodeError, Error, ProtocolError, Result};
#[cfg(feature = "mqtt")]
pub use protocol::{MqttBroker, MqttBrokerBuilder, MqttBrokerConfig};
pub use protocol::{MessageHandler, MessageRouter, Transport};
pub use state::{DeviceState, StateStore, StateUpdate};
pub use subscription::{CallbackRegistry, SubscriptionId};
pub use telemetry::{STREAMS, Stream, StreamDescriptor};
pub use topic::{DEFAULT_TOPIC_PREFIX, TopicRouter};
pub use types::{Boiler, HeatingStrategy, StrategyValue};
