// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for machine state updates.
//!
//! This module provides a callback-based subscription system for receiving
//! notifications when the coordinator merges a telemetry message into the
//! device state.
//!
//! # Overview
//!
//! The subscription system consists of:
//!
//! - [`SubscriptionId`] - A unique identifier for a subscription, used to unsubscribe
//! - [`CallbackRegistry`] - Internal registry that manages callbacks and dispatches events
//!
//! # Usage
//!
//! Subscriptions are typically created through methods on the coordinator:
//!
//! ```no_run
//! use brewlink::Coordinator;
//! use brewlink::protocol::MqttBroker;
//!
//! # async fn example() -> brewlink::Result<()> {
//! let broker = MqttBroker::builder()
//!     .host("192.168.1.50")
//!     .build()
//!     .await?;
//!
//! let coordinator = Coordinator::builder(broker)
//!     .device_id("gs3_kitchen")
//!     .build();
//! coordinator.setup().await?;
//!
//! // Subscribe to state updates
//! let sub_id = coordinator.on_update(|state| {
//!     println!("machine state: {}", state.machine_state);
//! });
//!
//! // Later, unsubscribe
//! coordinator.unsubscribe(sub_id);
//! # Ok(())
//! # }
//! ```
//!
//! # Ordering
//!
//! Callbacks fire synchronously, in registration order, with the full
//! post-merge snapshot. A slow callback therefore delays the ones registered
//! after it as well as the next message merge.

mod callback;

pub use callback::{CallbackRegistry, SubscriptionId};
