// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State coordinator for a BrewOS espresso machine.
//!
//! The [`Coordinator`] is the high-level entry point of this crate. It
//! subscribes to the machine's telemetry topics, merges every decoded
//! message into a single always-populated [`DeviceState`] snapshot, fans the
//! post-merge snapshot out to registered observers, and publishes commands
//! on the machine's command topic.
//!
//! One coordinator owns one machine. To talk to several machines on the same
//! broker, create one coordinator per device ID; cloned [`MqttBroker`]
//! handles share the underlying connection.
//!
//! [`MqttBroker`]: crate::protocol::MqttBroker
//!
//! # Examples
//!
//! ```no_run
//! use brewlink::Coordinator;
//! use brewlink::protocol::MqttBroker;
//!
//! # async fn example() -> brewlink::Result<()> {
//! let broker = MqttBroker::builder()
//!     .host("192.168.1.50")
//!     .port(1883)
//!     .build()
//!     .await?;
//!
//! let coordinator = Coordinator::builder(broker)
//!     .device_id("gs3_kitchen")
//!     .build();
//!
//! // Start listening for telemetry
//! coordinator.setup().await?;
//!
//! coordinator.on_update(|state| {
//!     println!("brew boiler at {:.1}C", state.brew_temp);
//! });
//!
//! // Wake the machine and start a shot
//! coordinator.set_mode("on").await?;
//! coordinator.brew_start().await?;
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::CoordinatorBuilder;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::command::CommandIntent;
use crate::error::Result;
use crate::protocol::{MessageHandler, Transport};
use crate::state::{DeviceState, StateStore};
use crate::subscription::{CallbackRegistry, SubscriptionId};
use crate::telemetry;
use crate::topic::TopicRouter;
use crate::types::{Boiler, HeatingStrategy};

/// Coordinates telemetry, state, and commands for one BrewOS machine.
///
/// The type parameter `T` is the transport carrying MQTT traffic. Production
/// code uses [`MqttBroker`](crate::protocol::MqttBroker); tests drive the
/// coordinator with in-memory transports.
///
/// All merges and fan-outs for one coordinator are serialized: observers see
/// every post-merge snapshot exactly once, in merge order.
pub struct Coordinator<T: Transport> {
    transport: T,
    inner: Arc<CoordinatorInner>,
}

/// Shared coordinator core.
///
/// This is the piece the transport holds (weakly) as its message handler,
/// so it carries everything message handling needs: topic layout, the state
/// store, and the observer registry.
struct CoordinatorInner {
    topics: TopicRouter,
    store: StateStore,
    callbacks: CallbackRegistry,
    /// Serializes merge plus fan-out per message.
    merge_gate: Mutex<()>,
}

impl CoordinatorInner {
    /// Inbound entry point: decodes, merges, and fans out one message.
    ///
    /// Messages on topics outside the subscribed streams are ignored. A
    /// payload that fails to decode is dropped whole; the stored state stays
    /// untouched and the subscription stays live.
    fn handle_message(&self, topic: &str, payload: &[u8]) {
        let Some(stream) = self.topics.stream_for(topic) else {
            tracing::trace!(topic = %topic, "Ignoring message on foreign topic");
            return;
        };

        let update = match telemetry::decode(stream, payload) {
            Ok(update) => update,
            Err(e) => {
                tracing::error!(topic = %topic, error = %e, "Dropping undecodable payload");
                return;
            }
        };

        // Merge and fan-out happen under one gate; observers see snapshots
        // in merge order, once per message.
        let _gate = self.merge_gate.lock();
        let snapshot = self.store.merge(&update);
        tracing::debug!(stream = %stream, "Merged telemetry update");
        self.callbacks.dispatch_update(&snapshot);
        if let Some(online) = update.available {
            self.callbacks.dispatch_availability(online);
        }
    }
}

impl MessageHandler for CoordinatorInner {
    fn on_message(&self, topic: &str, payload: &[u8]) {
        self.handle_message(topic, payload);
    }
}

impl<T: Transport> Coordinator<T> {
    /// Creates a builder for a coordinator using the given transport.
    #[must_use]
    pub fn builder(transport: T) -> CoordinatorBuilder<T> {
        CoordinatorBuilder::new(transport)
    }

    pub(crate) fn new(transport: T, topics: TopicRouter) -> Self {
        Self {
            transport,
            inner: Arc::new(CoordinatorInner {
                topics,
                store: StateStore::new(),
                callbacks: CallbackRegistry::new(),
                merge_gate: Mutex::new(()),
            }),
        }
    }

    /// Returns the topic prefix this coordinator listens under.
    #[must_use]
    pub fn topic_prefix(&self) -> &str {
        self.inner.topics.prefix()
    }

    /// Returns the device ID this coordinator is bound to.
    #[must_use]
    pub fn device_id(&self) -> &str {
        self.inner.topics.device_id()
    }

    // ========== Lifecycle ==========

    /// Subscribes to the machine's four telemetry topics.
    ///
    /// After this resolves, incoming messages are decoded, merged, and fanned
    /// out to observers.
    ///
    /// # Errors
    ///
    /// Returns error if any subscription fails. Subscriptions already
    /// established are left in place; calling `setup` again retries all four.
    pub async fn setup(&self) -> Result<()> {
        let handler: Arc<dyn MessageHandler> = self.inner.clone();
        for topic in self.inner.topics.subscription_topics() {
            self.transport.subscribe(&topic, &handler).await?;
        }
        tracing::info!(
            prefix = %self.inner.topics.prefix(),
            device = %self.inner.topics.device_id(),
            "Coordinator listening for telemetry"
        );
        Ok(())
    }

    /// Unsubscribes from all telemetry topics.
    ///
    /// Registered observers are kept; a later [`setup`](Self::setup) resumes
    /// delivery to them.
    ///
    /// # Errors
    ///
    /// Attempts every unsubscribe and returns the first failure, if any.
    pub async fn shutdown(&self) -> Result<()> {
        let mut first_err = None;
        for topic in self.inner.topics.subscription_topics() {
            if let Err(e) = self.transport.unsubscribe(&topic).await {
                tracing::warn!(topic = %topic, error = %e, "Failed to unsubscribe");
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
        match first_err {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    // ========== State Access ==========

    /// Returns a snapshot of the current machine state.
    ///
    /// The snapshot is a copy; it does not change as further telemetry
    /// arrives.
    #[must_use]
    pub fn snapshot(&self) -> DeviceState {
        self.inner.store.snapshot()
    }

    /// Returns whether the machine last reported itself online.
    #[must_use]
    pub fn available(&self) -> bool {
        self.inner.store.available()
    }

    /// Returns the time of the last successful merge, if any.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.inner.store.last_updated()
    }

    // ========== Subscriptions ==========

    /// Registers a callback invoked with the post-merge snapshot after every
    /// successful merge.
    pub fn on_update<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceState) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_update(callback)
    }

    /// Registers a callback invoked with the reported availability after
    /// every availability message.
    pub fn on_availability_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_availability_changed(callback)
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.callbacks.unsubscribe(id)
    }

    // ========== Commands ==========

    /// Publishes a command to the machine's command topic.
    ///
    /// Commands are fire-and-forget; state changes they cause arrive through
    /// the telemetry streams.
    ///
    /// # Errors
    ///
    /// Returns error if the publish fails.
    pub async fn send_command(&self, intent: &CommandIntent) -> Result<()> {
        let topic = self.inner.topics.command_topic();
        tracing::debug!(topic = %topic, command = %intent.name(), "Sending command");
        self.transport.publish(&topic, intent.to_bytes()).await?;
        Ok(())
    }

    /// Switches the machine mode (`"on"`, `"standby"`, `"eco"`).
    ///
    /// # Errors
    ///
    /// Returns error if the publish fails.
    pub async fn set_mode(&self, mode: impl Into<String>) -> Result<()> {
        self.send_command(&CommandIntent::set_mode(mode)).await
    }

    /// Starts a brew.
    ///
    /// # Errors
    ///
    /// Returns error if the publish fails.
    pub async fn brew_start(&self) -> Result<()> {
        self.send_command(&CommandIntent::brew_start()).await
    }

    /// Stops the running brew.
    ///
    /// # Errors
    ///
    /// Returns error if the publish fails.
    pub async fn brew_stop(&self) -> Result<()> {
        self.send_command(&CommandIntent::brew_stop()).await
    }

    /// Tares the integrated scale.
    ///
    /// # Errors
    ///
    /// Returns error if the publish fails.
    pub async fn tare(&self) -> Result<()> {
        self.send_command(&CommandIntent::tare()).await
    }

    /// Puts the machine into eco mode.
    ///
    /// # Errors
    ///
    /// Returns error if the publish fails.
    pub async fn enter_eco(&self) -> Result<()> {
        self.send_command(&CommandIntent::enter_eco()).await
    }

    /// Brings the machine out of eco mode.
    ///
    /// # Errors
    ///
    /// Returns error if the publish fails.
    pub async fn exit_eco(&self) -> Result<()> {
        self.send_command(&CommandIntent::exit_eco()).await
    }

    /// Sets a boiler setpoint in degrees Celsius.
    ///
    /// # Errors
    ///
    /// Returns error if the publish fails.
    pub async fn set_temp(&self, boiler: Boiler, temp: f64) -> Result<()> {
        self.send_command(&CommandIntent::set_temp(boiler, temp))
            .await
    }

    /// Sets the brew-by-weight target in grams.
    ///
    /// # Errors
    ///
    /// Returns error if the publish fails.
    pub async fn set_target_weight(&self, weight: f64) -> Result<()> {
        self.send_command(&CommandIntent::set_target_weight(weight))
            .await
    }

    /// Sets the boiler heating strategy.
    ///
    /// # Errors
    ///
    /// Returns error if the publish fails.
    pub async fn set_heating_strategy(&self, strategy: HeatingStrategy) -> Result<()> {
        self.send_command(&CommandIntent::set_heating_strategy(strategy))
            .await
    }
}

impl<T: Transport> std::fmt::Debug for Coordinator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("prefix", &self.inner.topics.prefix())
            .field("device_id", &self.inner.topics.device_id())
            .field("available", &self.available())
            .finish()
    }
}
