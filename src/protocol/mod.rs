// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for communicating with BrewOS machines.
//!
//! This module defines the transport abstraction the coordinator is generic
//! over, plus the MQTT implementation used in production.
//!
//! # Types
//!
//! - [`Transport`]: Trait for publish/subscribe message transports
//! - [`MessageHandler`]: Trait for receiving messages from a transport
//! - [`MessageRouter`]: Maps subscribed topics to their handlers
//! - [`MqttBroker`]: MQTT transport built on `rumqttc` (requires the `mqtt` feature)
//!
//! The coordinator only talks to [`Transport`], so tests can drive it with an
//! in-memory implementation and production code can use [`MqttBroker`].

#[cfg(feature = "mqtt")]
mod broker;
mod router;

#[cfg(feature = "mqtt")]
pub use broker::{MqttBroker, MqttBrokerBuilder, MqttBrokerConfig};
pub use router::MessageRouter;

use std::sync::Arc;

use crate::error::ProtocolError;

/// Trait for receiving messages delivered by a [`Transport`].
///
/// Implementations must be cheap and non-blocking; the transport invokes
/// `on_message` from its receive loop.
pub trait MessageHandler: Send + Sync {
    /// Called for every message arriving on a subscribed topic.
    ///
    /// The payload is the raw bytes as received from the wire.
    fn on_message(&self, topic: &str, payload: &[u8]);
}

/// Trait for publish/subscribe transports that can carry machine traffic.
///
/// The coordinator is generic over this trait. The MQTT implementation is
/// [`MqttBroker`]; tests use in-memory recording transports.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Publishes a payload to the given topic.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the message could not be handed to the
    /// transport.
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), ProtocolError>;

    /// Subscribes to a topic, delivering its messages to `handler`.
    ///
    /// The transport holds the handler weakly; dropping all strong references
    /// to it stops delivery without an explicit unsubscribe.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the subscription could not be established.
    async fn subscribe(
        &self,
        topic: &str,
        handler: &Arc<dyn MessageHandler>,
    ) -> Result<(), ProtocolError>;

    /// Unsubscribes from a topic.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the unsubscribe could not be sent.
    async fn unsubscribe(&self, topic: &str) -> Result<(), ProtocolError>;
}
