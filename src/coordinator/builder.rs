// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinator builder.

use crate::coordinator::Coordinator;
use crate::protocol::Transport;
use crate::topic::{DEFAULT_TOPIC_PREFIX, TopicRouter};

/// Builder for creating a [`Coordinator`].
///
/// The defaults match a stock BrewOS firmware configuration: topic prefix
/// `"brewos"` and an empty device ID (the firmware's single-device topic
/// layout, `brewos/status` and friends).
///
/// # Examples
///
/// ```no_run
/// use brewlink::Coordinator;
/// use brewlink::protocol::MqttBroker;
///
/// # async fn example() -> brewlink::Result<()> {
/// let broker = MqttBroker::builder()
///     .host("192.168.1.50")
///     .build()
///     .await?;
///
/// let coordinator = Coordinator::builder(broker)
///     .topic_prefix("brewos")
///     .device_id("gs3_kitchen")
///     .build();
///
/// coordinator.setup().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CoordinatorBuilder<T: Transport> {
    transport: T,
    topic_prefix: String,
    device_id: String,
}

impl<T: Transport> CoordinatorBuilder<T> {
    /// Creates a new builder with the default topic layout.
    pub(crate) fn new(transport: T) -> Self {
        Self {
            transport,
            topic_prefix: DEFAULT_TOPIC_PREFIX.to_string(),
            device_id: String::new(),
        }
    }

    /// Sets the topic prefix (default: `"brewos"`).
    #[must_use]
    pub fn topic_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.topic_prefix = prefix.into();
        self
    }

    /// Sets the device ID segment of the topic layout.
    ///
    /// An empty device ID collapses topics to `prefix/suffix`, matching
    /// firmware configured without a device ID.
    #[must_use]
    pub fn device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = device_id.into();
        self
    }

    /// Builds the coordinator.
    ///
    /// Building does not touch the transport; call
    /// [`setup`](Coordinator::setup) to start receiving telemetry.
    #[must_use]
    pub fn build(self) -> Coordinator<T> {
        Coordinator::new(
            self.transport,
            TopicRouter::new(self.topic_prefix, self.device_id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use crate::protocol::MessageHandler;
    use std::sync::Arc;

    struct NullTransport;

    impl Transport for NullTransport {
        async fn publish(
            &self,
            _topic: &str,
            _payload: Vec<u8>,
        ) -> Result<(), ProtocolError> {
            Ok(())
        }

        async fn subscribe(
            &self,
            _topic: &str,
            _handler: &Arc<dyn MessageHandler>,
        ) -> Result<(), ProtocolError> {
            Ok(())
        }

        async fn unsubscribe(&self, _topic: &str) -> Result<(), ProtocolError> {
            Ok(())
        }
    }

    #[test]
    fn builder_defaults() {
        let builder = CoordinatorBuilder::new(NullTransport);
        assert_eq!(builder.topic_prefix, "brewos");
        assert!(builder.device_id.is_empty());
    }

    #[test]
    fn builder_chain() {
        let coordinator = CoordinatorBuilder::new(NullTransport)
            .topic_prefix("espresso")
            .device_id("gs3_kitchen")
            .build();

        assert_eq!(coordinator.topic_prefix(), "espresso");
        assert_eq!(coordinator.device_id(), "gs3_kitchen");
    }

    #[test]
    fn builder_empty_device_id_collapses_topics() {
        let coordinator = CoordinatorBuilder::new(NullTransport).build();
        assert_eq!(coordinator.topic_prefix(), "brewos");
        assert!(coordinator.device_id().is_empty());
    }
}
