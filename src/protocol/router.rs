// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topic routing for transport subscriptions.
//!
//! The [`MessageRouter`] maps subscribed topics to their message handlers.
//! It holds weak references so a handler can be dropped without explicit
//! cleanup; stale entries are skipped during routing and removed by
//! [`MessageRouter::cleanup`].

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::protocol::MessageHandler;

/// Routes incoming messages to the handler subscribed to their topic.
///
/// Topics are matched exactly as subscribed; the router does not interpret
/// MQTT wildcards.
#[derive(Default)]
pub struct MessageRouter {
    /// Map from subscribed topic to weak reference to its handler.
    subscribers: RwLock<HashMap<String, Weak<dyn MessageHandler>>>,
}

impl MessageRouter {
    /// Creates a new empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for the given topic.
    ///
    /// If a previous registration exists for this topic, it will be replaced.
    pub fn register(&self, topic: impl Into<String>, handler: &Arc<dyn MessageHandler>) {
        let topic = topic.into();
        tracing::debug!(topic = %topic, "Registering handler for routing");
        self.subscribers
            .write()
            .insert(topic, Arc::downgrade(handler));
    }

    /// Unregisters the handler for a topic.
    ///
    /// Returns `true` if a registration was removed.
    pub fn unregister(&self, topic: &str) -> bool {
        tracing::debug!(topic = %topic, "Unregistering handler from routing");
        self.subscribers.write().remove(topic).is_some()
    }

    /// Routes a message to the handler registered for its topic.
    ///
    /// Returns `true` if a live handler received the message.
    pub fn route(&self, topic: &str, payload: &[u8]) -> bool {
        let handler = {
            let subscribers = self.subscribers.read();
            subscribers.get(topic).and_then(Weak::upgrade)
        };

        let Some(handler) = handler else {
            tracing::trace!(topic = %topic, "No registered handler for topic");
            return false;
        };

        handler.on_message(topic, payload);
        true
    }

    /// Removes stale entries (handlers that have been dropped).
    pub fn cleanup(&self) {
        self.subscribers.write().retain(|topic, weak| {
            let alive = weak.strong_count() > 0;
            if !alive {
                tracing::debug!(topic = %topic, "Cleaning up dropped handler");
            }
            alive
        });
    }

    /// Returns the number of registered topics.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Returns the number of topics whose handler is still alive.
    #[must_use]
    pub fn active_subscription_count(&self) -> usize {
        self.subscribers
            .read()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

impl std::fmt::Debug for MessageRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageRouter")
            .field("subscription_count", &self.subscription_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct CountingHandler {
        calls: AtomicU32,
    }

    impl MessageHandler for CountingHandler {
        fn on_message(&self, _topic: &str, _payload: &[u8]) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct RecordingHandler {
        messages: Mutex<Vec<(String, Vec<u8>)>>,
    }

    impl MessageHandler for RecordingHandler {
        fn on_message(&self, topic: &str, payload: &[u8]) {
            self.messages
                .lock()
                .push((topic.to_string(), payload.to_vec()));
        }
    }

    #[test]
    fn router_register_and_route() {
        let router = MessageRouter::new();
        let counting = Arc::new(CountingHandler::default());
        let handler: Arc<dyn MessageHandler> = counting.clone();

        router.register("brewos/gs3/status", &handler);
        assert_eq!(router.subscription_count(), 1);

        let routed = router.route("brewos/gs3/status", b"{}");
        assert!(routed);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn router_passes_topic_and_raw_bytes() {
        let router = MessageRouter::new();
        let recording = Arc::new(RecordingHandler::default());
        let handler: Arc<dyn MessageHandler> = recording.clone();

        router.register("brewos/gs3/availability", &handler);
        router.route("brewos/gs3/availability", b"online");

        let messages = recording.messages.lock();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, "brewos/gs3/availability");
        assert_eq!(messages[0].1, b"online");
    }

    #[test]
    fn router_unregistered_topic() {
        let router = MessageRouter::new();

        let routed = router.route("brewos/unknown/status", b"{}");
        assert!(!routed);
    }

    #[test]
    fn router_requires_exact_topic_match() {
        let router = MessageRouter::new();
        let counting = Arc::new(CountingHandler::default());
        let handler: Arc<dyn MessageHandler> = counting.clone();

        router.register("brewos/gs3/status", &handler);

        assert!(!router.route("brewos/gs3/power", b"{}"));
        assert!(!router.route("brewos/gs3/status/extra", b"{}"));
        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn router_unregister() {
        let router = MessageRouter::new();
        let handler: Arc<dyn MessageHandler> = Arc::new(CountingHandler::default());

        router.register("brewos/gs3/status", &handler);
        assert_eq!(router.subscription_count(), 1);

        let removed = router.unregister("brewos/gs3/status");
        assert!(removed);
        assert_eq!(router.subscription_count(), 0);

        assert!(!router.route("brewos/gs3/status", b"{}"));
    }

    #[test]
    fn router_cleanup_dropped_handler() {
        let router = MessageRouter::new();

        {
            let handler: Arc<dyn MessageHandler> = Arc::new(CountingHandler::default());
            router.register("brewos/temp/status", &handler);
            assert_eq!(router.active_subscription_count(), 1);
        }
        // handler dropped here

        // Count still shows 1 (stale entry)
        assert_eq!(router.subscription_count(), 1);
        // But active count is 0
        assert_eq!(router.active_subscription_count(), 0);
        assert!(!router.route("brewos/temp/status", b"{}"));

        // Cleanup removes stale entries
        router.cleanup();
        assert_eq!(router.subscription_count(), 0);
    }

    #[test]
    fn router_multiple_topics() {
        let router = MessageRouter::new();

        let counting1 = Arc::new(CountingHandler::default());
        let handler1: Arc<dyn MessageHandler> = counting1.clone();
        let counting2 = Arc::new(CountingHandler::default());
        let handler2: Arc<dyn MessageHandler> = counting2.clone();

        router.register("brewos/gs3/status", &handler1);
        router.register("brewos/gs3/power", &handler2);

        router.route("brewos/gs3/status", b"{}");
        assert_eq!(counting1.calls.load(Ordering::SeqCst), 1);
        assert_eq!(counting2.calls.load(Ordering::SeqCst), 0);

        router.route("brewos/gs3/power", b"{}");
        assert_eq!(counting1.calls.load(Ordering::SeqCst), 1);
        assert_eq!(counting2.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn router_replace_registration() {
        let router = MessageRouter::new();

        let counting1 = Arc::new(CountingHandler::default());
        let handler1: Arc<dyn MessageHandler> = counting1.clone();
        let counting2 = Arc::new(CountingHandler::default());
        let handler2: Arc<dyn MessageHandler> = counting2.clone();

        router.register("brewos/gs3/status", &handler1);
        router.register("brewos/gs3/status", &handler2); // Replace

        router.route("brewos/gs3/status", b"{}");
        assert_eq!(counting1.calls.load(Ordering::SeqCst), 0);
        assert_eq!(counting2.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn router_debug() {
        let router = MessageRouter::new();
        let debug = format!("{router:?}");
        assert!(debug.contains("MessageRouter"));
        assert!(debug.contains("subscription_count"));
    }
}
