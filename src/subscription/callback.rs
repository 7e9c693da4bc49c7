// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for machine state subscriptions.
//!
//! This module provides the core types for managing subscription callbacks:
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Internal registry for storing and dispatching callbacks

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::state::DeviceState;

/// Unique identifier for a subscription.
///
/// This ID is returned when creating a subscription and can be used to
/// unsubscribe later. IDs are unique within a coordinator's lifetime.
///
/// # Examples
///
/// ```ignore
/// let sub_id = coordinator.on_update(|state| { /* ... */ });
///
/// // Later, unsubscribe
/// coordinator.unsubscribe(sub_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for state update callbacks (receives the post-merge snapshot).
type UpdateCallback = Arc<dyn Fn(&DeviceState) + Send + Sync>;

/// Type alias for availability callbacks.
type AvailabilityCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Registry for managing coordinator subscription callbacks.
///
/// This is an internal type used by the coordinator to store and dispatch
/// callbacks. It uses thread-safe interior mutability via
/// `parking_lot::RwLock` for high performance in async contexts.
///
/// # Ordering
///
/// Callbacks are keyed by their monotonically increasing [`SubscriptionId`]
/// in a `BTreeMap`, so dispatch always walks them in registration order.
///
/// # Thread Safety
///
/// The registry is fully thread-safe and can be accessed from multiple tasks
/// concurrently. Callbacks are wrapped in `Arc` so they can be cloned cheaply.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// State update callbacks, keyed in registration order.
    update_callbacks: RwLock<BTreeMap<SubscriptionId, UpdateCallback>>,
    /// Availability transition callbacks, keyed in registration order.
    availability_callbacks: RwLock<BTreeMap<SubscriptionId, AvailabilityCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            update_callbacks: RwLock::new(BTreeMap::new()),
            availability_callbacks: RwLock::new(BTreeMap::new()),
        }
    }

    /// Generates a new unique subscription ID.
    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for state updates.
    ///
    /// The callback receives the full post-merge state snapshot.
    pub fn on_update<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.update_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for availability changes.
    ///
    /// The callback receives `true` when the machine reports online and
    /// `false` otherwise.
    pub fn on_availability_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.availability_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        // Try each callback map until we find and remove the ID
        if self.update_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.availability_callbacks.write().remove(&id).is_some() {
            return true;
        }
        false
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.update_callbacks.write().clear();
        self.availability_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch methods
    // =========================================================================

    /// Dispatches a state snapshot to all update callbacks.
    ///
    /// Callbacks run synchronously in registration order. The map is
    /// snapshotted before invocation, so a callback may subscribe or
    /// unsubscribe without deadlocking; such changes take effect from the
    /// next dispatch.
    pub fn dispatch_update(&self, state: &DeviceState) {
        let callbacks: Vec<UpdateCallback> =
            self.update_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(state);
        }
    }

    /// Dispatches an availability transition to all availability callbacks.
    ///
    /// Same ordering and re-entrancy rules as [`dispatch_update`].
    ///
    /// [`dispatch_update`]: Self::dispatch_update
    pub fn dispatch_availability(&self, online: bool) {
        let callbacks: Vec<AvailabilityCallback> = self
            .availability_callbacks
            .read()
            .values()
            .cloned()
            .collect();
        for callback in callbacks {
            callback(online);
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.update_callbacks.read().len() + self.availability_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}
