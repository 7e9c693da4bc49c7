// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared state store with atomic merges.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use super::{DeviceState, StateUpdate};

/// Owns the device state on behalf of a coordinator.
///
/// Merges run under a mutex, so a reader taking a snapshot either sees the
/// state from before a merge or from after it, never a half-applied one.
/// [`snapshot`](Self::snapshot) hands out an owned copy rather than a
/// reference into the store.
///
/// The availability flag additionally lives in an [`AtomicBool`] so
/// [`available`](Self::available) does not contend with merges.
#[derive(Debug, Default)]
pub struct StateStore {
    inner: Mutex<Inner>,
    available: AtomicBool,
}

#[derive(Debug, Default)]
struct Inner {
    state: DeviceState,
    last_updated: Option<DateTime<Utc>>,
}

impl StateStore {
    /// Creates a store holding a fully-defaulted state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a partial update and returns the post-merge snapshot.
    pub fn merge(&self, update: &StateUpdate) -> DeviceState {
        let mut inner = self.inner.lock();
        inner.state.apply(update);
        if let Some(online) = update.available {
            self.available.store(online, Ordering::Release);
        }
        inner.last_updated = Some(Utc::now());
        inner.state.clone()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> DeviceState {
        self.inner.lock().state.clone()
    }

    /// Returns the availability flag.
    ///
    /// This is `false` until the machine's first `"online"` availability
    /// message and flips back to `false` on anything else, including the
    /// broker-published last-will payload.
    #[must_use]
    pub fn available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// Returns the instant of the last successful merge, if any.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.inner.lock().last_updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_returns_post_merge_snapshot() {
        let store = StateStore::new();
        let update = StateUpdate {
            machine_state: Some("heating".to_string()),
            brew_temp: Some(65.0),
            ..StateUpdate::default()
        };

        let snapshot = store.merge(&update);

        assert_eq!(snapshot.machine_state, "heating");
        assert!((snapshot.brew_temp - 65.0).abs() < f64::EPSILON);
        assert_eq!(store.snapshot(), snapshot);
    }

    #[test]
    fn merge_preserves_unrelated_fields() {
        let store = StateStore::new();
        store.merge(&StateUpdate {
            shots_today: Some(5),
            ..StateUpdate::default()
        });
        let snapshot = store.merge(&StateUpdate {
            machine_state: Some("brewing".to_string()),
            ..StateUpdate::default()
        });

        assert_eq!(snapshot.shots_today, 5);
        assert_eq!(snapshot.machine_state, "brewing");
    }

    #[test]
    fn snapshot_is_a_detached_copy() {
        let store = StateStore::new();
        let mut snapshot = store.snapshot();
        snapshot.machine_state = "fault".to_string();

        assert_eq!(store.snapshot().machine_state, "standby");
    }

    #[test]
    fn availability_flag_and_mirror_move_together() {
        let store = StateStore::new();
        assert!(!store.available());

        let snapshot = store.merge(&StateUpdate {
            available: Some(true),
            ..StateUpdate::default()
        });
        assert!(store.available());
        assert!(snapshot.available);

        store.merge(&StateUpdate {
            available: Some(false),
            ..StateUpdate::default()
        });
        assert!(!store.available());
        assert!(!store.snapshot().available);
    }

    #[test]
    fn last_updated_tracks_merges() {
        let store = StateStore::new();
        assert!(store.last_updated().is_none());

        store.merge(&StateUpdate::new());
        let first = store.last_updated().expect("merge recorded");

        store.merge(&StateUpdate::new());
        let second = store.last_updated().expect("merge recorded");
        assert!(second >= first);
    }
}
