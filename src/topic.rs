// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topic construction and stream classification.

use crate::telemetry::{STREAMS, Stream};

/// Topic prefix used when none is configured.
pub const DEFAULT_TOPIC_PREFIX: &str = "brewos";

/// Suffix of the outbound command topic.
const COMMAND_SUFFIX: &str = "command";

/// Builds concrete topics for one machine and classifies inbound ones.
///
/// Topics follow `prefix/device_id/suffix`. A machine configured without a
/// device id publishes directly under `prefix/suffix`; the empty segment is
/// collapsed rather than left as a double slash.
///
/// # Examples
///
/// ```
/// use brewlink::topic::TopicRouter;
/// use brewlink::telemetry::Stream;
///
/// let topics = TopicRouter::new("brewos", "ecm01");
/// assert_eq!(topics.topic_for("status"), "brewos/ecm01/status");
/// assert_eq!(topics.command_topic(), "brewos/ecm01/command");
/// assert_eq!(topics.stream_for("brewos/ecm01/power"), Some(Stream::Power));
/// assert_eq!(topics.stream_for("brewos/other/power"), None);
///
/// let unkeyed = TopicRouter::new("brewos", "");
/// assert_eq!(unkeyed.topic_for("status"), "brewos/status");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRouter {
    prefix: String,
    device_id: String,
}

impl TopicRouter {
    /// Creates a router for one machine.
    pub fn new(prefix: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            device_id: device_id.into(),
        }
    }

    /// Returns the configured topic prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the configured device id (may be empty).
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Builds the concrete topic for a suffix.
    #[must_use]
    pub fn topic_for(&self, suffix: &str) -> String {
        if self.device_id.is_empty() {
            format!("{}/{}", self.prefix, suffix)
        } else {
            format!("{}/{}/{}", self.prefix, self.device_id, suffix)
        }
    }

    /// Builds the outbound command topic.
    #[must_use]
    pub fn command_topic(&self) -> String {
        self.topic_for(COMMAND_SUFFIX)
    }

    /// Returns the four inbound topics in subscription order.
    #[must_use]
    pub fn subscription_topics(&self) -> Vec<String> {
        STREAMS
            .iter()
            .map(|descriptor| self.topic_for(descriptor.suffix))
            .collect()
    }

    /// Classifies an inbound topic as one of this machine's streams.
    ///
    /// Returns `None` for topics of other machines or suffixes this library
    /// does not subscribe to; callers ignore those.
    #[must_use]
    pub fn stream_for(&self, topic: &str) -> Option<Stream> {
        let suffix = self.suffix_of(topic)?;
        STREAMS
            .iter()
            .find(|descriptor| descriptor.suffix == suffix)
            .map(|descriptor| descriptor.stream)
    }

    /// Strips this machine's topic base, yielding the bare suffix.
    fn suffix_of<'a>(&self, topic: &'a str) -> Option<&'a str> {
        let rest = topic
            .strip_prefix(self.prefix.as_str())?
            .strip_prefix('/')?;
        if self.device_id.is_empty() {
            Some(rest)
        } else {
            rest.strip_prefix(self.device_id.as_str())?.strip_prefix('/')
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_with_device_id() {
        let topics = TopicRouter::new("brewos", "abc123");
        assert_eq!(topics.topic_for("status"), "brewos/abc123/status");
        assert_eq!(topics.topic_for("availability"), "brewos/abc123/availability");
        assert_eq!(topics.command_topic(), "brewos/abc123/command");
    }

    #[test]
    fn topics_without_device_id_collapse_the_segment() {
        let topics = TopicRouter::new("brewos", "");
        assert_eq!(topics.topic_for("status"), "brewos/status");
        assert_eq!(topics.command_topic(), "brewos/command");
    }

    #[test]
    fn subscription_topics_cover_all_streams() {
        let topics = TopicRouter::new("brewos", "ecm01");
        assert_eq!(
            topics.subscription_topics(),
            vec![
                "brewos/ecm01/status",
                "brewos/ecm01/power",
                "brewos/ecm01/statistics",
                "brewos/ecm01/availability",
            ]
        );
    }

    #[test]
    fn stream_for_classifies_own_topics() {
        let topics = TopicRouter::new("brewos", "ecm01");
        assert_eq!(topics.stream_for("brewos/ecm01/status"), Some(Stream::Status));
        assert_eq!(topics.stream_for("brewos/ecm01/power"), Some(Stream::Power));
        assert_eq!(
            topics.stream_for("brewos/ecm01/statistics"),
            Some(Stream::Statistics)
        );
        assert_eq!(
            topics.stream_for("brewos/ecm01/availability"),
            Some(Stream::Availability)
        );
    }

    #[test]
    fn stream_for_without_device_id() {
        let topics = TopicRouter::new("brewos", "");
        assert_eq!(topics.stream_for("brewos/status"), Some(Stream::Status));
        assert_eq!(topics.stream_for("brewos/ecm01/status"), None);
    }

    #[test]
    fn stream_for_rejects_other_machines_and_suffixes() {
        let topics = TopicRouter::new("brewos", "ecm01");
        assert_eq!(topics.stream_for("brewos/other/status"), None);
        assert_eq!(topics.stream_for("brewos/ecm01/command"), None);
        assert_eq!(topics.stream_for("brewos/ecm01/shot"), None);
        assert_eq!(topics.stream_for("unrelated/ecm01/status"), None);
    }

    #[test]
    fn prefix_match_is_segment_aware() {
        let topics = TopicRouter::new("brew", "ecm01");
        // "brewos/..." must not match the shorter prefix "brew".
        assert_eq!(topics.stream_for("brewos/ecm01/status"), None);

        let topics = TopicRouter::new("brewos", "ecm");
        assert_eq!(topics.stream_for("brewos/ecm01/status"), None);
    }
}
