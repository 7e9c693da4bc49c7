// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `brewlink` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: telemetry decoding, protocol communication, and broker
//! configuration.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when interacting
/// with BrewOS machines.
#[derive(Debug, Error)]
pub enum Error {
    /// A telemetry payload could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// A telemetry payload failed to decode.
///
/// Raised when a message body is not valid JSON or when a present field does
/// not match its declared type. A failed decode drops the whole message; the
/// previous device state is kept untouched.
#[derive(Debug, Error)]
#[error("invalid {stream} payload: {source}")]
pub struct DecodeError {
    /// Name of the telemetry stream the payload arrived on.
    pub stream: &'static str,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

/// Errors related to protocol communication (MQTT).
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// MQTT connection or communication failed.
    #[cfg(feature = "mqtt")]
    #[error("MQTT error: {0}")]
    Mqtt(#[from] rumqttc::ClientError),

    /// Connection to the broker failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Internal channel was closed.
    #[error("channel closed: {0}")]
    ChannelClosed(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
