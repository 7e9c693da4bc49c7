// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boiler selector for temperature commands.

use std::fmt;

/// Selects which boiler a `set_temp` command targets.
///
/// # Examples
///
/// ```
/// use brewlink::types::Boiler;
///
/// assert_eq!(Boiler::Brew.as_str(), "brew");
/// assert_eq!(Boiler::Steam.as_str(), "steam");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boiler {
    /// The brew boiler.
    Brew,
    /// The steam boiler.
    Steam,
}

impl Boiler {
    /// Returns the wire name used in command payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brew => "brew",
            Self::Steam => "steam",
        }
    }
}

impl fmt::Display for Boiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boiler_wire_names() {
        assert_eq!(Boiler::Brew.as_str(), "brew");
        assert_eq!(Boiler::Steam.as_str(), "steam");
    }

    #[test]
    fn boiler_display() {
        assert_eq!(Boiler::Brew.to_string(), "brew");
        assert_eq!(Boiler::Steam.to_string(), "steam");
    }
}
