// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Configuration and utilities

#[cfg(feature = "serde")]
pub mod serde_utils;

use core::num::NonZeroU32;

/// Rate of the high-frequency (HT) timer in ticks per second
pub const HT_TIMER_CLOCK_RATE: NonZeroU32 = NonZeroU32::new(19_200_000).unwrap();

/// Rate of the sleep clock in ticks per second
pub const SLEEP_CLOCK_RATE: NonZeroU32 = NonZeroU32::new(32_768).unwrap();

/// Output options
///
/// Options affect only the presentation of decoded records, i.e. how the
/// line header is rendered and how lines are separated. They do not change
/// how payloads are interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Display relative times as raw ticks rather than seconds
    #[cfg_attr(feature = "serde", serde(with = "serde_utils::Flag"))]
    pub ticks: bool,
    /// Ticks per second used for converting timestamps to seconds
    ///
    /// Depending on the firmware, timestamps are taken either from the sleep
    /// clock ([`SLEEP_CLOCK_RATE`]) or from the HT timer
    /// ([`HT_TIMER_CLOCK_RATE`]).
    pub clock_rate: NonZeroU32,
    /// Emit a line break before every line header
    #[cfg_attr(feature = "serde", serde(with = "serde_utils::Flag"))]
    pub newline_before_header: bool,
}

/// See [OPTIONS] for default values of individual fields
impl Default for Options {
    fn default() -> Self {
        OPTIONS
    }
}

/// Default [Options]
pub const OPTIONS: Options = Options {
    ticks: false,
    clock_rate: HT_TIMER_CLOCK_RATE,
    newline_before_header: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert!(!options.ticks);
        assert!(options.newline_before_header);
        assert_eq!(options.clock_rate.get(), 19_200_000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn flags_from_toml() {
        let options: Options = toml::from_str("ticks = 1\nnewline_before_header = false\n")
            .expect("Could not parse options");
        assert_eq!(
            options,
            Options {
                ticks: true,
                newline_before_header: false,
                ..OPTIONS
            },
        );

        let options: Options = toml::from_str("clock_rate = 32768").expect("Could not parse options");
        assert_eq!(options.clock_rate, SLEEP_CLOCK_RATE);
        assert!(toml::from_str::<Options>("ticks = 2").is_err());
    }
}
