// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Line headers
//!
//! Every message starts with a header naming the processor that emitted it and
//! the time relative to the first record of the session.

use core::fmt;
use core::num::NonZeroU32;

use crate::record::Processor;

/// Presentation of the time in a [`Header`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimeFormat {
    /// Raw ticks, in hex
    Ticks,
    /// Seconds, converted from ticks using the given rate
    Seconds(NonZeroU32),
}

/// Header of a message
///
/// # Example
///
/// ```
/// use smem_log::header::{Header, TimeFormat};
/// use smem_log::record::Processor;
///
/// let header = Header::new(Processor::Apps, 0x8000, TimeFormat::Ticks);
/// assert_eq!(header.to_string(), "APPS: 0x00008000    ");
///
/// let rate = smem_log::config::SLEEP_CLOCK_RATE;
/// let header = Header::new(Processor::Modem, 0x8000, TimeFormat::Seconds(rate));
/// assert_eq!(header.to_string(), "MODM:       1.000000    ");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub processor: Processor,
    /// Time relative to the session's base time, in ticks
    pub time: u32,
    pub format: TimeFormat,
}

impl Header {
    /// Create a new header
    pub fn new(processor: Processor, time: u32, format: TimeFormat) -> Self {
        Self {
            processor,
            time,
            format,
        }
    }

    /// Retrieve the time in seconds for the given clock rate
    pub fn seconds(&self, clock_rate: NonZeroU32) -> f64 {
        f64::from(self.time) / f64::from(clock_rate.get())
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            TimeFormat::Ticks => write!(f, "{:>4}: 0x{:08x}    ", self.processor, self.time),
            TimeFormat::Seconds(rate) => {
                write!(f, "{:>4}: {:14.6}    ", self.processor, self.seconds(rate))
            }
        }
    }
}

/// Render the header for a message
///
/// Only the two most significant bits of `processor_tag` are considered.
pub fn render_header(
    processor_tag: u32,
    relative_time: u32,
    ticks_mode: bool,
    clock_rate: NonZeroU32,
) -> Header {
    let format = if ticks_mode {
        TimeFormat::Ticks
    } else {
        TimeFormat::Seconds(clock_rate)
    };
    Header::new(Processor::from_id(processor_tag), relative_time, format)
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;

    use alloc::string::ToString;

    use crate::config::{HT_TIMER_CLOCK_RATE, SLEEP_CLOCK_RATE};

    #[test]
    fn processor_names() {
        let name = |tag| render_header(tag, 0, true, SLEEP_CLOCK_RATE).processor.name();
        assert_eq!(name(0x0000_0000), "MODM");
        assert_eq!(name(0x4000_0000), "QDSP");
        assert_eq!(name(0x8000_0000), "APPS");
        assert_eq!(name(0xc000_0000), "WCNS");
        assert_eq!(name(0x3fff_ffff), "MODM");
        assert_eq!(name(0xc006_0002), "WCNS");
    }

    #[test]
    fn ticks() {
        let header = render_header(0x4000_0000, 0xdead_beef, true, HT_TIMER_CLOCK_RATE);
        assert_eq!(header.to_string(), "QDSP: 0xdeadbeef    ");
    }

    #[test]
    fn seconds_ht_timer() {
        let header = render_header(0xc000_0000, 28_800_000, false, HT_TIMER_CLOCK_RATE);
        assert_eq!(header.to_string(), "WCNS:       1.500000    ");
    }

    #[test]
    fn seconds_zero() {
        let header = render_header(0, 0, false, HT_TIMER_CLOCK_RATE);
        assert_eq!(header.to_string(), "MODM:       0.000000    ");
    }
}
