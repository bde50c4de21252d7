// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Shared memory state machine (SMSM) state words
//!
//! An SMSM state word encodes the synchronization state of the apps and modem
//! processors, the inter-processor interrupt bytes exchanged between them and
//! a number of single-bit flags. [`State`] renders such a word as a sequence
//! of `|`-separated tokens.

use core::fmt;

use crate::tables;

const SYNC_STATE_MASK: u32 = 0xf;
const MODEM_STATE_SHIFT: u32 = 0;
const APPS_STATE_SHIFT: u32 = 4;
const IPI_MODEM_APPS_SHIFT: u32 = 16;
const IPI_APPS_MODEM_SHIFT: u32 = 24;

/// Single-bit flags and their labels, in order of appearance
static FLAGS: [(u32, &str); 13] = [
    (0x0001_0000, "RESET_A"),
    (0x0002_0000, "RESET_M"),
    (0x0004_0000, "RPM_ACT"),
    (0x0008_0000, "SLEEP_V"),
    (0x0010_0000, "SMD_E"),
    (0x0020_0000, "PROXY_A"),
    (0x0040_0000, "SHR_A"),
    (0x0080_0000, "SENSORS"),
    (0x0100_0000, "QMI_FWD"),
    (0x0200_0000, "SSR_SHD"),
    (0x0400_0000, "MPU_SHD"),
    (0x0800_0000, "APPS_DBG"),
    (0x1000_0000, "WCNSS"),
];

/// Render an SMSM state word
///
/// # Example
///
/// ```
/// use smem_log::smsm::format_state;
///
/// let state = format_state(0x0044_0150);
/// assert_eq!(
///     state.to_string(),
///     "APPS:READY | MODEM:OFF | IPI_M2A:0x44 | IPI_A2M:0x00 | RPM_ACT | SHR_A",
/// );
/// ```
pub fn format_state(word: u32) -> State {
    State(word)
}

/// SMSM state word, displayable as a description
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct State(pub u32);

impl State {
    /// Synchronization state of the apps processor
    pub fn apps(self) -> &'static str {
        sync_state((self.0 >> APPS_STATE_SHIFT) & SYNC_STATE_MASK)
    }

    /// Synchronization state of the modem processor
    pub fn modem(self) -> &'static str {
        sync_state((self.0 >> MODEM_STATE_SHIFT) & SYNC_STATE_MASK)
    }

    /// Interrupt byte sent from the modem to the apps processor
    pub fn ipi_modem_to_apps(self) -> u8 {
        (self.0 >> IPI_MODEM_APPS_SHIFT) as u8
    }

    /// Interrupt byte sent from the apps processor to the modem
    pub fn ipi_apps_to_modem(self) -> u8 {
        (self.0 >> IPI_APPS_MODEM_SHIFT) as u8
    }

    /// Iterate over the labels of all flags set
    pub fn flags(self) -> impl Iterator<Item = &'static str> {
        FLAGS
            .iter()
            .filter(move |(mask, _)| self.0 & mask != 0)
            .map(|(_, label)| *label)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "APPS:{} | MODEM:{} | IPI_M2A:0x{:02x} | IPI_A2M:0x{:02x}",
            self.apps(),
            self.modem(),
            self.ipi_modem_to_apps(),
            self.ipi_apps_to_modem(),
        )?;
        self.flags().try_for_each(|l| write!(f, " | {l}"))
    }
}

fn sync_state(index: u32) -> &'static str {
    tables::lookup(&tables::SMSM_STATES, index).unwrap_or("INV")
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;

    use alloc::string::ToString;
    use core::fmt::Write;

    use crate::text::Bounded;

    macro_rules! state_test {
        ($n:ident, $w:literal, $s:literal) => {
            #[test]
            fn $n() {
                assert_eq!(format_state($w).to_string(), $s);
            }
        };
    }

    state_test!(zero, 0, "APPS:OFF | MODEM:OFF | IPI_M2A:0x00 | IPI_A2M:0x00");
    state_test!(
        ready,
        0x0000_0055,
        "APPS:READY | MODEM:READY | IPI_M2A:0x00 | IPI_A2M:0x00"
    );
    state_test!(
        invalid_states,
        0x0000_00f8,
        "APPS:INV | MODEM:INV | IPI_M2A:0x00 | IPI_A2M:0x00"
    );
    state_test!(
        resets,
        0x0003_0027,
        "APPS:BOOT | MODEM:RST | IPI_M2A:0x03 | IPI_A2M:0x00 | RESET_A | RESET_M"
    );
    state_test!(
        all_flags,
        0x1fff_0000,
        "APPS:OFF | MODEM:OFF | IPI_M2A:0xff | IPI_A2M:0x1f | RESET_A | RESET_M | RPM_ACT \
        | SLEEP_V | SMD_E | PROXY_A | SHR_A | SENSORS | QMI_FWD | SSR_SHD | MPU_SHD \
        | APPS_DBG | WCNSS"
    );
    state_test!(
        upper_bits_ignored,
        0xe000_0011,
        "APPS:DOWN | MODEM:DOWN | IPI_M2A:0x00 | IPI_A2M:0xe0"
    );

    #[test]
    fn truncated_into_bounded() {
        let mut buf = Bounded::<16>::new();
        write!(buf, "{}", format_state(0x1fff_0055)).unwrap();
        assert_eq!(buf.as_str(), "APPS:READY | MOD");
        assert!(buf.is_truncated());
    }
}
