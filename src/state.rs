// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Continuation state
//!
//! Some messages span two records: the opening record carries the first part
//! of the payload, which is kept in a [`Slot`] until the continuation record
//! arrives. The wire format carries no message id. A continuation is thus
//! always paired with the last opening record of the same subsystem, which
//! requires that no other message of that subsystem is interleaved.

/// Payload saved from an opening record
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    words: [u32; 3],
    armed: bool,
}

impl Slot {
    /// Save the payload of an opening record
    pub fn store(&mut self, d1: u32, d2: u32, d3: u32) {
        self.words = [d1, d2, d3];
        self.armed = true;
    }

    /// Retrieve the saved payload for a continuation record
    ///
    /// The payload remains available for further continuations. If no
    /// opening record was seen since the last recall, the stale (or, for a
    /// fresh session, zeroed) payload is returned.
    pub fn recall(&mut self, subsystem: &str) -> [u32; 3] {
        if !self.armed {
            log::debug!("{subsystem}: continuation without opening record");
        }
        self.armed = false;
        self.words
    }

    /// Whether an opening record was stored but not yet recalled
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Slots of all subsystems with two-record messages
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Store {
    /// Fatal error file or task name
    pub err: Slot,
    /// QMI client error file name
    pub qmi_cci: Slot,
    /// QMI service error file name
    pub qmi_csi: Slot,
}
