// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Table-driven fallback decoding
//!
//! Subsystems without dedicated templates for (some of) their events are
//! rendered by [`generic`], which names the event via a table. Events not
//! covered by any table, and records of unknown subsystems, are rendered by
//! [`default`] as hex dumps.

use core::fmt::{self, Write};

use crate::record::Id;
use crate::tables;

/// Render a record using an event name table
///
/// Opening records are rendered as the subsystem `name`, the event's name and
/// the payload words. If the event is not in the `table`, [`default`] is used
/// instead. Continuation records only show the payload words.
pub fn generic<W: Write>(
    f: &mut W,
    table: &[&'static str],
    name: &str,
    id: Id,
    d1: u32,
    d2: u32,
    d3: u32,
) -> fmt::Result {
    match tables::lookup(table, id.event()) {
        Some(event) if !id.is_continuation() => {
            write!(f, "{name}: {event} 0x{d1:08x} 0x{d2:08x} 0x{d3:08x}")
        }
        _ => default(f, name, id, d1, d2, d3),
    }
}

/// Render a record as hex dump
///
/// Opening records are rendered as the subsystem `name`, the event code and
/// the payload words. Continuation records only show the payload words.
pub fn default<W: Write>(
    f: &mut W,
    name: &str,
    id: Id,
    d1: u32,
    d2: u32,
    d3: u32,
) -> fmt::Result {
    if id.is_continuation() {
        write!(f, "0x{d1:08x} 0x{d2:08x} 0x{d3:08x}")
    } else {
        let event = id.event();
        write!(f, "{name}: [0x{event:04x}] 0x{d1:08x} 0x{d2:08x} 0x{d3:08x}")
    }
}
