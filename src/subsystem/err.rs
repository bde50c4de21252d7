// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Fatal error events
//!
//! Fatal errors span two records. The opening record carries the first 12
//! bytes of a file or task name, the continuation the remaining 8 bytes
//! followed by either the line number or the address of the task's control
//! block.

use core::fmt::{self, Write};

use super::Context;
use crate::generic;
use crate::record::Id;
use crate::tables;
use crate::text::Packed;

const EVENT_FATAL: u16 = 1;
const EVENT_FATAL_TASK: u16 = 2;

pub(super) fn decode<W: Write>(
    f: &mut W,
    ctx: Context<'_>,
    id: Id,
    d1: u32,
    d2: u32,
    d3: u32,
) -> fmt::Result {
    let event = id.event();
    if event != EVENT_FATAL && event != EVENT_FATAL_TASK {
        return generic::generic(f, &tables::ERR, "ERR", id, d1, d2, d3);
    }

    let slot = &mut ctx.state.err;
    if !id.is_continuation() {
        slot.store(d1, d2, d3);
        return f.write_str("ERR: FATAL ");
    }

    let [s1, s2, s3] = slot.recall("ERR");
    let name = Packed::<20>::from_words(&[s1, s2, s3, d1, d2]);
    if event == EVENT_FATAL {
        write!(f, " file: \"{name}\" line: {}", d3 as i32)
    } else {
        write!(f, " task: \"{name}\" tcb addr: 0x{d3:08x}")
    }
}
