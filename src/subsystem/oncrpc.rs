// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! ONCRPC events
//!
//! Besides the RPC lifecycle, the ONCRPC subsystem carries QMI events of older
//! firmware, distinguished by a non-zero secondary subsystem field.
//!
//! The secondary subsystem field overlaps the event code: events `0x10` and
//! above are always rendered as QMI events. The templates for `ERR_AUTH`
//! through `ERR_VERS_MISMATCH`, `CALL_START`, `DISPATCH_PROXY`, `HANDLE_CALL`
//! and `MSG_DONE` are thus unreachable. They mirror the event table.

use core::fmt::{self, Write};

use super::{Context, event_cb, qmi};
use crate::generic;
use crate::record::Id;
use crate::tables;
use crate::text::Packed;

const SUBSYS_MASK: u32 = 0xf0;
const SUBSYS_QMI_CCI: u32 = 0x30;

const EVENT_CB: u16 = 9;
const STD_CALL: u16 = 10;
const STD_REPLY: u16 = 11;
const STD_CALL_ASYNC: u16 = 12;
const ERR_NO_PROC: u16 = 13;
const ERR_VERS_MISMATCH: u16 = 20;
const CALL_START: u16 = 21;
const DISPATCH_PROXY: u16 = 22;
const HANDLE_CALL: u16 = 23;
const MSG_DONE: u16 = 24;

/// Error descriptions for events `ERR_NO_PROC` through `ERR_VERS_MISMATCH`
static ERRORS: [&str; 8] = [
    "PROC NOT SUPPORTED   ",
    "ARGS DECODE FAILED   ",
    "SYSTEM FAULT  ",
    "AUTHENTICATION FAILED  ",
    "PROG NOT EXPORTED  ",
    "PROG LOCKED  ",
    "PROG VERS NOT SUPPORTED  ",
    "RPC VERS NOT SUPPORTED   ",
];

/// RPC program identifier
///
/// Programs are not resolved to names.
struct Program(u32);

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

pub(super) fn decode<W: Write>(
    f: &mut W,
    ctx: Context<'_>,
    id: Id,
    d1: u32,
    d2: u32,
    d3: u32,
) -> fmt::Result {
    let subsys = id.raw() & SUBSYS_MASK;
    if subsys != 0 {
        let id = Id::new(id.raw() & !SUBSYS_MASK);
        let service = if subsys == SUBSYS_QMI_CCI {
            qmi::Service::Client
        } else {
            qmi::Service::Server
        };
        return qmi::decode(f, service, ctx, id, d1, d2, d3);
    }

    let prog = Program(d2);
    let proc = d3 as i32;
    let label = match id.event() {
        e @ ERR_NO_PROC..=ERR_VERS_MISMATCH => {
            let error = ERRORS[usize::from(e - ERR_NO_PROC)];
            return write!(
                f,
                "ONCRPC: ERROR {error}xid = {d1:08x}    proc = {proc:3}    prog = {prog}"
            );
        }
        EVENT_CB => return event_cb(f, ctx.header, "ONCRPC: ", d1, d2, d3),
        DISPATCH_PROXY => {
            return write!(f, "ONCRPC: DISPATCH  xid = {d1:08x}    func = {d2:08x}");
        }
        STD_CALL => "CALL",
        STD_REPLY => "REPLY",
        STD_CALL_ASYNC => "ASYNC",
        CALL_START => "START",
        HANDLE_CALL => "HANDLE",
        MSG_DONE => "DONE",
        _ => return generic::generic(f, &tables::ONCRPC, "ONCRPC", id, d1, d2, d3),
    };

    if id.is_continuation() {
        let task = Packed::<12>::from_words(&[d1, d2, d3]);
        write!(f, "    task = {task}")
    } else {
        write!(
            f,
            "ONCRPC: {label:<8}xid = {d1:08x}    proc = {proc:3}    prog = {prog}"
        )
    }
}
