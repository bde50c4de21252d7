// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! SMEM and SMD stream events

use core::fmt::{self, Write};

use super::{Context, event_cb};
use crate::generic;
use crate::record::Id;
use crate::tables::{self, name_or_unknown};

const EVENT_CB: u16 = 0;
const EVENT_SS: u16 = 6;
const EVENT_READ: u16 = 7;
const EVENT_WRITE: u16 = 8;
const EVENT_SIGS1: u16 = 9;
const EVENT_SIGS2: u16 = 10;
const EVENT_RS: u16 = 17;
const EVENT_WRITE_INDEX: u16 = 0x2000;
const SMDI_INIT: u16 = 0xbcbc;

pub(super) fn decode<W: Write>(
    f: &mut W,
    ctx: Context<'_>,
    id: Id,
    d1: u32,
    d2: u32,
    d3: u32,
) -> fmt::Result {
    let states = &tables::SMEM_STREAM_STATES;
    let port = d1 as i32;
    match id.event() {
        EVENT_CB => event_cb(f, ctx.header, "SMEM:   ", d1, d2, d3),
        EVENT_SS => write!(
            f,
            "SMEM: EVENT SS  port {port}  state = {}  event = {}",
            name_or_unknown(states, d2),
            name_or_unknown(&tables::SMEM_STREAM_EVENTS, d3),
        ),
        e @ (EVENT_READ | EVENT_WRITE) => {
            let dir = if e == EVENT_READ { "READ" } else { "WRITE" };
            let port = d2 as i32;
            if d1 == 0 {
                write!(f, "SMEM: EVENT {dir} enter port {port}")
            } else {
                write!(f, "SMEM: EVENT {dir} exit port {port} ({})", d1 as i32)
            }
        }
        EVENT_SIGS1 => write!(
            f,
            "SMEM: EVENT SIGS  port {port} received {d2:08x} converted to {d3:08x}"
        ),
        EVENT_SIGS2 => write!(f, "SMEM: EVENT_SIGS  port {port}  old = {d2:08x}  new = {d3:08x}"),
        EVENT_RS => write!(
            f,
            "SMEM: EVENT_REMOTE_STATE  port {port}  old = {}  new = {}",
            name_or_unknown(states, d2),
            name_or_unknown(states, d3),
        ),
        EVENT_WRITE_INDEX => write!(
            f,
            "SMEM: EVENT WRITE port {port}  write_index = {}  byte_count = {}",
            d2 as i32, d3 as i32,
        ),
        SMDI_INIT => write!(f, "SMEM: SMDI INIT  Channel table entry = {port} bytes"),
        _ => generic::generic(f, &tables::SMEM, "SMEM", id, d1, d2, d3),
    }
}
