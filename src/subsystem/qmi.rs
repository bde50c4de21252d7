// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! QMI client (CCI) and service (CSI) events

use core::fmt::{self, Write};

use super::Context;
use crate::generic;
use crate::record::Id;
use crate::tables;
use crate::text::ByteChar;

const LEGACY_TX: u16 = 0;
const LEGACY_RX: u16 = 1;
const ERROR: u16 = 3;
const EXT_TX: u16 = 4;
const EXT_RX: u16 = 5;

/// Side of a QMI connection
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Service {
    /// Client interface (CCI)
    Client,
    /// Service interface (CSI)
    Server,
}

impl Service {
    /// Retrieve the name of the interface
    pub fn name(self) -> &'static str {
        match self {
            Self::Client => "QCCI",
            Self::Server => "QCSI",
        }
    }

    /// Retrieve the label of the peer address in extended events
    fn peer_label(self) -> &'static str {
        match self {
            Self::Client => "svc_addr",
            Self::Server => "clnt_addr",
        }
    }

    /// Retrieve the mask applied to words holding a file name character
    fn char_mask(self) -> u32 {
        match self {
            Self::Client => u32::MAX,
            Self::Server => 0xff,
        }
    }
}

pub(super) fn decode<W: Write>(
    f: &mut W,
    service: Service,
    ctx: Context<'_>,
    id: Id,
    d1: u32,
    d2: u32,
    d3: u32,
) -> fmt::Result {
    let name = service.name();
    let cont = id.is_continuation();
    let cntl = tables::lookup(&tables::QMI_CNTL, d1 >> 16).unwrap_or("UNK ");
    let (txn, msg, len) = (d1 & 0xffff, d2 >> 16, d2 & 0xffff);
    match id.event() {
        ERROR => {
            let slot = match service {
                Service::Client => &mut ctx.state.qmi_cci,
                Service::Server => &mut ctx.state.qmi_csi,
            };
            let mask = service.char_mask();
            if !cont {
                slot.store(d1 & mask, d2 & mask, d3 & mask);
                return Ok(());
            }
            let [c1, c2, c3] = slot.recall(name).map(ByteChar);
            let (c4, c5) = (ByteChar(d1 & mask), ByteChar(d2 & mask));
            write!(f, "{name}:   ERROR File = {c1}{c2}{c3}{c4}{c5}, Line={}", d3 as i32)
        }
        e @ (LEGACY_TX | LEGACY_RX) => {
            let dir = tables::QMI[usize::from(e)];
            write!(f, "{name}:   {dir} {cntl} Txn:0x{txn:x} Msg:0x{msg:x} Len:{len}")
        }
        EXT_TX | EXT_RX if cont => write!(
            f,
            " {}: {d1:04x}:{d2:04x}:{d3:04x}",
            service.peer_label()
        ),
        e @ (EXT_TX | EXT_RX) => {
            let dir = tables::QMI[usize::from(e - EXT_TX)];
            write!(
                f,
                "{name}:   {dir} {cntl} Txn:0x{txn:x} Msg:0x{msg:x} Len:{len} svc_id:0x{d3:x}"
            )
        }
        _ => generic::generic(f, &tables::QMI, name, id, d1, d2, d3),
    }
}
