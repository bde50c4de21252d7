// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Debug events: SMSM interrupts, proxy dispatch and QMUX traffic

use core::fmt::{self, Write};

use crate::record::Id;
use crate::tables;

const SMSM_RX_INTR: u16 = 1;
const SMSM_TX_INTR: u16 = 2;
const QMUX_RX: u16 = 3;
const QMUX_TX: u16 = 4;
const PROXY_DISPATCH: u16 = 100;

pub(super) fn decode<W: Write>(f: &mut W, id: Id, d1: u32, d2: u32, d3: u32) -> fmt::Result {
    let host = || tables::name_or_unknown(&tables::SMSM_HOSTS, d1);
    match id.event() {
        PROXY_DISPATCH => write!(f, "PROXY: dispatch to {d1:08x}, queue len = {}", d2 as i32),
        SMSM_RX_INTR => write!(
            f,
            "SMSM Rx Intr: From = {}, Shadow={d2:08x},  Shared={d3:08x}",
            host()
        ),
        SMSM_TX_INTR => write!(
            f,
            "SMSM Tx Intr: To  =  {}, Shadow={d2:08x},  Shared={d3:08x}",
            host()
        ),
        QMUX_RX | QMUX_TX if id.is_continuation() => write!(
            f,
            "clint_id: {}, qmi_inst: {}; msg_cntl: 0x{:02x}, tx_id: {}",
            d1 as i32,
            d2 >> 16,
            d2 & 0xffff,
            d3 as i32,
        ),
        e @ (QMUX_RX | QMUX_TX) => {
            let dir = if e == QMUX_RX { "RX" } else { "TX" };
            write!(
                f,
                "QMUX: {dir}, len: {}, ctl_flags: 0x{d2:02x}, svc_type: {}, ",
                d1 as i32, d3 as i32,
            )
        }
        _ if id.is_continuation() => write!(f, "0x{d1:08x} 0x{d2:08x} 0x{d3:08x} "),
        _ => write!(f, "DEBUG: 0x{d1:08x} 0x{d2:08x} 0x{d3:08x} "),
    }
}
