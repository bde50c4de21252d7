// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! RPC router and IPC router events

use core::fmt::{self, Write};

use crate::generic;
use crate::record::Id;
use crate::tables;

/// First RPC router event denoting an IPC router event
///
/// IPC router events used to be logged through the RPC router, with event
/// codes offset by this value.
const LEGACY_IPC_OFFSET: u32 = 16;

mod rpc {
    pub const CNF_REQ: u32 = 3;
    pub const CNF_SNT: u32 = 4;
    pub const MID_READ: u32 = 5;
    pub const MID_WRITTEN: u32 = 6;
    pub const MID_CNF_REQ: u32 = 7;
    pub const PING: u32 = 8;
    pub const SERVER_PENDING: u32 = 9;
    pub const SERVER_REGISTERED: u32 = 10;
}

mod ipc {
    pub const CALL: u16 = 0;
    pub const REPLY: u16 = 1;
    pub const INDICATION: u16 = 2;
    pub const EVENT: u16 = 3;
    pub const CONNECT_NAME: u16 = 4;
    pub const CONNECT_ADDR: u16 = 5;
    pub const DISCONNECT_ADDR: u16 = 6;
}

/// Decode an RPC router event
///
/// The low byte of the event code holds the event, the following byte the
/// control type.
pub(super) fn decode_rpc<W: Write>(f: &mut W, id: Id, d1: u32, d2: u32, d3: u32) -> fmt::Result {
    let event = id.raw() & 0xff;
    let Some(cntrl) = tables::lookup(&tables::RPC_ROUTER, event) else {
        return generic::default(f, "ROUTER", id, d1, d2, d3);
    };

    match event {
        e if e >= LEGACY_IPC_OFFSET => {
            decode_ipc(f, Id::new(id.raw().wrapping_sub(LEGACY_IPC_OFFSET)), d1, d2, d3)
        }
        rpc::CNF_REQ | rpc::CNF_SNT => write!(
            f,
            "ROUTER: {cntrl} pid = {d1:08x}    cid = {d2:08x}    tid = {d3:08x}"
        ),
        rpc::MID_READ => write!(
            f,
            "ROUTER: READ    mid = {d1:08x}    cid = {d2:08x}    tid = {d3:08x}"
        ),
        rpc::MID_WRITTEN => write!(
            f,
            "ROUTER: WRITTEN mid = {d1:08x}    cid = {d2:08x}    tid = {d3:08x}"
        ),
        rpc::MID_CNF_REQ => write!(
            f,
            "ROUTER: CNF REQ pid = {d1:08x}    cid = {d2:08x}    tid = {d3:08x}"
        ),
        rpc::PING => write!(
            f,
            "ROUTER: PING    pid = {d1:08x}    cid = {d2:08x}    tid = {d3:08x}"
        ),
        rpc::SERVER_PENDING => write!(
            f,
            "ROUTER: SERVER PENDING REGISTRATION    prog = 0x{d1:08x} vers=0x{d2:08x} tid = {d3:08x}"
        ),
        rpc::SERVER_REGISTERED => write!(
            f,
            "ROUTER: PENDING SERVER REGISTERED      prog = 0x{d1:08x} vers=0x{d2:08x} tid = {d3:08x}"
        ),
        _ => write!(
            f,
            "ROUTER: {cntrl} xid = {d1:08x}    cid = {d2:08x}    tid = {d3:08x}"
        ),
    }
}

/// Decode an IPC router event
pub(super) fn decode_ipc<W: Write>(f: &mut W, id: Id, d1: u32, d2: u32, d3: u32) -> fmt::Result {
    let cont = id.is_continuation();
    match id.event() {
        ipc::CALL | ipc::REPLY | ipc::INDICATION if cont => {
            write!(f, "  msg_id: {d1:08x}  data: {d2:08x}  data: {d3:08x}")
        }
        ipc::CALL => write!(
            f,
            "IPC_ROUTER: CALL   txn: {d1:08x}  svc: {d2:08x}  clnt: {d3:08x}"
        ),
        ipc::REPLY => write!(
            f,
            "IPC_ROUTER: REPLY  txn: {d1:08x}  svc: {d2:08x}  clnt: {d3:08x}"
        ),
        ipc::INDICATION => write!(
            f,
            "IPC_ROUTER: IND    svc: {d1:08x}  clnt: {d2:08x}  dest: {d3:08x}"
        ),
        ipc::EVENT => write!(
            f,
            "IPC_ROUTER: EVENT  addr: {d1:08x}  type: {d2:08x}  data: {d3:08x}"
        ),
        ipc::CONNECT_NAME => write!(
            f,
            "IPC_ROUTER: CONNECT_NAME  svc: {d1:08x}  inst: {d2:08x}  clnt: {d3:08x}"
        ),
        ipc::CONNECT_ADDR => write!(
            f,
            "IPC_ROUTER: CONNECT_ADDR  addr: {d1:08x}  svc: {d2:08x}  clnt: {d3:08x}"
        ),
        ipc::DISCONNECT_ADDR => write!(
            f,
            "IPC_ROUTER: DISCONNECT_ADDR  addr: {d1:08x}  svc: {d2:08x}  clnt: {d3:08x}"
        ),
        _ => generic::generic(f, &tables::IPC_ROUTER, "IPC_ROUTER", id, d1, d2, d3),
    }
}
