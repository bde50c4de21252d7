// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Subsystem decoders
//!
//! Each record belongs to a subsystem, identified by the base id in the
//! record's [`Id`]. This module provides the [`Subsystem`] and the decoders
//! rendering the events of the individual subsystems.

mod clkrgm;
mod debug;
mod err;
mod oncrpc;
pub mod qmi;
mod router;
mod smem;


use core::fmt::{self, Write};

use crate::generic;
use crate::header::Header;
use crate::record::Id;
use crate::smsm;
use crate::state::Store;
use crate::tables;

/// Subsystem owning a record
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Debug,
    Oncrpc,
    Smem,
    Tmc,
    Timetick,
    Err,
    RpcRouter,
    Clkrgm,
    IpcRouter,
    QmiCci,
    QmiCsi,
    /// A subsystem not known to us, with its base id
    Unknown(u32),
}

impl Subsystem {
    /// Determine the subsystem for a base id, as extracted via [`Id::base`]
    pub const fn from_base(base: u32) -> Self {
        match base {
            0x0000_0000 => Self::Debug,
            0x0001_0000 => Self::Oncrpc,
            0x0002_0000 => Self::Smem,
            0x0003_0000 => Self::Tmc,
            0x0004_0000 => Self::Timetick,
            0x0006_0000 => Self::Err,
            0x0009_0000 => Self::RpcRouter,
            0x000a_0000 => Self::Clkrgm,
            0x000d_0000 => Self::IpcRouter,
            0x000e_0000 => Self::QmiCci,
            0x000f_0000 => Self::QmiCsi,
            b => Self::Unknown(b),
        }
    }

    /// Determine the subsystem owning a record with the given id
    pub const fn from_id(id: Id) -> Self {
        Self::from_base(id.base())
    }

    /// Retrieve the base id of this subsystem
    pub const fn base(self) -> u32 {
        match self {
            Self::Debug => 0x0000_0000,
            Self::Oncrpc => 0x0001_0000,
            Self::Smem => 0x0002_0000,
            Self::Tmc => 0x0003_0000,
            Self::Timetick => 0x0004_0000,
            Self::Err => 0x0006_0000,
            Self::RpcRouter => 0x0009_0000,
            Self::Clkrgm => 0x000a_0000,
            Self::IpcRouter => 0x000d_0000,
            Self::QmiCci => 0x000e_0000,
            Self::QmiCsi => 0x000f_0000,
            Self::Unknown(b) => b,
        }
    }

    /// Retrieve the name used when rendering generic messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Oncrpc => "ONCRPC",
            Self::Smem => "SMEM",
            Self::Tmc => "TMC",
            Self::Timetick => "TIMETICK",
            Self::Err => "ERR",
            Self::RpcRouter => "ROUTER",
            Self::Clkrgm => "CLK",
            Self::IpcRouter => "IPC_ROUTER",
            Self::QmiCci => "QCCI",
            Self::QmiCsi => "QCSI",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// Render the event of a record belonging to this subsystem
    pub(crate) fn decode<W: Write>(
        self,
        f: &mut W,
        ctx: Context<'_>,
        id: Id,
        d1: u32,
        d2: u32,
        d3: u32,
    ) -> fmt::Result {
        match self {
            Self::Debug => debug::decode(f, id, d1, d2, d3),
            Self::Oncrpc => oncrpc::decode(f, ctx, id, d1, d2, d3),
            Self::Smem => smem::decode(f, ctx, id, d1, d2, d3),
            Self::Tmc => generic::generic(f, &tables::TMC, self.name(), id, d1, d2, d3),
            Self::Timetick => generic::generic(f, &tables::TIMETICK, self.name(), id, d1, d2, d3),
            Self::Err => err::decode(f, ctx, id, d1, d2, d3),
            Self::RpcRouter => router::decode_rpc(f, id, d1, d2, d3),
            Self::Clkrgm => clkrgm::decode(f, id, d1, d2, d3),
            Self::IpcRouter => router::decode_ipc(f, id, d1, d2, d3),
            Self::QmiCci => qmi::decode(f, qmi::Service::Client, ctx, id, d1, d2, d3),
            Self::QmiCsi => qmi::decode(f, qmi::Service::Server, ctx, id, d1, d2, d3),
            Self::Unknown(base) => {
                log::debug!("Unknown subsystem base 0x{base:08x}");
                generic::default(f, self.name(), id, d1, d2, d3)
            }
        }
    }
}

impl From<Id> for Subsystem {
    fn from(id: Id) -> Self {
        Self::from_id(id)
    }
}

/// Session state available to subsystem decoders
pub(crate) struct Context<'a> {
    /// Continuation slots
    pub state: &'a mut Store,
    /// Header of the message currently being rendered
    pub header: Option<&'a Header>,
}

/// Render a processor state change notification
///
/// The notification spans three lines. The second and third line, showing
/// the previous and current SMSM state, repeat the message's header.
fn event_cb<W: Write>(
    f: &mut W,
    header: Option<&Header>,
    prefix: &str,
    d1: u32,
    d2: u32,
    d3: u32,
) -> fmt::Result {
    let origin = if d1 == 1 { "LOCAL" } else { "REMOTE" };
    write!(f, "{prefix}EVENT_CB  {origin} ")?;
    [("prev", d2), ("curr", d3)]
        .into_iter()
        .try_for_each(|(label, state)| {
            f.write_char('\n')?;
            if let Some(header) = header {
                write!(f, "{header}")?;
            }
            write!(f, "{prefix}{label} = {}", smsm::format_state(state))
        })
}
