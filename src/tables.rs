// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Event and state name tables
//!
//! Tables map small, subsystem-local codes to names. Entries that are
//! rendered by a dedicated template in the corresponding subsystem decoder
//! still carry a name, which is used only by the generic decoder.

/// Look up a name, returning [`None`] for indices out of range
pub fn lookup<T>(table: &[&'static str], index: T) -> Option<&'static str>
where
    T: TryInto<usize>,
{
    index.try_into().ok().and_then(|i| table.get(i)).copied()
}

/// Look up a name, falling back to `UNKNOWN` for indices out of range
pub fn name_or_unknown<T>(table: &[&'static str], index: T) -> &'static str
where
    T: TryInto<usize>,
{
    lookup(table, index).unwrap_or("UNKNOWN")
}

/// Processors referred to by index in SMSM interrupt events
pub static SMSM_HOSTS: [&str; 5] = ["APPS", "MODM", "ADSP", "WCNS", "DSPS"];

/// Synchronization states of a processor in an SMSM state word
pub static SMSM_STATES: [&str; 8] = ["OFF", "DOWN", "BOOT", "OOS", "SSR", "READY", "ERR", "RST"];

/// ONCRPC events
pub static ONCRPC: [&str; 25] = [
    "GOTO SMD WAIT",
    "GOTO RPC WAIT",
    "GOTO RPC BOTH WAIT",
    "GOTO RPC INIT",
    "GOTO RUNNING",
    "APIS INITED",
    "AMSS RESET - GOTO SMD WAIT",
    "SMD RESET - GOTO SMD WAIT",
    "ONCRPC RESET - GOTO SMD WAIT",
    "EVENT_CB",
    "STD_CALL",
    "STD_REPLY",
    "STD_CALL_ASYNC",
    "ERR_NO_PROC",
    "ERR_DECODE",
    "ERR_SYSTEM",
    "ERR_AUTH",
    "ERR_NO_PROG",
    "ERR_PROG_LOCK",
    "ERR_PROG_VERS",
    "ERR_VERS_MISMATCH",
    "CALL_START",
    "DISPATCH_PROXY",
    "HANDLE_CALL",
    "MSG_DONE",
];

/// SMEM events
pub static SMEM: [&str; 18] = [
    "EVENT_CB",
    "START",
    "INIT",
    "RUNNING",
    "STOP",
    "RESTART",
    "EVENT_SS",
    "EVENT_READ",
    "EVENT_WRITE",
    "EVENT_SIGS1",
    "EVENT_SIGS2",
    "WRITE DM",
    "READ DM",
    "SKIP DM",
    "STOP DM",
    "ISR",
    "TASK",
    "EVENT_RS",
];

/// States of an SMD stream
pub static SMEM_STREAM_STATES: [&str; 7] = [
    "CLOSED",
    "OPENING",
    "OPENED",
    "FLUSHING",
    "CLOSING",
    "RESET",
    "RESET_OPENING",
];

/// Events of an SMD stream
pub static SMEM_STREAM_EVENTS: [&str; 8] = [
    "CLOSE",
    "OPEN",
    "REMOTE OPEN",
    "REMOTE CLOSE",
    "FLUSH",
    "FLUSH COMPLETE",
    "REMOTE_REOPEN",
    "REMOTE_RESET",
];

/// TMC events
pub static TMC: [&str; 3] = ["WAIT", "GOTO INIT", "BOTH INIT"];

/// TIMETICK events
pub static TIMETICK: [&str; 3] = ["START", "GOTO WAIT", "GOTO INIT"];

/// ERR events
pub static ERR: [&str; 3] = ["UNUSED", "EVENT_FATAL", "EVENT_FATAL_TASK"];

/// RPC router events
///
/// Events 16 to 18 are IPC router events in the legacy numbering.
pub static RPC_ROUTER: [&str; 19] = [
    "UNKNOWN",
    "READ   ",
    "WRITTEN",
    "CNF REQ",
    "CNF SNT",
    "MID READ",
    "MID WRITTEN",
    "MID CNF REQ",
    "PING",
    "SERVER PENDING",
    "SERVER REGISTERED",
    "RESERVED",
    "RESERVED",
    "RESERVED",
    "RESERVED",
    "RESERVED",
    "IPC_ROUTER",
    "IPC_ROUTER",
    "IPC_ROUTER",
];

/// IPC router events
pub static IPC_ROUTER: [&str; 7] = [
    "CALL",
    "REPLY",
    "INDICATION",
    "EVENT",
    "CONNECT_NAME",
    "CONNECT_ADDR",
    "DISCONNECT_ADDR",
];

/// Clock regime events
///
/// The last entry is not an event but the name rendered for it by the
/// generic decoder.
pub static CLKRGM: [&str; 12] = [
    "SET_FREQ",
    "SET_FREQ_STATUS",
    "SET_FREQ_ERR",
    "ENABLE",
    "ENABLE_ERR",
    "DISABLE",
    "DISABLE_ERR",
    "ISR",
    "TASK",
    "RSP",
    "STATUS",
    "UNKNOWN",
];

/// QMI CCI and CSI events
pub static QMI: [&str; 3] = ["TX", "RX", "ERROR"];

/// QMI message control types
pub static QMI_CNTL: [&str; 5] = ["REQ ", "UNK ", "RESP", "UNK ", "IND "];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_bounds() {
        assert_eq!(lookup(&TMC, 2u32), Some("BOTH INIT"));
        assert_eq!(lookup(&TMC, 3u32), None);
        assert_eq!(lookup(&TMC, u32::MAX), None);
        assert_eq!(name_or_unknown(&SMSM_HOSTS, 5u32), "UNKNOWN");
        assert_eq!(name_or_unknown(&SMSM_HOSTS, 4u16), "DSPS");
    }
}
