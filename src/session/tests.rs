// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0

extern crate alloc;

use super::*;

use alloc::string::String;

use crate::config::SLEEP_CLOCK_RATE;
use crate::generic;
use crate::record::Processor;

fn ticks_session() -> Session {
    builder().with_ticks(true).build()
}

fn dispatch_all(session: &mut Session, records: &[LogRecord]) -> String {
    let mut res = String::new();
    records
        .iter()
        .for_each(|r| session.dispatch(r, &mut res).expect("Could not dispatch"));
    res
}

#[test]
fn builder_options() {
    let session = builder()
        .with_ticks(true)
        .with_clock_rate(SLEEP_CLOCK_RATE)
        .with_newline_before_header(false)
        .build();
    let options = Options {
        ticks: true,
        clock_rate: SLEEP_CLOCK_RATE,
        newline_before_header: false,
    };
    assert_eq!(session.options(), &options);
    assert_eq!(Builder::new().with_options(&options).build(), session);
    assert_eq!(builder().build(), Session::default());
}

#[test]
fn padding_is_ignored() {
    let mut session = Session::default();
    let text = dispatch_all(&mut session, &[LogRecord::default(), LogRecord::new(0, 1000, 1, 2, 3)]);
    assert_eq!(text, "");
    assert_eq!(session, Session::default());
    assert_eq!(session.base_time(), None);
}

#[test]
fn smem_start() {
    let mut session = Session::default();
    let text = dispatch_all(&mut session, &[LogRecord::new(0x0002_0001, 1000, 0, 0, 0)]);
    assert_eq!(
        text,
        "\nMODM:       0.000000    SMEM: START 0x00000000 0x00000000 0x00000000",
    );
    assert_eq!(session.base_time(), Some(1000));
    let header = session.header().unwrap();
    assert_eq!(header.processor, Processor::Modem);
    assert_eq!(header.time, 0);
}

#[test]
fn base_time_from_first_record() {
    let mut session = ticks_session().with_newline(false);
    let text = dispatch_all(
        &mut session,
        &[
            LogRecord::default(),
            LogRecord::new(0x0003_0000, 0x100, 0, 0, 0),
            LogRecord::new(0x8003_0001, 0x180, 0, 0, 0),
            LogRecord::new(0x4003_0002, 0xff, 0, 0, 0),
        ],
    );
    assert_eq!(
        text,
        "MODM: 0x00000000    TMC: WAIT 0x00000000 0x00000000 0x00000000\
         APPS: 0x00000080    TMC: GOTO INIT 0x00000000 0x00000000 0x00000000\
         QDSP: 0xffffffff    TMC: BOTH INIT 0x00000000 0x00000000 0x00000000",
    );
    assert_eq!(session.base_time(), Some(0x100));
}

#[test]
fn seconds() {
    let mut session = builder().with_newline_before_header(false).build();
    let text = dispatch_all(
        &mut session,
        &[
            LogRecord::new(0x0003_0000, 1_000, 0, 0, 0),
            LogRecord::new(0x0003_0000, 19_201_000, 0, 0, 0),
        ],
    );
    assert_eq!(
        text,
        "MODM:       0.000000    TMC: WAIT 0x00000000 0x00000000 0x00000000\
         MODM:       1.000000    TMC: WAIT 0x00000000 0x00000000 0x00000000",
    );
}

#[test]
fn fatal_error_wcnss() {
    let mut session = ticks_session();
    let text = dispatch_all(&mut session, &[LogRecord::new(0xc006_0002, 5, 0x6e69_616d, 0, 0)]);
    assert_eq!(text, "\nWCNS: 0x00000000    ERR: FATAL ");
    assert!(session.state().err.is_armed());

    let text = dispatch_all(&mut session, &[LogRecord::new(0xd006_0002, 6, 0, 0, 0x1000)]);
    assert_eq!(text, " task: \"main\" tcb addr: 0x00001000");
    assert!(!session.state().err.is_armed());
}

#[test]
fn continuation_has_no_header() {
    let mut session = ticks_session();
    let text = dispatch_all(
        &mut session,
        &[
            LogRecord::new(0x0001_000a, 0, 0x10, 0x3000_0001, 2),
            LogRecord::new(0x1001_000a, 4, 0x6e69_616d, 0, 0),
        ],
    );
    assert_eq!(
        text,
        "\nMODM: 0x00000000    ONCRPC: CALL    xid = 00000010    proc =   2    \
         prog = 0x30000001    task = main",
    );
}

#[test]
fn event_cb_repeats_header() {
    let mut session = ticks_session();
    let text = dispatch_all(
        &mut session,
        &[
            LogRecord::new(0x0002_0003, 0x10, 0, 0, 0),
            LogRecord::new(0x8002_0000, 0x20, 1, 0x50, 0x55),
        ],
    );
    assert_eq!(
        text,
        "\nMODM: 0x00000000    SMEM: RUNNING 0x00000000 0x00000000 0x00000000\
         \nAPPS: 0x00000010    SMEM:   EVENT_CB  LOCAL \
         \nAPPS: 0x00000010    SMEM:   prev = APPS:READY | MODEM:OFF | IPI_M2A:0x00 | IPI_A2M:0x00\
         \nAPPS: 0x00000010    SMEM:   curr = APPS:READY | MODEM:READY | IPI_M2A:0x00 | IPI_A2M:0x00",
    );
}

#[test]
fn sessions_are_independent() {
    let mut first = ticks_session();
    let mut second = ticks_session();
    dispatch_all(&mut first, &[LogRecord::new(0x0006_0001, 1, 0x41, 0, 0)]);
    let text = dispatch_all(&mut second, &[LogRecord::new(0x1006_0001, 7, 0, 0, 3)]);
    assert_eq!(text, " file: \"\" line: 3");
    assert!(first.state().err.is_armed());
    assert_eq!(second.base_time(), Some(7));
}

#[test]
fn unknown_base_matches_default() {
    let records = [
        LogRecord::new(0x0123_4567, 0, 1, 2, 3),
        LogRecord::new(0x1123_4567, 0, 4, 5, 6),
    ];
    let mut session = ticks_session().with_newline(false);
    let text = dispatch_all(&mut session, &records);

    let mut expected = String::from("MODM: 0x00000000    ");
    for r in records {
        generic::default(&mut expected, "UNKNOWN", r.id, r.d1, r.d2, r.d3).unwrap();
    }
    assert_eq!(text, expected);
}

#[cfg(feature = "alloc")]
#[test]
fn decode() {
    let mut session = ticks_session();
    assert_eq!(
        session.decode(&LogRecord::new(0x0004_0001, 1, 0, 0, 0)),
        "\nMODM: 0x00000000    TIMETICK: GOTO WAIT 0x00000000 0x00000000 0x00000000",
    );
    assert_eq!(session.decode(&LogRecord::default()), "");
}

#[cfg(feature = "alloc")]
#[test]
fn messages() {
    let records = [
        LogRecord::new(0x1006_0001, 0x10, 0, 0, 1),
        LogRecord::new(0x0006_0001, 0x10, 0x4141_4141, 0x4141_4141, 0x4141_4141),
        LogRecord::new(0x1006_0001, 0x11, 0x4242, 0, 12),
        LogRecord::default(),
        LogRecord::new(0x8003_0001, 0x20, 0, 0, 0),
    ];
    let messages = ticks_session().messages(records);
    assert_eq!(
        messages,
        [
            " file: \"\" line: 1",
            "MODM: 0x00000000    ERR: FATAL  file: \"AAAAAAAAAAAABB\" line: 12",
            "APPS: 0x00000010    TMC: GOTO INIT 0x00000000 0x00000000 0x00000000",
        ],
    );
}

impl Session {
    fn with_newline(mut self, newline_before_header: bool) -> Self {
        self.options.newline_before_header = newline_before_header;
        self
    }
}
