// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Decoding sessions
//!
//! This module provides the [`Session`], which renders a stream of
//! [`LogRecord`]s as text, one record at a time.

#[cfg(test)]
mod tests;

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use core::fmt::{self, Write};
use core::num::NonZeroU32;

use crate::config::Options;
use crate::header::{Header, render_header};
use crate::record::LogRecord;
use crate::state::Store;
use crate::subsystem::{Context, Subsystem};

/// Create a new [`Builder`] for [`Session`]s
pub fn builder() -> Builder {
    Default::default()
}

/// Builder for [`Session`]s
#[derive(Copy, Clone, Debug, Default)]
pub struct Builder {
    options: Options,
}

impl Builder {
    /// Create a new builder
    pub fn new() -> Self {
        Default::default()
    }

    /// Set all [`Options`]
    pub fn with_options(self, options: &Options) -> Self {
        Self { options: *options }
    }

    /// Set whether times are displayed as raw ticks
    pub fn with_ticks(self, ticks: bool) -> Self {
        Self {
            options: Options {
                ticks,
                ..self.options
            },
        }
    }

    /// Set the rate used for converting ticks to seconds
    pub fn with_clock_rate(self, clock_rate: NonZeroU32) -> Self {
        Self {
            options: Options {
                clock_rate,
                ..self.options
            },
        }
    }

    /// Set whether a line break is emitted before every line header
    pub fn with_newline_before_header(self, newline_before_header: bool) -> Self {
        Self {
            options: Options {
                newline_before_header,
                ..self.options
            },
        }
    }

    /// Build a [`Session`]
    pub fn build(self) -> Session {
        Session::new(self.options)
    }
}

/// Decoding session for a single stream of records
///
/// A session holds the state accumulated while decoding a stream: the base
/// time, which is the timestamp of the first record, and the payload of
/// opening records of messages spanning more than one record. Records of
/// different streams, e.g. different log indices, must be decoded with
/// different sessions.
///
/// Records are expected in the order they were logged. A continuation record
/// is always paired with the last opening record of the same subsystem.
///
/// # Example
///
/// ```
/// use smem_log::record::LogRecord;
/// use smem_log::session;
///
/// let mut session = session::builder()
///     .with_newline_before_header(false)
///     .build();
///
/// let mut text = String::new();
/// let record = LogRecord::new(0x0002_0001, 1000, 0, 0, 0);
/// session.dispatch(&record, &mut text).unwrap();
/// assert_eq!(
///     text,
///     "MODM:       0.000000    SMEM: START 0x00000000 0x00000000 0x00000000",
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    options: Options,
    base_time: Option<u32>,
    header: Option<Header>,
    state: Store,
}

impl Session {
    /// Create a new session with the given [`Options`]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            base_time: None,
            header: None,
            state: Default::default(),
        }
    }

    /// Retrieve this session's [`Options`]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Retrieve the base time, if established
    ///
    /// The base time is the timestamp of the first non-padding record.
    pub fn base_time(&self) -> Option<u32> {
        self.base_time
    }

    /// Retrieve the header of the last message started
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// Retrieve the continuation state
    pub fn state(&self) -> &Store {
        &self.state
    }

    /// Render a single record
    ///
    /// Opening records are rendered starting with a line header, preceded by
    /// a line break if so configured. Continuation records are rendered as a
    /// continuation of the previous record's text. Padding records, i.e.
    /// records with an id of zero, are ignored.
    ///
    /// Errors are only ever emitted by the sink `f`.
    pub fn dispatch<W: Write>(&mut self, record: &LogRecord, f: &mut W) -> fmt::Result {
        self.render(record, f, self.options.newline_before_header)
    }

    /// Render a single record as a [`String`]
    ///
    /// See [`dispatch`][Self::dispatch] for details.
    #[cfg(feature = "alloc")]
    pub fn decode(&mut self, record: &LogRecord) -> String {
        let mut res = String::new();
        // Writing to a `String` does not fail
        let _ = self.dispatch(record, &mut res);
        res
    }

    /// Render records as messages
    ///
    /// Every opening record starts a new message, continuation records are
    /// appended to the last message. Messages do not start with a line break,
    /// regardless of the configured [`Options`].
    #[cfg(feature = "alloc")]
    pub fn messages(&mut self, records: impl IntoIterator<Item = LogRecord>) -> Vec<String> {
        let mut res: Vec<String> = Vec::new();
        for record in records {
            if record.id.is_padding() {
                continue;
            }
            if !record.id.is_continuation() || res.is_empty() {
                res.push(String::new());
            }
            if let Some(message) = res.last_mut() {
                let _ = self.render(&record, message, false);
            }
        }
        res
    }

    fn render<W: Write>(&mut self, record: &LogRecord, f: &mut W, newline: bool) -> fmt::Result {
        let id = record.id;
        if id.is_padding() {
            return Ok(());
        }
        log::trace!("Dispatching record {:08x} @ {:#x}", id, record.timestamp);

        let base_time = *self.base_time.get_or_insert_with(|| {
            log::debug!("Base time set to {:#x}", record.timestamp);
            record.timestamp
        });

        if !id.is_continuation() {
            let header = render_header(
                id.raw(),
                record.timestamp.wrapping_sub(base_time),
                self.options.ticks,
                self.options.clock_rate,
            );
            if newline {
                f.write_char('\n')?;
            }
            write!(f, "{header}")?;
            self.header = Some(header);
        }

        let ctx = Context {
            state: &mut self.state,
            header: self.header.as_ref(),
        };
        Subsystem::from_id(id).decode(f, ctx, id, record.d1, record.d2, record.d3)
    }
}
