// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0

//! # Decoder for SMEM logs
//!
//! This crate decodes SMEM logs, the binary inter-processor trace of the modem
//! and applications processor subsystems of Qualcomm SoCs, and renders them as
//! human-readable text. This crate is not concerned with how records are
//! retrieved from the log buffer shared with the firmware. It only expects the
//! raw records in the order they were logged.
//!
//! A log consists of [`LogRecord`]s of 20 bytes each. A record belongs to a
//! [subsystem][subsystem::Subsystem] and carries a subsystem-specific event
//! and three payload words. Some messages span multiple records: an opening
//! record followed by one or more continuation records.
//!
//! See [`session`] for the decoder and [`record`] for the wire format.
//!
//! # Features
//! - per-subsystem event templates for ONCRPC, SMEM, ERR, RPC and IPC router,
//!   clock regime and QMI events
//! - reassembly of names split over two records
//! - SMSM state word rendering
//! - relative timestamps in ticks or seconds with configurable clock rate
//!
//! # no_std
//! This crate is not dependent on the standard library and only uses the Core
//! Library. Decoders write to any [`core::fmt::Write`]. With the `alloc`
//! feature, additional conveniences producing `String`s are available.
//!
//! # Example
//!
//! The following example demonstrates decoding of a buffer holding encoded
//! records.
//!
//! ```
//! use smem_log::record::{LogRecord, Reader};
//! use smem_log::session;
//!
//! # let mut data = Vec::new();
//! # data.extend(LogRecord::new(0x8006_0001, 100, 0x6e69_616d, 0x0000_632e, 0).to_le_bytes());
//! # data.extend(LogRecord::new(0x9006_0001, 100, 0, 0, 42).to_le_bytes());
//! let mut session = session::builder().with_ticks(true).build();
//! let mut text = String::new();
//! for record in Reader::new(&data) {
//!     session.dispatch(&record.unwrap(), &mut text).unwrap();
//! }
//! assert_eq!(
//!     text,
//!     "\nAPPS: 0x00000000    ERR: FATAL  file: \"main.c\" line: 42",
//! );
//! ```
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod config;
pub mod generic;
pub mod header;
pub mod record;
pub mod session;
pub mod smsm;
pub mod state;
pub mod subsystem;
pub mod tables;
pub mod text;

pub use record::LogRecord;
pub use session::Session;
