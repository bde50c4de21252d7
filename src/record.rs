// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Log records and their wire format
//!
//! This module provides the [`LogRecord`], the atomic unit of an SMEM log, as
//! well as utilities for extracting records from raw data: a [`Reader`] for
//! plain sequences of records and [`Batch`] for reply frames of the upstream
//! log source, which carry additional flow control counts.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::Error;

use core::fmt;
use core::num::NonZeroUsize;

/// Packed record identifier
///
/// The identifier of a record carries, from MSB to LSB, the tag of the
/// processor emitting the record (2 bits), a continuation flag (2 bits), the
/// base id of the subsystem owning the event (12 bits) and a subsystem-local
/// event code (16 bits).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Id(u32);

impl Id {
    /// Mask for the [`Processor`] tag
    pub const PROCESSOR_MASK: u32 = 0xc000_0000;
    /// Mask for the continuation flag
    pub const CONTINUE_MASK: u32 = 0x3000_0000;
    /// Mask for the subsystem base id
    pub const BASE_MASK: u32 = 0x0fff_0000;
    /// Mask for the event code
    pub const EVENT_MASK: u32 = 0x0000_ffff;

    /// Create an id from its raw representation
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Retrieve the raw value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this id denotes an empty slot
    pub const fn is_padding(self) -> bool {
        self.0 == 0
    }

    /// Whether the record continues the preceding message
    pub const fn is_continuation(self) -> bool {
        self.0 & Self::CONTINUE_MASK != 0
    }

    /// Retrieve the processor the record originates from
    pub const fn processor(self) -> Processor {
        Processor::from_id(self.0)
    }

    /// Retrieve the subsystem base id, still in place
    pub const fn base(self) -> u32 {
        self.0 & Self::BASE_MASK
    }

    /// Retrieve the event code
    pub const fn event(self) -> u16 {
        (self.0 & Self::EVENT_MASK) as u16
    }
}

impl From<u32> for Id {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::LowerHex for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Processor emitting a record
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Processor {
    Modem,
    Qdsp,
    Apps,
    Wcnss,
}

impl Processor {
    /// Extract the processor from a raw record id
    ///
    /// Only the two most significant bits are considered. Any value not
    /// denoting one of the other processors denotes the modem.
    pub const fn from_id(id: u32) -> Self {
        match id & Id::PROCESSOR_MASK {
            0x8000_0000 => Self::Apps,
            0x4000_0000 => Self::Qdsp,
            0xc000_0000 => Self::Wcnss,
            _ => Self::Modem,
        }
    }

    /// Retrieve the four character name used in line headers
    pub const fn name(self) -> &'static str {
        match self {
            Self::Modem => "MODM",
            Self::Qdsp => "QDSP",
            Self::Apps => "APPS",
            Self::Wcnss => "WCNS",
        }
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A single log record
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LogRecord {
    pub id: Id,
    pub timestamp: u32,
    pub d1: u32,
    pub d2: u32,
    pub d3: u32,
}

impl LogRecord {
    /// Size of an encoded record in bytes
    pub const SIZE: usize = 20;

    /// Create a new record from its raw fields
    pub const fn new(id: u32, timestamp: u32, d1: u32, d2: u32, d3: u32) -> Self {
        Self {
            id: Id::new(id),
            timestamp,
            d1,
            d2,
            d3,
        }
    }

    /// Decode a record from its little-endian wire representation
    pub fn from_le_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        let word = |n: usize| {
            let mut buf = [0u8; 4];
            buf.copy_from_slice(&bytes[4 * n..4 * n + 4]);
            u32::from_le_bytes(buf)
        };
        Self::new(word(0), word(1), word(2), word(3), word(4))
    }

    /// Encode this record in its little-endian wire representation
    pub fn to_le_bytes(&self) -> [u8; Self::SIZE] {
        let mut res = [0u8; Self::SIZE];
        let words = [self.id.raw(), self.timestamp, self.d1, self.d2, self.d3];
        res.chunks_exact_mut(4)
            .zip(words)
            .for_each(|(c, w)| c.copy_from_slice(&w.to_le_bytes()));
        res
    }

    /// Retrieve the payload words
    pub fn payload(&self) -> [u32; 3] {
        [self.d1, self.d2, self.d3]
    }
}

/// Reader for consecutive, encoded [`LogRecord`]s
///
/// The reader yields records until all data is consumed. If the data ends in
/// an incomplete record, a single [`Error::InsufficientData`] is emitted.
///
/// # Example
///
/// ```
/// use smem_log::record::{LogRecord, Reader};
///
/// let data = LogRecord::new(0x0002_0001, 1000, 0, 0, 0).to_le_bytes();
/// let mut reader = Reader::new(&data);
/// assert_eq!(reader.bytes_left(), 20);
/// let record = reader.next().unwrap().unwrap();
/// assert_eq!(record.timestamp, 1000);
/// assert!(reader.next().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Reader<'d> {
    data: &'d [u8],
}

impl<'d> Reader<'d> {
    /// Create a new reader for the given data
    pub fn new(data: &'d [u8]) -> Self {
        Self { data }
    }

    /// Retrieve the number of bytes not yet consumed
    pub fn bytes_left(&self) -> usize {
        self.data.len()
    }

    /// Read a single record
    pub fn read_record(&mut self) -> Result<LogRecord, Error> {
        let (head, rest) = self
            .data
            .split_first_chunk::<{ LogRecord::SIZE }>()
            .ok_or_else(|| Error::insufficient(LogRecord::SIZE - self.data.len()))?;
        self.data = rest;
        Ok(LogRecord::from_le_bytes(head))
    }
}

impl Iterator for Reader<'_> {
    type Item = Result<LogRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.data.is_empty() {
            return None;
        }
        let res = self.read_record();
        if res.is_err() {
            self.data = &[];
        }
        Some(res)
    }
}

/// Size of the [`Batch`] header in bytes
const BATCH_HEADER_SIZE: usize = 12;

/// Reply frame of the upstream log source
///
/// A batch consists of a header holding three little-endian words followed by
/// the encoded records. The counts in the header are meant for flow control
/// by the consumer and are not relevant for decoding.
#[derive(Clone, Debug)]
pub struct Batch<'d> {
    /// Number of entries dropped by the source since the last read
    pub dropped: u32,
    /// Number of entries still available at the source
    pub available: u32,
    records: &'d [u8],
}

impl<'d> Batch<'d> {
    /// Size of the batch header in bytes
    pub const HEADER_SIZE: usize = BATCH_HEADER_SIZE;

    /// Parse a batch from raw data
    ///
    /// Data beyond the records announced in the header is ignored.
    pub fn parse(data: &'d [u8]) -> Result<Self, Error> {
        let (header, rest) = data
            .split_first_chunk::<BATCH_HEADER_SIZE>()
            .ok_or_else(|| Error::insufficient(BATCH_HEADER_SIZE - data.len()))?;
        let word = |n: usize| {
            let mut buf = [0u8; 4];
            buf.copy_from_slice(&header[4 * n..4 * n + 4]);
            u32::from_le_bytes(buf)
        };
        let count = usize::try_from(word(2)).unwrap_or(usize::MAX);
        let len = count.saturating_mul(LogRecord::SIZE);
        let records = rest
            .get(..len)
            .ok_or_else(|| Error::insufficient(len - rest.len()))?;
        Ok(Self {
            dropped: word(0),
            available: word(1),
            records,
        })
    }

    /// Retrieve the number of records in this batch
    pub fn len(&self) -> usize {
        self.records.len() / LogRecord::SIZE
    }

    /// Whether this batch does not contain any records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in this batch
    pub fn records(&self) -> impl Iterator<Item = LogRecord> + 'd {
        let records: &'d [u8] = self.records;
        records
            .chunks_exact(LogRecord::SIZE)
            .filter_map(|c| <&[u8; LogRecord::SIZE]>::try_from(c).ok())
            .map(LogRecord::from_le_bytes)
    }
}

impl Error {
    fn insufficient(need: usize) -> Self {
        Self::InsufficientData(NonZeroUsize::new(need).unwrap_or(NonZeroUsize::MIN))
    }
}
