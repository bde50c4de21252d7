// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0

extern crate alloc;

use super::*;

use alloc::format;
use alloc::vec::Vec;

macro_rules! processor_test {
    ($n:ident, $i:literal, $p:ident, $s:literal) => {
        #[test]
        fn $n() {
            let processor = Id::new($i).processor();
            assert_eq!(processor, Processor::$p);
            assert_eq!(processor.name(), $s);
        }
    };
}

processor_test!(processor_modem, 0x0002_0001, Modem, "MODM");
processor_test!(processor_qdsp, 0x4002_0001, Qdsp, "QDSP");
processor_test!(processor_apps, 0x8002_0001, Apps, "APPS");
processor_test!(processor_wcnss, 0xc006_0002, Wcnss, "WCNS");
processor_test!(processor_continuation, 0x9006_0001, Apps, "APPS");

#[test]
fn id_fields() {
    let id = Id::new(0xd00a_1234);
    assert_eq!(id.raw(), 0xd00a_1234);
    assert!(id.is_continuation());
    assert!(!id.is_padding());
    assert_eq!(id.base(), 0x000a_0000);
    assert_eq!(id.event(), 0x1234);
    assert_eq!(id.processor(), Processor::Wcnss);

    let id = Id::from(0x8006_0001);
    assert!(!id.is_continuation());
    assert_eq!(id.base(), 0x0006_0000);
    assert_eq!(id.event(), 1);

    assert!(Id::new(0).is_padding());
    assert!(Id::new(0x2000_0000).is_continuation());
    assert!(Id::new(0x3000_0000).is_continuation());
}

#[test]
fn id_hex() {
    assert_eq!(format!("{:08x}", Id::new(0x0002_0001)), "00020001");
    assert_eq!(format!("{:#x}", Id::new(0xc006_0002)), "0xc0060002");
}

#[test]
fn wire_format() {
    let bytes = [
        0x01, 0x00, 0x02, 0x00, // id
        0xe8, 0x03, 0x00, 0x00, // timestamp
        0x44, 0x33, 0x22, 0x11, // d1
        0x00, 0x00, 0x00, 0x00, // d2
        0xff, 0xff, 0xff, 0xff, // d3
    ];
    let record = LogRecord::from_le_bytes(&bytes);
    assert_eq!(record, LogRecord::new(0x0002_0001, 1000, 0x1122_3344, 0, u32::MAX));
    assert_eq!(record.payload(), [0x1122_3344, 0, u32::MAX]);
    assert_eq!(record.to_le_bytes(), bytes);
}

fn encode(records: &[LogRecord]) -> Vec<u8> {
    records.iter().flat_map(LogRecord::to_le_bytes).collect()
}

#[test]
fn reader() {
    let records = [
        LogRecord::new(0x0002_0001, 1000, 0, 0, 0),
        LogRecord::default(),
        LogRecord::new(0x8006_0001, 1010, 1, 2, 3),
    ];
    let data = encode(&records);
    let mut reader = Reader::new(&data);
    assert_eq!(reader.bytes_left(), 60);
    assert_eq!(reader.read_record(), Ok(records[0]));
    assert_eq!(reader.bytes_left(), 40);
    let rest: Result<Vec<_>, _> = reader.collect();
    assert_eq!(rest, Ok(records[1..].to_vec()));
}

#[test]
fn reader_trailing_data() {
    let mut data = encode(&[LogRecord::new(0x0002_0001, 1000, 0, 0, 0)]);
    data.extend([0u8; 12]);
    let mut reader = Reader::new(&data);
    assert!(matches!(reader.next(), Some(Ok(_))));
    assert_eq!(
        reader.next(),
        Some(Err(Error::InsufficientData(NonZeroUsize::new(8).unwrap()))),
    );
    assert_eq!(reader.next(), None);
    assert_eq!(reader.bytes_left(), 0);
}

#[test]
fn reader_empty() {
    let mut reader = Reader::new(&[]);
    assert_eq!(reader.next(), None);
    assert_eq!(
        reader.read_record(),
        Err(Error::InsufficientData(NonZeroUsize::new(20).unwrap())),
    );
}

fn batch_header(dropped: u32, available: u32, count: u32) -> Vec<u8> {
    [dropped, available, count]
        .into_iter()
        .flat_map(u32::to_le_bytes)
        .collect()
}

#[test]
fn batch() {
    let records = [
        LogRecord::new(0x0002_0001, 1000, 0, 0, 0),
        LogRecord::new(0x0006_0001, 1001, 4, 5, 6),
    ];
    let mut data = batch_header(3, 17, 2);
    data.extend(encode(&records));
    // Trailing data beyond the announced records
    data.extend([0xffu8; 7]);

    let batch = Batch::parse(&data).unwrap();
    assert_eq!(batch.dropped, 3);
    assert_eq!(batch.available, 17);
    assert_eq!(batch.len(), 2);
    assert!(!batch.is_empty());
    assert_eq!(batch.records().collect::<Vec<_>>(), records.to_vec());
}

#[test]
fn batch_empty() {
    let data = batch_header(0, 0, 0);
    assert_eq!(data.len(), Batch::HEADER_SIZE);
    let batch = Batch::parse(&data).unwrap();
    assert!(batch.is_empty());
    assert_eq!(batch.records().count(), 0);
}

#[test]
fn batch_short_header() {
    assert_eq!(
        Batch::parse(&[0; 5]).map(|b| b.len()),
        Err(Error::InsufficientData(NonZeroUsize::new(7).unwrap())),
    );
}

#[test]
fn batch_short_records() {
    let mut data = batch_header(0, 0, 2);
    data.extend(encode(&[LogRecord::new(0x0002_0001, 1000, 0, 0, 0)]));
    assert_eq!(
        Batch::parse(&data).map(|b| b.len()),
        Err(Error::InsufficientData(NonZeroUsize::new(20).unwrap())),
    );
}
