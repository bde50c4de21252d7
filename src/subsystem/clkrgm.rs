// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Clock regime events

use core::fmt::{self, Write};

use crate::generic;
use crate::record::Id;
use crate::tables;

/// Labels of the payload words, per event
static FIELDS: [[&str; 3]; 11] = [
    ["client", "old_freq", "new_freq"],
    ["client", "status", "req_freq"],
    ["client", "status", "req_freq"],
    ["client", "data", "data"],
    ["client", "status", "data"],
    ["client", "data", "data"],
    ["client", "status", "data"],
    ["data", "data", "data"],
    ["data", "data", "data"],
    ["data", "data", "data"],
    ["data", "data", "data"],
];

pub(super) fn decode<W: Write>(f: &mut W, id: Id, d1: u32, d2: u32, d3: u32) -> fmt::Result {
    let event = usize::from(id.event());
    match (FIELDS.get(event), tables::CLKRGM.get(event)) {
        (Some([l1, l2, l3]), Some(name)) => write!(
            f,
            "CLK: {name}  {l1}: {d1:08x}  {l2}: {d2:08x}  {l3}: {d3:08x}"
        ),
        _ => generic::generic(f, &tables::CLKRGM, "CLK", id, d1, d2, d3),
    }
}
