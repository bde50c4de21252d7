// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Record-specific error types

use core::fmt;
use core::num::NonZeroUsize;

/// Record extraction errors
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Some more bytes of data are required for the operation to succeed
    InsufficientData(NonZeroUsize),
}

impl core::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData(n) => write!(f, "At least {n} more bytes of data are required"),
        }
    }
}
