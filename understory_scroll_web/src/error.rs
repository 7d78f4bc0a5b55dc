// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Errors raised while setting up a browser visibility observation.
#[derive(Clone, Debug, PartialEq)]
pub enum ObserveError {
    /// The threshold was not a finite value in `[0, 1]`.
    InvalidThreshold(f64),
    /// The environment could not construct an `IntersectionObserver`.
    ///
    /// Carries the description of the underlying JavaScript error.
    Unavailable(String),
}

impl fmt::Display for ObserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold(t) => {
                write!(f, "visibility threshold {t} is not a finite value in [0, 1]")
            }
            Self::Unavailable(reason) => {
                write!(f, "IntersectionObserver is unavailable: {reason}")
            }
        }
    }
}

impl core::error::Error for ObserveError {}
