/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Term count configuration
//!
//! The codec keeps a triangular subset of low frequency DCT
//! coefficients per channel, the size of that subset is the "term
//! count". Both directions of the codec take it as an explicit value
//! so that a round trip is deterministic and testable in isolation,
//! there is no ambient global configuration.

use crate::constants::{MAX_TERM_COUNT, MIN_TERM_COUNT};
use crate::errors::TermCountErrors;

/// Number of DCT terms retained along each axis, per channel family.
///
/// The hash format does **not** record these values, a decoder must be
/// configured with the exact counts the encoder used. A mismatch is
/// not detectable from the bytes alone whenever the implied lengths
/// happen to agree, and decodes to garbage.
///
/// # Example
/// ```
/// use thumbhash::TermCounts;
///
/// // the default keeps 7 luminance and 3 chrominance terms
/// let terms = TermCounts::default();
/// assert_eq!((terms.luma(), terms.chroma()), (7, 3));
///
/// // counts outside 1..=10 are rejected
/// assert!(TermCounts::new(0, 3).is_err());
/// assert!(TermCounts::new(7, 11).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TermCounts {
    luma:   usize,
    chroma: usize
}

impl TermCounts {
    /// Create a new configuration keeping `luma` terms per axis for
    /// the luminance channel and `chroma` terms per axis for each of
    /// the two chrominance channels.
    ///
    /// Both counts must lie in `1..=10`.
    pub fn new(luma: usize, chroma: usize) -> Result<TermCounts, TermCountErrors> {
        for count in [luma, chroma] {
            if !(MIN_TERM_COUNT..=MAX_TERM_COUNT).contains(&count) {
                return Err(TermCountErrors::OutOfRange(count));
            }
        }
        Ok(TermCounts { luma, chroma })
    }

    /// Luminance term count per axis
    pub const fn luma(&self) -> usize {
        self.luma
    }

    /// Chrominance term count per axis
    pub const fn chroma(&self) -> usize {
        self.chroma
    }
}

impl Default for TermCounts {
    fn default() -> TermCounts {
        TermCounts { luma: 7, chroma: 3 }
    }
}

#[cfg(test)]
mod tests {
    use crate::TermCounts;

    #[test]
    fn test_range_validation() {
        assert!(TermCounts::new(1, 1).is_ok());
        assert!(TermCounts::new(10, 10).is_ok());
        assert!(TermCounts::new(0, 1).is_err());
        assert!(TermCounts::new(1, 0).is_err());
        assert!(TermCounts::new(11, 1).is_err());
    }
}
