/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors from validating term count configuration
pub enum TermCountErrors {
    /// A term count fell outside the supported `1..=10` range.
    ///
    /// The argument is the offending value.
    OutOfRange(usize)
}

impl Debug for TermCountErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            TermCountErrors::OutOfRange(value) => {
                writeln!(f, "Term count {value} out of range, expected 1..=10")
            }
        }
    }
}

/// Possible errors that may occur during encoding
pub enum ThumbHashEncodeErrors {
    /// Width or height was zero, the average color of an
    /// empty raster is undefined
    ZeroDimensions,
    /// Dimensions are too large for the format
    ///
    /// # Arguments
    /// - 1st argument is the width passed
    /// - 2nd argument is the height passed
    TooLargeDimensions(usize, usize),
    /// The pixel buffer length doesn't match `width * height * 4`
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is the number of bytes found
    WrongInputSize(usize, usize)
}

impl Debug for ThumbHashEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ThumbHashEncodeErrors::ZeroDimensions => {
                writeln!(f, "Zero width or height, cannot encode an empty raster")
            }
            ThumbHashEncodeErrors::TooLargeDimensions(width, height) => {
                writeln!(
                    f,
                    "Too large dimensions {width}x{height}, both width and height must be 100 or less"
                )
            }
            ThumbHashEncodeErrors::WrongInputSize(expected, found) => {
                writeln!(
                    f,
                    "Wrong input size, expected {expected} bytes of RGBA data but found {found}"
                )
            }
        }
    }
}

/// Possible errors that may occur during decoding
pub enum ThumbHashDecodeErrors {
    /// The hash has fewer bytes than the configured term
    /// counts require
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is the number of bytes found
    TooShortHash(usize, usize),
    /// Too small output size
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is the number of bytes found
    TooSmallOutput(usize, usize)
}

impl Debug for ThumbHashDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ThumbHashDecodeErrors::TooShortHash(expected, found) => {
                writeln!(
                    f,
                    "Too short hash, expected at least {expected} bytes but found {found}"
                )
            }
            ThumbHashDecodeErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected} but found {found}"
                )
            }
        }
    }
}

impl Display for TermCountErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl Display for ThumbHashEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl Display for ThumbHashDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for TermCountErrors {}

impl std::error::Error for ThumbHashEncodeErrors {}

impl std::error::Error for ThumbHashDecodeErrors {}
