/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors encountered during encoding
pub enum PngEncodeErrors {
    /// Width or height was zero
    ZeroDimensions,
    /// Dimensions cannot be represented, either the chunk fields
    /// overflow or a scanline doesn't fit one stored DEFLATE block
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

impl Debug for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PngEncodeErrors::ZeroDimensions => {
                writeln!(f, "Zero width or height, cannot encode an empty raster")
            }
            PngEncodeErrors::TooLargeDimensions(width, height) => {
                writeln!(f, "Cannot encode an image of {width}x{height} pixels")
            }
            PngEncodeErrors::WrongInputSize(expected, found) => {
                writeln!(
                    f,
                    "Wrong input size, expected {expected} bytes of RGBA data but found {found}"
                )
            }
        }
    }
}

impl Display for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PngEncodeErrors {}
