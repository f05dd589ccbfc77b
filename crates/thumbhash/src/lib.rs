/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Encoding and decoding the ThumbHash placeholder image format
//!
//! A ThumbHash is a very compact (roughly 5 to 25 bytes) binary
//! description of an image, meant to be embedded where the image itself
//! cannot be, e.g. inside a database row or a JSON API response.
//! It stores the average color of the image plus a handful of low
//! frequency luminance and chrominance coefficients, enough to render
//! a blurry placeholder while the real image loads.
//!
//! # Features
//! - Encoding RGBA rasters of up to 100x100 pixels into a hash
//! - Decoding a hash back into a 32x32 RGBA raster
//! - Cheap average color extraction that never runs the full transform
//!
//! # Usage
//!
//! Encode an image and get a placeholder back:
//!
//! ```
//! use thumbhash::{ThumbHashDecoder, ThumbHashEncoder};
//!
//! // a 2x2 opaque gray image
//! let pixels = [128_u8; 2 * 2 * 4];
//!
//! let hash = ThumbHashEncoder::new(&pixels, 2, 2).encode().unwrap();
//! // placeholder is always 32x32 RGBA
//! let placeholder = ThumbHashDecoder::new(&hash).decode().unwrap();
//! assert_eq!(placeholder.len(), 32 * 32 * 4);
//! ```
//!
//! # Term counts
//!
//! The number of retained coefficients per axis is configurable via
//! [`TermCounts`] and is **not stored inside the hash**. The same
//! configuration must be used for encoding and decoding, otherwise
//! decoding silently produces garbage. See [`TermCounts`] for details.
pub use config::TermCounts;
pub use decoder::ThumbHashDecoder;
pub use encoder::ThumbHashEncoder;
pub use errors::{TermCountErrors, ThumbHashDecodeErrors, ThumbHashEncodeErrors};

mod color;
mod config;
mod constants;
mod decoder;
mod encoder;
mod errors;
mod transform;

use crate::constants::HEADER_SIZE;
use crate::transform::ac_term_count;

/// Return the exact byte length of a hash produced with the
/// given term counts.
///
/// The length is `5` header bytes plus one byte for every two AC
/// coefficients, rounded up. At the default term counts this is 24
/// bytes.
///
/// # Example
/// ```
/// use thumbhash::{hash_size, TermCounts};
///
/// let terms = TermCounts::new(4, 3).unwrap();
/// assert_eq!(hash_size(&terms), 15);
/// ```
pub fn hash_size(terms: &TermCounts) -> usize {
    let total_ac = ac_term_count(terms.luma()) + 2 * ac_term_count(terms.chroma());

    HEADER_SIZE + (total_ac + 1) / 2
}
