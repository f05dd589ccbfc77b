/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;

use crate::color::to_lpq;
use crate::config::TermCounts;
use crate::constants::{MAX_INPUT_HEIGHT, MAX_INPUT_WIDTH};
use crate::errors::ThumbHashEncodeErrors;
use crate::hash_size;
use crate::transform::forward;

/// ThumbHash encoder
///
/// Turns a small RGBA raster into a compact binary hash. Input is
/// limited to 100 pixels per side, callers are expected to resize
/// upstream, the hash cannot represent more detail anyway.
///
/// # Example
/// - Encode a 10 by 10 image
///
/// ```
/// use thumbhash::{hash_size, ThumbHashEncoder, TermCounts};
///
/// let pixels = [255_u8; 10 * 10 * 4];
/// let hash = ThumbHashEncoder::new(&pixels, 10, 10).encode().unwrap();
///
/// assert_eq!(hash.len(), hash_size(&TermCounts::default()));
/// ```
pub struct ThumbHashEncoder<'a> {
    // raw pixels, always RGBA, 8 bits per channel
    data:   &'a [u8],
    width:  usize,
    height: usize,
    terms:  TermCounts
}

impl<'a> ThumbHashEncoder<'a> {
    /// Create a new encoder with the default term counts
    ///
    /// # Arguments
    /// - `data`: Pixel data, size must be equal to `width * height * 4`
    /// - `width`: Raster width in pixels, at most 100
    /// - `height`: Raster height in pixels, at most 100
    pub fn new(data: &'a [u8], width: usize, height: usize) -> ThumbHashEncoder<'a> {
        ThumbHashEncoder {
            data,
            width,
            height,
            terms: TermCounts::default()
        }
    }

    /// Create a new encoder with explicit term counts
    ///
    /// The produced hash can only be decoded with the same counts,
    /// they are not recorded in the bytes.
    pub const fn new_with_terms(
        data: &'a [u8], width: usize, height: usize, terms: TermCounts
    ) -> ThumbHashEncoder<'a> {
        ThumbHashEncoder {
            data,
            width,
            height,
            terms
        }
    }

    /// Encode the raster into a hash
    ///
    /// # Returns
    /// - On success: The hash bytes, `hash_size(&terms)` long
    /// - On error: Why the raster was rejected, the pixel data itself
    ///   can never fail to encode
    pub fn encode(&self) -> Result<Vec<u8>, ThumbHashEncodeErrors> {
        if self.width == 0 || self.height == 0 {
            return Err(ThumbHashEncodeErrors::ZeroDimensions);
        }
        if self.width > MAX_INPUT_WIDTH || self.height > MAX_INPUT_HEIGHT {
            return Err(ThumbHashEncodeErrors::TooLargeDimensions(
                self.width,
                self.height
            ));
        }
        let expected = self.width * self.height * 4;

        if self.data.len() != expected {
            return Err(ThumbHashEncodeErrors::WrongInputSize(
                expected,
                self.data.len()
            ));
        }

        let channels = to_lpq(self.data, self.width, self.height);

        let l = forward(&channels.l, self.width, self.height, self.terms.luma());
        let p = forward(&channels.p, self.width, self.height, self.terms.chroma());
        let q = forward(&channels.q, self.width, self.height, self.terms.chroma());

        // DC values and scales become unsigned fixed point fractions,
        // 6 bits each except the 5 bit luminance scale. The signed
        // chroma DCs get an offset to center the range.
        let l_dc = (63.0 * l.dc).round() as u32;
        let p_dc = (31.5 + 31.5 * p.dc).round() as u32;
        let q_dc = (31.5 + 31.5 * q.dc).round() as u32;
        let l_scale = (31.0 * l.scale).round() as u32;
        let p_scale = (63.0 * p.scale).round() as u32;
        let q_scale = (63.0 * q.scale).round() as u32;

        let header24 = l_dc | (p_dc << 6) | (q_dc << 12) | (l_scale << 18);
        // low 3 bits left clear
        let header16 = (p_scale << 3) | (q_scale << 9);

        let mut hash = Vec::with_capacity(hash_size(&self.terms));

        hash.extend_from_slice(&[
            (header24 & 0xff) as u8,
            ((header24 >> 8) & 0xff) as u8,
            ((header24 >> 16) & 0xff) as u8,
            (header16 & 0xff) as u8,
            ((header16 >> 8) & 0xff) as u8
        ]);

        // AC coefficients, L then P then Q in enumeration order,
        // one nibble each, low nibble first
        for (i, f) in l.ac.iter().chain(&p.ac).chain(&q.ac).enumerate() {
            let nibble = (15.0 * f).round().clamp(0.0, 15.0) as u8;

            if i % 2 == 0 {
                hash.push(nibble);
            } else {
                let last = hash.len() - 1;
                hash[last] |= nibble << 4;
            }
        }

        trace!(
            "Encoded {}x{} raster into a {} byte hash",
            self.width,
            self.height,
            hash.len()
        );

        Ok(hash)
    }
}
