/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;

use crate::color::from_lpq;
use crate::config::TermCounts;
use crate::constants::{CHROMA_SCALE_HEADROOM, HEADER_SIZE, OUTPUT_HEIGHT, OUTPUT_WIDTH};
use crate::errors::ThumbHashDecodeErrors;
use crate::hash_size;
use crate::transform::{coefficient_indices, fill_basis, reconstruct_point};

/// Dequantized header fields, shared between the full decode
/// and the average color fast path.
struct Header {
    l_dc:    f32,
    p_dc:    f32,
    q_dc:    f32,
    l_scale: f32,
    p_scale: f32,
    q_scale: f32
}

/// ThumbHash decoder
///
/// Reconstructs a fixed 32x32 RGBA placeholder from a hash. The
/// reconstruction is band limited and lossy by design, it is never
/// pixel identical to the encoded raster.
///
/// The decoder must be configured with the same [`TermCounts`] the
/// encoder used. The format carries no record of them, so a mismatch
/// cannot be detected, it silently decodes to garbage whenever the
/// implied byte lengths happen to agree.
///
/// # Example
/// ```
/// use thumbhash::{ThumbHashDecoder, ThumbHashEncoder};
///
/// let pixels = [90_u8; 4 * 4 * 4];
/// let hash = ThumbHashEncoder::new(&pixels, 4, 4).encode().unwrap();
///
/// let decoder = ThumbHashDecoder::new(&hash);
/// let placeholder = decoder.decode().unwrap();
///
/// assert_eq!(decoder.dimensions(), (32, 32));
/// assert_eq!(placeholder.len(), 32 * 32 * 4);
/// ```
pub struct ThumbHashDecoder<'a> {
    data:  &'a [u8],
    terms: TermCounts
}

impl<'a> ThumbHashDecoder<'a> {
    /// Create a new decoder with the default term counts
    ///
    /// # Arguments
    /// - `data`: The hash bytes
    pub fn new(data: &'a [u8]) -> ThumbHashDecoder<'a> {
        ThumbHashDecoder {
            data,
            terms: TermCounts::default()
        }
    }

    /// Create a new decoder with explicit term counts, which must be
    /// the counts the hash was encoded with
    pub const fn new_with_terms(data: &'a [u8], terms: TermCounts) -> ThumbHashDecoder<'a> {
        ThumbHashDecoder { data, terms }
    }

    /// Width and height of the decoded placeholder, always `(32, 32)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (OUTPUT_WIDTH, OUTPUT_HEIGHT)
    }

    /// Number of bytes required to hold a decoded placeholder
    pub const fn output_buffer_size(&self) -> usize {
        OUTPUT_WIDTH * OUTPUT_HEIGHT * 4
    }

    fn read_header(&self) -> Result<Header, ThumbHashDecodeErrors> {
        if self.data.len() < HEADER_SIZE {
            return Err(ThumbHashDecodeErrors::TooShortHash(
                HEADER_SIZE,
                self.data.len()
            ));
        }
        let header24 = u32::from(self.data[0])
            | u32::from(self.data[1]) << 8
            | u32::from(self.data[2]) << 16;
        let header16 = u32::from(self.data[3]) | u32::from(self.data[4]) << 8;

        Ok(Header {
            l_dc:    (header24 & 63) as f32 / 63.0,
            p_dc:    ((header24 >> 6) & 63) as f32 / 31.5 - 1.0,
            q_dc:    ((header24 >> 12) & 63) as f32 / 31.5 - 1.0,
            l_scale: ((header24 >> 18) & 31) as f32 / 31.0,
            p_scale: ((header16 >> 3) & 63) as f32 / 63.0,
            q_scale: ((header16 >> 9) & 63) as f32 / 63.0
        })
    }

    /// Read `count` AC coefficients from the packed nibble area,
    /// advancing `cursor`, and dequantize them against `scale`.
    fn unpack_channel(&self, cursor: &mut usize, count: usize, scale: f32) -> Vec<f32> {
        let mut ac = Vec::with_capacity(count);

        for _ in 0..count {
            let byte = self.data[HEADER_SIZE + *cursor / 2];
            let nibble = (byte >> ((*cursor % 2) * 4)) & 15;

            ac.push((f32::from(nibble) / 7.5 - 1.0) * scale);
            *cursor += 1;
        }
        ac
    }

    /// Decode the hash, returning the 32x32 RGBA placeholder
    ///
    /// The alpha channel is always 255.
    ///
    /// # Returns
    /// - On success: The decoded bytes, `32 * 32 * 4` long
    /// - On error: An instance of [`ThumbHashDecodeErrors`]
    pub fn decode(&self) -> Result<Vec<u8>, ThumbHashDecodeErrors> {
        let mut pixels = vec![0; self.output_buffer_size()];

        self.decode_into(&mut pixels)?;

        Ok(pixels)
    }

    /// Decode the hash into a pre-allocated buffer
    ///
    /// Returns an error if the buffer cannot hold a 32x32 RGBA
    /// placeholder, extra trailing space is left untouched.
    ///
    /// # Arguments
    /// - `pixels`: Output buffer for which we will write decoded pixels
    pub fn decode_into(&self, pixels: &mut [u8]) -> Result<(), ThumbHashDecodeErrors> {
        let expected = hash_size(&self.terms);

        if self.data.len() < expected {
            return Err(ThumbHashDecodeErrors::TooShortHash(
                expected,
                self.data.len()
            ));
        }
        if pixels.len() < self.output_buffer_size() {
            return Err(ThumbHashDecodeErrors::TooSmallOutput(
                self.output_buffer_size(),
                pixels.len()
            ));
        }

        let header = self.read_header()?;

        let l_indices = coefficient_indices(self.terms.luma());
        let c_indices = coefficient_indices(self.terms.chroma());

        // nibble cursor over the AC area, channels are stored
        // back to back in L, P, Q order
        let mut cursor = 0;

        let l_ac = self.unpack_channel(&mut cursor, l_indices.len(), header.l_scale);
        let p_ac = self.unpack_channel(
            &mut cursor,
            c_indices.len(),
            header.p_scale * CHROMA_SCALE_HEADROOM
        );
        let q_ac = self.unpack_channel(
            &mut cursor,
            c_indices.len(),
            header.q_scale * CHROMA_SCALE_HEADROOM
        );

        let max_terms = self.terms.luma().max(self.terms.chroma());
        let mut fx = vec![0.0_f32; max_terms];
        let mut fy = vec![0.0_f32; max_terms];

        for (y, row) in pixels
            .chunks_exact_mut(OUTPUT_WIDTH * 4)
            .take(OUTPUT_HEIGHT)
            .enumerate()
        {
            fill_basis(&mut fy, OUTPUT_HEIGHT, y);

            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                fill_basis(&mut fx, OUTPUT_WIDTH, x);

                let l = header.l_dc + reconstruct_point(&l_indices, &l_ac, &fx, &fy);
                let p = header.p_dc + reconstruct_point(&c_indices, &p_ac, &fx, &fy);
                let q = header.q_dc + reconstruct_point(&c_indices, &q_ac, &fx, &fy);

                let [r, g, b] = from_lpq(l, p, q);

                pixel[0] = (r * 255.0).round().clamp(0.0, 255.0) as u8;
                pixel[1] = (g * 255.0).round().clamp(0.0, 255.0) as u8;
                pixel[2] = (b * 255.0).round().clamp(0.0, 255.0) as u8;
                pixel[3] = 255;
            }
        }

        trace!(
            "Decoded {} byte hash into a {}x{} placeholder",
            self.data.len(),
            OUTPUT_WIDTH,
            OUTPUT_HEIGHT
        );

        Ok(())
    }

    /// Extract the average color without running the inverse transform
    ///
    /// Only the DC header fields are read, so this works on any hash
    /// regardless of term counts and is much cheaper than a decode.
    ///
    /// Alpha comes from a header flag that marks hashes carrying an
    /// alpha nibble after the header. The encoder in this crate only
    /// produces opaque hashes and never sets the flag, it is honored
    /// here for compatibility with alpha aware producers.
    ///
    /// # Returns
    /// - On success: `[r, g, b, a]`, each in `0..=1`
    /// - On error: The hash is shorter than the header
    pub fn average_color(&self) -> Result<[f32; 4], ThumbHashDecodeErrors> {
        let header = self.read_header()?;

        let header24 = u32::from(self.data[0])
            | u32::from(self.data[1]) << 8
            | u32::from(self.data[2]) << 16;
        let has_alpha = (header24 >> 23) != 0;

        let alpha = if has_alpha {
            if self.data.len() < HEADER_SIZE + 1 {
                return Err(ThumbHashDecodeErrors::TooShortHash(
                    HEADER_SIZE + 1,
                    self.data.len()
                ));
            }
            f32::from(self.data[HEADER_SIZE] & 15) / 15.0
        } else {
            1.0
        };

        let [r, g, b] = from_lpq(header.l_dc, header.p_dc, header.q_dc);

        Ok([
            r.clamp(0.0, 1.0),
            g.clamp(0.0, 1.0),
            b.clamp(0.0, 1.0),
            alpha
        ])
    }
}
