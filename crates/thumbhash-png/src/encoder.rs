/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;

use crate::adler::Adler32;
use crate::constants::{FILTER_NONE, MAX_STORED_BLOCK, PNG_SIGNATURE, ZLIB_HEADER};
use crate::crc::calc_crc;
use crate::errors::PngEncodeErrors;

/// A minimal PNG encoder for RGBA rasters
///
/// Produces a complete PNG with pixel data stored uncompressed, one
/// stored DEFLATE block per scanline. Always 8 bits per channel,
/// always RGBA, never interlaced.
///
/// # Example
/// ```
/// use thumbhash_png::PngEncoder;
///
/// let pixels = [128_u8; 4 * 4 * 4];
/// let encoder = PngEncoder::new(&pixels, 4, 4);
///
/// let png = encoder.encode().unwrap();
/// assert_eq!(png.len(), encoder.max_size());
/// ```
pub struct PngEncoder<'a> {
    // raw pixels, always RGBA, 8 bits per channel
    data:   &'a [u8],
    width:  usize,
    height: usize
}

impl<'a> PngEncoder<'a> {
    /// Create a new encoder which will wrap the pixels into a PNG
    ///
    /// # Arguments
    /// - `data`: Pixel data, size must be equal to `width * height * 4`
    /// - `width`: Raster width in pixels
    /// - `height`: Raster height in pixels
    pub const fn new(data: &'a [u8], width: usize, height: usize) -> PngEncoder<'a> {
        PngEncoder {
            data,
            width,
            height
        }
    }

    /// Exact size of the encoded PNG in bytes
    ///
    /// Stored blocks have no variable length coding, so the output
    /// size is a pure function of the dimensions.
    pub const fn max_size(&self) -> usize {
        let signature = 8;
        // length + type + crc around a 13 byte payload
        let ihdr = 12 + 13;
        // zlib header, per row a 5 byte stored block header plus the
        // filter byte and raw samples, then the adler checksum
        let idat = 12 + 2 + self.height * (5 + 1 + self.width * 4) + 4;
        let iend = 12;

        signature + ihdr + idat + iend
    }

    /// Encode the raster, returning the PNG bytes
    ///
    /// # Returns
    /// - On success: A complete PNG stream, `max_size()` long
    /// - On error: Why the raster was rejected, valid raster input
    ///   itself can never fail to encode
    pub fn encode(&self) -> Result<Vec<u8>, PngEncodeErrors> {
        if self.width == 0 || self.height == 0 {
            return Err(PngEncodeErrors::ZeroDimensions);
        }
        let scanline = self.width * 4;

        // a scanline plus its filter byte must fit one stored block,
        // and IHDR fields are 32 bit
        if scanline + 1 > MAX_STORED_BLOCK
            || (self.width as u64) > u64::from(u32::MAX)
            || (self.height as u64) > u64::from(u32::MAX)
        {
            return Err(PngEncodeErrors::TooLargeDimensions(self.width, self.height));
        }

        let expected = self.width * self.height * 4;

        if self.data.len() != expected {
            return Err(PngEncodeErrors::WrongInputSize(expected, self.data.len()));
        }

        let mut out = Vec::with_capacity(self.max_size());

        out.extend_from_slice(&PNG_SIGNATURE.to_be_bytes());

        let mut ihdr = [0_u8; 13];
        ihdr[0..4].copy_from_slice(&(self.width as u32).to_be_bytes());
        ihdr[4..8].copy_from_slice(&(self.height as u32).to_be_bytes());
        // bit depth 8, color type 6 (RGBA), compression, filter and
        // interlace methods all zero
        ihdr[8] = 8;
        ihdr[9] = 6;

        write_chunk(&mut out, b"IHDR", &ihdr);

        let idat = self.stored_zlib_stream();
        write_chunk(&mut out, b"IDAT", &idat);

        write_chunk(&mut out, b"IEND", &[]);

        trace!(
            "Encoded {}x{} raster into a {} byte png",
            self.width,
            self.height,
            out.len()
        );
        debug_assert_eq!(out.len(), self.max_size());

        Ok(out)
    }

    /// Build the IDAT payload, a zlib stream whose deflate data is a
    /// sequence of stored blocks, one per scanline.
    fn stored_zlib_stream(&self) -> Vec<u8> {
        let scanline = self.width * 4;
        let block_len = (scanline + 1) as u16;

        let mut stream = Vec::with_capacity(2 + self.height * (5 + 1 + scanline) + 4);
        stream.extend_from_slice(&ZLIB_HEADER);

        // the checksum covers the uncompressed bytes only, i.e. the
        // filter byte and raw samples of every row
        let mut adler = Adler32::new();

        for (i, row) in self.data.chunks_exact(scanline).enumerate() {
            let is_last = i + 1 == self.height;

            // stored block header: BFINAL flag byte, LEN and its
            // ones' complement, both little endian
            stream.push(u8::from(is_last));
            stream.extend_from_slice(&block_len.to_le_bytes());
            stream.extend_from_slice(&(!block_len).to_le_bytes());

            stream.push(FILTER_NONE);
            stream.extend_from_slice(row);

            adler.update(&[FILTER_NONE]);
            adler.update(row);
        }

        stream.extend_from_slice(&adler.finish().to_be_bytes());
        stream
    }
}

/// Write one chunk: big endian payload length, type tag, payload and
/// the CRC over tag + payload (the length is not covered).
fn write_chunk(out: &mut Vec<u8>, name: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());

    // tag and payload land back to back in the output, so the crc
    // can run over that region directly
    let tagged = out.len();
    out.extend_from_slice(name);
    out.extend_from_slice(data);

    let crc = calc_crc(&out[tagged..]);
    out.extend_from_slice(&crc.to_be_bytes());
}
