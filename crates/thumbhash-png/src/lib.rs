/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A minimal PNG writer
//!
//! This wraps a raw RGBA raster into a valid PNG byte stream that any
//! conformant reader can display, without pulling in a compression
//! library. The IDAT payload is a zlib stream made of stored
//! (uncompressed) DEFLATE blocks, one per scanline, so the only real
//! work is the container bookkeeping: chunk framing, CRC-32 and
//! Adler-32.
//!
//! The intended use is visualizing decoded placeholder images, which
//! are tiny, so the size cost of storing pixels uncompressed does not
//! matter. This is deliberately **not** a general purpose PNG encoder.
//!
//! # Usage
//!
//! ```
//! use thumbhash_png::PngEncoder;
//!
//! // a 2x1 raster, one red and one green pixel
//! let pixels = [255, 0, 0, 255, 0, 255, 0, 255];
//! let png = PngEncoder::new(&pixels, 2, 1).encode().unwrap();
//!
//! assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
//! ```
//!
//! Output is deterministic, identical input always produces byte
//! identical PNGs.
pub use encoder::PngEncoder;
pub use errors::PngEncodeErrors;

mod adler;
mod constants;
mod crc;
mod encoder;
mod errors;
