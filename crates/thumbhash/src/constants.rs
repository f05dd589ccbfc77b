/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Number of bytes taken by the packed DC + scale header.
pub const HEADER_SIZE: usize = 5;

/// Width of every decoded placeholder.
pub const OUTPUT_WIDTH: usize = 32;
/// Height of every decoded placeholder.
pub const OUTPUT_HEIGHT: usize = 32;

/// Largest width the encoder accepts.
pub const MAX_INPUT_WIDTH: usize = 100;
/// Largest height the encoder accepts.
pub const MAX_INPUT_HEIGHT: usize = 100;

/// Smallest allowed term count per axis.
pub const MIN_TERM_COUNT: usize = 1;
/// Largest allowed term count per axis.
pub const MAX_TERM_COUNT: usize = 10;

/// Extra headroom applied to the stored chrominance scales when
/// dequantizing, the luminance channel does not get it.
pub const CHROMA_SCALE_HEADROOM: f32 = 1.25;
