/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Fixed 8 byte signature every PNG starts with.
pub const PNG_SIGNATURE: u64 = 0x8950_4E47_0D0A_1A0A;

/// zlib stream header, deflate with a 32 KB window, no preset
/// dictionary, lowest compression hint. Decoders ignore the hint for
/// stored blocks.
pub const ZLIB_HEADER: [u8; 2] = [0x78, 0x01];

/// Scanline filter byte, 0 means no filtering was applied.
pub const FILTER_NONE: u8 = 0;

/// A stored DEFLATE block length field is 16 bits.
pub const MAX_STORED_BLOCK: usize = 65535;
