/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! CRC-32 as PNG chunks require it
//!
//! Standard reflected polynomial, one table lookup per byte. The
//! table is built at compile time.

const fn make_crc_table() -> [u32; 256] {
    let mut table = [0_u32; 256];
    let mut n = 0;

    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;

        while k < 8 {
            c = if c & 1 != 0 {
                0xEDB8_8320 ^ (c >> 1)
            } else {
                c >> 1
            };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

static CRC_TABLE: [u32; 256] = make_crc_table();

/// Continue a running CRC over `data`.
///
/// The value passed in and returned is the internal (inverted)
/// state, start from `u32::MAX` and complement the final result.
pub(crate) fn calc_crc_with_bytes(data: &[u8], mut crc: u32) -> u32 {
    for byte in data {
        crc = CRC_TABLE[usize::from((crc as u8) ^ byte)] ^ (crc >> 8);
    }
    crc
}

/// CRC-32 of a complete buffer.
pub(crate) fn calc_crc(data: &[u8]) -> u32 {
    !calc_crc_with_bytes(data, u32::MAX)
}
