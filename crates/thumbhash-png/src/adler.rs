/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Adler-32, the checksum a zlib stream ends with
//!
//! Covers the uncompressed data, not the block framing. The amounts
//! hashed here are tiny so the simple byte-at-a-time form with an
//! eager modulo is enough.

const ADLER_MODULO: u32 = 65521;

/// Running Adler-32 state.
pub(crate) struct Adler32 {
    a: u32,
    b: u32
}

impl Adler32 {
    pub(crate) const fn new() -> Adler32 {
        Adler32 { a: 1, b: 0 }
    }

    pub(crate) fn update(&mut self, data: &[u8]) {
        for byte in data {
            self.a = (self.a + u32::from(*byte)) % ADLER_MODULO;
            self.b = (self.b + self.a) % ADLER_MODULO;
        }
    }

    pub(crate) const fn finish(&self) -> u32 {
        (self.b << 16) | self.a
    }
}

#[cfg(test)]
mod tests {
    use crate::adler::Adler32;

    #[test]
    fn test_known_vectors() {
        let mut adler = Adler32::new();
        adler.update(b"Wikipedia");
        assert_eq!(adler.finish(), 0x11E6_0398);

        // empty input is the initial state
        assert_eq!(Adler32::new().finish(), 1);
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut split = Adler32::new();
        split.update(b"Wiki");
        split.update(b"pedia");

        let mut whole = Adler32::new();
        whole.update(b"Wikipedia");

        assert_eq!(split.finish(), whole.finish());
    }
}
