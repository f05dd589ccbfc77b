/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use thumbhash::{hash_size, TermCounts, ThumbHashDecoder, ThumbHashEncoder};

fn random_raster(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = vec![0; width * height * 4];
    nanorand::WyRand::new_seed(42).fill(&mut pixels);
    pixels
}

fn uniform_raster(width: usize, height: usize, color: [u8; 4]) -> Vec<u8> {
    color.repeat(width * height)
}

#[test]
fn test_hash_length_matches_formula() {
    for (luma, chroma) in [(1, 1), (3, 3), (4, 3), (7, 3), (10, 10)] {
        let terms = TermCounts::new(luma, chroma).unwrap();
        let pixels = random_raster(20, 15);

        let hash = ThumbHashEncoder::new_with_terms(&pixels, 20, 15, terms)
            .encode()
            .unwrap();

        assert_eq!(hash.len(), hash_size(&terms), "terms {luma}/{chroma}");
    }
}

#[test]
fn test_encode_and_decode_are_deterministic() {
    let pixels = random_raster(33, 27);

    let first = ThumbHashEncoder::new(&pixels, 33, 27).encode().unwrap();
    let second = ThumbHashEncoder::new(&pixels, 33, 27).encode().unwrap();
    assert_eq!(first, second);

    let once = ThumbHashDecoder::new(&first).decode().unwrap();
    let twice = ThumbHashDecoder::new(&first).decode().unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_decode_output_is_32x32_opaque() {
    let pixels = random_raster(100, 41);
    let hash = ThumbHashEncoder::new(&pixels, 100, 41).encode().unwrap();

    let decoder = ThumbHashDecoder::new(&hash);
    let placeholder = decoder.decode().unwrap();

    assert_eq!(placeholder.len(), 32 * 32 * 4);
    assert_eq!(decoder.dimensions(), (32, 32));

    for pixel in placeholder.chunks_exact(4) {
        assert_eq!(pixel[3], 255);
    }
}

#[test]
fn test_dimension_boundaries() {
    let ok = uniform_raster(100, 100, [10, 20, 30, 255]);
    assert!(ThumbHashEncoder::new(&ok, 100, 100).encode().is_ok());

    let wide = uniform_raster(101, 1, [0; 4]);
    assert!(ThumbHashEncoder::new(&wide, 101, 1).encode().is_err());

    let tall = uniform_raster(1, 101, [0; 4]);
    assert!(ThumbHashEncoder::new(&tall, 1, 101).encode().is_err());

    assert!(ThumbHashEncoder::new(&[], 0, 10).encode().is_err());

    // buffer length must match the dimensions exactly
    let short = uniform_raster(4, 4, [0; 4]);
    assert!(ThumbHashEncoder::new(&short, 5, 4).encode().is_err());
}

#[test]
fn test_uniform_color_header_and_reconstruction() {
    let pixels = uniform_raster(16, 16, [50, 100, 200, 255]);
    let hash = ThumbHashEncoder::new(&pixels, 16, 16).encode().unwrap();

    // a flat raster has zero scales and exactly these DC fields
    assert_eq!(&hash[..5], &[0x1d, 0x94, 0x01, 0x00, 0x00]);

    let placeholder = ThumbHashDecoder::new(&hash).decode().unwrap();

    let first: [u8; 4] = placeholder[..4].try_into().unwrap();
    for pixel in placeholder.chunks_exact(4) {
        // zero scales mean every pixel reconstructs to the DC alone
        assert_eq!(pixel, &first);
    }
    for (channel, original) in first[..3].iter().zip([50_i32, 100, 200]) {
        assert!(
            (i32::from(*channel) - original).abs() <= 3,
            "channel {channel} vs {original}"
        );
    }
}

#[test]
fn test_average_color_matches_dc_reconstruction() {
    let pixels = uniform_raster(16, 16, [50, 100, 200, 255]);
    let hash = ThumbHashEncoder::new(&pixels, 16, 16).encode().unwrap();

    let decoder = ThumbHashDecoder::new(&hash);
    let average = decoder.average_color().unwrap();
    let placeholder = decoder.decode().unwrap();

    // opaque hashes report full alpha
    assert_eq!(average[3], 1.0);

    // the center pixel of a flat raster is the DC reconstruction,
    // both derive from the same header fields
    let center = &placeholder[(16 * 32 + 16) * 4..][..3];
    for (channel, pixel) in average[..3].iter().zip(center) {
        assert!((channel * 255.0 - f32::from(*pixel)).abs() <= 2.0);
    }

    for (channel, original) in average[..3].iter().zip([50.0_f32, 100.0, 200.0]) {
        assert!((channel - original / 255.0).abs() < 0.02);
    }
}

fn mean_squared_error(a: &[u8], b: &[u8]) -> f64 {
    assert_eq!(a.len(), b.len());
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = f64::from(*x) - f64::from(*y);
            d * d
        })
        .sum();
    sum / a.len() as f64
}

#[test]
fn test_more_terms_do_not_hurt_reconstruction() {
    // a 32x32 gradient compares directly against the decoded output
    let mut pixels = Vec::with_capacity(32 * 32 * 4);
    for y in 0..32_usize {
        for x in 0..32_usize {
            pixels.extend_from_slice(&[(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8, 255]);
        }
    }

    let mut errors = vec![];
    for (luma, chroma) in [(1, 1), (3, 3), (7, 3)] {
        let terms = TermCounts::new(luma, chroma).unwrap();
        let hash = ThumbHashEncoder::new_with_terms(&pixels, 32, 32, terms)
            .encode()
            .unwrap();
        let decoded = ThumbHashDecoder::new_with_terms(&hash, terms)
            .decode()
            .unwrap();

        errors.push(mean_squared_error(&decoded, &pixels));
    }

    // a single DC term leaves a much larger error than any real
    // coefficient budget, quantization noise only moves the rest
    // around within a narrow band
    assert!(errors[1] < errors[0]);
    assert!(errors[2] < errors[0]);
}

#[test]
fn test_checkerboard_reconstruction_is_band_limited() {
    // black/white/white/black
    let pixels = [
        0, 0, 0, 255, 255, 255, 255, 255, //
        255, 255, 255, 255, 0, 0, 0, 255
    ];
    let hash = ThumbHashEncoder::new(&pixels, 2, 2).encode().unwrap();
    let decoded = ThumbHashDecoder::new(&hash).decode().unwrap();

    // the input jumps a full 255 between neighbors, the band limited
    // reconstruction must not reproduce that edge
    let mut max_delta = 0;
    let mut blended = 0;

    for y in 0..32 {
        for x in 0..32 {
            let v = i32::from(decoded[(y * 32 + x) * 4]);
            if x + 1 < 32 {
                let next = i32::from(decoded[(y * 32 + x + 1) * 4]);
                max_delta = max_delta.max((v - next).abs());
            }
            if (32..=224).contains(&v) {
                blended += 1;
            }
        }
    }

    assert!(max_delta < 230, "sharp edge survived: {max_delta}");
    assert!(blended > 200, "too few intermediate pixels: {blended}");
}

#[test]
fn test_short_hash_is_rejected() {
    let pixels = uniform_raster(8, 8, [1, 2, 3, 255]);
    let hash = ThumbHashEncoder::new(&pixels, 8, 8).encode().unwrap();

    // default decode expects more bytes than a 1/1 hash provides
    let small_terms = TermCounts::new(1, 1).unwrap();
    let small_hash = ThumbHashEncoder::new_with_terms(&pixels, 8, 8, small_terms)
        .encode()
        .unwrap();
    assert!(ThumbHashDecoder::new(&small_hash).decode().is_err());

    assert!(ThumbHashDecoder::new(&hash[..3]).decode().is_err());
    assert!(ThumbHashDecoder::new(&hash[..3]).average_color().is_err());
    assert!(ThumbHashDecoder::new(&[]).average_color().is_err());
}

#[test]
fn test_decode_into_validates_output_size() {
    let pixels = uniform_raster(8, 8, [1, 2, 3, 255]);
    let hash = ThumbHashEncoder::new(&pixels, 8, 8).encode().unwrap();

    let decoder = ThumbHashDecoder::new(&hash);
    let mut too_small = vec![0; decoder.output_buffer_size() - 1];
    assert!(decoder.decode_into(&mut too_small).is_err());

    let mut exact = vec![0; decoder.output_buffer_size()];
    assert!(decoder.decode_into(&mut exact).is_ok());
}
