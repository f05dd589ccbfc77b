/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use thumbhash::{ThumbHashDecoder, ThumbHashEncoder};
use thumbhash_png::PngEncoder;

fn decode_ref(data: &[u8]) -> (png::OutputInfo, Vec<u8>) {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder.read_info().unwrap();

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    (info, buf)
}

/// Stored blocks are lossless, a reference decoder must hand back the
/// exact samples we put in.
#[test]
fn test_round_trip_is_lossless() {
    let width = 23;
    let height = 7;

    let pixels: Vec<u8> = (0..width * height * 4).map(|i| (i % 251) as u8).collect();

    let data = PngEncoder::new(&pixels, width, height).encode().unwrap();
    let (info, decoded) = decode_ref(&data);

    assert_eq!(info.width as usize, width);
    assert_eq!(info.height as usize, height);
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    assert_eq!(decoded, pixels);
}

#[test]
fn test_encoding_is_deterministic() {
    let pixels = vec![9; 5 * 5 * 4];

    let first = PngEncoder::new(&pixels, 5, 5).encode().unwrap();
    let second = PngEncoder::new(&pixels, 5, 5).encode().unwrap();

    assert_eq!(first, second);
}

/// The whole pipeline: hash an image, decode the placeholder and wrap
/// it into a PNG a reference decoder accepts.
#[test]
fn test_placeholder_to_png() {
    let mut raster = Vec::with_capacity(24 * 24 * 4);
    for y in 0..24_usize {
        for x in 0..24_usize {
            raster.extend_from_slice(&[(x * 10) as u8, (y * 10) as u8, 60, 255]);
        }
    }

    let hash = ThumbHashEncoder::new(&raster, 24, 24).encode().unwrap();
    let placeholder = ThumbHashDecoder::new(&hash).decode().unwrap();

    let data = PngEncoder::new(&placeholder, 32, 32).encode().unwrap();
    let (info, decoded) = decode_ref(&data);

    assert_eq!((info.width, info.height), (32, 32));
    assert_eq!(decoded, placeholder);
}
