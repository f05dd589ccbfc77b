/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! RGBA to LPQ conversion and back
//!
//! The codec does not transform RGB directly, it first flattens
//! transparency by compositing every pixel over the raster's average
//! color and then moves to a decorrelated space of
//! luminance (`L`), yellow minus blue (`P`) and red minus green (`Q`).

/// One `f32` plane per derived channel, all `width * height` long.
pub(crate) struct LpqChannels {
    pub l: Vec<f32>,
    pub p: Vec<f32>,
    pub q: Vec<f32>
}

/// Convert an RGBA raster to its three LPQ planes.
///
/// The alpha weighted average color is computed first, every pixel is
/// then composited over that average with its own alpha before the
/// channel math, so fully transparent regions take the average color.
///
/// The caller guarantees `rgba.len() == width * height * 4` and a non
/// zero pixel count.
pub(crate) fn to_lpq(rgba: &[u8], width: usize, height: usize) -> LpqChannels {
    debug_assert_eq!(rgba.len(), width * height * 4);

    let pixel_count = width * height;

    let mut avg_r = 0.0_f32;
    let mut avg_g = 0.0_f32;
    let mut avg_b = 0.0_f32;

    for pixel in rgba.chunks_exact(4) {
        let alpha = f32::from(pixel[3]) / 255.0;

        avg_r += alpha / 255.0 * f32::from(pixel[0]);
        avg_g += alpha / 255.0 * f32::from(pixel[1]);
        avg_b += alpha / 255.0 * f32::from(pixel[2]);
    }
    let inv_count = 1.0 / pixel_count as f32;

    avg_r *= inv_count;
    avg_g *= inv_count;
    avg_b *= inv_count;

    let mut l = Vec::with_capacity(pixel_count);
    let mut p = Vec::with_capacity(pixel_count);
    let mut q = Vec::with_capacity(pixel_count);

    for pixel in rgba.chunks_exact(4) {
        let alpha = f32::from(pixel[3]) / 255.0;

        // composite over the average color using the pixel's own alpha
        let r = avg_r * (1.0 - alpha) + alpha / 255.0 * f32::from(pixel[0]);
        let g = avg_g * (1.0 - alpha) + alpha / 255.0 * f32::from(pixel[1]);
        let b = avg_b * (1.0 - alpha) + alpha / 255.0 * f32::from(pixel[2]);

        l.push((r + g + b) / 3.0);
        p.push((r + g) / 2.0 - b);
        q.push(r - g);
    }

    LpqChannels { l, p, q }
}

/// Convert one LPQ sample back to RGB.
///
/// Values come back on the same `0..=1` scale the forward conversion
/// uses and may slightly overshoot it, callers clamp when converting
/// to integer samples.
pub(crate) fn from_lpq(l: f32, p: f32, q: f32) -> [f32; 3] {
    let b = l - (2.0 / 3.0) * p;
    let r = (3.0 * l - b + q) / 2.0;
    let g = r - q;

    [r, g, b]
}
