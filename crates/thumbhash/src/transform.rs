/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Truncated 2-D DCT over a single channel plane
//!
//! Only a triangular subset of low frequency coefficients is kept,
//! enumerated by [`coefficient_indices`]. Encode and decode both walk
//! that one enumeration so their orderings can never drift apart.

use core::f32::consts::PI;

/// Ordered `(cx, cy)` frequency pairs for a term count of `n`.
///
/// The set is `{(cx, cy) : cx + cy < n}` without `(0, 0)`, walked with
/// `cy` as the outer loop and `cx` as the inner one. This ordering is
/// part of the byte format, AC coefficients are serialized in exactly
/// this sequence.
pub(crate) fn coefficient_indices(n: usize) -> Vec<(usize, usize)> {
    let mut indices = Vec::with_capacity(ac_term_count(n));

    for cy in 0..n {
        for cx in 0..(n - cy) {
            if (cx, cy) != (0, 0) {
                indices.push((cx, cy));
            }
        }
    }
    indices
}

/// Number of AC terms a term count of `n` produces, i.e. the
/// triangle size less the DC slot.
pub(crate) const fn ac_term_count(n: usize) -> usize {
    (n * (n + 1)) / 2 - 1
}

/// Forward transform output for one channel.
pub(crate) struct ChannelCoefficients {
    /// Zero frequency term, the channel average.
    pub dc:    f32,
    /// AC terms in enumeration order, remapped to `0..=1`
    /// when `scale` is non zero.
    pub ac:    Vec<f32>,
    /// Largest AC magnitude before remapping.
    pub scale: f32
}

/// Run the truncated forward DCT over one channel plane.
///
/// Every kept coefficient is
/// `f = (1/(w*h)) * sum(channel[x,y] * cos(pi/w*cx*(x+0.5)) * cos(pi/h*cy*(y+0.5)))`.
/// AC terms are normalized by the largest magnitude among them so the
/// quantizer always sees `0..=1` values, the magnitude itself is
/// returned as `scale`.
///
/// This triple loop is the dominant cost of the whole encode path,
/// `O(w * h * n^2)`.
pub(crate) fn forward(
    channel: &[f32], width: usize, height: usize, terms: usize
) -> ChannelCoefficients {
    debug_assert_eq!(channel.len(), width * height);

    // the (0, 0) basis is constant 1, so DC is the plain mean
    let dc = channel.iter().sum::<f32>() / (width * height) as f32;

    let indices = coefficient_indices(terms);
    let mut ac = Vec::with_capacity(indices.len());
    let mut scale = 0.0_f32;

    // cosine row for the current cx, recomputed per coefficient
    let mut fx = vec![0.0_f32; width];

    for &(cx, cy) in &indices {
        for (x, value) in fx.iter_mut().enumerate() {
            *value = (PI / width as f32 * cx as f32 * (x as f32 + 0.5)).cos();
        }
        let mut f = 0.0_f32;

        for (y, row) in channel.chunks_exact(width).enumerate() {
            let fy = (PI / height as f32 * cy as f32 * (y as f32 + 0.5)).cos();

            for (sample, fx_value) in row.iter().zip(&fx) {
                f += sample * fx_value * fy;
            }
        }
        f /= (width * height) as f32;

        scale = scale.max(f.abs());
        ac.push(f);
    }

    if scale > 0.0 {
        // map [-scale, scale] onto [0, 1] for the quantizer
        for f in &mut ac {
            *f = 0.5 + 0.5 / scale * *f;
        }
    }

    ChannelCoefficients { dc, ac, scale }
}

/// Fill `table` with the cosine basis values of one output position,
/// `table[c] = cos(pi/len * (pos + 0.5) * c)`.
pub(crate) fn fill_basis(table: &mut [f32], len: usize, pos: usize) {
    for (c, value) in table.iter_mut().enumerate() {
        *value = (PI / len as f32 * (pos as f32 + 0.5) * c as f32).cos();
    }
}

/// Evaluate the AC part of the inverse transform at one output pixel,
/// given the per-axis basis tables of that pixel.
///
/// The DC term is not part of `indices` and is added by the caller.
/// Each AC basis product carries a factor of two, matching the
/// reconstruction the quantizer constants were tuned against.
pub(crate) fn reconstruct_point(
    indices: &[(usize, usize)], ac: &[f32], fx: &[f32], fy: &[f32]
) -> f32 {
    debug_assert_eq!(indices.len(), ac.len());

    let mut value = 0.0_f32;

    for (&(cx, cy), coefficient) in indices.iter().zip(ac) {
        value += coefficient * 2.0 * fx[cx] * fy[cy];
    }
    value
}
