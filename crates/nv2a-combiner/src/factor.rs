//! Combiner constant quantization.
//!
//! Factors are BGRA8888 UNORM8 words. Channels are scaled by 255 and
//! rounded; nothing is clamped, so out-of-range values wrap modulo 256
//! within their own byte.

use glam::Vec4;
use nv2a_registers::{CombinerFactorReg, Register};

/// Quantize one channel to UNORM8.
pub fn quantize_channel(value: f32) -> u8 {
    // Wrap, not saturate: the i32 step keeps negatives two's-complement.
    (value * 255.0).round() as i32 as u8
}

/// Pack an RGBA color (components nominally 0.0-1.0) into a factor word.
pub fn factor_word(color: Vec4) -> u32 {
    factor_word_rgba(color.x, color.y, color.z, color.w)
}

pub fn factor_word_rgba(red: f32, green: f32, blue: f32, alpha: f32) -> u32 {
    CombinerFactorReg::from_rgba(
        quantize_channel(red),
        quantize_channel(green),
        quantize_channel(blue),
        quantize_channel(alpha),
    )
    .to_raw()
}
