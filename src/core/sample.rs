//! per-sample scaling between i16 PCM and normalized f32

/// Maximum positive value for 16-bit signed integer (2^15 - 1), encode scale
pub const I16_MAX_F32: f32 = 32767.0;

/// Minimum value for 16-bit signed integer (-2^15)
pub const I16_MIN_F32: f32 = -32768.0;

/// Decode scale (1/32768, exact in f32) so that -32768 maps exactly to -1.0
///
/// 32767 maps to 32767/32768 and never reaches +1.0. The encode side uses
/// 32767.0, so decode/encode is not a perfect inverse at the extremes; the
/// asymmetry matches existing PCM16 streams and must stay as is.
pub const I16_TO_F32_SCALE: f32 = 1.0 / 32768.0;

/// Convert i16 sample to normalized f32
#[inline]
pub fn i16_to_f32(sample: i16) -> f32 {
    sample as f32 * I16_TO_F32_SCALE
}

/// Convert f32 sample to i16, clamping to [-1.0, 1.0] and truncating toward zero
///
/// -1.0 encodes to -32767 (truncation of -32767.0), never -32768.
/// NaN passes through the clamp and the `as` cast turns it into 0, so NaN
/// encodes as silence. Infinities clamp to the nearest extreme.
#[inline]
pub fn f32_to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * I16_MAX_F32) as i16
}
