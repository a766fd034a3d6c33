//! PCM16 byte buffer <-> f32 sample buffer conversion
//!
//! Both directions are total: every byte pattern decodes to something and
//! every float (NaN and infinities included) encodes to something. Out-of-range
//! samples clamp, a trailing odd byte drops. Keeps the per-sample path free of
//! branches and error plumbing.

use super::sample::{f32_to_i16, i16_to_f32};

/// Decode 16-bit little-endian PCM bytes into normalized f32 samples
///
/// Produces `floor(bytes.len() / 2)` samples; a trailing odd byte is
/// silently dropped. Empty input yields empty output.
pub fn decode_pcm16(bytes: &[u8]) -> Vec<f32> {
    let mut samples = Vec::with_capacity(bytes.len() / 2);
    decode_pcm16_into(bytes, &mut samples);
    samples
}

/// Decode PCM16 bytes, appending samples to a caller-owned buffer
pub fn decode_pcm16_into(bytes: &[u8], out: &mut Vec<f32>) {
    out.reserve(bytes.len() / 2);
    for pair in bytes.chunks_exact(2) {
        out.push(i16_to_f32(i16::from_le_bytes([pair[0], pair[1]])));
    }
}

/// Encode normalized f32 samples into 16-bit little-endian PCM bytes
///
/// Output is exactly `2 * samples.len()` bytes. Samples outside [-1.0, 1.0]
/// clamp to the nearest extreme; NaN encodes as 0 (see [`f32_to_i16`]).
pub fn encode_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    encode_pcm16_into(samples, &mut bytes);
    bytes
}

/// Encode f32 samples, appending PCM16 bytes to a caller-owned buffer
pub fn encode_pcm16_into(samples: &[f32], out: &mut Vec<u8>) {
    out.reserve(samples.len() * 2);
    for &sample in samples {
        out.extend_from_slice(&f32_to_i16(sample).to_le_bytes());
    }
}
