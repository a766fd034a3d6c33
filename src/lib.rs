//! fluid-pcm - PCM16 <-> float32 sample codec
//!
//! Converts raw 16-bit little-endian signed PCM byte buffers to normalized
//! f32 samples and back, for handing audio memory between native code and a
//! JS host. Works on native targets and compiles to WebAssembly.
//!
//! Scaling convention: decode divides by 32768 (so -32768 is exactly -1.0),
//! encode multiplies by 32767 and truncates toward zero. The asymmetry is
//! deliberate and matches existing PCM16 producers/consumers.

use wasm_bindgen::prelude::*;

pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::pcm::{decode_pcm16, decode_pcm16_into, encode_pcm16, encode_pcm16_into};
pub use crate::core::sample::{f32_to_i16, i16_to_f32, I16_MAX_F32, I16_MIN_F32, I16_TO_F32_SCALE};

// buffer info for the info() function

/// info about a PCM16 byte buffer
#[wasm_bindgen]
#[derive(Debug, Clone, serde::Serialize)]
pub struct PcmInfo {
    /// Raw buffer length in bytes
    pub byte_length: usize,
    /// Number of complete 16-bit samples (trailing odd byte excluded)
    pub sample_count: usize,
    /// true when the buffer has a trailing odd byte that decoding will drop
    pub truncated: bool,
    /// Duration in seconds for the given sample rate and channel count
    pub duration_secs: f64,
}

// api functions

/// decode PCM16 bytes to f32 samples
///
/// # Arguments
/// * `data` - Raw 16-bit little-endian signed PCM bytes
///
/// # Returns
/// Normalized audio samples (f32, -1.0 to 32767/32768)
///
/// # Note
/// Any byte pattern is valid; a trailing odd byte is dropped, not an error.
#[wasm_bindgen]
pub fn decode(data: &[u8]) -> Vec<f32> {
    decode_pcm16(data)
}

/// encode f32 samples to PCM16 bytes
///
/// # Arguments
/// * `samples` - Audio samples (f32, nominally -1.0 to 1.0)
///
/// # Returns
/// 16-bit little-endian signed PCM bytes, exactly two per sample
///
/// # Note
/// Out-of-range samples clamp to the nearest extreme; NaN encodes as 0.
#[wasm_bindgen]
pub fn encode(samples: &[f32]) -> Vec<u8> {
    encode_pcm16(samples)
}

/// Describe a PCM16 buffer without decoding it
///
/// # Arguments
/// * `data` - Raw PCM16 bytes
/// * `sample_rate` - Sample rate in Hz (e.g., 44100)
/// * `channels` - Number of interleaved channels (1 or 2)
///
/// # Returns
/// PcmInfo struct with buffer details. Duration is 0.0 when `sample_rate`
/// or `channels` is 0.
#[wasm_bindgen]
pub fn info(data: &[u8], sample_rate: u32, channels: u8) -> PcmInfo {
    let sample_count = data.len() / 2;

    let duration_secs = if sample_rate > 0 && channels > 0 {
        let frames = sample_count / channels as usize;
        frames as f64 / sample_rate as f64
    } else {
        0.0
    };

    PcmInfo {
        byte_length: data.len(),
        sample_count,
        truncated: data.len() % 2 != 0,
        duration_secs,
    }
}

/// get lib version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
