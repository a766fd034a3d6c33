#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Decode PCM16 bytes straight into a Float32Array for the JS host
///
/// The returned array is freshly allocated; ownership transfers to JS.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn decode_to_float32_array(data: &[u8]) -> js_sys::Float32Array {
    let samples = crate::decode_pcm16(data);
    let array = js_sys::Float32Array::new_with_length(samples.len() as u32);
    array.copy_from(&samples);
    array
}

/// Encode f32 samples straight into a Uint8Array for the JS host
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn encode_to_uint8_array(samples: &[f32]) -> js_sys::Uint8Array {
    let bytes = crate::encode_pcm16(samples);
    js_sys::Uint8Array::from(&bytes[..])
}

/// Describe a PCM16 buffer as a plain JS object
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn describe(data: &[u8], sample_rate: u32, channels: u8) -> Result<JsValue, JsValue> {
    let info = crate::info(data, sample_rate, channels);
    serde_wasm_bindgen::to_value(&info)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// Initialize wasm-bindgen panic hook for better error messages
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
