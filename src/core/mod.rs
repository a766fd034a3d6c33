pub mod pcm;
pub mod sample;

pub use pcm::{decode_pcm16, decode_pcm16_into, encode_pcm16, encode_pcm16_into};
pub use sample::*;
