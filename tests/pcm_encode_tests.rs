mod encode_tests {
    use fluid_pcm::{encode_pcm16, encode_pcm16_into};

    #[test]
    fn test_encode_positive_full_scale() {
        // 1.0 * 32767.0 = 32767 = 0x7FFF little-endian
        assert_eq!(encode_pcm16(&[1.0]), vec![0xFF, 0x7F]);
    }

    #[test]
    fn test_encode_negative_full_scale() {
        // Truncation of -1.0 * 32767.0 gives -32767, never -32768
        assert_eq!(encode_pcm16(&[-1.0]), (-32767i16).to_le_bytes().to_vec());
    }

    #[test]
    fn test_encode_clamps_above_range() {
        assert_eq!(encode_pcm16(&[1.5]), encode_pcm16(&[1.0]));
        assert_eq!(encode_pcm16(&[100.0]), encode_pcm16(&[1.0]));
    }

    #[test]
    fn test_encode_clamps_below_range() {
        assert_eq!(encode_pcm16(&[-2.0]), encode_pcm16(&[-1.0]));
        assert_eq!(encode_pcm16(&[-100.0]), encode_pcm16(&[-1.0]));
    }

    #[test]
    fn test_encode_infinities_clamp() {
        assert_eq!(encode_pcm16(&[f32::INFINITY]), encode_pcm16(&[1.0]));
        assert_eq!(encode_pcm16(&[f32::NEG_INFINITY]), encode_pcm16(&[-1.0]));
    }

    #[test]
    fn test_encode_nan_is_silence() {
        // Documented policy: NaN converts to 0
        assert_eq!(encode_pcm16(&[f32::NAN]), vec![0x00, 0x00]);
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode_pcm16(&[0.0]), vec![0x00, 0x00]);
        assert_eq!(encode_pcm16(&[-0.0]), vec![0x00, 0x00]);
    }

    #[test]
    fn test_encode_truncates_toward_zero() {
        // 0.5 * 32767.0 = 16383.5 truncates to 16383 either side of zero
        assert_eq!(encode_pcm16(&[0.5]), 16383i16.to_le_bytes().to_vec());
        assert_eq!(encode_pcm16(&[-0.5]), (-16383i16).to_le_bytes().to_vec());
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode_pcm16(&[]).is_empty());
    }

    #[test]
    fn test_encode_length_property() {
        for len in 0..64usize {
            let samples = vec![0.25f32; len];
            assert_eq!(encode_pcm16(&samples).len(), 2 * len, "sample count {}", len);
        }
    }

    #[test]
    fn test_encode_into_appends() {
        let mut out = vec![0xEEu8];
        encode_pcm16_into(&[1.0], &mut out);
        assert_eq!(out, vec![0xEE, 0xFF, 0x7F]);
    }

    #[test]
    fn test_encode_into_matches_allocating_form() {
        let samples: Vec<f32> = (-16..=16).map(|i| i as f32 / 16.0).collect();
        let mut out = Vec::new();
        encode_pcm16_into(&samples, &mut out);
        assert_eq!(out, encode_pcm16(&samples));
    }
}
