//! sRGB transfer functions

/// Decode a gamma-encoded sRGB value in `[0, 1]` to linear light.
pub fn srgb_to_linear(value: f32) -> f32 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear value in `[0, 1]` with the sRGB curve.
pub fn linear_to_srgb(value: f32) -> f32 {
    if value <= 0.003_130_8 {
        value * 12.92
    } else {
        value.powf(1.0 / 2.4) * 1.055 - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(linear_to_srgb(0.0), 0.0);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_known_values() {
        // Mid-grey 0.5 sRGB is ~21.4% linear
        assert!((srgb_to_linear(0.5) - 0.214_041).abs() < 1e-4);
        // Linear segment below the knee
        assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-7);
    }

    #[test]
    fn test_monotonic() {
        let mut previous = srgb_to_linear(0.0);
        for i in 1..=255 {
            let current = srgb_to_linear(i as f32 / 255.0);
            assert!(current > previous, "not increasing at {}", i);
            previous = current;
        }
    }

    #[test]
    fn test_round_trip_recovers_bytes() {
        for byte in 0..=255u8 {
            let encoded = byte as f32 / 255.0;
            let recovered = linear_to_srgb(srgb_to_linear(encoded));
            assert!(
                (recovered - encoded).abs() <= 1.0 / 255.0,
                "byte {} came back as {}",
                byte,
                recovered * 255.0
            );
            assert_eq!((recovered * 255.0).round() as u8, byte);
        }
    }
}
