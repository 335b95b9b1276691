//! Module matrix construction.
//!
//! The encoder output is scaled into a square [`BitMatrix`] of the requested
//! pixel size: a 4-module quiet zone surrounds the symbol, each module is
//! scaled by a whole factor and the symbol is centered in the output.

use qrcodegen::{DataTooLong, QrCode, QrSegment, Version};

use crate::models::ErrorCorrection;

/// Light modules around the symbol on every side
pub const QUIET_ZONE: u32 = 4;

/// Square bitmap where `true` is a dark pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    side: u32,
    bits: Vec<bool>,
}

impl BitMatrix {
    fn new(side: u32) -> Self {
        Self {
            side,
            bits: vec![false; (side as usize) * (side as usize)],
        }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.side && y < self.side && self.bits[self.index(x, y)]
    }

    fn set(&mut self, x: u32, y: u32) {
        let index = self.index(x, y);
        self.bits[index] = true;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.side as usize) + (x as usize)
    }
}

/// Encode `contents` at exactly the requested correction level.
///
/// The smallest version that fits is chosen and the level is never boosted.
pub fn encode(contents: &str, correction: ErrorCorrection) -> Result<QrCode, DataTooLong> {
    let segments = QrSegment::make_segments(contents);
    QrCode::encode_segments_advanced(
        &segments,
        correction.ecc(),
        Version::MIN,
        Version::MAX,
        None,
        false,
    )
}

/// Scale `code` into a `size`-pixel square, growing past `size` when the
/// symbol plus quiet zone does not fit.
pub fn render(code: &QrCode, size: u32) -> BitMatrix {
    let modules = code.size() as u32;
    let full = modules + QUIET_ZONE * 2;
    let side = size.max(full);
    let multiple = side / full;
    let padding = (side - modules * multiple) / 2;

    let mut matrix = BitMatrix::new(side);
    for my in 0..modules {
        for mx in 0..modules {
            if !code.get_module(mx as i32, my as i32) {
                continue;
            }
            let left = padding + mx * multiple;
            let top = padding + my * multiple;
            for y in top..top + multiple {
                for x in left..left + multiple {
                    matrix.set(x, y);
                }
            }
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_bounds(matrix: &BitMatrix) -> (u32, u32, u32, u32) {
        let mut min = (u32::MAX, u32::MAX);
        let mut max = (0, 0);
        for y in 0..matrix.side() {
            for x in 0..matrix.side() {
                if matrix.get(x, y) {
                    min = (min.0.min(x), min.1.min(y));
                    max = (max.0.max(x), max.1.max(y));
                }
            }
        }
        (min.0, min.1, max.0, max.1)
    }

    #[test]
    fn test_encode_uses_requested_level() {
        for level in ErrorCorrection::ALL {
            let code = encode("hello", level).unwrap();
            assert_eq!(code.error_correction_level(), level.ecc());
        }
    }

    #[test]
    fn test_encode_short_text_is_version_one() {
        let code = encode("test", ErrorCorrection::L).unwrap();
        assert_eq!(code.size(), 21);
    }

    #[test]
    fn test_encode_too_long() {
        let contents = "x".repeat(4000);
        assert!(encode(&contents, ErrorCorrection::H).is_err());
    }

    #[test]
    fn test_render_matches_requested_size() {
        let code = encode("test", ErrorCorrection::M).unwrap();
        for size in [150, 200, 250, 350] {
            assert_eq!(render(&code, size).side(), size);
        }
    }

    #[test]
    fn test_render_centers_symbol() {
        // 21 modules + 8 quiet = 29; 200 / 29 = 6; padding = (200 - 126) / 2 = 37
        let code = encode("test", ErrorCorrection::L).unwrap();
        let matrix = render(&code, 200);

        let (left, top, right, bottom) = dark_bounds(&matrix);
        assert_eq!((left, top), (37, 37));
        assert_eq!((right, bottom), (37 + 126 - 1, 37 + 126 - 1));
    }

    #[test]
    fn test_render_keeps_quiet_zone() {
        let code = encode("test", ErrorCorrection::L).unwrap();
        let matrix = render(&code, 150);
        let modules = code.size() as u32;
        let multiple = 150 / (modules + QUIET_ZONE * 2);

        let (left, top, _, _) = dark_bounds(&matrix);
        assert!(left >= QUIET_ZONE * multiple);
        assert!(top >= QUIET_ZONE * multiple);
    }

    #[test]
    fn test_render_grows_for_large_symbols() {
        // 2900 bytes only fit in version 40 (177 modules)
        let contents = "a".repeat(2900);
        let code = encode(&contents, ErrorCorrection::L).unwrap();
        let full = code.size() as u32 + QUIET_ZONE * 2;
        assert_eq!(full, 185);

        let matrix = render(&code, 150);
        assert_eq!(matrix.side(), full);
    }

    #[test]
    fn test_get_out_of_bounds_is_light() {
        let code = encode("test", ErrorCorrection::L).unwrap();
        let matrix = render(&code, 150);
        assert!(!matrix.get(150, 0));
        assert!(!matrix.get(0, 150));
    }
}
