//! In-place RGB → grayscale conversion.
use crate::image::RgbU8;

/// Replace all three channels of every pixel with the Rec. 601 luma
/// `0.299*R + 0.587*G + 0.114*B`, truncated to u8.
pub fn to_grayscale(image: &mut RgbU8) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            let r = image.get(x, y, 0) as f32;
            let g = image.get(x, y, 1) as f32;
            let b = image.get(x, y, 2) as f32;
            let gray = (0.299 * r + 0.587 * g + 0.114 * b) as u8;
            image.set_pixel(x, y, gray);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_channels_carry_the_luma_value() {
        let mut img = RgbU8::new(2, 1);
        img.set(0, 0, 0, 200);
        img.set(0, 0, 1, 100);
        img.set(0, 0, 2, 50);
        to_grayscale(&mut img);

        // 0.299*200 + 0.587*100 + 0.114*50 = 124.2 -> 124
        for c in 0..3 {
            assert_eq!(img.get(0, 0, c), 124);
        }
        for c in 0..3 {
            assert_eq!(img.get(1, 0, c), 0);
        }
    }

    #[test]
    fn pure_white_stays_white() {
        let mut img = RgbU8::new(1, 1);
        img.set_pixel(0, 0, 255);
        to_grayscale(&mut img);
        // 0.299 + 0.587 + 0.114 = 1.0 exactly in f32 rounding terms
        assert!(img.get(0, 0, 0) >= 254);
    }
}
