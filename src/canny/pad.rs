//! Mask geometry, edge-replication border padding, and the final crop.
//!
//! The working buffer is the source image surrounded by a `half`-pixel margin
//! filled by replicating the nearest valid pixel. The fill is an explicit
//! case analysis over 9 regions (4 corners, 4 strips, interior): corners copy
//! the nearest interior corner pixel, strips copy the nearest interior row or
//! column. Cropping reverses the expansion and writes the interior back into
//! all three channels of the caller's buffer.
use crate::image::{GrayU8, RgbU8};

/// Gaussian mask dimensions derived from sigma.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskGeometry {
    /// Side length of the square Gaussian mask; always odd, at least 3.
    pub mask_size: usize,
    /// Padding margin on each side: `mask_size / 2`.
    pub half: usize,
}

impl MaskGeometry {
    /// `mask_size = 2*round(sqrt(-ln(0.3) * 2 * sigma^2)) + 1`, clamped to a
    /// minimum of 3 so the Sobel window always fits inside the margin.
    pub fn from_sigma(sigma: f32) -> Self {
        let sigma = f64::from(sigma);
        let radius = (-(0.3_f64.ln()) * 2.0 * sigma * sigma).sqrt().round() as usize;
        let mask_size = (2 * radius + 1).max(3);
        Self {
            mask_size,
            half: mask_size / 2,
        }
    }
}

/// Allocate the padded working buffer and fill it from channel 0 of an
/// already-grayscale RGB image.
pub fn expand(src: &RgbU8, half: usize) -> GrayU8 {
    let mut out = GrayU8::new(src.width() + 2 * half, src.height() + 2 * half);
    for y in 0..src.height() {
        for x in 0..src.width() {
            out.set(x + half, y + half, src.get(x, y, 0));
        }
    }
    replicate_border(&mut out, half);
    out
}

/// Fill the `margin`-wide border of `img` by replicating the interior edge.
///
/// The interior `[margin, w-margin) × [margin, h-margin)` must already hold
/// valid data; the 8 border regions are rewritten from it.
pub fn replicate_border(img: &mut GrayU8, margin: usize) {
    if margin == 0 {
        return;
    }
    let (w, h) = (img.w, img.h);
    let (x0, x1) = (margin, w - margin); // interior columns [x0, x1)
    let (y0, y1) = (margin, h - margin); // interior rows [y0, y1)

    // Corners: nearest interior corner pixel.
    let tl = img.get(x0, y0);
    let tr = img.get(x1 - 1, y0);
    let bl = img.get(x0, y1 - 1);
    let br = img.get(x1 - 1, y1 - 1);
    for y in 0..y0 {
        for x in 0..x0 {
            img.set(x, y, tl);
        }
        for x in x1..w {
            img.set(x, y, tr);
        }
    }
    for y in y1..h {
        for x in 0..x0 {
            img.set(x, y, bl);
        }
        for x in x1..w {
            img.set(x, y, br);
        }
    }

    // Top and bottom strips: nearest interior row.
    for x in x0..x1 {
        let top = img.get(x, y0);
        let bottom = img.get(x, y1 - 1);
        for y in 0..y0 {
            img.set(x, y, top);
        }
        for y in y1..h {
            img.set(x, y, bottom);
        }
    }

    // Left and right strips: nearest interior column.
    for y in y0..y1 {
        let left = img.get(x0, y);
        let right = img.get(x1 - 1, y);
        for x in 0..x0 {
            img.set(x, y, left);
        }
        for x in x1..w {
            img.set(x, y, right);
        }
    }
}

/// Copy the interior of the working buffer back into all three channels of
/// the caller's buffer at its original dimensions. Returns the number of
/// confirmed (255) pixels written.
pub fn shrink(workspace: &GrayU8, out: &mut RgbU8, margin: usize) -> usize {
    let mut confirmed = 0;
    for y in 0..out.height() {
        for x in 0..out.width() {
            let v = workspace.get(x + margin, y + margin);
            if v == 255 {
                confirmed += 1;
            }
            out.set_pixel(x, y, v);
        }
    }
    confirmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_size_is_odd_and_at_least_three() {
        for sigma in [0.05_f32, 0.3, 0.5, 1.0, 1.4, 2.0, 3.5, 10.0] {
            let geom = MaskGeometry::from_sigma(sigma);
            assert!(geom.mask_size % 2 == 1, "sigma={sigma}");
            assert!(geom.mask_size >= 3, "sigma={sigma}");
            assert_eq!(geom.half, (geom.mask_size - 1) / 2);
        }
    }

    #[test]
    fn sigma_one_gives_five_tap_mask() {
        // round(sqrt(-ln(0.3) * 2)) = round(1.5518) = 2
        let geom = MaskGeometry::from_sigma(1.0);
        assert_eq!(geom.mask_size, 5);
        assert_eq!(geom.half, 2);
    }

    fn gradient_rgb(w: usize, h: usize) -> RgbU8 {
        let mut img = RgbU8::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set_pixel(x, y, (x * 7 + y * 31) as u8);
            }
        }
        img
    }

    #[test]
    fn corner_blocks_replicate_the_nearest_corner_pixel() {
        let src = gradient_rgb(6, 5);
        let half = 2;
        let padded = expand(&src, half);
        assert_eq!(padded.w, 6 + 2 * half);
        assert_eq!(padded.h, 5 + 2 * half);

        for y in 0..half {
            for x in 0..half {
                assert_eq!(padded.get(x, y), src.get(0, 0, 0));
                assert_eq!(padded.get(padded.w - 1 - x, y), src.get(5, 0, 0));
                assert_eq!(padded.get(x, padded.h - 1 - y), src.get(0, 4, 0));
                assert_eq!(
                    padded.get(padded.w - 1 - x, padded.h - 1 - y),
                    src.get(5, 4, 0)
                );
            }
        }
    }

    #[test]
    fn strips_replicate_the_nearest_row_and_column() {
        let src = gradient_rgb(6, 5);
        let half = 2;
        let padded = expand(&src, half);

        for x in 0..6 {
            for y in 0..half {
                assert_eq!(padded.get(x + half, y), src.get(x, 0, 0));
                assert_eq!(padded.get(x + half, padded.h - 1 - y), src.get(x, 4, 0));
            }
        }
        for y in 0..5 {
            for x in 0..half {
                assert_eq!(padded.get(x, y + half), src.get(0, y, 0));
                assert_eq!(padded.get(padded.w - 1 - x, y + half), src.get(5, y, 0));
            }
        }
    }

    #[test]
    fn crop_of_pad_restores_the_interior() {
        let src = gradient_rgb(7, 4);
        let half = 3;
        let padded = expand(&src, half);
        let mut restored = RgbU8::new(7, 4);
        shrink(&padded, &mut restored, half);
        for y in 0..4 {
            for x in 0..7 {
                for c in 0..3 {
                    assert_eq!(restored.get(x, y, c), src.get(x, y, 0));
                }
            }
        }
    }

    #[test]
    fn shrink_counts_confirmed_pixels() {
        let mut ws = GrayU8::new(5, 5);
        ws.set(2, 2, 255);
        ws.set(3, 2, 255);
        ws.set(0, 0, 255); // margin, must not be counted
        let mut out = RgbU8::new(3, 3);
        let confirmed = shrink(&ws, &mut out, 1);
        assert_eq!(confirmed, 2);
        assert_eq!(out.get(1, 1, 0), 255);
        assert_eq!(out.get(2, 1, 1), 255);
        assert_eq!(out.get(0, 0, 0), 0);
    }
}
