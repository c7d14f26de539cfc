//! Sobel gradients: magnitude, max-rescaling, and 4-bucket directions.
//!
//! Convolves the fixed 3×3 Sobel pair over every pixel whose window fits,
//! producing `sqrt(Gx²+Gy²)/4` magnitudes and `atan2(Gy,Gx)` directions
//! quantized to {0, 45, 90, 135} degrees. Magnitudes are then rescaled so the
//! run's maximum lands on 255, making the map directly usable as pixel
//! intensity by the suppression and hysteresis stages. The 1-pixel outer ring
//! gets magnitude 0 and bucket 0; the padding margin keeps it clear of image
//! content.
use crate::image::{GrayU8, ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient maps at the padded working-buffer dimensions.
#[derive(Clone, Debug)]
pub struct Gradients {
    /// Magnitude rescaled to [0, 255]; the maximum observed magnitude maps
    /// to 255 (unless the image is constant, in which case all zeros).
    pub mag: GrayU8,
    /// Quantized direction per pixel: one of 0, 45, 90, 135.
    pub dir: GrayU8,
}

/// Quantize an angle in degrees, range (-180, 180], into the four direction
/// buckets. The wrap-around range `(157.5, 180] ∪ (-180, -157.5]` folds onto
/// bucket 0.
#[inline]
fn quantize_direction(angle: f32) -> u8 {
    if (angle > -22.5 && angle <= 22.5) || angle > 157.5 || angle <= -157.5 {
        0
    } else if (angle > 22.5 && angle <= 67.5) || (angle > -157.5 && angle <= -112.5) {
        45
    } else if (angle > 67.5 && angle <= 112.5) || (angle > -112.5 && angle <= -67.5) {
        90
    } else {
        135
    }
}

/// Compute Sobel gradients on the blurred working buffer.
pub fn sobel_gradients(l: &GrayU8) -> Gradients {
    let (w, h) = (l.w, l.h);
    let mut raw = ImageF32::new(w, h);
    let mut dir = GrayU8::new(w, h);
    let mut max_mag = 0.0_f32;

    if w >= 3 && h >= 3 {
        for y in 1..h - 1 {
            let rows = [l.row(y - 1), l.row(y), l.row(y + 1)];
            let out_mag = raw.row_mut(y);
            let out_dir = dir.row_mut(y);
            for x in 1..w - 1 {
                let mut gx = 0.0_f32;
                let mut gy = 0.0_f32;
                for (ky, row) in rows.iter().enumerate() {
                    let kx_row = &SOBEL_KERNEL_X[ky];
                    let ky_row = &SOBEL_KERNEL_Y[ky];
                    for kx in 0..3 {
                        let v = row[x + kx - 1] as f32;
                        gx += v * kx_row[kx];
                        gy += v * ky_row[kx];
                    }
                }

                let mag = (gx * gx + gy * gy).sqrt() / 4.0;
                out_mag[x] = mag;
                max_mag = max_mag.max(mag);

                // Zero gradient has no angle; it lands in bucket 0.
                out_dir[x] = if gx == 0.0 && gy == 0.0 {
                    0
                } else {
                    quantize_direction(gy.atan2(gx).to_degrees())
                };
            }
        }
    }

    Gradients {
        mag: rescale(&raw, max_mag),
        dir,
    }
}

/// Map raw magnitudes onto [0, 255] via `255 * m / max`. A constant image
/// (max 0) maps to all zeros.
fn rescale(raw: &ImageF32, max_mag: f32) -> GrayU8 {
    let mut out = GrayU8::new(raw.w, raw.h);
    if max_mag <= 0.0 {
        return out;
    }
    let scale = 255.0 / max_mag;
    for y in 0..raw.h {
        let src = raw.row(y);
        let dst = out.row_mut(y);
        for x in 0..raw.w {
            dst[x] = (src[x] * scale) as u8;
        }
    }
    out
}
