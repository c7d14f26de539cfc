//! Gaussian kernel construction and noise-reduction convolution.
use crate::image::{GrayU8, ImageF32, ImageView};

/// Build the square Gaussian mask for the given sigma.
///
/// `G(i,j) = (1/(2π·σ²)) · exp(-(i²+j²)/(2σ²))` with `i, j` centered on the
/// mask. The mask is normalized by the formula only; its taps do not
/// necessarily sum to 1.
pub fn gaussian_kernel(sigma: f32, mask_size: usize) -> ImageF32 {
    debug_assert!(mask_size % 2 == 1);
    let half = (mask_size / 2) as isize;
    let sigma2 = f64::from(sigma) * f64::from(sigma);
    let norm = 1.0 / (2.0 * std::f64::consts::PI * sigma2);

    let mut kernel = ImageF32::new(mask_size, mask_size);
    for i in -half..=half {
        for j in -half..=half {
            let v = norm * (-((i * i + j * j) as f64) / (2.0 * sigma2)).exp();
            kernel.set((j + half) as usize, (i + half) as usize, v as f32);
        }
    }
    kernel
}

/// Convolve the padded working buffer with the Gaussian mask.
///
/// Results are written only into the central region
/// `[half, w-half) × [half, h-half)`; the border ring keeps whatever the
/// padding stage wrote. Reads come from a snapshot of the input so earlier
/// output rows never contaminate later sums.
pub fn convolve(workspace: &mut GrayU8, kernel: &ImageF32) {
    let half = kernel.w / 2;
    let (w, h) = (workspace.w, workspace.h);
    if w < kernel.w || h < kernel.h {
        return;
    }
    let src = workspace.clone();

    for y in half..h - half {
        for x in half..w - half {
            let mut acc = 0.0_f32;
            for ky in 0..kernel.h {
                let src_row = src.row(y + ky - half);
                let k_row = kernel.row(ky);
                for kx in 0..kernel.w {
                    acc += src_row[x + kx - half] as f32 * k_row[kx];
                }
            }
            workspace.set(x, y, acc.round().clamp(0.0, 255.0) as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canny::pad::{replicate_border, MaskGeometry};

    #[test]
    fn kernel_is_symmetric_in_both_axes() {
        let geom = MaskGeometry::from_sigma(1.4);
        let k = gaussian_kernel(1.4, geom.mask_size);
        let n = geom.mask_size - 1;
        for i in 0..geom.mask_size {
            for j in 0..geom.mask_size {
                assert_eq!(k.get(j, i), k.get(n - j, i));
                assert_eq!(k.get(j, i), k.get(j, n - i));
                assert_eq!(k.get(j, i), k.get(n - j, n - i));
            }
        }
    }

    #[test]
    fn kernel_peaks_at_the_center() {
        let k = gaussian_kernel(1.0, 5);
        let center = k.get(2, 2);
        let expected = 1.0 / (2.0 * std::f32::consts::PI);
        assert!((center - expected).abs() < 1e-6);
        assert!((center - k.max_value()).abs() < f32::EPSILON);
    }

    #[test]
    fn flat_buffer_stays_flat_after_blur_and_repad() {
        let geom = MaskGeometry::from_sigma(1.0);
        let mut ws = GrayU8::from_raw(12, 10, vec![128; 12 * 10]);
        let kernel = gaussian_kernel(1.0, geom.mask_size);
        convolve(&mut ws, &kernel);
        replicate_border(&mut ws, geom.half);

        let v = ws.get(geom.half, geom.half);
        assert!(ws.data.iter().all(|&p| p == v), "seam after blur: {ws:?}");
    }

    #[test]
    fn blur_does_not_touch_the_border_ring() {
        let geom = MaskGeometry::from_sigma(1.0);
        let mut ws = GrayU8::from_raw(12, 10, vec![200; 12 * 10]);
        let kernel = gaussian_kernel(1.0, geom.mask_size);
        convolve(&mut ws, &kernel);

        for x in 0..ws.w {
            assert_eq!(ws.get(x, 0), 200);
            assert_eq!(ws.get(x, ws.h - 1), 200);
        }
        for y in 0..ws.h {
            assert_eq!(ws.get(0, y), 200);
            assert_eq!(ws.get(ws.w - 1, y), 200);
        }
    }
}
