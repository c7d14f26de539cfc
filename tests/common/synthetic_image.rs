use canny_detector::image::RgbU8;

/// Uniform flat-color image.
pub fn flat_rgb(width: usize, height: usize, rgb: (u8, u8, u8)) -> RgbU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = RgbU8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(x, y, 0, rgb.0);
            img.set(x, y, 1, rgb.1);
            img.set(x, y, 2, rgb.2);
        }
    }
    img
}

/// Hard vertical step: columns `[0, at)` black, `[at, width)` white.
pub fn vertical_step_rgb(width: usize, height: usize, at: usize) -> RgbU8 {
    assert!(at < width, "step must fall inside the image");
    let mut img = RgbU8::new(width, height);
    for y in 0..height {
        for x in at..width {
            img.set_pixel(x, y, 255);
        }
    }
    img
}
