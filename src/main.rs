use canny_detector::image::RgbU8;
use canny_detector::{EdgeDetector, EdgeParams};

fn main() {
    // Demo stub: runs the detector on a synthetic two-tone image
    let (w, h) = (640_usize, 480_usize);
    let mut image = RgbU8::new(w, h);
    for y in 0..h {
        for x in w / 2..w {
            image.set_pixel(x, y, 255);
        }
    }

    let detector = match EdgeDetector::new(EdgeParams::default()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    match detector.process(&mut image) {
        Ok(res) => println!(
            "edges={} mask={} latency_ms={:.3}",
            res.edge_pixels, res.mask_size, res.latency_ms
        ),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
