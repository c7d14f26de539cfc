//! Non-maximum suppression keyed by the quantized gradient direction.
//!
//! Each interior pixel is compared against the two neighbors selected by its
//! direction bucket. Ties along a ridge are broken directionally: the pixel
//! survives iff its magnitude is ≥ the backward neighbor and strictly greater
//! than the forward neighbor, so a two-pixel plateau (the usual result of
//! blurring a hard step) thins to exactly one pixel. Survivors write their
//! magnitude into the working buffer; everything else becomes 0.
use crate::image::GrayU8;

/// Neighbor offsets (forward, backward) for each direction bucket, as
/// `(dx, dy)` pairs.
#[inline]
fn neighbor_offsets(bucket: u8) -> ((isize, isize), (isize, isize)) {
    match bucket {
        // Horizontal pair for a horizontal gradient.
        0 => ((1, 0), (-1, 0)),
        // Anti-diagonal pair.
        45 => ((1, -1), (-1, 1)),
        // Vertical pair.
        90 => ((0, 1), (0, -1)),
        // Diagonal pair.
        _ => ((1, 1), (-1, -1)),
    }
}

/// Suppress non-maxima in the working buffer.
///
/// `mag` and `dir` are the (read-only) outputs of the gradient stage;
/// `workspace` receives `magnitude` for survivors and 0 otherwise. The
/// 1-pixel outer ring is left untouched.
pub fn suppress(workspace: &mut GrayU8, mag: &GrayU8, dir: &GrayU8) {
    let (w, h) = (workspace.w, workspace.h);
    if w < 3 || h < 3 {
        return;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let m = mag.get(x, y);
            let (fwd, bwd) = neighbor_offsets(dir.get(x, y));
            let forward = mag.get(
                (x as isize + fwd.0) as usize,
                (y as isize + fwd.1) as usize,
            );
            let backward = mag.get(
                (x as isize + bwd.0) as usize,
                (y as isize + bwd.1) as usize,
            );
            let keep = m >= backward && m > forward;
            workspace.set(x, y, if keep { m } else { 0 });
        }
    }
}
