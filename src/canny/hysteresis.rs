//! Two-threshold hysteresis with an explicit worklist.
//!
//! Pixels at or above the high threshold seed confirmed edges (255); the
//! seed's 8-connected region is then grown through any pixel at or above the
//! low threshold. Growth uses an explicit coordinate stack instead of
//! recursion, so the traversal depth is bounded by memory, not the call
//! stack. Zero-magnitude pixels are never confirmed, which keeps constant
//! images empty even with a threshold of 0. The final sweep forces every
//! unconfirmed pixel to 0, so the output is strictly binary.
use crate::image::GrayU8;

const CONFIRMED: u8 = 255;

/// Apply hysteresis thresholding to the working buffer in place.
pub fn threshold(workspace: &mut GrayU8, low: u8, high: u8) {
    debug_assert!(low <= high);
    let (w, h) = (workspace.w, workspace.h);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let v = workspace.get(x, y);
            if v != CONFIRMED && v >= high && v > 0 {
                workspace.set(x, y, CONFIRMED);
                stack.push((x, y));
                grow(workspace, &mut stack, low);
            }
        }
    }

    for v in &mut workspace.data {
        if *v != CONFIRMED {
            *v = 0;
        }
    }
}

/// Flood the 8-connected region reachable from the pixels on `stack` through
/// values ≥ `low`, confirming them; neighbors below `low` are zeroed.
fn grow(workspace: &mut GrayU8, stack: &mut Vec<(usize, usize)>, low: u8) {
    let (w, h) = (workspace.w, workspace.h);
    while let Some((x, y)) = stack.pop() {
        for dy in -1_isize..=1 {
            for dx in -1_isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                let v = workspace.get(nx, ny);
                if v == CONFIRMED {
                    continue;
                }
                if v >= low && v > 0 {
                    workspace.set(nx, ny, CONFIRMED);
                    stack.push((nx, ny));
                } else {
                    workspace.set(nx, ny, 0);
                }
            }
        }
    }
}
