//! Owned interleaved 8-bit RGB raster.
//!
//! The caller-facing buffer type: the detector reads it, converts it to
//! grayscale in place, and finally rewrites it with the edge map replicated
//! across all three channels.

/// Number of channels in an [`RgbU8`] buffer.
pub const RGB_CHANNELS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbU8 {
    /// Width in pixels
    pub w: usize,
    /// Height in pixels
    pub h: usize,
    /// Interleaved RGBRGB... storage, `w * h * 3` bytes
    data: Vec<u8>,
}

impl RgbU8 {
    /// Zero-initialized (black) buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h * RGB_CHANNELS],
        }
    }

    /// Wrap raw interleaved bytes. `data.len()` must equal `w * h * 3`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), w * h * RGB_CHANNELS);
        Self { w, h, data }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, channel: usize) -> usize {
        (y * self.w + x) * RGB_CHANNELS + channel
    }

    /// Channel value at (x, y); `channel` is 0 (R), 1 (G) or 2 (B).
    #[inline]
    pub fn get(&self, x: usize, y: usize, channel: usize) -> u8 {
        self.data[self.idx(x, y, channel)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, channel: usize, v: u8) {
        let i = self.idx(x, y, channel);
        self.data[i] = v;
    }

    /// Write the same value into all three channels of (x, y).
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, v: u8) {
        let i = self.idx(x, y, 0);
        self.data[i] = v;
        self.data[i + 1] = v;
        self.data[i + 2] = v;
    }

    /// Interleaved bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
