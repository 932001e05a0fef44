use std::sync::Arc;

use crate::foundation::core::Color;
use crate::foundation::error::{PicturaError, PicturaResult};

/// Row-major, tightly packed buffer of straight-alpha colors.
///
/// The pixel storage is shared; a buffer is never mutated after construction, so clones are
/// cheap and can be handed to several images at once.
#[derive(Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Arc<Vec<Color>>,
}

impl PixelBuffer {
    /// Wrap row-major `pixels`; the count must be `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> PicturaResult<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(PicturaError::validation(format!(
                "pixel count {} does not match {width}x{height}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: Arc::new(pixels),
        })
    }

    /// Build from straight RGBA8 bytes (4 bytes per pixel).
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> PicturaResult<Self> {
        if bytes.len() != width as usize * height as usize * 4 {
            return Err(PicturaError::validation(format!(
                "rgba8 byte length {} does not match {width}x{height}",
                bytes.len()
            )));
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Color::rgba(px[0], px[1], px[2], px[3]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Zero-sized buffer.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Arc::new(Vec::new()),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixels.
    pub fn pixels(&self) -> &[Color] {
        self.pixels.as_slice()
    }

    /// Pixel at `(col, row)`, or `None` outside the buffer.
    pub fn get(&self, col: u32, row: u32) -> Option<Color> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.pixels
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    /// Straight RGBA8 bytes, 4 per pixel.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for c in self.pixels.iter() {
            out.extend_from_slice(&c.to_array());
        }
        out
    }

    pub(crate) fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl PartialEq for PixelBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && (self.shares_storage(other) || self.pixels == other.pixels)
    }
}

impl Eq for PixelBuffer {}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels_ptr", &Arc::as_ptr(&self.pixels))
            .finish()
    }
}
