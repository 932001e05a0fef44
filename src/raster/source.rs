use std::path::PathBuf;

use crate::raster::buffer::PixelBuffer;

/// Where a raster image's pixels came from.
///
/// Decoded sources carry their canonical identifier so that two images built from the same
/// source compare equal and share one decode-cache entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RasterOrigin {
    /// Canonicalized filesystem path.
    File(PathBuf),
    /// Caller-supplied locator for already-fetched encoded bytes (e.g. a URL).
    Encoded(String),
    /// Produced by `build` or `map`.
    Generated,
}

impl RasterOrigin {
    /// Key used by the decode cache, if this origin is cacheable.
    pub fn cache_key(&self) -> Option<String> {
        match self {
            Self::File(p) => Some(format!("file:{}", p.display())),
            Self::Encoded(locator) => Some(format!("encoded:{locator}")),
            Self::Generated => None,
        }
    }
}

/// Decoded or generated pixels together with where they came from.
#[derive(Clone, Debug)]
pub struct RasterImage {
    pub(crate) origin: RasterOrigin,
    pub(crate) pixels: PixelBuffer,
}

impl RasterImage {
    /// Pair `pixels` with their `origin`.
    pub fn new(origin: RasterOrigin, pixels: PixelBuffer) -> Self {
        Self { origin, pixels }
    }

    pub fn origin(&self) -> &RasterOrigin {
        &self.origin
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}

impl PartialEq for RasterImage {
    fn eq(&self, other: &Self) -> bool {
        if self.origin != other.origin {
            return false;
        }
        match self.origin {
            // Same canonical source means same decoded pixels.
            RasterOrigin::File(_) | RasterOrigin::Encoded(_) => true,
            RasterOrigin::Generated => self.pixels == other.pixels,
        }
    }
}
