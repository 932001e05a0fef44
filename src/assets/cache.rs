use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, LazyLock, Mutex, PoisonError},
};

use crate::{
    assets::decode,
    foundation::error::{PicturaError, PicturaResult},
    model::node::{Image, Node},
    raster::buffer::PixelBuffer,
    raster::source::{RasterImage, RasterOrigin},
};

static GLOBAL: LazyLock<DecodeCache> = LazyLock::new(DecodeCache::new);

#[derive(Default)]
struct Slot {
    buffer: Mutex<Option<PixelBuffer>>,
    decodes: Mutex<usize>,
}

/// Map from canonical source identifier to decoded pixels.
///
/// Entries are inserted on first successful decode and never evicted. Each key has its own
/// slot lock, so concurrent first loads of one source decode it exactly once while different
/// sources decode in parallel. Failed decodes are not remembered.
#[derive(Default)]
pub struct DecodeCache {
    slots: Mutex<HashMap<String, Arc<Slot>>>,
}

impl DecodeCache {
    /// Empty cache, independent of the global one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache used by [`Image::from_file`] and [`Image::from_encoded`].
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Return the cached buffer for `key`, running `decode` only on the first request.
    pub fn get_or_decode(
        &self,
        key: &str,
        decode: impl FnOnce() -> PicturaResult<PixelBuffer>,
    ) -> PicturaResult<PixelBuffer> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(key.to_string()).or_default())
        };

        let mut buffer = slot.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = buffer.as_ref() {
            tracing::debug!(key, "decode cache hit");
            return Ok(hit.clone());
        }

        tracing::debug!(key, "decode cache miss");
        let decoded = match decode() {
            Ok(decoded) => decoded,
            Err(e) => {
                drop(buffer);
                self.forget_failed(key, &slot);
                return Err(e);
            }
        };
        *slot.decodes.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        *buffer = Some(decoded.clone());
        Ok(decoded)
    }

    /// Drop the empty slot left by a failed decode unless another caller is waiting on it.
    fn forget_failed(&self, key: &str, slot: &Arc<Slot>) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let unused = slots
            .get(key)
            .is_some_and(|s| Arc::ptr_eq(s, slot) && Arc::strong_count(s) == 2);
        if unused {
            slots.remove(key);
            tracing::debug!(key, "dropped slot after failed decode");
        }
    }

    /// Number of sources with a slot, decoded or in flight.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when no source has a slot.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful decodes performed for `key`.
    pub fn decode_count(&self, key: &str) -> usize {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(key).map_or(0, |slot| {
            *slot.decodes.lock().unwrap_or_else(PoisonError::into_inner)
        })
    }

    /// True when `key` has a decoded buffer.
    pub fn contains(&self, key: &str) -> bool {
        let slot = {
            let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.get(key).cloned()
        };
        slot.is_some_and(|s| {
            s.buffer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .is_some()
        })
    }

    /// Load an image file through this cache, keyed by its canonical path.
    pub fn load_file(&self, path: impl AsRef<Path>) -> PicturaResult<Image> {
        let path = path.as_ref();
        let canonical = std::fs::canonicalize(path).map_err(|e| {
            PicturaError::construction(format!("resolve '{}': {e}", path.display()))
        })?;
        let origin = RasterOrigin::File(canonical.clone());
        let key = origin
            .cache_key()
            .ok_or_else(|| PicturaError::construction("file origin without cache key"))?;
        let pixels = self.get_or_decode(&key, || decode::decode_file(&canonical))?;
        Ok(Image::from_node(Node::Raster(RasterImage::new(origin, pixels))))
    }

    /// Decode already-fetched bytes (e.g. a network response), keyed by `locator`.
    pub fn load_encoded(&self, locator: &str, bytes: &[u8]) -> PicturaResult<Image> {
        let origin = RasterOrigin::Encoded(locator.to_string());
        let key = origin
            .cache_key()
            .ok_or_else(|| PicturaError::construction("encoded origin without cache key"))?;
        let pixels = self.get_or_decode(&key, || decode::decode_bytes(locator, bytes, None))?;
        Ok(Image::from_node(Node::Raster(RasterImage::new(origin, pixels))))
    }
}

impl std::fmt::Debug for DecodeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("DecodeCache").field("keys", &len).finish()
    }
}

impl Image {
    /// Decode an image file (raster formats or SVG) through the process-wide cache.
    pub fn from_file(path: impl AsRef<Path>) -> PicturaResult<Self> {
        DecodeCache::global().load_file(path)
    }

    /// Decode already-fetched bytes identified by `locator` through the process-wide cache.
    pub fn from_encoded(locator: &str, bytes: &[u8]) -> PicturaResult<Self> {
        DecodeCache::global().load_encoded(locator, bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/cache.rs"]
mod tests;
