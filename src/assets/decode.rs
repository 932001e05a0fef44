use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{PicturaError, PicturaResult},
    foundation::math::unpremultiply,
    raster::buffer::PixelBuffer,
};

/// Decode encoded raster bytes (PNG, JPEG, GIF, BMP, ...) into straight RGBA8.
///
/// Sources without an alpha channel come back fully opaque.
pub fn decode_image(bytes: &[u8]) -> PicturaResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes)
        .context("decode image from memory")
        .map_err(|e| PicturaError::construction(format!("{e:#}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_rgba8(width, height, rgba.as_raw())
}

/// Parse SVG bytes and rasterize them at their intrinsic size.
pub fn decode_svg(bytes: &[u8], resources_dir: Option<&Path>) -> PicturaResult<PixelBuffer> {
    let opts = usvg::Options {
        resources_dir: resources_dir.map(Path::to_path_buf),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(bytes, &opts)
        .context("parse svg tree")
        .map_err(|e| PicturaError::construction(format!("{e:#}")))?;

    let size = tree.size();
    let width = svg_extent(size.width())?;
    let height = svg_extent(size.height())?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| PicturaError::construction("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut straight = pixmap.data().to_vec();
    for px in straight.chunks_exact_mut(4) {
        let un = unpremultiply([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&un);
    }
    PixelBuffer::from_rgba8(width, height, &straight)
}

/// Decode with the codec chosen by `name`'s extension (`.svg` or any raster format).
pub fn decode_bytes(
    name: &str,
    bytes: &[u8],
    resources_dir: Option<&Path>,
) -> PicturaResult<PixelBuffer> {
    if is_svg(name) {
        decode_svg(bytes, resources_dir)
    } else {
        decode_image(bytes)
    }
}

/// Read and decode a file, choosing the codec from its extension.
#[tracing::instrument]
pub fn decode_file(path: &Path) -> PicturaResult<PixelBuffer> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read image bytes from '{}'", path.display()))
        .map_err(|e| PicturaError::construction(format!("{e:#}")))?;
    decode_bytes(&path.to_string_lossy(), &bytes, path.parent())
}

fn is_svg(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn svg_extent(v: f32) -> PicturaResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(PicturaError::construction("svg has invalid width/height"));
    }
    // Avoid pathological allocations from bogus intrinsic sizes.
    const MAX_DIM: u32 = 16_384;
    let px = (v.ceil() as u32).max(1);
    if px > MAX_DIM {
        return Err(PicturaError::construction(format!(
            "svg intrinsic size too large: {px} (max {MAX_DIM})"
        )));
    }
    Ok(px)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
