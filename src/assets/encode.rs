use std::{io::Cursor, path::Path};

use crate::{
    foundation::error::{PicturaError, PicturaResult},
    raster::buffer::PixelBuffer,
};

/// Encode pixels as PNG bytes.
pub fn encode_png(pixels: &PixelBuffer) -> PicturaResult<Vec<u8>> {
    let img = to_rgba_image(pixels)?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| PicturaError::io(format!("encode png: {e}")))?;
    Ok(buf)
}

/// Write pixels to `path` as a PNG file.
#[tracing::instrument(skip(pixels), fields(width = pixels.width(), height = pixels.height()))]
pub fn save_png(pixels: &PixelBuffer, path: &Path) -> PicturaResult<()> {
    let bytes = encode_png(pixels)?;
    std::fs::write(path, bytes)
        .map_err(|e| PicturaError::io(format!("write '{}': {e}", path.display())))
}

fn to_rgba_image(pixels: &PixelBuffer) -> PicturaResult<image::RgbaImage> {
    if pixels.width() == 0 || pixels.height() == 0 {
        return Err(PicturaError::io("cannot encode an image with zero area"));
    }
    image::RgbaImage::from_raw(pixels.width(), pixels.height(), pixels.to_rgba8())
        .ok_or_else(|| PicturaError::io("pixel buffer does not match its dimensions"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/encode.rs"]
mod tests;
