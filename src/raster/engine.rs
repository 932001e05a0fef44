use rayon::prelude::*;

use crate::foundation::core::Color;
use crate::foundation::error::{PicturaError, PicturaResult};
use crate::model::node::{Image, Node};
use crate::raster::buffer::PixelBuffer;
use crate::raster::source::{RasterImage, RasterOrigin};

/// Generate a `width` x `height` raster by calling `generator(col, row, ctx)` once per pixel.
///
/// Rows are filled in parallel, so the generator must not depend on call order.
#[tracing::instrument(skip(generator, ctx))]
pub fn build<C, F>(width: u32, height: u32, generator: F, ctx: &C) -> PicturaResult<Image>
where
    C: Sync + ?Sized,
    F: Fn(u32, u32, &C) -> Color + Sync,
{
    let pixels = generate(width, height, |col, row| generator(col, row, ctx));
    let buffer = PixelBuffer::from_pixels(width, height, pixels)?;
    Ok(Image::from_node(Node::Raster(RasterImage::new(
        RasterOrigin::Generated,
        buffer,
    ))))
}

/// Produce a new raster whose pixels are `transform(col, row, color, ctx)` of `source`.
///
/// `source` must be a raster or frozen image; it is never modified.
#[tracing::instrument(skip(source, transform, ctx))]
pub fn map<C, F>(source: &Image, transform: F, ctx: &C) -> PicturaResult<Image>
where
    C: Sync + ?Sized,
    F: Fn(u32, u32, Color, &C) -> Color + Sync,
{
    let src = source.pixel_buffer().ok_or_else(|| {
        PicturaError::validation("map requires a raster or frozen image; freeze it first")
    })?;
    let (width, height) = (src.width(), src.height());
    let pixels = generate(width, height, |col, row| {
        // in range by construction
        let color = src.get(col, row).unwrap_or(Color::TRANSPARENT);
        transform(col, row, color, ctx)
    });
    let buffer = PixelBuffer::from_pixels(width, height, pixels)?;
    Ok(Image::from_node(Node::Raster(RasterImage::new(
        RasterOrigin::Generated,
        buffer,
    ))))
}

fn generate<F>(width: u32, height: u32, pixel: F) -> Vec<Color>
where
    F: Fn(u32, u32) -> Color + Sync,
{
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut pixels = vec![Color::TRANSPARENT; width as usize * height as usize];
    pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row, line)| {
            let row = row as u32;
            for (col, slot) in line.iter_mut().enumerate() {
                *slot = pixel(col as u32, row);
            }
        });
    pixels
}

impl Image {
    /// See [`map`].
    pub fn map<C, F>(&self, transform: F, ctx: &C) -> PicturaResult<Image>
    where
        C: Sync + ?Sized,
        F: Fn(u32, u32, Color, &C) -> Color + Sync,
    {
        map(self, transform, ctx)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/engine.rs"]
mod tests;
