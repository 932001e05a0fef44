use std::sync::Arc;

use vello_cpu::kurbo::{self as ck, Shape};

use crate::{
    foundation::core::{Affine, BoundingBox, Color, DrawMode, Point},
    foundation::error::{PicturaError, PicturaResult},
    foundation::math::{premultiply, unpremultiply},
    model::node::Image,
    model::primitives::{Circle, Ellipse, Polygon, Rectangle, TextImage},
    raster::buffer::PixelBuffer,
    render::backend::{Painter, Rasterizer, RenderSettings},
    text::metrics::ParleyTextEngine,
};

const PATH_TOLERANCE: f64 = 0.1;

/// CPU rasterizer built on `vello_cpu`.
///
/// Text nodes need a font: without [`CpuRenderer::with_font`] drawing one is a render error.
#[derive(Debug, Default)]
pub struct CpuRenderer {
    settings: RenderSettings,
    text: Option<ParleyTextEngine>,
    font: Option<vello_cpu::peniko::FontData>,
}

impl CpuRenderer {
    /// Renderer without a font; fails on invalid settings.
    pub fn new(settings: RenderSettings) -> PicturaResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            text: None,
            font: None,
        })
    }

    /// Use the font in `font_bytes` for text nodes.
    pub fn with_font(mut self, font_bytes: Vec<u8>) -> PicturaResult<Self> {
        let engine = ParleyTextEngine::from_font_bytes(font_bytes)?;
        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(engine.font_bytes().as_ref().clone()),
            0,
        );
        self.text = Some(engine);
        self.font = Some(font);
        Ok(self)
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// The text engine, which doubles as the metrics collaborator for text nodes.
    pub fn text_engine(&mut self) -> Option<&mut ParleyTextEngine> {
        self.text.as_mut()
    }
}

impl Rasterizer for CpuRenderer {
    #[tracing::instrument(skip(self, image), fields(bounds = %image.bounds()))]
    fn rasterize(&mut self, image: &Image) -> PicturaResult<PixelBuffer> {
        let bounds = image.bounds();
        let width: u16 = bounds
            .width()
            .try_into()
            .map_err(|_| PicturaError::render("surface width exceeds u16"))?;
        let height: u16 = bounds
            .height()
            .try_into()
            .map_err(|_| PicturaError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return PixelBuffer::from_pixels(u32::from(width), u32::from(height), Vec::new());
        }

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        if let Some(clear) = self.settings.clear {
            ctx.set_transform(ck::Affine::IDENTITY);
            ctx.set_paint(cpu_color(clear));
            ctx.fill_rect(&ck::Rect::new(0.0, 0.0, f64::from(width), f64::from(height)));
        }

        {
            let mut painter = CpuPainter {
                ctx: &mut ctx,
                transforms: vec![Affine::translate((
                    -f64::from(bounds.left()),
                    -f64::from(bounds.top()),
                ))],
                outline_width: self.settings.outline_width,
                text: self.text.as_mut(),
                font: self.font.as_ref(),
            };
            image.draw(&mut painter)?;
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        tracing::debug!(width, height, "rasterized surface");

        let mut rgba = pixmap.data_as_u8_slice().to_vec();
        for px in rgba.chunks_exact_mut(4) {
            let straight = unpremultiply([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&straight);
        }
        PixelBuffer::from_rgba8(u32::from(width), u32::from(height), &rgba)
    }
}

struct CpuPainter<'a> {
    ctx: &'a mut vello_cpu::RenderContext,
    transforms: Vec<Affine>,
    outline_width: f64,
    text: Option<&'a mut ParleyTextEngine>,
    font: Option<&'a vello_cpu::peniko::FontData>,
}

impl CpuPainter<'_> {
    fn current(&self) -> Affine {
        self.transforms.last().copied().unwrap_or(Affine::IDENTITY)
    }

    fn shape(&mut self, path: &ck::BezPath, color: Color, mode: DrawMode, closed: bool) {
        self.ctx.set_transform(affine_to_cpu(self.current()));
        self.ctx.set_paint(cpu_color(color));
        if mode == DrawMode::Solid && closed {
            self.ctx.fill_path(path);
        } else {
            self.ctx.set_stroke(ck::Stroke::new(self.outline_width));
            self.ctx.stroke_path(path);
        }
    }
}

impl Painter for CpuPainter<'_> {
    fn push_transform(&mut self, transform: Affine) -> PicturaResult<()> {
        let current = self.current();
        self.transforms.push(current * transform);
        Ok(())
    }

    fn pop_transform(&mut self) -> PicturaResult<()> {
        if self.transforms.len() <= 1 {
            return Err(PicturaError::render("pop_transform without push"));
        }
        self.transforms.pop();
        Ok(())
    }

    fn push_clip(&mut self, window: BoundingBox) -> PicturaResult<()> {
        self.ctx.set_transform(affine_to_cpu(self.current()));
        let path = rect_to_cpu(window).to_path(PATH_TOLERANCE);
        self.ctx.push_clip_layer(&path);
        Ok(())
    }

    fn pop_clip(&mut self) -> PicturaResult<()> {
        self.ctx.pop_layer();
        Ok(())
    }

    fn rectangle(&mut self, shape: &Rectangle) -> PicturaResult<()> {
        let path = rect_to_cpu(shape.bounds()).to_path(PATH_TOLERANCE);
        self.shape(&path, shape.color, shape.mode, true);
        Ok(())
    }

    fn ellipse(&mut self, shape: &Ellipse) -> PicturaResult<()> {
        let path = ck::Ellipse::from_rect(rect_to_cpu(shape.bounds())).to_path(PATH_TOLERANCE);
        self.shape(&path, shape.color, shape.mode, true);
        Ok(())
    }

    fn circle(&mut self, shape: &Circle) -> PicturaResult<()> {
        let c = shape.center_point();
        let path = ck::Circle::new(
            (f64::from(c.x), f64::from(c.y)),
            f64::from(shape.radius),
        )
        .to_path(PATH_TOLERANCE);
        self.shape(&path, shape.color, shape.mode, true);
        Ok(())
    }

    fn polygon(&mut self, shape: &Polygon) -> PicturaResult<()> {
        let Some((first, rest)) = shape.points.split_first() else {
            return Ok(());
        };
        let mut path = ck::BezPath::new();
        path.move_to(point_to_cpu(*first));
        for p in rest {
            path.line_to(point_to_cpu(*p));
        }
        // Two points are a line segment, not an area.
        let closed = shape.points.len() > 2;
        if closed {
            path.close_path();
        }
        self.shape(&path, shape.color, shape.mode, closed);
        Ok(())
    }

    fn text(&mut self, text: &TextImage) -> PicturaResult<()> {
        let (Some(engine), Some(font)) = (self.text.as_deref_mut(), self.font) else {
            return Err(PicturaError::render(
                "drawing text requires a font; use CpuRenderer::with_font",
            ));
        };
        let p = text.params();
        let layout = engine.layout(&p.text, p.size, p.style, p.color)?;

        self.ctx.set_transform(affine_to_cpu(self.current()));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                self.ctx.set_paint(cpu_color(run.style().brush));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    fn pixels(&mut self, origin: Point, pixels: &PixelBuffer) -> PicturaResult<()> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Ok(());
        }
        let pixmap = buffer_to_pixmap(pixels)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        let at = self.current() * Affine::translate((f64::from(origin.x), f64::from(origin.y)));
        self.ctx.set_transform(affine_to_cpu(at));
        self.ctx.set_paint_transform(ck::Affine::IDENTITY);
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&ck::Rect::new(
            0.0,
            0.0,
            f64::from(pixels.width()),
            f64::from(pixels.height()),
        ));
        Ok(())
    }
}

fn affine_to_cpu(a: Affine) -> ck::Affine {
    ck::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> ck::Point {
    ck::Point::new(f64::from(p.x), f64::from(p.y))
}

fn rect_to_cpu(b: BoundingBox) -> ck::Rect {
    ck::Rect::new(
        f64::from(b.left()),
        f64::from(b.top()),
        f64::from(b.right()),
        f64::from(b.bottom()),
    )
}

fn cpu_color(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn buffer_to_pixmap(pixels: &PixelBuffer) -> PicturaResult<vello_cpu::Pixmap> {
    let w: u16 = pixels
        .width()
        .try_into()
        .map_err(|_| PicturaError::render("image width exceeds u16"))?;
    let h: u16 = pixels
        .height()
        .try_into()
        .map_err(|_| PicturaError::render("image height exceeds u16"))?;

    let mut may_have_opacities = false;
    let premul = pixels
        .pixels()
        .iter()
        .map(|c| {
            may_have_opacities |= c.a != 255;
            let [r, g, b, a] = premultiply(c.to_array());
            vello_cpu::peniko::color::PremulRgba8 { r, g, b, a }
        })
        .collect();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        premul,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
