use std::sync::Arc;

use crate::foundation::core::{BoundingBox, Color, TextStyle};
use crate::foundation::error::{PicturaError, PicturaResult};
use crate::foundation::math::snap_ceil;

/// Font-metrics collaborator: reports the box a run of text occupies.
pub trait TextMetrics {
    fn measure(&mut self, text: &str, size: f32, style: TextStyle) -> PicturaResult<BoundingBox>;
}

fn validate_size(size: f32) -> PicturaResult<()> {
    if !size.is_finite() || size <= 0.0 {
        return Err(PicturaError::validation("text size must be finite and > 0"));
    }
    Ok(())
}

/// Font-free estimate: every char is `0.6 * size` wide, every line `1.2 * size` tall.
///
/// Good enough for layout tests and headless use where no font file is at hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxTextMetrics;

impl TextMetrics for ApproxTextMetrics {
    fn measure(&mut self, text: &str, size: f32, _style: TextStyle) -> PicturaResult<BoundingBox> {
        validate_size(size)?;
        let size = f64::from(size);
        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.lines() {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        let width = snap_ceil(widest as f64 * size * 0.6);
        let height = snap_ceil(lines.max(1) as f64 * size * 1.2);
        Ok(BoundingBox::new(0, 0, width, height))
    }
}

/// Shapes text with parley using one font loaded from bytes.
///
/// Used both to measure text nodes and, by the CPU renderer, to lay out glyph runs.
pub struct ParleyTextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Color>,
    family: String,
    font_bytes: Arc<Vec<u8>>,
}

impl ParleyTextEngine {
    /// Register the font in `font_bytes`; fails if it holds no usable family.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> PicturaResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            PicturaError::validation("no font families registered from font bytes")
        })?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PicturaError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            font_bytes: Arc::new(font_bytes),
        })
    }

    /// Family name registered from the font.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The raw font file.
    pub fn font_bytes(&self) -> &Arc<Vec<u8>> {
        &self.font_bytes
    }

    /// Shape `text` on a single unbounded line.
    pub fn layout(
        &mut self,
        text: &str,
        size: f32,
        style: TextStyle,
        color: Color,
    ) -> PicturaResult<parley::Layout<Color>> {
        validate_size(size)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size));
        builder.push_default(parley::style::StyleProperty::Brush(color));
        if style.is_bold() {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }
        if style.is_italic() {
            builder.push_default(parley::style::StyleProperty::FontStyle(
                parley::style::FontStyle::Italic,
            ));
        }

        let mut layout: parley::Layout<Color> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextMetrics for ParleyTextEngine {
    fn measure(&mut self, text: &str, size: f32, style: TextStyle) -> PicturaResult<BoundingBox> {
        let layout = self.layout(text, size, style, Color::BLACK)?;
        Ok(BoundingBox::new(
            0,
            0,
            snap_ceil(f64::from(layout.width())),
            snap_ceil(f64::from(layout.height())),
        ))
    }
}

impl std::fmt::Debug for ParleyTextEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyTextEngine")
            .field("family", &self.family)
            .field("font_bytes_len", &self.font_bytes.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;
