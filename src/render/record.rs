//! A painter that records calls instead of drawing.
//!
//! Intended for tests and debugging that want to assert on what a tree asks a backend to do
//! and in which order.

use crate::{
    foundation::core::{Affine, BoundingBox, Point},
    foundation::error::{PicturaError, PicturaResult},
    model::primitives::{Circle, Ellipse, Polygon, Rectangle, Text, TextImage},
    raster::buffer::PixelBuffer,
    render::backend::Painter,
};

/// One recorded [`Painter`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushTransform(Affine),
    PopTransform,
    PushClip(BoundingBox),
    PopClip,
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Circle(Circle),
    Polygon(Polygon),
    Text(Text),
    Pixels {
        origin: Point,
        width: u32,
        height: u32,
    },
}

/// Records every [`Painter`] call along with the transform in effect.
#[derive(Debug)]
pub struct RecordingPainter {
    commands: Vec<DrawCommand>,
    transforms: Vec<Affine>,
    clip_depth: usize,
}

impl Default for RecordingPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingPainter {
    /// Empty log with the identity transform.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            transforms: vec![Affine::IDENTITY],
            clip_depth: 0,
        }
    }

    /// Every call in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Transform currently applied to leaves.
    pub fn current_transform(&self) -> Affine {
        self.transforms.last().copied().unwrap_or(Affine::IDENTITY)
    }

    /// True when every push has been matched by a pop.
    pub fn is_balanced(&self) -> bool {
        self.transforms.len() == 1 && self.clip_depth == 0
    }

    /// Only the leaf draw commands, in order.
    pub fn leaves(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| {
            !matches!(
                c,
                DrawCommand::PushTransform(_)
                    | DrawCommand::PopTransform
                    | DrawCommand::PushClip(_)
                    | DrawCommand::PopClip
            )
        })
    }
}

impl Painter for RecordingPainter {
    fn push_transform(&mut self, transform: Affine) -> PicturaResult<()> {
        let current = self.current_transform();
        self.transforms.push(current * transform);
        self.commands.push(DrawCommand::PushTransform(transform));
        Ok(())
    }

    fn pop_transform(&mut self) -> PicturaResult<()> {
        if self.transforms.len() <= 1 {
            return Err(PicturaError::render("pop_transform without push"));
        }
        self.transforms.pop();
        self.commands.push(DrawCommand::PopTransform);
        Ok(())
    }

    fn push_clip(&mut self, window: BoundingBox) -> PicturaResult<()> {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip(window));
        Ok(())
    }

    fn pop_clip(&mut self) -> PicturaResult<()> {
        self.clip_depth = self
            .clip_depth
            .checked_sub(1)
            .ok_or_else(|| PicturaError::render("pop_clip without push"))?;
        self.commands.push(DrawCommand::PopClip);
        Ok(())
    }

    fn rectangle(&mut self, shape: &Rectangle) -> PicturaResult<()> {
        self.commands.push(DrawCommand::Rectangle(*shape));
        Ok(())
    }

    fn ellipse(&mut self, shape: &Ellipse) -> PicturaResult<()> {
        self.commands.push(DrawCommand::Ellipse(*shape));
        Ok(())
    }

    fn circle(&mut self, shape: &Circle) -> PicturaResult<()> {
        self.commands.push(DrawCommand::Circle(*shape));
        Ok(())
    }

    fn polygon(&mut self, shape: &Polygon) -> PicturaResult<()> {
        self.commands.push(DrawCommand::Polygon(shape.clone()));
        Ok(())
    }

    fn text(&mut self, text: &TextImage) -> PicturaResult<()> {
        self.commands.push(DrawCommand::Text(text.params().clone()));
        Ok(())
    }

    fn pixels(&mut self, origin: Point, pixels: &PixelBuffer) -> PicturaResult<()> {
        self.commands.push(DrawCommand::Pixels {
            origin,
            width: pixels.width(),
            height: pixels.height(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/record.rs"]
mod tests;
