use crate::{
    foundation::core::Point,
    foundation::error::PicturaResult,
    model::node::{Image, Node},
    render::backend::Painter,
};

impl Image {
    /// Issue the drawing calls for this image, back to front.
    pub fn draw(&self, painter: &mut dyn Painter) -> PicturaResult<()> {
        match self.node() {
            Node::Rectangle(r) => painter.rectangle(r),
            Node::Ellipse(e) => painter.ellipse(e),
            Node::Circle(c) => painter.circle(c),
            Node::Polygon(p) => painter.polygon(p),
            Node::Text(t) => painter.text(t),
            Node::Raster(r) => painter.pixels(Point::ORIGIN, &r.pixels),
            Node::Frozen(f) => painter.pixels(f.origin, &f.pixels),
            Node::Transform(t) => {
                painter.push_transform(t.transform)?;
                let drawn = t.child.draw(painter);
                painter.pop_transform()?;
                drawn
            }
            Node::Overlay(o) => {
                o.back.draw(painter)?;
                o.front.draw(painter)
            }
            Node::Crop(c) => {
                painter.push_clip(c.window)?;
                let drawn = c.child.draw(painter);
                painter.pop_clip()?;
                drawn
            }
        }
    }
}
