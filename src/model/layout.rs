//! Overlay, stacking, placement and cropping.
//!
//! Everything here is built from three nodes: the transform wrapper (for positioning),
//! overlay (union of two boxes, back drawn before front) and crop.

use crate::foundation::core::BoundingBox;
use crate::model::node::{CropImage, Image, Node, OverlayImage};

impl Image {
    /// Draw `front` over this image in the same coordinate frame.
    pub fn overlay(&self, front: &Image) -> Self {
        let bounds = self.bounds().union(front.bounds());
        Self::from_node(Node::Overlay(OverlayImage {
            back: self.clone(),
            front: front.clone(),
            bounds,
        }))
    }

    /// Overlay each of `others` in turn, later ones in front.
    pub fn overlay_all<'a>(&self, others: impl IntoIterator<Item = &'a Image>) -> Self {
        others
            .into_iter()
            .fold(self.clone(), |acc, other| acc.overlay(other))
    }

    /// Overlay `front` after moving it by `(dx, dy)`.
    pub fn overlay_xy(&self, front: &Image, dx: i32, dy: i32) -> Self {
        self.overlay(&front.moved(dx, dy))
    }

    /// Normalize every image and center it in a box as wide as the widest and as tall as
    /// the tallest, then overlay them in order.
    pub fn overlay_centered<'a>(&self, others: impl IntoIterator<Item = &'a Image>) -> Self {
        let others: Vec<&Image> = others.into_iter().collect();
        let width = others
            .iter()
            .map(|o| o.width())
            .fold(self.width(), i32::max);
        let height = others
            .iter()
            .map(|o| o.height())
            .fold(self.height(), i32::max);

        let center = |img: &Image| {
            img.normalized()
                .moved((width - img.width()) / 2, (height - img.height()) / 2)
        };
        others
            .into_iter()
            .fold(center(self), |acc, other| acc.overlay(&center(other)))
    }

    /// Put the center of `front`'s box at `(x, y)` and clip the result to this image's box.
    ///
    /// The result never extends past the base image.
    pub fn place(&self, front: &Image, x: i32, y: i32) -> Self {
        let c = front.bounds().center();
        self.overlay_xy(front, x.saturating_sub(c.x), y.saturating_sub(c.y))
            .cropped_to(self.bounds())
    }

    /// Stack `others` below this image, each top edge touching the previous bottom edge.
    /// Horizontal positions are left as they are.
    pub fn above<'a>(&self, others: impl IntoIterator<Item = &'a Image>) -> Self {
        others.into_iter().fold(self.clone(), |acc, other| {
            let dy = acc.bottom().saturating_sub(other.top());
            acc.overlay(&other.moved(0, dy))
        })
    }

    /// Like [`Image::above`], but every image is normalized and centered horizontally.
    pub fn above_centered<'a>(&self, others: impl IntoIterator<Item = &'a Image>) -> Self {
        let others: Vec<&Image> = others.into_iter().collect();
        let width = others
            .iter()
            .map(|o| o.width())
            .fold(self.width(), i32::max);

        let first = self.normalized().moved((width - self.width()) / 2, 0);
        others.into_iter().fold(first, |acc, other| {
            let placed = other
                .normalized()
                .moved((width - other.width()) / 2, acc.height());
            acc.overlay(&placed)
        })
    }

    /// Stack `others` to the right of this image, each left edge touching the previous
    /// right edge. Vertical positions are left as they are.
    pub fn beside<'a>(&self, others: impl IntoIterator<Item = &'a Image>) -> Self {
        others.into_iter().fold(self.clone(), |acc, other| {
            let dx = acc.right().saturating_sub(other.left());
            acc.overlay(&other.moved(dx, 0))
        })
    }

    /// Like [`Image::beside`], but every image is normalized and centered vertically.
    pub fn beside_centered<'a>(&self, others: impl IntoIterator<Item = &'a Image>) -> Self {
        let others: Vec<&Image> = others.into_iter().collect();
        let height = others
            .iter()
            .map(|o| o.height())
            .fold(self.height(), i32::max);

        let first = self.normalized().moved(0, (height - self.height()) / 2);
        others.into_iter().fold(first, |acc, other| {
            let placed = other
                .normalized()
                .moved(acc.width(), (height - other.height()) / 2);
            acc.overlay(&placed)
        })
    }

    /// Clip to the window `(left, right, top, bottom)`; the window becomes the box.
    pub fn cropped(&self, left: i32, right: i32, top: i32, bottom: i32) -> Self {
        self.cropped_to(BoundingBox::window(left, right, top, bottom))
    }

    /// Clip to `window`, which becomes the box as given.
    pub fn cropped_to(&self, window: BoundingBox) -> Self {
        Self::from_node(Node::Crop(CropImage {
            child: self.clone(),
            window,
        }))
    }
}

/// Overlay all `images` in order; `None` if there are none.
pub fn overlay_images<'a>(images: impl IntoIterator<Item = &'a Image>) -> Option<Image> {
    let mut iter = images.into_iter();
    let first = iter.next()?;
    Some(first.overlay_all(iter))
}

#[cfg(test)]
#[path = "../../tests/unit/model/layout.rs"]
mod tests;
