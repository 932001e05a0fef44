use super::*;
use crate::foundation::core::{Color, DrawMode};
use crate::model::node::Image;

fn red_square() -> Rectangle {
    Rectangle {
        width: 10,
        height: 10,
        color: Color::RED,
        mode: DrawMode::Solid,
    }
}

#[test]
fn overlay_draws_back_before_front() {
    let back = Image::rectangle(red_square());
    let front = Image::ellipse(Ellipse::new(4, 4));
    let mut rec = RecordingPainter::new();
    back.overlay(&front).draw(&mut rec).unwrap();

    assert_eq!(
        rec.commands(),
        &[
            DrawCommand::Rectangle(red_square()),
            DrawCommand::Ellipse(Ellipse::new(4, 4)),
        ]
    );
}

#[test]
fn transforms_and_clips_are_bracketed() {
    let img = Image::rectangle(red_square())
        .moved(5, 0)
        .cropped(0, 8, 0, 8);
    let mut rec = RecordingPainter::new();
    img.draw(&mut rec).unwrap();

    assert_eq!(
        rec.commands(),
        &[
            DrawCommand::PushClip(BoundingBox::window(0, 8, 0, 8)),
            DrawCommand::PushTransform(Affine::translate((5.0, 0.0))),
            DrawCommand::Rectangle(red_square()),
            DrawCommand::PopTransform,
            DrawCommand::PopClip,
        ]
    );
    assert!(rec.is_balanced());
}

#[test]
fn nested_moves_collapse_into_one_push() {
    let img = Image::rectangle(red_square()).moved(1, 2).moved(3, 4);
    let mut rec = RecordingPainter::new();
    img.draw(&mut rec).unwrap();
    assert_eq!(
        rec.commands()[0],
        DrawCommand::PushTransform(Affine::translate((4.0, 6.0)))
    );
    assert_eq!(rec.leaves().count(), 1);
}

#[test]
fn unbalanced_pops_error() {
    let mut rec = RecordingPainter::new();
    assert!(rec.pop_transform().is_err());
    assert!(rec.pop_clip().is_err());
}

#[test]
fn shared_subtree_is_drawn_once_per_use() {
    let shared = Image::rectangle(red_square());
    let img = shared.beside([&shared, &shared]);
    let mut rec = RecordingPainter::new();
    img.draw(&mut rec).unwrap();
    assert_eq!(rec.leaves().count(), 3);
    assert!(rec.is_balanced());
}
