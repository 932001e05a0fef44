use super::*;
use crate::foundation::core::BoundingBox;
use crate::model::primitives::{Circle, Polygon, Rectangle};

fn rect(w: u32, h: u32) -> Image {
    Image::rectangle(Rectangle::new(w, h))
}

#[test]
fn zero_move_is_identity() {
    let img = rect(5, 5);
    assert!(Image::ptr_eq(&img, &img.moved(0, 0)));
    assert!(Image::ptr_eq(&img, &img.rotated(360)));
}

#[test]
fn move_shifts_box() {
    let img = rect(10, 4).moved(3, -2);
    assert_eq!(img.bounds(), BoundingBox::new(3, -2, 13, 2));
    assert_eq!(img.moved_by(Point::new(-3, 2)).bounds(), rect(10, 4).bounds());
}

#[test]
fn nested_transforms_collapse() {
    let base = rect(4, 4);
    let img = base.moved(1, 1).moved(2, 3).scaled(2.0);
    match img.node() {
        Node::Transform(t) => {
            assert!(Image::ptr_eq(t.child(), &base));
            assert_eq!(
                t.transform(),
                Affine::scale(2.0) * Affine::translate((3.0, 4.0))
            );
        }
        other => panic!("expected a transform, got {other:?}"),
    }
    assert_eq!(img.bounds(), BoundingBox::new(6, 8, 14, 16));
}

#[test]
fn moving_back_returns_the_child() {
    let base = rect(4, 4);
    assert!(Image::ptr_eq(&base.moved(7, 7).moved(-7, -7), &base));
}

#[test]
fn quarter_turns_are_exact() {
    let base = rect(40, 20);
    let once = base.rotated(90);
    assert_eq!(once.bounds(), BoundingBox::new(-20, 0, 0, 40));
    assert_eq!(base.rotated(-90).bounds(), BoundingBox::new(0, -40, 20, 0));

    let four = once.rotated(90).rotated(90).rotated(90);
    assert_eq!(four.bounds(), BoundingBox::new(0, 0, 40, 20));
    assert_eq!(four, base);
}

#[test]
fn general_rotation_covers_corners() {
    let img = rect(10, 10).rotated(45);
    let diag = (10.0f64 * 2.0f64.sqrt()).ceil() as i32;
    assert!(img.width() >= 14 && img.width() <= diag + 1);
    assert!(img.left() < 0);
    assert_eq!(img.top(), 0);
}

#[test]
fn rotate_in_place_keeps_center() {
    let base = rect(40, 20);
    let turned = base.rotated_in_place(90);
    assert_eq!(turned.bounds(), BoundingBox::new(10, -10, 30, 30));
    assert_eq!(turned.bounds().center(), base.bounds().center());

    let fractional = base.rotated_in_place_by(90.0);
    assert_eq!(fractional.bounds().center(), base.bounds().center());
}

#[test]
fn scale_is_about_origin() {
    let img = rect(4, 6).moved(2, 2).scaled_xy(2.0, 0.5);
    assert_eq!(img.bounds(), BoundingBox::new(4, 1, 12, 4));
}

#[test]
fn reflections_keep_box_and_undo_themselves() {
    let base = Image::circle(Circle::centered(Point::new(10, 5), 3));
    let flipped = base.x_reflection();
    assert_eq!(flipped.bounds(), base.bounds());
    assert_eq!(flipped.x_reflection(), base);

    let flopped = base.y_reflection();
    assert_eq!(flopped.bounds(), base.bounds());
    assert_eq!(flopped.y_reflection(), base);
}

#[test]
fn normalize_moves_to_origin() {
    let img = rect(3, 3).moved(-8, 12).normalized();
    assert_eq!(img.bounds(), BoundingBox::new(0, 0, 3, 3));
}

#[test]
fn compound_rotation_box_comes_from_the_collapsed_matrix() {
    let base = rect(10, 10);
    let once = base.rotated(45);
    assert_eq!(once.bounds(), BoundingBox::new(-8, 0, 8, 15));

    // The second turn applies to the original rectangle, not to the first hull.
    let twice = once.rotated(45);
    match twice.node() {
        Node::Transform(t) => assert!(Image::ptr_eq(t.child(), &base)),
        other => panic!("expected a transform, got {other:?}"),
    }
    assert_eq!(twice.bounds(), BoundingBox::new(-10, 0, 0, 10));
    assert_eq!(twice.bounds(), base.rotated(90).bounds());
}

#[test]
fn extreme_scales_and_vertices_saturate() {
    let flipped = rect(10, 10).scaled_xy(-1e9, 1.0);
    assert_eq!(flipped.left(), i32::MIN);
    assert_eq!(flipped.right(), 0);
    assert_eq!(flipped.width(), i32::MAX);

    for img in [
        flipped.x_reflection(),
        flipped.y_reflection(),
        flipped.normalized(),
        flipped.rotated_in_place(90),
        flipped.rotated_in_place_by(30.0),
    ] {
        let b = img.bounds();
        assert!(b.right() >= b.left() && b.bottom() >= b.top());
        assert!(b.width() >= 0 && b.height() >= 0);
    }

    let wide = Image::polygon(Polygon::line(
        Point::new(-2_000_000_000, 0),
        Point::new(2_000_000_000, 0),
    ));
    assert_eq!(wide.width(), i32::MAX);
    assert_eq!(wide.x_reflection().bounds(), wide.bounds());
    assert_eq!(wide.normalized().left(), 0);
}
