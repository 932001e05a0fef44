use super::*;
use crate::model::primitives::Rectangle;

#[test]
fn build_calls_generator_per_pixel() {
    let img = build(3, 2, |col, row, _: &()| Color::rgb(col as u8, row as u8, 0), &()).unwrap();
    assert_eq!((img.width(), img.height()), (3, 2));
    let px = img.pixel_buffer().unwrap();
    assert_eq!(px.get(2, 1), Some(Color::rgb(2, 1, 0)));
    assert_eq!(px.get(0, 0), Some(Color::rgb(0, 0, 0)));
}

#[test]
fn build_passes_context_through() {
    let tint = Color::RED;
    let img = build(2, 2, |_, _, c: &Color| *c, &tint).unwrap();
    assert!(img.pixel_buffer().unwrap().pixels().iter().all(|&c| c == Color::RED));
}

#[test]
fn build_with_zero_dims_is_empty() {
    let img = build(0, 5, |_, _, _: &()| Color::WHITE, &()).unwrap();
    assert_eq!((img.width(), img.height()), (0, 5));
    assert!(img.bounds().is_empty());
}

#[test]
fn map_identity_keeps_pixels() {
    let src = build(2, 2, |_, _, _: &()| Color::RED, &()).unwrap();
    let same = src.map(|_, _, c, _: &()| c, &()).unwrap();
    assert_eq!(same, src);
    assert!(!Image::ptr_eq(&same, &src));
}

#[test]
fn map_sees_coordinates_and_leaves_source_alone() {
    let src = build(4, 1, |_, _, _: &()| Color::WHITE, &()).unwrap();
    let striped = map(
        &src,
        |col, _, c, _: &()| if col % 2 == 0 { Color::BLACK } else { c },
        &(),
    )
    .unwrap();
    let px = striped.pixel_buffer().unwrap();
    assert_eq!(px.get(0, 0), Some(Color::BLACK));
    assert_eq!(px.get(1, 0), Some(Color::WHITE));
    assert!(src.pixel_buffer().unwrap().pixels().iter().all(|&c| c == Color::WHITE));
}

#[test]
fn map_rejects_vector_images() {
    let shape = Image::rectangle(Rectangle::new(2, 2));
    let err = map(&shape, |_, _, c, _: &()| c, &()).unwrap_err();
    assert!(matches!(err, PicturaError::Validation(_)));
}
