use super::*;
use crate::assets::decode::decode_file;
use crate::foundation::core::{BoundingBox, Color, DrawMode};
use crate::foundation::error::PicturaError;
use crate::model::primitives::{Ellipse, Rectangle};
use crate::raster::engine::build;

struct Refusing;

impl Rasterizer for Refusing {
    fn rasterize(&mut self, _image: &Image) -> PicturaResult<PixelBuffer> {
        Err(PicturaError::render("backend should not be called"))
    }
}

struct Flat(Color);

impl Rasterizer for Flat {
    fn rasterize(&mut self, image: &Image) -> PicturaResult<PixelBuffer> {
        let (w, h) = (image.width() as u32, image.height() as u32);
        PixelBuffer::from_pixels(w, h, vec![self.0; (w * h) as usize])
    }
}

fn solid(w: u32, h: u32, color: Color) -> Image {
    Image::rectangle(Rectangle {
        width: w,
        height: h,
        color,
        mode: DrawMode::Solid,
    })
}

fn temp_png(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("pictura_freeze_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn frozen_box_matches_source_box() {
    let img = Image::ellipse(Ellipse::new(6, 4)).moved(-3, 7);
    let frozen = img.freeze_with(&mut Flat(Color::RED)).unwrap();
    assert_eq!(frozen.bounds(), BoundingBox::new(-3, 7, 3, 11));
    assert!(matches!(frozen.node(), Node::Frozen(_)));
}

#[test]
fn raster_and_empty_freeze_without_backend() {
    let raster = build(2, 3, |_, _, _: &()| Color::GRAY, &()).unwrap();
    let frozen = raster.freeze_with(&mut Refusing).unwrap();
    assert!(
        frozen
            .pixel_buffer()
            .unwrap()
            .shares_storage(raster.pixel_buffer().unwrap())
    );

    let empty = Image::rectangle(Rectangle::new(0, 9)).moved(4, 4);
    let frozen = empty.freeze_with(&mut Refusing).unwrap();
    assert_eq!(frozen.bounds(), empty.bounds());
    assert_eq!(frozen.pixel_buffer().map(|p| (p.width(), p.height())), Some((0, 9)));
}

#[test]
fn freezing_frozen_is_identity() {
    let frozen = solid(2, 2, Color::RED).freeze_with(&mut Flat(Color::RED)).unwrap();
    let again = frozen.freeze_with(&mut Refusing).unwrap();
    assert!(Image::ptr_eq(&frozen, &again));
}

#[test]
fn differently_built_trees_become_freeze_equal() {
    let a = solid(4, 4, Color::RED).overlay(&solid(2, 2, Color::RED));
    let b = solid(4, 4, Color::RED);
    assert_ne!(a, b);
    assert_eq!(a.freeze().unwrap(), b.freeze().unwrap());
}

#[test]
fn frozen_images_can_be_mapped() {
    let frozen = solid(2, 1, Color::WHITE).freeze_with(&mut Flat(Color::WHITE)).unwrap();
    let dark = frozen.map(|_, _, _, _: &()| Color::BLACK, &()).unwrap();
    assert!(dark.pixel_buffer().unwrap().pixels().iter().all(|&c| c == Color::BLACK));
}

#[test]
fn save_writes_a_png() {
    let path = temp_png("flat.png");
    solid(3, 2, Color::GREEN)
        .save_with(&path, &mut Flat(Color::GREEN))
        .unwrap();
    let back = decode_file(&path).unwrap();
    assert_eq!((back.width(), back.height()), (3, 2));
    assert!(back.pixels().iter().all(|&c| c == Color::GREEN));
}

#[test]
fn save_failures_are_io_errors() {
    let missing_dir = temp_png("no/such/dir/out.png");
    let err = solid(1, 1, Color::RED)
        .save_with(&missing_dir, &mut Flat(Color::RED))
        .unwrap_err();
    assert!(matches!(err, PicturaError::Io(_)));

    let err = Image::rectangle(Rectangle::new(0, 0))
        .save(temp_png("empty.png"))
        .unwrap_err();
    assert!(matches!(err, PicturaError::Io(_)));
}
