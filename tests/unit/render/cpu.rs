use super::*;
use crate::foundation::core::DrawMode;
use crate::model::primitives::Text;
use crate::raster::engine::build;
use crate::text::metrics::ApproxTextMetrics;

fn solid(w: u32, h: u32, color: Color) -> Image {
    Image::rectangle(Rectangle {
        width: w,
        height: h,
        color,
        mode: DrawMode::Solid,
    })
}

#[test]
fn solid_rectangle_fills_every_pixel() {
    let px = CpuRenderer::default()
        .rasterize(&solid(4, 4, Color::RED))
        .unwrap();
    assert_eq!((px.width(), px.height()), (4, 4));
    assert!(px.pixels().iter().all(|&c| c == Color::RED));
}

#[test]
fn surface_follows_the_box_origin() {
    let px = CpuRenderer::default()
        .rasterize(&solid(3, 2, Color::BLUE).moved(100, -50))
        .unwrap();
    assert_eq!((px.width(), px.height()), (3, 2));
    assert!(px.pixels().iter().all(|&c| c == Color::BLUE));
}

#[test]
fn crop_clips_drawing() {
    let img = solid(10, 10, Color::WHITE)
        .overlay(&solid(10, 10, Color::RED).moved(5, 5))
        .cropped(0, 10, 0, 10);
    let px = CpuRenderer::default().rasterize(&img).unwrap();
    assert_eq!((px.width(), px.height()), (10, 10));
    assert_eq!(px.get(0, 0), Some(Color::WHITE));
    assert_eq!(px.get(4, 4), Some(Color::WHITE));
    assert_eq!(px.get(9, 9), Some(Color::RED));
}

#[test]
fn clear_color_shows_through_outlines() {
    let mut renderer = CpuRenderer::new(RenderSettings {
        clear: Some(Color::BLUE),
        ..RenderSettings::default()
    })
    .unwrap();
    let px = renderer
        .rasterize(&Image::rectangle(Rectangle::new(10, 10)))
        .unwrap();
    assert_eq!(px.get(5, 5), Some(Color::BLUE));
}

#[test]
fn raster_pixels_are_drawn() {
    let raster = build(4, 4, |_, _, _: &()| Color::GREEN, &()).unwrap();
    let img = raster.overlay(&Image::rectangle(Rectangle::new(0, 0)));
    let px = CpuRenderer::default().rasterize(&img).unwrap();
    let c = px.get(1, 1).unwrap();
    assert_eq!(c.a, 255);
    assert!(c.g > 200 && c.r < 50 && c.b < 50);
}

#[test]
fn text_without_font_is_a_render_error() {
    let img = Image::text(Text::new("hi"), &mut ApproxTextMetrics).unwrap();
    let err = CpuRenderer::default().rasterize(&img).unwrap_err();
    assert!(matches!(err, PicturaError::Render(_)));
}

#[test]
fn oversize_surface_is_a_render_error() {
    let img = solid(70_000, 1, Color::BLACK);
    let err = CpuRenderer::default().rasterize(&img).unwrap_err();
    assert!(matches!(err, PicturaError::Render(_)));
}

#[test]
fn invalid_settings_are_rejected() {
    let bad = RenderSettings {
        outline_width: -1.0,
        ..RenderSettings::default()
    };
    assert!(CpuRenderer::new(bad).is_err());
}

#[test]
fn text_renders_with_local_font_if_present() {
    let Ok(font_bytes) = std::fs::read("assets/fonts/DejaVuSans.ttf") else {
        return;
    };
    let mut renderer = CpuRenderer::default().with_font(font_bytes).unwrap();
    let params = Text {
        size: 24.0,
        ..Text::new("Hi")
    };
    let engine = renderer.text_engine().unwrap();
    let img = Image::text(params, engine).unwrap();
    let px = renderer.rasterize(&img).unwrap();
    assert!(px.pixels().iter().any(|c| c.a > 0));
}
