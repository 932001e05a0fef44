//! Pictura is a library of immutable, composable images.
//!
//! An [`Image`] is a shared node in a tree. Primitives (rectangles, ellipses, circles,
//! polygons, text) and decoded rasters are leaves; every other operation builds a new node on
//! top of existing ones without copying them:
//!
//! - **Transforms**: `moved`, `rotated`, `scaled`, reflections and arbitrary affines wrap a
//!   child. Nested transforms collapse into one node.
//! - **Layout**: `overlay`, `above`, `beside`, `place` and friends align boxes and stack
//!   children back to front.
//! - **Crop**: `cropped` clips to an explicit window.
//! - **Pixels**: [`build`] and [`map`] generate raster images in parallel; `freeze` and `save`
//!   materialize any tree through a [`Rasterizer`] (the [`CpuRenderer`] by default).
//!
//! Every node has an integer [`BoundingBox`]. Equality is structural.
//!
//! ```no_run
//! use pictura::{Color, DrawMode, Image, Rectangle};
//!
//! let square = Image::rectangle(Rectangle {
//!     width: 40,
//!     height: 40,
//!     color: Color::RED,
//!     mode: DrawMode::Solid,
//! });
//! let scene = square.beside([&square.rotated_in_place(45)]);
//! scene.save("scene.png")?;
//! # Ok::<(), pictura::PicturaError>(())
//! ```
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod model;
mod raster;
mod render;
mod text;

pub use assets::cache::DecodeCache;
pub use assets::decode::{decode_bytes, decode_file, decode_image, decode_svg};
pub use assets::encode::{encode_png, save_png};
pub use foundation::core::{Affine, BoundingBox, Color, DrawMode, Point, TextStyle};
pub use foundation::error::{PicturaError, PicturaResult};
pub use model::layout::overlay_images;
pub use model::node::{CropImage, FrozenImage, Image, Node, OverlayImage, TransformImage};
pub use model::primitives::{
    Circle, DEFAULT_TEXT_SIZE, Ellipse, Polygon, Rectangle, Text, TextImage,
};
pub use raster::buffer::PixelBuffer;
pub use raster::engine::{build, map};
pub use raster::source::{RasterImage, RasterOrigin};
pub use render::backend::{Painter, Rasterizer, RenderSettings};
pub use render::cpu::CpuRenderer;
pub use render::record::{DrawCommand, RecordingPainter};
pub use text::metrics::{ApproxTextMetrics, ParleyTextEngine, TextMetrics};
