//! An animated scan viewfinder overlay.
//!
//! This crate implements the platform-independent core of a camera scan
//! overlay: the geometry of the viewfinder frame, the laser/grid/image scan
//! animation, the pulsing result-point markers shown once recognition has
//! finished, and tap hit-testing against those markers.
//!
//! Rendering and timing are abstracted behind two traits the embedder
//! implements: [`DrawSurface`] supplies synchronous drawing primitives and
//! [`RepaintScheduler`] turns the self-perpetuating render loop into real
//! timer callbacks. [`ViewfinderView`] ties everything together: feed it
//! layout events and render calls, and forward taps to `on_tap`.

pub mod animation;
pub mod bitmap;
pub mod color;
pub mod geometry;
pub(crate) mod render;
pub mod scheduler;
pub mod style;
pub mod surface;
pub mod text;
pub mod view;

pub use bitmap::{Bitmap, BitmapError};
pub use color::{Color, ParseColorError};
pub use geometry::{FrameMetrics, Rect, ResultPoint};
pub use scheduler::RepaintScheduler;
pub use style::{
    FrameGravity, LaserStyle, StyleError, TextLocation, ViewfinderStyle, VisualStyle,
};
pub use surface::{Brush, DrawSurface, LabelStyle, LineSegment, Path, PathOp, SubPath};
pub use view::ViewfinderView;
