//! The drawing primitives the renderer needs from its host.
//!
//! Implementations rasterize however they like (GPU, software, test
//! recording); the renderer only assumes the calls are synchronous and
//! ordered.

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::geometry::Rect;

/// Fill description for shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Linear gradient between two points, clamped beyond the endpoints.
    LinearGradient {
        start: (f32, f32),
        end: (f32, f32),
        from: Color,
        to: Color,
    },
}

/// A closed shape usable as a path operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubPath {
    Rect(Rect),
    /// Rectangle with uniformly rounded corners.
    RoundRect(Rect, f32),
}

/// Boolean combination applied when a subpath joins a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOp {
    Union,
    Difference,
}

/// A sequence of subpaths combined left to right with boolean ops.
///
/// Expressive enough for the overlay's one use: the exterior mask, a view
/// rectangle with the (rounded) frame rectangle punched out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub subpaths: Vec<(PathOp, SubPath)>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(mut self, rect: Rect) -> Self {
        self.subpaths.push((PathOp::Union, SubPath::Rect(rect)));
        self
    }

    pub fn round_rect(mut self, rect: Rect, corner_radius: f32) -> Self {
        self.subpaths
            .push((PathOp::Union, SubPath::RoundRect(rect, corner_radius)));
        self
    }

    /// Punch a rounded rectangle out of what the path covers so far.
    pub fn difference_round_rect(mut self, rect: Rect, corner_radius: f32) -> Self {
        self.subpaths
            .push((PathOp::Difference, SubPath::RoundRect(rect, corner_radius)));
        self
    }
}

/// A straight stroked segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LineSegment {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Text attributes for label drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub color: Color,
    pub size: f32,
}

/// Synchronous drawing operations, issued once per rendered frame.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill the ellipse inscribed in `rect`.
    fn fill_oval(&mut self, rect: Rect, brush: Brush);

    fn fill_path(&mut self, path: &Path, color: Color);

    fn stroke_round_rect(&mut self, rect: Rect, corner_radius: f32, stroke_width: f32, color: Color);

    /// Stroke part of the ellipse inscribed in `oval`. Angles are degrees,
    /// 0° at three o'clock, increasing clockwise.
    fn stroke_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke_width: f32,
        color: Color,
    );

    /// Stroke a batch of segments with one brush.
    fn stroke_lines(&mut self, segments: &[LineSegment], stroke_width: f32, brush: Brush);

    /// Blit at natural size, top-left at `(left, top)`.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, left: f32, top: f32);

    /// Blit stretched into `dst`.
    fn draw_bitmap_in_rect(&mut self, bitmap: &Bitmap, dst: Rect);

    /// Measure `text` wrapped to `max_width`; returns `(width, height)`.
    fn measure_label(&mut self, text: &str, max_width: f32, style: LabelStyle) -> (f32, f32);

    /// Draw wrapped text, each line centered on `center_x`, the block's top
    /// edge at `top`.
    fn draw_label(&mut self, text: &str, center_x: f32, top: f32, max_width: f32, style: LabelStyle);
}
