use crate::style::{FrameGravity, VisualStyle};
use log::warn;

/// An axis-aligned rectangle in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_origin_size(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }

    /// Square of side `2 * radius` centered on `(cx, cy)`.
    pub fn around(cx: f32, cy: f32, radius: f32) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// Shrink every edge inward by `amount` (negative grows).
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        )
    }
}

/// A recognized item's location, in view pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultPoint {
    pub x: i32,
    pub y: i32,
}

impl ResultPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Geometry derived from one layout pass.
///
/// Recomputed wholesale whenever the view dimensions change; computing it
/// twice from the same inputs yields identical values, so callers may cache
/// or recompute freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMetrics {
    /// The scan frame rectangle.
    pub frame: Rect,
    /// Wrapping width for the hint label.
    pub label_width: f32,
    /// Target width for the scan-indicator bitmap.
    pub laser_bitmap_width: f32,
    /// The smaller of the view's dimensions.
    pub min_dimension: f32,
}

impl FrameMetrics {
    /// Derive the frame rectangle and related measures from the view size.
    ///
    /// Invalid explicit frame dimensions (non-positive, or larger than the
    /// view) fall back to the ratio-derived default rather than failing.
    pub fn compute(view_width: f32, view_height: f32, style: &VisualStyle) -> FrameMetrics {
        let min_dimension = view_width.min(view_height);
        let default_size = min_dimension * style.frame_ratio;

        let frame_width = if style.frame_width > 0.0 && style.frame_width <= view_width {
            style.frame_width
        } else {
            if style.frame_width != 0.0 {
                warn!(
                    "ignoring frame width {}: outside (0, {view_width}]",
                    style.frame_width
                );
            }
            default_size
        };
        let frame_height = if style.frame_height > 0.0 && style.frame_height <= view_height {
            style.frame_height
        } else {
            if style.frame_height != 0.0 {
                warn!(
                    "ignoring frame height {}: outside (0, {view_height}]",
                    style.frame_height
                );
            }
            default_size
        };

        let mut left = (view_width - frame_width) / 2.0 + style.frame_padding_left
            - style.frame_padding_right;
        let mut top = (view_height - frame_height) / 2.0 + style.frame_padding_top
            - style.frame_padding_bottom;
        match style.frame_gravity {
            FrameGravity::Center => {}
            FrameGravity::Left => left = style.frame_padding_left,
            FrameGravity::Top => top = style.frame_padding_top,
            FrameGravity::Right => left = view_width - frame_width + style.frame_padding_right,
            FrameGravity::Bottom => top = view_height - frame_height + style.frame_padding_bottom,
        }

        let label_width = if style.label_text_width > 0.0 {
            style.label_text_width
        } else {
            view_width
        };

        FrameMetrics {
            frame: Rect::from_origin_size(left, top, frame_width, frame_height),
            label_width,
            laser_bitmap_width: min_dimension * style.laser_bitmap_ratio,
            min_dimension,
        }
    }
}
