use crate::color::Color;
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

/// Overall look of the overlay while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViewfinderStyle {
    /// Framed scan region with a masked exterior.
    #[default]
    Classic,
    /// Full-bleed scan with no visible frame, WeChat-style.
    Popular,
}

/// Visual treatment of the moving scan indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LaserStyle {
    None,
    #[default]
    Line,
    Grid,
    /// A caller-supplied bitmap; falls back to `Line` when none is set.
    Image,
}

/// Where the hint label sits relative to the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TextLocation {
    Top,
    #[default]
    Bottom,
}

/// Alignment rule applied when the frame is smaller than the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FrameGravity {
    #[default]
    Center,
    Left,
    Top,
    Right,
    Bottom,
}

/// Errors that can occur when loading a style sheet.
#[derive(thiserror::Error, Debug)]
pub enum StyleError {
    #[error("failed to parse style sheet: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Slack factor applied on top of a marker's visual footprint when deriving
/// the tap tolerance: the mean of a square's inscribed- and circumscribed-
/// circle radius ratios, (1 + √2) / 2, rounded to 1.2.
pub const RANGE_RATIO: f32 = 1.2;

/// The full visual configuration of the overlay.
///
/// Constructed once (from code or a YAML style sheet) and handed to
/// [`ViewfinderView::new`](crate::ViewfinderView::new). Fields that may
/// legitimately change afterwards (colors, label text, style enums) have
/// dedicated setters on the view; everything else is fixed at construction.
///
/// All dimensional fields are plain view pixels. `frame_width`,
/// `frame_height` and `label_text_width` treat zero (the default) as unset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualStyle {
    /// Fill outside the frame (scanning) or over the whole view (results).
    /// Fully transparent disables the mask.
    pub mask_color: Color,
    pub frame_color: Color,
    /// Explicit frame width; zero derives it from `frame_ratio`.
    pub frame_width: f32,
    /// Explicit frame height; zero derives it from `frame_ratio`.
    pub frame_height: f32,
    /// Frame size as a fraction of the view's smaller dimension.
    pub frame_ratio: f32,
    pub frame_line_stroke_width: f32,
    pub frame_padding_left: f32,
    pub frame_padding_top: f32,
    pub frame_padding_right: f32,
    pub frame_padding_bottom: f32,
    pub frame_gravity: FrameGravity,
    pub frame_corner_color: Color,
    /// Length of each corner accent along the frame edge.
    pub frame_corner_size: f32,
    pub frame_corner_stroke_width: f32,
    pub frame_corner_radius: f32,
    pub laser_color: Color,
    pub laser_style: LaserStyle,
    pub laser_line_height: f32,
    /// Distance the indicator moves per rendered frame. Zero or negative
    /// stalls the animation at the frame top; configuration hazard, not an
    /// error.
    pub laser_movement_speed: f32,
    /// Delay between scan animation frames, in milliseconds.
    pub laser_animation_interval_ms: u64,
    pub laser_grid_column: u32,
    /// Height of the illuminated grid window trailing the indicator; zero
    /// extends the window up to the frame top.
    pub laser_grid_height: f32,
    pub laser_grid_stroke_width: f32,
    /// Width of the scan-indicator bitmap as a fraction of the view's
    /// smaller dimension.
    pub laser_bitmap_ratio: f32,
    pub label_text: Option<String>,
    pub label_text_color: Color,
    pub label_text_size: f32,
    /// Gap between the label and the frame edge.
    pub label_text_padding: f32,
    /// Wrapping width for the label; zero uses the view width.
    pub label_text_width: f32,
    pub label_text_location: TextLocation,
    pub point_color: Color,
    pub point_stroke_color: Color,
    pub point_radius: f32,
    /// Outer stroke circle radius as a multiple of `point_radius`.
    pub point_stroke_ratio: f32,
    /// Whether result points pulse.
    pub point_animation: bool,
    /// Rest between pulse triplets, in milliseconds.
    pub point_animation_interval_ms: u64,
    /// Scale change per pulse tick.
    pub zoom_speed: f32,
    pub max_zoom_ratio: f32,
    /// Invalidate the whole surface between scan frames instead of just the
    /// frame region.
    pub full_refresh: bool,
    pub viewfinder_style: ViewfinderStyle,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            mask_color: Color(0x6000_0000),
            frame_color: Color(0xFF1F_B3E2),
            frame_width: 0.0,
            frame_height: 0.0,
            frame_ratio: 0.625,
            frame_line_stroke_width: 1.0,
            frame_padding_left: 0.0,
            frame_padding_top: 0.0,
            frame_padding_right: 0.0,
            frame_padding_bottom: 0.0,
            frame_gravity: FrameGravity::Center,
            frame_corner_color: Color(0xFF1F_B3E2),
            frame_corner_size: 16.0,
            frame_corner_stroke_width: 4.0,
            frame_corner_radius: 0.0,
            laser_color: Color(0xFF1F_B3E2),
            laser_style: LaserStyle::Line,
            laser_line_height: 5.0,
            laser_movement_speed: 2.0,
            laser_animation_interval_ms: 20,
            laser_grid_column: 20,
            laser_grid_height: 40.0,
            laser_grid_stroke_width: 1.0,
            laser_bitmap_ratio: 0.625,
            label_text: None,
            label_text_color: Color(0xFF99_9999),
            label_text_size: 14.0,
            label_text_padding: 24.0,
            label_text_width: 0.0,
            label_text_location: TextLocation::Bottom,
            point_color: Color(0xFF1F_B3E2),
            point_stroke_color: Color::WHITE,
            point_radius: 15.0,
            point_stroke_ratio: RANGE_RATIO,
            point_animation: true,
            point_animation_interval_ms: 3000,
            zoom_speed: 0.02,
            max_zoom_ratio: 1.2,
            full_refresh: false,
            viewfinder_style: ViewfinderStyle::Classic,
        }
    }
}

impl VisualStyle {
    /// Load a style sheet from YAML. Missing fields take their defaults.
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Radius of the stroked outer circle drawn around each result point.
    pub fn point_stroke_radius(&self) -> f32 {
        self.point_radius * self.point_stroke_ratio
    }

    /// Tap tolerance for circle markers; bitmap markers derive their own
    /// from the bitmap's footprint.
    pub fn default_point_range_radius(&self) -> f32 {
        self.point_stroke_radius() * RANGE_RATIO
    }
}
