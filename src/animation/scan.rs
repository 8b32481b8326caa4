use crate::geometry::Rect;
use crate::style::LaserStyle;

/// Moves the scan indicator down the frame in a sawtooth.
///
/// The position is the indicator's leading edge. Each advance moves it by
/// the configured speed until it would pass
/// `frame.bottom - laser_line_height`, at which point it snaps back to
/// `frame.top` rather than bouncing. The position is lazily initialized to
/// `frame.top` the first time frame geometry exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanAnimator {
    position: Option<f32>,
}

impl ScanAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current leading edge, initializing to `frame.top` on first use.
    pub fn position(&mut self, frame: Rect) -> f32 {
        *self.position.get_or_insert(frame.top)
    }

    /// The variant that actually renders: `Image` without a bitmap falls
    /// back to `Line`.
    pub fn resolve_style(configured: LaserStyle, has_bitmap: bool) -> LaserStyle {
        match configured {
            LaserStyle::Image if !has_bitmap => LaserStyle::Line,
            other => other,
        }
    }

    /// Advance one tick; called after the indicator has been drawn.
    ///
    /// A non-positive `movement_speed` never reaches the far edge, so the
    /// indicator stalls at `frame.top`; a configuration hazard, not an
    /// error.
    pub fn advance(&mut self, frame: Rect, laser_line_height: f32, movement_speed: f32) {
        let scan_end = frame.bottom - laser_line_height;
        let position = self.position.get_or_insert(frame.top);
        *position = if *position < scan_end {
            *position + movement_speed
        } else {
            frame.top
        };
    }
}
