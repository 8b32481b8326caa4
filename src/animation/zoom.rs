use crate::style::VisualStyle;
use std::time::Duration;

/// Pulses the scale factor applied to result-point markers.
///
/// The scale oscillates between 1.0 and `max_zoom_ratio`. Three full
/// oscillations form one pulse triplet; between triplets the animation
/// rests for the long `point_animation_interval`, inside a triplet ticks
/// follow each other at twice the scan interval so the pulse looks smooth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointZoomAnimator {
    current: f32,
    last: f32,
    cycle_count: u8,
}

impl Default for PointZoomAnimator {
    fn default() -> Self {
        Self { current: 1.0, last: 0.0, cycle_count: 0 }
    }
}

impl PointZoomAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the rest position. Called on every transition into result
    /// mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Scale to apply to markers this frame.
    pub fn scale(&self) -> f32 {
        self.current
    }

    /// One half-step of the pulse. `cycle_count` increments each time the
    /// scale dips back to the rest position and wraps after three, which is
    /// what triggers the long rest.
    pub fn tick(&mut self, zoom_speed: f32, max_zoom_ratio: f32) {
        if self.current <= 1.0 {
            self.last = self.current;
            self.current += zoom_speed;
            self.cycle_count = if self.cycle_count < 2 { self.cycle_count + 1 } else { 0 };
        } else if self.current >= max_zoom_ratio {
            self.last = self.current;
            self.current -= zoom_speed;
        } else if self.last > self.current {
            self.last = self.current;
            self.current -= zoom_speed;
        } else {
            self.last = self.current;
            self.current += zoom_speed;
        }
    }

    /// Delay until the next pulse tick: the long rest exactly at the
    /// between-triplets rest position, the short smoothing delay otherwise.
    pub fn next_delay(&self, style: &VisualStyle) -> Duration {
        if self.cycle_count == 0 && self.last == 1.0 {
            Duration::from_millis(style.point_animation_interval_ms)
        } else {
            Duration::from_millis(style.laser_animation_interval_ms * 2)
        }
    }
}
