use crate::animation::{PointZoomAnimator, ScanAnimator};
use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::geometry::{FrameMetrics, ResultPoint};
use crate::hit_test;
use crate::render;
use crate::scheduler::RepaintScheduler;
use crate::style::{LaserStyle, TextLocation, ViewfinderStyle, VisualStyle};
use crate::surface::DrawSurface;
use log::debug;

/// Callback invoked with the index of a tapped result point.
pub type PointClickHandler = Box<dyn FnMut(usize)>;

/// The viewfinder overlay.
///
/// Owns the style, the cached frame geometry, both animators, the result
/// points and the click callback. Hosts drive it with three calls:
/// `on_layout` whenever the view dimensions change, `render` on every
/// repaint callback, and `on_tap` for pointer input. Mode, laser position
/// and repaint timing the view manages itself.
///
/// All state mutation happens inside `render` and the explicit mode/setter
/// calls; `on_tap` only reads. With a single host thread driving those
/// entry points no further synchronization is needed.
pub struct ViewfinderView {
    pub(crate) style: VisualStyle,
    pub(crate) metrics: Option<FrameMetrics>,
    pub(crate) view_width: f32,
    pub(crate) view_height: f32,
    pub(crate) scan: ScanAnimator,
    pub(crate) zoom: PointZoomAnimator,
    pub(crate) points: Vec<ResultPoint>,
    pub(crate) showing_points: bool,
    /// Pre-scaled to the layout's laser bitmap width.
    pub(crate) laser_bitmap: Option<Bitmap>,
    laser_bitmap_source: Option<Bitmap>,
    pub(crate) frame_bitmap: Option<Bitmap>,
    pub(crate) point_bitmap: Option<Bitmap>,
    pub(crate) point_range_radius: f32,
    on_point_click: Option<PointClickHandler>,
}

impl ViewfinderView {
    pub fn new(style: VisualStyle) -> Self {
        let point_range_radius = style.default_point_range_radius();
        Self {
            style,
            metrics: None,
            view_width: 0.0,
            view_height: 0.0,
            scan: ScanAnimator::new(),
            zoom: PointZoomAnimator::new(),
            points: Vec::new(),
            showing_points: false,
            laser_bitmap: None,
            laser_bitmap_source: None,
            frame_bitmap: None,
            point_bitmap: None,
            point_range_radius,
            on_point_click: None,
        }
    }

    pub fn style(&self) -> &VisualStyle {
        &self.style
    }

    /// Current frame geometry, if a layout pass has happened.
    pub fn frame_metrics(&self) -> Option<&FrameMetrics> {
        self.metrics.as_ref()
    }

    /// Recompute geometry for new view dimensions. Also re-scales the laser
    /// bitmap to the derived width.
    pub fn on_layout(&mut self, width: f32, height: f32) {
        self.view_width = width;
        self.view_height = height;
        let metrics = FrameMetrics::compute(width, height, &self.style);
        if let Some(source) = &self.laser_bitmap_source {
            self.laser_bitmap = Some(source.scale_to_width(metrics.laser_bitmap_width));
        }
        self.metrics = Some(metrics);
    }

    /// Produce one frame and request the next repaint.
    pub fn render(&mut self, surface: &mut dyn DrawSurface, scheduler: &mut dyn RepaintScheduler) {
        render::render_frame(self, surface, scheduler);
    }

    /// Route a tap to the result point under it, if any.
    ///
    /// Only meaningful while result points are showing; returns whether the
    /// tap was consumed.
    pub fn on_tap(&mut self, x: f32, y: f32) -> bool {
        if !self.showing_points {
            return false;
        }
        match hit_test::hit_test(x, y, &self.points, self.point_range_radius) {
            Some(index) => {
                if let Some(handler) = &mut self.on_point_click {
                    handler(index);
                }
                true
            }
            None => false,
        }
    }

    /// Switch back to the scan animation.
    pub fn show_scanner(&mut self) {
        debug!("showing scanner");
        self.showing_points = false;
    }

    /// Show `points` over a full mask, replacing any prior set and
    /// restarting the pulse from its rest state.
    pub fn show_result_points(&mut self, points: Vec<ResultPoint>) {
        debug!("showing {} result points", points.len());
        self.points = points;
        self.showing_points = true;
        self.zoom.reset();
    }

    pub fn is_showing_points(&self) -> bool {
        self.showing_points
    }

    pub fn set_on_point_click(&mut self, handler: impl FnMut(usize) + 'static) {
        self.on_point_click = Some(Box::new(handler));
    }

    /// Cancel the pending repaint. Call when the hosting surface goes away
    /// so no timer callback outlives it.
    pub fn teardown(&mut self, scheduler: &mut dyn RepaintScheduler) {
        scheduler.cancel();
    }

    // Live-reconfigure surface: the fields that legitimately change after
    // construction. Geometry-shaping fields are fixed; build a new view for
    // those.

    pub fn set_mask_color(&mut self, color: Color) {
        self.style.mask_color = color;
    }

    pub fn set_frame_color(&mut self, color: Color) {
        self.style.frame_color = color;
    }

    pub fn set_frame_corner_color(&mut self, color: Color) {
        self.style.frame_corner_color = color;
    }

    pub fn set_laser_color(&mut self, color: Color) {
        self.style.laser_color = color;
    }

    pub fn set_point_color(&mut self, color: Color) {
        self.style.point_color = color;
    }

    pub fn set_point_stroke_color(&mut self, color: Color) {
        self.style.point_stroke_color = color;
    }

    pub fn set_label_text(&mut self, text: Option<String>) {
        self.style.label_text = text;
    }

    pub fn set_label_text_color(&mut self, color: Color) {
        self.style.label_text_color = color;
    }

    pub fn set_label_text_location(&mut self, location: TextLocation) {
        self.style.label_text_location = location;
    }

    pub fn set_laser_style(&mut self, laser_style: LaserStyle) {
        self.style.laser_style = laser_style;
    }

    pub fn set_viewfinder_style(&mut self, viewfinder_style: ViewfinderStyle) {
        self.style.viewfinder_style = viewfinder_style;
    }

    pub fn set_point_animation(&mut self, enabled: bool) {
        self.style.point_animation = enabled;
    }

    pub fn set_full_refresh(&mut self, full_refresh: bool) {
        self.style.full_refresh = full_refresh;
    }

    /// Custom scan-indicator image, scaled to the layout's derived width
    /// once geometry is known.
    pub fn set_laser_bitmap(&mut self, bitmap: Bitmap) {
        self.laser_bitmap = Some(match &self.metrics {
            Some(metrics) => bitmap.scale_to_width(metrics.laser_bitmap_width),
            None => bitmap.clone(),
        });
        self.laser_bitmap_source = Some(bitmap);
    }

    /// Custom frame image, stretched over the frame rectangle instead of
    /// the stroked border and corners.
    pub fn set_frame_bitmap(&mut self, bitmap: Bitmap) {
        self.frame_bitmap = Some(bitmap);
    }

    /// Custom result-point marker.
    ///
    /// Also rederives the tap tolerance from the bitmap's footprint,
    /// clobbering any earlier [`set_point_range_radius`] override; set the
    /// override after the bitmap if both are needed.
    ///
    /// [`set_point_range_radius`]: Self::set_point_range_radius
    pub fn set_point_bitmap(&mut self, bitmap: Bitmap) {
        self.point_range_radius = hit_test::bitmap_range_radius(bitmap.width(), bitmap.height());
        self.point_bitmap = Some(bitmap);
    }

    /// Override the tap tolerance around result points. Survives only until
    /// the next [`set_point_bitmap`](Self::set_point_bitmap) call.
    pub fn set_point_range_radius(&mut self, radius: f32) {
        self.point_range_radius = radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::manual::ManualScheduler;
    use crate::surface::recording::RecordingSurface;
    use image::{Rgba, RgbaImage};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bitmap(width: u32, height: u32) -> Bitmap {
        Bitmap::from_rgba(RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255])))
    }

    #[test]
    fn starts_in_scan_mode() {
        let view = ViewfinderView::new(VisualStyle::default());
        assert!(!view.is_showing_points());
        assert!(view.frame_metrics().is_none());
    }

    #[test]
    fn showing_result_points_resets_the_pulse() {
        let mut view = ViewfinderView::new(VisualStyle::default());
        view.on_layout(1000.0, 1000.0);
        view.show_result_points(vec![ResultPoint::new(1, 2)]);

        // run a few pulse ticks, then re-enter result mode mid-pulse
        let mut surface = RecordingSurface::new();
        let mut scheduler = ManualScheduler::new();
        for _ in 0..5 {
            view.render(&mut surface, &mut scheduler);
        }
        assert!(view.zoom.scale() > 1.0);

        view.show_result_points(vec![ResultPoint::new(3, 4)]);
        assert_eq!(view.zoom, PointZoomAnimator::default());
        assert_eq!(view.points, vec![ResultPoint::new(3, 4)]);
        assert!(view.is_showing_points());
    }

    #[test]
    fn show_scanner_leaves_result_mode() {
        let mut view = ViewfinderView::new(VisualStyle::default());
        view.show_result_points(vec![ResultPoint::new(1, 1)]);
        view.show_scanner();
        assert!(!view.is_showing_points());
    }

    #[test]
    fn tap_on_a_point_fires_the_callback_with_its_index() {
        let mut view = ViewfinderView::new(VisualStyle::default());
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let sink = clicked.clone();
        view.set_on_point_click(move |index| sink.borrow_mut().push(index));

        view.show_result_points(vec![ResultPoint::new(10, 10), ResultPoint::new(10, 10)]);
        assert!(view.on_tap(12.0, 12.0));
        assert_eq!(*clicked.borrow(), vec![0]);

        assert!(!view.on_tap(500.0, 500.0));
        assert_eq!(*clicked.borrow(), vec![0]);
    }

    #[test]
    fn taps_are_ignored_while_scanning() {
        let mut view = ViewfinderView::new(VisualStyle::default());
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let sink = clicked.clone();
        view.set_on_point_click(move |index| sink.borrow_mut().push(index));

        view.show_result_points(vec![ResultPoint::new(10, 10)]);
        view.show_scanner();
        assert!(!view.on_tap(10.0, 10.0));
        assert!(clicked.borrow().is_empty());
    }

    #[test]
    fn tap_without_a_callback_is_still_consumed() {
        let mut view = ViewfinderView::new(VisualStyle::default());
        view.show_result_points(vec![ResultPoint::new(10, 10)]);
        assert!(view.on_tap(10.0, 10.0));
    }

    #[test]
    fn point_bitmap_clobbers_an_explicit_tolerance_override() {
        let mut view = ViewfinderView::new(VisualStyle::default());
        view.set_point_range_radius(99.0);
        view.set_point_bitmap(bitmap(40, 40));
        assert_eq!(view.point_range_radius, 40.0 / 2.0 * 1.2);

        // the other order keeps the override
        view.set_point_range_radius(99.0);
        assert_eq!(view.point_range_radius, 99.0);
    }

    #[test]
    fn default_tolerance_comes_from_the_circle_markers() {
        let view = ViewfinderView::new(VisualStyle::default());
        assert_eq!(view.point_range_radius, 15.0 * 1.2 * 1.2);
    }

    #[test]
    fn layout_rescales_a_preset_laser_bitmap() {
        let mut view = ViewfinderView::new(VisualStyle::default());
        view.set_laser_bitmap(bitmap(100, 40));
        view.on_layout(1000.0, 1000.0);
        let scaled = view.laser_bitmap.as_ref().expect("missing laser bitmap");
        assert_eq!((scaled.width(), scaled.height()), (625, 250));

        // a second layout at a different size re-scales from the source
        view.on_layout(400.0, 400.0);
        let scaled = view.laser_bitmap.as_ref().expect("missing laser bitmap");
        assert_eq!((scaled.width(), scaled.height()), (250, 100));
    }

    #[test]
    fn setting_the_laser_bitmap_after_layout_scales_immediately() {
        let mut view = ViewfinderView::new(VisualStyle::default());
        view.on_layout(1000.0, 1000.0);
        view.set_laser_bitmap(bitmap(100, 40));
        let scaled = view.laser_bitmap.as_ref().expect("missing laser bitmap");
        assert_eq!(scaled.width(), 625);
    }

    #[test]
    fn teardown_cancels_the_pending_repaint() {
        let mut view = ViewfinderView::new(VisualStyle::default());
        let mut scheduler = ManualScheduler::new();
        view.teardown(&mut scheduler);
        assert!(scheduler.cancelled);
    }

    #[test]
    fn live_reconfigure_touches_only_the_targeted_fields() {
        let mut view = ViewfinderView::new(VisualStyle::default());
        view.set_laser_color(Color(0xFFFF_0000));
        view.set_label_text(Some("hold steady".to_string()));
        view.set_viewfinder_style(ViewfinderStyle::Popular);
        assert_eq!(view.style().laser_color, Color(0xFFFF_0000));
        assert_eq!(view.style().label_text.as_deref(), Some("hold steady"));
        assert_eq!(view.style().viewfinder_style, ViewfinderStyle::Popular);
        // untouched
        assert_eq!(view.style().frame_ratio, 0.625);
    }
}
