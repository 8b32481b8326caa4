//! Per-frame orchestration: composites one overlay frame from the current
//! mode, style and animator state, then requests the next repaint.
//!
//! The renderer owns no state. Geometry comes from the view's cached
//! metrics, animation positions from the animators (which it advances after
//! drawing them), and every visual decision from [`VisualStyle`].

use crate::animation::ScanAnimator;
use crate::bitmap::Bitmap;
use crate::geometry::{Rect, ResultPoint};
use crate::scheduler::RepaintScheduler;
use crate::style::{LaserStyle, TextLocation, ViewfinderStyle, VisualStyle};
use crate::surface::{Brush, DrawSurface, LabelStyle, LineSegment, Path};
use crate::view::ViewfinderView;
use std::time::Duration;

pub(crate) fn render_frame(
    view: &mut ViewfinderView,
    surface: &mut dyn DrawSurface,
    scheduler: &mut dyn RepaintScheduler,
) {
    if view.showing_points {
        render_result_points(view, surface, scheduler);
        return;
    }

    // scanning needs geometry; the next layout pass restarts the loop
    let Some(metrics) = view.metrics else { return };
    let frame = metrics.frame;
    let interval = Duration::from_millis(view.style.laser_animation_interval_ms);

    match view.style.viewfinder_style {
        ViewfinderStyle::Classic => {
            draw_exterior(surface, view.view_width, view.view_height, frame, &view.style);
            draw_laser(
                surface,
                &view.style,
                &mut view.scan,
                view.laser_bitmap.as_ref(),
                frame,
                view.view_width,
            );
            draw_frame_border(surface, &view.style, view.frame_bitmap.as_ref(), frame);
            draw_label(surface, &view.style, frame, metrics.label_width);

            let region = if view.style.full_refresh { None } else { Some(frame) };
            scheduler.schedule_redraw(interval, region);
        }
        ViewfinderStyle::Popular => {
            // full-bleed scan: no mask, no frame, nothing to bound the
            // refresh region with
            draw_laser(
                surface,
                &view.style,
                &mut view.scan,
                view.laser_bitmap.as_ref(),
                frame,
                view.view_width,
            );
            draw_label(surface, &view.style, frame, metrics.label_width);
            scheduler.schedule_redraw(interval, None);
        }
    }
}

fn render_result_points(
    view: &mut ViewfinderView,
    surface: &mut dyn DrawSurface,
    scheduler: &mut dyn RepaintScheduler,
) {
    if !view.style.mask_color.is_transparent() {
        let full = Rect::new(0.0, 0.0, view.view_width, view.view_height);
        surface.fill_rect(full, view.style.mask_color);
    }
    for point in &view.points {
        draw_result_point(surface, &view.style, *point, view.point_bitmap.as_ref(), view.zoom.scale());
    }
    if view.style.point_animation {
        view.zoom.tick(view.style.zoom_speed, view.style.max_zoom_ratio);
        scheduler.schedule_redraw(view.zoom.next_delay(&view.style), None);
    }
}

fn draw_result_point(
    surface: &mut dyn DrawSurface,
    style: &VisualStyle,
    point: ResultPoint,
    bitmap: Option<&Bitmap>,
    scale: f32,
) {
    let (cx, cy) = (point.x as f32, point.y as f32);
    match bitmap {
        Some(bitmap) => {
            let (width, height) = (bitmap.width() as f32, bitmap.height() as f32);
            if style.point_animation {
                let (dst_width, dst_height) = (width * scale, height * scale);
                let dst = Rect::from_origin_size(
                    cx - dst_width / 2.0,
                    cy - dst_height / 2.0,
                    dst_width,
                    dst_height,
                );
                surface.draw_bitmap_in_rect(bitmap, dst);
            } else {
                surface.draw_bitmap(bitmap, cx - width / 2.0, cy - height / 2.0);
            }
        }
        None => {
            surface.fill_oval(
                Rect::around(cx, cy, style.point_stroke_radius() * scale),
                Brush::Solid(style.point_stroke_color),
            );
            surface.fill_oval(
                Rect::around(cx, cy, style.point_radius * scale),
                Brush::Solid(style.point_color),
            );
        }
    }
}

/// Mask everything outside the (rounded) frame.
fn draw_exterior(
    surface: &mut dyn DrawSurface,
    view_width: f32,
    view_height: f32,
    frame: Rect,
    style: &VisualStyle,
) {
    if style.mask_color.is_transparent() {
        return;
    }
    let path = Path::new()
        .rect(Rect::new(0.0, 0.0, view_width, view_height))
        .difference_round_rect(frame, style.frame_corner_radius);
    surface.fill_path(&path, style.mask_color);
}

/// Draw the active scan indicator, then advance its position.
fn draw_laser(
    surface: &mut dyn DrawSurface,
    style: &VisualStyle,
    scan: &mut ScanAnimator,
    laser_bitmap: Option<&Bitmap>,
    frame: Rect,
    view_width: f32,
) {
    let position = scan.position(frame);
    match ScanAnimator::resolve_style(style.laser_style, laser_bitmap.is_some()) {
        LaserStyle::None => {}
        LaserStyle::Line => draw_line_scanner(surface, style, frame, position),
        LaserStyle::Grid => draw_grid_scanner(surface, style, frame, position),
        LaserStyle::Image => {
            if let Some(bitmap) = laser_bitmap {
                let left = (view_width - bitmap.width() as f32) / 2.0;
                surface.draw_bitmap(bitmap, left, position);
            }
        }
    }
    scan.advance(frame, style.laser_line_height, style.laser_movement_speed);
}

fn laser_gradient(style: &VisualStyle, center_x: f32, from_y: f32, to_y: f32) -> Brush {
    Brush::LinearGradient {
        start: (center_x, from_y),
        end: (center_x, to_y),
        from: style.laser_color.fade_to_transparent(),
        to: style.laser_color,
    }
}

/// A thin gradient-filled band spanning the frame, inset by the corner
/// accents.
fn draw_line_scanner(surface: &mut dyn DrawSurface, style: &VisualStyle, frame: Rect, position: f32) {
    let brush = laser_gradient(
        style,
        frame.center_x(),
        position,
        position + style.laser_line_height,
    );
    let band = Rect::new(
        frame.left + style.frame_corner_size,
        position,
        frame.right - style.frame_corner_size,
        position + style.laser_line_height,
    );
    surface.fill_oval(band, brush);
}

/// Grid rules inside the illuminated window trailing the indicator.
fn draw_grid_scanner(surface: &mut dyn DrawSurface, style: &VisualStyle, frame: Rect, position: f32) {
    let start_y = if style.laser_grid_height > 0.0 && position - frame.top > style.laser_grid_height
    {
        position - style.laser_grid_height
    } else {
        frame.top
    };
    let brush = laser_gradient(style, frame.center_x(), start_y, position);

    let columns = style.laser_grid_column.max(1);
    let unit = frame.width() / columns as f32;
    let mut segments = Vec::new();

    for i in 1..columns {
        let x = frame.left + i as f32 * unit;
        segments.push(LineSegment::new(x, start_y, x, position));
    }

    let rows = ((position - start_y) / unit).ceil() as u32;
    let inset = style.frame_line_stroke_width / 2.0;
    for i in 0..=rows {
        let y = position - i as f32 * unit;
        segments.push(LineSegment::new(frame.left + inset, y, frame.right - inset, y));
    }

    surface.stroke_lines(&segments, style.laser_grid_stroke_width, brush);
}

fn draw_frame_border(
    surface: &mut dyn DrawSurface,
    style: &VisualStyle,
    frame_bitmap: Option<&Bitmap>,
    frame: Rect,
) {
    match frame_bitmap {
        Some(bitmap) => surface.draw_bitmap_in_rect(bitmap, frame),
        None => {
            surface.stroke_round_rect(
                frame,
                style.frame_corner_radius,
                style.frame_line_stroke_width,
                style.frame_color,
            );
            draw_frame_corners(surface, style, frame);
        }
    }
}

/// Four corner accents: quarter arcs when the frame is rounded, plus the
/// straight extension runs along each edge.
fn draw_frame_corners(surface: &mut dyn DrawSurface, style: &VisualStyle, frame: Rect) {
    // center the thicker corner stroke over the thin border line
    let padding = (style.frame_corner_stroke_width - style.frame_line_stroke_width) / 2.0;
    let corner = frame.inset(padding);
    let stroke = style.frame_corner_stroke_width;
    let color = style.frame_corner_color;
    let radius = style.frame_corner_radius;

    if radius > 0.0 {
        let diameter = 2.0 * radius;
        surface.stroke_arc(
            Rect::new(corner.left, corner.top, corner.left + diameter, corner.top + diameter),
            180.0,
            90.0,
            stroke,
            color,
        );
        surface.stroke_arc(
            Rect::new(corner.right - diameter, corner.top, corner.right, corner.top + diameter),
            270.0,
            90.0,
            stroke,
            color,
        );
        surface.stroke_arc(
            Rect::new(corner.right - diameter, corner.bottom - diameter, corner.right, corner.bottom),
            0.0,
            90.0,
            stroke,
            color,
        );
        surface.stroke_arc(
            Rect::new(corner.left, corner.bottom - diameter, corner.left + diameter, corner.bottom),
            90.0,
            90.0,
            stroke,
            color,
        );
    }

    if style.frame_corner_size - radius > 0.0 {
        let size = style.frame_corner_size;
        let segments = [
            // top-left
            LineSegment::new(corner.left - padding + radius, corner.top, corner.left + size, corner.top),
            LineSegment::new(corner.left, corner.top - padding + radius, corner.left, corner.top + size),
            // top-right
            LineSegment::new(corner.right - size, corner.top, corner.right + padding - radius, corner.top),
            LineSegment::new(corner.right, corner.top - padding + radius, corner.right, corner.top + size),
            // bottom-right
            LineSegment::new(corner.right + padding - radius, corner.bottom, corner.right - size, corner.bottom),
            LineSegment::new(corner.right, corner.bottom + padding - radius, corner.right, corner.bottom - size),
            // bottom-left
            LineSegment::new(corner.left + size, corner.bottom, corner.left - padding + radius, corner.bottom),
            LineSegment::new(corner.left, corner.bottom + padding - radius, corner.left, corner.bottom - size),
        ];
        surface.stroke_lines(&segments, stroke, Brush::Solid(color));
    }
}

fn draw_label(surface: &mut dyn DrawSurface, style: &VisualStyle, frame: Rect, label_width: f32) {
    let Some(text) = style.label_text.as_deref().filter(|text| !text.is_empty()) else {
        return;
    };
    let label_style = LabelStyle { color: style.label_text_color, size: style.label_text_size };
    let top = match style.label_text_location {
        TextLocation::Bottom => frame.bottom + style.label_text_padding,
        TextLocation::Top => {
            let (_, height) = surface.measure_label(text, label_width, label_style);
            frame.top - style.label_text_padding - height
        }
    };
    surface.draw_label(text, frame.center_x(), top, label_width, label_style);
}
