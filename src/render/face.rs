//! Clock face display widget
//!
//! Renders the three graduation rings into an egui painter. The widget
//! owns the display settings; the actual per-tick math lives in
//! `face::layout` and this file only turns emitted ticks into strokes.
//!
//! ## Geometry
//!
//! The face fills the largest square that fits the available space. The
//! hours ring sits at `min(w, h) * 0.5 * 0.65`, minutes at 1.2x that and
//! seconds at 1.4x, matching the traditional inner-to-outer ordering.

use eframe::egui::{self, Color32, Pos2, Stroke, Vec2};

use crate::face::{graduations, FaceStyle, RingSpec, UnitKind};
use crate::time::TimeOfDay;

/// All three rings share the traditional 60-division face
pub const RING_TICKS: u32 = 60;
/// Hours ring radius as a fraction of the half-viewport
const MAIN_RADIUS_RATIO: f32 = 0.65;
/// Minutes ring sits outside the hours ring
const MINUTE_RING_SCALE: f32 = 1.2;
/// Seconds ring is the outermost
const SECOND_RING_SCALE: f32 = 1.4;

/// Display settings for the clock face
#[derive(Clone)]
pub struct FaceSettings {
    /// Background color
    pub background: Color32,
    /// Stroke styling shared by all rings
    pub style: FaceStyle,
}

impl Default for FaceSettings {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(10, 10, 14),
            style: FaceStyle::default(),
        }
    }
}

/// Clock face widget
///
/// Stateless between frames apart from its settings; every call to
/// [`ClockFace::show`] lays the rings out from scratch.
pub struct ClockFace {
    /// Display settings, mutated by the tuning panel between frames
    pub settings: FaceSettings,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockFace {
    /// Create a clock face with default settings
    pub fn new() -> Self {
        Self {
            settings: FaceSettings::default(),
        }
    }

    /// Create a clock face with custom settings
    pub fn with_settings(settings: FaceSettings) -> Self {
        Self { settings }
    }

    /// Draw the face for the given time
    ///
    /// # Arguments
    /// * `ui` - The egui UI context
    /// * `time` - The frame's sampled time, shared by all three rings
    /// * `size` - Desired widget size (or None for the available square)
    pub fn show(&self, ui: &mut egui::Ui, time: TimeOfDay, size: Option<Vec2>) -> egui::Response {
        let size = size.unwrap_or_else(|| {
            let available = ui.available_size();
            let side = available.x.min(available.y);
            Vec2::new(side, side)
        });

        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        // Wipe the surface before this frame's ticks go down.
        painter.rect_filled(rect, 4.0, self.settings.background);

        let cx = rect.center().x;
        let cy = rect.center().y;
        let main_radius = rect.width().min(rect.height()) * 0.5 * MAIN_RADIUS_RATIO;

        let rings = [
            RingSpec::new(RING_TICKS, main_radius, time.hour, UnitKind::Hour),
            RingSpec::new(
                RING_TICKS,
                main_radius * MINUTE_RING_SCALE,
                time.minute,
                UnitKind::Minute,
            ),
            RingSpec::new(
                RING_TICKS,
                main_radius * SECOND_RING_SCALE,
                time.second,
                UnitKind::Second,
            ),
        ];

        for ring in &rings {
            graduations(ring, &self.settings.style, |tick| {
                let (x, y) = tick.center(cx, cy);
                draw_line(
                    &painter,
                    x,
                    y,
                    tick.length,
                    tick.angle,
                    tick.color,
                    tick.line_width,
                );
            });
        }

        response
    }
}

/// Stroke a line segment of `length` centered on `(x, y)`, rotated by
/// `angle` radians.
///
/// Endpoints are computed directly, so no painter transform is left
/// behind. egui segments are butt-capped; the endpoint dots round them
/// off.
fn draw_line(
    painter: &egui::Painter,
    x: f32,
    y: f32,
    length: f32,
    angle: f32,
    color: Color32,
    line_width: f32,
) {
    let (sin, cos) = angle.sin_cos();
    let half = length / 2.0;
    let p1 = Pos2::new(x - half * cos, y - half * sin);
    let p2 = Pos2::new(x + half * cos, y + half * sin);

    painter.line_segment([p1, p2], Stroke::new(line_width, color));
    painter.circle_filled(p1, line_width / 2.0, color);
    painter.circle_filled(p2, line_width / 2.0, color);
}
