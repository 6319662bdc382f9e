//! Ring data model - what a graduation ring is made of
//!
//! A clock face is three concentric rings of tick marks. Each ring is
//! described by a [`RingSpec`] built fresh every frame; the layout pass
//! turns it into a sequence of [`Tick`]s styled by a shared [`FaceStyle`].
//! Nothing here outlives a single frame.

use eframe::egui::Color32;

/// Which time-of-day unit a ring displays
///
/// The unit selects the angle formula (hours get a lead offset) and which
/// "elapsed" color the past ticks take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    Hour,
    Minute,
    Second,
}

/// One ring of graduations
///
/// Built per frame from the viewport geometry and the sampled time.
/// `current` is nominally in `[0, tick_count)`; out-of-range values are
/// not rejected — they simply match no highlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    /// Number of graduations on the ring (60 for a traditional face)
    pub tick_count: u32,
    /// Ring radius in screen units
    pub base_radius: f32,
    /// The unit's current reading
    pub current: u32,
    /// Which unit this ring represents
    pub unit: UnitKind,
}

impl RingSpec {
    pub fn new(tick_count: u32, base_radius: f32, current: u32, unit: UnitKind) -> Self {
        Self {
            tick_count,
            base_radius,
            current,
            unit,
        }
    }
}

/// Stroke styling shared by all three rings
///
/// Owned by the display settings and mutated by the tuning panel between
/// frames; the layout pass only ever reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceStyle {
    /// Default stroke color
    pub base: Color32,
    /// Default stroke width in pixels
    pub line_width: f32,
    /// Elapsed hour ticks
    pub past_hour: Color32,
    /// Elapsed minute ticks
    pub past_minute: Color32,
    /// Elapsed second ticks
    pub past_second: Color32,
    /// The tick matching the unit's current reading
    pub current: Color32,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            base: Color32::from_rgb(255, 255, 255),
            line_width: 2.0,
            past_hour: Color32::from_rgb(0, 255, 0),
            past_minute: Color32::from_rgb(0, 0, 255),
            past_second: Color32::from_rgb(255, 0, 0),
            current: Color32::from_rgb(255, 255, 0),
        }
    }
}

/// A single computed graduation
///
/// Pure output of the layout pass: where the tick sits, how long and thick
/// it is, and what color it gets this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Angle in radians (ordinal 0 points straight up)
    pub angle: f32,
    /// Segment length in screen units
    pub length: f32,
    /// Stroke width in pixels
    pub line_width: f32,
    /// Distance of the tick center from the face center
    pub radius: f32,
    /// Resolved stroke color
    pub color: Color32,
}

impl Tick {
    /// Screen-space center of this tick for a face centered at `(cx, cy)`
    pub fn center(&self, cx: f32, cy: f32) -> (f32, f32) {
        (
            cx + self.radius * self.angle.cos(),
            cy + self.radius * self.angle.sin(),
        )
    }
}
