//! Graduation layout - the per-tick computation
//!
//! This is the heart of the crate: a pure function from a ring spec and a
//! style to a sequence of ticks. No state, no I/O — the same inputs always
//! emit the same ticks, which is what makes the whole face testable with a
//! fixed time.
//!
//! ## Angle conventions
//!
//! Ordinal 0 sits at the 12-o'clock position (the `-π/2` rotation) and
//! ordinals advance clockwise. Minutes and seconds map directly onto the
//! 60-division ring; hours are scaled by 60 to share it and carry a fixed
//! 5-tick lead, so the lit hour tick rides 5 positions ahead of its
//! literal value. The lead is a deliberate styling quirk of the face, not
//! a unit conversion.

use std::f32::consts::{FRAC_PI_2, TAU};

use super::ring::{FaceStyle, RingSpec, Tick, UnitKind};

/// Tick length as a fraction of the ring radius
const LENGTH_RATIO: f32 = 0.05;
/// Every 5th graduation is a major tick
const MAJOR_EVERY: u32 = 5;
/// Major ticks sit fractionally closer to the center
const MAJOR_RADIUS_SHRINK: f32 = 0.98;
/// The hour ring is lit 5 graduations ahead of its literal value
const HOUR_LEAD_TICKS: u32 = 5;

/// Lay out one ring, handing each computed [`Tick`] to `emit` in ascending
/// ordinal order.
///
/// Color precedence, first match wins: elapsed ticks of the ring's own
/// unit, then the current-value highlight, then the base color. At
/// `i == current` the elapsed rule cannot match, so the highlight always
/// wins there. A `current` outside `[0, tick_count)` matches no highlight
/// and is emitted without complaint.
pub fn graduations(ring: &RingSpec, style: &FaceStyle, mut emit: impl FnMut(Tick)) {
    for i in 0..ring.tick_count {
        let angle = match ring.unit {
            UnitKind::Hour => {
                ((i + (ring.current + HOUR_LEAD_TICKS) * 60) as f32 / 60.0) * TAU - FRAC_PI_2
            }
            UnitKind::Minute | UnitKind::Second => {
                TAU * i as f32 / ring.tick_count as f32 - FRAC_PI_2
            }
        };

        let major = i % MAJOR_EVERY == 0;

        let mut length = ring.base_radius * LENGTH_RATIO;
        let mut line_width = style.line_width;
        if major {
            length *= 2.0;
            line_width *= 2.0;
        }

        let mut radius = ring.base_radius;
        if major {
            radius *= MAJOR_RADIUS_SHRINK;
        }

        let color = if ring.unit == UnitKind::Hour && i < ring.current {
            style.past_hour
        } else if ring.unit == UnitKind::Minute && i < ring.current {
            style.past_minute
        } else if ring.unit == UnitKind::Second && i < ring.current {
            style.past_second
        } else if i == ring.current {
            style.current
        } else {
            style.base
        };

        emit(Tick {
            angle,
            length,
            line_width,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Color32;

    fn collect(ring: &RingSpec, style: &FaceStyle) -> Vec<Tick> {
        let mut ticks = Vec::new();
        graduations(ring, style, |t| ticks.push(t));
        ticks
    }

    #[test]
    fn second_ring_emits_sixty_ascending_angles() {
        let ring = RingSpec::new(60, 100.0, 0, UnitKind::Second);
        let ticks = collect(&ring, &FaceStyle::default());

        assert_eq!(ticks.len(), 60);
        for (i, tick) in ticks.iter().enumerate() {
            let expected = TAU * i as f32 / 60.0 - FRAC_PI_2;
            assert!((tick.angle - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn major_ticks_double_up_and_sit_closer() {
        let style = FaceStyle::default();
        let ring = RingSpec::new(60, 200.0, 0, UnitKind::Minute);
        let ticks = collect(&ring, &style);

        for (i, tick) in ticks.iter().enumerate() {
            if i % 5 == 0 {
                assert!((tick.length - 200.0 * 0.05 * 2.0).abs() < 1e-4);
                assert!((tick.line_width - style.line_width * 2.0).abs() < 1e-5);
                assert!((tick.radius - 200.0 * 0.98).abs() < 1e-3);
            } else {
                assert!((tick.length - 200.0 * 0.05).abs() < 1e-4);
                assert!((tick.line_width - style.line_width).abs() < 1e-5);
                assert!((tick.radius - 200.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn highlight_beats_past_at_the_current_minute() {
        let style = FaceStyle::default();
        let ring = RingSpec::new(60, 100.0, 30, UnitKind::Minute);
        let ticks = collect(&ring, &style);

        assert_eq!(ticks[29].color, style.past_minute);
        assert_eq!(ticks[30].color, style.current);
        assert_eq!(ticks[31].color, style.base);
    }

    #[test]
    fn past_hours_are_recolored() {
        let style = FaceStyle::default();
        let ring = RingSpec::new(60, 100.0, 3, UnitKind::Hour);
        let ticks = collect(&ring, &style);

        for tick in &ticks[..3] {
            assert_eq!(tick.color, style.past_hour);
        }
        assert_eq!(ticks[3].color, style.current);
        assert_eq!(ticks[4].color, style.base);
    }

    #[test]
    fn hour_ring_leads_by_five_ticks() {
        let ring = RingSpec::new(60, 100.0, 3, UnitKind::Hour);
        let ticks = collect(&ring, &FaceStyle::default());

        // Hour 3 folds in the 5-tick lead: (3 + (3 + 5) * 60) / 60 turns.
        let expected = ((3.0 + (3.0 + 5.0) * 60.0) / 60.0) * TAU - FRAC_PI_2;
        assert!((ticks[3].angle - expected).abs() < 1e-3);

        // And must not match the plain minute-style angle for ordinal 3.
        let naive = TAU * 3.0 / 60.0 - FRAC_PI_2;
        assert!((ticks[3].angle - naive).abs() > 1.0);
    }

    #[test]
    fn identical_inputs_produce_identical_ticks() {
        let style = FaceStyle::default();
        let ring = RingSpec::new(60, 123.0, 42, UnitKind::Second);

        let first = collect(&ring, &style);
        let second = collect(&ring, &style);
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_current_never_highlights() {
        let style = FaceStyle::default();
        let ring = RingSpec::new(60, 100.0, 60, UnitKind::Second);
        let ticks = collect(&ring, &style);

        assert_eq!(ticks.len(), 60);
        assert!(ticks.iter().all(|t| t.color != style.current));
    }

    #[test]
    fn first_second_of_a_minute_end_to_end() {
        let style = FaceStyle {
            base: Color32::WHITE,
            line_width: 2.0,
            ..FaceStyle::default()
        };
        let ring = RingSpec::new(60, 100.0, 0, UnitKind::Second);
        let ticks = collect(&ring, &style);

        // Tick 0: major + highlighted, straight up.
        assert_eq!(ticks[0].color, style.current);
        assert!((ticks[0].angle + FRAC_PI_2).abs() < 1e-6);
        assert!((ticks[0].length - 10.0).abs() < 1e-4);
        assert!((ticks[0].line_width - 4.0).abs() < 1e-5);
        assert!((ticks[0].radius - 98.0).abs() < 1e-3);

        // Tick 1: minor, base color, one division clockwise.
        assert_eq!(ticks[1].color, Color32::WHITE);
        assert!((ticks[1].angle - (TAU / 60.0 - FRAC_PI_2)).abs() < 1e-5);
        assert!((ticks[1].length - 5.0).abs() < 1e-4);
        assert!((ticks[1].line_width - 2.0).abs() < 1e-5);
        assert!((ticks[1].radius - 100.0).abs() < 1e-3);
    }
}
