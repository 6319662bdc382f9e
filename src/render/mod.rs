//! Render module - UI components for the clock face
//!
//! This module provides:
//! - The clock face widget and its display settings

mod face;

pub use face::{ClockFace, FaceSettings, RING_TICKS};
