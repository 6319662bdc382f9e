//! Face module - data model and graduation layout
//!
//! This module provides:
//! - The ring data model: `UnitKind`, `RingSpec`, `FaceStyle`, `Tick`
//! - `graduations`, the pure layout pass turning a ring into ticks

mod layout;
mod ring;

pub use layout::graduations;
pub use ring::{FaceStyle, RingSpec, Tick, UnitKind};
