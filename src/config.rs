//! Application-level configuration constants.

/// Bounds and granularity of a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

// Assets
pub const CLICK_SOUND_SRC: &str = "click.m4a";
pub const WORKOUTS_CSV: &str = include_str!("workouts.csv");

// Sound is allowed until the user opts out
pub const DEFAULT_ALLOW_SOUND: bool = true;

// Slider limits
pub const SETS_RANGE: SliderRange = SliderRange { min: 1, max: 5, step: 1 };
pub const PACE_RANGE: SliderRange = SliderRange { min: 30, max: 180, step: 30 };
pub const BREAK_RANGE: SliderRange = SliderRange { min: 1, max: 10, step: 1 };
