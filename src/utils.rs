use crate::config::SliderRange;
use workout_calculator::WorkoutPreset;

/// Parse a non-empty numeric field.
pub fn validate_numeric_input(input: &str, field_name: &str) -> Result<u32, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| format!("{} must be a valid number", field_name))
}

/// Parse a slider value, snapping it to the nearest step inside `range`.
pub fn parse_slider_value(
    input: &str,
    range: SliderRange,
    field_name: &str,
) -> Result<u32, String> {
    let raw = validate_numeric_input(input, field_name)?;
    let clamped = raw.clamp(range.min, range.max);
    let step = range.step.max(1);
    let steps = (clamped - range.min + step / 2) / step;
    Ok((range.min + steps * step).min(range.max))
}

/// Parse the workout selector's value; it must name a known exercise count.
pub fn parse_exercise_count(input: &str, workouts: &[WorkoutPreset]) -> Result<u32, String> {
    let count = validate_numeric_input(input, "Workout type")?;
    if workouts.iter().any(|w| w.exercise_count == count) {
        Ok(count)
    } else {
        Err(format!("No workout has {} exercises", count))
    }
}
