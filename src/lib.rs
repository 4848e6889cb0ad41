//! Core of the workout calculator: the workout model, the duration formula
//! and preset loading. Everything in here is UI-independent so it can be
//! exercised on the native target; the Yew front end lives in the binary.

use log::{debug, info};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

pub mod calculator;
pub mod duration;
pub mod sinks;

/// Initial values for a freshly mounted form.
pub mod defaults {
    pub const SET_COUNT: u32 = 3;
    pub const PACE_SECONDS: u32 = 90;
    pub const BREAK_MINUTES: u32 = 5;
}

/// A named workout the user can pick from the type selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct WorkoutPreset {
    pub name: String,
    #[serde(rename = "exercises")]
    pub exercise_count: u32,
}

impl WorkoutPreset {
    pub fn new(name: impl Into<String>, exercise_count: u32) -> Self {
        Self {
            name: name.into(),
            exercise_count,
        }
    }
}

/// The four user-editable workout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    pub exercise_count: u32,
    pub set_count: u32,
    pub pace_seconds: u32,
    pub break_minutes: u32,
}

impl Configuration {
    /// Default configuration for the given exercise count.
    pub fn new(exercise_count: u32) -> Self {
        Self {
            exercise_count,
            set_count: defaults::SET_COUNT,
            pace_seconds: defaults::PACE_SECONDS,
            break_minutes: defaults::BREAK_MINUTES,
        }
    }

    /// Default configuration seeded from the first preset.
    pub fn from_presets(presets: &[WorkoutPreset]) -> Result<Self, PresetError> {
        presets
            .first()
            .map(|preset| Self::new(preset.exercise_count))
            .ok_or(PresetError::Empty)
    }
}

/// Estimated total workout time in minutes.
///
/// `exercises * sets * pace` seconds of work plus one break between each
/// pair of consecutive sets.
pub fn compute_duration(cfg: &Configuration) -> f64 {
    let work_seconds = cfg.exercise_count as f64 * cfg.set_count as f64 * cfg.pace_seconds as f64;
    let breaks = cfg.set_count.saturating_sub(1) as f64 * cfg.break_minutes as f64;
    work_seconds / 60.0 + breaks
}

/// Errors raised while loading the workout presets.
#[derive(Debug)]
pub enum PresetError {
    /// The CSV header could not be read.
    Csv(String),
    /// No usable preset was found.
    Empty,
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::Csv(msg) => write!(f, "Failed to read workout presets: {}", msg),
            PresetError::Empty => write!(f, "At least one workout preset is required"),
        }
    }
}

impl std::error::Error for PresetError {}

impl From<csv::Error> for PresetError {
    fn from(err: csv::Error) -> Self {
        PresetError::Csv(err.to_string())
    }
}

/// Parse workout presets from CSV content with a `name,exercises` header.
///
/// Malformed rows, duplicate names and zero exercise counts are skipped.
/// Fails only if the header is unreadable or nothing usable remains.
pub fn read_workouts_from_csv_string(csv_content: &str) -> Result<Vec<WorkoutPreset>, PresetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());
    reader.headers()?;

    let mut workouts = Vec::new();
    let mut seen_names = HashSet::new();

    for (i, record) in reader.deserialize::<WorkoutPreset>().enumerate() {
        let preset = match record {
            Ok(preset) => preset,
            Err(e) => {
                debug!("Warning: {} on record {}", e, i + 1);
                continue;
            }
        };

        if preset.exercise_count == 0 {
            debug!("Warning: preset '{}' has no exercises, skipping", preset.name);
            continue;
        }

        if !seen_names.insert(preset.name.clone()) {
            debug!(
                "Warning: Duplicate preset '{}' found on record {}, skipping",
                preset.name,
                i + 1
            );
            continue;
        }

        workouts.push(preset);
    }

    if workouts.is_empty() {
        return Err(PresetError::Empty);
    }

    info!("Loaded {} workout presets", workouts.len());
    Ok(workouts)
}

/// Built-in presets used when no preset file is available.
pub fn default_presets() -> Vec<WorkoutPreset> {
    vec![
        WorkoutPreset::new("Full-body workout", 9),
        WorkoutPreset::new("Arms + Legs", 6),
        WorkoutPreset::new("Arms only", 3),
        WorkoutPreset::new("Legs only", 4),
        WorkoutPreset::new("Core only", 5),
    ]
}
