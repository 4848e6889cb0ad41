//! The update pipeline tying configuration, duration and side effects together.
//!
//! Every user action goes through [`WorkoutState::apply`], which mutates the
//! state, recomputes the duration synchronously when the configuration moved,
//! and reports the side effects the update calls for. [`Calculator`] runs
//! that pipeline and hands the effects to the injected sinks.
//!
//! # Rules
//! - A configuration change always overwrites the duration with
//!   [`compute_duration`], discarding manual adjustments.
//! - `Increment`/`Decrement` adjust the duration only.
//! - The cue plays once per duration change, and only while sound is enabled.
//! - The title follows the exercise count and nothing else.

use crate::duration::{decrement, format_duration, increment};
use crate::sinks::{CuePlayer, StatusSink};
use crate::{compute_duration, Configuration, PresetError, WorkoutPreset};
use log::debug;

/// Everything the form can ask of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectExercises(u32),
    SetSets(u32),
    SetPace(u32),
    SetBreak(u32),
    /// Replace several fields in one update.
    Reconfigure(Configuration),
    Increment,
    Decrement,
    SetSoundEnabled(bool),
}

/// Side effects requested by one update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    pub play_cue: bool,
    pub title: Option<String>,
}

impl Effects {
    pub fn is_empty(&self) -> bool {
        !self.play_cue && self.title.is_none()
    }
}

/// Ambient label for a workout with `exercise_count` exercises.
pub fn workout_title(exercise_count: u32) -> String {
    format!("Your {}-exercise workout", exercise_count)
}

/// Configuration plus the duration derived from it (or adjusted by hand).
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutState {
    config: Configuration,
    duration: f64,
    sound_enabled: bool,
}

impl WorkoutState {
    /// Unmounted state: default configuration, zero duration.
    pub fn new(exercise_count: u32, sound_enabled: bool) -> Self {
        Self {
            config: Configuration::new(exercise_count),
            duration: 0.0,
            sound_enabled,
        }
    }

    pub fn from_presets(
        presets: &[WorkoutPreset],
        sound_enabled: bool,
    ) -> Result<Self, PresetError> {
        let config = Configuration::from_presets(presets)?;
        Ok(Self::new(config.exercise_count, sound_enabled))
    }

    pub fn config(&self) -> Configuration {
        self.config
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// The duration as shown on the readout.
    pub fn display(&self) -> String {
        format_duration(self.duration)
    }

    /// Derive the first duration and publish the initial title.
    pub fn mount(&mut self) -> Effects {
        let mut effects = self.set_duration(compute_duration(&self.config));
        effects.title = Some(workout_title(self.config.exercise_count));
        effects
    }

    pub fn apply(&mut self, action: Action) -> Effects {
        let config = self.config;
        match action {
            Action::SelectExercises(exercise_count) => self.reconfigure(Configuration {
                exercise_count,
                ..config
            }),
            Action::SetSets(set_count) => self.reconfigure(Configuration { set_count, ..config }),
            Action::SetPace(pace_seconds) => self.reconfigure(Configuration {
                pace_seconds,
                ..config
            }),
            Action::SetBreak(break_minutes) => self.reconfigure(Configuration {
                break_minutes,
                ..config
            }),
            Action::Reconfigure(next) => self.reconfigure(next),
            Action::Increment => self.set_duration(increment(self.duration)),
            Action::Decrement => self.set_duration(decrement(self.duration)),
            Action::SetSoundEnabled(enabled) => {
                // flipping the flag never plays the cue by itself
                self.sound_enabled = enabled;
                Effects::default()
            }
        }
    }

    fn reconfigure(&mut self, next: Configuration) -> Effects {
        if next == self.config {
            return Effects::default();
        }
        let previous = std::mem::replace(&mut self.config, next);

        let mut effects = self.set_duration(compute_duration(&next));
        if previous.exercise_count != next.exercise_count {
            effects.title = Some(workout_title(next.exercise_count));
        }
        effects
    }

    fn set_duration(&mut self, next: f64) -> Effects {
        let changed = next != self.duration;
        self.duration = next;
        Effects {
            play_cue: changed && self.sound_enabled,
            title: None,
        }
    }
}

/// A [`WorkoutState`] wired to its status label and audio cue.
pub struct Calculator<S, C> {
    state: WorkoutState,
    status: S,
    cue: C,
}

impl<S: StatusSink, C: CuePlayer> Calculator<S, C> {
    pub fn new(state: WorkoutState, status: S, cue: C) -> Self {
        Self { state, status, cue }
    }

    pub fn state(&self) -> &WorkoutState {
        &self.state
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn cue(&self) -> &C {
        &self.cue
    }

    /// Derive the first duration and deliver the mount effects at once.
    pub fn mount(&mut self) {
        let effects = self.prepare_mount();
        self.deliver(effects);
    }

    /// State half of [`Calculator::mount`]: the sinks are left untouched and
    /// the returned effects are for a later [`Calculator::deliver`].
    pub fn prepare_mount(&mut self) -> Effects {
        self.state.mount()
    }

    pub fn dispatch(&mut self, action: Action) {
        let effects = self.state.apply(action);
        debug!("{:?} -> {} {:?}", action, self.state.display(), effects);
        self.deliver(effects);
    }

    // cue before title: the title never depends on the duration
    pub fn deliver(&self, effects: Effects) {
        if effects.play_cue {
            self.cue.play();
        }
        if let Some(title) = effects.title {
            self.status.set_label(&title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(sound_enabled: bool) -> WorkoutState {
        let mut state = WorkoutState::new(8, sound_enabled);
        state.mount();
        state
    }

    #[test]
    fn mount_derives_duration_and_title() {
        let mut state = WorkoutState::new(8, true);
        assert_eq!(state.duration(), 0.0);

        let effects = state.mount();
        assert_eq!(state.duration(), 46.0);
        assert_eq!(state.display(), "46:00");
        assert_eq!(
            effects,
            Effects {
                play_cue: true,
                title: Some("Your 8-exercise workout".to_string()),
            }
        );
    }

    #[test]
    fn each_field_edit_touches_only_that_field() {
        let mut state = mounted(false);
        state.apply(Action::SetSets(5));
        state.apply(Action::SetPace(30));
        state.apply(Action::SetBreak(1));
        state.apply(Action::SelectExercises(3));
        assert_eq!(
            state.config(),
            Configuration {
                exercise_count: 3,
                set_count: 5,
                pace_seconds: 30,
                break_minutes: 1,
            }
        );
        assert_eq!(state.duration(), 11.5);
    }

    #[test]
    fn config_change_discards_manual_adjustment() {
        let mut state = mounted(false);
        state.apply(Action::Increment);
        assert_eq!(state.duration(), 47.0);

        state.apply(Action::SetSets(2));
        // 8 * 2 * 90s = 24 minutes + one 5-minute break
        assert_eq!(state.duration(), 29.0);
        assert_eq!(state.config().set_count, 2);
    }

    #[test]
    fn manual_adjustment_leaves_config_alone() {
        let mut state = mounted(false);
        let before = state.config();
        state.apply(Action::Increment);
        state.apply(Action::Decrement);
        state.apply(Action::Decrement);
        assert_eq!(state.config(), before);
        assert_eq!(state.duration(), 45.0);
    }

    #[test]
    fn cue_follows_duration_changes_when_enabled() {
        let mut state = mounted(true);
        assert!(state.apply(Action::Increment).play_cue);
        assert!(state.apply(Action::SetPace(60)).play_cue);
    }

    #[test]
    fn no_cue_when_sound_disabled() {
        let mut state = mounted(false);
        assert!(state.apply(Action::Increment).is_empty());
        assert!(state.apply(Action::SetBreak(2)).is_empty());
    }

    #[test]
    fn enabling_sound_alone_is_silent() {
        let mut state = mounted(false);
        assert!(state.apply(Action::SetSoundEnabled(true)).is_empty());
        assert!(state.sound_enabled());
        assert!(state.apply(Action::Decrement).play_cue);
    }

    #[test]
    fn unchanged_duration_does_not_cue() {
        let mut state = WorkoutState::new(1, true);
        state.apply(Action::Reconfigure(Configuration {
            exercise_count: 1,
            set_count: 1,
            pace_seconds: 30,
            break_minutes: 1,
        }));
        assert_eq!(state.duration(), 0.5);

        assert!(state.apply(Action::Decrement).play_cue);
        assert_eq!(state.duration(), 0.0);
        assert!(!state.apply(Action::Decrement).play_cue);
    }

    #[test]
    fn same_value_edit_is_not_a_change() {
        let mut state = mounted(true);
        state.apply(Action::Increment);
        let effects = state.apply(Action::SetSets(3));
        assert!(effects.is_empty());
        assert_eq!(state.duration(), 47.0);
    }

    #[test]
    fn exercise_swap_with_equal_duration_retitles_silently() {
        let mut state = WorkoutState::new(6, true);
        state.apply(Action::Reconfigure(Configuration {
            exercise_count: 6,
            set_count: 1,
            pace_seconds: 60,
            break_minutes: 1,
        }));
        assert_eq!(state.duration(), 6.0);

        // 3 exercises at 120s take as long as 6 at 60s
        let effects = state.apply(Action::Reconfigure(Configuration {
            exercise_count: 3,
            set_count: 1,
            pace_seconds: 120,
            break_minutes: 1,
        }));
        assert_eq!(state.duration(), 6.0);
        assert!(!effects.play_cue);
        assert_eq!(effects.title, Some("Your 3-exercise workout".to_string()));
    }

    #[test]
    fn reconfigure_without_exercise_change_keeps_title() {
        let mut state = mounted(true);
        let effects = state.apply(Action::Reconfigure(Configuration {
            exercise_count: 8,
            set_count: 2,
            pace_seconds: 60,
            break_minutes: 3,
        }));
        // 8 * 2 * 60s = 16 minutes + one 3-minute break
        assert_eq!(state.duration(), 19.0);
        assert!(effects.play_cue);
        assert_eq!(effects.title, None);
    }

    #[test]
    fn title_only_tracks_exercise_count() {
        let mut state = mounted(true);
        assert_eq!(state.apply(Action::SetSets(4)).title, None);
        assert_eq!(
            state.apply(Action::SelectExercises(5)).title,
            Some("Your 5-exercise workout".to_string())
        );
    }

    #[test]
    fn reconfigure_applies_all_fields_in_one_update() {
        let mut state = mounted(true);
        let effects = state.apply(Action::Reconfigure(Configuration {
            exercise_count: 4,
            set_count: 2,
            pace_seconds: 120,
            break_minutes: 10,
        }));
        assert_eq!(state.duration(), 26.0);
        assert!(effects.play_cue);
        assert_eq!(effects.title, Some(workout_title(4)));
    }
}
