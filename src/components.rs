//! Pure Yew view components for the workout calculator.
//!
//! These render from props only; all state lives in the `use_calculator` hook.

use crate::config::SliderRange;
use std::rc::Rc;
use workout_calculator::duration::format_duration;
use workout_calculator::WorkoutPreset;
use yew::prelude::*;

/// Option label for a preset, e.g. "Arms only (3 exercises)".
pub fn preset_label(preset: &WorkoutPreset) -> String {
    format!("{} ({} exercises)", preset.name, preset.exercise_count)
}

/// Workout type selector keyed by exercise count.
#[derive(Properties, PartialEq)]
pub struct WorkoutSelectProps {
    pub workouts: Rc<Vec<WorkoutPreset>>,
    pub value: u32,
    pub onchange: Callback<Event>,
}

#[function_component(WorkoutSelect)]
pub fn workout_select(props: &WorkoutSelectProps) -> Html {
    html! {
        <div class="form-group">
            <label for="workout">{ "Type of workout" }</label>
            <select id="workout" onchange={props.onchange.clone()}>
                { props.workouts.iter().map(|workout| {
                    html! {
                        <option
                            key={workout.name.clone()}
                            value={workout.exercise_count.to_string()}
                            selected={workout.exercise_count == props.value}
                        >
                            { preset_label(workout) }
                        </option>
                    }
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Labelled range slider with a caption showing the current value.
#[derive(Properties, PartialEq)]
pub struct RangeSliderProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub range: SliderRange,
    pub value: u32,
    pub caption: AttrValue,
    pub oninput: Callback<InputEvent>,
}

#[function_component(RangeSlider)]
pub fn range_slider(props: &RangeSliderProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <div class="slider-with-value">
                <input type="range"
                    id={props.id.clone()}
                    min={props.range.min.to_string()}
                    max={props.range.max.to_string()}
                    step={props.range.step.to_string()}
                    value={props.value.to_string()}
                    oninput={props.oninput.clone()}
                />
                <span class="slider-value">{ props.caption.clone() }</span>
            </div>
        </div>
    }
}

/// `mm:ss` readout flanked by the manual -/+ buttons.
#[derive(Properties, PartialEq)]
pub struct DurationReadoutProps {
    pub duration: f64,
    pub on_decrement: Callback<MouseEvent>,
    pub on_increment: Callback<MouseEvent>,
}

#[function_component(DurationReadout)]
pub fn duration_readout(props: &DurationReadoutProps) -> Html {
    html! {
        <section class="duration">
            <button type="button" aria-label="One minute less" onclick={props.on_decrement.clone()}>{ "–" }</button>
            <p role="timer">{ format_duration(props.duration) }</p>
            <button type="button" aria-label="One minute more" onclick={props.on_increment.clone()}>{ "+" }</button>
        </section>
    }
}

/// The parent-level switch deciding whether cues may play.
#[derive(Properties, PartialEq)]
pub struct SoundToggleProps {
    pub checked: bool,
    pub onchange: Callback<Event>,
}

#[function_component(SoundToggle)]
pub fn sound_toggle(props: &SoundToggleProps) -> Html {
    html! {
        <div class="form-group checkbox-group">
            <label>
                <input type="checkbox" checked={props.checked} onchange={props.onchange.clone()} />
                { "Allow sound" }
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_label_lists_exercise_count() {
        let preset = WorkoutPreset::new("Core only", 5);
        assert_eq!(preset_label(&preset), "Core only (5 exercises)");
    }
}
