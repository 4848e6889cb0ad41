//! Main module for the workout calculator using Yew.
//! Loads the presets and wires the form controls to the calculator hook.

use log::{debug, warn};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_calculator::{
    calculator::Action, default_presets, read_workouts_from_csv_string, WorkoutPreset,
};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{DurationReadout, RangeSlider, SoundToggle, WorkoutSelect};
use config::*;
use hooks::use_calculator;
use utils::{parse_exercise_count, parse_slider_value};

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Embedded presets, or the built-in list if the file is unusable.
fn load_workouts() -> Vec<WorkoutPreset> {
    read_workouts_from_csv_string(WORKOUTS_CSV).unwrap_or_else(|e| {
        warn!("{}; falling back to built-in workouts", e);
        default_presets()
    })
}

/// Slider `oninput` handler that parses the value and dispatches `action`.
fn slider_callback(
    dispatch: &Callback<Action>,
    range: SliderRange,
    field_name: &'static str,
    action: fn(u32) -> Action,
) -> Callback<InputEvent> {
    let dispatch = dispatch.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        match parse_slider_value(&input.value(), range, field_name) {
            Ok(value) => dispatch.emit(action(value)),
            Err(err) => debug!("Ignoring input: {}", err),
        }
    })
}

// ──────────────────────────────────────────────────────────────────────────────

#[derive(Properties, PartialEq)]
struct WorkoutFormProps {
    workouts: Rc<Vec<WorkoutPreset>>,
    allow_sound: bool,
}

/// The configuration form and the duration readout.
#[function_component(WorkoutForm)]
fn workout_form(props: &WorkoutFormProps) -> Html {
    let initial_exercises = props.workouts.first().map_or(0, |w| w.exercise_count);
    let calculator = use_calculator(initial_exercises, props.allow_sound);
    let config = calculator.state.config();
    let dispatch = &calculator.dispatch;

    let on_select = {
        let dispatch = dispatch.clone();
        let workouts = props.workouts.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match parse_exercise_count(&select.value(), &workouts) {
                Ok(count) => dispatch.emit(Action::SelectExercises(count)),
                Err(err) => debug!("Ignoring selection: {}", err),
            }
        })
    };
    let on_sets = slider_callback(dispatch, SETS_RANGE, "Sets", Action::SetSets);
    let on_pace = slider_callback(dispatch, PACE_RANGE, "Pace", Action::SetPace);
    let on_break = slider_callback(dispatch, BREAK_RANGE, "Break length", Action::SetBreak);
    let on_decrement = dispatch.reform(|_: MouseEvent| Action::Decrement);
    let on_increment = dispatch.reform(|_: MouseEvent| Action::Increment);

    html! {
        <>
            <form>
                <WorkoutSelect
                    workouts={props.workouts.clone()}
                    value={config.exercise_count}
                    onchange={on_select}
                />
                <RangeSlider
                    id="sets"
                    label="How many sets?"
                    range={SETS_RANGE}
                    value={config.set_count}
                    caption={config.set_count.to_string()}
                    oninput={on_sets}
                />
                <RangeSlider
                    id="pace"
                    label="How fast are you?"
                    range={PACE_RANGE}
                    value={config.pace_seconds}
                    caption={format!("{} sec/exercise", config.pace_seconds)}
                    oninput={on_pace}
                />
                <RangeSlider
                    id="break"
                    label="Break length"
                    range={BREAK_RANGE}
                    value={config.break_minutes}
                    caption={format!("{} minutes/break", config.break_minutes)}
                    oninput={on_break}
                />
            </form>
            <DurationReadout
                duration={calculator.state.duration()}
                {on_decrement}
                {on_increment}
            />
        </>
    }
}

/// App wrapper owning the preset list and the sound switch.
#[function_component]
pub fn App() -> Html {
    let workouts = use_memo((), |_| load_workouts());
    let allow_sound = use_state(|| DEFAULT_ALLOW_SOUND);

    let on_sound_toggle = {
        let allow_sound = allow_sound.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            allow_sound.set(input.checked());
        })
    };

    html! {
        <main class="container">
            <h1>{ "Workout timer" }</h1>
            <SoundToggle checked={*allow_sound} onchange={on_sound_toggle} />
            <WorkoutForm workouts={workouts} allow_sound={*allow_sound} />
        </main>
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
