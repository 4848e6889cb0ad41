use crate::config::CLICK_SOUND_SRC;
use workout_calculator::calculator::{Action, Calculator, Effects, WorkoutState};
use workout_calculator::sinks::{AudioCue, DocumentTitle};
use yew::prelude::*;

/// Snapshot of the calculator for the current render plus its dispatcher.
#[derive(Clone)]
pub struct CalculatorHandle {
    /// State as of this render.
    pub state: WorkoutState,
    /// Runs an action through the pipeline and re-renders.
    pub dispatch: Callback<Action>,
}

/// Custom hook owning the calculator for the lifetime of the component.
///
/// The first duration is derived while the calculator is created, so the
/// first render already shows it; the title and cue that go with it are
/// delivered from the mount effect. `allow_sound` is synced in after each
/// change of the prop and never plays a cue on its own.
#[hook]
pub fn use_calculator(initial_exercises: u32, allow_sound: bool) -> CalculatorHandle {
    let mount_effects = use_mut_ref(Effects::default);
    let calculator = {
        let mount_effects = mount_effects.clone();
        use_mut_ref(move || {
            let mut calculator = Calculator::new(
                WorkoutState::new(initial_exercises, allow_sound),
                DocumentTitle,
                AudioCue::new(CLICK_SOUND_SRC),
            );
            *mount_effects.borrow_mut() = calculator.prepare_mount();
            calculator
        })
    };
    let update = use_force_update();

    // Deliver the mount effects once, after the first render commits
    {
        let calculator = calculator.clone();
        use_effect_with((), move |_| {
            let effects = mount_effects.take();
            calculator.borrow().deliver(effects);
            || ()
        });
    }

    {
        let calculator = calculator.clone();
        use_effect_with(allow_sound, move |allow| {
            calculator
                .borrow_mut()
                .dispatch(Action::SetSoundEnabled(*allow));
            || ()
        });
    }

    let dispatch = {
        let calculator = calculator.clone();
        Callback::from(move |action: Action| {
            calculator.borrow_mut().dispatch(action);
            update.force_update();
        })
    };

    let state = calculator.borrow().state().clone();
    CalculatorHandle { state, dispatch }
}
