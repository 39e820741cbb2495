//! Main module for the Pomodoro timer application using Yew.
//! Wires the timer reducer, the ticker hook and the audio cue into the view.

use pomodoro_timer::config::{NOTIFICATION_SOUND_URL, TICK_MS};
use pomodoro_timer::{Action, AppState, Target};
use yew::prelude::*;

mod audio;
mod components;
mod hooks;

use audio::play_notification;
use components::{DurationBar, StartStopControl, TimeDisplay};
use hooks::use_ticker;

#[function_component(Pomodoro)]
fn pomodoro() -> Html {
    let state = use_reducer(AppState::default);

    // Tick driver: armed only while the timer runs.
    {
        let dispatcher = state.dispatcher();
        let on_tick = use_callback((), move |_: (), _| dispatcher.dispatch(Action::Tick));
        use_ticker(state.is_running, TICK_MS, on_tick);
    }

    // Chime whenever a tick rolls the session into its next phase.
    use_effect_with(state.rollovers, move |&rollovers| {
        if rollovers > 0 {
            play_notification(NOTIFICATION_SOUND_URL);
        }
        || ()
    });

    let on_play_pause = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Action::PlayPause))
    };

    let on_stop = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Action::Stop))
    };

    let on_adjust = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(target, increase): (Target, bool)| {
            dispatcher.dispatch(Action::Adjust { target, increase })
        })
    };

    html! {
        <div class="pomodoro">
            <DurationBar state={(*state).clone()} on_adjust={on_adjust} />
            <StartStopControl state={(*state).clone()} on_play_pause={on_play_pause} on_stop={on_stop} />
            <TimeDisplay state={(*state).clone()} />
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <div class="container">
            <header class="mb-3">
                <h1>{ "Pomodoro Timer" }</h1>
            </header>
            <Pomodoro />
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the App.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
