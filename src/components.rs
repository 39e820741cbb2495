//! Pure Yew view components for the Pomodoro UI.
//!
//! These components render from props only; all state lives in the
//! reducer owned by the `Pomodoro` component in `main.rs`.

use pomodoro_timer::utils::{format_duration, progress_percent, session_subtitle, session_title};
use pomodoro_timer::{AppState, Target};
use yew::prelude::*;

/// One labelled duration with its `-`/`+` buttons.
#[derive(Properties, PartialEq)]
pub struct DurationControlProps {
    pub target: Target,
    pub seconds: u32,
    pub disabled: bool,
    pub on_adjust: Callback<(Target, bool)>,
}

#[function_component(DurationControl)]
pub fn duration_control(props: &DurationControlProps) -> Html {
    let (label, slug) = match props.target {
        Target::Focus => ("Focus", "focus"),
        Target::Break => ("Break", "break"),
    };

    let adjust = |increase: bool| {
        let on_adjust = props.on_adjust.clone();
        let target = props.target;
        Callback::from(move |_: MouseEvent| on_adjust.emit((target, increase)))
    };

    html! {
        <div class="input-group input-group-lg mb-2">
            <span class="input-group-text" data-testid={format!("duration-{}", slug)}>
                { format!("{} Duration: {}", label, format_duration(props.seconds)) }
            </span>
            <div class="input-group-append">
                <button type="button"
                    class="btn btn-secondary"
                    data-testid={format!("decrease-{}", slug)}
                    disabled={props.disabled}
                    onclick={adjust(false)}>
                    <span class="oi oi-minus" />
                </button>
                <button type="button"
                    class="btn btn-secondary"
                    data-testid={format!("increase-{}", slug)}
                    disabled={props.disabled}
                    onclick={adjust(true)}>
                    <span class="oi oi-plus" />
                </button>
            </div>
        </div>
    }
}

/// Focus and break duration adjusters. Locked while a session exists.
#[derive(Properties, PartialEq)]
pub struct DurationBarProps {
    pub state: AppState,
    pub on_adjust: Callback<(Target, bool)>,
}

#[function_component(DurationBar)]
pub fn duration_bar(props: &DurationBarProps) -> Html {
    let locked = !props.state.is_idle();
    let config = props.state.configuration;

    html! {
        <div class="row">
            <div class="col">
                <DurationControl
                    target={Target::Focus}
                    seconds={config.focus_seconds}
                    disabled={locked}
                    on_adjust={props.on_adjust.clone()} />
            </div>
            <div class="col">
                <div class="float-right">
                    <DurationControl
                        target={Target::Break}
                        seconds={config.break_seconds}
                        disabled={locked}
                        on_adjust={props.on_adjust.clone()} />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StartStopControlProps {
    pub state: AppState,
    pub on_play_pause: Callback<MouseEvent>,
    pub on_stop: Callback<MouseEvent>,
}

#[function_component(StartStopControl)]
pub fn start_stop_control(props: &StartStopControlProps) -> Html {
    let running = props.state.is_running;
    let (title, icon) = if running {
        ("Pause the timer", "oi oi-media-pause")
    } else {
        ("Start or resume the timer", "oi oi-media-play")
    };

    html! {
        <div class="row">
            <div class="col">
                <div class="btn-group btn-group-lg mb-2" role="group" aria-label="Timer controls">
                    <button type="button"
                        class="btn btn-primary"
                        data-testid="play-pause"
                        title={title}
                        onclick={props.on_play_pause.clone()}>
                        <span class={icon} />
                    </button>
                    <button type="button"
                        class="btn btn-secondary"
                        data-testid="stop"
                        title="Stop the session"
                        disabled={props.state.is_idle()}
                        onclick={props.on_stop.clone()}>
                        <span class="oi oi-media-stop" />
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Countdown and progress bar; renders nothing while idle.
#[derive(Properties, PartialEq)]
pub struct TimeDisplayProps {
    pub state: AppState,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    let state = &props.state;
    let (Some(title), Some(subtitle), Some(progress)) = (
        session_title(state),
        session_subtitle(state),
        progress_percent(state),
    ) else {
        return html! {};
    };

    html! {
        <div>
            <div class="row mb-2">
                <div class="col">
                    <h2 data-testid="session-title">{ title }</h2>
                    <p class="lead" data-testid="session-sub-title">{ subtitle }</p>
                    if !state.is_running {
                        <h3 data-testid="paused">{ "PAUSED" }</h3>
                    }
                </div>
            </div>
            <div class="row mb-2">
                <div class="col">
                    <div class="progress" style="height: 20px">
                        <div class="progress-bar"
                            role="progressbar"
                            aria-valuemin="0"
                            aria-valuemax="100"
                            aria-valuenow={format!("{:.0}", progress)}
                            style={format!("width: {}%", progress)} />
                    </div>
                </div>
            </div>
        </div>
    }
}
