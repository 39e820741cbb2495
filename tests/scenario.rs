use pomodoro_timer::utils::{format_duration, progress_percent, session_subtitle};
use pomodoro_timer::{Action, AppState, Configuration, Phase, Session, Target};

fn tick_n(mut state: AppState, n: u32) -> AppState {
    for _ in 0..n {
        state = state.apply(Action::Tick);
    }
    state
}

#[test]
fn full_focus_then_break_cycle() {
    let state = AppState::new(Configuration { focus_seconds: 1500, break_seconds: 300 });
    let state = state.apply(Action::PlayPause);
    assert_eq!(state.session, Some(Session { phase: Phase::Focusing, time_remaining: 1500 }));

    let state = tick_n(state, 1500);
    assert_eq!(state.session, Some(Session { phase: Phase::Focusing, time_remaining: 0 }));
    assert_eq!(progress_percent(&state), Some(100.0));
    assert_eq!(session_subtitle(&state).as_deref(), Some("00:00 remaining"));

    let state = state.apply(Action::Tick);
    assert_eq!(state.session, Some(Session { phase: Phase::OnBreak, time_remaining: 300 }));
    assert_eq!(progress_percent(&state), Some(0.0));
    assert_eq!(state.rollovers, 1);

    // 300 ticks down, one spent at zero, then back to focus.
    let state = tick_n(state, 301);
    assert_eq!(state.session, Some(Session { phase: Phase::Focusing, time_remaining: 1500 }));
    assert_eq!(state.rollovers, 2);
}

#[test]
fn pause_resume_and_stop() {
    let state = tick_n(AppState::default().apply(Action::Start), 60);
    let paused = state.apply(Action::PlayPause);
    assert!(!paused.is_running);

    let still_paused = tick_n(paused.clone(), 30);
    assert_eq!(still_paused, paused);

    let resumed = tick_n(still_paused.apply(Action::Start), 1);
    assert_eq!(resumed.session.map(|s| s.time_remaining), Some(1500 - 61));

    let stopped = resumed.apply(Action::Stop);
    assert!(stopped.is_idle());
    assert!(!stopped.is_running);
    assert_eq!(tick_n(stopped.clone(), 3), stopped);
}

#[test]
fn adjusting_changes_the_next_session_only() {
    let state = AppState::default()
        .apply(Action::Adjust { target: Target::Focus, increase: false })
        .apply(Action::Adjust { target: Target::Break, increase: true });
    assert_eq!(format_duration(state.configuration.focus_seconds), "20:00");
    assert_eq!(format_duration(state.configuration.break_seconds), "06:00");

    let running = state.apply(Action::Start);
    assert_eq!(running.session.map(|s| s.time_remaining), Some(1200));

    let adjusted = running.apply(Action::Adjust { target: Target::Focus, increase: true });
    assert_eq!(adjusted.session, running.session);
    assert_eq!(adjusted.configuration.focus_seconds, 1500);
}
