use log::{debug, info};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use yew::functional::Reducible;

pub mod config;
pub mod utils;

use config::*;

/// Which half of the pomodoro cycle a session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Focusing,
    OnBreak,
}

impl Phase {
    /// The phase a session rolls over into once its countdown is spent.
    pub fn next(self) -> Self {
        match self {
            Phase::Focusing => Phase::OnBreak,
            Phase::OnBreak => Phase::Focusing,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Focusing => "Focusing",
            Phase::OnBreak => "On Break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The configured duration a `+`/`-` button acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Focus,
    Break,
}

impl Target {
    pub fn step(&self) -> u32 {
        match self {
            Target::Focus => FOCUS_STEP_SECONDS,
            Target::Break => BREAK_STEP_SECONDS,
        }
    }

    /// Inclusive (min, max) bounds in seconds.
    pub fn bounds(&self) -> (u32, u32) {
        match self {
            Target::Focus => (MIN_FOCUS_SECONDS, MAX_FOCUS_SECONDS),
            Target::Break => (MIN_BREAK_SECONDS, MAX_BREAK_SECONDS),
        }
    }
}

/// User-adjustable phase lengths, always kept inside their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub focus_seconds: u32,
    pub break_seconds: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            focus_seconds: DEFAULT_FOCUS_SECONDS,
            break_seconds: DEFAULT_BREAK_SECONDS,
        }
    }
}

impl Configuration {
    pub fn seconds_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focusing => self.focus_seconds,
            Phase::OnBreak => self.break_seconds,
        }
    }

    pub fn get(&self, target: Target) -> u32 {
        match target {
            Target::Focus => self.focus_seconds,
            Target::Break => self.break_seconds,
        }
    }

    /// Step one duration up or down, saturating at its bounds.
    pub fn adjust(&self, target: Target, increase: bool) -> Self {
        let (min, max) = target.bounds();
        let current = self.get(target);
        let updated = if increase {
            current.saturating_add(target.step()).min(max)
        } else {
            current.saturating_sub(target.step()).max(min)
        };

        let mut next = *self;
        match target {
            Target::Focus => next.focus_seconds = updated,
            Target::Break => next.break_seconds = updated,
        }
        next
    }

    fn in_bounds(&self) -> bool {
        let within = |target: Target| {
            let (min, max) = target.bounds();
            (min..=max).contains(&self.get(target))
        };
        within(Target::Focus) && within(Target::Break)
    }
}

/// An active (running or paused) focus or break countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub phase: Phase,
    pub time_remaining: u32,
}

impl Session {
    pub fn new(phase: Phase, configuration: &Configuration) -> Self {
        Self {
            phase,
            time_remaining: configuration.seconds_for(phase),
        }
    }
}

/// Complete timer state. Every transition returns a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub configuration: Configuration,
    pub session: Option<Session>,
    pub is_running: bool,
    /// Phase switches since mount; the view plays the chime when it changes.
    #[serde(default)]
    pub rollovers: u32,
}

/// Everything the UI (or the tick driver) can ask the timer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PlayPause,
    Start,
    Pause,
    Stop,
    Tick,
    Adjust { target: Target, increase: bool },
}

impl AppState {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            ..Self::default()
        }
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    /// Begin a focus session from idle, or resume a paused one.
    pub fn start(&self) -> Self {
        let session = match self.session {
            Some(session) => {
                debug!("Resuming {} with {}s left", session.phase, session.time_remaining);
                session
            }
            None => {
                let session = Session::new(Phase::Focusing, &self.configuration);
                info!("Starting focus session of {}s", session.time_remaining);
                session
            }
        };

        Self {
            session: Some(session),
            is_running: true,
            ..self.clone()
        }
    }

    pub fn pause(&self) -> Self {
        debug!("Pausing timer");
        Self {
            is_running: false,
            ..self.clone()
        }
    }

    pub fn play_pause(&self) -> Self {
        if self.is_running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Drop the session entirely, whatever state the timer is in.
    pub fn stop(&self) -> Self {
        info!("Stopping timer");
        Self {
            session: None,
            is_running: false,
            ..self.clone()
        }
    }

    /// Advance the session by one second.
    ///
    /// A session sitting at zero spends this tick switching to the next
    /// phase, so `00:00` stays on screen for one full second before the
    /// rollover. Callers must only tick while a session exists.
    pub fn tick(&self) -> Self {
        let Some(session) = self.session else {
            debug_assert!(false, "tick() called without an active session");
            return self.clone();
        };

        if session.time_remaining == 0 {
            let next = Session::new(session.phase.next(), &self.configuration);
            info!("{} finished, switching to {} for {}s", session.phase, next.phase, next.time_remaining);
            return Self {
                session: Some(next),
                rollovers: self.rollovers.wrapping_add(1),
                ..self.clone()
            };
        }

        Self {
            session: Some(Session {
                time_remaining: session.time_remaining - 1,
                ..session
            }),
            ..self.clone()
        }
    }

    /// Change a configured duration. An in-progress countdown keeps the
    /// remaining time it already captured.
    pub fn adjust(&self, target: Target, increase: bool) -> Self {
        let configuration = self.configuration.adjust(target, increase);
        debug!("Adjusted {:?} to {}s", target, configuration.get(target));
        Self {
            configuration,
            ..self.clone()
        }
    }

    /// Apply one action. Ticks that arrive while paused or idle are dropped,
    /// which covers an interval firing after the user already paused.
    pub fn apply(&self, action: Action) -> Self {
        match action {
            Action::PlayPause => self.play_pause(),
            Action::Start => self.start(),
            Action::Pause => self.pause(),
            Action::Stop => self.stop(),
            Action::Tick if self.is_running && self.session.is_some() => self.tick(),
            Action::Tick => self.clone(),
            Action::Adjust { target, increase } => self.adjust(target, increase),
        }
    }

    /// Reject snapshots that could never be produced by `apply`.
    pub fn validate(&self) -> Result<(), PomodoroError> {
        if !self.configuration.in_bounds() {
            return Err(PomodoroError::InvalidState(format!(
                "durations out of range: focus {}s, break {}s",
                self.configuration.focus_seconds, self.configuration.break_seconds
            )));
        }
        if self.is_running && self.session.is_none() {
            return Err(PomodoroError::InvalidState(
                "timer is running without a session".to_string(),
            ));
        }
        Ok(())
    }
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PomodoroError {
    UnknownAction(String),
    InvalidState(String),
    AudioPlayback(String),
}

impl fmt::Display for PomodoroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PomodoroError::UnknownAction(name) => write!(f, "Unknown timer action: {}", name),
            PomodoroError::InvalidState(reason) => write!(f, "Invalid timer state: {}", reason),
            PomodoroError::AudioPlayback(reason) => {
                write!(f, "Notification sound failed to play: {}", reason)
            }
        }
    }
}

impl std::error::Error for PomodoroError {}

impl FromStr for Action {
    type Err = PomodoroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = match s.trim() {
            "play_pause" => Action::PlayPause,
            "start" => Action::Start,
            "pause" => Action::Pause,
            "stop" => Action::Stop,
            "tick" => Action::Tick,
            "focus_up" => Action::Adjust { target: Target::Focus, increase: true },
            "focus_down" => Action::Adjust { target: Target::Focus, increase: false },
            "break_up" => Action::Adjust { target: Target::Break, increase: true },
            "break_down" => Action::Adjust { target: Target::Break, increase: false },
            other => return Err(PomodoroError::UnknownAction(other.to_string())),
        };
        Ok(action)
    }
}

fn reduce_js(state_js: JsValue, action: &str) -> Result<JsValue, PomodoroError> {
    let state: AppState = serde_wasm_bindgen::from_value(state_js)
        .map_err(|e| PomodoroError::InvalidState(e.to_string()))?;
    state.validate()?;
    let action: Action = action.parse()?;

    serde_wasm_bindgen::to_value(&state.apply(action))
        .map_err(|e| PomodoroError::InvalidState(e.to_string()))
}

/// Default timer state for JavaScript callers.
#[wasm_bindgen]
pub fn pomodoro_initial_state() -> JsValue {
    serde_wasm_bindgen::to_value(&AppState::default()).unwrap_or(JsValue::NULL)
}

/// Apply a named action (`"play_pause"`, `"tick"`, `"focus_up"`, ...) to a
/// serialized `AppState` and return the next state.
#[wasm_bindgen]
pub fn pomodoro_reduce(state_js: JsValue, action: &str) -> Result<JsValue, JsValue> {
    reduce_js(state_js, action).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn pomodoro_format_duration(seconds: u32) -> String {
    utils::format_duration(seconds)
}
