//! Pure display projections of [`AppState`].
//!
//! Everything the time display renders is derived here so it can be unit
//! tested without mounting a component.

use crate::AppState;

/// Format a number of seconds as zero-padded `MM:SS`.
///
/// # Examples
/// ```
/// use pomodoro_timer::utils::format_duration;
/// assert_eq!(format_duration(1500), "25:00");
/// assert_eq!(format_duration(59), "00:59");
/// ```
pub fn format_duration(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Configured length of the phase the current session is in.
pub fn configured_seconds(state: &AppState) -> Option<u32> {
    state
        .session
        .map(|session| state.configuration.seconds_for(session.phase))
}

/// Elapsed share of the current phase, 0.0 to 100.0.
///
/// Returns `None` when idle. The configuration may have been adjusted since
/// the session captured its countdown, so the result is clamped; a zero
/// length phase reads as complete.
pub fn progress_percent(state: &AppState) -> Option<f64> {
    let session = state.session?;
    let configured = state.configuration.seconds_for(session.phase);
    if configured == 0 {
        return Some(100.0);
    }

    let elapsed = configured as f64 - session.time_remaining as f64;
    Some((elapsed / configured as f64 * 100.0).clamp(0.0, 100.0))
}

/// e.g. "Focusing for 25:00 minutes"
pub fn session_title(state: &AppState) -> Option<String> {
    let session = state.session?;
    let configured = state.configuration.seconds_for(session.phase);
    Some(format!("{} for {} minutes", session.phase, format_duration(configured)))
}

/// e.g. "24:59 remaining"
pub fn session_subtitle(state: &AppState) -> Option<String> {
    state
        .session
        .map(|session| format!("{} remaining", format_duration(session.time_remaining)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Configuration, Phase, Session};

    fn with_session(phase: Phase, time_remaining: u32) -> AppState {
        AppState {
            session: Some(Session { phase, time_remaining }),
            is_running: true,
            ..AppState::default()
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(61), "01:01");
        assert_eq!(format_duration(300), "05:00");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn test_idle_has_no_projection() {
        let idle = AppState::default();
        assert_eq!(progress_percent(&idle), None);
        assert_eq!(session_title(&idle), None);
        assert_eq!(session_subtitle(&idle), None);
        assert_eq!(configured_seconds(&idle), None);
    }

    #[test]
    fn test_progress_uses_phase_length() {
        assert_eq!(progress_percent(&with_session(Phase::Focusing, 1500)), Some(0.0));
        assert_eq!(progress_percent(&with_session(Phase::Focusing, 750)), Some(50.0));
        assert_eq!(progress_percent(&with_session(Phase::OnBreak, 75)), Some(75.0));
        assert_eq!(progress_percent(&with_session(Phase::OnBreak, 0)), Some(100.0));
    }

    #[test]
    fn test_progress_clamped_after_shortening() {
        let mut state = with_session(Phase::Focusing, 1500);
        state.configuration = Configuration { focus_seconds: 600, break_seconds: 300 };
        assert_eq!(progress_percent(&state), Some(0.0));

        state.configuration.focus_seconds = 0;
        assert_eq!(progress_percent(&state), Some(100.0));
    }

    #[test]
    fn test_titles() {
        let state = with_session(Phase::OnBreak, 299);
        assert_eq!(session_title(&state).as_deref(), Some("On Break for 05:00 minutes"));
        assert_eq!(session_subtitle(&state).as_deref(), Some("04:59 remaining"));
        assert_eq!(configured_seconds(&state), Some(300));
    }
}
