//! Fire-and-forget notification sound played on every phase switch.

use pomodoro_timer::PomodoroError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

fn playback_error(err: JsValue) -> PomodoroError {
    let reason = match err.dyn_into::<js_sys::Error>() {
        Ok(js_err) => String::from(js_err.message()),
        Err(other) => format!("{:?}", other),
    };
    PomodoroError::AudioPlayback(reason)
}

async fn play(url: &str) -> Result<(), PomodoroError> {
    let audio = HtmlAudioElement::new_with_src(url).map_err(playback_error)?;
    let promise = audio.play().map_err(playback_error)?;
    JsFuture::from(promise).await.map_err(playback_error)?;
    Ok(())
}

/// Start playing the sound at `url` without waiting on it. Autoplay blocks
/// and missing assets are logged and otherwise ignored.
pub fn play_notification(url: &'static str) {
    spawn_local(async move {
        if let Err(e) = play(url).await {
            log::warn!("{}", e);
        }
    });
}
