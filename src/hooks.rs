use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Custom hook driving a periodic callback while `enabled` is true.
///
/// The interval is re-armed whenever `enabled` or `period_ms` changes and is
/// cancelled on teardown (dropping a gloo `Interval` clears it). `on_tick`
/// should be stable across renders, e.g. built from a reducer dispatcher.
#[hook]
pub fn use_ticker(enabled: bool, period_ms: u32, on_tick: Callback<()>) {
    use_effect_with((enabled, period_ms), move |&(enabled, period_ms)| {
        let interval = enabled.then(|| {
            log::debug!("Arming {}ms ticker", period_ms);
            Interval::new(period_ms, move || on_tick.emit(()))
        });

        move || {
            if interval.is_some() {
                log::debug!("Cancelling ticker");
            }
            drop(interval);
        }
    });
}
