//! Drives the resend cooldown with a once-per-second tick that lives and
//! dies with the owning view.

use crate::features::auth::flow::Countdown;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Keeps a 1 Hz tick armed while the flow's cooldown is positive. The
/// interval is dropped (cancelling the browser timer) once the cooldown
/// reaches zero and re-armed when it is reset; `on_cleanup` stops a stray
/// tick from firing into a discarded view.
pub(crate) fn keep_cooldown_ticking<F>(flow: RwSignal<F>)
where
    F: Countdown + Send + Sync + 'static,
{
    let handle = StoredValue::new_local(None::<Interval>);

    Effect::new(move |_| {
        let active = flow.with(|f| f.seconds() > 0);
        if active {
            if handle.with_value(Option::is_none) {
                let interval = Interval::new(1_000, move || flow.update(|f| f.tick()));
                handle.set_value(Some(interval));
            }
        } else {
            handle.set_value(None);
        }
    });

    on_cleanup(move || handle.set_value(None));
}
