//! Animated headline driven by [`TypewriterCycler`].
//!
//! Each transition schedules the next one with the delay the cycler hands
//! back, so there is never more than one pending timeout per instance.

use std::time::Duration;

use leptos::prelude::*;

use folio_core::TypewriterCycler;

use crate::utils::timer::TimerSlot;

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

#[component]
pub fn Typewriter(cycler: TypewriterCycler) -> impl IntoView {
    let first_delay = cycler.initial_delay();
    let cycler = StoredValue::new(cycler);
    let text = RwSignal::new(String::new());

    let timer = TimerSlot::new();
    timer.clear_on_cleanup();
    tick(cycler, text, timer, first_delay);

    view! {
        <span class=css::typed>
            {move || text.get()}
            <span class=css::caret aria-hidden="true">"|"</span>
        </span>
    }
}

fn tick(
    cycler: StoredValue<TypewriterCycler>,
    text: RwSignal<String>,
    timer: TimerSlot,
    delay: Duration,
) {
    timer.schedule(delay, move || {
        // None once the component is gone; the chain just stops.
        let next = cycler.try_update_value(|c| {
            let frame = c.advance();
            if text.with_untracked(|t| t != frame.text) {
                text.set(frame.text.to_string());
            }
            frame.delay
        });

        if let Some(delay) = next {
            tick(cycler, text, timer, delay);
        }
    });
}
