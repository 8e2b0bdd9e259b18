use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use super::reveal::Observation;
use crate::core::counter::{CounterRamp, TARGET_ATTRIBUTE, parse_target};
use crate::core::{EffectsConfig, FxError};

async fn run_ramp(element: HtmlElement, ramp: CounterRamp, tick_ms: u32) {
    for value in ramp {
        TimeoutFuture::new(tick_ms).await;
        element.set_text_content(Some(&value.to_string()));
    }
}

/// Start every counter the first time the stats section becomes visible
pub fn observe_counters(
    stats: HtmlElement,
    counters: Vec<HtmlElement>,
    config: &EffectsConfig,
) -> Result<Observation, FxError> {
    let duration_ms = config.counter_duration_ms;
    let tick_ms = config.counter_tick_ms;
    let mut started = false;

    Observation::new(None, std::slice::from_ref(&stats), move |target, observer| {
        if started {
            return;
        }
        started = true;
        observer.unobserve(&target);

        for counter in &counters {
            let Some(goal) = parse_target(counter.get_attribute(TARGET_ATTRIBUTE).as_deref())
            else {
                leptos::logging::warn!("counter without numeric {}", TARGET_ATTRIBUTE);
                continue;
            };
            spawn_local(run_ramp(
                counter.clone(),
                CounterRamp::new(goal, duration_ms, tick_ms),
                tick_ms,
            ));
        }
    })
}
