//! Scroll-triggered reveals

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::dom::html_elements;
use crate::core::motion::REVEALED_CLASS;
use crate::core::reveal::{
    CARD_SETTLE_MS, FEATURE_CARD_SELECTOR, FEATURES_CLASS, RevealTracker, card_animation,
    card_delays,
};
use crate::core::{EffectsConfig, FxError};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// IntersectionObserver plus the callback it calls. Disconnects on drop.
pub struct Observation {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Observation {
    pub fn new(
        options: Option<&IntersectionObserverInit>,
        targets: &[HtmlElement],
        mut on_intersect: impl FnMut(Element, &IntersectionObserver) + 'static,
    ) -> Result<Self, FxError> {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_intersect(entry.target(), &observer);
                    }
                }
            },
        );

        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        let observer = match options {
            Some(options) => IntersectionObserver::new_with_options(function, options)?,
            None => IntersectionObserver::new(function)?,
        };
        for target in targets {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn stagger_cards(section: &Element, stagger_ms: u32) {
    let Ok(list) = section.query_selector_all(FEATURE_CARD_SELECTOR) else {
        return;
    };
    let cards = html_elements(list);
    spawn_local(async move {
        TimeoutFuture::new(CARD_SETTLE_MS).await;
        for (card, delay_ms) in cards.iter().zip(card_delays(cards.len(), stagger_ms)) {
            let _ = card
                .style()
                .set_property("animation", &card_animation(delay_ms));
        }
    });
}

/// Reveal each target once, the first time it scrolls into view
pub fn observe_reveals(
    targets: Vec<HtmlElement>,
    config: &EffectsConfig,
) -> Result<Observation, FxError> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&config.reveal_threshold.into());
    options.set_root_margin(&config.reveal_root_margin);

    let stagger_ms = config.card_stagger_ms;
    let mut tracker = RevealTracker::new(targets.len());
    let observed = targets.clone();

    Observation::new(Some(&options), &targets, move |target, observer| {
        let Some(index) = observed.iter().position(|t| **t == target) else {
            return;
        };
        if !tracker.reveal(index) {
            return;
        }
        observer.unobserve(&target);
        let _ = target.class_list().add_1(REVEALED_CLASS);
        if target.class_list().contains(FEATURES_CLASS) {
            stagger_cards(&target, stagger_ms);
        }
        if tracker.all_revealed() {
            observer.disconnect();
        }
    })
}
