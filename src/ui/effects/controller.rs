//! Effects controller
//!
//! [`VisualEffects`] owns every timer, listener and observer the effects
//! create. It is built once after hydration by [`install`] and dropped when
//! the page is discarded. A page parked in the back-forward cache keeps it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{PageTransitionEvent, Window};

use super::counter::observe_counters;
use super::dom::{self, CANVAS_ID, HeadStyles, PageElements};
use super::feedback::ButtonFeedback;
use super::parallax::Parallax;
use super::particles::spawn_particles;
use super::rain::RainRenderer;
use super::reveal::{Observation, observe_reveals};
use crate::core::config::CONFIG_ELEMENT_ID;
use crate::core::lifecycle::{LifecycleAction, PageTransition};
use crate::core::motion::register_motion_presets;
use crate::core::{EffectsConfig, FxError};

/// Keep the effect on success, log and drop it on failure
fn enabled<T>(name: &str, result: Result<T, FxError>) -> Option<T> {
    match result {
        Ok(effect) => Some(effect),
        Err(e) => {
            leptos::logging::warn!("{} disabled: {}", name, e);
            None
        }
    }
}

/// Owned handles of every running effect.
pub struct VisualEffects {
    rain: Option<RainRenderer>,
    reveals: Option<Observation>,
    counters: Option<Observation>,
    buttons: Option<ButtonFeedback>,
    parallax: Option<Parallax>,
    particles: usize,
}

impl VisualEffects {
    /// Bind to the current document and start every effect whose elements exist.
    pub fn start(config: &EffectsConfig) -> Result<Self, FxError> {
        let window = dom::window()?;
        let document = dom::document()?;

        register_motion_presets(&HeadStyles(&document));
        let page = PageElements::resolve(&document);

        let rain = enabled(
            "rain",
            page.canvas
                .ok_or(FxError::MissingElement(CANVAS_ID))
                .and_then(|canvas| RainRenderer::start(canvas, config)),
        );

        let particles = match &page.particle_container {
            Some(container) => {
                enabled("particles", spawn_particles(&document, container, config.particle_count))
                    .unwrap_or(0)
            }
            None => 0,
        };

        let reveals = if page.reveal_targets.is_empty() {
            None
        } else {
            enabled("reveals", observe_reveals(page.reveal_targets, config))
        };

        let counters = match page.stats_section {
            Some(stats) if !page.counters.is_empty() => {
                enabled("counters", observe_counters(stats, page.counters, config))
            }
            _ => None,
        };

        let buttons = enabled("button feedback", ButtonFeedback::start(&document, config));

        let parallax = if page.scroll_layers.is_empty() {
            None
        } else {
            enabled(
                "parallax",
                Parallax::start(
                    &window,
                    &document,
                    page.scroll_layers,
                    page.orb_indices,
                    config.parallax_factor,
                ),
            )
        };

        let effects = Self {
            rain,
            reveals,
            counters,
            buttons,
            parallax,
            particles,
        };
        leptos::logging::log!("visual effects started: {}", effects.summary());
        Ok(effects)
    }

    /// Which effects are running
    pub fn summary(&self) -> String {
        format!(
            "rain={} particles={} reveals={} counters={} buttons={} parallax={}",
            self.rain.is_some(),
            self.particles,
            self.reveals.is_some(),
            self.counters.is_some(),
            self.buttons.is_some(),
            self.parallax.is_some(),
        )
    }

    /// Back from the back-forward cache; everything is still attached
    pub fn resume(&self) {
        if let Some(buttons) = &self.buttons {
            buttons.restored();
        }
        leptos::logging::log!("visual effects resumed");
    }

    /// Stop the rain and detach every listener and observer
    pub fn dispose(self) {
        leptos::logging::log!("visual effects stopped");
    }
}

/// Config embedded by the server, or defaults when absent or unusable
fn embedded_config() -> EffectsConfig {
    let raw = dom::document()
        .ok()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    let Some(raw) = raw else {
        leptos::logging::warn!("no #{} in page, using default effects config", CONFIG_ELEMENT_ID);
        return EffectsConfig::default();
    };
    EffectsConfig::from_json(&raw).unwrap_or_else(|e| {
        leptos::logging::warn!("{}; using default effects config", e);
        EffectsConfig::default()
    })
}

type SharedEffects = Rc<RefCell<Option<VisualEffects>>>;

fn apply(effects: &SharedEffects, transition: PageTransition) {
    match transition.action() {
        LifecycleAction::Keep => {}
        LifecycleAction::Resume => {
            if let Some(effects) = effects.borrow().as_ref() {
                effects.resume();
            }
        }
        LifecycleAction::Dispose => {
            let disposed = effects.borrow_mut().take();
            if let Some(effects) = disposed {
                effects.dispose();
            }
        }
    }
}

/// Route `event` (`pagehide` or `pageshow`) to the controller for the page lifetime
fn watch(
    window: &Window,
    event: &str,
    effects: SharedEffects,
    transition: fn(bool) -> PageTransition,
) {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let persisted = event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(|event| event.persisted());
        apply(&effects, transition(persisted));
    });
    let function: &js_sys::Function = callback.as_ref().unchecked_ref();
    if let Err(e) = window.add_event_listener_with_callback(event, function) {
        leptos::logging::warn!("failed to watch {}: {:?}", event, e);
    }
    // Leak the closure to keep it alive for the page lifetime
    callback.forget();
}

/// Start the effects, keep them across the back-forward cache and tear them
/// down when the page is discarded.
pub fn install() {
    let config = embedded_config();
    let effects: SharedEffects = match VisualEffects::start(&config) {
        Ok(effects) => Rc::new(RefCell::new(Some(effects))),
        Err(e) => {
            leptos::logging::warn!("visual effects unavailable: {}", e);
            return;
        }
    };

    let Ok(window) = dom::window() else {
        return;
    };
    watch(&window, "pagehide", effects.clone(), |persisted| {
        PageTransition::Hide { persisted }
    });
    watch(&window, "pageshow", effects, |persisted| PageTransition::Show { persisted });
}
