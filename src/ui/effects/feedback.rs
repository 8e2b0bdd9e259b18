//! Delegated button feedback
//!
//! One `mouseover` and one `click` listener on the document serve every
//! button on the page; the target button is found with `closest()`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlAnchorElement, MouseEvent, Node};

use super::dom::{self, Listener, styled_element};
use crate::core::feedback::{
    BUTTON_SELECTOR, ButtonAction, EXPLORE_BUTTON_ID, ExploreGuard, ExploreStep, Interaction,
    Rect, Ripple, burst_offsets, burst_particle_style, classify, explosion_style,
};
use crate::core::{EffectsConfig, FxError};

/// Timings and counts copied out of the config
#[derive(Clone, Copy)]
struct Timing {
    ripple_ms: u32,
    burst_particles: usize,
    burst_distance: f64,
    burst_ms: u32,
}

impl From<&EffectsConfig> for Timing {
    fn from(config: &EffectsConfig) -> Self {
        Self {
            ripple_ms: config.ripple_ms,
            burst_particles: config.burst_particles,
            burst_distance: config.burst_distance,
            burst_ms: config.burst_ms,
        }
    }
}

/// Button the event happened on, if any
fn button_for(event: &Event) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let selector = format!("{}, #{}", BUTTON_SELECTOR, EXPLORE_BUTTON_ID);
    target.closest(&selector).ok().flatten()
}

/// Remove `element` once `delay_ms` has passed
fn remove_after(element: Element, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        element.remove();
    });
}

fn ripple(
    document: &Document,
    button: &Element,
    event: &MouseEvent,
    timing: Timing,
) -> Result<(), FxError> {
    let bounds = button.get_bounding_client_rect();
    let rect = Rect {
        left: bounds.left(),
        top: bounds.top(),
        width: bounds.width(),
        height: bounds.height(),
    };
    let ripple = Ripple::at(rect, f64::from(event.client_x()), f64::from(event.client_y()));

    let span = styled_element(document, "span", &ripple.style(timing.ripple_ms))?;
    button.append_child(&span)?;
    remove_after(span, timing.ripple_ms);
    Ok(())
}

fn burst(document: &Document, button: &Element, timing: Timing) -> Result<(), FxError> {
    for (dx, dy) in burst_offsets(timing.burst_particles, timing.burst_distance) {
        let style = burst_particle_style(dx, dy, timing.burst_ms);
        let particle = styled_element(document, "div", &style)?;
        button.append_child(&particle)?;
        remove_after(particle, timing.burst_ms);
    }
    Ok(())
}

fn explore(
    document: &Document,
    button: &Element,
    overlay_ms: u32,
    navigate_after_ms: u32,
) -> Result<(), FxError> {
    let href = match button.dyn_ref::<HtmlAnchorElement>() {
        Some(anchor) => Some(anchor.href()),
        None => button.get_attribute("href"),
    };
    let Some(href) = href.filter(|h| !h.is_empty()) else {
        return Err(FxError::MissingElement("explore button href"));
    };

    let body = document.body().ok_or(FxError::MissingElement("body"))?;
    let overlay = styled_element(document, "div", &explosion_style(overlay_ms))?;
    body.append_child(&overlay)?;

    let window = dom::window()?;
    spawn_local(async move {
        TimeoutFuture::new(navigate_after_ms).await;
        overlay.remove();
        if let Err(e) = window.location().set_href(&href) {
            leptos::logging::warn!("explore navigation failed: {:?}", e);
        }
    });
    Ok(())
}

#[derive(Clone)]
struct Dispatcher {
    document: Document,
    timing: Timing,
    explore: Rc<RefCell<ExploreGuard>>,
}

impl Dispatcher {
    fn dispatch(
        &self,
        action: ButtonAction,
        button: &Element,
        event: &MouseEvent,
    ) -> Result<(), FxError> {
        match action {
            ButtonAction::Ripple => ripple(&self.document, button, event, self.timing),
            ButtonAction::Burst => burst(&self.document, button, self.timing),
            ButtonAction::Explore => {
                event.prevent_default();
                burst(&self.document, button, self.timing)?;
                let step = self.explore.borrow_mut().click();
                match step {
                    ExploreStep::BurstOnly => Ok(()),
                    ExploreStep::Flash {
                        overlay_ms,
                        navigate_after_ms,
                    } => explore(&self.document, button, overlay_ms, navigate_after_ms)
                        .inspect_err(|_| self.explore.borrow_mut().abort()),
                }
            }
        }
    }
}

/// Document-level button listeners. Dropping them detaches both.
pub struct ButtonFeedback {
    explore: Rc<RefCell<ExploreGuard>>,
    _hover: Listener,
    _click: Listener,
}

impl ButtonFeedback {
    pub fn start(document: &Document, config: &EffectsConfig) -> Result<Self, FxError> {
        let dispatcher = Dispatcher {
            document: document.clone(),
            timing: Timing::from(config),
            explore: Rc::new(RefCell::new(ExploreGuard::new(
                config.explode_ms,
                config.navigate_delay_ms,
            ))),
        };
        let explore = dispatcher.explore.clone();

        let on_hover = dispatcher.clone();
        let hover = Listener::new(document, "mouseover", move |event| {
            let (Some(button), Some(event)) =
                (button_for(&event), event.dyn_ref::<MouseEvent>())
            else {
                return;
            };
            // only when coming from outside the button, like mouseenter
            let from_inside = event
                .related_target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .is_some_and(|node| button.contains(Some(&node)));
            if from_inside {
                return;
            }
            let action = classify(Interaction::Enter, button.id() == EXPLORE_BUTTON_ID);
            if let Err(e) = on_hover.dispatch(action, &button, event) {
                leptos::logging::warn!("button hover feedback failed: {}", e);
            }
        })?;

        let on_click = dispatcher;
        let click = Listener::new(document, "click", move |event| {
            let (Some(button), Some(event)) =
                (button_for(&event), event.dyn_ref::<MouseEvent>())
            else {
                return;
            };
            let action = classify(Interaction::Click, button.id() == EXPLORE_BUTTON_ID);
            if let Err(e) = on_click.dispatch(action, &button, event) {
                leptos::logging::warn!("button click feedback failed: {}", e);
            }
        })?;

        Ok(Self {
            explore,
            _hover: hover,
            _click: click,
        })
    }

    /// Forget a navigation that already happened before the page was cached
    pub fn restored(&self) {
        self.explore.borrow_mut().reset();
    }
}
