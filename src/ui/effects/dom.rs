//! DOM access helpers shared by the effects
//!
//! Element lookups happen once, in [`PageElements::resolve`]. Anything not
//! found stays `None` (or an empty list) and the matching effect is skipped.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlCanvasElement, HtmlElement, NodeList, Window,
};

use crate::core::counter::{COUNTER_SELECTOR, STATS_SELECTOR};
use crate::core::motion::StyleHost;
use crate::core::parallax::SCROLL_LAYER_SELECTOR;
use crate::core::reveal::REVEAL_SELECTOR;
use crate::core::FxError;

/// Id of the rain canvas
pub const CANVAS_ID: &str = "matrixCanvas";

/// Container that receives the floating particles
pub const PARTICLE_CONTAINER_SELECTOR: &str = ".floating-particles";

pub fn window() -> Result<Window, FxError> {
    web_sys::window().ok_or(FxError::MissingElement("window"))
}

pub fn document() -> Result<Document, FxError> {
    window()?.document().ok_or(FxError::MissingElement("document"))
}

/// Viewport size in CSS pixels
pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Keep the `HtmlElement`s of a node list, in document order
pub fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// All elements of `document` matching `selector`
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    document
        .query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

/// First element of `document` matching `selector`
pub fn query_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Create a detached element with the given inline style
pub fn styled_element(document: &Document, tag: &str, style: &str) -> Result<Element, FxError> {
    let element = document.create_element(tag)?;
    element.set_attribute("style", style)?;
    Ok(element)
}

/// Event listener that is removed from its target when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, FxError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let function: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, function);
    }
}

/// `<head>` of a live document as a [`StyleHost`]
pub struct HeadStyles<'a>(pub &'a Document);

impl StyleHost for HeadStyles<'_> {
    fn has_style(&self, id: &str) -> bool {
        self.0.get_element_by_id(id).is_some()
    }

    fn insert_style(&self, id: &str, css: &str) {
        let Some(head) = self.0.head() else {
            leptos::logging::warn!("document has no <head>, motion presets not installed");
            return;
        };
        let Ok(style) = self.0.create_element("style") else {
            return;
        };
        style.set_id(id);
        style.set_text_content(Some(css));
        let _ = head.append_child(&style);
    }
}

/// Every element the effects bind to, looked up once.
pub struct PageElements {
    pub canvas: Option<HtmlCanvasElement>,
    pub particle_container: Option<HtmlElement>,
    pub reveal_targets: Vec<HtmlElement>,
    pub stats_section: Option<HtmlElement>,
    pub counters: Vec<HtmlElement>,
    /// Scroll layers in document order
    pub scroll_layers: Vec<HtmlElement>,
    /// Orb index of each scroll layer, `None` for plain background layers
    pub orb_indices: Vec<Option<usize>>,
}

impl PageElements {
    pub fn resolve(document: &Document) -> Self {
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());

        let scroll_layers = query_all(document, SCROLL_LAYER_SELECTOR);
        let mut next_orb = 0;
        let orb_indices = scroll_layers
            .iter()
            .map(|layer| {
                layer.class_list().contains("orb").then(|| {
                    next_orb += 1;
                    next_orb - 1
                })
            })
            .collect();

        Self {
            canvas,
            particle_container: query_one(document, PARTICLE_CONTAINER_SELECTOR),
            reveal_targets: query_all(document, REVEAL_SELECTOR),
            stats_section: query_one(document, STATS_SELECTOR),
            counters: query_all(document, COUNTER_SELECTOR),
            scroll_layers,
            orb_indices,
        }
    }
}
