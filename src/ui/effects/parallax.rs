use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use super::dom::{self, Listener};
use crate::core::parallax::PointerParallax;
use crate::core::FxError;

/// Pointer and scroll listeners driving the background layers
pub struct Parallax {
    _pointer: Listener,
    _scroll: Listener,
}

fn apply(layers: &[HtmlElement], state: &PointerParallax) {
    for (element, layer) in layers.iter().zip(state.layers()) {
        let _ = element.style().set_property("transform", &layer.css());
    }
}

impl Parallax {
    pub fn start(
        window: &Window,
        document: &Document,
        layers: Vec<HtmlElement>,
        orb_indices: Vec<Option<usize>>,
        factor: f64,
    ) -> Result<Self, FxError> {
        let layers = Rc::new(layers);
        let state = Rc::new(RefCell::new(PointerParallax::new(layers.len(), factor)));

        let pointer_layers = layers.clone();
        let pointer_state = state.clone();
        let pointer = Listener::new(document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let Ok(window) = dom::window() else {
                return;
            };
            let mut state = pointer_state.borrow_mut();
            state.pointer_moved(
                (f64::from(event.client_x()), f64::from(event.client_y())),
                dom::viewport_size(&window),
                &orb_indices,
            );
            apply(&pointer_layers, &state);
        })?;

        let scroll_window = window.clone();
        let scroll = Listener::new(window, "scroll", move |_| {
            let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
            let mut state = state.borrow_mut();
            state.scrolled(scroll_y);
            apply(&layers, &state);
        })?;

        Ok(Self {
            _pointer: pointer,
            _scroll: scroll,
        })
    }
}
