//! Rain renderer bound to the full-viewport canvas

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::dom::{self, Listener};
use crate::core::rain::{RainGrid, RainSurface};
use crate::core::{EffectsConfig, FxError};

const TRAIL_FILL: &str = "rgba(0, 0, 0, 0.08)";
const GLYPH_FILL: &str = "rgba(255, 255, 255, 0.7)";

/// 2d canvas context as a rain target
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    font: String,
}

impl RainSurface for CanvasSurface {
    fn fade(&self, width: f64, height: f64) {
        self.ctx.set_fill_style_str(TRAIL_FILL);
        self.ctx.fill_rect(0.0, 0.0, width, height);
        // canvas state resets on resize, so restore glyph styling every frame
        self.ctx.set_fill_style_str(GLYPH_FILL);
        self.ctx.set_font(&self.font);
    }

    fn draw_glyph(&self, glyph: char, x: f64, y: f64) {
        let mut buf = [0u8; 4];
        let _ = self.ctx.fill_text(glyph.encode_utf8(&mut buf), x, y);
    }
}

/// Running rain animation. Dropping it stops the tick and the resize handler.
pub struct RainRenderer {
    _tick: Interval,
    _resize: Listener,
}

fn fit_to_viewport(canvas: &HtmlCanvasElement) -> Result<(u32, u32), FxError> {
    let (width, height) = dom::viewport_size(&dom::window()?);
    let (width, height) = (width.max(0.0) as u32, height.max(0.0) as u32);
    canvas.set_width(width);
    canvas.set_height(height);
    Ok((width, height))
}

impl RainRenderer {
    pub fn start(canvas: HtmlCanvasElement, config: &EffectsConfig) -> Result<Self, FxError> {
        let (width, height) = fit_to_viewport(&canvas)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or(FxError::NoRenderingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FxError::NoRenderingContext)?;

        let grid = Rc::new(RefCell::new(RainGrid::new(
            width,
            height,
            config.glyph_size,
            config.rain_reset_chance,
        )));

        let surface = CanvasSurface {
            ctx,
            font: format!("{}px monospace", config.glyph_size),
        };
        let mut rng = SmallRng::from_entropy();
        let tick_grid = grid.clone();
        let tick = Interval::new(config.rain_tick_ms, move || {
            tick_grid.borrow_mut().tick(&surface, &mut rng);
        });

        let resize = Listener::new(&dom::window()?, "resize", move |_| {
            match fit_to_viewport(&canvas) {
                Ok((width, height)) => grid.borrow_mut().resize(width, height),
                Err(e) => leptos::logging::warn!("rain resize skipped: {}", e),
            }
        })?;

        leptos::logging::log!(
            "rain started: {} columns every {}ms",
            (width / config.glyph_size.max(1)),
            config.rain_tick_ms
        );

        Ok(Self {
            _tick: tick,
            _resize: resize,
        })
    }
}
