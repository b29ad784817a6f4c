#![cfg(target_arch = "wasm32")]
//! Ambient particle-field background.
//!
//! Mounts onto a canvas element and paints a decorative, pointer-reactive
//! particle layer behind the page content. Three variants share one engine:
//! a constellation network, a repulsion field, and a glowing grid; a canvas
//! picks one with its `data-variant` attribute.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use crate::core::constants::Variant;
use crate::core::scene::Scene;

/// Canvas id the auto-start entry looks for.
const DEFAULT_CANVAS_ID: &str = "ambient-canvas";

thread_local! {
    // Keeps the default-mounted effect alive for the page lifetime.
    static AUTO_EFFECT: RefCell<Option<frame::EffectHandle>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    // Purely decorative: nothing past this point may break the host page.
    match mount(DEFAULT_CANVAS_ID) {
        Ok(Some(handle)) => AUTO_EFFECT.with(|slot| *slot.borrow_mut() = Some(handle)),
        Ok(None) => {}
        Err(e) => log::error!("mount error: {e:?}"),
    }
    Ok(())
}

/// Handle to one mounted background effect. Constructing it mounts onto the
/// given canvas id; `stop` tears down the frame loop and every listener.
#[wasm_bindgen]
pub struct AmbientField {
    inner: Option<frame::EffectHandle>,
}

#[wasm_bindgen]
impl AmbientField {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<AmbientField, JsValue> {
        let inner = mount(canvas_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(AmbientField { inner })
    }

    /// Idempotent teardown: cancels the pending frame and removes all event
    /// subscriptions. A handle that degraded to a no-op at mount has nothing
    /// to do here.
    pub fn stop(&mut self) {
        if let Some(mut handle) = self.inner.take() {
            handle.stop();
        }
    }
}

fn mount(canvas_id: &str) -> anyhow::Result<Option<frame::EffectHandle>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(canvas_el) = document.get_element_by_id(canvas_id) else {
        log::info!("no #{canvas_id} canvas; ambient background not mounted");
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{canvas_id} is not a canvas"))?;

    // Degrade to a no-op when the 2d surface is unavailable.
    let ctx = match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<web::CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => {
                log::warn!("2d context has an unexpected type; skipping ambient background");
                return Ok(None);
            }
        },
        _ => {
            log::warn!("2d context unavailable; skipping ambient background");
            return Ok(None);
        }
    };

    let (width, height) = dom::sync_canvas_backing_size(&canvas);
    let variant = Variant::from_attr(canvas.get_attribute("data-variant").as_deref());
    let seed = js_sys::Date::now() as u64;
    log::info!("mounting {variant:?} at {width}x{height}");

    let scene = Rc::new(RefCell::new(Scene::mount(variant, width, height, seed)));
    let listeners = events::wire(&scene, &canvas);
    let frame_ctx = frame::FrameContext::new(scene, ctx);
    Ok(Some(frame::start_loop(frame_ctx, listeners)))
}
