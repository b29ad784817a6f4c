//! Event bridge: pointer, touch, and resize subscriptions feeding the scene.
//!
//! Every subscription is held in a guard that removes the listener when
//! dropped, so teardown leaves nothing behind. Listeners observe the window
//! and never call `prevent_default`; the effect must not steal input from
//! foreground content.

use crate::core::scene::Scene;
use crate::{dom, input};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ListenerGuard {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerGuard {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: Box<dyn FnMut(web::Event)>,
    ) -> Option<Self> {
        let closure = Closure::wrap(handler);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Wire every inbound signal. The returned guards keep the subscriptions
/// alive; dropping them unsubscribes.
pub fn wire(scene: &Rc<RefCell<Scene>>, canvas: &web::HtmlCanvasElement) -> Vec<ListenerGuard> {
    let mut guards = Vec::new();
    let Some(window) = web::window() else {
        return guards;
    };
    let Some(document) = window.document() else {
        return guards;
    };
    let win_target = web::EventTarget::from(window);
    let doc_target = web::EventTarget::from(document);

    // Pointer position + became-active
    {
        let scene = scene.clone();
        let canvas = canvas.clone();
        guards.extend(ListenerGuard::attach(
            &win_target,
            "pointermove",
            Box::new(move |ev: web::Event| {
                if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                    let pos = input::client_to_canvas_px(
                        ev.client_x() as f64,
                        ev.client_y() as f64,
                        &canvas,
                    );
                    scene.borrow_mut().pointer_moved(pos);
                }
            }),
        ));
    }

    // Pointer leaves the page: became-inactive
    {
        let scene = scene.clone();
        guards.extend(ListenerGuard::attach(
            &doc_target,
            "pointerleave",
            Box::new(move |_ev| {
                scene.borrow_mut().pointer_left();
            }),
        ));
    }

    // Multi-touch collapses to the first touch point
    {
        let scene = scene.clone();
        let canvas = canvas.clone();
        guards.extend(ListenerGuard::attach(
            &win_target,
            "touchmove",
            Box::new(move |ev: web::Event| {
                if let Some(ev) = ev.dyn_ref::<web::TouchEvent>() {
                    if let Some(touch) = ev.touches().get(0) {
                        let pos = input::client_to_canvas_px(
                            touch.client_x() as f64,
                            touch.client_y() as f64,
                            &canvas,
                        );
                        scene.borrow_mut().pointer_moved(pos);
                    }
                }
            }),
        ));
    }
    {
        let scene = scene.clone();
        guards.extend(ListenerGuard::attach(
            &win_target,
            "touchend",
            Box::new(move |_ev| {
                scene.borrow_mut().pointer_left();
            }),
        ));
    }

    // Losing window focus also deactivates the pointer.
    {
        let scene = scene.clone();
        guards.extend(ListenerGuard::attach(
            &win_target,
            "blur",
            Box::new(move |_ev| {
                scene.borrow_mut().pointer_left();
            }),
        ));
    }

    // Resize: resync the backing store, then reseed at the new size
    {
        let scene = scene.clone();
        let canvas = canvas.clone();
        guards.extend(ListenerGuard::attach(
            &win_target,
            "resize",
            Box::new(move |_ev| {
                let (w, h) = dom::sync_canvas_backing_size(&canvas);
                log::debug!("resize to {w}x{h}");
                scene.borrow_mut().resize(w, h);
            }),
        ));
    }

    guards
}
