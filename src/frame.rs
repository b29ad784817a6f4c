//! Frame loop: step the scene, collect edges, paint, reschedule.
//!
//! The loop is a self-rescheduling `requestAnimationFrame` closure guarded by
//! a shared `running` flag. Teardown clears the flag, cancels the pending
//! frame, and drops every listener guard; a frame that was already queued
//! no-ops on the cleared flag.

use crate::core::links::{self, Edge};
use crate::core::scene::Scene;
use crate::events::ListenerGuard;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub ctx: web::CanvasRenderingContext2d,
    started: Instant,
    // Scratch buffers reused across frames
    link_edges: Vec<Edge>,
    pointer_edges: Vec<Edge>,
}

impl FrameContext {
    pub fn new(scene: Rc<RefCell<Scene>>, ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            scene,
            ctx,
            started: Instant::now(),
            link_edges: Vec::new(),
            pointer_edges: Vec::new(),
        }
    }

    /// Integrate, run the distance pass, paint. One frame, fully synchronous.
    pub fn frame(&mut self) {
        let pulse_time = self.started.elapsed().as_secs_f64();
        let mut scene = self.scene.borrow_mut();
        scene.step();
        match &*scene {
            Scene::Particles(field) => {
                self.link_edges.clear();
                self.pointer_edges.clear();
                if let Some(lp) = &field.params.links {
                    links::collect_particle_links(&field.particles, lp, &mut self.link_edges);
                    if field.pointer.active {
                        links::collect_pointer_links(
                            &field.particles,
                            field.pointer.pos,
                            lp,
                            &mut self.pointer_edges,
                        );
                    }
                }
                render::draw_particle_scene(
                    &self.ctx,
                    field,
                    &self.link_edges,
                    &self.pointer_edges,
                    pulse_time,
                );
            }
            Scene::Grid(grid) => render::draw_grid_scene(&self.ctx, grid),
        }
    }
}

/// Handle to a mounted, running effect.
pub struct EffectHandle {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    listeners: Vec<ListenerGuard>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl EffectHandle {
    /// Stop the loop and drop all subscriptions. Safe to call more than once
    /// and safe to race with an in-flight frame: the cleared flag makes that
    /// frame a no-op before it touches anything.
    pub fn stop(&mut self) {
        self.running.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.listeners.clear();
        self.tick.borrow_mut().take();
    }
}

impl Drop for EffectHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Kick off the self-rescheduling frame callback and hand back the owning
/// handle.
pub fn start_loop(frame_ctx: FrameContext, listeners: Vec<ListenerGuard>) -> EffectHandle {
    let running = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if !running_tick.get() {
            return;
        }
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => raf_tick.set(Some(id)),
                    Err(_) => running_tick.set(false),
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(Some(id));
            }
        }
    }

    EffectHandle {
        running,
        raf_id,
        listeners,
        tick,
    }
}
