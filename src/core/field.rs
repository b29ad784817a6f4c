// Particle field state and per-frame integration.
//
// Everything in this module is platform-free so the host-side tests in
// `tests/` can include and exercise it directly.

use glam::DVec2;
use rand::prelude::*;
use std::f64::consts::TAU;

/// Off-screen resting point for an inactive pointer. Far enough out that
/// every distance check fails without a special case.
pub const POINTER_SENTINEL: DVec2 = DVec2::new(-1.0e4, -1.0e4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS color string with the given opacity, clamped to [0, 1].
    pub fn rgba(self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.0,
            self.1,
            self.2,
            alpha.clamp(0.0, 1.0)
        )
    }
}

/// How many particles to seed for a viewport.
#[derive(Clone, Copy, Debug)]
pub enum CountRule {
    /// `max(floor, area × density)` — larger screens get more particles.
    PerArea { density: f64, floor: usize },
    /// `width / 1000 × per_thousand` — width-driven variants.
    PerWidth { per_thousand: f64 },
}

impl CountRule {
    pub fn count_for(self, width: u32, height: u32) -> usize {
        match self {
            CountRule::PerArea { density, floor } => {
                let area = width as f64 * height as f64;
                ((area * density).floor() as usize).max(floor)
            }
            CountRule::PerWidth { per_thousand } => {
                (width as f64 / 1000.0 * per_thousand).floor() as usize
            }
        }
    }
}

/// Pointer influence on a particle's target position.
#[derive(Clone, Copy, Debug)]
pub enum PointerModel {
    Attract {
        influence_radius: f64,
        coefficient: f64,
        amplification: f64,
    },
    Repel {
        radius: f64,
        strength: f64,
    },
}

impl PointerModel {
    /// Maximum pointer distance at which the model has any effect.
    pub fn reach(self) -> f64 {
        match self {
            PointerModel::Attract {
                influence_radius, ..
            } => influence_radius,
            PointerModel::Repel { radius, .. } => radius,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LinkParams {
    pub connect_distance: f64,
    pub base_opacity: f64,
    pub color: Rgb,
    /// Particle-to-pointer edges reach further than pair edges.
    pub pointer_distance: f64,
    pub pointer_opacity: f64,
    pub pointer_color: Rgb,
}

#[derive(Clone, Copy, Debug)]
pub struct EngineParams {
    pub count: CountRule,
    pub drift_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub wrap_margin: f64,
    pub smoothing: f64,
    pub pointer: PointerModel,
    pub links: Option<LinkParams>,
    pub palette: &'static [Rgb],
    pub min_alpha: f64,
    pub max_alpha: f64,
}

#[derive(Clone, Debug)]
pub struct Particle {
    /// Where the particle is drawn; smoothed toward a target every frame.
    pub render_pos: DVec2,
    /// Position on the ambient drift path, ignoring the pointer.
    pub home_pos: DVec2,
    pub drift_vel: DVec2,
    pub radius: f64,
    /// Random offset desynchronizing the pulse oscillation.
    pub phase: f64,
    pub color: Rgb,
    pub alpha: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: DVec2,
    pub active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: POINTER_SENTINEL,
            active: false,
        }
    }
}

impl PointerState {
    /// Position used by distance checks: the sentinel while inactive.
    pub fn effective(self) -> DVec2 {
        if self.active {
            self.pos
        } else {
            POINTER_SENTINEL
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
}

pub struct FieldState {
    pub viewport: ViewportState,
    pub particles: Vec<Particle>,
    pub pointer: PointerState,
    pub params: EngineParams,
    rng: StdRng,
}

impl FieldState {
    pub fn new(params: EngineParams, width: u32, height: u32, seed: u64) -> Self {
        let mut state = Self {
            viewport: ViewportState { width, height },
            particles: Vec::new(),
            pointer: PointerState::default(),
            params,
            rng: StdRng::seed_from_u64(seed),
        };
        state.reseed();
        state
    }

    /// Build a fresh particle collection for the current viewport. The
    /// replacement is fully constructed before assignment, so the frame loop
    /// never observes a half-built collection.
    pub fn reseed(&mut self) {
        let w = self.viewport.width as f64;
        let h = self.viewport.height as f64;
        let count = self
            .params
            .count
            .count_for(self.viewport.width, self.viewport.height);
        let fresh = (0..count).map(|_| self.spawn(w, h)).collect::<Vec<_>>();
        self.particles = fresh;
    }

    fn spawn(&mut self, w: f64, h: f64) -> Particle {
        let p = self.params;
        let home = DVec2::new(self.rng.gen_range(0.0..=w), self.rng.gen_range(0.0..=h));
        let drift = p.drift_speed;
        let vel = DVec2::new(
            self.rng.gen_range(-drift..=drift),
            self.rng.gen_range(-drift..=drift),
        );
        let radius = self.rng.gen_range(p.min_radius..=p.max_radius);
        let phase = self.rng.gen_range(0.0..TAU);
        let color = *p.palette.choose(&mut self.rng).unwrap_or(&Rgb(255, 255, 255));
        let alpha = self.rng.gen_range(p.min_alpha..=p.max_alpha);
        Particle {
            render_pos: home,
            home_pos: home,
            drift_vel: vel,
            radius,
            phase,
            color,
            alpha,
        }
    }

    /// Resize discards the previous population entirely; particles are not
    /// migrated or rescaled.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = ViewportState { width, height };
        self.reseed();
    }

    pub fn set_pointer(&mut self, pos: DVec2) {
        self.pointer = PointerState { pos, active: true };
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = PointerState::default();
    }

    /// Advance every particle by one frame: drift, wrap, pointer target,
    /// smooth. Increments are per-frame, not per-second.
    pub fn step(&mut self) {
        let w = self.viewport.width as f64;
        let h = self.viewport.height as f64;
        let margin = self.params.wrap_margin;
        let pointer = self.pointer.effective();
        let model = self.params.pointer;
        let smoothing = self.params.smoothing;
        for p in &mut self.particles {
            p.home_pos += p.drift_vel;
            p.home_pos.x = wrap_axis(p.home_pos.x, w, margin);
            p.home_pos.y = wrap_axis(p.home_pos.y, h, margin);
            let target = pointer_target(p.home_pos, pointer, model);
            p.render_pos.x = lerp(p.render_pos.x, target.x, smoothing);
            p.render_pos.y = lerp(p.render_pos.y, target.y, smoothing);
        }
    }
}

// ---------------- Pure helpers ----------------

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Teleport a drifting coordinate to the opposite edge once it leaves the
/// viewport by more than `margin`. Each axis wraps on its own.
#[inline]
pub fn wrap_axis(v: f64, dim: f64, margin: f64) -> f64 {
    if v > dim + margin {
        -margin
    } else if v < -margin {
        dim + margin
    } else {
        v
    }
}

/// Attraction multiplier at distance `d`: maximal at zero distance, exactly
/// zero at the influence radius.
#[inline]
pub fn attract_strength(d: f64, influence_radius: f64, coefficient: f64, amplification: f64) -> f64 {
    if d >= influence_radius {
        return 0.0;
    }
    (1.0 - d / influence_radius) * coefficient * amplification
}

/// Repulsion push distance at `d`: bounded at zero distance, zero at the
/// radius boundary.
#[inline]
pub fn repel_force(d: f64, radius: f64, strength: f64) -> f64 {
    if d >= radius {
        return 0.0;
    }
    (1.0 - d / radius) * strength * radius * 0.1
}

/// Where a particle wants to be this frame given the pointer.
pub fn pointer_target(home: DVec2, pointer: DVec2, model: PointerModel) -> DVec2 {
    let d = home.distance(pointer);
    match model {
        PointerModel::Attract {
            influence_radius,
            coefficient,
            amplification,
        } => {
            if d >= influence_radius {
                return home;
            }
            let strength = attract_strength(d, influence_radius, coefficient, amplification);
            home + (pointer - home) * strength
        }
        PointerModel::Repel { radius, strength } => {
            // Zero distance has no defined direction; treat it as no
            // influence rather than letting the division feed a non-finite
            // value into position state.
            if d <= 0.0 || d >= radius {
                return home;
            }
            let away = (home - pointer) / d;
            home + away * repel_force(d, radius, strength)
        }
    }
}
