// Grid-glow variant: fixed lines and intersections lit by a smoothed
// pointer instead of drifting particles.

use super::field::{lerp, PointerState, Rgb, ViewportState, POINTER_SENTINEL};
use glam::DVec2;

#[derive(Clone, Copy, Debug)]
pub struct GridParams {
    pub cell_size: f64,
    /// Each grid line is sampled at this many equal segments.
    pub segments_per_line: usize,
    pub glow_radius: f64,
    pub base_opacity: f64,
    /// Faint alpha for unlit grid lines and dots.
    pub idle_opacity: f64,
    /// Per-frame lerp factor for the smoothed pointer.
    pub pointer_decay: f64,
    pub color: Rgb,
}

pub struct GridField {
    pub viewport: ViewportState,
    pub pointer: PointerState,
    /// What the renderer reacts to. Trails the raw pointer while active and
    /// drifts back to the off-screen sentinel once the pointer leaves.
    pub smoothed: DVec2,
    pub params: GridParams,
}

impl GridField {
    pub fn new(params: GridParams, width: u32, height: u32) -> Self {
        Self {
            viewport: ViewportState { width, height },
            pointer: PointerState::default(),
            smoothed: POINTER_SENTINEL,
            params,
        }
    }

    /// Grid geometry is derived from the viewport each frame; nothing to
    /// reseed.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = ViewportState { width, height };
    }

    pub fn set_pointer(&mut self, pos: DVec2) {
        self.pointer = PointerState { pos, active: true };
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = PointerState::default();
    }

    /// One-directional update: smoothed ← lerp(smoothed, raw-or-sentinel).
    pub fn step(&mut self) {
        let target = self.pointer.effective();
        self.smoothed.x = lerp(self.smoothed.x, target.x, self.params.pointer_decay);
        self.smoothed.y = lerp(self.smoothed.y, target.y, self.params.pointer_decay);
    }
}

/// Grid line offsets at multiples of `cell` across `dim`, both edges
/// included.
pub fn line_offsets(dim: f64, cell: f64) -> Vec<f64> {
    let mut offsets = Vec::new();
    if cell <= 0.0 {
        return offsets;
    }
    let mut v = 0.0;
    while v <= dim {
        offsets.push(v);
        v += cell;
    }
    offsets
}

/// Linear glow at distance `d`, clamped to [0, 1].
#[inline]
pub fn glow_intensity(d: f64, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    (1.0 - d / radius).clamp(0.0, 1.0)
}

/// Quadratic falloff, a tighter glow than the linear particle links.
#[inline]
pub fn segment_opacity(intensity: f64, base: f64) -> f64 {
    intensity * intensity * base
}
