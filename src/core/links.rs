// Distance pass over particle pairs and particle-to-pointer pairs.

use super::field::{LinkParams, Particle};
use glam::DVec2;

/// One connective edge to draw this frame.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub a: DVec2,
    pub b: DVec2,
    pub alpha: f64,
}

/// Linear falloff: zero at `threshold` and beyond, `base` as d → 0.
#[inline]
pub fn link_alpha(d: f64, threshold: f64, base: f64) -> f64 {
    if d >= threshold {
        0.0
    } else {
        (1.0 - d / threshold) * base
    }
}

/// All unordered pairs within connect distance, on render positions. O(n²),
/// which is fine at seeded counts; `out` is reused across frames by the
/// caller.
pub fn collect_particle_links(particles: &[Particle], params: &LinkParams, out: &mut Vec<Edge>) {
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let d = a.render_pos.distance(b.render_pos);
            let alpha = link_alpha(d, params.connect_distance, params.base_opacity);
            if alpha > 0.0 {
                out.push(Edge {
                    a: a.render_pos,
                    b: b.render_pos,
                    alpha,
                });
            }
        }
    }
}

/// Edges from each particle to the pointer, with their own (wider) reach.
pub fn collect_pointer_links(
    particles: &[Particle],
    pointer: DVec2,
    params: &LinkParams,
    out: &mut Vec<Edge>,
) {
    for p in particles {
        let d = p.render_pos.distance(pointer);
        let alpha = link_alpha(d, params.pointer_distance, params.pointer_opacity);
        if alpha > 0.0 {
            out.push(Edge {
                a: p.render_pos,
                b: pointer,
                alpha,
            });
        }
    }
}
