//! Canvas painting. Stateless: every color and radius is derived from the
//! current frame's field state, nothing carries over between frames.

use crate::constants::*;
use crate::core::field::{FieldState, Rgb};
use crate::core::grid::{self, GridField};
use crate::core::links::Edge;
use glam::DVec2;
use std::f64::consts::TAU;
use web_sys as web;

type Ctx2d = web::CanvasRenderingContext2d;

pub fn draw_particle_scene(
    ctx: &Ctx2d,
    field: &FieldState,
    links: &[Edge],
    pointer_links: &[Edge],
    pulse_time: f64,
) {
    let w = field.viewport.width as f64;
    let h = field.viewport.height as f64;
    ctx.clear_rect(0.0, 0.0, w, h);

    // Edges go down first so particles composite on top.
    if let Some(lp) = &field.params.links {
        draw_edges(ctx, links, lp.color);
        draw_edges(ctx, pointer_links, lp.pointer_color);
    }
    draw_particles(ctx, field, pulse_time);
    draw_halos(ctx, field);
    draw_pointer_hub(ctx, field);
}

fn draw_edges(ctx: &Ctx2d, edges: &[Edge], color: Rgb) {
    ctx.set_line_width(LINK_WIDTH);
    for e in edges {
        ctx.begin_path();
        ctx.move_to(e.a.x, e.a.y);
        ctx.line_to(e.b.x, e.b.y);
        ctx.set_stroke_style_str(&color.rgba(e.alpha));
        ctx.stroke();
    }
}

fn draw_particles(ctx: &Ctx2d, field: &FieldState, pulse_time: f64) {
    for p in &field.particles {
        let pulse = 1.0 + PULSE_AMPLITUDE * (pulse_time * PULSE_RATE + p.phase).sin();
        let r = (p.radius * pulse).max(0.1);
        fill_circle(ctx, p.render_pos, r, &p.color.rgba(p.alpha));
    }
}

/// Soft radial halos around particles within pointer reach, fading with
/// distance.
fn draw_halos(ctx: &Ctx2d, field: &FieldState) {
    if !field.pointer.active {
        return;
    }
    let reach = field.params.pointer.reach();
    for p in &field.particles {
        let d = p.render_pos.distance(field.pointer.pos);
        if d < reach {
            let falloff = 1.0 - d / reach;
            radial_halo(
                ctx,
                p.render_pos,
                p.radius * HALO_RADIUS_FACTOR,
                p.color,
                HALO_OPACITY * falloff,
            );
        }
    }
}

fn draw_pointer_hub(ctx: &Ctx2d, field: &FieldState) {
    if !field.pointer.active {
        return;
    }
    let color = field
        .params
        .palette
        .first()
        .copied()
        .unwrap_or(Rgb(255, 255, 255));
    radial_halo(
        ctx,
        field.pointer.pos,
        POINTER_HUB_HALO,
        color,
        POINTER_HUB_OPACITY,
    );
    fill_circle(
        ctx,
        field.pointer.pos,
        POINTER_HUB_RADIUS,
        &color.rgba(0.9),
    );
}

pub fn draw_grid_scene(ctx: &Ctx2d, field: &GridField) {
    let w = field.viewport.width as f64;
    let h = field.viewport.height as f64;
    let p = field.params;
    ctx.clear_rect(0.0, 0.0, w, h);

    let xs = grid::line_offsets(w, p.cell_size);
    let ys = grid::line_offsets(h, p.cell_size);

    ctx.set_line_width(GRID_LINE_WIDTH);
    for &x in &xs {
        draw_glow_line(ctx, field, DVec2::new(x, 0.0), DVec2::new(x, h));
    }
    for &y in &ys {
        draw_glow_line(ctx, field, DVec2::new(0.0, y), DVec2::new(w, y));
    }

    for &x in &xs {
        for &y in &ys {
            draw_intersection(ctx, field, DVec2::new(x, y));
        }
    }

    if field.pointer.active {
        radial_halo(ctx, field.smoothed, POINTER_HUB_HALO, p.color, POINTER_HUB_OPACITY);
    }
}

/// One grid line drawn as fixed equal segments, each lit by its midpoint's
/// distance to the smoothed pointer.
fn draw_glow_line(ctx: &Ctx2d, field: &GridField, from: DVec2, to: DVec2) {
    let p = field.params;
    let segments = p.segments_per_line.max(1);
    let step = (to - from) / segments as f64;
    for s in 0..segments {
        let a = from + step * s as f64;
        let b = a + step;
        let mid = (a + b) * 0.5;
        let intensity = grid::glow_intensity(mid.distance(field.smoothed), p.glow_radius);
        let alpha = p.idle_opacity + grid::segment_opacity(intensity, p.base_opacity);
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.set_stroke_style_str(&p.color.rgba(alpha));
        ctx.stroke();
    }
}

fn draw_intersection(ctx: &Ctx2d, field: &GridField, pos: DVec2) {
    let p = field.params;
    let intensity = grid::glow_intensity(pos.distance(field.smoothed), p.glow_radius);
    let r = INTERSECTION_RADIUS + INTERSECTION_PULSE * intensity;
    let alpha = p.idle_opacity + intensity * (1.0 - p.idle_opacity);
    fill_circle(ctx, pos, r, &p.color.rgba(alpha));
    if intensity > 0.0 {
        radial_halo(ctx, pos, INTERSECTION_HALO, p.color, intensity * HALO_OPACITY);
    }
}

// ---------------- Primitives ----------------

fn fill_circle(ctx: &Ctx2d, center: DVec2, radius: f64, style: &str) {
    ctx.begin_path();
    if ctx.arc(center.x, center.y, radius, 0.0, TAU).is_err() {
        return;
    }
    ctx.set_fill_style_str(style);
    ctx.fill();
}

/// Gradient-filled disc fading from `alpha` at the center to transparent at
/// the rim.
fn radial_halo(ctx: &Ctx2d, center: DVec2, radius: f64, color: Rgb, alpha: f64) {
    let Ok(gradient) =
        ctx.create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
    else {
        return;
    };
    _ = gradient.add_color_stop(0.0, &color.rgba(alpha));
    _ = gradient.add_color_stop(1.0, &color.rgba(0.0));
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    if ctx.arc(center.x, center.y, radius, 0.0, TAU).is_ok() {
        ctx.fill();
    }
}
