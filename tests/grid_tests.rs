// Host-side tests for the grid-glow field and its smoothed pointer.

#![allow(dead_code)]
mod field {
    include!("../src/core/field.rs");
}
mod grid {
    include!("../src/core/grid.rs");
}
mod constants {
    include!("../src/core/constants.rs");
}

use constants::GRID;
use field::POINTER_SENTINEL;
use glam::DVec2;
use grid::*;

#[test]
fn line_offsets_cover_the_dimension_edge_to_edge() {
    let offsets = line_offsets(400.0, 80.0);
    assert_eq!(offsets, vec![0.0, 80.0, 160.0, 240.0, 320.0, 400.0]);
}

#[test]
fn line_offsets_stop_at_the_last_full_multiple() {
    let offsets = line_offsets(410.0, 80.0);
    assert_eq!(offsets.last(), Some(&400.0));
    assert_eq!(offsets.len(), 6);
}

#[test]
fn line_offsets_reject_degenerate_cells() {
    assert!(line_offsets(400.0, 0.0).is_empty());
    assert!(line_offsets(400.0, -5.0).is_empty());
}

#[test]
fn glow_intensity_profile() {
    assert_eq!(glow_intensity(0.0, 160.0), 1.0);
    assert_eq!(glow_intensity(160.0, 160.0), 0.0);
    assert_eq!(glow_intensity(500.0, 160.0), 0.0);
    let mut last = 1.0;
    for i in 1..=50 {
        let v = glow_intensity(160.0 * i as f64 / 50.0, 160.0);
        assert!(v < last);
        last = v;
    }
}

#[test]
fn segment_opacity_is_quadratic_in_intensity() {
    assert_eq!(segment_opacity(1.0, 0.5), 0.5);
    assert!((segment_opacity(0.5, 0.8) - 0.2).abs() < 1e-12);
    assert_eq!(segment_opacity(0.0, 0.8), 0.0);
    // Tighter than linear everywhere except the endpoints.
    for i in 1..10 {
        let t = i as f64 / 10.0;
        assert!(segment_opacity(t, 1.0) < t);
    }
}

#[test]
fn smoothed_pointer_tracks_raw_while_active() {
    let mut g = GridField::new(GRID, 800, 600);
    let raw = DVec2::new(400.0, 300.0);
    g.set_pointer(raw);

    let mut last = g.smoothed.distance(raw);
    for _ in 0..200 {
        g.step();
        let d = g.smoothed.distance(raw);
        assert!(d <= last);
        last = d;
    }
    assert!(last < 1.0);
}

#[test]
fn smoothed_pointer_decays_to_sentinel_when_inactive() {
    let mut g = GridField::new(GRID, 800, 600);
    g.set_pointer(DVec2::new(400.0, 300.0));
    for _ in 0..100 {
        g.step();
    }
    assert!(g.smoothed.distance(DVec2::new(400.0, 300.0)) < 50.0);

    g.clear_pointer();
    let mut last = g.smoothed.distance(POINTER_SENTINEL);
    for _ in 0..400 {
        g.step();
        let d = g.smoothed.distance(POINTER_SENTINEL);
        assert!(d <= last);
        last = d;
    }
    // Far enough out that no grid point still glows.
    assert!(last < GRID.glow_radius);
}

#[test]
fn resize_keeps_pointer_state() {
    let mut g = GridField::new(GRID, 800, 600);
    g.set_pointer(DVec2::new(100.0, 100.0));
    g.resize(1024, 768);
    assert!(g.pointer.active);
    assert_eq!(g.viewport.width, 1024);
    assert_eq!(g.viewport.height, 768);
}
