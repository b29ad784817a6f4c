// Host-side tests for the variant constants and their relationships.

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

use constants::*;
use field::{CountRule, PointerModel};

#[test]
#[allow(clippy::assertions_on_constants)]
fn constellation_constants_are_coherent() {
    let p = CONSTELLATION;
    assert!(p.min_radius > 0.0 && p.min_radius < p.max_radius);
    assert!(p.drift_speed > 0.0);
    assert!(p.wrap_margin > 0.0);
    assert!(p.smoothing > 0.0 && p.smoothing < 1.0);
    assert!(p.min_alpha > 0.0 && p.min_alpha < p.max_alpha && p.max_alpha <= 1.0);
    assert!(!p.palette.is_empty());

    let CountRule::PerArea { density, floor } = p.count else {
        panic!("constellation must be area-driven");
    };
    assert!(density > 0.0);
    assert!(floor > 0);

    let PointerModel::Attract {
        influence_radius,
        coefficient,
        amplification,
    } = p.pointer
    else {
        panic!("constellation must attract");
    };
    assert!(influence_radius > 0.0);
    // Full-strength pull still keeps the target short of the pointer.
    assert!(coefficient * amplification < 1.0);
}

#[test]
fn constellation_links_reach_further_for_the_pointer() {
    let links = CONSTELLATION.links.expect("constellation draws links");
    assert!(links.connect_distance > 0.0);
    assert!(links.pointer_distance > links.connect_distance);
    assert!(links.base_opacity > 0.0 && links.base_opacity <= 1.0);
    assert!(links.pointer_opacity > 0.0 && links.pointer_opacity <= 1.0);
    assert_ne!(links.pointer_color, links.color);
}

#[test]
fn full_hd_seeding_yields_155_particles() {
    assert_eq!(CONSTELLATION.count.count_for(1920, 1080), 155);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn repulsion_constants_are_coherent() {
    let p = REPULSION;
    assert!(p.min_radius > 0.0 && p.min_radius < p.max_radius);
    assert!(p.smoothing > 0.0 && p.smoothing < 1.0);
    assert!(p.links.is_none());

    let CountRule::PerWidth { per_thousand } = p.count else {
        panic!("repulsion must be width-driven");
    };
    assert!(per_thousand > 0.0);

    let PointerModel::Repel { radius, strength } = p.pointer else {
        panic!("repulsion must repel");
    };
    assert!(radius > 0.0);
    assert!(strength > 0.0);
    // Maximum push stays well inside the influence radius.
    assert!(strength * radius * 0.1 < radius);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_constants_are_coherent() {
    assert!(GRID.cell_size > 0.0);
    assert!(GRID.segments_per_line > 0);
    // The glow spans more than one cell, so motion reads as a field rather
    // than a single lit line.
    assert!(GRID.glow_radius > GRID.cell_size);
    assert!(GRID.pointer_decay > 0.0 && GRID.pointer_decay < 1.0);
    assert!(GRID.idle_opacity + GRID.base_opacity <= 1.0);
}

#[test]
fn variant_attribute_parsing() {
    assert_eq!(Variant::from_attr(Some("repulsion")), Variant::Repulsion);
    assert_eq!(Variant::from_attr(Some("grid")), Variant::GridGlow);
    assert_eq!(
        Variant::from_attr(Some("constellation")),
        Variant::Constellation
    );
    // Missing or unknown values fall back to the default.
    assert_eq!(Variant::from_attr(None), Variant::Constellation);
    assert_eq!(Variant::from_attr(Some("nebula")), Variant::Constellation);
}
