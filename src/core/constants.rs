// Per-variant tuning constants. Every value here affects aesthetics only;
// the relationships the code relies on are covered by
// `tests/constants_tests.rs`.

use super::field::{CountRule, EngineParams, LinkParams, PointerModel, Rgb};
use super::grid::GridParams;

/// Which engine flavor a canvas asks for via its `data-variant` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Constellation,
    Repulsion,
    GridGlow,
}

impl Variant {
    /// Missing or unrecognized attributes fall back to the constellation.
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            Some("repulsion") => Variant::Repulsion,
            Some("grid") => Variant::GridGlow,
            _ => Variant::Constellation,
        }
    }
}

// ---------------- constellation-network ----------------

pub const CONSTELLATION_PALETTE: [Rgb; 3] = [
    Rgb(99, 179, 237),  // sky blue
    Rgb(129, 140, 248), // indigo
    Rgb(94, 234, 212),  // teal
];

pub const CONSTELLATION: EngineParams = EngineParams {
    count: CountRule::PerArea {
        density: 0.000075,
        floor: 40,
    },
    drift_speed: 0.3,
    min_radius: 1.0,
    max_radius: 2.6,
    wrap_margin: 50.0,
    smoothing: 0.08,
    pointer: PointerModel::Attract {
        influence_radius: 180.0,
        coefficient: 0.025,
        amplification: 12.0,
    },
    links: Some(LinkParams {
        connect_distance: 120.0,
        base_opacity: 0.35,
        color: Rgb(148, 163, 216),
        pointer_distance: 200.0,
        pointer_opacity: 0.5,
        pointer_color: Rgb(129, 140, 248),
    }),
    palette: &CONSTELLATION_PALETTE,
    min_alpha: 0.45,
    max_alpha: 0.9,
};

// ---------------- repulsion-field ----------------

pub const REPULSION_PALETTE: [Rgb; 3] = [
    Rgb(244, 162, 97), // sandy orange
    Rgb(231, 111, 81), // burnt sienna
    Rgb(233, 196, 106), // saffron
];

pub const REPULSION: EngineParams = EngineParams {
    count: CountRule::PerWidth { per_thousand: 60.0 },
    drift_speed: 0.4,
    min_radius: 1.5,
    max_radius: 3.5,
    wrap_margin: 60.0,
    smoothing: 0.1,
    pointer: PointerModel::Repel {
        radius: 140.0,
        strength: 4.0,
    },
    links: None,
    palette: &REPULSION_PALETTE,
    min_alpha: 0.4,
    max_alpha: 0.85,
};

// ---------------- grid-glow ----------------

pub const GRID: GridParams = GridParams {
    cell_size: 80.0,
    segments_per_line: 24,
    glow_radius: 160.0,
    base_opacity: 0.5,
    idle_opacity: 0.06,
    pointer_decay: 0.12,
    color: Rgb(56, 189, 248), // cyan
};
