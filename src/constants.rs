/// Render-side tuning: pulse, halos, pointer hub.
///
/// These constants keep magic numbers out of the drawing code; none of them
/// affects the simulation itself.
// Transient radius pulse applied at draw time
pub const PULSE_AMPLITUDE: f64 = 0.35; // fraction of the base radius
pub const PULSE_RATE: f64 = 2.0; // radians per second

// Glow halos around particles near the pointer
pub const HALO_RADIUS_FACTOR: f64 = 6.0; // halo extent as a multiple of particle radius
pub const HALO_OPACITY: f64 = 0.25;

// Pointer hub
pub const POINTER_HUB_RADIUS: f64 = 3.0;
pub const POINTER_HUB_HALO: f64 = 40.0;
pub const POINTER_HUB_OPACITY: f64 = 0.5;

// Stroke widths
pub const LINK_WIDTH: f64 = 1.0;
pub const GRID_LINE_WIDTH: f64 = 1.0;

// Grid intersection dots
pub const INTERSECTION_RADIUS: f64 = 1.5;
pub const INTERSECTION_PULSE: f64 = 2.5; // extra radius at full intensity
pub const INTERSECTION_HALO: f64 = 14.0;
