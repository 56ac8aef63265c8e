// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn physics_constants_are_positive() {
    assert!(GRAVITY > 0.0);
    assert!(PARTICLE_RADIUS > 0.0);
    assert!(SPARK_SPEED > 0.0);
    assert!(OPACITY_NORM > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(BURST_MIN >= 1.0 && BURST_MAX > BURST_MIN);
    assert!(LIFE_MIN > 0.0 && LIFE_MAX > LIFE_MIN);
    assert!(SPAWN_BAND > 0.0 && SPAWN_BAND <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fresh_sparks_are_never_fully_opaque() {
    // the opacity normalization is larger than any lifespan
    assert!(OPACITY_NORM > LIFE_MAX);
    assert_eq!(OPACITY_NORM, 120.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn color_constants_are_percentages() {
    assert!(SPARK_SATURATION <= 100);
    assert!(SPARK_LIGHTNESS <= 100);
    assert_eq!(HUE_RANGE, 360.0);
}

#[test]
fn page_wiring_matches_markup() {
    assert_eq!(CANVAS_ID, "fw");
    assert_eq!(SPAWN_INTERVAL_MS, 900);
    assert_eq!(LOG_LEVEL, log::Level::Info);
}
