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
fn smoothing_factors_are_fractions() {
    assert!(POINTER_SMOOTHING > 0.0 && POINTER_SMOOTHING <= 1.0);
    assert!(POINTER_SPEED_SNAP > 0.0 && POINTER_SPEED_SNAP < 1.0);
    assert!(POINTER_SAMPLE_INTERVAL_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spawn_ranges_are_positive() {
    assert!(MAX_PARTICLES > 0);
    assert!(RADIUS_DIAGONAL_FACTOR > 0.0);
    assert!(FREQUENCY_BASE > 0.0 && FREQUENCY_SPAN > 0.0);
    assert!(AMPLITUDE_MAX > 0.0);
    assert!(DURATION_MIN_SEC > 0.0 && DURATION_SPAN_SEC >= 0.0);
    assert!(RISE_MAX > 0.0);
    assert!(TILE_OVERSCAN >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn palette_is_three_rgb_hex_colours() {
    assert!(PALETTE_THRESHOLDS[0] < PALETTE_THRESHOLDS[1]);
    assert!(PALETTE_THRESHOLDS[1] < 1.0);
    for hex in PALETTE_HEX {
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn css_variables_are_custom_properties() {
    for name in [
        VAR_TILE_INDEX,
        VAR_TILE_POSITION,
        VAR_TILE_DURATION,
        VAR_MOUSE_X,
        VAR_MOUSE_Y,
    ] {
        assert!(name.starts_with("--"), "{name}");
    }
    assert!(SVG_NS.starts_with("http://www.w3.org/"));
}
