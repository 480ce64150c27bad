use rand::Rng;

use super::config::TileConfig;

/// Measured size of a container, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub width: f64,
    pub height: f64,
}

impl ViewportMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}

/// Per-tile CSS custom properties (`--i`, `--position`, `--duration`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileParams {
    pub index: usize,
    pub position: f64,
    pub duration: f64,
}

/// Number of tiles needed to cover `container_height` plus `overscan` extra.
///
/// Returns `None` when the template tile has no measurable height; callers
/// leave the container untouched in that case.
#[inline]
pub fn tile_count(container_height: f64, tile_height: f64, overscan: usize) -> Option<usize> {
    if !tile_height.is_finite() || tile_height <= 0.0 {
        return None;
    }
    let covering = (container_height.max(0.0) / tile_height).ceil() as usize;
    Some(covering + overscan)
}

pub fn tile_params<R: Rng + ?Sized>(count: usize, cfg: &TileConfig, rng: &mut R) -> Vec<TileParams> {
    (0..count)
        .map(|index| TileParams {
            index,
            position: rng.gen::<f64>(),
            duration: rng.gen::<f64>() * cfg.duration_span,
        })
        .collect()
}

/// Full layout for a container: `None` means skip regeneration.
pub fn plan_tiles<R: Rng + ?Sized>(
    metrics: ViewportMetrics,
    tile_height: f64,
    cfg: &TileConfig,
    rng: &mut R,
) -> Option<Vec<TileParams>> {
    let count = tile_count(metrics.height, tile_height, cfg.overscan)?;
    Some(tile_params(count, cfg, rng))
}
