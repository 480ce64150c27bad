use super::constants::*;

/// Background tiling parameters.
#[derive(Clone, Debug)]
pub struct TileConfig {
    pub overscan: usize,
    pub duration_span: f64,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            overscan: TILE_OVERSCAN,
            duration_span: TILE_DURATION_SPAN,
        }
    }
}

/// Cursor trail parameters. Defaults reproduce the stock look.
#[derive(Clone, Debug)]
pub struct EffectConfig {
    pub max_particles: usize,
    pub smoothing: f32,
    pub speed_snap: f32,
    pub sample_interval_ms: i32,
    pub spawn: SpawnParams,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            smoothing: POINTER_SMOOTHING,
            speed_snap: POINTER_SPEED_SNAP,
            sample_interval_ms: POINTER_SAMPLE_INTERVAL_MS,
            spawn: SpawnParams::default(),
        }
    }
}

/// Ranges the per-particle random draws are scaled into.
#[derive(Clone, Debug)]
pub struct SpawnParams {
    pub radius_diagonal_factor: f32,
    pub seed_max: f32,
    pub frequency_base: f32,
    pub frequency_span: f32,
    pub amplitude_max: f32,
    pub duration_min_sec: f64,
    pub duration_span_sec: f64,
    pub rise_max: f32,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            radius_diagonal_factor: RADIUS_DIAGONAL_FACTOR,
            seed_max: SEED_MAX,
            frequency_base: FREQUENCY_BASE,
            frequency_span: FREQUENCY_SPAN,
            amplitude_max: AMPLITUDE_MAX,
            duration_min_sec: DURATION_MIN_SEC,
            duration_span_sec: DURATION_SPAN_SEC,
            rise_max: RISE_MAX,
        }
    }
}
