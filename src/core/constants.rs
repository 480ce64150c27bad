// Shared tuning constants for the background tiler and the cursor trail.

// Background
pub const TILE_OVERSCAN: usize = 2; // extra tiles past the container height
pub const TILE_DURATION_SPAN: f64 = 2.0; // --duration is U(0,1) * span

// Pointer sampling
pub const POINTER_SAMPLE_INTERVAL_MS: i32 = 20;
pub const POINTER_SMOOTHING: f32 = 0.1; // shared by speed EMA and position smoothing
pub const POINTER_SPEED_SNAP: f32 = 0.001; // speeds below this become exactly 0

// Particle pool
pub const MAX_PARTICLES: usize = 1000;

// Particle spawn distribution
pub const RADIUS_DIAGONAL_FACTOR: f32 = 0.005; // radius cap relative to the window diagonal
pub const SEED_MAX: f32 = 1000.0;
pub const FREQUENCY_BASE: f32 = 0.05;
pub const FREQUENCY_SPAN: f32 = 0.1;
pub const AMPLITUDE_MAX: f32 = 10.0; // px
pub const DURATION_MIN_SEC: f64 = 1.0;
pub const DURATION_SPAN_SEC: f64 = 2.0;
pub const RISE_MAX: f32 = 200.0; // px travelled upward over a lifetime

// Colour palette: (rgb hex, upper bound of the uniform draw selecting it)
pub const PALETTE_THRESHOLDS: [f32; 2] = [0.33, 0.66];
pub const PALETTE_HEX: [&str; 3] = ["#4cede1", "#ffc53a", "#ff858d"];
