use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::arena::Handle;
use super::config::EffectConfig;
use super::emitter::ParticleEmitter;
use super::pointer::PointerState;
use super::tiles::ViewportMetrics;

/// Handles created and retired during one tick. Reused across frames so the
/// per-frame path does not allocate once warmed up.
#[derive(Default, Debug)]
pub struct FrameDelta {
    pub spawned: Vec<Handle>,
    pub finished: Vec<Handle>,
}

impl FrameDelta {
    pub fn clear(&mut self) {
        self.spawned.clear();
        self.finished.clear();
    }
}

/// Cursor trail state: pointer tracking, particle pool and frame counter.
pub struct CursorScene {
    pub pointer: PointerState,
    pub emitter: ParticleEmitter,
    frame: u64,
    window_diagonal: f32,
    rng: StdRng,
}

impl CursorScene {
    pub fn new(config: &EffectConfig, rng: StdRng) -> Self {
        Self {
            pointer: PointerState::new(config.smoothing, config.speed_snap),
            emitter: ParticleEmitter::new(config.max_particles, config.spawn.clone()),
            frame: 0,
            window_diagonal: 0.0,
            rng,
        }
    }

    pub fn with_seed(config: &EffectConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn window_diagonal(&self) -> f32 {
        self.window_diagonal
    }

    pub fn resize(&mut self, metrics: ViewportMetrics) {
        self.window_diagonal = metrics.diagonal() as f32;
    }

    /// Run one animation frame and return the new smoothed pointer position.
    ///
    /// Completed particles are reaped first so their slots refill in the same
    /// tick. Emission uses the smoothed position from the previous frame; the
    /// smoothing step runs last.
    pub fn tick(&mut self, now_sec: f64, delta: &mut FrameDelta) -> Vec2 {
        delta.clear();
        self.frame = self.frame.wrapping_add(1);
        self.emitter.advance(now_sec, self.frame, &mut delta.finished);
        self.emitter.top_up(
            self.pointer.smooth,
            self.pointer.speed,
            self.window_diagonal,
            now_sec,
            &mut self.rng,
            &mut delta.spawned,
        );
        self.pointer.smooth_step()
    }
}
