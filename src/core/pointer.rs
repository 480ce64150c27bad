use glam::Vec2;

/// Pointer position and motion estimate.
///
/// `position` follows raw mouse/touch input, `sample` runs on a fixed cadence
/// to estimate speed, and `smooth_step` runs once per frame to low-pass the
/// position for rendering.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub position: Vec2,
    pub last: Vec2,
    pub smooth: Vec2,
    pub speed: f32,
    smoothing: f32,
    speed_snap: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(super::constants::POINTER_SMOOTHING, super::constants::POINTER_SPEED_SNAP)
    }
}

impl PointerState {
    pub fn new(smoothing: f32, speed_snap: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            last: Vec2::ZERO,
            smooth: Vec2::ZERO,
            speed: 0.0,
            smoothing: smoothing.clamp(0.0, 1.0),
            speed_snap: speed_snap.max(0.0),
        }
    }

    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.position = Vec2::new(x, y);
        }
    }

    /// Fold the displacement since the previous sample into the speed EMA.
    pub fn sample(&mut self) -> f32 {
        let dist = (self.position - self.last).length();
        self.speed += (dist - self.speed) * self.smoothing;
        if self.speed < self.speed_snap {
            self.speed = 0.0;
        }
        self.last = self.position;
        self.speed
    }

    /// Forget the motion estimate, e.g. once sampling has stopped.
    pub fn reset_speed(&mut self) {
        self.speed = 0.0;
        self.last = self.position;
    }

    /// Move the smoothed position toward the raw position by one frame.
    pub fn smooth_step(&mut self) -> Vec2 {
        self.smooth += (self.position - self.smooth) * self.smoothing;
        self.smooth
    }
}
