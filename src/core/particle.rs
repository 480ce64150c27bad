use glam::Vec2;
use rand::Rng;

use super::config::SpawnParams;
use super::constants::{PALETTE_HEX, PALETTE_THRESHOLDS};
use super::easing::{lerp, power1_in_out};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticlePhase {
    Spawning,
    Animating,
    Dead,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteHue {
    Cyan,
    Amber,
    Rose,
}

impl PaletteHue {
    /// Map a uniform draw in \[0, 1) to a hue.
    pub fn from_unit(u: f32) -> Self {
        if u < PALETTE_THRESHOLDS[0] {
            PaletteHue::Cyan
        } else if u < PALETTE_THRESHOLDS[1] {
            PaletteHue::Amber
        } else {
            PaletteHue::Rose
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            PaletteHue::Cyan => PALETTE_HEX[0],
            PaletteHue::Amber => PALETTE_HEX[1],
            PaletteHue::Rose => PALETTE_HEX[2],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticleColor {
    pub hue: PaletteHue,
    pub alpha: u8,
}

impl ParticleColor {
    /// `#rrggbbaa` fill string.
    pub fn to_css(self) -> String {
        format!("{}{:02x}", self.hue.hex(), self.alpha)
    }
}

/// One trail particle: rises from its anchor with a horizontal wobble while
/// its radius decays to zero along an ease-in-out curve.
#[derive(Clone, Debug)]
pub struct Particle {
    pub anchor: Vec2,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    initial_radius: f32,
    rise: f32,
    pub seed: f32,
    pub frequency: f32,
    pub amplitude: f32,
    pub color: ParticleColor,
    born_sec: f64,
    duration_sec: f64,
    phase: ParticlePhase,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(
        anchor: Vec2,
        speed: f32,
        window_diagonal: f32,
        now_sec: f64,
        params: &SpawnParams,
        rng: &mut R,
    ) -> Self {
        let radius_cap = speed.min(window_diagonal * params.radius_diagonal_factor).max(0.0);
        let radius = rng.gen::<f32>() * radius_cap;
        let seed = rng.gen::<f32>() * params.seed_max;
        let frequency = params.frequency_base + rng.gen::<f32>() * params.frequency_span;
        let amplitude = rng.gen::<f32>() * params.amplitude_max;
        let hue = PaletteHue::from_unit(rng.gen::<f32>());
        let alpha = (rng.gen::<f32>() * 255.0).round() as u8;
        let duration_sec = params.duration_min_sec + rng.gen::<f64>() * params.duration_span_sec;
        let rise = rng.gen::<f32>() * params.rise_max;
        Self {
            anchor,
            x: anchor.x,
            y: anchor.y,
            radius,
            initial_radius: radius,
            rise,
            seed,
            frequency,
            amplitude,
            color: ParticleColor { hue, alpha },
            born_sec: now_sec,
            duration_sec,
            phase: ParticlePhase::Spawning,
        }
    }

    pub fn phase(&self) -> ParticlePhase {
        self.phase
    }

    pub fn duration_sec(&self) -> f64 {
        self.duration_sec
    }

    pub fn rise(&self) -> f32 {
        self.rise
    }

    /// Normalised animation progress at `now_sec`.
    pub fn progress(&self, now_sec: f64) -> f32 {
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        (((now_sec - self.born_sec) / self.duration_sec).clamp(0.0, 1.0)) as f32
    }

    /// Advance to `now_sec`. `frame` is the global frame counter driving the
    /// horizontal wobble. Dead particles are not touched.
    pub fn update(&mut self, now_sec: f64, frame: u64) -> ParticlePhase {
        if self.phase == ParticlePhase::Dead {
            return self.phase;
        }
        let p = self.progress(now_sec);
        let eased = power1_in_out(p);
        self.y = self.anchor.y - self.rise * eased;
        self.radius = lerp(self.initial_radius, 0.0, eased).max(0.0);
        // f64 phase: an f32 frame counter stops advancing past 2^24.
        let phase = (frame as f64 + self.seed as f64) * self.frequency as f64;
        self.x = self.anchor.x + phase.cos() as f32 * self.amplitude;
        self.phase = if p >= 1.0 {
            self.radius = 0.0;
            ParticlePhase::Dead
        } else {
            ParticlePhase::Animating
        };
        self.phase
    }
}
