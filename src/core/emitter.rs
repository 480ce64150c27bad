use glam::Vec2;
use rand::Rng;

use super::arena::{Arena, Handle};
use super::config::SpawnParams;
use super::particle::{Particle, ParticlePhase};

/// Bounded pool of live trail particles.
pub struct ParticleEmitter {
    pool: Arena<Particle>,
    capacity: usize,
    spawn: SpawnParams,
}

impl ParticleEmitter {
    pub fn new(capacity: usize, spawn: SpawnParams) -> Self {
        Self {
            pool: Arena::with_capacity(capacity),
            capacity,
            spawn,
        }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn get(&self, handle: Handle) -> Option<&Particle> {
        self.pool.get(handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Handle, &Particle)> {
        self.pool.iter()
    }

    /// Fill the pool up to capacity with particles anchored at `anchor`.
    /// New handles are appended to `spawned`; returns how many were created.
    pub fn top_up<R: Rng + ?Sized>(
        &mut self,
        anchor: Vec2,
        speed: f32,
        window_diagonal: f32,
        now_sec: f64,
        rng: &mut R,
        spawned: &mut Vec<Handle>,
    ) -> usize {
        let missing = self.capacity.saturating_sub(self.pool.len());
        for _ in 0..missing {
            let p = Particle::spawn(anchor, speed, window_diagonal, now_sec, &self.spawn, rng);
            spawned.push(self.pool.insert(p));
        }
        missing
    }

    /// Update every live particle; completed ones are removed from the pool
    /// and their handles appended to `finished`.
    pub fn advance(&mut self, now_sec: f64, frame: u64, finished: &mut Vec<Handle>) -> usize {
        let start = finished.len();
        for (handle, particle) in self.pool.iter_mut() {
            if particle.update(now_sec, frame) == ParticlePhase::Dead {
                finished.push(handle);
            }
        }
        for &handle in &finished[start..] {
            self.pool.remove(handle);
        }
        finished.len() - start
    }

    /// Remove a single particle. Stale or already-removed handles yield `None`.
    pub fn remove(&mut self, handle: Handle) -> Option<Particle> {
        self.pool.remove(handle)
    }
}
