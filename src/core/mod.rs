pub mod arena;
pub mod config;
pub mod constants;
pub mod easing;
pub mod emitter;
pub mod particle;
pub mod pointer;
pub mod scene;
pub mod tiles;

pub use arena::{Arena, Handle};
pub use config::{EffectConfig, SpawnParams, TileConfig};
pub use emitter::ParticleEmitter;
pub use particle::{PaletteHue, Particle, ParticleColor, ParticlePhase};
pub use pointer::PointerState;
pub use scene::{CursorScene, FrameDelta};
pub use tiles::{plan_tiles, tile_count, TileParams, ViewportMetrics};
