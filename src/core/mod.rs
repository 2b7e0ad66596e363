//! Physics kernel for the ideal gas box.
//!
//! Everything in here is synchronous and free of I/O. Consumers drive it by
//! calling [`ParticleEngine::update`] once per frame and reading
//! [`ParticleEngine::particles`] between ticks.

pub mod collision;
pub mod engine;
pub mod particle;

pub use collision::Wall;
pub use engine::ParticleEngine;
pub use particle::Particle;
