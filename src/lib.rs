//! Ideal gas in a square box: circular particles of differing mass bouncing
//! elastically off the walls and each other.
//!
//! [`core`] holds the physics. [`stats`] and [`app`] only read the particles
//! the engine exposes between ticks.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod species;
pub mod stats;

pub use crate::config::SimulationParams;
pub use crate::core::{Particle, ParticleEngine, Wall};
pub use crate::error::{Error, Result};
pub use crate::species::Species;
