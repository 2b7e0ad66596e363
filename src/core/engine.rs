use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, trace};

use super::collision;
use super::particle::Particle;

/// Fraction of each velocity component added or removed by
/// [`ParticleEngine::accelerate`] / [`ParticleEngine::decelerate`].
const SPEED_STEP: f32 = 0.1;

/// Owns the particles and advances them one tick at a time.
///
/// Each [`update`](Self::update) runs a fixed pipeline:
/// 1) advance every position by its velocity
/// 2) reflect particles heading into a wall
/// 3) sweep all pairs `(i, j)` with `i < j` and resolve elastic collisions
///
/// Steps 1 and 2 are independent per particle and run in parallel. Step 3 is
/// a single-threaded sweep in insertion order: a pair resolved early in the
/// sweep changes the velocities seen by later pairs of the same tick.
#[derive(Debug)]
pub struct ParticleEngine {
    bound: f32,
    particles: Vec<Particle>,
    rng: StdRng,
    ticks: u64,
}

impl ParticleEngine {
    /// Creates an empty box with side length `bound`, seeded from OS entropy.
    pub fn new(bound: f32) -> Self {
        Self::with_rng(bound, StdRng::from_os_rng())
    }

    /// Creates an empty box whose random particles are reproducible from `seed`.
    pub fn with_seed(bound: f32, seed: u64) -> Self {
        info!(bound, seed, "seeded particle engine");
        Self::with_rng(bound, StdRng::seed_from_u64(seed))
    }

    /// Creates an empty box drawing randomness from `rng`.
    pub fn with_rng(bound: f32, rng: StdRng) -> Self {
        debug!(bound, "created particle engine");
        Self {
            bound,
            particles: Vec::new(),
            rng,
            ticks: 0,
        }
    }

    /// Side length of the box.
    pub fn bound(&self) -> f32 {
        self.bound
    }

    /// Number of completed [`update`](Self::update) calls.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current particles in insertion order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advances the simulation by one tick.
    pub fn update(&mut self) {
        self.particles
            .par_iter_mut()
            .for_each(Particle::advance_position);

        let bound = self.bound;
        let wall_hits: usize = self
            .particles
            .par_iter_mut()
            .map(|p| collision::resolve_wall_collisions(p, bound))
            .sum();

        let pair_hits = if self.particles.len() > 1 {
            self.resolve_particle_collisions()
        } else {
            0
        };

        self.ticks += 1;
        trace!(tick = self.ticks, wall_hits, pair_hits, "tick");
    }

    /// Sequential all-pairs sweep. Returns the number of pairs resolved.
    fn resolve_particle_collisions(&mut self) -> usize {
        let mut resolved = 0;
        for i in 0..self.particles.len() - 1 {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let p1 = &mut head[i];
            for p2 in tail.iter_mut() {
                if collision::are_colliding(p1, p2) {
                    collision::resolve_pair(p1, p2);
                    resolved += 1;
                }
            }
        }
        resolved
    }

    /// Appends a particle with a random position and velocity.
    ///
    /// Position is uniform in `[1, bound - 1)` per axis. Each velocity
    /// component has a magnitude uniform in `[0, radius)` and a random sign.
    ///
    /// # Panics
    /// If `bound <= 2` or `radius <= 0`, as the sampling ranges are empty.
    pub fn generate_random_particle(&mut self, radius: f32, mass: f32, kind: usize) {
        let position = Vec2::new(
            self.rng.random_range(1.0..self.bound - 1.0),
            self.rng.random_range(1.0..self.bound - 1.0),
        );
        let velocity = Vec2::new(self.signed_speed(radius), self.signed_speed(radius));
        debug!(?position, ?velocity, kind, "generated random particle");
        self.particles
            .push(Particle::new(position, velocity, radius, mass, kind));
    }

    fn signed_speed(&mut self, max: f32) -> f32 {
        let magnitude = self.rng.random_range(0.0..max);
        if self.rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Appends `particle` as given.
    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Removes every particle.
    pub fn clear(&mut self) {
        info!(removed = self.particles.len(), "cleared particles");
        self.particles.clear();
    }

    /// Speeds every particle up by 10% per component.
    pub fn accelerate(&mut self) {
        self.particles
            .par_iter_mut()
            .for_each(|p| p.set_velocity(p.velocity() + p.velocity() * SPEED_STEP));
        info!(particles = self.particles.len(), "accelerated");
    }

    /// Slows every particle down by 10% per component.
    pub fn decelerate(&mut self) {
        self.particles
            .par_iter_mut()
            .for_each(|p| p.set_velocity(p.velocity() - p.velocity() * SPEED_STEP));
        info!(particles = self.particles.len(), "decelerated");
    }

    /// Total kinetic energy in the box.
    pub fn kinetic_energy(&self) -> f32 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Total momentum in the box.
    pub fn momentum(&self) -> Vec2 {
        self.particles.iter().map(Particle::momentum).sum()
    }
}
