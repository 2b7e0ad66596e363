use glam::Vec2;

use crate::error::{Error, Result};

/// One circular body in the box.
///
/// Radius, mass and type tag are fixed at construction. Position and velocity
/// are in pixel units, velocity being the displacement applied per tick.
/// The type tag only groups particles for rendering and statistics; the
/// physics never looks at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    mass: f32,
    kind: usize,
}

impl Particle {
    /// Creates a particle without checking its parameters.
    ///
    /// Callers must pass a positive radius and mass; the collision resolver
    /// divides by the mass sum.
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, mass: f32, kind: usize) -> Self {
        Self {
            position,
            velocity,
            radius,
            mass,
            kind,
        }
    }

    /// Creates a particle after validating its invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `radius` or `mass` is non-positive, or any
    ///   component of `position`/`velocity` is NaN or infinite.
    pub fn try_new(
        position: Vec2,
        velocity: Vec2,
        radius: f32,
        mass: f32,
        kind: usize,
    ) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !position.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !velocity.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self::new(position, velocity, radius, mass, kind))
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Species tag supplied at construction.
    pub fn kind(&self) -> usize {
        self.kind
    }

    /// Replaces the velocity unconditionally.
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Moves the particle by one tick's worth of velocity.
    ///
    /// No bounds checking happens here; the wall pass corrects the heading
    /// of anything that has crossed an edge.
    #[inline]
    pub fn advance_position(&mut self) {
        self.position += self.velocity;
    }

    /// Magnitude of the velocity.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// 1/2 m |v|^2
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// m v
    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.mass * self.velocity
    }
}
