//! Collision detection and resolution.
//!
//! Detection looks at relative motion as well as overlap: a contact only
//! counts while the bodies are still closing on each other, so resting or
//! separating contacts are never resolved twice.

use glam::Vec2;

use super::particle::Particle;

/// One edge of the square box. The low edges sit at coordinate 0, the high
/// edges at the box side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    /// x = 0
    Left,
    /// x = bound
    Right,
    /// y = 0
    Top,
    /// y = bound
    Bottom,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Left, Wall::Right, Wall::Top, Wall::Bottom];

    /// Index of the axis this wall is perpendicular to (0 = x, 1 = y).
    pub fn axis(self) -> usize {
        match self {
            Wall::Left | Wall::Right => 0,
            Wall::Top | Wall::Bottom => 1,
        }
    }

    fn is_low(self) -> bool {
        matches!(self, Wall::Left | Wall::Top)
    }
}

/// True when `particle` touches `wall` and is still heading into it.
pub fn is_colliding_with_wall(particle: &Particle, wall: Wall, bound: f32) -> bool {
    let axis = wall.axis();
    let pos = particle.position()[axis];
    let vel = particle.velocity()[axis];
    let radius = particle.radius();

    if wall.is_low() {
        pos - radius <= 0.0 && vel < 0.0
    } else {
        pos + radius >= bound && vel > 0.0
    }
}

/// Negates the velocity component perpendicular to `wall`.
pub fn reflect_off_wall(particle: &mut Particle, wall: Wall) {
    let mut velocity = particle.velocity();
    velocity[wall.axis()] = -velocity[wall.axis()];
    particle.set_velocity(velocity);
}

/// Runs the wall test on both axes and reflects where needed.
///
/// Each axis is checked independently, so a particle driving into a corner
/// has both components flipped. On one axis the low wall wins; the two can
/// never both fire since they require opposite velocity signs.
///
/// Returns the number of reflections applied (0, 1 or 2).
pub fn resolve_wall_collisions(particle: &mut Particle, bound: f32) -> usize {
    let mut reflections = 0;
    for (low, high) in [(Wall::Left, Wall::Right), (Wall::Top, Wall::Bottom)] {
        if is_colliding_with_wall(particle, low, bound) {
            reflect_off_wall(particle, low);
            reflections += 1;
        } else if is_colliding_with_wall(particle, high, bound) {
            reflect_off_wall(particle, high);
            reflections += 1;
        }
    }
    reflections
}

/// True when the two circles overlap (or touch) and are approaching.
///
/// Coincident centres never qualify: the relative position is zero, so the
/// approach test yields exactly 0.
pub fn are_colliding(p1: &Particle, p2: &Particle) -> bool {
    let touching = p1.position().distance(p2.position()) <= p1.radius() + p2.radius();
    touching && approach_rate(p1, p2) < 0.0
}

/// dot(v1 - v2, p1 - p2); negative while the pair is closing.
#[inline]
fn approach_rate(p1: &Particle, p2: &Particle) -> f32 {
    (p1.velocity() - p2.velocity()).dot(p1.position() - p2.position())
}

/// Post-collision velocity of `p1` after an elastic hit with `p2`:
///
/// v1' = v1 - 2 m2 / (m1 + m2) * dot(v1 - v2, p1 - p2) / |p1 - p2|^2 * (p1 - p2)
///
/// Swap the arguments for `p2`'s velocity. When the centres coincide the
/// line of centres is undefined and `p1`'s velocity is returned unchanged.
pub fn elastic_collision_velocity(p1: &Particle, p2: &Particle) -> Vec2 {
    let offset = p1.position() - p2.position();
    let dist_sq = offset.length_squared();
    if dist_sq == 0.0 {
        return p1.velocity();
    }
    let mass_factor = 2.0 * p2.mass() / (p1.mass() + p2.mass());
    p1.velocity() - mass_factor * approach_rate(p1, p2) / dist_sq * offset
}

/// Applies an elastic collision to both particles.
///
/// Both new velocities come from the pre-collision state.
pub fn resolve_pair(p1: &mut Particle, p2: &mut Particle) {
    let v1 = elastic_collision_velocity(p1, p2);
    let v2 = elastic_collision_velocity(p2, p1);
    p1.set_velocity(v1);
    p2.set_velocity(v2);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUND: f32 = 750.0;

    fn particle(pos: (f32, f32), vel: (f32, f32), mass: f32) -> Particle {
        Particle::new(Vec2::new(pos.0, pos.1), Vec2::new(vel.0, vel.1), 5.0, mass, 1)
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    #[test]
    fn low_wall_needs_inward_velocity() {
        let heading_in = particle((5.0, 50.0), (-3.0, 0.0), 1.0);
        let heading_out = particle((5.0, 50.0), (3.0, 0.0), 1.0);
        assert!(is_colliding_with_wall(&heading_in, Wall::Left, BOUND));
        assert!(!is_colliding_with_wall(&heading_out, Wall::Left, BOUND));
    }

    #[test]
    fn high_wall_uses_bound() {
        let p = particle((745.0, 50.0), (3.0, 4.0), 1.0);
        assert!(is_colliding_with_wall(&p, Wall::Right, BOUND));
        assert!(!is_colliding_with_wall(&p, Wall::Bottom, BOUND));
        assert!(!is_colliding_with_wall(&p, Wall::Right, 800.0));
    }

    #[test]
    fn resting_against_wall_is_not_a_collision() {
        let p = particle((5.0, 5.0), (0.0, 0.0), 1.0);
        for wall in Wall::ALL {
            assert!(!is_colliding_with_wall(&p, wall, BOUND));
        }
    }

    #[test]
    fn reflect_only_touches_one_axis() {
        let mut p = particle((5.0, 50.0), (-3.0, 4.0), 1.0);
        reflect_off_wall(&mut p, Wall::Left);
        assert_eq!(p.velocity(), Vec2::new(3.0, 4.0));
        reflect_off_wall(&mut p, Wall::Bottom);
        assert_eq!(p.velocity(), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn corner_reflects_both_components() {
        let mut p = particle((2.0, 1.0), (-3.0, -4.0), 1.0);
        assert_eq!(resolve_wall_collisions(&mut p, BOUND), 2);
        assert_eq!(p.velocity(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn separating_pair_in_contact_is_ignored() {
        let p1 = particle((10.0, 5.0), (-2.0, 1.0), 1.0);
        let p2 = particle((10.0, 4.0), (2.0, 0.0), 1.0);
        assert!(!are_colliding(&p1, &p2));
    }

    #[test]
    fn coincident_pair_is_ignored() {
        let p1 = particle((10.0, 5.0), (-2.0, 1.0), 1.0);
        let p2 = particle((10.0, 5.0), (2.0, 0.0), 1.0);
        assert!(!are_colliding(&p1, &p2));
        assert_eq!(elastic_collision_velocity(&p1, &p2), p1.velocity());
    }

    #[test]
    fn distant_pair_is_ignored_even_when_approaching() {
        let p1 = particle((10.0, 5.0), (2.0, 0.0), 1.0);
        let p2 = particle((30.0, 5.0), (-2.0, 0.0), 1.0);
        assert!(!are_colliding(&p1, &p2));
    }

    #[test]
    fn equal_masses_swap_normal_components() {
        let mut p1 = particle((7.0, 5.0), (2.0, 0.0), 1.0);
        let mut p2 = particle((8.0, 5.0), (-2.0, 0.0), 1.0);
        assert!(are_colliding(&p1, &p2));
        resolve_pair(&mut p1, &mut p2);
        assert_eq!(p1.velocity(), Vec2::new(-2.0, 0.0));
        assert_eq!(p2.velocity(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn unequal_masses_follow_closed_form() {
        let mut p1 = particle((7.0, 6.0), (2.0, 1.0), 5.0);
        let mut p2 = particle((8.0, 4.0), (-2.0, 1.0), 1.0);
        resolve_pair(&mut p1, &mut p2);
        assert!(close(p1.velocity(), Vec2::new(26.0 / 15.0, 23.0 / 15.0)));
        assert!(close(p2.velocity(), Vec2::new(-2.0 / 3.0, -5.0 / 3.0)));
    }

    #[test]
    fn pair_resolution_conserves_momentum_and_energy() {
        let mut p1 = particle((100.0, 100.0), (1.5, -0.5), 7.0);
        let mut p2 = particle((106.0, 103.0), (-2.0, -1.0), 1.0);
        assert!(are_colliding(&p1, &p2));
        let momentum = p1.momentum() + p2.momentum();
        let energy = p1.kinetic_energy() + p2.kinetic_energy();
        resolve_pair(&mut p1, &mut p2);
        assert!(close(p1.momentum() + p2.momentum(), momentum));
        assert!((p1.kinetic_energy() + p2.kinetic_energy() - energy).abs() < 1e-4);
        // No longer approaching afterwards.
        assert!(!are_colliding(&p1, &p2));
    }
}
