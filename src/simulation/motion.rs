//! Bounded motion integrator
//!
//! Moves a point by a fixed velocity every tick and bounces it off the walls
//! of an axis-aligned box. The box is shrunk by a margin derived from the
//! object's size so the drawn object, not just its center, stays inside.
//!
//! Integration is one explicit Euler step per tick with no delta time, so the
//! on-screen speed follows the frame rate.

use cgmath::Vector3;

/// Fraction of the object size kept clear of each wall
pub const MARGIN_FACTOR: f32 = 0.75;

/// Axis-aligned box described by its min and max corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Bounds {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Cube centered on the origin reaching `half_extent` along each axis
    pub fn cube(half_extent: f32) -> Self {
        Self::new(
            Vector3::new(-half_extent, -half_extent, -half_extent),
            Vector3::new(half_extent, half_extent, half_extent),
        )
    }

    /// Shrinks the box by `margin` on every side
    pub fn inset(&self, margin: f32) -> Self {
        let m = Vector3::new(margin, margin, margin);
        Self::new(self.min + m, self.max - m)
    }

    /// The box an object of `object_size` may move in
    pub fn effective(&self, object_size: f32) -> Self {
        self.inset(MARGIN_FACTOR * object_size)
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    /// Inclusive containment test
    pub fn contains(&self, point: Vector3<f32>) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::cube(4.0)
    }
}

/// Result of one integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub position: Vector3<f32>,
    pub velocity: Vector3<f32>,
    /// Axes whose velocity was reflected this tick
    pub reflected: [bool; 3],
}

/// Advances `position` by `velocity` and reflects off the inset walls
///
/// An axis reflects when the new coordinate is at or beyond either wall.
/// The comparison is inclusive, so landing exactly on a wall also flips the
/// velocity. Reflected coordinates are clamped back onto the wall.
///
/// Never fails. A non-positive `object_size` only changes the margin.
pub fn advance(
    position: Vector3<f32>,
    velocity: Vector3<f32>,
    bounds: &Bounds,
    object_size: f32,
) -> Step {
    let limits = bounds.effective(object_size);

    let mut position = position + velocity;
    let mut velocity = velocity;
    let mut reflected = [false; 3];

    for axis in 0..3 {
        let (lo, hi) = (limits.min[axis], limits.max[axis]);
        let p = position[axis];

        if p <= lo || p >= hi {
            velocity[axis] = -velocity[axis];
            // max-then-min instead of f32::clamp, which panics when a large
            // object inverts the box
            position[axis] = p.min(hi).max(lo);
            reflected[axis] = true;
        }
    }

    Step {
        position,
        velocity,
        reflected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn room() -> Bounds {
        Bounds::cube(4.0)
    }

    #[test]
    fn test_effective_bounds() {
        let limits = room().effective(1.0);
        assert_eq!(limits.min, Vector3::new(-3.25, -3.25, -3.25));
        assert_eq!(limits.max, Vector3::new(3.25, 3.25, 3.25));
    }

    #[test]
    fn test_reflects_at_right_wall() {
        let step = advance(
            Vector3::new(3.2, 0.0, 0.0),
            Vector3::new(0.12, 0.08, 0.0),
            &room(),
            1.0,
        );

        assert_eq!(step.position.x, 3.25);
        assert!((step.position.y - 0.08).abs() < 1e-6);
        assert_eq!(step.velocity, Vector3::new(-0.12, 0.08, 0.0));
        assert!(step.reflected[0]);
        assert!(!step.reflected[1]);
    }

    #[test]
    fn test_free_flight_is_plain_addition() {
        let step = advance(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.5, -0.25, 0.125),
            &room(),
            1.0,
        );
        assert_eq!(step.position, Vector3::new(0.5, -0.25, 0.125));
        assert_eq!(step.velocity, Vector3::new(0.5, -0.25, 0.125));
        assert_eq!(step.reflected, [false; 3]);
    }

    #[test]
    fn test_exact_contact_reflects() {
        // Lands exactly on the wall while moving outward
        let step = advance(
            Vector3::new(3.0, 0.0, 0.0),
            Vector3::new(0.25, 0.0, 0.0),
            &room(),
            1.0,
        );
        assert_eq!(step.position.x, 3.25);
        assert_eq!(step.velocity.x, -0.25);

        // A zero velocity component resting on a wall still "reflects"
        let step = advance(
            Vector3::new(0.0, 0.0, -3.25),
            Vector3::new(0.0, 0.0, 0.0),
            &room(),
            1.0,
        );
        assert!(step.reflected[2]);
        assert_eq!(step.position.z, -3.25);
    }

    #[test]
    fn test_reflection_heads_back_inside() {
        let bounds = room();
        let limits = bounds.effective(1.0);
        let first = advance(
            Vector3::new(3.2, 0.0, 0.0),
            Vector3::new(0.12, 0.0, 0.0),
            &bounds,
            1.0,
        );
        let second = advance(first.position, first.velocity, &bounds, 1.0);

        assert!(second.position.x < limits.max.x);
        assert!(second.position.x > limits.min.x);
        assert!(!second.reflected[0]);
        assert_eq!(second.velocity.x, -0.12);
    }

    #[test]
    fn test_large_object_does_not_panic() {
        // Margin larger than half the room inverts the box
        let step = advance(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.1, 0.1, 0.1),
            &room(),
            10.0,
        );
        assert!(step.reflected.iter().all(|&r| r));
        assert!(step.position.x.is_finite());
    }

    #[test]
    fn test_non_positive_size_means_no_margin() {
        let step = advance(
            Vector3::new(3.9, 0.0, 0.0),
            Vector3::new(0.05, 0.0, 0.0),
            &room(),
            0.0,
        );
        assert!(!step.reflected[0]);
        assert!((step.position.x - 3.95).abs() < 1e-6);
    }

    #[test]
    fn test_random_walks_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let bounds = room();

        for _ in 0..64 {
            let object_size = rng.random_range(0.1..2.0);
            let limits = bounds.effective(object_size);
            let mut position = Vector3::new(
                rng.random_range(limits.min.x..limits.max.x),
                rng.random_range(limits.min.y..limits.max.y),
                rng.random_range(limits.min.z..limits.max.z),
            );
            let mut velocity = Vector3::new(
                rng.random_range(-0.5..0.5),
                rng.random_range(-0.5..0.5),
                rng.random_range(-0.5..0.5),
            );

            for _ in 0..2_000 {
                let step = advance(position, velocity, &bounds, object_size);
                for axis in 0..3 {
                    if step.reflected[axis] {
                        assert!(step.position[axis] >= limits.min[axis]);
                        assert!(step.position[axis] <= limits.max[axis]);
                        assert_eq!(step.velocity[axis], -velocity[axis]);
                    } else {
                        assert_eq!(step.velocity[axis], velocity[axis]);
                    }
                }
                assert!(limits.contains(step.position));
                position = step.position;
                velocity = step.velocity;
            }
        }
    }
}
