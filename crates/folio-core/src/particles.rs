//! Decorative background particles for the hero section.

use rand::Rng;

/// One drifting particle. Positions are percentages of the container,
/// timings are in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
}

/// Generates `count` particles with randomized position, size, and timing.
///
/// - `x`, `y`: `[0, 100)` percent
/// - `size`: `[1, 3)` px
/// - `duration`: `[10, 25)` s
/// - `delay`: `[0, 15)` s
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..3.0),
            duration: rng.gen_range(10.0..25.0),
            delay: rng.gen_range(0.0..15.0),
        })
        .collect()
}
