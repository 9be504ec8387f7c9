use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const PARTICLE_COUNT: usize = 50;

const BASE_RADIUS: f64 = 60.0;
const RADIUS_SPREAD: f64 = 50.0;
const DRIFT_RANGE: f64 = 5.0;
const IDLE_BASE_SECS: f64 = 4.0;
const IDLE_SPREAD_SECS: f64 = 2.0;

/// One dot of the landing particle ring. Origins sit on a ring around the
/// viewport center; drift and idle duration give each dot its own wobble.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: usize,
    pub origin_x: f64,
    pub origin_y: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub idle_secs: f64,
}

/// Builds the particle ring. Randomness is injected so callers decide the
/// source: the UI passes `js_sys::Math::random`, tests pass a fixed closure.
pub fn scatter(count: usize, mut rng: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|index| {
            let angle = (index as f64 / count as f64) * 2.0 * PI;
            let random = rng();
            let radius = BASE_RADIUS + random * random * RADIUS_SPREAD;
            Particle {
                id: index,
                origin_x: angle.cos() * radius,
                origin_y: angle.sin() * radius,
                drift_x: rng() * DRIFT_RANGE - DRIFT_RANGE / 2.0,
                drift_y: rng() * DRIFT_RANGE - DRIFT_RANGE / 2.0,
                idle_secs: IDLE_BASE_SECS + rng() * IDLE_SPREAD_SECS,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_is_deterministic_for_a_fixed_source() {
        let a = scatter(10, || 0.5);
        let b = scatter(10, || 0.5);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }

    #[test]
    fn ids_are_sequential() {
        let particles = scatter(5, || 0.25);
        let ids: Vec<usize> = particles.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn origins_stay_on_the_ring_band() {
        let particles = scatter(PARTICLE_COUNT, || 0.999);
        for particle in &particles {
            let distance = (particle.origin_x.powi(2) + particle.origin_y.powi(2)).sqrt();
            assert!(distance >= BASE_RADIUS - 1e-9);
            assert!(distance <= BASE_RADIUS + RADIUS_SPREAD + 1e-9);
        }
    }

    #[test]
    fn drift_and_idle_stay_in_bounds() {
        let mut state = 0u32;
        let particles = scatter(PARTICLE_COUNT, move || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            f64::from(state >> 8) / f64::from(1u32 << 24)
        });
        for particle in &particles {
            assert!(particle.drift_x >= -2.5 && particle.drift_x < 2.5);
            assert!(particle.drift_y >= -2.5 && particle.drift_y < 2.5);
            assert!(particle.idle_secs >= 4.0 && particle.idle_secs < 6.0);
        }
    }

    #[test]
    fn empty_field_is_allowed() {
        assert!(scatter(0, || 0.5).is_empty());
    }
}
