//! Per-particle state and its transform

use glam::Vec3;
use std::f64::consts::TAU;
use storm_core::{ParticleConfig, RandomSource, Transform};

/// CPU-side particle state (not sent to GPU)
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Unit spin axis
    pub rotation_axis: Vec3,
    /// Spin in radians per second
    pub rotation_rate: f32,
    pub origin_x: f32,
    pub origin_z: f32,
    /// Seconds since this slot was last (re)spawned
    pub alive_time: f64,
}

impl Particle {
    /// Placeholder for slots that have never been spawned
    pub fn dormant() -> Self {
        Self {
            rotation_axis: Vec3::Y,
            rotation_rate: 0.0,
            origin_x: 0.0,
            origin_z: 0.0,
            alive_time: 0.0,
        }
    }

    /// Draw a fresh particle. Consumes six values from `rng`:
    /// origin x, origin z, axis x, y, z, then spin rate.
    pub fn spawn(config: &ParticleConfig, rng: &mut dyn RandomSource) -> Self {
        let half = config.position_range / 2.0;
        let origin_x = rng.range_f32(-half, half);
        let origin_z = rng.range_f32(-half, half);

        let axis = Vec3::new(
            rng.range_f32(-0.5, 0.5),
            rng.range_f32(-0.5, 0.5),
            rng.range_f32(-0.5, 0.5),
        );
        let rotation_rate = rng.range_f32(0.0, config.max_rotation_speed);

        Self {
            rotation_axis: axis.try_normalize().unwrap_or(Vec3::Y),
            rotation_rate,
            origin_x,
            origin_z,
            alive_time: 0.0,
        }
    }

    pub fn position(&self, gravity: f32) -> Vec3 {
        Vec3::new(
            self.origin_x,
            fall_displacement(self.alive_time, gravity),
            self.origin_z,
        )
    }

    /// Spin angle after `spin_time` seconds, wrapped to one turn
    pub fn spin_angle(&self, spin_time: f64) -> f32 {
        (self.rotation_rate as f64 * spin_time).rem_euclid(TAU) as f32
    }

    pub fn transform(&self, gravity: f32, spin_time: f64) -> Transform {
        Transform::from_position(self.position(gravity))
            .with_axis_angle(self.rotation_axis, self.spin_angle(spin_time))
    }
}

/// Vertical offset after falling from rest for `alive_time` seconds: `-½·g·t²`
pub fn fall_displacement(alive_time: f64, gravity: f32) -> f32 {
    (-0.5 * gravity as f64 * alive_time * alive_time) as f32
}
