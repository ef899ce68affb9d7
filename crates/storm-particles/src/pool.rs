//! Fixed-capacity particle pool with FIFO ring recycling

use crate::particle::Particle;
use storm_core::{ParticleConfig, RandomSource, RotationClock, Transform, TransformSink};
use storm_runtime::clamp_elapsed;

/// Preallocated pool of falling particles.
///
/// Slots fill in index order until the pool is saturated; after that each
/// spawn overwrites the slot at `recycle_cursor` and advances it, wrapping at
/// capacity. Particles are never removed.
pub struct ParticlePool {
    config: ParticleConfig,
    particles: Vec<Particle>,
    active_count: usize,
    recycle_cursor: usize,
    last_spawn_time: f64,
    recycle_count: u64,
}

impl ParticlePool {
    /// Allocate every slot up front. A zero capacity is raised to one.
    pub fn new(config: ParticleConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            config,
            particles: vec![Particle::dormant(); capacity],
            active_count: 0,
            recycle_cursor: 0,
            last_spawn_time: 0.0,
            recycle_count: 0,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn is_saturated(&self) -> bool {
        self.active_count == self.particles.len()
    }

    /// Next slot to be overwritten once saturated
    pub fn recycle_cursor(&self) -> usize {
        self.recycle_cursor
    }

    /// Spawns that overwrote an existing particle
    pub fn recycle_count(&self) -> u64 {
        self.recycle_count
    }

    /// Spawned particles (first `active_count` slots)
    pub fn particles(&self) -> &[Particle] {
        &self.particles[..self.active_count]
    }

    pub fn particle(&self, slot: usize) -> Option<&Particle> {
        self.particles().get(slot)
    }

    /// Reset every slot of `sink` to the identity transform
    pub fn prime<S>(&self, sink: &mut S)
    where
        S: TransformSink + ?Sized,
    {
        for slot in 0..self.capacity() {
            sink.set_transform(slot, &Transform::IDENTITY);
        }
    }

    /// Spawn into the next free slot, or overwrite the oldest one when full.
    /// Writes the fresh particle's transform and returns its slot.
    pub fn spawn_or_recycle<S>(&mut self, time: f64, rng: &mut dyn RandomSource, sink: &mut S) -> usize
    where
        S: TransformSink + ?Sized,
    {
        let slot = if self.active_count < self.particles.len() {
            let slot = self.active_count;
            self.active_count += 1;
            if self.is_saturated() {
                log::info!("particles: pool saturated at {} slots", self.capacity());
            }
            slot
        } else {
            let slot = self.recycle_cursor;
            self.recycle_cursor = (self.recycle_cursor + 1) % self.particles.len();
            self.recycle_count += 1;
            slot
        };

        let particle = Particle::spawn(&self.config, rng);
        let spin = spin_time(self.config.rotation_clock, &particle, time);
        sink.set_transform(slot, &particle.transform(self.config.gravity, spin));
        self.particles[slot] = particle;
        slot
    }

    /// Advance one frame. Spawns at most one particle when the spawn interval
    /// has passed, then moves every other active particle and writes its
    /// transform. Returns the slot spawned this frame, if any.
    ///
    /// A non-finite `time` skips the frame; a bad `elapsed` is treated as zero.
    pub fn update<S>(
        &mut self,
        time: f64,
        elapsed: f64,
        rng: &mut dyn RandomSource,
        sink: &mut S,
    ) -> Option<usize>
    where
        S: TransformSink + ?Sized,
    {
        if !time.is_finite() {
            log::warn!("particles: non-finite time {time}, skipping frame");
            return None;
        }
        let elapsed = clamp_elapsed(elapsed);

        let spawned = if time - self.last_spawn_time >= self.config.spawn_interval() {
            self.last_spawn_time = time;
            Some(self.spawn_or_recycle(time, rng, sink))
        } else {
            None
        };

        let gravity = self.config.gravity;
        let clock = self.config.rotation_clock;
        for (slot, particle) in self.particles[..self.active_count].iter_mut().enumerate() {
            if spawned == Some(slot) {
                continue;
            }
            particle.alive_time += elapsed;
            let spin = spin_time(clock, particle, time);
            sink.set_transform(slot, &particle.transform(gravity, spin));
        }

        spawned
    }
}

fn spin_time(clock: RotationClock, particle: &Particle, time: f64) -> f64 {
    match clock {
        RotationClock::Simulation => time,
        RotationClock::Lifetime => particle.alive_time,
    }
}
