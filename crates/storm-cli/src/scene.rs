//! Headless scene assembly: lightning and particles feeding a recording sink

use storm_core::{
    Color, FrameSink, RandomSource, Result, SceneContext, StormConfig, Transform, TransformSink,
};
use storm_lightning::LightningController;
use storm_particles::{InstanceBuffer, ParticlePool};
use storm_runtime::Animator;

/// Counters gathered by `RecordingSink`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrameStats {
    pub frames: u64,
    /// Rising edges of ambient intensity
    pub flashes: u64,
    pub lit_frames: u64,
    pub peak_intensity: f32,
    pub transform_writes: u64,
    pub uploads: u64,
}

/// Stands in for the renderer: keeps the instance buffer and ambient state
/// a real draw would consume, and counts what happened.
pub struct RecordingSink {
    instances: InstanceBuffer,
    ambient_color: Color,
    ambient_intensity: f32,
    background: Color,
    stats: FrameStats,
}

impl RecordingSink {
    pub fn new(slots: usize, ambient_color: Color) -> Self {
        Self {
            instances: InstanceBuffer::new(slots),
            ambient_color,
            ambient_intensity: 0.0,
            background: Color::BLACK,
            stats: FrameStats::default(),
        }
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = FrameStats::default();
    }

    pub fn instances(&self) -> &InstanceBuffer {
        &self.instances
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Ambient light color scaled by the current intensity
    pub fn ambient_light(&self) -> [f32; 3] {
        let [r, g, b] = self.ambient_color.to_array();
        let i = self.ambient_intensity;
        [r * i, g * i, b * i]
    }
}

impl SceneContext for RecordingSink {
    fn set_ambient(&mut self, intensity: f32, background: Color) {
        if intensity > 0.0 && self.ambient_intensity <= 0.0 {
            self.stats.flashes += 1;
        }
        self.stats.peak_intensity = self.stats.peak_intensity.max(intensity);
        self.ambient_intensity = intensity;
        self.background = background;
    }
}

impl TransformSink for RecordingSink {
    fn slot_count(&self) -> usize {
        self.instances.slot_count()
    }

    fn set_transform(&mut self, slot: usize, transform: &Transform) {
        self.instances.set_transform(slot, transform);
        self.stats.transform_writes += 1;
    }
}

impl FrameSink for RecordingSink {
    fn present(&mut self) -> Result<()> {
        self.stats.frames += 1;
        if self.ambient_intensity > 0.0 {
            self.stats.lit_frames += 1;
        }
        if self.instances.needs_upload() {
            self.stats.uploads += 1;
            self.instances.mark_uploaded();
        }
        Ok(())
    }
}

/// Counters owned by the systems themselves
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemCounters {
    pub pulses: u64,
    pub flashes: u64,
    pub active_particles: usize,
    pub recycles: u64,
}

impl SystemCounters {
    /// Read the lightning and particle counters out of `animator`.
    /// Systems that were never registered report zero.
    pub fn collect(animator: &Animator) -> Self {
        let mut counters = Self::default();
        if let Some(lightning) = animator.system::<LightningController>() {
            counters.pulses = lightning.pulse_count();
            counters.flashes = lightning.flash_count();
        }
        if let Some(pool) = animator.system::<ParticlePool>() {
            counters.active_particles = pool.active_count();
            counters.recycles = pool.recycle_count();
        }
        counters
    }
}

/// Wire lightning then particles into an animator sharing `rng`.
/// The sink comes back primed with identity transforms and zeroed stats.
pub fn build_scene(config: &StormConfig, rng: impl RandomSource + 'static) -> (Animator, RecordingSink) {
    let pool = ParticlePool::new(config.particles.clone());
    let mut sink = RecordingSink::new(pool.capacity(), Color::from_hex(config.scene.ambient_color));
    pool.prime(&mut sink);
    sink.reset_stats();

    let animator = Animator::new(rng)
        .with_system(LightningController::new(config.lightning.clone()))
        .with_system(pool);
    (animator, sink)
}
