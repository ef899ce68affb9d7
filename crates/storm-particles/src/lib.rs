//! Storm Particles - pooled falling particles
//!
//! Provides a fixed-capacity particle field with:
//! - Preallocated storage and FIFO ring recycling once full
//! - Closed-form free fall (position is a pure function of alive time)
//! - Axis-angle spin per particle
//! - GPU instance packing for a single instanced draw call

pub mod buffer;
pub mod particle;
pub mod pool;

use std::any::Any;
use storm_core::{FrameSink, RandomSource, Result};
use storm_runtime::{FrameSystem, FrameTime};

pub use buffer::{InstanceBuffer, InstanceTransform};
pub use particle::{fall_displacement, Particle};
pub use pool::ParticlePool;

impl FrameSystem for ParticlePool {
    fn update(
        &mut self,
        frame: FrameTime,
        rng: &mut dyn RandomSource,
        sink: &mut dyn FrameSink,
    ) -> Result<()> {
        ParticlePool::update(self, frame.time, frame.elapsed, rng, sink);
        Ok(())
    }

    fn name(&self) -> &str {
        "particles"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
