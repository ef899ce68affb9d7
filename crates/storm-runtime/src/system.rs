//! Frame system trait

use crate::clock::FrameTime;
use std::any::Any;
use storm_core::{FrameSink, RandomSource, Result};

/// A system that is ticked once per display frame
///
/// Systems are updated in registration order and all draw from the same
/// random source, so registration order is part of the observable output
/// for a given seed.
pub trait FrameSystem {
    /// Advance by one frame, writing results into `sink`
    fn update(
        &mut self,
        frame: FrameTime,
        rng: &mut dyn RandomSource,
        sink: &mut dyn FrameSink,
    ) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;

    /// Concrete system, for typed lookups through `Animator::system`
    fn as_any(&self) -> &dyn Any;
}
