//! Storm Lightning - ambient flicker state machine
//!
//! A pulse is a multi-second episode; inside a pulse the controller fires
//! short flashes separated by dark gaps. Every boundary is a timer sampled
//! from the shared random source when the previous boundary is crossed.

mod controller;
mod state;

use std::any::Any;
use storm_core::{FrameSink, RandomSource, Result};
use storm_runtime::{FrameSystem, FrameTime};

pub use controller::{LightingFrame, LightningController};
pub use state::{FlashPhase, LightningState};

impl FrameSystem for LightningController {
    fn update(
        &mut self,
        frame: FrameTime,
        rng: &mut dyn RandomSource,
        sink: &mut dyn FrameSink,
    ) -> Result<()> {
        LightningController::update(self, frame.time, rng, sink);
        Ok(())
    }

    fn name(&self) -> &str {
        "lightning"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
