//! Interfaces to the render collaborator
//!
//! The simulation only ever writes through these traits; it never reads
//! render state back.

use crate::error::Result;
use crate::types::{Color, Transform};

/// Receives the ambient light and background produced by the lightning controller
pub trait SceneContext {
    fn set_ambient(&mut self, intensity: f32, background: Color);
}

/// Per-slot instance transforms written by the particle pool
pub trait TransformSink {
    /// Number of slots the buffer holds
    fn slot_count(&self) -> usize;

    /// Overwrite one slot. Writes past `slot_count()` are ignored.
    fn set_transform(&mut self, slot: usize, transform: &Transform);
}

/// The full render collaborator: ambient state, instance transforms and the draw itself
pub trait FrameSink: SceneContext + TransformSink {
    /// Draw the frame with everything written since the last call
    fn present(&mut self) -> Result<()>;
}
