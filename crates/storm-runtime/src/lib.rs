//! Storm Runtime - Frame loop infrastructure
//!
//! Provides the per-frame building blocks:
//! - `FrameClock` / `FrameTime` — host timestamps turned into sanitized time and elapsed time
//! - `FrameSystem` — trait for systems ticked once per frame
//! - `Animator` — runs systems in registration order against one shared random stream, then presents

mod animator;
mod clock;
mod system;

pub use animator::Animator;
pub use clock::{clamp_elapsed, FrameClock, FrameTime};
pub use system::FrameSystem;
