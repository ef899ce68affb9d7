//! Storm Core - Foundational types for the Storm scene
//!
//! This crate provides the types every other Storm crate depends on:
//! - `Color`, `Transform` - Render-facing value types
//! - `StormConfig` - Tunable constants loaded from TOML
//! - `RandomSource` - Injectable uniform generator (`Xorshift64`, `ScriptedRandom`)
//! - `SceneContext`, `TransformSink`, `FrameSink` - Narrow render collaborator interfaces
//! - Error types and Result alias

pub mod config;
mod error;
mod random;
mod sink;
mod types;

pub use config::{
    DurationRange, LightningConfig, ParticleConfig, RotationClock, SceneConfig, StormConfig,
};
pub use error::{Result, StormError};
pub use random::{RandomSource, ScriptedRandom, Xorshift64};
pub use sink::{FrameSink, SceneContext, TransformSink};
pub use types::{Color, Transform};
