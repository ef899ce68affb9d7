//! Simulate command — runs the scene headless for a fixed number of frames

use crate::scene::{build_scene, SystemCounters};
use anyhow::{Context, Result};
use std::time::Instant;
use storm_core::Xorshift64;

pub struct SimulateArgs {
    pub config: Option<String>,
    pub seed: u64,
    pub frames: u64,
    pub fps: Option<f64>,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let fps = args.fps.unwrap_or(config.scene.frames_per_second);
    if !fps.is_finite() || fps <= 0.0 {
        anyhow::bail!("Frame rate must be positive, got {}", fps);
    }

    let (mut animator, mut sink) = build_scene(&config, Xorshift64::new(args.seed));
    log::info!(
        "simulating {} frames at {} fps (seed {})",
        args.frames,
        fps,
        args.seed
    );

    let started = Instant::now();
    for frame in 0..args.frames {
        let timestamp = frame as f64 / fps;
        animator
            .animate(timestamp, &mut sink)
            .with_context(|| format!("Frame {frame} failed"))?;
    }
    let wall = started.elapsed();

    let stats = sink.stats();
    let counters = SystemCounters::collect(&animator);
    println!("Simulated {:.2}s of scene time in {:.1?}", animator.clock().time(), wall);
    println!();
    println!("Lightning:");
    println!("  Pulses:         {}", counters.pulses);
    println!("  Flashes:        {}", counters.flashes);
    println!("  Lit frames:     {} / {}", stats.lit_frames, stats.frames);
    println!("  Peak intensity: {:.2}", stats.peak_intensity);
    let [r, g, b] = sink.ambient_light();
    let bg = sink.background();
    println!("  Final ambient:  ({r:.2}, {g:.2}, {b:.2}), background ({:.3}, {:.3}, {:.3})", bg.r, bg.g, bg.b);
    println!();
    println!("Particles:");
    println!("  Active:         {} / {}", counters.active_particles, config.particles.capacity);
    println!("  Recycles:       {}", counters.recycles);
    println!("  Transform writes: {}", stats.transform_writes);
    println!("  Buffer uploads: {}", stats.uploads);
    println!("  Buffer size:    {} bytes", sink.instances().as_bytes().len());

    Ok(())
}
