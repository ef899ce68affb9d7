//! Validate a configuration file

use anyhow::Result;

pub fn run(config_path: &str) -> Result<()> {
    let config = super::load_config(Some(config_path))?;
    println!("{config_path}: ok");
    println!(
        "  particles: capacity {}, {} spawns/s, gravity {}",
        config.particles.capacity, config.particles.spawn_rate, config.particles.gravity
    );
    println!(
        "  lightning: pulses every {}..{}s, lasting {}..{}s",
        config.lightning.time_between_pulses.min,
        config.lightning.time_between_pulses.max,
        config.lightning.pulse_duration.min,
        config.lightning.pulse_duration.max
    );
    Ok(())
}
