//! Tunable constants for the lightning controller, the particle pool and the scene
//!
//! Everything can be overridden from a `storm.toml` file; missing tables and
//! fields fall back to the defaults below.

use crate::error::{Result, StormError};
use crate::random::RandomSource;
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inclusive-exclusive span of seconds, sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationRange {
    pub min: f64,
    pub max: f64,
}

impl DurationRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draws one value from [min, max)
    pub fn sample(&self, rng: &mut dyn RandomSource) -> f64 {
        rng.range(self.min, self.max)
    }

    fn validate(&self, field: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min < 0.0 {
            return Err(StormError::ValueOutOfRange {
                field: format!("{field}.min"),
                min: 0.0,
                max: f64::MAX,
                value: self.min,
            });
        }
        if self.min > self.max {
            return Err(StormError::InvertedRange {
                field: field.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Timers and output scaling for the lightning controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightningConfig {
    /// Idle gap before the next pulse
    pub time_between_pulses: DurationRange,
    /// Dark gap between flashes inside a pulse
    pub time_between_flashes: DurationRange,
    pub pulse_duration: DurationRange,
    pub flash_duration: DurationRange,
    /// Ambient intensity per unit of flash power
    pub intensity_scale: f32,
    /// Flash power is `(U(0,1) + offset) * scale`
    pub flash_power_offset: f32,
    pub flash_power_scale: f32,
    /// Background shown while no flash is lit (0xRRGGBB)
    pub baseline_background: u32,
}

impl Default for LightningConfig {
    fn default() -> Self {
        Self {
            time_between_pulses: DurationRange::new(0.5, 3.0),
            time_between_flashes: DurationRange::new(0.04, 0.3),
            pulse_duration: DurationRange::new(1.0, 4.0),
            flash_duration: DurationRange::new(0.04, 0.2),
            intensity_scale: 25.0,
            flash_power_offset: 0.1,
            flash_power_scale: 0.8,
            baseline_background: 0x003141,
        }
    }
}

impl LightningConfig {
    pub fn baseline_color(&self) -> Color {
        Color::from_hex(self.baseline_background)
    }

    pub fn validate(&self) -> Result<()> {
        self.time_between_pulses
            .validate("lightning.time_between_pulses")?;
        self.time_between_flashes
            .validate("lightning.time_between_flashes")?;
        self.pulse_duration.validate("lightning.pulse_duration")?;
        self.flash_duration.validate("lightning.flash_duration")?;
        non_negative("lightning.intensity_scale", self.intensity_scale as f64)?;
        non_negative("lightning.flash_power_offset", self.flash_power_offset as f64)?;
        non_negative("lightning.flash_power_scale", self.flash_power_scale as f64)?;
        let peak = (1.0 + self.flash_power_offset as f64) * self.flash_power_scale as f64;
        if peak > 1.0 {
            return Err(StormError::ValueOutOfRange {
                field: "lightning.flash_power_scale * (1 + flash_power_offset)".to_string(),
                min: 0.0,
                max: 1.0,
                value: peak,
            });
        }
        if self.baseline_background > 0xFF_FFFF {
            return Err(StormError::ValidationError(format!(
                "lightning.baseline_background must be a 0xRRGGBB value, got {:#x}",
                self.baseline_background
            )));
        }
        Ok(())
    }
}

/// Which clock drives particle spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationClock {
    /// Spin angle is `rate * simulation_time`, shared by every particle
    #[default]
    Simulation,
    /// Spin angle is `rate * alive_time`, restarting at each respawn
    Lifetime,
}

/// Pool size, spawn cadence and motion constants for falling particles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub capacity: usize,
    /// Downward acceleration in units/s²
    pub gravity: f32,
    /// Spawn ticks per second (at most one per frame)
    pub spawn_rate: f64,
    /// Width of the square spawn area centered on the origin
    pub position_range: f32,
    /// Upper bound on spin, radians per second
    pub max_rotation_speed: f32,
    pub rotation_clock: RotationClock,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            capacity: 15_000,
            gravity: 25.0,
            spawn_rate: 5000.0,
            position_range: 100.0,
            max_rotation_speed: 2.0 * std::f32::consts::PI * 0.7,
            rotation_clock: RotationClock::Simulation,
        }
    }
}

impl ParticleConfig {
    /// Minimum simulation time between two spawn ticks
    pub fn spawn_interval(&self) -> f64 {
        1.0 / self.spawn_rate
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(StormError::ValidationError(
                "particles.capacity must be at least 1".to_string(),
            ));
        }
        if !self.spawn_rate.is_finite() || self.spawn_rate <= 0.0 {
            return Err(StormError::ValueOutOfRange {
                field: "particles.spawn_rate".to_string(),
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
                value: self.spawn_rate,
            });
        }
        if !(self.position_range > 0.0 && self.position_range.is_finite()) {
            return Err(StormError::ValueOutOfRange {
                field: "particles.position_range".to_string(),
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
                value: self.position_range as f64,
            });
        }
        non_negative("particles.gravity", self.gravity as f64)?;
        non_negative("particles.max_rotation_speed", self.max_rotation_speed as f64)?;
        Ok(())
    }
}

/// Scene-level values the headless runner needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Tint of the ambient light the flashes drive (0xRRGGBB)
    pub ambient_color: u32,
    /// Frame rate used when the host does not supply timestamps
    pub frames_per_second: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ambient_color: 0xAACCFF,
            frames_per_second: 60.0,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.frames_per_second.is_finite() || self.frames_per_second <= 0.0 {
            return Err(StormError::ValueOutOfRange {
                field: "scene.frames_per_second".to_string(),
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
                value: self.frames_per_second,
            });
        }
        Ok(())
    }
}

/// Root of `storm.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StormConfig {
    pub lightning: LightningConfig,
    pub particles: ParticleConfig,
    pub scene: SceneConfig,
}

impl StormConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: StormConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.lightning.validate()?;
        self.particles.validate()?;
        self.scene.validate()
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StormError::ValueOutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: f64::MAX,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn default_config_is_sane() {
        let config = StormConfig::default();
        config.validate().unwrap();
        assert_eq!(config.lightning.time_between_pulses, DurationRange::new(0.5, 3.0));
        assert_eq!(config.lightning.time_between_flashes, DurationRange::new(0.04, 0.3));
        assert_eq!(config.lightning.pulse_duration, DurationRange::new(1.0, 4.0));
        assert_eq!(config.lightning.flash_duration, DurationRange::new(0.04, 0.2));
        assert_eq!(config.particles.capacity, 15_000);
        assert!((config.particles.gravity - 25.0).abs() < 1e-6);
        assert!((config.particles.spawn_interval() - 0.0002).abs() < 1e-12);
        assert_eq!(config.particles.rotation_clock, RotationClock::Simulation);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml_str = r#"
[lightning]
flash_duration = { min = 0.1, max = 0.5 }
baseline_background = 0x000000

[particles]
capacity = 3
rotation_clock = "lifetime"
"#;
        let config = StormConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.lightning.flash_duration, DurationRange::new(0.1, 0.5));
        assert_eq!(config.lightning.pulse_duration, DurationRange::new(1.0, 4.0));
        assert_eq!(config.lightning.baseline_color(), Color::BLACK);
        assert_eq!(config.particles.capacity, 3);
        assert_eq!(config.particles.rotation_clock, RotationClock::Lifetime);
        assert!((config.particles.gravity - 25.0).abs() < 1e-6);
        assert_eq!(config.scene, SceneConfig::default());
    }

    #[test]
    fn serialized_defaults_parse_back() {
        let text = StormConfig::default().to_toml_string().unwrap();
        let parsed = StormConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, StormConfig::default());
    }

    #[test]
    fn inverted_range_rejected() {
        let toml_str = "[lightning]\npulse_duration = { min = 4.0, max = 1.0 }\n";
        let err = StormConfig::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, StormError::InvertedRange { .. }));
    }

    #[test]
    fn flash_power_above_white_rejected() {
        let toml_str = "[lightning]\nflash_power_offset = 0.5\nflash_power_scale = 0.8\n";
        let err = StormConfig::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, StormError::ValueOutOfRange { max, .. } if max == 1.0));

        let at_limit = "[lightning]\nflash_power_offset = 0.0\nflash_power_scale = 1.0\n";
        StormConfig::from_toml_str(at_limit).unwrap();
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = StormConfig::from_toml_str("[particles]\ncapacity = 0\n").unwrap_err();
        assert!(matches!(err, StormError::ValidationError(_)));
    }

    #[test]
    fn non_positive_spawn_rate_rejected() {
        let err = StormConfig::from_toml_str("[particles]\nspawn_rate = 0.0\n").unwrap_err();
        assert!(matches!(err, StormError::ValueOutOfRange { .. }));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = StormConfig::from_toml_str("[particles\n").unwrap_err();
        assert!(matches!(err, StormError::TomlParseError(_)));
    }

    #[test]
    fn duration_sample_uses_bounds() {
        let range = DurationRange::new(1.0, 4.0);
        let mut rng = ScriptedRandom::new(vec![0.0, 0.5]);
        assert!((range.sample(&mut rng) - 1.0).abs() < 1e-12);
        assert!((range.sample(&mut rng) - 2.5).abs() < 1e-12);
    }
}
