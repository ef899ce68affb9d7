//! Lightning controller: advances the state machine and publishes ambient output

use crate::state::{FlashPhase, LightningState};
use storm_core::{Color, LightningConfig, RandomSource, SceneContext};

/// Ambient output for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingFrame {
    pub ambient_intensity: f32,
    pub background: Color,
}

/// Drives ambient intensity and background color through pulses and flashes.
///
/// Random draws per transition, in order:
/// - pulse start: pulse duration, then the first flash gap
/// - flash start: flash power, then flash duration
/// - flash end: next flash gap
/// - pulse end: next pulse gap
pub struct LightningController {
    config: LightningConfig,
    state: LightningState,
    output: LightingFrame,
    pulse_count: u64,
    flash_count: u64,
}

impl LightningController {
    pub fn new(config: LightningConfig) -> Self {
        let output = LightingFrame {
            ambient_intensity: 0.0,
            background: config.baseline_color(),
        };
        Self {
            config,
            state: LightningState::default(),
            output,
            pulse_count: 0,
            flash_count: 0,
        }
    }

    pub fn state(&self) -> LightningState {
        self.state
    }

    pub fn output(&self) -> LightingFrame {
        self.output
    }

    pub fn is_pulsing(&self) -> bool {
        self.state.is_pulsing()
    }

    pub fn is_flashing(&self) -> bool {
        self.state.is_flashing()
    }

    /// Pulses started since construction
    pub fn pulse_count(&self) -> u64 {
        self.pulse_count
    }

    /// Flashes started since construction
    pub fn flash_count(&self) -> u64 {
        self.flash_count
    }

    /// Advance to `time` and publish the resulting ambient state to `scene`.
    ///
    /// A non-finite `time` holds the current output without touching the
    /// random source.
    pub fn update<S>(&mut self, time: f64, rng: &mut dyn RandomSource, scene: &mut S) -> LightingFrame
    where
        S: SceneContext + ?Sized,
    {
        if time.is_finite() {
            self.step(time, rng);
        } else {
            log::warn!("lightning: non-finite time {time}, holding output");
        }
        scene.set_ambient(self.output.ambient_intensity, self.output.background);
        self.output
    }

    fn step(&mut self, time: f64, rng: &mut dyn RandomSource) {
        match self.state {
            LightningState::Idle { start_pulse_at } => {
                if time >= start_pulse_at {
                    let end_pulse_at = time + self.config.pulse_duration.sample(rng);
                    let start_flash_at = time + self.config.time_between_flashes.sample(rng);
                    self.state = LightningState::Pulsing {
                        started_at: time,
                        end_pulse_at,
                        flash: FlashPhase::Waiting { start_flash_at },
                    };
                    self.pulse_count += 1;
                    log::debug!("lightning: pulse started at {time:.3}s, ends at {end_pulse_at:.3}s");
                }
            }
            LightningState::Pulsing {
                started_at,
                end_pulse_at,
                flash,
            } => {
                if time >= end_pulse_at {
                    self.go_dark();
                    let start_pulse_at = time + self.config.time_between_pulses.sample(rng);
                    self.state = LightningState::Idle { start_pulse_at };
                    log::debug!("lightning: pulse ended at {time:.3}s, next at {start_pulse_at:.3}s");
                    return;
                }

                let flash = match flash {
                    FlashPhase::Flashing { end_flash_at } if time >= end_flash_at => {
                        self.go_dark();
                        let start_flash_at = time + self.config.time_between_flashes.sample(rng);
                        log::debug!("lightning: flash ended at {time:.3}s");
                        FlashPhase::Waiting { start_flash_at }
                    }
                    FlashPhase::Waiting { start_flash_at } if time >= start_flash_at => {
                        let power = self.flash_power(rng);
                        self.output = LightingFrame {
                            ambient_intensity: self.config.intensity_scale * power,
                            background: Color::gray(power),
                        };
                        let end_flash_at = time + self.config.flash_duration.sample(rng);
                        self.flash_count += 1;
                        log::debug!("lightning: flash started at {time:.3}s, power {power:.3}");
                        FlashPhase::Flashing { end_flash_at }
                    }
                    unchanged => unchanged,
                };

                self.state = LightningState::Pulsing {
                    started_at,
                    end_pulse_at,
                    flash,
                };
            }
        }
    }

    fn flash_power(&self, rng: &mut dyn RandomSource) -> f32 {
        (rng.range_f32(0.0, 1.0) + self.config.flash_power_offset) * self.config.flash_power_scale
    }

    fn go_dark(&mut self) {
        self.output = LightingFrame {
            ambient_intensity: 0.0,
            background: self.config.baseline_color(),
        };
    }
}
