//! Lightning state: idle, or pulsing with an optional lit flash

/// Flash sub-state inside a pulse
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlashPhase {
    /// Dark, waiting for the next flash
    Waiting { start_flash_at: f64 },
    /// Lit until `end_flash_at`
    Flashing { end_flash_at: f64 },
}

/// Two-level lightning state. A flash can only exist inside a pulse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightningState {
    Idle {
        start_pulse_at: f64,
    },
    Pulsing {
        /// Simulation time at which this pulse began
        started_at: f64,
        end_pulse_at: f64,
        flash: FlashPhase,
    },
}

impl Default for LightningState {
    fn default() -> Self {
        LightningState::Idle {
            start_pulse_at: 0.0,
        }
    }
}

impl LightningState {
    pub fn is_pulsing(&self) -> bool {
        matches!(self, LightningState::Pulsing { .. })
    }

    pub fn is_flashing(&self) -> bool {
        matches!(
            self,
            LightningState::Pulsing {
                flash: FlashPhase::Flashing { .. },
                ..
            }
        )
    }

    /// `(started_at, end_pulse_at)` of the current pulse
    pub fn pulse_window(&self) -> Option<(f64, f64)> {
        match *self {
            LightningState::Pulsing {
                started_at,
                end_pulse_at,
                ..
            } => Some((started_at, end_pulse_at)),
            LightningState::Idle { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_due_immediately() {
        let state = LightningState::default();
        assert_eq!(state, LightningState::Idle { start_pulse_at: 0.0 });
        assert!(!state.is_pulsing());
        assert!(!state.is_flashing());
        assert!(state.pulse_window().is_none());
    }

    #[test]
    fn flashing_implies_pulsing() {
        let state = LightningState::Pulsing {
            started_at: 1.0,
            end_pulse_at: 3.0,
            flash: FlashPhase::Flashing { end_flash_at: 1.1 },
        };
        assert!(state.is_flashing());
        assert!(state.is_pulsing());
        assert_eq!(state.pulse_window(), Some((1.0, 3.0)));
    }
}
