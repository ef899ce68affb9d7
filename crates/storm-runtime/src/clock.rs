//! Frame clock driven by host timestamps

/// Simulation time for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Monotonic simulation time in seconds
    pub time: f64,
    /// Seconds since the previous frame, never negative
    pub elapsed: f64,
}

impl FrameTime {
    /// Build a frame from raw values, clamping a bad `elapsed` to zero.
    ///
    /// `time` is passed through; systems skip frames whose time is not finite.
    pub fn new(time: f64, elapsed: f64) -> Self {
        Self {
            time,
            elapsed: clamp_elapsed(elapsed),
        }
    }
}

/// Non-finite or negative frame deltas become zero
pub fn clamp_elapsed(elapsed: f64) -> f64 {
    if elapsed.is_finite() && elapsed > 0.0 {
        elapsed
    } else {
        0.0
    }
}

/// Turns the timestamps a host scheduler hands out (one per display frame)
/// into monotonic `FrameTime`s.
///
/// Bad timestamps (NaN, infinite, negative, or earlier than the previous one)
/// repeat the previous frame time with zero elapsed.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_time: f64,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `timestamp` seconds. Call once per frame.
    pub fn advance(&mut self, timestamp: f64) -> FrameTime {
        let time = if timestamp.is_finite() && timestamp >= self.last_time {
            timestamp
        } else {
            log::trace!(
                "clock: ignoring timestamp {timestamp}, holding at {}",
                self.last_time
            );
            self.last_time
        };

        let elapsed = time - self.last_time;
        self.last_time = time;
        self.frame_count += 1;
        FrameTime::new(time, elapsed)
    }

    /// Advance to a millisecond timestamp, as `requestAnimationFrame`-style hosts supply
    pub fn advance_millis(&mut self, timestamp_ms: f64) -> FrameTime {
        self.advance(timestamp_ms * 0.001)
    }

    /// Time of the most recent frame in seconds
    pub fn time(&self) -> f64 {
        self.last_time
    }

    /// Number of frames advanced so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = FrameClock::new();
        assert_eq!(clock.time(), 0.0);
        assert_eq!(clock.frame_count(), 0);
    }

    #[test]
    fn test_first_frame_measures_from_zero() {
        let mut clock = FrameClock::new();
        let frame = clock.advance(0.5);
        assert_eq!(frame.time, 0.5);
        assert_eq!(frame.elapsed, 0.5);
    }

    #[test]
    fn test_elapsed_between_frames() {
        let mut clock = FrameClock::new();
        clock.advance(1.0);
        let frame = clock.advance(1.25);
        assert!((frame.elapsed - 0.25).abs() < 1e-12);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_millis() {
        let mut clock = FrameClock::new();
        let frame = clock.advance_millis(1500.0);
        assert!((frame.time - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_bad_timestamps_hold_time() {
        let mut clock = FrameClock::new();
        clock.advance(2.0);

        for bad in [f64::NAN, f64::INFINITY, -1.0, 1.0] {
            let frame = clock.advance(bad);
            assert_eq!(frame.time, 2.0);
            assert_eq!(frame.elapsed, 0.0);
        }

        let frame = clock.advance(2.5);
        assert!((frame.elapsed - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_frame_time_clamps_elapsed() {
        assert_eq!(FrameTime::new(1.0, f64::NAN).elapsed, 0.0);
        assert_eq!(FrameTime::new(1.0, -0.1).elapsed, 0.0);
        assert_eq!(FrameTime::new(1.0, 0.1).elapsed, 0.1);
    }
}
