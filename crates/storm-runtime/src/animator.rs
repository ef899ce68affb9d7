//! Ordered per-frame driver

use crate::clock::{FrameClock, FrameTime};
use crate::system::FrameSystem;
use storm_core::{FrameSink, RandomSource, Result};

/// Owns the frame clock, the shared random stream and the registered systems.
///
/// Each `animate` call advances the clock, updates every system in
/// registration order, then presents the frame.
pub struct Animator {
    clock: FrameClock,
    rng: Box<dyn RandomSource>,
    systems: Vec<Box<dyn FrameSystem>>,
}

impl Animator {
    pub fn new(rng: impl RandomSource + 'static) -> Self {
        Self {
            clock: FrameClock::new(),
            rng: Box::new(rng),
            systems: Vec::new(),
        }
    }

    /// Register a system; it runs after every system registered before it
    pub fn add_system(&mut self, system: impl FrameSystem + 'static) {
        log::debug!("animator: registered system '{}'", system.name());
        self.systems.push(Box::new(system));
    }

    pub fn with_system(mut self, system: impl FrameSystem + 'static) -> Self {
        self.add_system(system);
        self
    }

    /// Run one frame at `timestamp` seconds
    pub fn animate(&mut self, timestamp: f64, sink: &mut dyn FrameSink) -> Result<FrameTime> {
        let frame = self.clock.advance(timestamp);
        for system in &mut self.systems {
            system.update(frame, self.rng.as_mut(), sink)?;
        }
        sink.present()?;
        Ok(frame)
    }

    /// Run one frame at a millisecond timestamp
    pub fn animate_millis(&mut self, timestamp_ms: f64, sink: &mut dyn FrameSink) -> Result<FrameTime> {
        self.animate(timestamp_ms * 0.001, sink)
    }

    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    /// First registered system of type `T`
    pub fn system<T: FrameSystem + 'static>(&self) -> Option<&T> {
        self.systems.iter().find_map(|s| s.as_any().downcast_ref::<T>())
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;
    use std::cell::RefCell;
    use std::rc::Rc;
    use storm_core::{Color, SceneContext, ScriptedRandom, StormError, Transform, TransformSink};

    type Log = Rc<RefCell<Vec<String>>>;

    struct Recorder {
        name: &'static str,
        log: Log,
    }

    impl FrameSystem for Recorder {
        fn update(
            &mut self,
            frame: FrameTime,
            rng: &mut dyn RandomSource,
            _sink: &mut dyn FrameSink,
        ) -> Result<()> {
            let draw = rng.next_f64();
            self.log
                .borrow_mut()
                .push(format!("{}@{}:{}", self.name, frame.time, draw));
            Ok(())
        }

        fn name(&self) -> &str {
            self.name
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct Failing;

    impl FrameSystem for Failing {
        fn update(&mut self, _: FrameTime, _: &mut dyn RandomSource, _: &mut dyn FrameSink) -> Result<()> {
            Err(StormError::ValidationError("boom".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct CountingSink {
        log: Log,
    }

    impl SceneContext for CountingSink {
        fn set_ambient(&mut self, _intensity: f32, _background: Color) {}
    }

    impl TransformSink for CountingSink {
        fn slot_count(&self) -> usize {
            0
        }

        fn set_transform(&mut self, _slot: usize, _transform: &Transform) {}
    }

    impl FrameSink for CountingSink {
        fn present(&mut self) -> Result<()> {
            self.log.borrow_mut().push("present".to_string());
            Ok(())
        }
    }

    #[test]
    fn systems_run_in_registration_order_then_present() {
        let log: Log = Rc::default();
        let mut animator = Animator::new(ScriptedRandom::new(vec![0.25, 0.5]))
            .with_system(Recorder { name: "lightning", log: log.clone() })
            .with_system(Recorder { name: "particles", log: log.clone() });
        let mut sink = CountingSink { log: log.clone() };

        animator.animate(1.0, &mut sink).unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["lightning@1:0.25", "particles@1:0.5", "present"]
        );
        assert_eq!(animator.system_names(), vec!["lightning", "particles"]);
    }

    #[test]
    fn typed_lookup_finds_registered_system() {
        let log: Log = Rc::default();
        let animator = Animator::new(ScriptedRandom::default())
            .with_system(Failing)
            .with_system(Recorder { name: "late", log });
        assert_eq!(animator.system::<Recorder>().map(|p| p.name), Some("late"));
        assert!(animator.system::<Failing>().is_some());

        let empty = Animator::new(ScriptedRandom::default());
        assert!(empty.system::<Recorder>().is_none());
    }

    #[test]
    fn animate_sanitizes_time() {
        let log: Log = Rc::default();
        let mut animator = Animator::new(ScriptedRandom::new(vec![0.0]));
        let mut sink = CountingSink { log };

        animator.animate_millis(2000.0, &mut sink).unwrap();
        let frame = animator.animate(f64::NAN, &mut sink).unwrap();
        assert_eq!(frame.time, 2.0);
        assert_eq!(frame.elapsed, 0.0);
        assert_eq!(animator.clock().frame_count(), 2);
    }

    #[test]
    fn system_error_skips_present() {
        let log: Log = Rc::default();
        let mut animator = Animator::new(ScriptedRandom::default()).with_system(Failing);
        let mut sink = CountingSink { log: log.clone() };

        assert!(animator.animate(0.0, &mut sink).is_err());
        assert!(log.borrow().is_empty());
    }
}
