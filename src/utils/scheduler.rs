use super::{Config, FpsLimiter};
use std::{ops::ControlFlow, time::Instant};

/// Drives a per-frame closure with monotonically increasing timestamps in
/// milliseconds. The loop ends when the closure returns `ControlFlow::Break`.
pub trait Scheduler {
    fn run(&mut self, frame: &mut dyn FnMut(f64) -> ControlFlow<()>);
}

/// Advances the clock by a constant amount per frame without waiting.
pub struct FixedStepScheduler {
    pub start: f64,
    frame_time: f64,
}

impl FixedStepScheduler {
    /// A rate that is not a positive finite number falls back to
    /// [`Config::MAX_FPS`].
    pub fn new(max_fps: f64) -> Self {
        let fps = if max_fps.is_finite() && max_fps > 0. {
            max_fps
        } else {
            Config::MAX_FPS
        };
        Self {
            start: 0.,
            frame_time: 1e3 / fps,
        }
    }

    /// Milliseconds between consecutive timestamps.
    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }
}

impl Scheduler for FixedStepScheduler {
    fn run(&mut self, frame: &mut dyn FnMut(f64) -> ControlFlow<()>) {
        let mut frames = 0u64;
        loop {
            let time = self.start + frames as f64 * self.frame_time;
            if frame(time).is_break() {
                break;
            }
            frames += 1;
        }
    }
}

/// Uses wall-clock time and limits the frame rate.
pub struct RealtimeScheduler {
    pub max_fps: f64,
    limiter: FpsLimiter,
}

impl RealtimeScheduler {
    pub fn new(max_fps: f64) -> Self {
        Self {
            max_fps,
            limiter: FpsLimiter::default(),
        }
    }
}

impl Scheduler for RealtimeScheduler {
    fn run(&mut self, frame: &mut dyn FnMut(f64) -> ControlFlow<()>) {
        let timer = Instant::now();
        loop {
            if frame(timer.elapsed().as_secs_f64() * 1e3).is_break() {
                break;
            }
            self.limiter.sleep(self.max_fps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedStepScheduler, RealtimeScheduler, Scheduler};
    use std::ops::ControlFlow;

    #[test]
    fn test_fixed_step_timestamps() {
        let mut times = vec![];
        FixedStepScheduler::new(50.).run(&mut |t| {
            times.push(t);
            if times.len() == 4 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(times, vec![0., 20., 40., 60.]);
    }

    #[test]
    fn test_fixed_step_rejects_bad_rates() {
        for max_fps in [0., -30., f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut scheduler = FixedStepScheduler::new(max_fps);
            assert_eq!(scheduler.frame_time(), 1e3 / 60.);

            let mut times: Vec<f64> = vec![];
            scheduler.run(&mut |t| {
                times.push(t);
                if times.len() == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });
            assert!(times.iter().all(|t| t.is_finite()), "{:?}", times);
            assert!(times.windows(2).all(|w| w[0] < w[1]), "{:?}", times);
        }
    }

    #[test]
    fn test_realtime_survives_tiny_rate() {
        let mut frames = 0;
        RealtimeScheduler::new(1e-30).run(&mut |_| {
            frames += 1;
            if frames == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(frames, 3);
    }

    #[test]
    fn test_realtime_monotonic() {
        let mut times: Vec<f64> = vec![];
        RealtimeScheduler::new(1000.).run(&mut |t| {
            times.push(t);
            if times.len() == 5 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(times.len(), 5);
        assert!(times.windows(2).all(|w| w[0] < w[1]));
    }
}
