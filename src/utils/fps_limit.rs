use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate and keeps a smoothed estimate of it.
pub struct FpsLimiter {
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for FpsLimiter {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }
}

impl FpsLimiter {
    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    /// Sleeps for the rest of the frame. Frames are not delayed if `max_fps`
    /// is not a positive number or its frame time does not fit a `Duration`.
    pub fn sleep(&mut self, max_fps: f64) {
        let before_wait = self.frame_timer.elapsed();

        if max_fps > 0. {
            if let Ok(target_frametime) = Duration::try_from_secs_f64(1. / max_fps) {
                if target_frametime > before_wait {
                    sleep(target_frametime - before_wait);
                }
            }
        }

        let after_wait = self.frame_timer.elapsed();
        let frametime = after_wait.as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
