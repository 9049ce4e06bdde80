use web_time::{Duration, Instant};

/// Frame delta timing with smoothed FPS and optional frame limiting.
///
/// The delta returned by [`FrameClock::tick`] is what camera movement is
/// scaled by.
pub struct FrameClock {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Seconds between the last two ticks
    delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a new clock with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            delta: 0.0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last tick to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark the start of a frame and return the seconds since the previous
    /// tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if self.delta > 0.0 {
            let instant_fps = 1.0 / self.delta;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.delta
    }

    /// Seconds between the last two ticks.
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_clock_always_renders() {
        let clock = FrameClock::new(0);
        assert!(clock.should_render());
        assert_eq!(clock.fps(), 60.0);
        assert_eq!(clock.delta(), 0.0);
    }

    #[test]
    fn tick_reports_elapsed_time() {
        let mut clock = FrameClock::new(0);
        std::thread::sleep(Duration::from_millis(5));
        let dt = clock.tick();
        assert!(dt >= 0.005);
        assert_eq!(clock.delta(), dt);
    }

    #[test]
    fn limited_clock_waits_for_frame_budget() {
        let mut clock = FrameClock::new(1);
        let _ = clock.tick();
        assert!(!clock.should_render());
    }
}
