//! Frame clock feeding elapsed time to the tween runner.

use web_time::{Duration, Instant};

/// Wall-clock frame timer: measures the elapsed time fed to the tween
/// runner each frame, with FPS smoothing and optional frame limiting.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Frame clock with the given FPS target (0 = unlimited), starting now.
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Frame clock whose first frame is measured from `start`.
    #[must_use]
    pub fn starting_at(target_fps: u32, start: Instant) -> Self {
        Self {
            target_fps,
            min_frame_duration: frame_interval(target_fps),
            last_frame: start,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.should_render_at(Instant::now())
    }

    /// [`should_render`](Self::should_render) against an explicit time.
    #[must_use]
    pub fn should_render_at(&self, now: Instant) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        now.saturating_duration_since(self.last_frame)
            >= self.min_frame_duration
    }

    /// Close the current frame and return its elapsed time.
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Close the current frame at `now` and return its elapsed time.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Configured FPS target (0 = unlimited).
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }
}

/// Duration of one frame at `fps` (zero when unlimited).
#[must_use]
pub fn frame_interval(fps: u32) -> Duration {
    if fps > 0 {
        Duration::from_secs_f64(1.0 / fps as f64)
    } else {
        Duration::ZERO
    }
}
