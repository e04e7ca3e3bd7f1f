//! Frame driving: a clock abstraction plus the driver state machine that
//! turns host redraw callbacks into pose updates.
//!
//! The host event loop owns the actual scheduling primitive (winit's
//! redraw-requested callback); the driver only decides whether a tick runs
//! and what the elapsed time is, which keeps the loop testable without a
//! display surface.

use crate::pose::PoseState;

/// Monotonic time source in seconds.
pub trait Clock {
    fn now(&self) -> f32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f32 {
        (**self).now()
    }
}

/// Wall-clock seconds since construction.
#[cfg(not(target_arch = "wasm32"))]
pub struct SystemClock {
    epoch: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now(&self) -> f32 {
        self.epoch.elapsed().as_secs_f32()
    }
}

/// `performance.now()` in seconds.
#[cfg(target_arch = "wasm32")]
pub struct PerformanceClock;

#[cfg(target_arch = "wasm32")]
impl Clock for PerformanceClock {
    fn now(&self) -> f32 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| (p.now() / 1000.0) as f32)
            .unwrap_or(0.0)
    }
}

/// Hand-cranked clock for tests.
pub struct ManualClock {
    t: std::cell::Cell<f32>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            t: std::cell::Cell::new(0.0),
        }
    }

    pub fn set(&self, t: f32) {
        self.t.set(t);
    }

    pub fn advance(&self, dt: f32) {
        self.t.set(self.t.get() + dt);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f32 {
        self.t.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Stopped,
}

/// The frame loop's state machine: idle until started, then running until
/// explicitly stopped. While running, each [`tick`](Self::tick) recomputes
/// elapsed time since start and advances the pose; the host re-schedules
/// itself only while [`is_running`](Self::is_running) holds, which is the
/// cancellation path.
pub struct FrameDriver<C: Clock> {
    clock: C,
    start: f32,
    state: DriverState,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            start: 0.0,
            state: DriverState::Idle,
        }
    }

    /// Latch the epoch and enter the running state. Only the first call
    /// transitions; a running or stopped driver is unaffected.
    pub fn start(&mut self) {
        if self.state == DriverState::Idle {
            self.start = self.clock.now();
            self.state = DriverState::Running;
        }
    }

    /// Stop the loop. Subsequent ticks are no-ops.
    pub fn stop(&mut self) {
        if self.state == DriverState::Running {
            self.state = DriverState::Stopped;
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Seconds since start; zero before the first start.
    pub fn elapsed(&self) -> f32 {
        match self.state {
            DriverState::Idle => 0.0,
            _ => self.clock.now() - self.start,
        }
    }

    /// Run one frame's pose update. Returns the elapsed time the update
    /// used, or `None` when the driver is not running.
    pub fn tick(&mut self, pose: &mut PoseState) -> Option<f32> {
        if self.state != DriverState::Running {
            return None;
        }
        let t = self.clock.now() - self.start;
        pose.advance(t);
        Some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_driver_does_not_tick() {
        let mut driver = FrameDriver::new(ManualClock::new());
        let mut pose = PoseState::new();
        assert_eq!(driver.tick(&mut pose), None);
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn start_latches_epoch_once() {
        let clock = ManualClock::new();
        clock.set(5.0);
        let mut driver = FrameDriver::new(&clock);

        driver.start();
        assert!(driver.is_running());

        clock.set(7.0);
        // A second start must not re-latch the epoch.
        driver.start();

        let mut pose = PoseState::new();
        assert_eq!(driver.tick(&mut pose), Some(2.0));
        assert_eq!(driver.elapsed(), 2.0);
    }

    #[test]
    fn tick_feeds_elapsed_time_into_the_pose() {
        let clock = ManualClock::new();
        clock.set(3.0);
        let mut driver = FrameDriver::new(&clock);
        driver.start();

        clock.advance(1.5);
        let mut pose = PoseState::new();
        pose.poke = true;
        assert_eq!(driver.tick(&mut pose), Some(1.5));
        assert!((pose.jump - 0.2 * (10.0 * 1.5_f32).sin().abs()).abs() < 1e-6);
    }

    #[test]
    fn stop_cancels_the_loop() {
        let mut driver = FrameDriver::new(ManualClock::new());
        driver.start();
        driver.stop();

        assert_eq!(driver.state(), DriverState::Stopped);
        assert!(!driver.is_running());

        let mut pose = PoseState::new();
        assert_eq!(driver.tick(&mut pose), None);

        // A stopped driver cannot be restarted.
        driver.start();
        assert_eq!(driver.state(), DriverState::Stopped);
    }
}
