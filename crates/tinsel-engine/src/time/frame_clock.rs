use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick; `0.0` on the first tick.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Produces per-frame delta times.
///
/// Deltas are not smoothed or clamped: a frame after a long pause reports the
/// whole pause. Scenes that cannot tolerate large steps must subdivide on their
/// own.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the previous timestamp; the next tick reports `dt = 0`.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Advances the clock using the current time.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// A `now` earlier than the previous tick yields `dt = 0`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let last = *self.last.get_or_insert(now);
        let dt = now.saturating_duration_since(last).as_secs_f32();
        self.last = Some(now);

        let ft = FrameTime {
            dt,
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        let ft = clock.tick_at(Instant::now());
        assert_eq!(ft.dt, 0.0);
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn delta_is_time_since_previous_tick() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.tick_at(t0);
        let ft = clock.tick_at(t0 + Duration::from_millis(16));
        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn long_pause_is_not_clamped() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.tick_at(t0);
        let ft = clock.tick_at(t0 + Duration::from_secs(30));
        assert!((ft.dt - 30.0).abs() < 1e-4);
    }

    #[test]
    fn reset_restarts_from_zero_delta() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.tick_at(t0);
        clock.reset();
        let ft = clock.tick_at(t0 + Duration::from_secs(5));
        assert_eq!(ft.dt, 0.0);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn backwards_timestamp_saturates() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now() + Duration::from_secs(1);
        clock.tick_at(t0);
        let ft = clock.tick_at(t0 - Duration::from_millis(500));
        assert_eq!(ft.dt, 0.0);
    }
}
