//! Exponential decay fling.
//!
//! Velocity decays as `v(t) = v0 * e^(-k t)`, so the travelled distance is
//! `x(t) = v0 / k * (1 - e^(-k t))`. The fling ends once the velocity drops
//! below a stop threshold.

/// Decay parameters shared by all flings of one gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayFling {
    /// Decay rate `k` in 1/s.
    friction: f32,
    /// Velocity in px/sec below which the fling is considered finished.
    stop_velocity: f32,
}

impl DecayFling {
    /// Decay rate in 1/s; roughly 0.9 velocity retained per 60Hz frame.
    pub const DEFAULT_FRICTION: f32 = 6.3;

    /// Stop threshold in dp/s.
    pub const STOP_VELOCITY_DP: f32 = 20.0;

    pub fn new(friction: f32, stop_velocity: f32) -> Self {
        Self {
            friction: friction.max(f32::EPSILON),
            stop_velocity: stop_velocity.abs(),
        }
    }

    /// Creates a decay with default friction and a stop threshold scaled by `density`.
    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, Self::STOP_VELOCITY_DP * density)
    }

    /// Plans a fling starting at `velocity` px/sec.
    pub fn fling_info(&self, velocity: f32) -> FlingInfo {
        let speed = velocity.abs();
        let duration_ms = if speed > self.stop_velocity && self.stop_velocity > 0.0 {
            ((speed / self.stop_velocity).ln() / self.friction * 1000.0) as i64
        } else if speed > 0.0 && self.stop_velocity == 0.0 {
            i64::MAX
        } else {
            0
        };
        FlingInfo {
            initial_velocity: velocity,
            friction: self.friction,
            duration_ms,
        }
    }
}

/// A planned fling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingInfo {
    /// Initial velocity in px/sec.
    pub initial_velocity: f32,
    friction: f32,
    /// Total duration in milliseconds.
    pub duration_ms: i64,
}

impl FlingInfo {
    fn clamp_seconds(&self, time_ms: i64) -> f32 {
        time_ms.clamp(0, self.duration_ms) as f32 / 1000.0
    }

    /// Signed distance travelled after `time_ms` milliseconds.
    pub fn position(&self, time_ms: i64) -> f32 {
        let t = self.clamp_seconds(time_ms);
        self.initial_velocity / self.friction * (1.0 - (-self.friction * t).exp())
    }

    /// Velocity in px/sec after `time_ms` milliseconds; zero once finished.
    pub fn velocity(&self, time_ms: i64) -> f32 {
        if self.is_finished(time_ms) {
            return 0.0;
        }
        let t = self.clamp_seconds(time_ms);
        self.initial_velocity * (-self.friction * t).exp()
    }

    /// Signed total distance of the fling.
    pub fn distance(&self) -> f32 {
        self.position(self.duration_ms)
    }

    pub fn is_finished(&self, time_ms: i64) -> bool {
        time_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_release_does_not_fling() {
        let decay = DecayFling::with_density(1.0);
        let info = decay.fling_info(10.0);
        assert_eq!(info.duration_ms, 0);
        assert!(info.is_finished(0));
        assert_eq!(info.distance(), 0.0);
    }

    #[test]
    fn fling_decelerates_monotonically() {
        let decay = DecayFling::with_density(1.0);
        let info = decay.fling_info(3000.0);
        assert!(info.duration_ms > 0);

        let mut prev_position = 0.0;
        let mut prev_velocity = f32::MAX;
        for ms in (0..=info.duration_ms).step_by(16) {
            let position = info.position(ms);
            let velocity = info.velocity(ms);
            assert!(position >= prev_position, "position must not go backwards");
            assert!(velocity <= prev_velocity, "velocity must decay");
            prev_position = position;
            prev_velocity = velocity;
        }
        assert!(info.distance() < 3000.0 / DecayFling::DEFAULT_FRICTION);
    }

    #[test]
    fn negative_velocity_travels_backwards() {
        let decay = DecayFling::with_density(2.0);
        let info = decay.fling_info(-2000.0);
        assert!(info.distance() < 0.0);
        assert_eq!(info.position(info.duration_ms + 500), info.distance());
    }

    #[test]
    fn higher_velocity_flings_longer() {
        let decay = DecayFling::with_density(1.0);
        let slow = decay.fling_info(1000.0);
        let fast = decay.fling_info(5000.0);
        assert!(fast.duration_ms > slow.duration_ms);
        assert!(fast.distance() > slow.distance());
    }
}
