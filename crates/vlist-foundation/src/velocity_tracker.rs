//! Velocity tracking for fling support.
//!
//! Impulse strategy: the velocity is derived from the kinetic energy the
//! pointer imparted over its recent samples, which is robust against the
//! jittery timestamps of touch input.

use smallvec::SmallVec;

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within the last 100ms contribute.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer had stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// 1D velocity tracker over absolute positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Sample; HISTORY_SIZE],
    /// Slot of the newest sample.
    newest: usize,
    len: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [Sample::default(); HISTORY_SIZE],
            newest: 0,
            len: 0,
        }
    }

    /// Adds the pointer position observed at `time_ms`.
    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Sample { time_ms, position };
        self.len = (self.len + 1).min(HISTORY_SIZE);
    }

    /// Iterates samples from newest to oldest.
    fn recent(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len)
            .map(move |age| self.samples[(self.newest + HISTORY_SIZE - age) % HISTORY_SIZE])
    }

    /// Velocity in units/second, or 0.0 without enough recent movement.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.recent().next() else {
            return 0.0;
        };

        // (time relative to newest, position), newest first.
        let mut window: SmallVec<[(f32, f32); HISTORY_SIZE]> = SmallVec::new();
        let mut previous_time = newest.time_ms;
        for sample in self.recent() {
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous_time - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            window.push((-(age as f32), sample.position));
            previous_time = sample.time_ms;
        }

        if window.len() < 2 {
            return 0.0;
        }

        // Walk from oldest to newest accumulating work.
        let mut work = 0.0f32;
        let oldest = window.len() - 1;
        for i in (1..=oldest).rev() {
            let (t_prev, x_prev) = window[i];
            let (t_next, x_next) = window[i - 1];
            if t_prev == t_next {
                continue;
            }
            let v_curr = (x_next - x_prev) / (t_next - t_prev);
            let v_prev = kinetic_energy_to_velocity(work);
            work += (v_curr - v_prev) * v_curr.abs();
            if i == oldest {
                work *= 0.5;
            }
        }

        kinetic_energy_to_velocity(work) * 1000.0
    }

    /// Velocity in units/second, clamped to `±max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.calculate_velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.len = 0;
    }
}

/// E = v^2 / 2 with unit mass, keeping the sign of the energy.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
