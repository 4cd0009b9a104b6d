use crate::telemetry_system::summary::finite_or_zero;
use crate::trajectory_system::integrator::TrajectorySample;
use crate::utils::vector2d::Vector2D;

/// Replay cursor over a precomputed trajectory. The samples are immutable;
/// the cursor is the only state, advanced by an externally driven tick
/// (the animated view fires one every 50 ms).
pub struct Playback<'a> {
    samples: &'a [TrajectorySample],
    cursor: usize,
}

impl<'a> Playback<'a> {
    pub fn new(samples: &'a [TrajectorySample]) -> Self {
        Playback { samples, cursor: 0 }
    }

    /// The sample under the cursor, then advance. `None` once the flight
    /// has been fully replayed.
    pub fn tick(&mut self) -> Option<&'a TrajectorySample> {
        let sample = self.samples.get(self.cursor)?;
        self.cursor += 1;
        Some(sample)
    }

    pub fn current(&self) -> Option<&'a TrajectorySample> {
        self.samples.get(self.cursor)
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.samples.len()
    }

    /// Rewind to the first sample. The trajectory itself never changes, so
    /// restarting needs no other cleanup.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Direction of travel at the cursor, radians from the +x axis, taken
    /// from the segment since the previous sample. Level at the first
    /// sample and after the replay has finished.
    pub fn heading(&self) -> f64 {
        if self.cursor == 0 {
            return 0.0;
        }
        let current = match self.samples.get(self.cursor) {
            Some(sample) => sample,
            None => return 0.0,
        };
        let previous = &self.samples[self.cursor - 1];

        let segment = Vector2D::new(finite_or_zero(current.x), finite_or_zero(current.y))
            - Vector2D::new(finite_or_zero(previous.x), finite_or_zero(previous.y));
        segment.angle()
    }
}
