use crate::trajectory_system::integrator::TrajectorySample;

/// The three scalar reductions of a sample sequence. `Default` is the zero
/// summary reported for an empty (immediately non-airborne) flight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightSummary {
    pub max_height: f64,   // m
    pub max_distance: f64, // m
    pub flight_time: f64,  // s
}

impl FlightSummary {
    /// Reduce a sample sequence to its summary. Every field is finite and
    /// non-negative no matter what the samples hold: non-finite coordinates
    /// collapse to zero here, at the consumption boundary, while the stored
    /// samples keep their raw values.
    pub fn from_samples(samples: &[TrajectorySample]) -> Self {
        let max_height = samples
            .iter()
            .map(|sample| finite_or_zero(sample.y))
            .fold(0.0, f64::max);
        let max_distance = samples
            .iter()
            .map(|sample| finite_or_zero(sample.x))
            .fold(0.0, f64::max);
        let flight_time = samples
            .last()
            .map_or(0.0, |sample| finite_or_zero(sample.time));

        FlightSummary {
            max_height,
            max_distance,
            flight_time,
        }
    }
}

/// Zero-substitution for non-finite values. Shared by every consumer of
/// raw sample coordinates.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(x: f64, y: f64, time: f64) -> TrajectorySample {
        TrajectorySample { x, y, time }
    }

    #[test]
    fn test_empty_sequence_yields_zero_summary() {
        let summary = FlightSummary::from_samples(&[]);
        assert_eq!(summary, FlightSummary::default());
    }

    #[test]
    fn test_maxima_over_a_short_arc() {
        let samples = [
            sample(1.0, 5.0, 0.1),
            sample(2.0, 9.0, 0.2),
            sample(3.0, 4.0, 0.3),
        ];
        let summary = FlightSummary::from_samples(&samples);
        assert_relative_eq!(summary.max_height, 9.0);
        assert_relative_eq!(summary.max_distance, 3.0);
        assert_relative_eq!(summary.flight_time, 0.3);
    }

    #[test]
    fn test_flight_time_is_the_last_timestamp() {
        let samples = [sample(0.5, 1.0, 0.1), sample(1.0, 0.5, 0.2)];
        assert_eq!(FlightSummary::from_samples(&samples).flight_time, 0.2);
    }

    #[test]
    fn test_non_finite_coordinates_collapse_to_zero() {
        let samples = [
            sample(f64::NAN, 3.0, 0.1),
            sample(f64::INFINITY, f64::NEG_INFINITY, 0.2),
            sample(-7.0, f64::NAN, 0.3),
        ];
        let summary = FlightSummary::from_samples(&samples);
        assert!(summary.max_height.is_finite());
        assert!(summary.max_distance.is_finite());
        assert_eq!(summary.max_height, 3.0);
        assert_eq!(summary.max_distance, 0.0);
        assert_eq!(summary.flight_time, 0.3);
    }

    #[test]
    fn test_non_finite_final_timestamp_reports_zero() {
        let samples = [sample(1.0, 1.0, 0.1), sample(2.0, 2.0, f64::NAN)];
        assert_eq!(FlightSummary::from_samples(&samples).flight_time, 0.0);
    }

    #[test]
    fn test_upwind_flights_never_report_negative_distance() {
        let samples = [sample(-10.0, 2.0, 0.1), sample(-20.0, 1.0, 0.2)];
        let summary = FlightSummary::from_samples(&samples);
        assert_eq!(summary.max_distance, 0.0);
    }
}
