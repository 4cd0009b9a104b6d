use crate::constants::VIEW_MARGIN;
use crate::errors::SimulationError;
use crate::telemetry_system::summary::{finite_or_zero, FlightSummary};
use crate::trajectory_system::integrator::TrajectorySample;

/// Pixel-space target the trajectory is projected into. Ground runs along
/// `y = height`, sky toward `y = 0`.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,  // px
    pub height: f64, // px
}

/// Per-axis pixels-per-meter factors for one flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewScale {
    pub x: f64,
    pub y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, SimulationError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(SimulationError::ViewportError(format!(
                "dimensions must be positive and finite, got {} x {}",
                width, height
            )));
        }
        Ok(Viewport { width, height })
    }

    /// Scale factors that fit the flight with head-room on both axes. An
    /// axis with zero (or non-finite) extent maps one-to-one.
    pub fn scale(&self, summary: &FlightSummary) -> ViewScale {
        ViewScale {
            x: axis_scale(self.width, summary.max_distance),
            y: axis_scale(self.height, summary.max_height),
        }
    }

    /// Map a sample to pixel coordinates, inverting the y axis. Non-finite
    /// coordinates are drawn at the origin-side edge rather than breaking
    /// the canvas path.
    pub fn project(&self, scale: &ViewScale, sample: &TrajectorySample) -> (f64, f64) {
        let x = finite_or_zero(sample.x) * scale.x;
        let y = self.height - finite_or_zero(sample.y) * scale.y;
        (x, y)
    }
}

fn axis_scale(extent_px: f64, max_m: f64) -> f64 {
    if max_m > 0.0 && max_m.is_finite() {
        extent_px / (max_m * VIEW_MARGIN)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn canvas() -> Viewport {
        Viewport::new(900.0, 600.0).expect("canvas dimensions are valid")
    }

    #[test]
    fn test_rejects_degenerate_dimensions() {
        assert!(Viewport::new(0.0, 600.0).is_err());
        assert!(Viewport::new(900.0, -1.0).is_err());
        assert!(Viewport::new(f64::NAN, 600.0).is_err());
        assert!(Viewport::new(900.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_scale_leaves_head_room() {
        let summary = FlightSummary {
            max_height: 100.0,
            max_distance: 300.0,
            flight_time: 12.0,
        };
        let scale = canvas().scale(&summary);
        assert_relative_eq!(scale.x, 900.0 / 360.0, epsilon = 1e-12);
        assert_relative_eq!(scale.y, 600.0 / 120.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_extent_maps_one_to_one() {
        let summary = FlightSummary {
            max_height: 50.0,
            max_distance: 0.0,
            flight_time: 4.0,
        };
        let scale = canvas().scale(&summary);
        assert_eq!(scale.x, 1.0);
        assert!(scale.y > 1.0);
    }

    #[test]
    fn test_projection_inverts_the_y_axis() {
        let viewport = canvas();
        let scale = ViewScale { x: 2.0, y: 3.0 };

        let ground = TrajectorySample { x: 0.0, y: 0.0, time: 0.1 };
        assert_eq!(viewport.project(&scale, &ground), (0.0, 600.0));

        let aloft = TrajectorySample { x: 10.0, y: 50.0, time: 0.2 };
        let (px, py) = viewport.project(&scale, &aloft);
        assert_relative_eq!(px, 20.0);
        assert_relative_eq!(py, 600.0 - 150.0);
    }

    #[test]
    fn test_projection_neutralizes_non_finite_samples() {
        let viewport = canvas();
        let scale = ViewScale { x: 1.0, y: 1.0 };
        let bad = TrajectorySample {
            x: f64::INFINITY,
            y: f64::NAN,
            time: 0.1,
        };
        let (px, py) = viewport.project(&scale, &bad);
        assert_eq!((px, py), (0.0, 600.0));
    }
}
