use crate::telemetry_system::summary::FlightSummary;
use crate::trajectory_system::integrator::{FlightPhase, TrajectorySample};

pub struct Telemetry {
    pub log: Vec<String>,
    samples_replayed: usize,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            samples_replayed: 0,
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_length(length: f64) -> String {
        if length >= 1000.0 {
            format!("{:.2} km", length / 1000.0)
        } else {
            format!("{:.2} m", length)
        }
    }

    pub fn record_sample(&mut self, sample: &TrajectorySample) {
        self.samples_replayed += 1;
        let phase = match FlightPhase::at_time(sample.time) {
            FlightPhase::Powered => "powered",
            FlightPhase::Ballistic => "ballistic",
        };
        let data = format!(
            "Time: {}\n\
                 Position: x = {:.2} m, y = {:.2} m\n\
                 Phase: {}\n",
            Self::format_time(sample.time),
            sample.x,
            sample.y,
            phase
        );
        self.log.push(data);
    }

    pub fn display_data(&self, summary: &FlightSummary) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n--- Flight Summary ---");
        println!("Max Altitude: {}", Self::format_length(summary.max_height));
        println!("Max Distance: {}", Self::format_length(summary.max_distance));
        println!("Flight Time: {}", Self::format_time(summary.flight_time));
        println!("Samples Replayed: {}", self.samples_replayed);
    }
}
