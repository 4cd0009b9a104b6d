use std::thread;
use std::time::Duration;

use flight_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Positional args: mass(kg) thrust(N) angle(deg) wind(m/s). Anything
    // missing or malformed falls back to the documented defaults.
    let mut args = std::env::args().skip(1);
    let config = RawRocketConfig {
        mass: args.next().unwrap_or_default(),
        thrust: args.next().unwrap_or_default(),
        launch_angle: args.next().unwrap_or_default(),
        wind_speed: args.next().unwrap_or_default(),
    };

    let params = RocketParameters::from_raw(&config);
    println!(
        "Launching: mass {:.2} kg, thrust {:.2} N, angle {:.1}°, wind {:.1} m/s",
        params.mass,
        params.thrust,
        params.launch_angle.to_degrees(),
        params.wind_speed
    );

    let trajectory = simulate(&params);
    let summary = FlightSummary::from_samples(&trajectory);

    if trajectory.is_empty() {
        println!("Rocket never became airborne.");
    }

    let viewport = Viewport::new(900.0, 600.0)?;
    let scale = viewport.scale(&summary);

    let mut playback = Playback::new(&trajectory);
    let mut telemetry = Telemetry::new();

    while let Some(sample) = playback.tick() {
        telemetry.record_sample(sample);

        // Progress line once per simulated second.
        if sample.time % 1.0 < TIME_STEP {
            let (px, py) = viewport.project(&scale, sample);
            println!(
                "t={:.1}s | x: {:.1} m, y: {:.1} m | canvas: ({:.0}, {:.0})",
                sample.time, sample.x, sample.y, px, py
            );
        }

        thread::sleep(Duration::from_millis(PLAYBACK_INTERVAL_MS));
    }

    telemetry.display_data(&summary);

    Ok(())
}
