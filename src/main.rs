use std::{env, fs::File, path::PathBuf, process};

use clap::Parser;
use log::info;
use rocket_stability::report::summary::{flight_report, stability_report, suggestions_report};
use rocket_stability::*;

/// Stability check and 1-D ascent estimate for model rocket designs.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Design TOML with [geometry] and [[parts]]
    #[arg(long)]
    design: Option<PathBuf>,

    /// Thrust curve CSV: time_seconds,thrust_newtons per line
    #[arg(long)]
    thrust: Option<PathBuf>,

    /// Simulation config TOML
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_LIFTOFF_MASS)]
    mass: f64,

    #[arg(long, default_value_t = DEFAULT_PROPELLANT_MASS)]
    prop_mass: f64,

    #[arg(long, default_value_t = DEFAULT_BURN_TIME)]
    burn_time: f64,

    #[arg(long, default_value_t = DEFAULT_DRAG_COEFFICIENT)]
    cd: f64,

    #[arg(long, default_value_t = DEFAULT_BODY_DIAMETER_CM)]
    diameter_cm: f64,
}

fn main() {
    // Default log level to "info"
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.design.is_none() && args.thrust.is_none() {
        return Err("nothing to do: pass --design and/or --thrust".into());
    }

    if let Some(path) = &args.design {
        let design = DesignDocument::load(path)?;
        let analysis = StabilityAnalysis::evaluate(&design.parts, &design.geometry);
        info!(
            "Evaluated design '{}' ({} parts)",
            design.name,
            design.parts.len()
        );

        let suggestions = suggest(&design.geometry, analysis.margin_cal);
        print!("{}", stability_report(&analysis));
        print!("{}", suggestions_report(&suggestions));
    }

    if let Some(path) = &args.thrust {
        let config = match &args.config {
            Some(config_path) => SimulationConfig::load(config_path)?,
            None => SimulationConfig::default(),
        };
        let curve = ThrustCurve::from_reader(File::open(path)?)?;
        let vehicle = Vehicle::with_diameter_cm(
            args.mass,
            args.prop_mass,
            args.burn_time,
            args.cd,
            args.diameter_cm,
        );
        vehicle.validate()?;

        info!(
            "Simulating {} thrust samples, total impulse {:.1} N·s",
            curve.points().len(),
            curve.total_impulse()
        );
        let result = FlightSimulator::new(config).run(&curve, &vehicle);

        print!("{}", flight_report(&result));
    }

    Ok(())
}
