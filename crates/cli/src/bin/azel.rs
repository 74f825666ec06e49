use std::path::PathBuf;

use clap::Parser;
use hyper_math::orientation::{hpr_to_matrix, vector_to_hp};
use hyper_math::vector;
use tracing::debug;

#[path = "common/mod.rs"]
mod common;

/// Azimuth/elevation of a target direction as seen from an observer frame.
///
/// The observer frame defaults to the local east-north-up axes; pass a
/// heading/pitch/roll to measure relative to a tilted or turned observer.
#[derive(Parser, Debug)]
#[command(author, version, about = "Azimuth/elevation of a direction in an observer frame")]
struct Cli {
    /// Target direction `x,y,z` in the parent basis (unitized before use)
    #[arg(long, allow_hyphen_values = true)]
    target: String,

    /// Observer frame heading
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    frame_heading: f64,

    /// Observer frame pitch
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    frame_pitch: f64,

    /// Observer frame roll
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    frame_roll: f64,

    /// YAML or TOML config (tolerances, angle unit)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read and print angles in radians regardless of the config
    #[arg(long, default_value_t = false)]
    radians: bool,
}

fn main() -> anyhow::Result<()> {
    common::init_tracing();
    let cli = Cli::parse();
    let settings = common::load_settings(cli.config.as_deref(), cli.radians)?;
    let unit = settings.angle_unit;

    let target = vector::unitize(&common::parse_vector(&cli.target)?);
    if !vector::has_magnitude(&target) {
        anyhow::bail!("target direction must not be the zero vector");
    }

    let frame = hpr_to_matrix(
        unit.to_radians(cli.frame_heading),
        unit.to_radians(cli.frame_pitch),
        unit.to_radians(cli.frame_roll),
    );
    debug!(?frame, ?target, "observer frame built");

    let hp = vector_to_hp(&target, &frame);
    println!("azimuth   {}", common::format_angle(hp.heading, unit));
    println!("elevation {}", common::format_angle(hp.pitch, unit));

    Ok(())
}
