use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hyper_math::matrix::Matrix3;
use hyper_math::orientation::{hpr_to_matrix, matrix_to_hpr};
use hyper_math::rotation::rotate_vector;
use hyper_math::{validate, vector};
use tracing::info;

#[path = "common/mod.rs"]
mod common;

/// Convert between heading/pitch/roll and east-north-up rotation matrices.
#[derive(Parser, Debug)]
#[command(author, version, about = "HPR <-> rotation matrix conversions")]
struct Cli {
    /// YAML or TOML config (tolerances, angle unit)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Read and print angles in radians regardless of the config
    #[arg(long, global = true, default_value_t = false)]
    radians: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the (right, forward, up) columns for a heading/pitch/roll
    ToMatrix {
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        heading: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        pitch: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        roll: f64,
    },
    /// Print heading/pitch/roll for nine column-major matrix elements
    ToHpr {
        #[arg(num_args = 9, allow_negative_numbers = true, required = true)]
        elements: Vec<f64>,

        /// Reject matrices that are not orthonormal within the configured tolerances
        #[arg(long, default_value_t = false)]
        check: bool,
    },
    /// Rotate a vector about a unit axis
    Rotate {
        /// Vector to rotate, `x,y,z`
        #[arg(long, allow_hyphen_values = true)]
        vector: String,
        /// Rotation axis, `x,y,z` (unitized before use)
        #[arg(long, allow_hyphen_values = true)]
        axis: String,
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
    },
}

fn main() -> anyhow::Result<()> {
    common::init_tracing();
    let cli = Cli::parse();
    let settings = common::load_settings(cli.config.as_deref(), cli.radians)?;
    let unit = settings.angle_unit;

    match cli.command {
        Command::ToMatrix {
            heading,
            pitch,
            roll,
        } => {
            let m = hpr_to_matrix(
                unit.to_radians(heading),
                unit.to_radians(pitch),
                unit.to_radians(roll),
            );
            for (label, column) in ["right", "forward", "up"].iter().zip(m.columns()) {
                println!("{label:<8}{}", common::format_vector(&column));
            }
        }
        Command::ToHpr { elements, check } => {
            let mut data = [0.0; 9];
            data.copy_from_slice(&elements);
            let m = Matrix3::from_column_major(data);
            if check {
                let tol = settings.tolerances;
                validate::check_rotation(&m, tol.unit_length, tol.orthogonality)
                    .context("matrix failed the rotation check")?;
            }
            let hpr = matrix_to_hpr(&m);
            println!("heading {}", common::format_angle(hpr.heading, unit));
            println!("pitch   {}", common::format_angle(hpr.pitch, unit));
            println!("roll    {}", common::format_angle(hpr.roll, unit));
        }
        Command::Rotate {
            vector: rotatee,
            axis,
            angle,
        } => {
            let rotatee = common::parse_vector(&rotatee)?;
            let axis = common::parse_vector(&axis)?;
            validate::check_has_magnitude(&axis).context("rotation axis")?;
            let axis = vector::unitize(&axis);
            info!(?axis, "rotating about unitized axis");
            let rotated = rotate_vector(&rotatee, &axis, unit.to_radians(angle));
            println!("{}", common::format_vector(&rotated));
        }
    }

    Ok(())
}
