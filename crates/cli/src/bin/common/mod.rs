//! Helpers shared by the command-line binaries.

use std::path::Path;

use anyhow::{Context, anyhow};
use hyper_math::config::{self, AngleUnit, HyperConfig};
use hyper_math::vector::Vector3;
use tracing_subscriber::EnvFilter;

/// Send logs to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the optional config file and apply the `--radians` override.
pub fn load_settings(path: Option<&Path>, radians: bool) -> anyhow::Result<HyperConfig> {
    let mut settings = match path {
        Some(path) => config::load_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => HyperConfig::default(),
    };
    if radians {
        settings.angle_unit = AngleUnit::Radians;
    }
    Ok(settings)
}

/// Parse `x,y,z` into a vector.
pub fn parse_vector(text: &str) -> anyhow::Result<Vector3> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(anyhow!(
            "expected three comma-separated components, got `{text}`"
        ));
    }
    let mut values = [0.0; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .with_context(|| format!("invalid component `{part}` in `{text}`"))?;
    }
    Ok(Vector3::from(values))
}

/// Snap values that would print as `-0.000…` at `decimals` places to zero.
pub fn for_display(value: f64, decimals: i32) -> f64 {
    if value.abs() < 0.5 * 10f64.powi(-decimals) {
        0.0
    } else {
        value
    }
}

#[allow(dead_code)]
pub fn format_vector(v: &Vector3) -> String {
    format!(
        "{:.9} {:.9} {:.9}",
        for_display(v.x, 9),
        for_display(v.y, 9),
        for_display(v.z, 9)
    )
}

/// Angle in the configured unit with six decimals and the unit label.
pub fn format_angle(radians: f64, unit: AngleUnit) -> String {
    format!("{:.6} {}", for_display(unit.from_radians(radians), 6), unit.label())
}
