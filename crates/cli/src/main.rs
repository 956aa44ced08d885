use anyhow::{bail, Context};
use config::{Config, File};
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};
use tessera::{draw_overlay, timed, GridConfig, HexGrid, Placement, Viewport};

/// CLI for inspecting and debugging Tessera canvas grids. Builds a grid
/// from a config file, enumerates the overlay for a viewport, and
/// optionally validates a set of placed items against it.
#[derive(Debug, StructOpt)]
#[structopt(name = "tessera")]
struct Opt {
    /// Path to a grid config file. Supported formats: JSON, TOML. Defaults
    /// are used when omitted.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Path to a JSON file holding the canvas's placed items, as an array
    /// of `{"id": ..., "position": {"x": ..., "y": ...}}` objects. When
    /// given, the items are validated against the grid.
    #[structopt(short, long)]
    placements: Option<PathBuf>,

    /// Viewport width in pixels
    #[structopt(long, default_value = "1920")]
    width: f64,

    /// Viewport height in pixels
    #[structopt(long, default_value = "1080")]
    height: f64,

    /// Horizontal pan of the viewport (its left edge, in canvas pixels)
    #[structopt(long, default_value = "0", allow_hyphen_values = true)]
    offset_x: f64,

    /// Vertical pan of the viewport (its top edge, in canvas pixels)
    #[structopt(long, default_value = "0", allow_hyphen_values = true)]
    offset_y: f64,

    /// If given, outputs will be written to this directory. The exact files
    /// that appear are defined by the output formats. See
    /// `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to write. Supported formats:
    ///
    /// cfg - The full grid config, in TOML format
    ///
    /// json - The overlay cells for the viewport, in JSON format
    ///
    /// svg - 2D rendering of the overlay (placed items filled in)
    ///
    /// report - The tessellation validation report, in JSON format
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the grid's full config in a human-readable file
    Cfg,
    /// Export the viewport's overlay cells as JSON, which the canvas (or
    /// anything else) can consume directly
    Json,
    /// Render the overlay as a 2D SVG
    Svg,
    /// Export the tessellation validation report as JSON
    Report,
    /* If you change this, make sure to update the help text for
     * `--output-formats`! */
}

impl OutputFormat {
    fn file_name(self) -> &'static str {
        match self {
            Self::Cfg => "grid.toml",
            Self::Json => "overlay.json",
            Self::Svg => "overlay.svg",
            Self::Report => "report.json",
        }
    }
}

fn load_config(config_path: Option<&Path>) -> anyhow::Result<GridConfig> {
    let config_path = match config_path {
        Some(config_path) => config_path,
        None => return Ok(GridConfig::default()),
    };

    let mut settings = Config::new();
    let config_path = config_path.to_str().with_context(|| {
        format!("invalid character in path {config_path:?}")
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

fn load_placements(path: &Path) -> anyhow::Result<Vec<Placement>> {
    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .with_context(|| format!("error opening placements file {path:?}"))?;
    serde_json::from_reader(file)
        .with_context(|| format!("error reading placements from {path:?}"))
}

/// Generate an output file for the grid in the given format.
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    grid: &HexGrid,
    viewport: &Viewport,
    placements: &[Placement],
) -> anyhow::Result<()> {
    fn generate_bytes(
        output_format: OutputFormat,
        grid: &HexGrid,
        viewport: &Viewport,
        placements: &[Placement],
    ) -> Vec<u8> {
        match output_format {
            OutputFormat::Cfg => {
                // Serialize just the grid config via toml
                toml::to_string_pretty(grid.config())
                    // Panics only if config format isn't serializable (a bug)
                    .expect("error serializing config")
                    .into_bytes()
            }
            OutputFormat::Json => {
                // Serialize the overlay cells via JSON
                serde_json::to_vec_pretty(&grid.grid_overlay(viewport))
                    // Panics only if the cell shape isn't serializable (a bug)
                    .expect("error serializing overlay")
            }
            OutputFormat::Svg => {
                // Render the overlay in 2D
                draw_overlay(grid, viewport, placements)
                    .to_string()
                    .into_bytes()
            }
            OutputFormat::Report => grid
                .validate_tessellation(placements)
                .to_json()
                .into_bytes(),
        }
    }

    let output_file_path = output_dir.join(output_format.file_name());

    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes =
                generate_bytes(output_format, grid, viewport, placements);
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let grid_config = load_config(opt.config.as_deref())?;
    let grid = HexGrid::new(grid_config)?;
    let viewport = Viewport {
        width: opt.width,
        height: opt.height,
        offset_x: opt.offset_x,
        offset_y: opt.offset_y,
    };

    let placements = match &opt.placements {
        Some(path) => {
            let placements = load_placements(path)?;
            info!("Loaded {} placements from {:?}", placements.len(), path);
            let report = grid.validate_tessellation(&placements);
            if report.is_valid {
                info!(
                    "Tessellation is valid ({} gaps reported)",
                    report.gaps.len()
                );
            } else {
                warn!(
                    "Tessellation is INVALID: {} overlapping cells, {} gaps",
                    report.overlaps.len(),
                    report.gaps.len()
                );
            }
            placements
        }
        None => Vec::new(),
    };

    let cells = timed!(
        "Generating grid overlay",
        log::Level::Info,
        grid.grid_overlay(&viewport)
    );
    info!(
        "{} cells in view; suggested zoom for this viewport is {:.3}",
        cells.len(),
        grid.optimal_zoom(opt.width, opt.height)
    );

    match (&opt.output, opt.output_formats.as_slice()) {
        (Some(output_dir), formats) if !formats.is_empty() => {
            fs::create_dir_all(output_dir).with_context(|| {
                format!("error creating output directory {output_dir:?}")
            })?;
            for &output_format in formats {
                gen_output(
                    output_dir,
                    output_format,
                    &grid,
                    &viewport,
                    &placements,
                )?;
            }
        }
        (Some(_), _) => {
            bail!("--output was given but no --output-formats")
        }
        (None, formats) if !formats.is_empty() => {
            bail!("--output-formats was given but no --output directory")
        }
        (None, _) => {}
    }

    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    if let Err(error) = run(opt) {
        eprintln!("{error:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_round_trip() {
        for name in ["cfg", "json", "svg", "report"] {
            let format = OutputFormat::from_str(name).unwrap();
            assert_eq!(format.to_string(), name);
        }
        assert!(OutputFormat::from_str("stl").is_err());
    }
}
