//! kmlkit - turn a coordinate track into a KML or KMZ file

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use kmlkit::{AltitudeMode, Color, DEFAULT_PRECISION, Geometry, Kml, Kmz};

#[derive(Parser)]
#[command(name = "kmlkit")]
#[command(version, about = "Write a coordinate track as KML or KMZ", long_about = None)]
#[command(after_help = "INPUT holds one x,y or x,y,z tuple per line; blank lines and
lines starting with # are skipped.

EXAMPLES:
    kmlkit track.csv track.kml                 Write a KML file
    kmlkit track.csv track.kmz --name Hike     Write a KMZ archive
    kmlkit track.csv out.kml --color 00ff00    Green line")]
struct Cli {
    /// Track file with one coordinate tuple per line
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (.kml, or .kmz for a zip archive)
    #[arg(value_name = "OUTPUT")]
    output: String,

    /// Placemark name
    #[arg(short, long, default_value = "Track")]
    name: String,

    /// Significant digits per coordinate
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Line color as rrggbb
    #[arg(long, default_value = "ff0000")]
    color: String,

    /// Line opacity as two hex digits
    #[arg(long, default_value = "ff")]
    alpha: String,

    /// Line width
    #[arg(long, default_value_t = 2)]
    width: i32,

    /// Follow the terrain
    #[arg(long)]
    tessellate: bool,

    /// How altitudes are interpreted
    #[arg(long, value_enum, default_value_t = Altitude::ClampToGround)]
    altitude_mode: Altitude,

    /// Log debug output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Altitude {
    ClampToGround,
    RelativeToGround,
    Absolute,
}

impl From<Altitude> for AltitudeMode {
    fn from(value: Altitude) -> Self {
        match value {
            Altitude::ClampToGround => AltitudeMode::ClampToGround,
            Altitude::RelativeToGround => AltitudeMode::RelativeToGround,
            Altitude::Absolute => AltitudeMode::Absolute,
        }
    }
}

/// Member name Google Earth opens first in a KMZ.
const KMZ_ROOT_DOCUMENT: &str = "doc.kml";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match convert(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn convert(cli: &Cli) -> Result<(), String> {
    let text = std::fs::read_to_string(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;
    let track = parse_track(&text)?;
    let color = Color::new(&cli.color, &cli.alpha).map_err(|e| e.to_string())?;

    let to_kmz = cli.output.to_ascii_lowercase().ends_with(".kmz");
    let mut kml = if to_kmz {
        Kml::new(KMZ_ROOT_DOCUMENT, cli.precision)
    } else {
        Kml::new(cli.output.as_str(), cli.precision)
    };

    let geometry = Geometry {
        extrude: false,
        tessellate: cli.tessellate,
        altitude_mode: cli.altitude_mode.into(),
    };
    build_track(&mut kml, &cli.name, &color, cli.width, &geometry, &track);

    if to_kmz {
        let mut kmz = Kmz::new(cli.output.as_str());
        kmz.append(kml);
        kmz.write().map_err(|e| e.to_string())?;
    } else {
        kml.write().map_err(|e| e.to_string())?;
    }

    if !cli.quiet {
        println!("{} -> {} ({} points)", cli.input, cli.output, track.len());
    }
    Ok(())
}

fn build_track(
    kml: &mut Kml,
    name: &str,
    color: &Color,
    width: i32,
    geometry: &Geometry,
    track: &[(f64, f64, Option<f64>)],
) {
    let name = kmlkit::escape(name);

    kml.header();
    kml.name(&name);
    kml.style_header(Some("track"));
    kml.line_style(color, width);
    kml.style_footer();

    kml.placemark_header(Some(&*name), None, Some("track"));
    kml.linestring_header(geometry);
    for &(x, y, z) in track {
        match z {
            Some(z) => kml.coordinates_3d(x, y, z),
            None => kml.coordinates_2d(x, y),
        }
    }
    kml.linestring_footer();
    kml.placemark_footer();
    kml.footer();
}

/// Parse `x,y[,z]` lines, skipping blanks and `#` comments.
fn parse_track(text: &str) -> Result<Vec<(f64, f64, Option<f64>)>, String> {
    let mut track = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let values = line
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("line {}: {e}", index + 1))?;

        let point = match values.as_slice() {
            [x, y] => (*x, *y, None),
            [x, y, z] => (*x, *y, Some(*z)),
            _ => {
                return Err(format!(
                    "line {}: expected 2 or 3 values, found {}",
                    index + 1,
                    values.len()
                ));
            }
        };
        track.push(point);
    }

    Ok(track)
}
