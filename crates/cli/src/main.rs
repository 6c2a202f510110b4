mod check;

use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexgrid::{
    hex_linedraw, timed, DoubledCoord, Hex, Layout, LayoutConfig, OffsetCoord,
    Parity, Point,
};
use log::{debug, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for converting between hex grid coordinate systems. Hexes are given as
/// comma-separated cube coordinates, e.g. `1,-3,2`.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a config file that defines the pixel layout. Supported
    /// formats: JSON, TOML. If not given, a pointy-top layout with size 1
    /// centered on (0, 0) is used
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Output format. Supported formats:
    ///
    /// text - Human-readable, one value per line
    ///
    /// json - A single JSON value
    #[structopt(short, long, default_value = "text")]
    format: OutputFormat,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Get the pixel position of the center of a hex
    ToPixel {
        #[structopt(allow_hyphen_values = true)]
        hex: HexArg,
    },

    /// Get the hex that contains a pixel
    ToHex {
        #[structopt(allow_hyphen_values = true)]
        x: f64,
        #[structopt(allow_hyphen_values = true)]
        y: f64,
    },

    /// Get the pixel positions of the 6 corners of a hex
    Corners {
        #[structopt(allow_hyphen_values = true)]
        hex: HexArg,
    },

    /// Get every hex on the line between two hexes, inclusive
    Line {
        #[structopt(allow_hyphen_values = true)]
        start: HexArg,
        #[structopt(allow_hyphen_values = true)]
        end: HexArg,
    },

    /// Convert a hex to offset coordinates. The layout's topology decides
    /// whether columns (flat) or rows (pointy) get shoved
    Offset {
        #[structopt(allow_hyphen_values = true)]
        hex: HexArg,

        /// Which alternate rows/columns are shoved: even or odd
        #[structopt(short, long, default_value = "even")]
        parity: Parity,
    },

    /// Convert a hex to doubled coordinates, using the layout's topology
    Doubled {
        #[structopt(allow_hyphen_values = true)]
        hex: HexArg,
    },

    /// Run the built-in self-test cases, and report OK/FAIL for each one
    Check,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    Text,
    Json,
}

/// A hex parsed from a `q,r,s` argument
#[derive(Copy, Clone, Debug)]
struct HexArg(Hex);

impl FromStr for HexArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid hex {:?}", s))?;
        match parts.as_slice() {
            [q, r, s] => Ok(Self(Hex::new(*q, *r, *s)?)),
            _ => bail!("expected hex as q,r,s but got {:?}", s),
        }
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<LayoutConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Print a value in the requested format. `text` is only used for the text
/// format, since not every output type has a natural [Display] form.
///
/// [Display]: std::fmt::Display
fn print_output<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}

fn join_lines<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => LayoutConfig::default(),
    };
    debug!("Loaded config {:?}", config);
    let layout = Layout::from_config(config).context("invalid layout config")?;
    let format = opt.format;

    match opt.command {
        Command::ToPixel { hex: HexArg(hex) } => {
            let point = layout.hex_to_pixel(hex);
            print_output(format, &point, || point.to_string())
        }
        Command::ToHex { x, y } => {
            let hex = layout.pixel_to_hex(Point::new(x, y));
            print_output(format, &hex, || hex.to_string())
        }
        Command::Corners { hex: HexArg(hex) } => {
            let corners = layout.polygon_corners(hex);
            print_output(format, &corners, || join_lines(&corners))
        }
        Command::Line {
            start: HexArg(start),
            end: HexArg(end),
        } => {
            let line = timed!("Line drawing", hex_linedraw(start, end));
            print_output(format, &line, || join_lines(&line))
        }
        Command::Offset {
            hex: HexArg(hex),
            parity,
        } => {
            let offset = OffsetCoord::from_cube(hex, config.topology, parity);
            print_output(format, &offset, || offset.to_string())
        }
        Command::Doubled { hex: HexArg(hex) } => {
            let doubled = DoubledCoord::from_cube(hex, config.topology);
            print_output(format, &doubled, || doubled.to_string())
        }
        Command::Check => {
            let results =
                timed!("Self-test", log::Level::Info, check::run_checks());
            print_output(format, &results, || join_lines(&results))?;

            let failures = results.iter().filter(|result| !result.ok).count();
            if failures > 0 {
                bail!("{} of {} checks failed", failures, results.len());
            }
            Ok(())
        }
    }
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
