use std::path::PathBuf;

use crate::config::{MapConfig, MapEncoding};
use crate::error::CliError;

pub const USAGE: &str = "\
Usage: tessera [OPTIONS]
  --width <n>             Map width in cells (default: 80)
  --height <n>            Map height in cells (default: 80)
  --seed <s>              Seed selecting the permutation (required)
  --config <path>         Load settings from a RON file; flags override it
  --output-dir <dir>      Directory for the map files (default: offsets)
  --encoding <f32|rgb8>   Payload encoding (default: f32)
  --report <path>         Write a JSON summary of the run
  -h, --help              Print this message";

/// Values given on the command line. `None` means not given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub seed: Option<String>,
    pub config: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub encoding: Option<MapEncoding>,
    pub report: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Generate(Args),
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, CliError> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("missing value for {flag}")))
}

fn int(raw: &str, flag: &str) -> Result<i64, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("invalid {flag} value '{raw}'")))
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut parsed = Args::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--width" => {
                i += 1;
                parsed.width = Some(int(value(args, i, flag)?, flag)?);
            }
            "--height" => {
                i += 1;
                parsed.height = Some(int(value(args, i, flag)?, flag)?);
            }
            "--seed" => {
                i += 1;
                parsed.seed = Some(value(args, i, flag)?.to_string());
            }
            "--config" => {
                i += 1;
                parsed.config = Some(PathBuf::from(value(args, i, flag)?));
            }
            "--output-dir" => {
                i += 1;
                parsed.output_dir = Some(PathBuf::from(value(args, i, flag)?));
            }
            "--encoding" => {
                i += 1;
                parsed.encoding = Some(MapEncoding::parse(value(args, i, flag)?)?);
            }
            "--report" => {
                i += 1;
                parsed.report = Some(PathBuf::from(value(args, i, flag)?));
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(CliError::Usage(format!("Unknown argument: {other}"))),
        }
        i += 1;
    }

    Ok(Command::Generate(parsed))
}

impl Args {
    /// Overlay the flags that were given onto `base`.
    pub fn apply(&self, mut base: MapConfig) -> MapConfig {
        if let Some(width) = self.width {
            base.width = width;
        }
        if let Some(height) = self.height {
            base.height = height;
        }
        if let Some(ref seed) = self.seed {
            base.seed = Some(seed.clone());
        }
        if let Some(ref dir) = self.output_dir {
            base.output_dir = dir.clone();
        }
        if let Some(encoding) = self.encoding {
            base.encoding = encoding;
        }
        base
    }
}
