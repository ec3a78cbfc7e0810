use std::path::PathBuf;

use tessera_core::generate;
use tessera_persist::quantize::RGB8_EXACT_MAX_SIDE;
use tessera_persist::save;

use crate::config::{MapConfig, MapEncoding};
use crate::error::CliError;
use crate::report::RunReport;

/// File name of the shuffle map inside the output directory.
pub const SHUFFLE_FILE: &str = "offset_map.tsr";

/// File name of the unshuffle map inside the output directory.
pub const UNSHUFFLE_FILE: &str = "inv_offset_map.tsr";

/// Caveat to log for lossy encodings.
pub fn encoding_warning(encoding: MapEncoding) -> Option<String> {
    match encoding {
        MapEncoding::F32 => None,
        MapEncoding::Rgb8 => Some(format!(
            "rgb8 maps only remap exactly onto images whose sides are at most {RGB8_EXACT_MAX_SIDE} px; \
             use f32 for larger or upscaled images"
        )),
    }
}

/// Generate both maps for `config` and write them to its output directory.
pub fn run(config: &MapConfig) -> Result<RunReport, CliError> {
    let seed = config.seed()?;
    log::info!(
        "Generating offset maps for a {}x{} grid...",
        config.width,
        config.height
    );
    let maps = generate(config.width, config.height, seed)?;
    let grid = maps.shuffle.grid();

    if let Some(warning) = encoding_warning(config.encoding) {
        log::warn!("{warning}");
    }
    let encoding = config.encoding.into();
    let shuffle_bytes = save(&maps.shuffle, encoding)?;
    let unshuffle_bytes = save(&maps.unshuffle, encoding)?;

    std::fs::create_dir_all(&config.output_dir)?;
    let shuffle_path: PathBuf = config.output_dir.join(SHUFFLE_FILE);
    let unshuffle_path: PathBuf = config.output_dir.join(UNSHUFFLE_FILE);
    std::fs::write(&shuffle_path, &shuffle_bytes)?;
    log::info!("Saved shuffle map to {}", shuffle_path.display());
    std::fs::write(&unshuffle_path, &unshuffle_bytes)?;
    log::info!("Saved unshuffle map to {}", unshuffle_path.display());

    let max_displacement = maps
        .shuffle
        .as_slice()
        .iter()
        .fold(0.0f32, |acc, v| acc.max(v.abs()));

    Ok(RunReport {
        width: grid.width(),
        height: grid.height(),
        cells: grid.total(),
        encoding: config.encoding,
        shuffle_path,
        shuffle_bytes: shuffle_bytes.len(),
        unshuffle_path,
        unshuffle_bytes: unshuffle_bytes.len(),
        max_displacement,
    })
}
