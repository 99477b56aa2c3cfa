//! Writing key/value files
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

use crate::{
    error::GeneratorError,
    generator::{write_pairs, GenerationReport, GeneratorConfig},
};
use log::info;
use rand::Rng;
use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

/// The default filename of the output file, if no alternative is provided on
/// the command line.
pub const DEFAULT_OUTPUT_FILENAME: &'static str = "key-values.txt";

/// Generates the pairs described by `config` into the file at `path`,
/// seeding the random number generator from the configuration.
pub fn write_key_value_file<P: AsRef<Path>>(
    path: P,
    config: &GeneratorConfig,
) -> Result<GenerationReport, GeneratorError> {
    let mut rng = config.rng();
    write_key_value_file_with_rng(path, config, &mut rng)
}

/// As `write_key_value_file`, drawing from the supplied `rng`.
///
/// Any existing file at `path` is truncated.  The file stays open for the
/// whole run and is closed when this function returns, whether or not the
/// run succeeded.
pub fn write_key_value_file_with_rng<P, R>(
    path: P,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GenerationReport, GeneratorError>
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
{
    let path = path.as_ref();

    // Validate before touching the filesystem.
    config.bit_strings()?;

    info!("Writing key/value file, {:?}.", path);

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| GeneratorError::OpenError(path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);

    let report = write_pairs(config, rng, &mut writer)?;

    writer
        .flush()
        .map_err(|e| GeneratorError::FlushError(path.to_path_buf(), e))?;

    info!(
        "Wrote {} pairs ({} bytes) to {:?}.",
        report.pairs, report.bytes_written, path
    );

    Ok(report)
}
