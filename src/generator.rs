//! The key/value generation loop
//!
//! Draws `count` pairs of bit-strings and streams each pair, as a single
//! `"<key> <value>\n"` line, into a writer.  The loop is timed with a
//! monotonic clock.
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
    bitstring::{BitStringGenerator, RangeMode, DEFAULT_WIDTH},
    error::GeneratorError,
};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    io::Write,
    time::{Duration, Instant},
};

////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// The default number of pairs to generate.
pub const DEFAULT_COUNT: u64 = 1_000_000;
/// The default number of pairs between two progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Seeds a `StdRng` from `seed`, or from the operating system if `None`.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Configuration.
////////////////////////////////////////////////////////////////////////////////

/// Everything controlling a generation run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    /// Number of pairs (output lines) to generate.
    pub count: u64,
    /// Number of binary digits in each bit-string.
    pub width: u32,
    /// Range the random values are drawn from.
    pub range: RangeMode,
    /// Pairs between progress reports.  Zero disables them.
    pub progress_interval: u64,
    /// Seed for a reproducible run, or `None` to seed from the OS.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Builds the random number generator for this run.
    pub fn rng(&self) -> StdRng {
        seeded_rng(self.seed)
    }

    /// Builds the bit-string generator for this run.
    pub fn bit_strings(&self) -> Result<BitStringGenerator, GeneratorError> {
        BitStringGenerator::new(self.width, self.range)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            width: DEFAULT_WIDTH,
            range: RangeMode::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            seed: None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Reporting.
////////////////////////////////////////////////////////////////////////////////

/// Summary of a completed generation run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationReport {
    /// Number of pairs written.
    pub pairs: u64,
    /// Number of bytes handed to the writer.
    pub bytes_written: u64,
    /// Wall-clock time spent in the generation loop.
    pub elapsed: Duration,
}

impl GenerationReport {
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

////////////////////////////////////////////////////////////////////////////////
// The loop.
////////////////////////////////////////////////////////////////////////////////

/// Generates `config.count` pairs with `rng` and writes them to `sink`, one
/// pair per line.  The caller owns `sink` and is responsible for flushing it.
pub fn write_pairs<R, W>(
    config: &GeneratorConfig,
    rng: &mut R,
    sink: &mut W,
) -> Result<GenerationReport, GeneratorError>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let bit_strings = config.bit_strings()?;
    let width = bit_strings.width() as usize;

    debug!(
        "Generating {} pairs of {}-bit strings, drawing from [0, {}].",
        config.count,
        width,
        bit_strings.upper_bound()
    );

    let mut bytes_written = 0u64;
    let start = Instant::now();

    for index in 0..config.count {
        let key = bit_strings.draw(rng);
        let value = bit_strings.draw(rng);

        writeln!(sink, "{:0w$b} {:0w$b}", key, value, w = width)
            .map_err(|e| GeneratorError::WriteError(index, e))?;
        bytes_written +=
            (bit_strings.rendered_len(key) + bit_strings.rendered_len(value) + 2) as u64;

        let generated = index + 1;
        if config.progress_interval != 0 && generated % config.progress_interval == 0 {
            info!("Generated {} of {} pairs.", generated, config.count);
        }
    }

    let elapsed = start.elapsed();

    Ok(GenerationReport {
        pairs: config.count,
        bytes_written,
        elapsed,
    })
}
