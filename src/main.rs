//! Data generator for key/value sample data
//!
//! # Authors
//!
//! The Veracruz Development Team.
//!
//! # Copyright
//!
//! See the file `LICENSE.md` in the Veracruz root directory for licensing
//! and copyright information.
//!
//! # Example
//! ```
//! cargo run -- --output [PATH] --size [NUMBER_OF_PAIRS] --seed [RANDOM_SEED];
//! cargo run -- avalanche --input [PATH] --rounds [ROUNDS];
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use key_value_generator::{
    measure_avalanche, open_key_value_file, random_pairs, seeded_rng, write_key_value_file,
    GeneratorConfig, RangeMode, DEFAULT_COUNT, DEFAULT_OUTPUT_FILENAME,
    DEFAULT_PROGRESS_INTERVAL, DEFAULT_ROUNDS, DEFAULT_WIDTH,
};
use log::{info, warn};
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// About the utility.
const ABOUT: &'static str = "Generate a text file of pseudo-random binary-string \
pairs, one `KEY VALUE` pair per line, for use as sample key/value data, and \
measure the avalanche of the CC8 block cipher over such pairs.";
/// The name of the application.
const APPLICATION_NAME: &'static str = "key-value-generator";
/// The authors list.
const AUTHORS: &'static str = "The Veracruz Development Team.  See the file \
`AUTHORS.md` in the Veracruz `docs` subdirectory for detailed authorship \
information.";
/// The application's version information.
const VERSION: &'static str = "0.3.0";

////////////////////////////////////////////////////////////////////////////////
// Command line parsing.
////////////////////////////////////////////////////////////////////////////////

/// A structure collating all of the arguments passed to the executable.
#[derive(Debug, Parser)]
#[command(name = APPLICATION_NAME, author = AUTHORS, version = VERSION, about = ABOUT, long_about = None, rename_all = "kebab-case", args_conflicts_with_subcommands = true)]
struct Arguments {
    /// The filename of the output file.  An existing file is overwritten.
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_FILENAME, value_name = "PATH")]
    output: PathBuf,
    /// The number of key/value pairs (lines) to generate.
    #[arg(long, short = 's', default_value_t = DEFAULT_COUNT, value_name = "NUMBER")]
    size: u64,
    /// The number of binary digits in each key and value.
    #[arg(long, short = 'w', default_value_t = DEFAULT_WIDTH, value_name = "NUMBER")]
    width: u32,
    /// The seed for the random number generator.  Seeded from the operating
    /// system if absent.
    #[arg(long, short = 'e', value_name = "NUMBER")]
    seed: Option<u64>,
    /// Log progress every this many pairs.  Zero disables progress logging.
    #[arg(long, short = 'p', default_value_t = DEFAULT_PROGRESS_INTERVAL, value_name = "NUMBER")]
    progress_interval: u64,
    /// Draw values from `[0, 2^WIDTH]` rather than `[0, 2^WIDTH)`, matching
    /// older data sets.  The value `2^WIDTH` then renders one digit wider than
    /// the others.
    #[arg(long)]
    inclusive_range: bool,
    /// Run a different task instead of generating a file.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Tasks other than generation.
#[derive(Debug, Subcommand)]
enum Command {
    /// Encrypt and decrypt key/plaintext pairs with CC8 and report the
    /// average avalanche.
    Avalanche(AvalancheArguments),
}

/// Arguments of the `avalanche` task.
#[derive(Debug, Args)]
#[command(rename_all = "kebab-case")]
struct AvalancheArguments {
    /// A key/value file to read `KEY PLAINTEXT` pairs from.  Pairs are drawn
    /// at random if absent.
    #[arg(long, short = 'i', value_name = "PATH")]
    input: Option<PathBuf>,
    /// The number of random pairs to draw when no input file is given.
    #[arg(long, short = 's', default_value_t = DEFAULT_COUNT, value_name = "NUMBER")]
    size: u64,
    /// The seed for the random number generator.
    #[arg(long, short = 'e', value_name = "NUMBER")]
    seed: Option<u64>,
    /// The number of cipher rounds.
    #[arg(long, short = 'r', default_value_t = DEFAULT_ROUNDS, value_name = "NUMBER")]
    rounds: usize,
    /// Log progress every this many pairs.  Zero disables progress logging.
    #[arg(long, short = 'p', default_value_t = DEFAULT_PROGRESS_INTERVAL, value_name = "NUMBER")]
    progress_interval: u64,
}

impl AvalancheArguments {
    /// Measures the avalanche and prints the average and the time taken.
    fn run(&self) -> Result<()> {
        let report = match &self.input {
            Some(path) => {
                info!("Reading key/plaintext pairs from {:?}.", path);
                let pairs = open_key_value_file(path)
                    .with_context(|| format!("Could not open {:?}", path))?;
                measure_avalanche(pairs, self.rounds, self.progress_interval)
            }
            None => {
                info!("Drawing {} random key/plaintext pairs.", self.size);
                let mut rng = seeded_rng(self.seed);
                measure_avalanche(
                    random_pairs(&mut rng, self.size),
                    self.rounds,
                    self.progress_interval,
                )
            }
        }
        .context("Could not measure the avalanche")?;

        println!("Average avalanche: {:.6}", report.average());
        println!("Time: {}", report.elapsed_secs());

        Ok(())
    }
}

impl Arguments {
    /// Parses the command line options, building a `Arguments` struct out
    /// of them.  If required options are not present, or if any options are
    /// malformed, this will abort the program.
    fn parse_command_line() -> Result<Self> {
        Ok(Arguments::parse())
    }

    /// Converts the arguments into a generator configuration.
    fn generator_config(&self) -> GeneratorConfig {
        let range = if self.inclusive_range {
            warn!(
                "Inclusive range selected: the value 2^{} renders with {} digits.",
                self.width,
                self.width.saturating_add(1)
            );
            RangeMode::Inclusive
        } else {
            RangeMode::Exclusive
        };

        match self.seed {
            Some(seed) => info!("Seeding random number generator with {}.", seed),
            None => info!("Seeding random number generator from the operating system."),
        }

        GeneratorConfig {
            count: self.size,
            width: self.width,
            range,
            progress_interval: self.progress_interval,
            seed: self.seed,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Entry point.
////////////////////////////////////////////////////////////////////////////////

fn main() -> Result<()> {
    env_logger::init();

    let arguments = Arguments::parse_command_line()?;

    if let Some(Command::Avalanche(avalanche)) = &arguments.command {
        return avalanche.run();
    }

    let config = arguments.generator_config();

    let report = write_key_value_file(&arguments.output, &config)
        .with_context(|| format!("Could not generate {:?}", arguments.output))?;

    println!("Done");
    println!("Time: {}", report.elapsed_secs());

    Ok(())
}
