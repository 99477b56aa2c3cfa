//! Key/value data generator
//!
//! Produces synthetic key/value sample data: a text file holding `count`
//! lines, each a pair of pseudo-random bit-strings separated by a space.
//!
//! ```text
//! 0110100111000101 1110001010010111
//! 0000101101110011 0101111000011010
//! ```
//!
//! Pairs are streamed to the output file as they are generated, so memory
//! use does not grow with the size of the data set.
//!
//! The pairs are read back as `(key, plaintext)` inputs to the CC8 16-bit
//! block cipher, whose average avalanche over many pairs measures how well
//! it mixes.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

/// Avalanche measurement over key/plaintext pairs.
pub mod avalanche;
/// Random bit-string generation.
pub mod bitstring;
/// The CC8 block cipher.
pub mod cipher;
/// Error type.
pub mod error;
/// The timed generation loop.
pub mod generator;
/// Reading key/value files back.
pub mod input;
/// Output file handling.
pub mod output;

pub use crate::avalanche::{measure_avalanche, measure_pair, random_pairs, AvalancheReport};
pub use crate::bitstring::{BitStringGenerator, RangeMode, DEFAULT_WIDTH};
pub use crate::cipher::{decrypt, encrypt, KeySchedule, Mode, DEFAULT_ROUNDS, MAX_ROUNDS};
pub use crate::error::GeneratorError;
pub use crate::generator::{
    seeded_rng, write_pairs, GenerationReport, GeneratorConfig, DEFAULT_COUNT,
    DEFAULT_PROGRESS_INTERVAL,
};
pub use crate::input::{open_key_value_file, parse_pair, KeyValuePair, KeyValueReader};
pub use crate::output::{
    write_key_value_file, write_key_value_file_with_rng, DEFAULT_OUTPUT_FILENAME,
};
