//! Key/value generator errors
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

use err_derive::Error;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// Generator error type.
////////////////////////////////////////////////////////////////////////////////

/// An enumerated type of errors raised while generating key/value data.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The requested bit width cannot be rendered from a `u64` draw.
    #[error(
        display = "GeneratorError: unsupported bit width {}, expected a width between 1 and {}.",
        _0,
        _1
    )]
    InvalidWidth(u32, u32),
    /// The output file could not be created or truncated.
    #[error(display = "GeneratorError: failed to open output file {:?}: {:?}.", _0, _1)]
    OpenError(PathBuf, #[error(source)] std::io::Error),
    /// A generated pair could not be written to the output.
    #[error(display = "GeneratorError: failed to write pair {}: {:?}.", _0, _1)]
    WriteError(u64, #[error(source)] std::io::Error),
    /// Buffered output could not be flushed to the output file.
    #[error(display = "GeneratorError: failed to flush output file {:?}: {:?}.", _0, _1)]
    FlushError(PathBuf, #[error(source)] std::io::Error),
    /// The cipher was asked for more rounds than its key schedule provides.
    #[error(
        display = "GeneratorError: unsupported round count {}, expected between 1 and {}.",
        _0,
        _1
    )]
    InvalidRounds(usize, usize),
    /// A key/value file could not be opened or read.
    #[error(display = "GeneratorError: failed to read input file {:?}: {:?}.", _0, _1)]
    ReadError(PathBuf, #[error(source)] std::io::Error),
    /// A line did not hold exactly two whitespace-separated fields.
    #[error(display = "GeneratorError: line {} is not a key/value pair: {:?}.", _0, _1)]
    MalformedLine(u64, String),
    /// A field was not a 16-digit bit-string.
    #[error(
        display = "GeneratorError: line {} holds {:?}, expected 16 binary digits.",
        _0,
        _1
    )]
    InvalidBitString(u64, String),
    /// Decrypting a ciphertext did not give back its plaintext.
    #[error(
        display = "GeneratorError: round trip failed for key {:016b}: plaintext {:016b} decrypted to {:016b}.",
        key,
        plaintext,
        decrypted
    )]
    RoundTripFailure {
        key: u16,
        plaintext: u16,
        decrypted: u16,
    },
}
