//! Reading key/value files
//!
//! Parses files in the format written by `output`: one `"<key> <value>"`
//! pair of 16-digit bit-strings per line.  Blank lines are skipped.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

use crate::error::GeneratorError;
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::{Path, PathBuf},
};

/// Number of binary digits in a field the cipher can consume.
const FIELD_WIDTH: usize = 16;

/// One parsed line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyValuePair {
    pub key: u16,
    pub value: u16,
}

/// Parses a single bit-string field found on line `line`.
fn parse_field(line: u64, field: &str) -> Result<u16, GeneratorError> {
    if field.len() != FIELD_WIDTH || !field.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(GeneratorError::InvalidBitString(line, field.to_string()));
    }
    u16::from_str_radix(field, 2)
        .map_err(|_| GeneratorError::InvalidBitString(line, field.to_string()))
}

/// Parses the text of line number `line` (1-based) into a pair.
pub fn parse_pair(line: u64, text: &str) -> Result<KeyValuePair, GeneratorError> {
    let mut fields = text.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(key), Some(value), None) => Ok(KeyValuePair {
            key: parse_field(line, key)?,
            value: parse_field(line, value)?,
        }),
        _ => Err(GeneratorError::MalformedLine(line, text.to_string())),
    }
}

/// Iterates over the pairs in a key/value stream.
pub struct KeyValueReader<R> {
    lines: Lines<R>,
    line: u64,
    path: PathBuf,
}

impl<R: BufRead> KeyValueReader<R> {
    /// Wraps `reader`.  `path` only labels read errors.
    pub fn new<P: AsRef<Path>>(reader: R, path: P) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl<R: BufRead> Iterator for KeyValueReader<R> {
    type Item = Result<KeyValuePair, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(GeneratorError::ReadError(self.path.clone(), e))),
            };
            self.line += 1;

            if text.trim().is_empty() {
                continue;
            }
            return Some(parse_pair(self.line, &text));
        }
    }
}

/// Opens the key/value file at `path` for reading.
pub fn open_key_value_file<P: AsRef<Path>>(
    path: P,
) -> Result<KeyValueReader<BufReader<File>>, GeneratorError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| GeneratorError::ReadError(path.to_path_buf(), e))?;
    Ok(KeyValueReader::new(BufReader::new(file), path))
}
