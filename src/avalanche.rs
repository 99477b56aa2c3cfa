//! Avalanche measurement
//!
//! For each `(key, plaintext)` pair the plaintext is encrypted under the key,
//! the ciphertext is decrypted again and checked against the plaintext, and
//! the fraction of bits that differ between plaintext and ciphertext is
//! recorded.  A well-mixing cipher averages close to one half.
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
    cipher::{decrypt, encrypt, KeySchedule, MAX_ROUNDS},
    error::GeneratorError,
    input::KeyValuePair,
};
use log::{debug, info};
use rand::Rng;
use std::time::{Duration, Instant};

/// Summary of an avalanche run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvalancheReport {
    /// Number of pairs measured.
    pub pairs: u64,
    /// Sum of the per-pair avalanche values.
    pub total: f64,
    /// Wall-clock time spent measuring.
    pub elapsed: Duration,
}

impl AvalancheReport {
    /// Mean avalanche over all pairs, or zero if there were none.
    pub fn average(&self) -> f64 {
        if self.pairs == 0 {
            0.0
        } else {
            self.total / self.pairs as f64
        }
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Fraction of the 16 bits that differ between `plaintext` and `ciphertext`.
#[inline]
pub fn avalanche(plaintext: u16, ciphertext: u16) -> f64 {
    (plaintext ^ ciphertext).count_ones() as f64 / 16.0
}

/// Encrypts `pair.value` under `pair.key`, checks the round trip, and
/// returns the pair's avalanche value.
pub fn measure_pair(pair: &KeyValuePair, rounds: usize) -> Result<f64, GeneratorError> {
    let schedule = KeySchedule::new(pair.key, rounds)?;
    let ciphertext = encrypt(pair.value, &schedule);
    let decrypted = decrypt(ciphertext, &schedule);

    if decrypted != pair.value {
        return Err(GeneratorError::RoundTripFailure {
            key: pair.key,
            plaintext: pair.value,
            decrypted,
        });
    }

    Ok(avalanche(pair.value, ciphertext))
}

/// Measures every pair produced by `pairs`, stopping at the first error.
pub fn measure_avalanche<I>(
    pairs: I,
    rounds: usize,
    progress_interval: u64,
) -> Result<AvalancheReport, GeneratorError>
where
    I: IntoIterator<Item = Result<KeyValuePair, GeneratorError>>,
{
    if rounds == 0 || rounds > MAX_ROUNDS {
        return Err(GeneratorError::InvalidRounds(rounds, MAX_ROUNDS));
    }
    debug!("Measuring avalanche over {} rounds.", rounds);

    let mut measured = 0u64;
    let mut total = 0.0;
    let start = Instant::now();

    for pair in pairs {
        total += measure_pair(&pair?, rounds)?;
        measured += 1;

        if progress_interval != 0 && measured % progress_interval == 0 {
            info!("Measured {} pairs.", measured);
        }
    }

    Ok(AvalancheReport {
        pairs: measured,
        total,
        elapsed: start.elapsed(),
    })
}

/// Draws `count` uniformly random pairs from `rng`.
pub fn random_pairs<'a, R>(
    rng: &'a mut R,
    count: u64,
) -> impl Iterator<Item = Result<KeyValuePair, GeneratorError>> + 'a
where
    R: Rng + ?Sized + 'a,
{
    (0..count).map(move |_| {
        let key = rng.gen::<u16>();
        let value = rng.gen::<u16>();
        Ok(KeyValuePair { key, value })
    })
}
