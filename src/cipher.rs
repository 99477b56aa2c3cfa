//! The CC8 block cipher
//!
//! CC8 is a toy 16-bit Feistel block cipher in the style of DES, keyed with
//! 16 bits and run for up to eight rounds.  Generated key/value files feed it
//! `(key, plaintext)` pairs for avalanche measurements.
//!
//! Bits are numbered most-significant first: bit 0 of a 16-bit block is the
//! leftmost digit of its binary rendering, and every table below indexes
//! bits that way.
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

////////////////////////////////////////////////////////////////////////////////
// Tables.
////////////////////////////////////////////////////////////////////////////////

/// Initial permutation of the 16-bit block.
const IP: [usize; 16] = [13, 9, 5, 1, 15, 11, 7, 3, 12, 8, 4, 0, 14, 10, 6, 2];
/// Final permutation, the inverse of `IP`.
const FP: [usize; 16] = [11, 3, 15, 7, 10, 2, 14, 6, 9, 1, 13, 5, 8, 0, 12, 4];
/// Expands an 8-bit half block to 12 bits.
const E: [usize; 12] = [7, 0, 1, 2, 2, 3, 4, 5, 5, 6, 7, 0];
/// Permutes the 8-bit S-box output.  Entries are 1-based positions.
const P: [usize; 8] = [6, 5, 8, 7, 4, 3, 1, 2];
/// The four 4x2 substitution boxes, indexed `[box][row][column]`.
const S: [[[u8; 2]; 4]; 4] = [
    [[0, 2], [1, 3], [3, 0], [2, 1]],
    [[0, 3], [2, 0], [1, 2], [3, 1]],
    [[1, 0], [3, 2], [2, 3], [0, 1]],
    [[3, 2], [1, 0], [1, 0], [2, 3]],
];
/// Permuted choice 1: drops key bits 7 and 15, leaving 14.
const PC1: [usize; 14] = [6, 4, 11, 5, 1, 2, 0, 14, 12, 13, 9, 3, 10, 8];
/// Permuted choice 2: drops bits 3 and 8 of the rotated 14, leaving 12.
const PC2: [usize; 12] = [6, 4, 2, 5, 0, 1, 12, 13, 10, 9, 11, 7];
/// Left rotation applied to both key halves, per round.
const SHIFTS: [u32; 8] = [1, 2, 2, 1, 1, 2, 2, 1];

/// The number of rounds CC8 is normally run for.
pub const DEFAULT_ROUNDS: usize = 8;
/// The most rounds the key schedule can produce.
pub const MAX_ROUNDS: usize = SHIFTS.len();

////////////////////////////////////////////////////////////////////////////////
// Bit manipulation.
////////////////////////////////////////////////////////////////////////////////

/// Builds a `table.len()`-bit word whose bit `i` is bit `table[i] - offset`
/// of the `width`-bit `input`.
fn permute(input: u32, width: usize, table: &[usize], offset: usize) -> u32 {
    table.iter().fold(0, |output, &position| {
        let source = position - offset;
        (output << 1) | ((input >> (width - 1 - source)) & 1)
    })
}

#[inline]
fn rotate_left_7(half: u32, shift: u32) -> u32 {
    ((half << shift) | (half >> (7 - shift))) & 0x7f
}

////////////////////////////////////////////////////////////////////////////////
// Key schedule.
////////////////////////////////////////////////////////////////////////////////

/// The 12-bit round subkeys derived from a 16-bit key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeySchedule {
    subkeys: Vec<u16>,
}

impl KeySchedule {
    /// Derives `rounds` subkeys from `key`.  Each round starts again from
    /// `PC1(key)` and rotates both 7-bit halves by that round's shift.
    pub fn new(key: u16, rounds: usize) -> Result<Self, GeneratorError> {
        if rounds == 0 || rounds > MAX_ROUNDS {
            return Err(GeneratorError::InvalidRounds(rounds, MAX_ROUNDS));
        }

        let chosen = permute(key as u32, 16, &PC1, 0);
        let subkeys = SHIFTS[..rounds]
            .iter()
            .map(|&shift| {
                let left = rotate_left_7(chosen >> 7, shift);
                let right = rotate_left_7(chosen & 0x7f, shift);
                permute((left << 7) | right, 14, &PC2, 0) as u16
            })
            .collect();

        Ok(Self { subkeys })
    }

    #[inline]
    pub fn rounds(&self) -> usize {
        self.subkeys.len()
    }

    #[inline]
    pub fn subkeys(&self) -> &[u16] {
        &self.subkeys
    }
}

////////////////////////////////////////////////////////////////////////////////
// The cipher.
////////////////////////////////////////////////////////////////////////////////

/// Direction of a cipher pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// The round function: expand, mix in the subkey, substitute, permute.
pub fn round_function(half: u8, subkey: u16) -> u8 {
    let mixed = permute(half as u32, 8, &E, 0) ^ (subkey as u32 & 0xfff);

    let substituted = S.iter().enumerate().fold(0u32, |output, (index, sbox)| {
        let chunk = (mixed >> (9 - 3 * index)) & 0b111;
        let row = (((chunk >> 2) & 1) << 1 | (chunk & 1)) as usize;
        let column = ((chunk >> 1) & 1) as usize;
        let cell = sbox[row][column] as u32;
        // The low bit of the cell comes first.
        output | (cell & 1) << (7 - 2 * index) | ((cell >> 1) & 1) << (6 - 2 * index)
    });

    permute(substituted, 8, &P, 1) as u8
}

/// Runs the Feistel network over `block` in the given direction.
pub fn iterative_cipher(block: u16, schedule: &KeySchedule, mode: Mode) -> u16 {
    let permuted = permute(block as u32, 16, &IP, 0);
    let mut left = (permuted >> 8) as u8;
    let mut right = permuted as u8;

    let mut step = |subkey: u16| {
        let next = left ^ round_function(right, subkey);
        left = right;
        right = next;
    };
    match mode {
        Mode::Encrypt => schedule.subkeys().iter().copied().for_each(&mut step),
        Mode::Decrypt => schedule.subkeys().iter().rev().copied().for_each(&mut step),
    }

    // Halves are swapped on the way out.
    let joined = (right as u32) << 8 | left as u32;
    permute(joined, 16, &FP, 0) as u16
}

#[inline]
pub fn encrypt(plaintext: u16, schedule: &KeySchedule) -> u16 {
    iterative_cipher(plaintext, schedule, Mode::Encrypt)
}

#[inline]
pub fn decrypt(ciphertext: u16, schedule: &KeySchedule) -> u16 {
    iterative_cipher(ciphertext, schedule, Mode::Decrypt)
}
