//! Random bit-string generation
//!
//! A bit-string is an unsigned integer drawn uniformly at random and rendered
//! in base 2, zero-padded on the left to a fixed width.  Rendering never
//! truncates, so a value needing more bits than the width is printed in full.
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
use rand::Rng;

////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// The default number of binary digits in a generated bit-string.
pub const DEFAULT_WIDTH: u32 = 16;
/// The widest bit-string we support.  Keeps `2^width` representable in a
/// `u64` for the inclusive range.
pub const MAX_WIDTH: u32 = 63;

////////////////////////////////////////////////////////////////////////////////
// Draw ranges.
////////////////////////////////////////////////////////////////////////////////

/// The range random values are drawn from, relative to `2^width`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RangeMode {
    /// Draw from `[0, 2^width)`.  Every rendered string has exactly `width`
    /// digits.
    Exclusive,
    /// Draw from `[0, 2^width]`.  The single value `2^width` renders with
    /// `width + 1` digits.  Kept to reproduce data sets generated by older
    /// tooling.
    Inclusive,
}

impl Default for RangeMode {
    fn default() -> Self {
        RangeMode::Exclusive
    }
}

////////////////////////////////////////////////////////////////////////////////
// The generator.
////////////////////////////////////////////////////////////////////////////////

/// Produces fixed-width random bit-strings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BitStringGenerator {
    /// Number of binary digits to pad to.
    width: u32,
    /// Which range values are drawn from.
    range: RangeMode,
}

impl BitStringGenerator {
    /// Creates a new generator, failing if `width` is zero or wider than
    /// `MAX_WIDTH`.
    pub fn new(width: u32, range: RangeMode) -> Result<Self, GeneratorError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(GeneratorError::InvalidWidth(width, MAX_WIDTH));
        }
        Ok(Self { width, range })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn range(&self) -> RangeMode {
        self.range
    }

    /// Returns the largest value `draw` can produce.
    pub fn upper_bound(&self) -> u64 {
        let span = 1u64 << self.width;
        match self.range {
            RangeMode::Exclusive => span - 1,
            RangeMode::Inclusive => span,
        }
    }

    /// Draws a value uniformly from `[0, upper_bound()]`.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.gen_range(0..=self.upper_bound())
    }

    /// Renders `value` in base 2, left-padded with zeros to the generator's
    /// width.
    pub fn render(&self, value: u64) -> String {
        format!("{:0width$b}", value, width = self.width as usize)
    }

    /// Number of characters `render(value)` produces, without allocating.
    pub fn rendered_len(&self, value: u64) -> usize {
        let significant = u64::BITS - value.leading_zeros();
        significant.max(self.width) as usize
    }

    /// Draws a value and renders it.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.render(self.draw(rng))
    }
}

impl Default for BitStringGenerator {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            range: RangeMode::default(),
        }
    }
}
