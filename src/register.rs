//! Fixed-width, growable bit register backing every bound variable.
//!
//! The register is addressed by bit *index*, most-significant first: index `0`
//! is the highest-order bit of the register's integer value and index
//! `width - 1` is the lowest. Variables discovered earlier therefore change
//! more slowly during enumeration, which fixes the row order of a truth table.

use std::fmt::{Display, Formatter};

use num_bigint::BigUint;

/// A bit register backed by a vector of u64 words.
///
/// Internally bits are stored by *position* (weight), least-significant word
/// first, so increments can ripple a carry through whole words.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BitRegister {
    /// Storage: each u64 holds 64 positions.
    words: Vec<u64>,
    /// Number of bits in the register.
    width: usize,
}

impl BitRegister {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates a register of the given width with all bits zero.
    pub fn new(width: usize) -> Self {
        let num_words = (width + Self::BITS_PER_WORD - 1) / Self::BITS_PER_WORD;
        Self {
            words: vec![0; num_words],
            width,
        }
    }

    /// Creates a zero-width register.
    pub fn empty() -> Self {
        Self::new(0)
    }

    /// Returns the number of bits.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns true if the register has no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Gets the word index and bit position for a given bit index.
    #[inline]
    fn word_and_bit(&self, index: usize) -> (usize, usize) {
        let position = self.width - 1 - index;
        (position / Self::BITS_PER_WORD, position % Self::BITS_PER_WORD)
    }

    /// Clears the positions above `width` in the top word.
    fn mask_top(&mut self) {
        let used = self.width % Self::BITS_PER_WORD;
        if used != 0 {
            if let Some(top) = self.words.last_mut() {
                *top &= (1u64 << used) - 1;
            }
        }
    }

    /// Returns the bit at the given index, or `None` if it is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.width {
            return None;
        }
        let (word_idx, bit_idx) = self.word_and_bit(index);
        Some((self.words[word_idx] >> bit_idx) & 1 == 1)
    }

    /// Returns the bit at the given index.
    ///
    /// An index outside `[0, width)` reads as `false`. This is the documented
    /// fallback for a bad index; use [`get`][BitRegister::get] to detect it.
    #[inline]
    pub fn bit_at(&self, index: usize) -> bool {
        self.get(index).unwrap_or(false)
    }

    /// Sets the register to `value mod 2^width`.
    ///
    /// Bits of `value` above the register width are discarded. For widths
    /// over 64, `value` fills the lowest word and every higher word is
    /// cleared, so the high-order bits (the lowest indices) read as zero.
    pub fn overwrite(&mut self, value: u64) {
        for word in &mut self.words {
            *word = 0;
        }
        if let Some(low) = self.words.first_mut() {
            *low = value;
        }
        self.mask_top();
    }

    /// Adds one to the register, wrapping from `2^width - 1` to zero.
    pub fn increment(&mut self) {
        for word in &mut self.words {
            let (next, carry) = word.overflowing_add(1);
            *word = next;
            if !carry {
                break;
            }
        }
        self.mask_top();
    }

    /// Appends one zero bit after the current last bit and returns its index.
    ///
    /// The new bit becomes the least-significant one, so the integer value of
    /// the register is doubled.
    pub fn grow_by_one(&mut self) -> usize {
        let index = self.width;
        if self.width % Self::BITS_PER_WORD == 0 {
            self.words.push(0);
        }
        self.width += 1;

        let mut carry = 0;
        for word in &mut self.words {
            let next_carry = *word >> (Self::BITS_PER_WORD - 1);
            *word = (*word << 1) | carry;
            carry = next_carry;
        }

        index
    }

    /// Returns the integer value if it fits into a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        match self.words.split_first() {
            None => Some(0),
            Some((&low, rest)) if rest.iter().all(|&w| w == 0) => Some(low),
            Some(_) => None,
        }
    }

    /// Returns the integer value of the register.
    pub fn to_biguint(&self) -> BigUint {
        self.words
            .iter()
            .rev()
            .fold(BigUint::ZERO, |acc, &word| (acc << Self::BITS_PER_WORD) + word)
    }

    /// Returns an iterator over all bits, most-significant first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).map(move |index| self.bit_at(index))
    }
}

impl Display for BitRegister {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
