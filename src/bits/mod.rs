//! Packed storage for per-position diff states.
//!
//! A [`DiffSequence`] stores one [`DiffState`] per logical position in 2 bits,
//! packed into 64-bit words (the *word plane*). Optionally, a second plane (the
//! *combine plane*) stores a 4-bit [combination index] per position, recording
//! which pair of supporting counts justified the state.
//!
//! Both planes are sized once, at construction, and never grow. Indexing past
//! the sequence length is a contract violation and panics.
//!
//! ## Dump Formats
//!
//! The `dump_*` methods render the planes as text for tests and debugging:
//!
//!  - `*_as_bits`: one line per word, bits written least significant first, so
//!    position 0 is leftmost.
//!  - `*_as_type`: one line per word, one character per position slot in the
//!    word (32 for the word plane, 16 for the combine plane).
//!
//! [combination index]: crate::bits::combination

pub mod combination;

use std::fmt;

use crate::Position;
use combination::{combination_index, NO_COMBINATION};

const WORD_SIZE: u64 = 64;
const LOG2_WORD_SIZE: u32 = 6;

/// Bits used per position in the word plane.
pub const STATE_BITS: u64 = 2;
/// Bits used per position in the combine plane.
pub const COMBINE_BITS: u64 = 4;

const STATE_MASK: u64 = 0b11;
const COMBINE_MASK: u64 = 0b1111;

/// Compute how many 64-bit words are needed to hold `length` positions of
/// `bits` bits each. A zero-length sequence still gets one word.
pub fn words_needed(length: Position, bits: u64) -> usize {
    if length == 0 {
        return 1;
    }
    ((length as u64 * bits + (WORD_SIZE - 1)) >> LOG2_WORD_SIZE) as usize
}

/// Split a position into its word index and bit offset within that word.
fn locate(index: Position, bits: u64) -> (usize, u64) {
    let bit = index as u64 * bits;
    ((bit >> LOG2_WORD_SIZE) as usize, bit & (WORD_SIZE - 1))
}

/// Render a word with its least significant bit first.
fn reversed_bits(word: u64) -> String {
    (0..WORD_SIZE)
        .map(|bit| if (word >> bit) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// The classification of a single aligned position.
///
/// The 2-bit codes are:
///
///  - `Default` - 00
///  - `Simple`  - 01
///  - `Complex` - 10
///  - `Unknown` - 11
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DiffState {
    /// No difference.
    #[default]
    Default,
    /// Content differs.
    Simple,
    /// Inside a merged (mixed tag) run.
    Complex,
    /// One or both blocks are invalid.
    Unknown,
}

impl DiffState {
    pub const ALL: [DiffState; 4] = [
        DiffState::Default,
        DiffState::Simple,
        DiffState::Complex,
        DiffState::Unknown,
    ];

    /// The 2-bit code of this state.
    pub fn code(self) -> u8 {
        match self {
            DiffState::Default => 0b00,
            DiffState::Simple => 0b01,
            DiffState::Complex => 0b10,
            DiffState::Unknown => 0b11,
        }
    }

    /// The single decimal digit used in type dumps.
    pub fn digit(self) -> char {
        char::from(b'0' + self.code())
    }

    // The code is written into the plane with its first digit in the lower bit.
    fn plane_bits(self) -> u64 {
        let code = self.code() as u64;
        ((code & 1) << 1) | (code >> 1)
    }

    fn from_plane_bits(bits: u64) -> Self {
        match bits & STATE_MASK {
            0b00 => DiffState::Default,
            0b10 => DiffState::Simple,
            0b01 => DiffState::Complex,
            _ => DiffState::Unknown,
        }
    }
}

impl fmt::Display for DiffState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

/// A fixed-length packed sequence of [`DiffState`]s, with an optional plane of
/// combination indices.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffSequence {
    length: Position,
    words: Vec<u64>,
    combines: Option<Vec<u64>>,
}

impl DiffSequence {
    /// Create a new [`DiffSequence`] of `length` positions, all
    /// [`DiffState::Default`] with no recorded combination.
    pub fn new(length: Position) -> Self {
        Self {
            length,
            words: vec![0; words_needed(length, STATE_BITS)],
            combines: Some(vec![0; words_needed(length, COMBINE_BITS)]),
        }
    }

    /// Create a new [`DiffSequence`] without the combine plane.
    pub fn without_combinations(length: Position) -> Self {
        Self {
            length,
            words: vec![0; words_needed(length, STATE_BITS)],
            combines: None,
        }
    }

    /// The number of logical positions.
    pub fn len(&self) -> Position {
        self.length
    }

    /// Return whether this sequence has no positions.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Return whether this sequence carries a combine plane.
    pub fn has_combinations(&self) -> bool {
        self.combines.is_some()
    }

    fn check_index(&self, index: Position) {
        assert!(
            index < self.length,
            "index {} is out of range for a DiffSequence of length {}",
            index,
            self.length
        );
    }

    /// Set the [`DiffState`] at `index`, overwriting any previous state.
    ///
    /// # Panics
    /// Panics if `index` is not less than the sequence length.
    pub fn set(&mut self, index: Position, state: DiffState) -> &mut Self {
        self.check_index(index);
        let (word, offset) = locate(index, STATE_BITS);
        let bits = &mut self.words[word];
        *bits = (*bits & !(STATE_MASK << offset)) | (state.plane_bits() << offset);
        self
    }

    /// Set the [`DiffState`] at `index`, and record the combination index of
    /// the supporting-count pair `(first, second)`. Pairs that are not in the
    /// combination table record [`NO_COMBINATION`].
    ///
    /// # Panics
    /// Panics if `index` is out of range, or if this sequence was created
    /// without a combine plane.
    pub fn set_with_combination(
        &mut self,
        index: Position,
        state: DiffState,
        first: u32,
        second: u32,
    ) -> &mut Self {
        self.set(index, state);
        let value = combination_index(first, second) as u64;
        let (word, offset) = locate(index, COMBINE_BITS);
        let combines = self
            .combines
            .as_mut()
            .expect("DiffSequence was created without a combine plane");
        let bits = &mut combines[word];
        *bits = (*bits & !(COMBINE_MASK << offset)) | (value << offset);
        self
    }

    /// Get the [`DiffState`] at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not less than the sequence length.
    pub fn get(&self, index: Position) -> DiffState {
        self.check_index(index);
        let (word, offset) = locate(index, STATE_BITS);
        DiffState::from_plane_bits(self.words[word] >> offset)
    }

    /// Get the combination index recorded at `index`; `0` means no recorded
    /// combination (which is also the answer when there is no combine plane).
    ///
    /// # Panics
    /// Panics if `index` is not less than the sequence length.
    pub fn combination_index(&self, index: Position) -> u8 {
        self.check_index(index);
        let (word, offset) = locate(index, COMBINE_BITS);
        self.combines.as_ref().map_or(NO_COMBINATION, |combines| {
            ((combines[word] >> offset) & COMBINE_MASK) as u8
        })
    }

    /// Iterate over the states of all positions, in order.
    pub fn iter(&self) -> impl Iterator<Item = DiffState> + '_ {
        (0..self.length).map(|index| self.get(index))
    }

    /// Count positions per state, indexed by [`DiffState::code`].
    pub fn counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for state in self.iter() {
            counts[state.code() as usize] += 1;
        }
        counts
    }

    /// Dump the word plane as bits, one line per word.
    pub fn dump_words_as_bits(&self) -> String {
        dump_bits(&self.words)
    }

    /// Dump the combine plane as bits, one line per word. Empty if there is
    /// no combine plane.
    pub fn dump_combines_as_bits(&self) -> String {
        self.combines.as_deref().map_or_else(String::new, dump_bits)
    }

    /// Dump the word plane as state digits:
    ///
    ///  - 0 - Default
    ///  - 1 - Simple
    ///  - 2 - Complex
    ///  - 3 - Unknown
    pub fn dump_words_as_type(&self) -> String {
        dump_slots(&self.words, STATE_BITS, |bits| DiffState::from_plane_bits(bits).digit())
    }

    /// Dump the combine plane as one character per position, `'0'` plus the
    /// combination index. Empty if there is no combine plane.
    pub fn dump_combines_as_type(&self) -> String {
        self.combines.as_deref().map_or_else(String::new, |combines| {
            dump_slots(combines, COMBINE_BITS, |bits| char::from(b'0' + bits as u8))
        })
    }
}

fn dump_bits(words: &[u64]) -> String {
    let mut out = String::with_capacity(words.len() * (WORD_SIZE as usize + 1));
    for &word in words {
        out.push_str(&reversed_bits(word));
        out.push('\n');
    }
    out
}

fn dump_slots<F>(words: &[u64], bits: u64, render: F) -> String
where
    F: Fn(u64) -> char,
{
    let mask: u64 = (1 << bits) - 1;
    let mut out = String::new();
    for &word in words {
        for offset in (0..WORD_SIZE).step_by(bits as usize) {
            out.push(render((word >> offset) & mask));
        }
        out.push('\n');
    }
    out
}
