//! The static table of supporting-count pairs used to record diff provenance.
//!
//! A [`DiffSequence`] can store, next to each diff state, a 4-bit index into
//! [`COMBINATION_TABLE`] naming the pair of counts that justified the state.
//! The index `0` is reserved for "no known combination", which is why the
//! table holds 15 entries addressed as `1..=15`.
//!
//! [`DiffSequence`]: crate::bits::DiffSequence

/// Number of addressable combination indices, including the `0` sentinel.
/// This is 16 so that an index fits in 4 bits.
pub const COMBINATION_TABLE_LENGTH: usize = 16;

/// The sentinel index returned when a pair is not in the table.
pub const NO_COMBINATION: u8 = 0;

/// An ordered pair of supporting counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Combination {
    pub nums: [u32; 2],
    pub same: bool,
}

impl Combination {
    const fn new(first: u32, second: u32) -> Self {
        Self {
            nums: [first, second],
            same: first == second,
        }
    }
}

/// Known combinations; entry `i` here has combination index `i + 1`.
pub static COMBINATION_TABLE: [Combination; COMBINATION_TABLE_LENGTH - 1] = [
    Combination::new(1, 1),
    Combination::new(1, 2),
    Combination::new(2, 1),
    Combination::new(2, 2),
    Combination::new(1, 3),
    Combination::new(2, 3),
    Combination::new(3, 1),
    Combination::new(3, 2),
    Combination::new(3, 3),
    Combination::new(1, 4),
    Combination::new(1, 5),
    Combination::new(1, 6),
    Combination::new(2, 5),
    Combination::new(3, 5),
    Combination::new(4, 5),
];

/// Return the 1-based index of the pair `(first, second)` in
/// [`COMBINATION_TABLE`], or [`NO_COMBINATION`] if it is not listed.
///
/// The lookup is ordered: `(3, 1)` and `(1, 3)` are different entries.
pub fn combination_index(first: u32, second: u32) -> u8 {
    COMBINATION_TABLE
        .iter()
        .position(|c| c.nums == [first, second])
        .map_or(NO_COMBINATION, |i| (i + 1) as u8)
}

/// Retrieve the [`Combination`] stored at a 1-based combination index.
pub fn combination(index: u8) -> Option<Combination> {
    match index {
        NO_COMBINATION => None,
        i => COMBINATION_TABLE.get(i as usize - 1).copied(),
    }
}
