//! Computing the packed diff of two aligned block sequences.
//!
//! The walk visits every position of the *left* (reference) sequence once,
//! while a cursor into the *right* sequence only advances after a successful
//! content comparison. This lets one right block stand for several left
//! positions:
//!
//!  1. Inside a merged run, the position is [`DiffState::Complex`].
//!  2. A right block with `n > 0` mixed tags starts a merged run; it and the
//!     next `n` positions are [`DiffState::Complex`].
//!  3. If either block is invalid, the position is [`DiffState::Unknown`] and
//!     the right cursor stays put.
//!  4. Otherwise the block data are compared: [`DiffState::Default`] if equal,
//!     [`DiffState::Simple`] if not, and the right cursor advances.
//!
//! Only mixed tags on the right sequence are handled.

use crate::{
    bits::{DiffSequence, DiffState},
    error::LightningError,
    genome::GenomeBlock,
    traits::BlockSequence,
    Position,
};

/// The result of classifying one position: its state, and the pair of
/// supporting counts `(left positions, right blocks)`, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffStep {
    pub state: DiffState,
    pub support: Option<(u32, u32)>,
}

/// The state carried across the diff walk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffWalk {
    b_index: usize,
    skip_remaining: u32,
    in_merged_run: bool,
    run_width: u32,
}

impl DiffWalk {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cursor into the right sequence, i.e. the number of right blocks
    /// consumed so far.
    pub fn b_index(&self) -> usize {
        self.b_index
    }

    /// Return whether the walk is currently inside a merged run.
    pub fn in_merged_run(&self) -> bool {
        self.in_merged_run
    }

    fn right_block<'a, R>(
        &self,
        position: Position,
        right: &'a R,
    ) -> Result<&'a GenomeBlock, LightningError>
    where
        R: BlockSequence + ?Sized,
    {
        right
            .block(self.b_index)
            .ok_or(LightningError::BlockCursorOverrun {
                position,
                cursor: self.b_index,
                len: right.len(),
            })
    }

    /// Classify the left block at `position` against the right sequence,
    /// updating the walk state.
    pub fn step<R>(
        &mut self,
        position: Position,
        left: &GenomeBlock,
        right: &R,
    ) -> Result<DiffStep, LightningError>
    where
        R: BlockSequence + ?Sized,
    {
        if self.skip_remaining > 0 {
            self.skip_remaining -= 1;
            return Ok(self.complex());
        }

        if !self.in_merged_run {
            self.skip_remaining = self.right_block(position, right)?.num_mixed_tag;
            if self.skip_remaining > 0 {
                self.in_merged_run = true;
                self.run_width = self.skip_remaining.saturating_add(1);
                return Ok(self.complex());
            }
        }

        let right_block = self.right_block(position, right)?;
        if !left.valid || !right_block.valid {
            return Ok(DiffStep {
                state: DiffState::Unknown,
                support: None,
            });
        }

        self.in_merged_run = false;
        let state = if left.data == right_block.data {
            DiffState::Default
        } else {
            DiffState::Simple
        };
        self.b_index += 1;
        Ok(DiffStep {
            state,
            support: Some((1, 1)),
        })
    }

    fn complex(&self) -> DiffStep {
        DiffStep {
            state: DiffState::Complex,
            support: Some((self.run_width, 1)),
        }
    }

    /// Walk every position of `left`, writing its state into `diff`. The
    /// supporting-count pairs are recorded too if `diff` has a combine plane.
    ///
    /// # Panics
    /// Panics if `diff` is shorter than `left`.
    pub fn run<L, R>(
        &mut self,
        left: &L,
        right: &R,
        diff: &mut DiffSequence,
    ) -> Result<(), LightningError>
    where
        L: BlockSequence + ?Sized,
        R: BlockSequence + ?Sized,
    {
        let record = diff.has_combinations();
        for (position, block) in (0..checked_length(left)?).zip(left.iter_blocks()) {
            let step = self.step(position, block, right)?;
            match (record, step.support) {
                (true, Some((first, second))) => {
                    diff.set_with_combination(position, step.state, first, second)
                }
                (true, None) => diff.set_with_combination(position, step.state, 0, 0),
                (false, _) => diff.set(position, step.state),
            };
        }
        Ok(())
    }
}

fn checked_length<L: BlockSequence + ?Sized>(left: &L) -> Result<Position, LightningError> {
    Position::try_from(left.len()).map_err(|_| LightningError::SequenceTooLong(left.len()))
}

/// Compute the [`DiffSequence`] of `right` against the reference `left`. The
/// result has one position per left block.
pub fn compute_diff<L, R>(left: &L, right: &R) -> Result<DiffSequence, LightningError>
where
    L: BlockSequence + ?Sized,
    R: BlockSequence + ?Sized,
{
    let mut diff = DiffSequence::without_combinations(checked_length(left)?);
    DiffWalk::new().run(left, right, &mut diff)?;
    Ok(diff)
}

/// Like [`compute_diff`], but also record the combination index of each
/// position's supporting-count pair.
pub fn compute_diff_with_provenance<L, R>(
    left: &L,
    right: &R,
) -> Result<DiffSequence, LightningError>
where
    L: BlockSequence + ?Sized,
    R: BlockSequence + ?Sized,
{
    let mut diff = DiffSequence::new(checked_length(left)?);
    DiffWalk::new().run(left, right, &mut diff)?;
    Ok(diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::GenomeSequence;
    use crate::test_utilities::{mutate_block, random_sequence};

    const REF: &str = "GGGGGGGGAAAAAAAACCCCCCCCC";

    fn repeated(n: usize) -> GenomeSequence {
        (0..n).map(|_| GenomeBlock::new(REF)).collect()
    }

    fn states(diff: &DiffSequence) -> Vec<DiffState> {
        diff.iter().collect()
    }

    #[test]
    fn test_merged_run_width() {
        let left = repeated(6);
        let right: GenomeSequence = vec![
            GenomeBlock::new(REF).with_mixed_tags(3),
            GenomeBlock::new(REF),
            GenomeBlock::new(REF),
        ]
        .into();

        let mut walk = DiffWalk::new();
        for position in 0..4 {
            let step = walk.step(position, &left.blocks()[0], &right).unwrap();
            assert_eq!(step.state, DiffState::Complex);
            assert_eq!(step.support, Some((4, 1)));
            assert_eq!(walk.b_index(), 0);
        }
        assert!(walk.in_merged_run());

        // the merged block itself is compared once the run is over
        let step = walk.step(4, &left.blocks()[0], &right).unwrap();
        assert_eq!(step.state, DiffState::Default);
        assert_eq!(walk.b_index(), 1);
        assert!(!walk.in_merged_run());
    }

    #[test]
    fn test_merged_run_max_mixed_tags() {
        let left = repeated(3);
        let right: GenomeSequence = vec![GenomeBlock::new(REF).with_mixed_tags(u32::MAX)].into();

        let diff = compute_diff(&left, &right).unwrap();
        assert_eq!(states(&diff), vec![DiffState::Complex; 3]);

        let diff = compute_diff_with_provenance(&left, &right).unwrap();
        assert_eq!(states(&diff), vec![DiffState::Complex; 3]);
        assert!((0..3).all(|i| diff.combination_index(i) == 0));
    }

    #[test]
    fn test_invalid_does_not_advance() {
        let left: GenomeSequence = vec![GenomeBlock::invalid(REF), GenomeBlock::new(REF)].into();
        let right = repeated(1);

        let mut walk = DiffWalk::new();
        let step = walk.step(0, &left.blocks()[0], &right).unwrap();
        assert_eq!(step.state, DiffState::Unknown);
        assert_eq!(step.support, None);
        assert_eq!(walk.b_index(), 0);

        let step = walk.step(1, &left.blocks()[1], &right).unwrap();
        assert_eq!(step.state, DiffState::Default);
        assert_eq!(walk.b_index(), 1);
    }

    #[test]
    fn test_invalid_right_block() {
        let left = repeated(2);
        let right: GenomeSequence = vec![GenomeBlock::invalid(REF)].into();
        let diff = compute_diff(&left, &right).unwrap();
        assert_eq!(states(&diff), vec![DiffState::Unknown, DiffState::Unknown]);
    }

    #[test]
    fn test_invalid_after_merged_run_keeps_run_flag() {
        // the run flag is only cleared by a comparison, so a following
        // invalid position does not re-trigger the run
        let left: GenomeSequence = vec![
            GenomeBlock::new(REF),
            GenomeBlock::new(REF),
            GenomeBlock::invalid(REF),
            GenomeBlock::new("ACGT"),
        ]
        .into();
        let right: GenomeSequence = vec![GenomeBlock::new(REF).with_mixed_tags(1)].into();
        let diff = compute_diff(&left, &right).unwrap();
        assert_eq!(
            states(&diff),
            vec![
                DiffState::Complex,
                DiffState::Complex,
                DiffState::Unknown,
                DiffState::Simple
            ]
        );
    }

    #[test]
    fn test_cursor_overrun() {
        let left = repeated(3);
        let right = repeated(2);
        let result = compute_diff(&left, &right);
        assert!(matches!(
            result,
            Err(LightningError::BlockCursorOverrun {
                position: 2,
                cursor: 2,
                len: 2
            })
        ));
    }

    #[test]
    fn test_empty_left() {
        let left = GenomeSequence::new();
        let right = GenomeSequence::new();
        let diff = compute_diff(&left, &right).unwrap();
        assert!(diff.is_empty());
        assert_eq!(diff.dump_words_as_type(), format!("{}\n", "0".repeat(32)));
    }

    #[test]
    fn test_provenance_pairs() {
        let left = repeated(5);
        let right: GenomeSequence = vec![
            GenomeBlock::new(REF),
            GenomeBlock::new(REF).with_mixed_tags(2),
            GenomeBlock::invalid(REF),
        ]
        .into();
        let diff = compute_diff_with_provenance(&left, &right).unwrap();
        assert_eq!(
            states(&diff),
            vec![
                DiffState::Default,
                DiffState::Complex,
                DiffState::Complex,
                DiffState::Complex,
                DiffState::Default,
            ]
        );
        // (1, 1) is index 1, (3, 1) is index 7
        let combines: Vec<u8> = (0..5).map(|i| diff.combination_index(i)).collect();
        assert_eq!(combines, vec![1, 7, 7, 7, 1]);
    }

    #[test]
    fn test_provenance_unknown_records_nothing() {
        let left: GenomeSequence = vec![GenomeBlock::invalid(REF), GenomeBlock::new(REF)].into();
        let right = repeated(1);
        let diff = compute_diff_with_provenance(&left, &right).unwrap();
        assert_eq!(diff.combination_index(0), 0);
        assert_eq!(diff.combination_index(1), 1);
    }

    #[test]
    fn test_random_identical_and_mutated() {
        let left = random_sequence(200, 25);
        let diff = compute_diff(&left, &left).unwrap();
        assert_eq!(diff.counts(), [200, 0, 0, 0]);

        let right: GenomeSequence = left.iter().map(mutate_block).collect();
        let diff = compute_diff(&left, &right).unwrap();
        assert_eq!(diff.counts(), [0, 200, 0, 0]);
    }
}
