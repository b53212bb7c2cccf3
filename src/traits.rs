//! Traits used by the lightning library.
//!

use crate::genome::GenomeBlock;

/// Defines functionality common to all ordered, indexable containers of
/// [`GenomeBlock`]s, e.g. [`GenomeSequence`]. The diff walk is generic
/// over this trait.
///
/// [`GenomeSequence`]: crate::genome::GenomeSequence
pub trait BlockSequence {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Retrieve the block at `index`, or `None` past the end.
    fn block(&self, index: usize) -> Option<&GenomeBlock>;
    /// Iterate over all blocks in order.
    fn iter_blocks(&self) -> Box<dyn Iterator<Item = &GenomeBlock> + '_> {
        Box::new((0..self.len()).filter_map(move |index| self.block(index)))
    }
}

impl BlockSequence for [GenomeBlock] {
    fn len(&self) -> usize {
        <[GenomeBlock]>::len(self)
    }
    fn block(&self, index: usize) -> Option<&GenomeBlock> {
        self.get(index)
    }
}

impl BlockSequence for Vec<GenomeBlock> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
    fn block(&self, index: usize) -> Option<&GenomeBlock> {
        self.get(index)
    }
}
