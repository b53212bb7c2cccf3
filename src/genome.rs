//! In-memory genome blocks and block sequences.
//!
//! A [`GenomeSequence`] is an ordered list of [`GenomeBlock`]s, as produced
//! by an upstream assembly step. These are the inputs to the diff walk in
//! [`crate::diff`].
//!
//! ## Block Specs
//!
//! For the command line tool, a block can be written as a short string:
//!
//!  - `GGAA`: a valid block with data `GGAA`.
//!  - `!GGNA`: an invalid block.
//!  - `GGAA+2`: a valid block carrying two mixed tags.

use bytes::Bytes;
use std::fmt;
use std::str::FromStr;

use crate::error::LightningError;
use crate::traits::BlockSequence;

/// A piece of genome data in a longer sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenomeBlock {
    pub valid: bool,
    /// Number of mixed tags; a block with `n` mixed tags covers `n + 1`
    /// positions of the other sequence.
    pub num_mixed_tag: u32,
    pub data: Bytes,
}

impl GenomeBlock {
    /// Create a new valid block with no mixed tags.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            valid: true,
            num_mixed_tag: 0,
            data: data.into(),
        }
    }

    /// Create a new invalid (low confidence) block.
    pub fn invalid(data: impl Into<Bytes>) -> Self {
        Self {
            valid: false,
            num_mixed_tag: 0,
            data: data.into(),
        }
    }

    /// Set the number of mixed tags on this block.
    pub fn with_mixed_tags(mut self, num_mixed_tag: u32) -> Self {
        self.num_mixed_tag = num_mixed_tag;
        self
    }
}

impl FromStr for GenomeBlock {
    type Err = LightningError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (valid, rest) = match spec.strip_prefix('!') {
            Some(rest) => (false, rest),
            None => (true, spec),
        };
        let (data, num_mixed_tag) = match rest.rsplit_once('+') {
            Some((data, tags)) => (data, tags.parse::<u32>()?),
            None => (rest, 0),
        };
        if data.is_empty() {
            return Err(LightningError::InvalidBlockSpec(spec.to_string()));
        }
        Ok(Self {
            valid,
            num_mixed_tag,
            data: Bytes::copy_from_slice(data.as_bytes()),
        })
    }
}

impl fmt::Display for GenomeBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.valid {
            write!(f, "!")?;
        }
        write!(f, "{}", String::from_utf8_lossy(&self.data))?;
        if self.num_mixed_tag > 0 {
            write!(f, "+{}", self.num_mixed_tag)?;
        }
        Ok(())
    }
}

/// A processed genome sequence: an ordered list of [`GenomeBlock`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenomeSequence {
    blocks: Vec<GenomeBlock>,
}

impl GenomeSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the end of this sequence.
    pub fn push_block(&mut self, block: GenomeBlock) {
        self.blocks.push(block)
    }

    pub fn blocks(&self) -> &[GenomeBlock] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GenomeBlock> {
        self.blocks.iter()
    }

    /// Parse a sequence from block specs (see the module docs).
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, LightningError> {
        specs.iter().map(|spec| spec.as_ref().parse()).collect()
    }
}

impl BlockSequence for GenomeSequence {
    fn len(&self) -> usize {
        self.blocks.len()
    }
    fn block(&self, index: usize) -> Option<&GenomeBlock> {
        self.blocks.get(index)
    }
}

impl FromIterator<GenomeBlock> for GenomeSequence {
    fn from_iter<I: IntoIterator<Item = GenomeBlock>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<GenomeBlock>> for GenomeSequence {
    fn from(blocks: Vec<GenomeBlock>) -> Self {
        Self { blocks }
    }
}
