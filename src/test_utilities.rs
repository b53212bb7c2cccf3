//! Test cases and test utility functions.
//!

use bytes::Bytes;
use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::genome::{GenomeBlock, GenomeSequence};

pub const NUCLEOTIDES: &[u8] = b"ACGT";

// block data length range
pub const MIN_BLOCK_LEN: usize = 1;
pub const MAX_BLOCK_LEN: usize = 250;

/// Build random nucleotide data of length `len`.
pub fn random_nucleotides(len: usize) -> Bytes {
    let mut rng = thread_rng();
    let data: Vec<u8> = (0..len)
        .map(|_| *NUCLEOTIDES.choose(&mut rng).unwrap())
        .collect();
    Bytes::from(data)
}

/// Build a random valid [`GenomeBlock`] with a random data length.
pub fn random_block() -> GenomeBlock {
    let mut rng = thread_rng();
    let len = rng.gen_range(MIN_BLOCK_LEN..=MAX_BLOCK_LEN);
    GenomeBlock::new(random_nucleotides(len))
}

/// Build a random [`GenomeSequence`] of `n` valid blocks of length `block_len`.
pub fn random_sequence(n: usize, block_len: usize) -> GenomeSequence {
    let mut seq = GenomeSequence::new();
    for _ in 0..n {
        seq.push_block(GenomeBlock::new(random_nucleotides(block_len)));
    }
    seq
}

/// Copy a block, changing a single random byte of its data to a different
/// nucleotide.
pub fn mutate_block(block: &GenomeBlock) -> GenomeBlock {
    let mut rng = thread_rng();
    let mut data = block.data.to_vec();
    if data.is_empty() {
        data.push(NUCLEOTIDES[0]);
    } else {
        let i = rng.gen_range(0..data.len());
        let original = data[i];
        let others: Vec<u8> = NUCLEOTIDES
            .iter()
            .copied()
            .filter(|&n| n != original)
            .collect();
        data[i] = *others.choose(&mut rng).unwrap();
    }
    GenomeBlock {
        data: Bytes::from(data),
        ..block.clone()
    }
}
