
pub mod bits;
pub mod commands;
pub mod diff;
pub mod error;
pub mod genome;
pub mod reporting;
pub mod test_utilities;
pub mod traits;

/// Index of a logical position (block) in a diff sequence.
pub type Position = u32;

pub mod prelude {
    pub use crate::bits::{combination::combination_index, DiffSequence, DiffState};
    pub use crate::diff::{compute_diff, compute_diff_with_provenance, DiffWalk};
    pub use crate::error::LightningError;
    pub use crate::genome::{GenomeBlock, GenomeSequence};
    pub use crate::traits::BlockSequence;
}
