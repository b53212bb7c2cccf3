//! The [`LightningError`] `enum` definition and error messages.
//!
use crate::Position;
use std::num::ParseIntError;
use thiserror::Error;

/// The [`LightningError`] defines the standard set of errors that should
/// be passed to the user.
#[derive(Debug, Error)]
pub enum LightningError {
    // Diff walk errors
    #[error("Right sequence cursor overran at position {position}: cursor {cursor} is past the right sequence length {len}")]
    BlockCursorOverrun {
        position: Position,
        cursor: usize,
        len: usize,
    },
    #[error("Sequence of {0} blocks is too long to index with a Position")]
    SequenceTooLong(usize),

    // Block spec parsing errors
    #[error("Invalid genome block specification: '{0}'")]
    InvalidBlockSpec(String),
    #[error("Integer parsing error: {0}")]
    ParseIntError(#[from] ParseIntError),

    // Command line tool related errors
    #[error("Command line argument error: {0}")]
    ArgumentError(#[from] clap::error::Error),
}
