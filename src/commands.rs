//! Command functions for the `lightning` command line tool.
//!

use clap::ValueEnum;

use crate::{
    bits::{combination::combination_index, DiffSequence, DiffState},
    diff::DiffWalk,
    error::LightningError,
    genome::GenomeSequence,
    reporting::{CommandOutput, Report},
    traits::BlockSequence,
    Position,
};

/// How to render a [`DiffSequence`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// One digit per position.
    #[default]
    Type,
    /// Raw bits of each word, least significant first.
    Bits,
}

/// Diff two sequences given as block specs (see [`crate::genome`]).
///
/// If `provenance` is set, the combination index of each position's
/// supporting-count pair is recorded as well.
pub fn lightning_diff<S: AsRef<str>>(
    left: &[S],
    right: &[S],
    provenance: bool,
) -> Result<CommandOutput<DiffSequence>, LightningError> {
    let left = GenomeSequence::from_specs(left)?;
    let right = GenomeSequence::from_specs(right)?;
    let length =
        Position::try_from(left.len()).map_err(|_| LightningError::SequenceTooLong(left.len()))?;

    let mut diff = if provenance {
        DiffSequence::new(length)
    } else {
        DiffSequence::without_combinations(length)
    };
    let mut walk = DiffWalk::new();
    walk.run(&left, &right, &mut diff)?;

    // For reporting stuff to the user.
    let mut report = Report::new();

    let unconsumed = right.len() - walk.b_index();
    if unconsumed > 0 {
        report.add_issue(format!(
            "{} of {} right blocks were not compared against any left block",
            unconsumed,
            right.len()
        ))
    }

    if provenance {
        let unrecorded = (0..length)
            .filter(|&i| diff.get(i) != DiffState::Unknown && diff.combination_index(i) == 0)
            .count();
        if unrecorded > 0 {
            report.add_issue(format!(
                "{} positions have a supporting-count pair with no predefined combination",
                unrecorded
            ))
        }
    }

    Ok(CommandOutput::new(diff, report))
}

/// Render the states of a [`DiffSequence`], followed by its combination
/// indices if it has a combine plane.
pub fn render_diff(diff: &DiffSequence, format: DumpFormat) -> String {
    match format {
        DumpFormat::Type => diff.dump_words_as_type() + &diff.dump_combines_as_type(),
        DumpFormat::Bits => diff.dump_words_as_bits() + &diff.dump_combines_as_bits(),
    }
}

/// Summarize the number of positions in each [`DiffState`].
pub fn summarize_diff(diff: &DiffSequence) -> String {
    let counts = diff.counts();
    DiffState::ALL
        .iter()
        .map(|state| format!("{:?}={}", state, counts[state.code() as usize]))
        .collect::<Vec<_>>()
        .join("\t")
}

/// Look up the combination index of a supporting-count pair.
pub fn lightning_combination(first: u32, second: u32) -> CommandOutput<u8> {
    let mut report = Report::new();
    let index = combination_index(first, second);
    if index == 0 {
        report.add_issue(format!(
            "({}, {}) is not a predefined combination",
            first, second
        ))
    }
    CommandOutput::new(index, report)
}
