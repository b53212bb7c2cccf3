//! End-to-end diffs of small genome block sequences.

use lightning::prelude::*;
use std::process::Command;

const REF: &str = "GGGGGGGGAAAAAAAACCCCCCCCC";

fn pad(states: &str) -> String {
    format!("{}{}\n", states, "0".repeat(32 - states.len()))
}

fn blocks(data: &[&'static str]) -> GenomeSequence {
    data.iter().map(|&d| GenomeBlock::new(d)).collect()
}

#[test]
fn test_only_default() {
    let left = blocks(&[REF, REF, REF]);
    let right = blocks(&[REF, REF, REF]);
    let diff = compute_diff(&left, &right).unwrap();
    assert_eq!(diff.dump_words_as_type(), pad("000"));
}

#[test]
fn test_only_simple() {
    let left = blocks(&[
        "GGGGGGGGAAAAAAAACCACCCCCC",
        "GGCGGGGGAAAAAAAACCCCCCCCC",
        "GGGGGGGGAAAGAAAACCCCCCCCC",
    ]);
    let right = blocks(&[REF, REF, REF]);
    let diff = compute_diff(&left, &right).unwrap();
    assert_eq!(diff.dump_words_as_type(), pad("111"));
}

#[test]
fn test_simple_and_invalid() {
    let left: GenomeSequence = vec![
        GenomeBlock::invalid("GGGGGGGGAAAANAAACCACCCCCC"),
        GenomeBlock::new("GGCGGGGGAAAAAAAACCCCCCCCC"),
        GenomeBlock::invalid("GGGGNNGGAAAGAAAACCCCCCCCC"),
    ]
    .into();
    let right: GenomeSequence = vec![
        GenomeBlock::new(REF),
        GenomeBlock::invalid("GGGGGGGGAAAAAAAACCNNCCCCC"),
        GenomeBlock::invalid("GGGGGGGNNAAAAAAACCCCCCCCC"),
    ]
    .into();

    let mut diff = DiffSequence::without_combinations(3);
    let mut walk = DiffWalk::new();
    walk.run(&left, &right, &mut diff).unwrap();
    assert_eq!(diff.dump_words_as_type(), pad("313"));
    // only the middle comparison consumed a right block
    assert_eq!(walk.b_index(), 1);
}

#[test]
fn test_simple_and_complex() {
    let left = blocks(&[
        "GGGGGGGGAAAAAAAACCACCCCCC",
        "GGCGGGGGAAAAAAAACCCCCCCCC",
        "GGGGGGGGAAAGAAAACCCCCCCCC",
        "GGGGGGGGAAAGAAAACCCCCCCCC",
    ]);
    let right: GenomeSequence = vec![
        GenomeBlock::new(REF),
        GenomeBlock::new(REF).with_mixed_tags(1),
        GenomeBlock::new(REF),
    ]
    .into();
    let diff = compute_diff(&left, &right).unwrap();
    assert_eq!(diff.dump_words_as_type(), pad("1221"));
    assert_eq!(diff.get(1), DiffState::Complex);
    assert_eq!(diff.get(3), DiffState::Simple);
}

#[test]
fn test_provenance_dump() {
    let left = blocks(&[REF, REF, REF, REF]);
    let right: GenomeSequence = vec![
        GenomeBlock::new(REF),
        GenomeBlock::new(REF).with_mixed_tags(1),
    ]
    .into();
    let diff = compute_diff_with_provenance(&left, &right).unwrap();
    assert_eq!(diff.dump_words_as_type(), pad("0220"));
    // (1, 1) is index 1 and (2, 1) is index 3
    assert_eq!(
        diff.dump_combines_as_type(),
        format!("1331{}\n", "0".repeat(12))
    );
}

#[test]
fn test_cli_diff() {
    let output = Command::new(env!("CARGO_BIN_EXE_lightning"))
        .args(["diff", "--left", "!GGNA", "GGCA", "!GGNN"])
        .args(["--right", "GGAA", "!GGNA", "!GGAN"])
        .output()
        .expect("lightning diff failed");
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), pad("313"));
}

#[test]
fn test_cli_combination() {
    let output = Command::new(env!("CARGO_BIN_EXE_lightning"))
        .args(["combination", "3", "1"])
        .output()
        .expect("lightning combination failed");
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "7\n");
}

#[test]
fn test_cli_overrun_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_lightning"))
        .args(["diff", "--left", "A", "A", "--right", "A"])
        .output()
        .expect("lightning diff failed");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}
