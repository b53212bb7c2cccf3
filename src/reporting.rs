//! Types for standardized reports to the user about diff operations.
//!
//! The goal of this is to inform users of e.g. how many right blocks were
//! left unconsumed by a diff walk, which usually means the two inputs were
//! not assembled consistently.
//!

use std::fmt;

/// The [`CommandOutput<U>`] type output is generic over some data output
/// from a command, and a [`Report`] that reports information to the user.
pub struct CommandOutput<U> {
    value: U,
    report: Report,
}

impl<U> CommandOutput<U> {
    pub fn new(value: U, report: Report) -> Self {
        Self { value, report }
    }

    pub fn value(&self) -> &U {
        &self.value
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn into_parts(self) -> (U, Report) {
        (self.value, self.report)
    }
}

/// A type to (semi) standardize reporting to the user.
#[derive(Debug, Default)]
pub struct Report {
    entries: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_issue(&mut self, message: String) {
        self.entries.push(message)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}
