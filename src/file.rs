use std::fmt::{
    self,
    Write,
};

use crate::{
    traits::indent,
    Measure,
    Named,
    Render,
};

// =============================================================================

// File

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct File {
    name: String,
    size: u64,
}

// -----------------------------------------------------------------------------

// File - Create

impl File {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }
}

// -----------------------------------------------------------------------------

// File - Trait Implementations

impl Named for File {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Measure for File {
    fn total_size(&self) -> u64 {
        self.size
    }
}

impl Render for File {
    fn render<W>(&self, out: &mut W, depth: usize) -> fmt::Result
    where
        W: Write,
    {
        indent(out, depth)?;
        writeln!(out, "- File: {} ({} KB)", self.name, self.size)
    }
}
