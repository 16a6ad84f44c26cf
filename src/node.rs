use std::fmt::{
    self,
    Write,
};

use crate::{
    Directory,
    File,
    Measure,
    Named,
    Render,
};

// =============================================================================
// Node
// =============================================================================

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    Directory(Directory),
    File(File),
}

// -----------------------------------------------------------------------------
// Node - Traits
// -----------------------------------------------------------------------------

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Self::Directory(dir)
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Self::File(file)
    }
}

impl Named for Node {
    fn name(&self) -> &str {
        match self {
            Self::Directory(dir) => dir.name(),
            Self::File(file) => file.name(),
        }
    }
}

impl Measure for Node {
    fn total_size(&self) -> u64 {
        match self {
            Self::Directory(dir) => dir.total_size(),
            Self::File(file) => file.total_size(),
        }
    }
}

impl Render for Node {
    fn render<W>(&self, out: &mut W, depth: usize) -> fmt::Result
    where
        W: Write,
    {
        match self {
            Self::Directory(dir) => dir.render(out, depth),
            Self::File(file) => file.render(out, depth),
        }
    }
}

// -----------------------------------------------------------------------------
// Node - Methods
// -----------------------------------------------------------------------------

impl Node {
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    #[must_use]
    pub const fn as_dir(&self) -> Option<&Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File(_) => None,
        }
    }

    pub const fn as_dir_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File(_) => None,
        }
    }
}
