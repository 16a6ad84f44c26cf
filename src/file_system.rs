use std::ops::{
    Deref,
    DerefMut,
};

use crate::Directory;

/// Name given to the root directory when none is supplied.
pub const DEFAULT_ROOT: &str = "Root";

// =============================================================================
// FileSystem
// =============================================================================

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileSystem {
    root: Directory,
}

// -----------------------------------------------------------------------------
// FileSystem - Traits
// -----------------------------------------------------------------------------

impl Default for FileSystem {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl Deref for FileSystem {
    type Target = Directory;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl DerefMut for FileSystem {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.root
    }
}

// -----------------------------------------------------------------------------
// FileSystem - Methods
// -----------------------------------------------------------------------------

impl FileSystem {
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: Directory::new(root),
        }
    }

    #[must_use]
    pub const fn root(&self) -> &Directory {
        &self.root
    }

    pub const fn root_mut(&mut self) -> &mut Directory {
        &mut self.root
    }
}

#[cfg(test)]
mod tests {
    use super::FileSystem;
    use crate::{
        File,
        Measure,
        Named,
    };

    #[test]
    fn default_root() {
        let fs = FileSystem::default();

        assert_eq!(fs.root().name(), "Root");
        assert_eq!(fs.count(), 0);
    }

    #[test]
    fn deref_to_root() {
        let mut fs = FileSystem::new("top");

        fs.add(File::new("a", 4)).unwrap();

        assert_eq!(fs.root().count(), 1);
        assert_eq!(fs.total_size(), 4);
    }
}
