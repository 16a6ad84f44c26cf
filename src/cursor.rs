use tracing::{
    debug,
    instrument,
};

use crate::{
    Directory,
    GetError,
    Named,
};

// =============================================================================
// Cursor
// =============================================================================

/// A rebindable "current directory" that owns nothing in the tree.
///
/// The cursor stores the names of the directories between the root and the
/// current directory, and is resolved against a root on every use. Only
/// single-level moves are offered: into a direct child, one level up, or back
/// to the root.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    trail: Vec<String>,
}

// -----------------------------------------------------------------------------
// Cursor - Resolve
// -----------------------------------------------------------------------------

impl Cursor {
    #[must_use]
    pub const fn new() -> Self {
        Self { trail: Vec::new() }
    }

    pub fn resolve<'a>(&self, root: &'a Directory) -> Result<&'a Directory, GetError> {
        self.trail
            .iter()
            .try_fold(root, |dir, name| dir.get_dir(name))
    }

    pub fn resolve_mut<'a>(&self, root: &'a mut Directory) -> Result<&'a mut Directory, GetError> {
        self.trail
            .iter()
            .try_fold(root, |dir, name| dir.get_dir_mut(name))
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.trail.is_empty()
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.trail.len()
    }

    /// Absolute path of the current directory, starting with the root name.
    #[must_use]
    pub fn path(&self, root: &Directory) -> String {
        std::iter::once(root.name())
            .chain(self.trail.iter().map(String::as_str))
            .fold(String::new(), |path, name| path + "/" + name)
    }
}

// -----------------------------------------------------------------------------
// Cursor - Move
// -----------------------------------------------------------------------------

impl Cursor {
    #[instrument(level = "debug", skip(self, root))]
    pub fn enter(&mut self, root: &Directory, name: &str) -> Result<(), GetError> {
        self.resolve(root)?.get_dir(name)?;
        self.trail.push(name.to_owned());

        debug!(depth = self.depth(), "entered");

        Ok(())
    }

    pub fn leave(&mut self) -> bool {
        self.trail.pop().is_some()
    }

    pub fn reset(&mut self) -> bool {
        let moved = !self.is_root();
        self.trail.clear();
        moved
    }
}
