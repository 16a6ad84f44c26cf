use std::{
    fmt::{
        self,
        Write,
    },
    slice::Iter,
};

use tracing::{
    debug,
    instrument,
};

use crate::{
    error::{
        AddError,
        GetError,
        RemoveError,
    },
    traits::indent,
    Measure,
    Named,
    Node,
    Render,
};

// =============================================================================

// Directory

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Directory {
    name: String,
    children: Vec<Node>,
}

// -----------------------------------------------------------------------------

// Directory - Trait Implementations

impl Named for Directory {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Measure for Directory {
    fn total_size(&self) -> u64 {
        self.children
            .iter()
            .map(Measure::total_size)
            .fold(0, u64::saturating_add)
    }
}

impl Render for Directory {
    fn render<W>(&self, out: &mut W, depth: usize) -> fmt::Result
    where
        W: Write,
    {
        indent(out, depth)?;
        writeln!(out, "+ Folder: {}", self.name)?;

        self.children
            .iter()
            .try_for_each(|child| child.render(out, depth + 1))
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

// -----------------------------------------------------------------------------

// Directory - Create

impl Directory {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }
}


// -----------------------------------------------------------------------------

// Directory - Add/Remove

impl Directory {
    /// Appends `node` unless a direct child already carries its name, in which
    /// case the directory is left untouched.
    #[instrument(level = "debug", skip(self, node), fields(parent = %self.name))]
    pub fn add(&mut self, node: impl Into<Node>) -> Result<(), AddError> {
        let node = node.into();

        if self.contains(node.name()) {
            debug!(child = node.name(), "duplicate name, not added");

            return Err(AddError::DuplicateName {
                name: node.name().to_owned(),
                parent: self.name.clone(),
            });
        }

        debug!(child = node.name(), "added");
        self.children.push(node);

        Ok(())
    }

    /// Detaches the first direct child named `name`, together with everything
    /// below it, and hands it back.
    #[instrument(level = "debug", skip(self), fields(parent = %self.name))]
    pub fn remove(&mut self, name: &str) -> Result<Node, RemoveError> {
        match self.position(name) {
            Some(index) => {
                debug!("removed");
                Ok(self.children.remove(index))
            }
            None => Err(RemoveError::NotFound {
                name: name.to_owned(),
                parent: self.name.clone(),
            }),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|child| child.name() == name)
    }
}


// -----------------------------------------------------------------------------

// Directory - Get

impl Directory {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name() == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Looks up a direct child directory. A file with the same name does not
    /// match, and grandchildren are never searched.
    #[instrument(level = "trace", skip(self), fields(parent = %self.name))]
    pub fn get_dir(&self, name: &str) -> Result<&Self, GetError> {
        self.children
            .iter()
            .filter_map(Node::as_dir)
            .find(|dir| dir.name == name)
            .ok_or_else(|| not_found(name, &self.name))
    }

    #[instrument(level = "trace", skip(self), fields(parent = %self.name))]
    pub fn get_dir_mut(&mut self, name: &str) -> Result<&mut Self, GetError> {
        let parent = &self.name;

        self.children
            .iter_mut()
            .filter_map(Node::as_dir_mut)
            .find(|dir| dir.name == name)
            .ok_or_else(|| not_found(name, parent))
    }
}

fn not_found(name: &str, parent: &str) -> GetError {
    GetError::NotFound {
        name: name.to_owned(),
        parent: parent.to_owned(),
    }
}

#[cfg(test)]
mod get_tests {
    use super::Directory;
    use crate::{
        File,
        GetError,
        Named,
    };

    #[test]
    fn get_dir_direct_child() {
        let mut dir = Directory::new("root");
        dir.add(Directory::new("docs")).unwrap();

        assert_eq!(dir.get_dir("docs").map(Named::name), Ok("docs"));
        assert_eq!(
            dir.get_dir("missing"),
            Err(GetError::NotFound {
                name: String::from("missing"),
                parent: String::from("root"),
            })
        );
    }

    #[test]
    fn get_dir_ignores_files() {
        let mut dir = Directory::new("root");
        dir.add(File::new("notes", 3)).unwrap();

        assert!(dir.contains("notes"));
        assert!(dir.get_dir("notes").is_err());
    }

    #[test]
    fn get_dir_is_shallow() {
        let mut docs = Directory::new("docs");
        docs.add(Directory::new("inner")).unwrap();

        let mut dir = Directory::new("root");
        dir.add(docs).unwrap();

        assert!(dir.get_dir("inner").is_err());
    }

    #[test]
    fn get_dir_mut_allows_nested_mutation() {
        let mut dir = Directory::new("root");
        dir.add(Directory::new("docs")).unwrap();

        dir.get_dir_mut("docs")
            .unwrap()
            .add(File::new("b.txt", 5))
            .unwrap();

        assert_eq!(dir.get_dir("docs").unwrap().count(), 1);
    }
}

// -----------------------------------------------------------------------------

// Directory - Count

impl Directory {
    pub fn children(&self) -> Iter<'_, Node> {
        self.children.iter()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn count_dir(&self) -> usize {
        self.count_predicate(Node::is_dir)
    }

    #[must_use]
    pub fn count_file(&self) -> usize {
        self.count_predicate(Node::is_file)
    }

    fn count_predicate(&self, predicate: impl Fn(&Node) -> bool) -> usize {
        self.children
            .iter()
            .filter(|child| predicate(child))
            .count()
    }
}

#[cfg(test)]
mod count_tests {
    use super::Directory;
    use crate::File;

    #[test]
    fn count_empty() {
        let dir = Directory::new("root");

        assert_eq!(dir.count(), 0);
        assert_eq!(dir.count_dir(), 0);
        assert_eq!(dir.count_file(), 0);
    }

    #[test]
    fn count_mixed() {
        let mut dir = Directory::new("root");
        dir.add(File::new("a", 1)).unwrap();
        dir.add(Directory::new("b")).unwrap();
        dir.add(File::new("c", 1)).unwrap();

        assert_eq!(dir.count(), 3);
        assert_eq!(dir.count_dir(), 1);
        assert_eq!(dir.count_file(), 2);
    }
}

// -----------------------------------------------------------------------------

// Directory - Size/Render
