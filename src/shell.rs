//! Line-oriented shell driving a [`FileSystem`] through its public operations.
//!
//! The current directory is a [`Cursor`] local to [`run`] and handed to every
//! [`execute`] call; the tree itself never knows where the user is.

use std::{
    io::{
        self,
        BufRead,
        Write,
    },
    num::ParseIntError,
    path::PathBuf,
    str::FromStr,
};

use miette::Diagnostic;
use thiserror::Error;
use tracing::{
    debug,
    instrument,
};

use crate::{
    output,
    AddError,
    Cursor,
    Directory,
    File,
    FileSystem,
    GetError,
    Measure,
    Named,
    Node,
    RemoveError,
};

pub const HELP: &str = "\
file <name> <size>   add a file of <size> KB to the current directory
mkdir <name>         add an empty directory to the current directory
cd <name>            enter a directory inside the current directory
cd ..                go one level up
cd /                 go back to the root
rm <name>            remove a file or directory (with its contents)
ls                   list the current directory
tree                 show the whole tree
du                   show total sizes
pwd                  show the current directory
help                 show this help
exit                 leave the shell

Names may contain spaces. '.', '..' and '/' are reserved.";

/// Names claimed by `cd` for navigation.
pub const RESERVED: [&str; 3] = [".", "..", "/"];

// =============================================================================
// ShellError
// =============================================================================

#[derive(Debug, Diagnostic, Error)]
pub enum ShellError {
    #[diagnostic(code(shell::parse), help("type 'help' to list commands"))]
    #[error("unknown command '{command}'")]
    UnknownCommand { command: String },
    #[diagnostic(code(shell::parse), help("type 'help' to see command usage"))]
    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[diagnostic(code(shell::parse), help("'.', '..' and '/' are used by 'cd' and cannot name a node"))]
    #[error("'{name}' is reserved and cannot be used as a name")]
    ReservedName { name: String },
    #[diagnostic(code(shell::size), help("sizes are whole, non-negative numbers of KB"))]
    #[error("invalid size '{value}'")]
    InvalidSize {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[diagnostic(code(shell::add))]
    #[error(transparent)]
    Add(#[from] AddError),
    #[diagnostic(code(shell::remove))]
    #[error(transparent)]
    Remove(#[from] RemoveError),
    #[diagnostic(code(shell::get))]
    #[error(transparent)]
    Get(#[from] GetError),
    #[diagnostic(code(shell::io))]
    #[error("failed to read input or write output")]
    Io(#[from] io::Error),
    #[diagnostic(code(shell::script), help("check that the script exists and is readable"))]
    #[error("failed to open script '{}'", .path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// =============================================================================
// Command
// =============================================================================

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    File { name: String, size: u64 },
    Mkdir { name: String },
    Enter { name: String },
    Up,
    Root,
    Remove { name: String },
    List,
    Tree,
    Usage,
    Pwd,
    Help,
    Exit,
}

// -----------------------------------------------------------------------------
// Command - Parse
// -----------------------------------------------------------------------------

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        match verb {
            "file" | "touch" => parse_file(rest),
            "mkdir" => required("mkdir", rest).map(|name| Self::Mkdir { name }),
            "cd" => Ok(match rest {
                "" | "/" => Self::Root,
                ".." => Self::Up,
                name => Self::Enter {
                    name: name.to_owned(),
                },
            }),
            "rm" => required("rm", rest).map(|name| Self::Remove { name }),
            "ls" => Ok(Self::List),
            "tree" => Ok(Self::Tree),
            "du" => Ok(Self::Usage),
            "pwd" => Ok(Self::Pwd),
            "help" | "?" => Ok(Self::Help),
            "exit" | "quit" => Ok(Self::Exit),
            _ => Err(ShellError::UnknownCommand {
                command: verb.to_owned(),
            }),
        }
    }
}

fn required(command: &'static str, name: &str) -> Result<String, ShellError> {
    match name {
        "" => Err(ShellError::MissingArgument {
            command,
            argument: "name",
        }),
        name if RESERVED.contains(&name) => Err(ShellError::ReservedName {
            name: name.to_owned(),
        }),
        name => Ok(name.to_owned()),
    }
}

// The size is the last word, so names may contain spaces.
fn parse_file(rest: &str) -> Result<Command, ShellError> {
    let (name, size) = rest
        .rsplit_once(char::is_whitespace)
        .ok_or(ShellError::MissingArgument {
            command: "file",
            argument: "name and size",
        })?;

    let name = required("file", name.trim())?;
    let size = size
        .parse::<u64>()
        .map_err(|source| ShellError::InvalidSize {
            value: size.to_owned(),
            source,
        })?;

    Ok(Command::File { name, size })
}


// =============================================================================
// Execute
// =============================================================================

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Applies a single command to the tree, moving `cursor` where needed.
#[instrument(level = "debug", skip(fs, cursor, out))]
pub fn execute<W>(
    fs: &mut FileSystem,
    cursor: &mut Cursor,
    command: Command,
    out: &mut W,
) -> Result<Flow, ShellError>
where
    W: Write,
{
    match command {
        Command::File { name, size } => {
            let dir = cursor.resolve_mut(fs.root_mut())?;
            dir.add(File::new(name.as_str(), size))?;
            output::success(out, &format_args!("added file '{name}' to '{}'", dir.name()))?;
        }
        Command::Mkdir { name } => {
            let dir = cursor.resolve_mut(fs.root_mut())?;
            dir.add(Directory::new(name.as_str()))?;
            output::success(out, &format_args!("added directory '{name}' to '{}'", dir.name()))?;
        }
        Command::Enter { name } => {
            cursor.enter(fs.root(), &name)?;
            output::success(out, &format_args!("now in '{}'", cursor.path(fs.root())))?;
        }
        Command::Up => {
            if cursor.leave() {
                output::success(out, &format_args!("now in '{}'", cursor.path(fs.root())))?;
            } else {
                output::warning(out, "already at the root")?;
            }
        }
        Command::Root => {
            if cursor.reset() {
                output::success(out, "back at the root")?;
            } else {
                output::warning(out, "already at the root")?;
            }
        }
        Command::Remove { name } => {
            let dir = cursor.resolve_mut(fs.root_mut())?;
            dir.remove(&name)?;
            output::success(out, &format_args!("removed '{name}' from '{}'", dir.name()))?;
        }
        Command::List => list(cursor.resolve(fs.root())?, out)?,
        Command::Tree => write!(out, "{}", fs.root())?,
        Command::Usage => {
            output::info(out, &format_args!("total size: {} KB", fs.total_size()))?;

            if !cursor.is_root() {
                let dir = cursor.resolve(fs.root())?;
                output::info(out, &format_args!("'{}': {} KB", dir.name(), dir.total_size()))?;
            }
        }
        Command::Pwd => output::info(out, &cursor.path(fs.root()))?,
        Command::Help => output::info(out, HELP)?,
        Command::Exit => return Ok(Flow::Exit),
    }

    Ok(Flow::Continue)
}

fn list<W>(dir: &Directory, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    if dir.is_empty() {
        return output::info(out, "(empty)");
    }

    dir.children().try_for_each(|child| match child {
        Node::Directory(dir) => output::info(out, &format_args!("{}/", dir.name())),
        Node::File(file) => output::info(out, &format_args!("{} ({} KB)", file.name(), file.size())),
    })
}

// =============================================================================
// Run
// =============================================================================

/// Reads commands from `input` until `exit` or end of input.
///
/// Tree statuses and malformed commands are reported on `out` and the loop
/// carries on. Only I/O failures end it early.
pub fn run<R, W>(fs: &mut FileSystem, input: R, out: &mut W, interactive: bool) -> Result<(), ShellError>
where
    R: BufRead,
    W: Write,
{
    let mut cursor = Cursor::new();
    let mut lines = input.lines();

    if interactive {
        output::header(out, "memtree - type 'help' for commands")?;
    }

    loop {
        if interactive {
            output::prompt(out, &format_args!("{}>", cursor.path(fs.root())))?;
        }

        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| execute(fs, &mut cursor, command, out));

        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err @ (ShellError::Io(_) | ShellError::Script { .. })) => return Err(err),
            Err(err @ (ShellError::Add(_) | ShellError::Remove(_) | ShellError::Get(_))) => {
                debug!(%err, "refused");
                output::warning(out, &err)?;
            }
            Err(err) => output::error(out, &err)?,
        }
    }

    Ok(())
}
