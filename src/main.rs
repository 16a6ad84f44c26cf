use std::{
    fs::File,
    io::{
        self,
        BufReader,
    },
};

use clap::Parser;
use memtree::{
    cli::{
        setup_logging,
        Cli,
    },
    shell::{
        self,
        ShellError,
    },
    FileSystem,
};

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let mut fs = FileSystem::new(cli.root);
    let mut out = io::stdout().lock();

    match cli.script {
        Some(path) => {
            let file = File::open(&path).map_err(|source| ShellError::Script { path, source })?;

            shell::run(&mut fs, BufReader::new(file), &mut out, false)?;
        }
        None => shell::run(&mut fs, io::stdin().lock(), &mut out, true)?,
    }

    Ok(())
}
