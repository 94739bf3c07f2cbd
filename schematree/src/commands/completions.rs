use std::io;

use clap::CommandFactory;
use clap_complete::Shell;
use eyre::Result;

use super::Cli;

pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "schematree", &mut io::stdout());
    Ok(())
}
