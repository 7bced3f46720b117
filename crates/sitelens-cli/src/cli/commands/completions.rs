//! `sitelens completions <shell>` and `sitelens man`.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

use crate::cli::Cli;

pub fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "sitelens", &mut io::stdout());
}

pub fn run_man() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(&mut io::stdout())?;
    Ok(())
}
