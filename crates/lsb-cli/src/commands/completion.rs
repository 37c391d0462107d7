use std::io;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::cli::CliArgs;
use crate::CliResult;

/// Generates shell completions
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// The shell to generate completions for
    pub shell: Shell,
}

impl CompletionArgs {
    pub fn run(self) -> CliResult<()> {
        let mut command = CliArgs::command();
        let name = command.get_name().to_string();
        clap_complete::generate(self.shell, &mut command, name, &mut io::stdout());

        Ok(())
    }
}
