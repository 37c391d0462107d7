use clap::Parser;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = lsb_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();

    match args.command {
        Commands::Embed(embed) => embed.run(&options),
        Commands::Extract(extract) => extract.run(&options),
        Commands::ExtractRaw(extract_raw) => extract_raw.run(&options),
        Commands::Capacity(capacity) => capacity.run(&options),
        Commands::Completion(completion) => completion.run(),
    }
}
