use std::path::PathBuf;

use clap::Args;
use lsb_core::LsbCodecOptions;

use crate::CliResult;

/// Extracts a file from a container image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// The container image file
    pub container: PathBuf,

    /// The output file for the extracted data, the embedded extension is appended
    #[arg(short, long, default_value = "extracted")]
    pub output: PathBuf,
}

impl ExtractArgs {
    pub fn run(self, options: &LsbCodecOptions) -> CliResult<()> {
        let written = lsb_core::commands::extract(&self.container, &self.output, options)?;
        println!("{}", written.display());

        Ok(())
    }
}
