use std::path::PathBuf;

use clap::Args;
use lsb_core::LsbCodecOptions;

use crate::CliResult;

/// Embeds a file into a container image
#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// The input file to embed, its extension is stored along
    pub input: PathBuf,

    /// The container image file, used readonly
    pub container: PathBuf,

    /// The output file for the embedded image, its extension picks the image format
    #[arg(short, long, default_value = "embedded.png")]
    pub output: PathBuf,
}

impl EmbedArgs {
    pub fn run(self, options: &LsbCodecOptions) -> CliResult<()> {
        lsb_core::commands::embed(&self.input, &self.container, &self.output, options)
    }
}
