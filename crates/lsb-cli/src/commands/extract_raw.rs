use std::path::PathBuf;

use clap::Args;
use lsb_core::LsbCodecOptions;

use crate::CliResult;

/// Dumps all raw data carried by an image, without looking for an embedded file
#[derive(Args, Debug)]
pub struct ExtractRawArgs {
    /// Source image that contains secret data
    pub container: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl ExtractRawArgs {
    pub fn run(self, options: &LsbCodecOptions) -> CliResult<()> {
        lsb_core::commands::extract_raw(&self.container, &self.output_file, options)
    }
}
