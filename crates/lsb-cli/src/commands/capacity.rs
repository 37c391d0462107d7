use std::path::PathBuf;

use clap::Args;
use lsb_core::LsbCodecOptions;

use crate::CliResult;

/// Shows how much data a container image can take
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// The container image file
    pub container: PathBuf,

    /// Length of the extension stored along with the payload
    #[arg(long, default_value = "3")]
    pub extension_length: u8,
}

impl CapacityArgs {
    pub fn run(self, options: &LsbCodecOptions) -> CliResult<()> {
        let report = lsb_core::commands::capacity(&self.container, options)?;

        println!("{}x{} pixels", report.width, report.height);
        println!("{} bits", report.bits);
        println!(
            "{} bytes of payload with a {} byte extension",
            report.max_payload_bytes(self.extension_length as usize),
            self.extension_length
        );

        Ok(())
    }
}
