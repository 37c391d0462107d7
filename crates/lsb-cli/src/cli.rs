use clap::{Parser, Subcommand};
use lsb_core::{LsbCodecOptions, Traversal};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(name = "lsb", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// The number of least significant bits of a color channel used for embedding
    #[arg(short, long, global = true, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=8))]
    pub lsbs: u8,

    /// Scatters the data over the whole image in an order derived from this seed
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Use the alpha channel for embedding too
    #[arg(long, global = true)]
    pub with_alpha: bool,

    /// Visit the pixels column by column instead of row by row
    #[arg(long, global = true)]
    pub column_major: bool,

    /// Experimental: image color channel step increment
    #[arg(long = "x-color-step-increment", global = true, default_value = "1", value_parser = clap::value_parser!(u8).range(1..))]
    pub color_step_increment: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> LsbCodecOptions {
        let traversal = if self.column_major {
            Traversal::ColumnMajor
        } else {
            Traversal::RowMajor
        };

        LsbCodecOptions::default()
            .with_traversal(traversal)
            .with_alpha_channel(self.with_alpha)
            .with_color_channel_step_increment(self.color_step_increment as usize)
            .with_bits_per_channel(self.lsbs)
            .with_seed(self.seed)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Embed(embed::EmbedArgs),
    Extract(extract::ExtractArgs),
    ExtractRaw(extract_raw::ExtractRawArgs),
    Capacity(capacity::CapacityArgs),
    Completion(completion::CompletionArgs),
}
